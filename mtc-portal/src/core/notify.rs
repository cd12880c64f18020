//! Transient user notifications (toasts)
//!
//! Views push toasts here instead of failing; every toast is also logged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "toast");
        self.push(ToastLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "toast");
        self.push(ToastLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "toast");
        self.push(ToastLevel::Error, message);
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        self.toasts.push(Toast { level, message });
    }

    /// Pending toasts, oldest first
    pub fn pending(&self) -> &[Toast] {
        &self.toasts
    }

    /// Take all pending toasts
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
