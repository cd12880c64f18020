//! Tutor dashboard shell
//!
//! Tab selection plus a sidebar that follows the viewport width. State lives
//! in a `watch` channel so renderers can subscribe to changes.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Widths below this are treated as mobile
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const SHELL_TITLE: &str = "MTC Tutor Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Students,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [Self::Overview, Self::Students];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Students => "students",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Students => "Students",
        }
    }

    /// Unknown ids fall back to the overview
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub active_tab: DashboardTab,
    pub sidebar_open: bool,
    pub is_mobile: bool,
    pub viewport_width: u32,
}

impl ShellState {
    fn at_width(width: u32) -> Self {
        let is_mobile = width < MOBILE_BREAKPOINT;
        Self {
            active_tab: DashboardTab::Overview,
            sidebar_open: !is_mobile,
            is_mobile,
            viewport_width: width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TutorDashboardShell {
    state: Arc<watch::Sender<ShellState>>,
}

impl TutorDashboardShell {
    pub fn new(viewport_width: u32) -> Self {
        let (tx, _rx) = watch::channel(ShellState::at_width(viewport_width));
        Self {
            state: Arc::new(tx),
        }
    }

    pub fn state(&self) -> ShellState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShellState> {
        self.state.subscribe()
    }

    /// Apply a viewport width: sidebar open at or above the breakpoint,
    /// closed below it
    pub fn resize(&self, width: u32) {
        self.state.send_modify(|s| {
            s.viewport_width = width;
            s.is_mobile = width < MOBILE_BREAKPOINT;
            s.sidebar_open = !s.is_mobile;
        });
    }

    /// Flip the sidebar; only mobile layouts expose the toggle
    pub fn toggle_sidebar(&self) {
        self.state.send_if_modified(|s| {
            if !s.is_mobile {
                return false;
            }
            s.sidebar_open = !s.sidebar_open;
            true
        });
    }

    /// Switch tabs, closing the sidebar on mobile
    pub fn select_tab(&self, tab: DashboardTab) {
        self.state.send_modify(|s| {
            s.active_tab = tab;
            if s.is_mobile {
                s.sidebar_open = false;
            }
        });
    }

    pub fn select_tab_id(&self, id: &str) {
        self.select_tab(DashboardTab::from_id(id));
    }

    /// Follow a stream of viewport widths until its sender is dropped
    pub fn spawn_viewport_listener(&self, mut widths: watch::Receiver<u32>) -> JoinHandle<()> {
        let shell = self.clone();
        tokio::spawn(async move {
            loop {
                let width = *widths.borrow_and_update();
                shell.resize(width);
                if widths.changed().await.is_err() {
                    tracing::debug!("Viewport source closed");
                    break;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids() {
        assert_eq!(DashboardTab::from_id("students"), DashboardTab::Students);
        assert_eq!(DashboardTab::from_id("settings"), DashboardTab::Overview);
        assert_eq!(DashboardTab::Overview.label(), "Dashboard");
    }

    #[test]
    fn test_resize_forces_sidebar() {
        let shell = TutorDashboardShell::new(1024);
        assert!(shell.state().sidebar_open);
        assert!(!shell.state().is_mobile);

        shell.resize(767);
        assert!(shell.state().is_mobile);
        assert!(!shell.state().sidebar_open);

        shell.toggle_sidebar();
        assert!(shell.state().sidebar_open);

        shell.resize(768);
        assert!(!shell.state().is_mobile);
        assert!(shell.state().sidebar_open);
    }

    #[test]
    fn test_toggle_ignored_on_desktop() {
        let shell = TutorDashboardShell::new(1280);
        shell.toggle_sidebar();
        assert!(shell.state().sidebar_open);
    }

    #[test]
    fn test_select_tab_closes_mobile_sidebar() {
        let shell = TutorDashboardShell::new(400);
        shell.toggle_sidebar();
        shell.select_tab_id("students");
        let state = shell.state();
        assert_eq!(state.active_tab, DashboardTab::Students);
        assert!(!state.sidebar_open);

        let desktop = TutorDashboardShell::new(900);
        desktop.select_tab(DashboardTab::Students);
        assert!(desktop.state().sidebar_open);
    }
}
