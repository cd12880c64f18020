//! Portal core: configuration, errors, logging and notifications

pub mod config;
pub mod error;
pub mod logger;
pub mod notify;

pub use config::PortalConfig;
pub use error::{PortalError, PortalResult};
pub use notify::{Notifications, Toast, ToastLevel};
