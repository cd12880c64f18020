//! MTC tuition portal
//!
//! Headless view-models for the admin and tutor screens, backed by
//! [`mtc_client`].

pub mod cli;
pub mod core;
pub mod utils;
pub mod views;

pub use crate::core::{PortalConfig, PortalError, PortalResult};
