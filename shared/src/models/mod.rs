//! Data models
//!
//! Shared between the backend API and the portal.
//! Field names follow the backend's camelCase JSON; ids use the `_id` key.

pub mod center;
pub mod hadiya;
pub mod tutor;

// Re-exports
pub use center::*;
pub use hadiya::*;
pub use tutor::*;
