//! Shared types for the MTC tuition portal
//!
//! Wire models exchanged with the tuition-center backend. Used by
//! `mtc-client` (request/response bodies) and `mtc-portal` (view-models).

pub mod models;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
