//! MTC Client - HTTP client for the tuition-center backend
//!
//! Provides the [`HttpClient`] transport trait with a network implementation
//! (reqwest) and, behind the `in-process` feature, an in-memory implementation
//! that calls an axum `Router` directly. [`MtcApi`] layers the typed backend
//! endpoints on top of any transport.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use api::MtcApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{FileSessionStore, MemorySession, SessionError, SessionProvider, StoredSession};

// Re-export shared types for convenience
pub use shared::models;
