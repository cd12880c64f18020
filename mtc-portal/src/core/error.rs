//! Portal error types

use thiserror::Error;

use crate::views::onboarding::FieldErrors;

/// Errors raised by the portal view-models
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Client error: {0}")]
    Client(#[from] mtc_client::ClientError),

    #[error("Session error: {0}")]
    Session(#[from] mtc_client::SessionError),

    #[error("Form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Invalid period: month {month}, year {year}")]
    InvalidPeriod { month: u32, year: i32 },

    #[error("No data to export")]
    NothingToExport,

    #[error("Tutor {0} is not in the current report")]
    UnknownTutor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PortalResult<T> = Result<T, PortalError>;
