//! Error types for register operations.

use shared::{DonationId, DraftValidationError};
use thiserror::Error;

/// A submit that failed validation. Nothing was committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("donation draft rejected with {} problem(s): {}", .errors.len(), summarize(.errors))]
pub struct DraftRejected {
    pub errors: Vec<DraftValidationError>,
}

fn summarize(errors: &[DraftValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("no donation with id {0}")]
    UnknownDonation(DonationId),

    #[error(transparent)]
    DraftRejected(#[from] DraftRejected),
}

pub type Result<T> = std::result::Result<T, RegisterError>;
