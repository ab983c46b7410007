//! Claims domain errors

use std::fmt;
use thiserror::Error;

use core_kernel::PortError;

/// Submission inputs the claimant must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Image,
    Description,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Image => f.write_str("image"),
            MissingField::Description => f.write_str("description"),
        }
    }
}

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("No signed-in user")]
    Unauthenticated,

    #[error("Missing input: {0}")]
    MissingInput(MissingField),

    #[error("Processing failure: {0}")]
    ProcessingFailure(String),

    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl ClaimError {
    /// Notice text shown to the claimant
    pub fn user_message(&self) -> String {
        match self {
            ClaimError::Unauthenticated => "You must be logged in to submit a claim.".to_string(),
            ClaimError::MissingInput(MissingField::Image) => {
                "Please upload a photo of the damage.".to_string()
            }
            ClaimError::MissingInput(MissingField::Description) => {
                "Please describe the damage.".to_string()
            }
            ClaimError::ClaimNotFound(_) => "That claim could not be found.".to_string(),
            ClaimError::InvalidStatusTransition { from, to } => {
                format!("A {} claim cannot be marked {}.", from, to)
            }
            ClaimError::ProcessingFailure(_) | ClaimError::Store(_) => {
                "Failed to process claim. Please try again.".to_string()
            }
        }
    }
}
