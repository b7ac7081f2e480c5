//! Error types for the collaborator boundaries
//!
//! Only the external collaborators can fail at the system boundary; the
//! classifier, validators and state machine are total. Callers catch these
//! errors and convert them into conversational apologies.

use thiserror::Error;

/// Outbound message delivery failure.
#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("delivery timed out")]
    Timeout,
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Complaint persistence failure.
#[derive(Debug, Error)]
pub enum ComplaintStoreError {
    /// The generated ticket ID already exists. Callers regenerate and retry.
    #[error("ticket ID already exists")]
    Conflict,
    #[error("store timed out")]
    Timeout,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ComplaintStoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ComplaintStoreError::Conflict)
    }
}

/// Case-status lookup failure.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("lookup timed out")]
    Timeout,
    #[error("status provider unavailable: {0}")]
    Unavailable(String),
}
