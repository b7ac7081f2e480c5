//! Extracted entity value object
//!
//! Transient, per-message result of the entity extractor. Each entity is
//! independently optional; values are folded into session fields only when
//! the state machine accepts them.

use serde::{Deserialize, Serialize};

/// Structured values pulled out of a single free-text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// UTR / transaction reference (12-16 digit run)
    pub utr_number: Option<String>,
    /// Indian mobile number (10 digits starting 6-9)
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Currency amount, optionally prefixed with the rupee sign
    pub amount: Option<String>,
    /// Date in `D[/-]M[/-]YYYY`-like form
    pub date: Option<String>,
    /// Complaint ticket ID (`CS-` or `NCRP-` form)
    pub ticket_id: Option<String>,
}

impl ExtractedEntities {
    /// True when no entity matched.
    pub fn is_empty(&self) -> bool {
        self.utr_number.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.ticket_id.is_none()
    }
}
