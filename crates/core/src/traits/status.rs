//! Case-status lookup interface
//!
//! Backed by the government portal adapter in production; best-effort and
//! fully mockable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// Human-readable status of a filed complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub ticket_id: String,
    pub status: String,
    pub filed_on: String,
    pub assigned_to: String,
    pub last_update: String,
}

/// Result of a status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    Found(StatusSummary),
    NotFound,
}

/// Looks up the current status of a complaint by ticket ID.
#[async_trait]
pub trait CaseStatusProvider: Send + Sync {
    async fn lookup(&self, ticket_id: &str) -> Result<CaseStatus, StatusError>;
}
