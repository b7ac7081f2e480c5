//! Complaint persistence interface

use async_trait::async_trait;

use crate::complaint::ComplaintRecord;
use crate::error::ComplaintStoreError;

/// Persists finalized complaint records.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Store a record, returning the stored ID. Must surface
    /// [`ComplaintStoreError::Conflict`] when the record's ticket ID already
    /// exists so the caller can regenerate and retry.
    async fn create(&self, record: &ComplaintRecord) -> Result<String, ComplaintStoreError>;
}
