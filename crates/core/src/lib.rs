//! Core types and collaborator traits for the intake engine
//!
//! This crate provides the foundational types used across all other crates:
//! - Closed intent/platform/branch enumerations
//! - Conversation stages, complaint fields and the per-user session record
//! - Extracted entity and complaint record value objects
//! - Outbound response types (text + quick replies)
//! - Collaborator traits for the messaging channel, complaint persistence
//!   and case-status lookup
//! - Error types for the collaborator boundaries

pub mod complaint;
pub mod conversation;
pub mod entities;
pub mod error;
pub mod intent;
pub mod pii;
pub mod response;
pub mod traits;

pub use complaint::{ComplaintRecord, RecordError, COMPLAINT_SOURCE};
pub use conversation::{ComplaintField, ConversationStage, Session, FIELD_SEQUENCE};
pub use entities::ExtractedEntities;
pub use error::{ComplaintStoreError, MessengerError, StatusError};
pub use intent::{FraudBranch, Intent, Platform};
pub use pii::{mask_email, mask_phone};
pub use response::{QuickReply, Response};
pub use traits::{CaseStatus, CaseStatusProvider, ComplaintStore, OutboundMessenger, StatusSummary};
