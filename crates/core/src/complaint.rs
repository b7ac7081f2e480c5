//! Complaint record construction
//!
//! A `ComplaintRecord` is only constructible from a session that has passed
//! through every mandatory field for its branch. The persistence
//! collaborator owns storage; this module owns construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversation::{ComplaintField, Session, FIELD_SEQUENCE};
use crate::intent::FraudBranch;

/// Source tag attached to records created through the conversational flow.
pub const COMPLAINT_SOURCE: &str = "conversational";

/// Finalized, immutable complaint ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub ticket_id: String,
    pub fraud_branch: FraudBranch,
    /// Branch-specific sub-type chosen from the category menu
    pub fraud_type: String,
    pub incident_description: String,
    pub incident_date: String,
    pub incident_time: String,
    pub amount_lost: String,
    pub suspect_info: String,
    pub suspect_contact: String,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub reporter_email: String,
    pub location: String,
    pub police_report_filed: String,
    pub additional_info: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Why a record could not be assembled from a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("session has no fraud branch")]
    MissingBranch,
    #[error("mandatory field missing: {0}")]
    MissingField(ComplaintField),
}

impl ComplaintRecord {
    /// Assemble a record from a completed session and a freshly generated
    /// ticket ID. Fails if the branch or any mandatory field is absent.
    pub fn from_session(session: &Session, ticket_id: impl Into<String>) -> Result<Self, RecordError> {
        let branch = session.branch.ok_or(RecordError::MissingBranch)?;

        let require = |field: ComplaintField| -> Result<String, RecordError> {
            session
                .field(field)
                .map(str::to_string)
                .ok_or(RecordError::MissingField(field))
        };

        for field in FIELD_SEQUENCE {
            if session.field(field).is_none() {
                return Err(RecordError::MissingField(field));
            }
        }

        Ok(Self {
            ticket_id: ticket_id.into(),
            fraud_branch: branch,
            fraud_type: require(ComplaintField::FraudType)?,
            incident_description: require(ComplaintField::IncidentDescription)?,
            incident_date: require(ComplaintField::IncidentDate)?,
            incident_time: require(ComplaintField::IncidentTime)?,
            amount_lost: require(ComplaintField::AmountLost)?,
            suspect_info: require(ComplaintField::SuspectInfo)?,
            suspect_contact: require(ComplaintField::SuspectContact)?,
            reporter_name: require(ComplaintField::ReporterName)?,
            reporter_phone: require(ComplaintField::ReporterPhone)?,
            reporter_email: require(ComplaintField::ReporterEmail)?,
            location: require(ComplaintField::Location)?,
            police_report_filed: require(ComplaintField::PoliceReportFiled)?,
            additional_info: require(ComplaintField::AdditionalInfo)?,
            source: COMPLAINT_SOURCE.to_string(),
            created_at: Utc::now(),
        })
    }
}
