//! Conversation stages, complaint fields and the per-user session record

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::FraudBranch;

/// Fields collected during the complaint flow, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintField {
    FraudType,
    IncidentDescription,
    IncidentDate,
    IncidentTime,
    AmountLost,
    SuspectInfo,
    SuspectContact,
    ReporterName,
    ReporterPhone,
    ReporterEmail,
    Location,
    PoliceReportFiled,
    AdditionalInfo,
}

/// The fixed collection order. `FraudType` is captured earlier, during the
/// branch-selection stage, so it is not part of this sequence.
pub const FIELD_SEQUENCE: [ComplaintField; 12] = [
    ComplaintField::IncidentDescription,
    ComplaintField::IncidentDate,
    ComplaintField::IncidentTime,
    ComplaintField::AmountLost,
    ComplaintField::SuspectInfo,
    ComplaintField::SuspectContact,
    ComplaintField::ReporterName,
    ComplaintField::ReporterPhone,
    ComplaintField::ReporterEmail,
    ComplaintField::Location,
    ComplaintField::PoliceReportFiled,
    ComplaintField::AdditionalInfo,
];

impl ComplaintField {
    /// Next field in the collection sequence, or `None` after the last one.
    pub fn next(&self) -> Option<ComplaintField> {
        let pos = FIELD_SEQUENCE.iter().position(|f| f == self)?;
        FIELD_SEQUENCE.get(pos + 1).copied()
    }

    /// First field asked once a fraud type has been selected.
    pub fn first() -> ComplaintField {
        FIELD_SEQUENCE[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintField::FraudType => "fraud_type",
            ComplaintField::IncidentDescription => "incident_description",
            ComplaintField::IncidentDate => "incident_date",
            ComplaintField::IncidentTime => "incident_time",
            ComplaintField::AmountLost => "amount_lost",
            ComplaintField::SuspectInfo => "suspect_info",
            ComplaintField::SuspectContact => "suspect_contact",
            ComplaintField::ReporterName => "reporter_name",
            ComplaintField::ReporterPhone => "reporter_phone",
            ComplaintField::ReporterEmail => "reporter_email",
            ComplaintField::Location => "location",
            ComplaintField::PoliceReportFiled => "police_report_filed",
            ComplaintField::AdditionalInfo => "additional_info",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComplaintField::FraudType => "Fraud Type",
            ComplaintField::IncidentDescription => "Description",
            ComplaintField::IncidentDate => "Incident Date",
            ComplaintField::IncidentTime => "Incident Time",
            ComplaintField::AmountLost => "Amount Lost",
            ComplaintField::SuspectInfo => "Suspect Info",
            ComplaintField::SuspectContact => "Suspect Contact",
            ComplaintField::ReporterName => "Name",
            ComplaintField::ReporterPhone => "Phone",
            ComplaintField::ReporterEmail => "Email",
            ComplaintField::Location => "Location",
            ComplaintField::PoliceReportFiled => "Police Report Filed",
            ComplaintField::AdditionalInfo => "Additional Info",
        }
    }
}

impl std::fmt::Display for ComplaintField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conversation flow stages. A session is in exactly one stage at a time.
///
/// `Completed` is transient: a completed session is cleared immediately, so
/// the next inbound message starts a fresh cycle at `Initial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationStage {
    #[default]
    Initial,
    AwaitingFraudType,
    Collecting {
        current: ComplaintField,
    },
    Confirmation,
    Completed,
    Tracking,
}

impl ConversationStage {
    pub fn name(&self) -> &'static str {
        match self {
            ConversationStage::Initial => "initial",
            ConversationStage::AwaitingFraudType => "awaiting_fraud_type",
            ConversationStage::Collecting { .. } => "collecting_complaint",
            ConversationStage::Confirmation => "confirmation",
            ConversationStage::Completed => "completed",
            ConversationStage::Tracking => "tracking",
        }
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-user conversational state, persisted across turns until the flow
/// completes or is cancelled. Owned by the session store; the state machine
/// is the only writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Stable external identifier (e.g. the user's phone number)
    pub user_id: String,
    pub stage: ConversationStage,
    pub branch: Option<FraudBranch>,
    /// Collected fields in insertion order
    fields: Vec<(ComplaintField, String)>,
    pub started_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            stage: ConversationStage::Initial,
            branch: None,
            fields: Vec::new(),
            started_at: now,
            last_activity: now,
        }
    }

    /// Look up a collected field value.
    pub fn field(&self, field: ComplaintField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Record a validated field value. A field, once accepted, is never
    /// silently overwritten: returns `false` and leaves the existing value
    /// in place if the field was already set.
    pub fn set_field(&mut self, field: ComplaintField, value: impl Into<String>) -> bool {
        if self.fields.iter().any(|(f, _)| *f == field) {
            return false;
        }
        self.fields.push((field, value.into()));
        true
    }

    /// Collected fields in the order they were accepted.
    pub fn fields(&self) -> &[(ComplaintField, String)] {
        &self.fields
    }

    /// Mark activity on this session (bumps the idle clock).
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// How long the session has been idle relative to `now`.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_activity
    }
}
