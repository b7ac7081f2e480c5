//! Field configuration table
//!
//! One entry per collected complaint field: the prompt to ask, how to
//! validate the answer, the error copy for a failed validation, and any
//! quick-reply options shown with the prompt. Defaults are explicit here
//! rather than embedded in state-machine control flow.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cybersathi_core::{ComplaintField, QuickReply, FIELD_SEQUENCE};

/// How an answer for a field is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Any non-empty text
    FreeText,
    /// `D[/-]M[/-]YYYY` incident date
    Date,
    /// Indian mobile number
    Phone,
    /// Email address
    Email,
}

/// Configuration for a single collected field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub prompt: String,
    pub error: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub options: Vec<QuickReply>,
}

impl FieldSpec {
    fn text(prompt: &str, error: &str, kind: FieldKind) -> Self {
        Self {
            prompt: prompt.to_string(),
            error: error.to_string(),
            kind,
            options: Vec::new(),
        }
    }
}

/// The per-field prompt/validation table.
#[derive(Debug, Clone)]
pub struct FieldPrompts {
    specs: HashMap<ComplaintField, FieldSpec>,
}

impl FieldPrompts {
    /// Spec for a field. Panics only on a table/sequence mismatch, which
    /// the tests rule out.
    pub fn spec(&self, field: ComplaintField) -> &FieldSpec {
        self.specs
            .get(&field)
            .expect("every sequenced field has a spec")
    }
}

impl Default for FieldPrompts {
    fn default() -> Self {
        let empty = "❌ This field cannot be empty. Please type an answer \
            (or 'Unknown' / 'None' where it does not apply).";
        let mut specs = HashMap::new();
        specs.insert(
            ComplaintField::IncidentDescription,
            FieldSpec::text(
                "📝 Please describe the incident in detail:\n\n\
                 • What happened?\n\
                 • When did it happen?\n\
                 • How did you realize it was fraud?",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::IncidentDate,
            FieldSpec::text(
                "📅 When did this incident occur? (DD/MM/YYYY)",
                "❌ Invalid date format. Please use DD/MM/YYYY format (e.g., 14/11/2024)",
                FieldKind::Date,
            ),
        );
        specs.insert(
            ComplaintField::IncidentTime,
            FieldSpec::text(
                "🕐 What time did it happen? (HH:MM format, e.g., 14:30)",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::AmountLost,
            FieldSpec::text(
                "💵 How much money was lost (if any)? Enter amount in ₹ or type '0' if not \
                 applicable.",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::SuspectInfo,
            FieldSpec::text(
                "🔍 Do you have any information about the suspect/fraudster?\n\n\
                 Provide name, details, or type 'Unknown' if you don't have any information.",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::SuspectContact,
            FieldSpec::text(
                "📞 Do you have the suspect's phone number, email, or social media profile? \
                 Type 'Unknown' if not available.",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::ReporterName,
            FieldSpec::text(
                "👤 Please provide your full name (as per Aadhaar):",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::ReporterPhone,
            FieldSpec::text(
                "📱 Please provide your mobile number (10 digits):",
                "❌ Invalid mobile number. Please enter a valid 10-digit mobile number starting \
                 with 6-9.",
                FieldKind::Phone,
            ),
        );
        specs.insert(
            ComplaintField::ReporterEmail,
            FieldSpec::text(
                "📧 Please provide your email address:",
                "❌ Invalid email address. Please enter a valid email (e.g., user@example.com)",
                FieldKind::Email,
            ),
        );
        specs.insert(
            ComplaintField::Location,
            FieldSpec::text(
                "📍 What is your current location/address (City, State):",
                empty,
                FieldKind::FreeText,
            ),
        );
        specs.insert(
            ComplaintField::PoliceReportFiled,
            FieldSpec {
                prompt: "🚔 Have you filed a police report for this incident?".to_string(),
                error: empty.to_string(),
                kind: FieldKind::FreeText,
                options: vec![
                    QuickReply::new("yes_police_report", "Yes, I have filed FIR"),
                    QuickReply::new("no_police_report", "No, not yet"),
                ],
            },
        );
        specs.insert(
            ComplaintField::AdditionalInfo,
            FieldSpec::text(
                "📎 Any additional information you'd like to add? (Type 'None' if not \
                 applicable)",
                empty,
                FieldKind::FreeText,
            ),
        );
        Self { specs }
    }
}
