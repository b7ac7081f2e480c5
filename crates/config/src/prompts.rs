//! User-facing message templates
//!
//! All conversational copy lives here so it can be tuned without touching
//! the state machine. Defaults match the WhatsApp helpline wording.

use serde::{Deserialize, Serialize};

/// Message copy for every non-field response the engine emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    pub welcome: String,
    pub fallback: String,
    pub financial_menu: String,
    pub social_media_menu: String,
    pub generic_menu: String,
    pub tracking_prompt: String,
    pub invalid_ticket: String,
    pub unfreeze_info: String,
    pub confirmation_footer: String,
    pub confirm_reprompt: String,
    pub cancelled: String,
    pub edit_unavailable: String,
    /// `{ticket_id}` is substituted with the assigned ticket
    pub submitted: String,
    pub status_not_found: String,
    pub apology: String,
}

impl MessageTemplates {
    /// Render the post-submission message for a ticket.
    pub fn submitted_text(&self, ticket_id: &str) -> String {
        self.submitted.replace("{ticket_id}", ticket_id)
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            welcome: "🙏 Namaste! Welcome to CyberSathi - National Cybercrime Helpline 1930\n\n\
                I can help you with:\n\
                • 📝 Filing new cybercrime complaints\n\
                • 📊 Tracking complaint status\n\
                • 🔒 Account unfreeze requests\n\n\
                Please select an option or type your query:"
                .to_string(),
            fallback: "I didn't understand that. Please select from the options or type 'help' \
                for assistance."
                .to_string(),
            financial_menu: "💰 I understand you're reporting a financial fraud case.\n\n\
                Please select the type of financial fraud:"
                .to_string(),
            social_media_menu: "📱 I understand you're reporting a social media fraud case.\n\n\
                Please select the type of social media fraud:"
                .to_string(),
            generic_menu: "🆘 I'm here to help you report cybercrime. Please select the category:"
                .to_string(),
            tracking_prompt: "📋 Please provide your complaint ticket ID to check status.\n\n\
                Format: CS-YYYYMMDD-XXXXXX or NCRP-XXXXXXXX"
                .to_string(),
            invalid_ticket: "❌ Invalid ticket ID format. Please provide a valid ID \
                (e.g., CS-20241114-123456 or NCRP-20241114-123456)"
                .to_string(),
            unfreeze_info: "🔒 For account unfreeze requests, please provide:\n\
                1. Your account number\n\
                2. Bank name\n\
                3. Complaint ticket ID (if already filed)\n\n\
                Reply with these details."
                .to_string(),
            confirmation_footer: "Please review and confirm the details are correct:".to_string(),
            confirm_reprompt: "Please confirm by replying 'Yes' to submit or 'No' to cancel."
                .to_string(),
            cancelled: "❌ Complaint cancelled. Type 'help' to start over.".to_string(),
            edit_unavailable: "✏️ Edit feature coming soon. Please re-submit your complaint or \
                cancel."
                .to_string(),
            submitted: "✅ COMPLAINT REGISTERED SUCCESSFULLY\n\n\
                🎫 Your Complaint Ticket ID: {ticket_id}\n\n\
                • Save this ticket ID for future reference\n\
                • Typical response time: 24-48 hours\n\
                • Your case will be forwarded to the appropriate authorities\n\n\
                Reply with your ticket ID anytime to check status.\n\
                📞 Emergency Helpline: 1930"
                .to_string(),
            status_not_found: "We could not find a complaint with that ticket ID. Please check \
                the ID and try again."
                .to_string(),
            apology: "⚠️ Sorry, something went wrong on our side. Your details are safe - please \
                try again in a moment."
                .to_string(),
        }
    }
}
