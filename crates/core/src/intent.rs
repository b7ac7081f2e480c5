//! Intent, platform and fraud-branch enumerations
//!
//! These are closed enums defined at compile time. Adding a new intent or
//! platform is a compile-checked change: every `match` over them is
//! exhaustive.

use serde::{Deserialize, Serialize};

/// Classified purpose of a single inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    // Root intents
    NewComplaint,
    CheckStatus,
    AccountUnfreeze,
    OtherQuery,

    // Financial fraud
    FinancialFraud,

    // Social media fraud, one per supported platform
    FacebookFraud,
    InstagramFraud,
    XTwitterFraud,
    WhatsappFraud,
    TelegramFraud,
    GmailFraud,

    // Refinement intents
    HackedAccount,
    Impersonation,
    ObsceneContent,
}

impl Intent {
    /// Whether this intent starts a complaint flow when seen at the
    /// start of a conversation.
    pub fn starts_complaint(&self) -> bool {
        matches!(
            self,
            Intent::NewComplaint
                | Intent::FinancialFraud
                | Intent::FacebookFraud
                | Intent::InstagramFraud
                | Intent::XTwitterFraud
                | Intent::WhatsappFraud
                | Intent::TelegramFraud
                | Intent::GmailFraud
                | Intent::HackedAccount
                | Intent::Impersonation
                | Intent::ObsceneContent
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::NewComplaint => "new_complaint",
            Intent::CheckStatus => "check_status",
            Intent::AccountUnfreeze => "account_unfreeze",
            Intent::OtherQuery => "other_query",
            Intent::FinancialFraud => "financial_fraud",
            Intent::FacebookFraud => "facebook_fraud",
            Intent::InstagramFraud => "instagram_fraud",
            Intent::XTwitterFraud => "x_twitter_fraud",
            Intent::WhatsappFraud => "whatsapp_fraud",
            Intent::TelegramFraud => "telegram_fraud",
            Intent::GmailFraud => "gmail_fraud",
            Intent::HackedAccount => "hacked_account",
            Intent::Impersonation => "impersonation",
            Intent::ObsceneContent => "obscene_content",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social media platform referenced by the user, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Instagram,
    XTwitter,
    Whatsapp,
    Telegram,
    Gmail,
    #[default]
    Unknown,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::XTwitter => "X (Twitter)",
            Platform::Whatsapp => "WhatsApp",
            Platform::Telegram => "Telegram",
            Platform::Gmail => "Gmail",
            Platform::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Top-level complaint branch derived from the detected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudBranch {
    /// Financial fraud (UPI, banking, cards, investments)
    Financial,
    /// Social media fraud (hacked accounts, impersonation, content)
    SocialMedia,
    /// Anything else; gets the generic category picker
    Other,
}

impl FraudBranch {
    /// Map a detected intent to its complaint branch. Pure mapping, no
    /// fallthrough: platform intents are social media, financial fraud is
    /// financial, everything else is other.
    pub fn from_intent(intent: Intent) -> Self {
        match intent {
            Intent::FinancialFraud => FraudBranch::Financial,
            Intent::FacebookFraud
            | Intent::InstagramFraud
            | Intent::XTwitterFraud
            | Intent::WhatsappFraud
            | Intent::TelegramFraud
            | Intent::GmailFraud => FraudBranch::SocialMedia,
            _ => FraudBranch::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FraudBranch::Financial => "financial",
            FraudBranch::SocialMedia => "social_media",
            FraudBranch::Other => "other",
        }
    }
}

impl std::fmt::Display for FraudBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
