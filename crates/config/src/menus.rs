//! Quick-reply menu sets
//!
//! Static option lists shown with stage menus. Channels render up to three
//! as buttons and degrade longer lists to a scrollable picker; that is the
//! transport's concern, not encoded here.

use cybersathi_core::{FraudBranch, QuickReply};

/// Options shown with the welcome message.
pub fn welcome_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::new("new_complaint", "📝 File New Complaint"),
        QuickReply::new("track_status", "📊 Track Status"),
        QuickReply::new("unfreeze_account", "🔒 Unfreeze Account"),
    ]
}

/// Branch-specific fraud sub-type menu.
pub fn branch_menu(branch: FraudBranch) -> Vec<QuickReply> {
    match branch {
        FraudBranch::Financial => vec![
            QuickReply::new("upi_fraud", "UPI/Payment App Fraud"),
            QuickReply::new("banking_fraud", "Internet Banking Fraud"),
            QuickReply::new("card_fraud", "Debit/Credit Card Fraud"),
            QuickReply::new("investment_fraud", "Investment/Trading Scam"),
            QuickReply::new("loan_fraud", "Loan Fraud"),
            QuickReply::new("other_financial", "Other Financial Fraud"),
        ],
        FraudBranch::SocialMedia => vec![
            QuickReply::new("account_hacked", "Account Hacked"),
            QuickReply::new("impersonation", "Fake Profile/Impersonation"),
            QuickReply::new("obscene_content", "Obscene Content/Morphed Photos"),
            QuickReply::new("cyber_stalking", "Cyber Stalking/Harassment"),
            QuickReply::new("blackmail", "Online Blackmail/Sextortion"),
            QuickReply::new("other_social", "Other Social Media Fraud"),
        ],
        FraudBranch::Other => vec![
            QuickReply::new("financial_fraud", "💰 Financial Fraud"),
            QuickReply::new("social_media_fraud", "📱 Social Media Fraud"),
            QuickReply::new("other_cyber_crime", "🔒 Other Cyber Crime"),
        ],
    }
}

/// Options shown with the complaint summary.
pub fn confirmation_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::new("confirm_submit", "✅ Confirm & Submit"),
        QuickReply::new("cancel_complaint", "❌ Cancel"),
        QuickReply::new("edit_complaint", "✏️ Edit Details"),
    ]
}

/// Options shown after a successful submission or status lookup.
pub fn follow_up_menu() -> Vec<QuickReply> {
    vec![
        QuickReply::new("track_status", "📊 Track Status"),
        QuickReply::new("new_complaint", "🆕 File Another Complaint"),
    ]
}
