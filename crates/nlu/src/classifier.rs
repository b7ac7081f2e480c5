//! Priority-ordered intent classification
//!
//! Keyword and regex based, no ML. Patterns are compiled once at
//! construction and evaluated in a fixed priority order; the first intent
//! with any matching pattern wins. The ordering is a deliberate tie-break
//! rule: a message mentioning both "status" and "fraud" is a status check
//! because status intents rank first. Do not reorder.

use regex::Regex;

use cybersathi_core::Intent;

/// The fixed evaluation order. Most specific intents first, the generic
/// new-complaint catch-all last.
pub const INTENT_PRIORITY: [Intent; 13] = [
    Intent::CheckStatus,
    Intent::AccountUnfreeze,
    Intent::FinancialFraud,
    Intent::FacebookFraud,
    Intent::InstagramFraud,
    Intent::XTwitterFraud,
    Intent::WhatsappFraud,
    Intent::TelegramFraud,
    Intent::GmailFraud,
    Intent::HackedAccount,
    Intent::Impersonation,
    Intent::ObsceneContent,
    Intent::NewComplaint,
];

fn pattern_sources(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::NewComplaint => &[
            r"(?i)\b(new\s+)?complaint\b",
            r"(?i)\bscam(med)?\b",
            r"(?i)\bfraud(ed)?\b",
            r"(?i)\bcyber\s*crime\b",
            r"(?i)\breport\b",
            r"(?i)\bhel+p\b",
            r"(?i)\bcheated\b",
            r"(?i)\bduped\b",
            r"(?i)\bfile\s+complaint\b",
        ],
        Intent::CheckStatus => &[
            r"(?i)\bstatus\b",
            r"(?i)\btrack(ing)?\b",
            r"(?i)\backnowledgement\b",
            r"(?i)\bticket\b",
            r"(?i)\bCS-\d+\b",
            r"(?i)\bNCRP-\d+\b",
            r"(?i)\bcheck\s+my\s+(case|complaint|status)\b",
            r"(?i)\bwhere\s+is\s+my\b",
        ],
        Intent::AccountUnfreeze => &[
            r"(?i)\bunfreeze\b",
            r"(?i)\baccount.*(freez|frozen)\b",
            r"(?i)\bfrozen\b.*\baccount\b",
            r"(?i)\bblocked\b.*\baccount\b",
            r"(?i)\brestore\b.*\baccount\b",
            r"(?i)\baccount.*\b(blocked|locked)\b",
        ],
        Intent::FinancialFraud => &[
            r"(?i)\bupi\b",
            r"(?i)\bmoney\b",
            r"(?i)\btransaction\b",
            r"(?i)\bdeducted\b",
            r"(?i)\bimps\b",
            r"(?i)\bneft\b",
            r"(?i)\brtgs\b",
            r"(?i)\bbank\b",
            r"(?i)\bpayment\b",
            r"(?i)\brupees?\b",
            r"(?i)₹\d+",
            r"(?i)\butr\b",
            r"(?i)\bonline\s+payment\b",
            r"(?i)\bpaytm\b",
            r"(?i)\bphonep(e|ay)\b",
            r"(?i)\bgpay\b",
        ],
        Intent::FacebookFraud => &[r"(?i)\bfacebook\b", r"(?i)\bfb\b", r"(?i)\bmeta\b"],
        Intent::InstagramFraud => &[r"(?i)\binstagram\b", r"(?i)\binsta\b", r"(?i)\big\b"],
        Intent::XTwitterFraud => &[r"(?i)\btwitter\b", r"(?i)\bx\.com\b", r"(?i)\btweet\b"],
        Intent::WhatsappFraud => &[r"(?i)\bwhatsapp\b", r"(?i)\bwa\b", r"(?i)\bwhats\s*app\b"],
        Intent::TelegramFraud => &[r"(?i)\btelegram\b"],
        Intent::GmailFraud => &[
            r"(?i)\bgmail\b",
            r"(?i)\bgoogle\s+account\b",
            r"(?i)\bemail\s+hacked?\b",
        ],
        Intent::HackedAccount => &[
            r"(?i)\bhacked?\b",
            r"(?i)\bhacking\b",
            r"(?i)\baccount\s+compromised\b",
            r"(?i)\bunauthori[sz]ed\s+access\b",
        ],
        Intent::Impersonation => &[
            r"(?i)\bimpersonat(e|ion)\b",
            r"(?i)\bfake\s+profile\b",
            r"(?i)\bpretending\s+to\s+be\b",
            r"(?i)\bidentity\s+theft\b",
        ],
        Intent::ObsceneContent => &[
            r"(?i)\bobscene\b",
            r"(?i)\bpornography\b",
            r"(?i)\bvulgar\b",
            r"(?i)\binappropriate\s+content\b",
            r"(?i)\bmorphed\s+photo\b",
        ],
        Intent::OtherQuery => &[],
    }
}

/// Stateless per call; holds the pattern sets compiled once at startup.
pub struct IntentClassifier {
    compiled: Vec<(Intent, Vec<Regex>)>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        let compiled = INTENT_PRIORITY
            .iter()
            .map(|&intent| {
                let patterns = pattern_sources(intent)
                    .iter()
                    .map(|src| {
                        // Sources are fixed literals, verified by tests
                        Regex::new(src).expect("intent pattern must compile")
                    })
                    .collect();
                (intent, patterns)
            })
            .collect();
        tracing::debug!(intents = INTENT_PRIORITY.len(), "compiled intent patterns");
        Self { compiled }
    }

    /// Detect the primary intent of a message. Returns the first intent in
    /// priority order with any matching pattern; `OtherQuery` if none match
    /// or the input is blank.
    pub fn detect(&self, text: &str) -> Intent {
        let text = text.trim();
        if text.is_empty() {
            return Intent::OtherQuery;
        }

        for (intent, patterns) in &self.compiled {
            if patterns.iter().any(|p| p.is_match(text)) {
                return *intent;
            }
        }

        Intent::OtherQuery
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
