//! Entity extraction
//!
//! Scans a message with a fixed set of patterns, independently of intent
//! detection. Each entity is optional; extraction never fails.

use regex::Regex;

use cybersathi_core::ExtractedEntities;

/// Holds the entity patterns, compiled once at construction.
pub struct EntityExtractor {
    utr_number: Regex,
    phone_number: Regex,
    email: Regex,
    amount: Regex,
    date: Regex,
    ticket_id: Regex,
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            utr_number: Regex::new(r"\b\d{12,16}\b").expect("utr pattern must compile"),
            phone_number: Regex::new(r"\b[6-9]\d{9}\b").expect("phone pattern must compile"),
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("email pattern must compile"),
            amount: Regex::new(r"₹?\s*\d+(?:,\d+)*(?:\.\d{2})?").expect("amount pattern must compile"),
            date: Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").expect("date pattern must compile"),
            ticket_id: Regex::new(r"(?i)\b(?:CS|NCRP)-\d{8}-\d{6}\b")
                .expect("ticket pattern must compile"),
        }
    }

    /// Extract all entities present in the text. First match wins per
    /// entity; absent entities stay `None`.
    pub fn extract(&self, text: &str) -> ExtractedEntities {
        let first = |re: &Regex| re.find(text).map(|m| m.as_str().to_string());
        ExtractedEntities {
            utr_number: first(&self.utr_number),
            phone_number: first(&self.phone_number),
            email: first(&self.email),
            amount: first(&self.amount),
            date: first(&self.date),
            ticket_id: first(&self.ticket_id),
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
