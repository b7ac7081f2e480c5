//! Stateless field validators
//!
//! Pure functions with fixed regex rules, compiled once at first use. Every
//! validator is total: any input, including empty strings and arbitrary
//! unicode, yields a definite answer and never panics.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").unwrap());
static DOB_DMY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|[12][0-9]|3[01])[-/](0[1-9]|1[012])[-/]\d{4}$").unwrap());
static DOB_YMD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}[-/]\d{2}[-/]\d{2}$").unwrap());
static TICKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^CS-\d{8}-\d{6}$").unwrap());

/// Validate an Indian mobile number.
///
/// Strips a `+91` country-code prefix, spaces and hyphens, then requires
/// exactly 10 digits starting with 6-9.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .trim()
        .trim_start_matches("+91")
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    MOBILE_RE.is_match(&cleaned)
}

/// Validate an email address: `local@domain.tld` shape, no embedded
/// whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Validate an Indian postal PIN code: exactly 6 digits, first digit 1-9.
pub fn is_valid_pin(pin: &str) -> bool {
    PIN_RE.is_match(pin.trim())
}

/// Validate a date of birth. Accepts `DD-MM-YYYY`, `DD/MM/YYYY` or
/// `YYYY-MM-DD` and returns the date normalized to `DD-MM-YYYY`. Returns
/// `None` for anything else, including calendar-invalid dates.
pub fn is_valid_dob(dob: &str) -> Option<String> {
    let dob = dob.trim();

    if DOB_DMY_RE.is_match(dob) {
        let normalized = dob.replace('/', "-");
        let parsed = NaiveDate::parse_from_str(&normalized, "%d-%m-%Y").ok()?;
        return Some(parsed.format("%d-%m-%Y").to_string());
    }

    if DOB_YMD_RE.is_match(dob) {
        let normalized = dob.replace('/', "-");
        let parsed = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()?;
        return Some(parsed.format("%d-%m-%Y").to_string());
    }

    None
}

/// Validate a ticket ID in the canonical `CS-YYYYMMDD-NNNNNN` form.
pub fn is_valid_ticket_id(ticket_id: &str) -> bool {
    TICKET_RE.is_match(ticket_id.trim())
}

/// Validate a reporter name: non-empty, 2 to 100 characters.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() < 2 {
        return Err("Name must be at least 2 characters");
    }
    if trimmed.chars().count() > 100 {
        return Err("Name must be less than 100 characters");
    }
    Ok(())
}

/// Validate an incident description against a minimum length.
pub fn validate_description(description: &str, min_length: usize) -> Result<(), &'static str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err("Description is required");
    }
    if trimmed.chars().count() < min_length {
        return Err("Description is too short");
    }
    Ok(())
}
