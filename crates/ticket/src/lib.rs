//! Ticket and reference ID generation
//!
//! Canonical form: `CS-YYYYMMDD-NNNNNN` (current date plus a 6-digit random
//! suffix). Uniqueness is probabilistic, not guaranteed: callers detect a
//! collision via the store's conflict error and regenerate.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

const TICKET_PREFIX: &str = "CS";
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default suffix length for [`generate_reference_id`].
pub const DEFAULT_REFERENCE_LENGTH: usize = 8;

static TICKET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^CS-\d{8}-\d{6}$").unwrap());

/// Generate a ticket ID for today, e.g. `CS-20241114-234567`.
pub fn generate_ticket() -> String {
    let ymd = Local::now().format("%Y%m%d");
    let suffix: u32 = rand::thread_rng().gen_range(100_000..=999_999);
    format!("{TICKET_PREFIX}-{ymd}-{suffix}")
}

/// Generate a shorter alphanumeric reference ID for legacy compatibility,
/// e.g. `CS-A1B2C3D4`.
pub fn generate_reference_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..REFERENCE_CHARSET.len());
            REFERENCE_CHARSET[idx] as char
        })
        .collect();
    format!("{TICKET_PREFIX}-{suffix}")
}

/// Check a ticket ID against the canonical `CS-YYYYMMDD-NNNNNN` format.
pub fn validate_ticket_format(ticket_id: &str) -> bool {
    TICKET_RE.is_match(ticket_id)
}

/// Recover the date component from a ticket ID. Returns `None` for any
/// malformed input rather than failing.
pub fn extract_date_from_ticket(ticket_id: &str) -> Option<NaiveDate> {
    let mut parts = ticket_id.split('-');
    if parts.next()? != TICKET_PREFIX {
        return None;
    }
    let date_part = parts.next()?;
    let _suffix = parts.next()?;
    if parts.next().is_some() || date_part.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ticket_matches_format() {
        for _ in 0..100 {
            let ticket = generate_ticket();
            assert!(validate_ticket_format(&ticket), "bad ticket: {ticket}");
        }
    }

    #[test]
    fn generated_ticket_date_roundtrips() {
        let ticket = generate_ticket();
        let date = extract_date_from_ticket(&ticket).expect("date must parse");
        assert_eq!(date, Local::now().date_naive());
    }

    #[test]
    fn suffix_stays_in_range() {
        for _ in 0..100 {
            let ticket = generate_ticket();
            let suffix: u32 = ticket.rsplit('-').next().unwrap().parse().unwrap();
            assert!((100_000..=999_999).contains(&suffix));
        }
    }

    #[test]
    fn reference_id_shape() {
        let reference = generate_reference_id(DEFAULT_REFERENCE_LENGTH);
        assert!(reference.starts_with("CS-"));
        assert_eq!(reference.len(), 3 + DEFAULT_REFERENCE_LENGTH);
        assert!(reference[3..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn validate_rejects_malformed_ids() {
        assert!(!validate_ticket_format("NCRP-20241114-123456"));
        assert!(!validate_ticket_format("CS-2024-123456"));
        assert!(!validate_ticket_format("CS-20241114-12345"));
        assert!(!validate_ticket_format(""));
    }

    #[test]
    fn extract_is_graceful_on_malformed_input() {
        assert!(extract_date_from_ticket("").is_none());
        assert!(extract_date_from_ticket("CS-").is_none());
        assert!(extract_date_from_ticket("CS-badidea-123456").is_none());
        assert!(extract_date_from_ticket("CS-20241399-123456").is_none()); // month 13
        assert!(extract_date_from_ticket("XX-20241114-123456").is_none());
        assert!(extract_date_from_ticket("CS-20241114-123456-extra").is_none());
    }
}
