//! PII masking helpers for log output
//!
//! Reporter contact details must never appear verbatim in logs. These
//! helpers keep just enough of the value to correlate log lines.

/// Mask a phone-number-like string, keeping the first and last two digits.
/// Short or non-numeric input is masked entirely.
pub fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 6 {
        return "*".repeat(phone.chars().count().max(4));
    }
    let mut masked: String = digits[..2].iter().collect();
    masked.push_str(&"*".repeat(digits.len() - 4));
    masked.extend(&digits[digits.len() - 2..]);
    masked
}

/// Mask an email address, keeping the first character of the local part and
/// the full domain. Input without an `@` is masked entirely.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{first}***@{domain}")
        }
        _ => "*".repeat(email.chars().count().max(4)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_edges_only() {
        assert_eq!(mask_phone("9876543210"), "98******10");
        assert_eq!(mask_phone("+91 98765 43210"), "91********10");
    }

    #[test]
    fn short_phone_is_fully_masked() {
        assert_eq!(mask_phone("123"), "****");
    }

    #[test]
    fn email_keeps_domain() {
        assert_eq!(mask_email("user@example.com"), "u***@example.com");
    }

    #[test]
    fn malformed_email_is_fully_masked() {
        assert_eq!(mask_email("not-an-email"), "************");
    }
}
