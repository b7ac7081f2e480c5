//! Social media platform detection
//!
//! Keyword lookup, separate from intent classification. Short aliases
//! (fb, wa, ig) are matched as whole tokens so that e.g. "was" does not
//! read as WhatsApp.

use std::collections::HashSet;

use cybersathi_core::Platform;

/// Detect which platform a message refers to, `Unknown` if none.
pub fn detect_platform(text: &str) -> Platform {
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    if lower.contains("facebook") || tokens.contains("fb") {
        Platform::Facebook
    } else if lower.contains("instagram") || tokens.contains("insta") || tokens.contains("ig") {
        Platform::Instagram
    } else if lower.contains("twitter") || lower.contains("x.com") || lower.contains("tweet") {
        Platform::XTwitter
    } else if lower.contains("whatsapp") || lower.contains("whats app") || tokens.contains("wa") {
        Platform::Whatsapp
    } else if lower.contains("telegram") {
        Platform::Telegram
    } else if lower.contains("gmail") || lower.contains("google account") {
        Platform::Gmail
    } else {
        Platform::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_platform_names() {
        assert_eq!(detect_platform("facebook fraud"), Platform::Facebook);
        assert_eq!(detect_platform("instagram hacked"), Platform::Instagram);
        assert_eq!(detect_platform("twitter scam"), Platform::XTwitter);
        assert_eq!(detect_platform("whatsapp fraud"), Platform::Whatsapp);
        assert_eq!(detect_platform("telegram scam"), Platform::Telegram);
        assert_eq!(detect_platform("gmail hacked"), Platform::Gmail);
    }

    #[test]
    fn short_aliases_as_tokens() {
        assert_eq!(detect_platform("FB scam"), Platform::Facebook);
        assert_eq!(detect_platform("insta issue"), Platform::Instagram);
        assert_eq!(detect_platform("x.com fraud"), Platform::XTwitter);
        assert_eq!(detect_platform("scammed on wa"), Platform::Whatsapp);
        assert_eq!(detect_platform("google account issue"), Platform::Gmail);
    }

    #[test]
    fn aliases_do_not_match_inside_words() {
        // "was" must not read as WhatsApp, "big" not as Instagram
        assert_eq!(detect_platform("it was a big mistake"), Platform::Unknown);
    }

    #[test]
    fn unknown_fallback() {
        assert_eq!(detect_platform("random text"), Platform::Unknown);
        assert_eq!(detect_platform(""), Platform::Unknown);
    }
}
