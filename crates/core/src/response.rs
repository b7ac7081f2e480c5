//! Outbound response types
//!
//! A response is a chat message: text plus optional quick-reply options.
//! How a channel renders more than a handful of options (buttons vs. a
//! scrollable list) is a presentation concern of the transport, not encoded
//! here.

use serde::{Deserialize, Serialize};

/// A single quick-reply option shown alongside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub id: String,
    pub label: String,
}

impl QuickReply {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Outbound message produced by one conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuickReply>,
}

impl Response {
    /// Plain text response with no options.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Text response with quick-reply options.
    pub fn with_options(text: impl Into<String>, options: Vec<QuickReply>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}
