//! Outbound messaging channel interface

use async_trait::async_trait;

use crate::error::MessengerError;
use crate::response::Response;

/// Sends a response to a user over the messaging channel.
#[async_trait]
pub trait OutboundMessenger: Send + Sync {
    async fn send(&self, user_id: &str, response: &Response) -> Result<(), MessengerError>;
}
