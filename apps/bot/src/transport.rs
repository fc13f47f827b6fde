//! Collaborator contract between the core and a chat transport.
//!
//! The adapter translates transport-specific updates into [`ChatEvent`]s and
//! flushes the core's output back out through [`ChatTransport`]. Nothing in
//! the services layer talks to the network directly.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;

/// One incoming event, already translated to the core's shape.
#[derive(Debug, Clone, Default)]
pub struct ChatEvent {
    pub channel_id: i64,
    pub thread_id: i32,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_username: Option<String>,
    pub text: Option<String>,
    pub external_message_id: i64,
    pub is_edit: bool,
    pub is_private: bool,
    /// Non-empty exactly when this is a membership-added notification.
    pub added_members: Vec<NewMember>,
}

/// A member named by a membership-added notification.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub external_id: i64,
    pub display_name: String,
}

/// Delivery failure at the transport. The driver logs and degrades; the core
/// never sees these.
#[derive(Debug)]
pub struct TransportError(pub String);

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "transport error: {}", self.0)
    }
}

impl Error for TransportError {}

/// Outbound side of the chat transport.
#[async_trait]
pub trait ChatTransport {
    /// Deliver text to the game's channel/thread.
    async fn send_public(
        &mut self,
        channel_id: i64,
        thread_id: i32,
        text: &str,
    ) -> Result<(), TransportError>;

    /// Deliver text to one sender's private chat.
    async fn send_private(&mut self, recipient_id: i64, text: &str) -> Result<(), TransportError>;

    /// Delete a channel message. Best-effort; callers ignore failures.
    async fn delete_message(
        &mut self,
        channel_id: i64,
        external_message_id: i64,
    ) -> Result<(), TransportError>;
}
