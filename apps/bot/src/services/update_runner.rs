//! Drives one transport event through the interpreter and back out.
//!
//! This is the serialization point: callers feed events one at a time, and
//! each event runs read -> mutate -> commit -> flush to completion before
//! the next one starts.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;
use crate::repos;
use crate::services::game_flow::{GameFlowService, UpdateContext};
use crate::transport::{ChatEvent, ChatTransport};

/// Handle one event end to end: resolve the game, run the interpreter in a
/// transaction, commit, then deliver the output.
pub async fn run_update<T: ChatTransport + Send>(
    db: &DatabaseConnection,
    service: &GameFlowService,
    transport: &mut T,
    event: ChatEvent,
) -> Result<(), DomainError> {
    let txn = db.begin().await.map_err(map_db_err)?;

    let game = repos::games::get_or_create_active(&txn, event.channel_id, event.thread_id).await?;
    let ctx = UpdateContext {
        game,
        text: event.text.clone(),
        sender_id: event.sender_id,
        sender_name: event.sender_name.clone(),
        sender_username: event.sender_username.clone(),
        external_message_id: event.external_message_id,
        is_edit: event.is_edit,
        is_private: event.is_private,
        added_members: event.added_members.clone(),
    };

    let outcome = service.handle_update(&txn, ctx).await?;
    txn.commit().await.map_err(map_db_err)?;

    // Deletions are best-effort by contract.
    for external_id in outcome.reply.deletions() {
        if let Err(err) = transport
            .delete_message(event.channel_id, *external_id)
            .await
        {
            debug!(%err, external_id, "message deletion failed, ignoring");
        }
    }

    // A failed private delivery is degraded, not fatal; retry policy is the
    // transport's business.
    if let Some(text) = outcome.reply.private_text() {
        if let Err(err) = transport.send_private(event.sender_id, &text).await {
            warn!(%err, sender_id = event.sender_id, "private delivery failed");
        }
    }

    // Public output goes back to the chat the event came from. For channel
    // events that is the game's channel; for private-chat events it is the
    // private chat itself.
    if let Some(text) = outcome.reply.public_text() {
        transport
            .send_public(event.channel_id, event.thread_id, &text)
            .await
            .map_err(|err| DomainError::infra(InfraErrorKind::Transport, err.to_string()))?;
    }

    Ok(())
}
