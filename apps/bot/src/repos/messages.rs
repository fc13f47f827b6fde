//! Message repository functions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::domain::state::StoredMessage;
use crate::entities::{messages, players};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// One line of a rendered turn transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnMessage {
    pub sender_name: String,
    pub text: String,
}

/// Record an accepted in-turn utterance.
pub async fn add<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    turn_no: i32,
    external_id: i64,
    text: &str,
) -> Result<StoredMessage, DomainError> {
    let model = messages::ActiveModel {
        id: NotSet,
        external_id: Set(external_id),
        game_id: Set(game_id),
        turn_no: Set(turn_no),
        player_id: Set(player_id),
        text: Set(text.to_string()),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)?;

    Ok(to_domain(model))
}

/// All messages of one turn in original channel order (ascending external
/// message id), with the sender's display name resolved.
pub async fn for_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    turn_no: i32,
) -> Result<Vec<TurnMessage>, DomainError> {
    let rows = messages::Entity::find()
        .filter(messages::Column::GameId.eq(game_id))
        .filter(messages::Column::TurnNo.eq(turn_no))
        .find_also_related(players::Entity)
        .order_by_asc(messages::Column::ExternalId)
        .all(conn)
        .await
        .map_err(map_db_err)?;

    rows.into_iter()
        .map(|(message, player)| {
            let player = player.ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("message {} has no player row", message.id),
                )
            })?;
            Ok(TurnMessage {
                sender_name: player.display_name,
                text: message.text,
            })
        })
        .collect()
}

/// Look up a stored message by the transport's message id within one game.
pub async fn by_external_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    external_id: i64,
) -> Result<Option<StoredMessage>, DomainError> {
    let model = messages::Entity::find()
        .filter(messages::Column::GameId.eq(game_id))
        .filter(messages::Column::ExternalId.eq(external_id))
        .one(conn)
        .await
        .map_err(map_db_err)?;

    Ok(model.map(to_domain))
}

/// Amend a stored message's text in place (same-turn edits only; the caller
/// owns that rule).
pub async fn update_text<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    message_id: i64,
    text: &str,
) -> Result<(), DomainError> {
    messages::ActiveModel {
        id: Set(message_id),
        text: Set(text.to_string()),
        ..Default::default()
    }
    .update(conn)
    .await
    .map_err(map_db_err)?;
    Ok(())
}

fn to_domain(model: messages::Model) -> StoredMessage {
    StoredMessage {
        id: model.id,
        external_id: model.external_id,
        game_id: model.game_id,
        turn_no: model.turn_no,
        player_id: model.player_id,
        text: model.text,
    }
}
