//! Game repository functions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::state::Game;
use crate::entities::games;
use crate::infra::db_errors::map_db_err;
use crate::repos::players;
use crate::errors::domain::DomainError;

/// Resolve the single non-archived game for a (channel, thread) pair,
/// creating a fresh one (turn 1, not running) if none exists. Players are
/// loaded along with it.
pub async fn get_or_create_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    channel_id: i64,
    thread_id: i32,
) -> Result<Game, DomainError> {
    let existing = games::Entity::find()
        .filter(games::Column::ChannelId.eq(channel_id))
        .filter(games::Column::ThreadId.eq(thread_id))
        .filter(games::Column::IsArchived.eq(false))
        .one(conn)
        .await
        .map_err(map_db_err)?;

    let model = match existing {
        Some(model) => model,
        None => {
            debug!(channel_id, thread_id, "creating fresh game");
            let now = OffsetDateTime::now_utc();
            games::ActiveModel {
                id: NotSet,
                name: Set("The Game".to_string()),
                turn_number: Set(1),
                is_running: Set(false),
                is_archived: Set(false),
                channel_id: Set(channel_id),
                thread_id: Set(thread_id),
                reset_code: NotSet,
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(conn)
            .await
            .map_err(map_db_err)?
        }
    };

    let loaded = players::for_game(conn, model.id).await?;
    Ok(to_domain(model, loaded))
}

/// Write the game's mutable fields back. Player rows are persisted
/// separately by the players repo.
pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
) -> Result<(), DomainError> {
    games::ActiveModel {
        id: Set(game.id),
        name: Set(game.name.clone()),
        turn_number: Set(game.turn_number),
        is_running: Set(game.is_running),
        is_archived: Set(game.is_archived),
        reset_code: Set(game.reset_code.clone()),
        updated_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    }
    .update(conn)
    .await
    .map_err(map_db_err)?;
    Ok(())
}

fn to_domain(model: games::Model, players: Vec<crate::domain::state::Player>) -> Game {
    Game {
        id: model.id,
        name: model.name,
        turn_number: model.turn_number,
        is_running: model.is_running,
        is_archived: model.is_archived,
        channel_id: model.channel_id,
        thread_id: model.thread_id,
        reset_code: model.reset_code,
        players,
    }
}
