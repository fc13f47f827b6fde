//! Player repository functions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::domain::state::{Person, Player};
use crate::entities::{persons, players};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// All players of a game in join order, with the person's external identity
/// denormalized onto each.
pub async fn for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let rows = players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .find_also_related(persons::Entity)
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)?;

    rows.into_iter()
        .map(|(player, person)| {
            let person = person.ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("player {} has no person row", player.id),
                )
            })?;
            Ok(to_domain(player, &person))
        })
        .collect()
}

/// Insert a participation record. The (game, person) uniqueness invariant is
/// enforced by the schema; callers check for an existing player first, so a
/// conflict here is a programming defect.
pub async fn add<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    person: &Person,
    display_name: &str,
    username: Option<&str>,
    has_spoken: bool,
    is_dm: bool,
) -> Result<Player, DomainError> {
    let model = players::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        person_id: Set(person.id),
        display_name: Set(display_name.to_string()),
        username: Set(username.map(str::to_string)),
        has_spoken: Set(has_spoken),
        is_dm: Set(is_dm),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)?;

    Ok(Player {
        id: model.id,
        person_id: model.person_id,
        external_id: person.external_id,
        display_name: model.display_name,
        username: model.username,
        has_spoken: model.has_spoken,
        is_dm: model.is_dm,
    })
}

/// Remove a kicked player. Their recorded messages go with them (cascade).
pub async fn remove<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<(), DomainError> {
    players::Entity::delete_by_id(player_id)
        .exec(conn)
        .await
        .map_err(map_db_err)?;
    Ok(())
}

/// Persist the spoken flags of every player still in the game.
pub async fn save_flags<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    players: &[Player],
) -> Result<(), DomainError> {
    for player in players {
        players::ActiveModel {
            id: Set(player.id),
            has_spoken: Set(player.has_spoken),
            ..Default::default()
        }
        .update(conn)
        .await
        .map_err(map_db_err)?;
    }
    Ok(())
}

fn to_domain(model: players::Model, person: &persons::Model) -> Player {
    Player {
        id: model.id,
        person_id: model.person_id,
        external_id: person.external_id,
        display_name: model.display_name,
        username: model.username,
        has_spoken: model.has_spoken,
        is_dm: model.is_dm,
    }
}
