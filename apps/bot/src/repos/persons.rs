//! Person repository functions.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QuerySelect,
    Set,
};
use time::OffsetDateTime;

use crate::domain::state::Person;
use crate::entities::{persons, players};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Resolve a person by sender identity, creating the record lazily on first
/// contact.
pub async fn get_or_create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    external_id: i64,
) -> Result<Person, DomainError> {
    let existing = persons::Entity::find()
        .filter(persons::Column::ExternalId.eq(external_id))
        .one(conn)
        .await
        .map_err(map_db_err)?;

    let model = match existing {
        Some(model) => model,
        None => persons::ActiveModel {
            id: NotSet,
            external_id: Set(external_id),
            initiated_private_chat: Set(false),
            created_at: Set(OffsetDateTime::now_utc()),
        }
        .insert(conn)
        .await
        .map_err(map_db_err)?,
    };

    Ok(Person {
        id: model.id,
        external_id: model.external_id,
        initiated_private_chat: model.initiated_private_chat,
    })
}

/// Record that the person has initiated private contact with the bot.
pub async fn mark_initiated<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person: &mut Person,
) -> Result<(), DomainError> {
    if person.initiated_private_chat {
        return Ok(());
    }
    persons::ActiveModel {
        id: Set(person.id),
        initiated_private_chat: Set(true),
        ..Default::default()
    }
    .update(conn)
    .await
    .map_err(map_db_err)?;
    person.initiated_private_chat = true;
    Ok(())
}

/// Number of distinct games this person has ever joined, archived ones
/// included.
pub async fn distinct_game_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    person_id: i64,
) -> Result<usize, DomainError> {
    let game_ids: Vec<i64> = players::Entity::find()
        .filter(players::Column::PersonId.eq(person_id))
        .select_only()
        .column(players::Column::GameId)
        .into_tuple()
        .all(conn)
        .await
        .map_err(map_db_err)?;

    Ok(game_ids.into_iter().collect::<HashSet<_>>().len())
}
