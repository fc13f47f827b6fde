//! Test database helpers.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Connect to a fresh in-memory sqlite database and bring the schema up.
///
/// Every caller gets its own database, so tests never have to serialize on
/// shared state. The pool is pinned to one connection: pooled `:memory:`
/// connections do not share a database.
pub async fn fresh_db() -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
