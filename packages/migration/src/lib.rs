pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseConnection;

mod m20230208_145909_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20230208_145909_init::Migration)]
    }
}

/// Bring the schema up to date, logging applied/defined counts.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let applied = count_applied_migrations(db).await?;
    let defined = Migrator::migrations().len();
    tracing::info!(applied, defined, "running pending migrations");
    Migrator::up(db, None).await
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // migration table doesn't exist yet
        Err(e) => Err(e),
    }
}
