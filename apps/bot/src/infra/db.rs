//! Database connection setup.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Connect to the database behind the given URL.
///
/// Sqlx statement logging is disabled; query visibility comes from our own
/// tracing spans instead.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(5).sqlx_logging(false);
    Database::connect(opts).await
}
