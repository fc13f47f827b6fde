use rrbot::config::db::{db_url, DbProfile};
use rrbot::infra::db::connect_db;

mod console;
mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - RRBOT_DB: sqlite file path, defaults to rrbot_data.sqlite
    let url = match db_url(DbProfile::Prod) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ Invalid database configuration: {e}");
            std::process::exit(1);
        }
    };

    let db = match connect_db(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to the database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate_up(&db).await {
        eprintln!("❌ Failed to run migrations: {e}");
        std::process::exit(1);
    }

    println!("✅ Database ready, reading events from stdin (type 'quit' to stop)");

    console::run(&db).await;
}
