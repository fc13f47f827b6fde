#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod transport;

// Re-exports for public API
pub use config::db::{db_url, DbProfile};
pub use domain::{Command, Game, Person, Player, Reply, StoredMessage};
pub use errors::domain::DomainError;
pub use infra::db::connect_db;
pub use services::game_flow::{GameFlowService, UpdateContext, UpdateOutcome};
pub use services::update_runner::run_update;
pub use transport::{ChatEvent, ChatTransport, NewMember, TransportError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rrbot_test_support::logging::init();
}
