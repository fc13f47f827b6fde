//! Domain layer: pure game logic types and helpers.
//!
//! Nothing in here performs I/O. The services layer loads state through
//! repos, calls into these types, and writes the mutations back.

pub mod codes;
pub mod commands;
pub mod output;
pub mod state;
pub mod turns;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_commands;
#[cfg(test)]
mod tests_output;
#[cfg(test)]
mod tests_state;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use commands::Command;
pub use output::Reply;
pub use state::{Game, Person, Player, StoredMessage};
