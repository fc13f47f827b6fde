//! Repository functions: async lookups and write-through mutations.
//!
//! Free functions generic over `ConnectionTrait`, converting between the
//! SeaORM models in `entities` and the plain domain structs in `domain`.

pub mod games;
pub mod messages;
pub mod persons;
pub mod players;
