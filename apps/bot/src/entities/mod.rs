pub mod games;
pub mod messages;
pub mod persons;
pub mod players;
