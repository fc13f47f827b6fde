pub mod game_flow;
pub mod update_runner;
