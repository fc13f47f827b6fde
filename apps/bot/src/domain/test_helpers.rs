//! Builders for in-memory state used by the domain unit tests.

use crate::domain::state::{Game, Player};

pub fn game(players: Vec<Player>) -> Game {
    Game {
        id: 1,
        name: "The Game".to_string(),
        turn_number: 1,
        is_running: true,
        is_archived: false,
        channel_id: 100,
        thread_id: 0,
        reset_code: None,
        players,
    }
}

pub fn player(id: i64, name: &str, has_spoken: bool, is_dm: bool) -> Player {
    Player {
        id,
        person_id: id,
        external_id: id,
        display_name: name.to_string(),
        username: None,
        has_spoken,
        is_dm,
    }
}
