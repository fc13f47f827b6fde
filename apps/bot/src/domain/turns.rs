//! The turn engine.

use crate::domain::output::Reply;
use crate::domain::state::Game;

/// Roll the turn over once every current player has spoken.
///
/// Resets every player's spoken flag, increments the turn counter and
/// announces the new turn. Runs after an accepted message and after a kick
/// (removal can complete an otherwise-stalled turn). An empty player set
/// counts as "all spoken" and still advances; see DESIGN.md.
///
/// Returns whether the turn advanced.
pub fn advance_turn_if_complete(game: &mut Game, reply: &mut Reply) -> bool {
    if !game.players.iter().all(|p| p.has_spoken) {
        return false;
    }

    for player in &mut game.players {
        player.has_spoken = false;
    }
    game.turn_number += 1;

    reply.public("All players have spoken, a new turn has begun!");
    reply.public(format!("This is turn #{}", game.turn_number));
    true
}
