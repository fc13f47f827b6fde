use proptest::prelude::*;

use crate::domain::output::Reply;
use crate::domain::test_helpers::{game, player};
use crate::domain::turns::advance_turn_if_complete;

#[test]
fn does_not_advance_while_someone_is_silent() {
    let mut g = game(vec![
        player(1, "Alice", true, true),
        player(2, "Bob", false, false),
    ]);
    let mut reply = Reply::new();

    assert!(!advance_turn_if_complete(&mut g, &mut reply));
    assert_eq!(g.turn_number, 1);
    assert!(g.players[0].has_spoken);
    assert_eq!(reply.public_text(), None);
}

#[test]
fn advances_and_resets_flags_when_everyone_spoke() {
    let mut g = game(vec![
        player(1, "Alice", true, true),
        player(2, "Bob", true, false),
    ]);
    let mut reply = Reply::new();

    assert!(advance_turn_if_complete(&mut g, &mut reply));
    assert_eq!(g.turn_number, 2);
    assert!(g.players.iter().all(|p| !p.has_spoken));

    let text = reply.public_text().unwrap();
    assert!(text.contains("All players have spoken, a new turn has begun!"));
    assert!(text.contains("This is turn #2"));
}

#[test]
fn empty_player_set_advances_vacuously() {
    // Kicking the last unspoken player can leave the set empty; the check
    // still fires and rolls the turn over.
    let mut g = game(vec![]);
    let mut reply = Reply::new();

    assert!(advance_turn_if_complete(&mut g, &mut reply));
    assert_eq!(g.turn_number, 2);
}

proptest! {
    /// The turn counter only ever moves forward, by exactly one, and only
    /// when every player had spoken beforehand.
    #[test]
    fn turn_number_is_monotonic(flags in prop::collection::vec(any::<bool>(), 0..8)) {
        let players = flags
            .iter()
            .enumerate()
            .map(|(i, &spoken)| player(i as i64 + 1, "P", spoken, i == 0))
            .collect();
        let mut g = game(players);
        let before = g.turn_number;
        let all_spoke = flags.iter().all(|&f| f);

        let advanced = advance_turn_if_complete(&mut g, &mut Reply::new());

        prop_assert_eq!(advanced, all_spoke);
        prop_assert_eq!(g.turn_number, if all_spoke { before + 1 } else { before });
        if advanced {
            prop_assert!(g.players.iter().all(|p| !p.has_spoken));
        }
    }
}
