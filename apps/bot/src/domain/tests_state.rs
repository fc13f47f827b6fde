use crate::domain::test_helpers::{game, player};

#[test]
fn dm_check_is_identity_equality() {
    let g = game(vec![
        player(1, "Alice", false, true),
        player(2, "Bob", false, false),
    ]);
    assert!(g.sender_matches_dm(1));
    assert!(!g.sender_matches_dm(2));
    // Unknown sender does not match an existing DM.
    assert!(!g.sender_matches_dm(99));
}

#[test]
fn dm_check_with_kicked_dm() {
    // A joined player never matches an absent DM.
    let g = game(vec![player(2, "Bob", false, false)]);
    assert!(g.dm().is_none());
    assert!(!g.sender_matches_dm(2));
    // But an outside sender does, vacuously: the channel is not locked out
    // of /endgame forever after the DM was kicked.
    assert!(g.sender_matches_dm(99));
}

#[test]
fn roster_for_empty_game() {
    let g = game(vec![]);
    assert_eq!(g.roster_text(), "No one has joined the game yet.");
}

#[test]
fn roster_lists_dm_and_others() {
    let g = game(vec![
        player(1, "Alice", false, true),
        player(2, "Bob", false, false),
        player(3, "Cleo", false, false),
    ]);
    assert_eq!(g.roster_text(), "DM: Alice\nCurrent players: Bob, Cleo");
}

#[test]
fn roster_with_only_the_dm() {
    let g = game(vec![player(1, "Alice", false, true)]);
    assert_eq!(g.roster_text(), "DM: Alice\nCurrent players: ");
}

#[test]
fn numbered_roster_is_one_based() {
    let g = game(vec![
        player(1, "Alice", false, true),
        player(2, "Bob", false, false),
    ]);
    assert_eq!(g.numbered_roster(), "1. Alice\n2. Bob");
}
