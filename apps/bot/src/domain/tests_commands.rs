use crate::domain::commands::Command;

#[test]
fn bare_commands_parse() {
    assert_eq!(Command::parse("/kick", None), Some(Command::KickList));
    assert_eq!(Command::parse("/endgame", None), Some(Command::EndGame));
    assert_eq!(Command::parse("/start", None), Some(Command::Start));
    assert_eq!(Command::parse("/pause", None), Some(Command::Pause));
    assert_eq!(Command::parse("/resume", None), Some(Command::Resume));
    assert_eq!(Command::parse("/play", None), Some(Command::Play));
    assert_eq!(Command::parse("/help", None), Some(Command::Help));
    assert_eq!(Command::parse("/status", None), Some(Command::Status));
    assert_eq!(Command::parse("/nudge", None), Some(Command::Nudge));
}

#[test]
fn ordinary_text_is_no_command() {
    assert_eq!(Command::parse("hello there", None), None);
    assert_eq!(Command::parse("/unknown", None), None);
    // Bare /showturn has no rule; it falls through to the message path.
    assert_eq!(Command::parse("/showturn", None), None);
}

#[test]
fn kick_argument_is_parsed_raw() {
    assert_eq!(Command::parse("/kick 2", None), Some(Command::Kick(Some(2))));
    assert_eq!(Command::parse("/kick two", None), Some(Command::Kick(None)));
    assert_eq!(Command::parse("/kick -1", None), Some(Command::Kick(None)));
}

#[test]
fn showturn_argument_is_parsed_raw() {
    assert_eq!(
        Command::parse("/showturn 3", None),
        Some(Command::ShowTurn(Some(3)))
    );
    assert_eq!(
        Command::parse("/showturn x", None),
        Some(Command::ShowTurn(None))
    );
}

#[test]
fn start_confirmation_requires_exact_code() {
    assert_eq!(
        Command::parse("/start 1234", Some("1234")),
        Some(Command::StartConfirm)
    );
    assert_eq!(
        Command::parse("/start 123", Some("1234")),
        Some(Command::StartWrong)
    );
    assert_eq!(
        Command::parse("/start 12345", Some("1234")),
        Some(Command::StartWrong)
    );
    // No stored code: nothing can confirm.
    assert_eq!(Command::parse("/start 1234", None), Some(Command::StartWrong));
}

#[test]
fn endgame_confirmation_requires_exact_code() {
    assert_eq!(
        Command::parse("/endgame 9999", Some("9999")),
        Some(Command::EndGameConfirm)
    );
    assert_eq!(
        Command::parse("/endgame 9998", Some("9999")),
        Some(Command::EndGameWrong)
    );
    assert_eq!(
        Command::parse("/endgame 9999", None),
        Some(Command::EndGameWrong)
    );
}

#[test]
fn bare_rule_wins_over_argument_rule() {
    // "/kick" must hit the list rule, never Kick(None).
    assert_eq!(Command::parse("/kick", Some("1234")), Some(Command::KickList));
    assert_eq!(Command::parse("/start", Some("1234")), Some(Command::Start));
}
