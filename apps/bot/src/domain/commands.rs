//! Command recognition for channel messages.
//!
//! Dispatch is an ordered rule table: the first matching rule wins, and the
//! order below is fixed. Confirmation variants compare the argument against
//! the game's stored reset code, so the same text can parse differently for
//! different games.

/// A recognized command, with arguments already split off.
///
/// `Kick` and `ShowTurn` carry the raw parse result; range checks stay with
/// the handlers so that a bad argument can be answered with the usage hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    KickList,
    Kick(Option<usize>),
    EndGame,
    EndGameConfirm,
    EndGameWrong,
    Start,
    StartConfirm,
    StartWrong,
    Pause,
    Resume,
    Play,
    Help,
    Status,
    Nudge,
    ShowTurn(Option<i32>),
}

impl Command {
    /// Match `text` against the command table. Returns `None` when the text
    /// is no command at all, i.e. an ordinary in-game message.
    pub fn parse(text: &str, reset_code: Option<&str>) -> Option<Command> {
        let confirmed = |arg: &str| reset_code.is_some_and(|code| arg == code);

        if text == "/kick" {
            return Some(Command::KickList);
        }
        if let Some(arg) = text.strip_prefix("/kick ") {
            return Some(Command::Kick(arg.parse().ok()));
        }
        if text == "/endgame" {
            return Some(Command::EndGame);
        }
        if let Some(arg) = text.strip_prefix("/endgame ") {
            return Some(if confirmed(arg) {
                Command::EndGameConfirm
            } else {
                Command::EndGameWrong
            });
        }
        if text == "/start" {
            return Some(Command::Start);
        }
        if let Some(arg) = text.strip_prefix("/start ") {
            return Some(if confirmed(arg) {
                Command::StartConfirm
            } else {
                Command::StartWrong
            });
        }
        match text {
            "/pause" => return Some(Command::Pause),
            "/resume" => return Some(Command::Resume),
            "/play" => return Some(Command::Play),
            "/help" => return Some(Command::Help),
            "/status" => return Some(Command::Status),
            "/nudge" => return Some(Command::Nudge),
            _ => {}
        }
        if let Some(arg) = text.strip_prefix("/showturn ") {
            return Some(Command::ShowTurn(arg.parse().ok()));
        }

        None
    }
}
