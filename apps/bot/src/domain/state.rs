//! In-memory state for one update: the active game and its players.
//!
//! These are plain structs converted from the database models by the repos
//! layer. Handlers mutate them freely; the services layer persists the result
//! at the end of the update.

/// One round-robin session bound to a (channel, thread) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    /// Current turn, 1-based and monotonically non-decreasing.
    pub turn_number: i32,
    pub is_running: bool,
    pub is_archived: bool,
    pub channel_id: i64,
    pub thread_id: i32,
    /// Pending 4-digit confirmation code for `/start` or `/endgame`.
    pub reset_code: Option<String>,
    pub players: Vec<Player>,
}

/// Participation of one person in one game.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub person_id: i64,
    /// Sender identity at the transport, denormalized for per-update lookups.
    pub external_id: i64,
    /// Name chosen for this game, distinct from any global person name.
    pub display_name: String,
    pub username: Option<String>,
    /// Whether this player has contributed a message in the current turn.
    pub has_spoken: bool,
    pub is_dm: bool,
}

/// One distinct sender identity, independent of any game.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub external_id: i64,
    pub initiated_private_chat: bool,
}

/// An accepted in-turn utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMessage {
    pub id: i64,
    pub external_id: i64,
    pub game_id: i64,
    pub turn_no: i32,
    pub player_id: i64,
    pub text: String,
}

impl Game {
    pub fn has_players(&self) -> bool {
        !self.players.is_empty()
    }

    pub fn player_by_external(&self, external_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.external_id == external_id)
    }

    pub fn player_by_external_mut(&mut self, external_id: i64) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.external_id == external_id)
    }

    /// The player holding the DM flag, set only at game-start time.
    pub fn dm(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_dm)
    }

    /// Authorization check for start/end/kick: the sending player must BE the
    /// DM player, by identity. Vacuously true when neither a sending player
    /// nor a DM exists; that keeps a game whose DM was kicked endable.
    pub fn sender_matches_dm(&self, sender_external_id: i64) -> bool {
        match (self.player_by_external(sender_external_id), self.dm()) {
            (Some(sender), Some(dm)) => sender.id == dm.id,
            (None, None) => true,
            _ => false,
        }
    }

    /// Roster line: DM plus the remaining players.
    pub fn roster_text(&self) -> String {
        if !self.has_players() {
            return "No one has joined the game yet.".to_string();
        }
        let dm_name = self.dm().map(|p| p.display_name.as_str()).unwrap_or("");
        let others = self
            .players
            .iter()
            .filter(|p| !p.is_dm)
            .map(|p| p.display_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("DM: {dm_name}\nCurrent players: {others}")
    }

    /// 1-based player listing used by `/kick`.
    pub fn numbered_roster(&self) -> String {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p.display_name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
