//! Game flow orchestration - bridges the pure domain core with persistence.
//!
//! One call to [`GameFlowService::handle_update`] processes one external
//! event to completion: exactly one dispatch branch fires, handlers mutate
//! the in-memory game and write through repos, and the accumulated output
//! comes back in the [`UpdateOutcome`]. The caller owns the surrounding
//! transaction and the delivery of the output, and serializes events per
//! game.

mod commands;
mod messages;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::commands::Command;
use crate::domain::output::Reply;
use crate::domain::state::{Game, Player};
use crate::errors::domain::DomainError;
use crate::repos;
use crate::transport::NewMember;

/// One incoming event plus the resolved game, built by the transport driver.
#[derive(Debug, Clone)]
pub struct UpdateContext {
    pub game: Game,
    pub text: Option<String>,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_username: Option<String>,
    pub external_message_id: i64,
    pub is_edit: bool,
    pub is_private: bool,
    pub added_members: Vec<NewMember>,
}

impl UpdateContext {
    pub(super) fn sending_player(&self) -> Option<&Player> {
        self.game.player_by_external(self.sender_id)
    }

    /// DM check by player identity (see `Game::sender_matches_dm`).
    pub(super) fn sender_matches_dm(&self) -> bool {
        self.game.sender_matches_dm(self.sender_id)
    }

    /// DM check by flag: false for senders who never joined.
    pub(super) fn sender_is_dm(&self) -> bool {
        self.sending_player().is_some_and(|p| p.is_dm)
    }
}

/// Result of one processed update. `game` is the game the update ended on,
/// which differs from the input game when a handler archived it and rebound
/// to a fresh one.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub game: Game,
    pub reply: Reply,
}

/// The command interpreter.
#[derive(Debug, Default)]
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }

    /// Process one update. Dispatch precedence: edit of a non-private
    /// message, membership notification, private chat, command table,
    /// ordinary in-game message.
    pub async fn handle_update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        mut ctx: UpdateContext,
    ) -> Result<UpdateOutcome, DomainError> {
        let mut reply = Reply::new();

        if ctx.is_edit && !ctx.is_private {
            self.handle_edit(conn, &mut ctx, &mut reply).await?;
        } else if !ctx.added_members.is_empty() {
            self.handle_members_added(conn, &mut ctx, &mut reply).await?;
        } else if ctx.is_private {
            self.handle_private_message(conn, &mut ctx, &mut reply).await?;
        } else {
            info!(sender = %ctx.sender_name, text = ?ctx.text, "channel message");
            let command = ctx
                .text
                .as_deref()
                .and_then(|text| Command::parse(text, ctx.game.reset_code.as_deref()));
            match command {
                Some(command) => {
                    self.handle_command(conn, &mut ctx, command, &mut reply)
                        .await?
                }
                None => self.handle_game_message(conn, &mut ctx, &mut reply).await?,
            }
        }

        // Persist whatever the handlers changed in memory. Inserts, deletes
        // and archival were already written through inside the handlers.
        repos::games::save(conn, &ctx.game).await?;
        repos::players::save_flags(conn, &ctx.game.players).await?;

        Ok(UpdateOutcome {
            game: ctx.game,
            reply,
        })
    }
}
