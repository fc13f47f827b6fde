//! Command handlers.
//!
//! Each handler answers bad input and unauthorized senders with chat text,
//! never with an error; `DomainError` is reserved for infrastructure
//! failures underneath the repos.

use sea_orm::ConnectionTrait;
use tracing::info;

use super::{GameFlowService, UpdateContext};
use crate::domain::codes::confirmation_code;
use crate::domain::commands::Command;
use crate::domain::output::Reply;
use crate::domain::turns::advance_turn_if_complete;
use crate::errors::domain::DomainError;
use crate::repos;

impl GameFlowService {
    pub(super) async fn handle_command<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        command: Command,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        match command {
            Command::KickList => self.cmd_kick_list(ctx, reply),
            Command::Kick(arg) => self.cmd_kick(conn, ctx, arg, reply).await?,
            Command::EndGame => self.cmd_end_game(ctx, reply),
            Command::EndGameConfirm => self.cmd_end_game_confirmed(conn, ctx, reply).await?,
            Command::EndGameWrong => self.cmd_end_game_wrong(ctx, reply),
            Command::Start => self.cmd_start(ctx, reply),
            Command::StartConfirm => self.cmd_start_confirmed(conn, ctx, reply).await?,
            Command::StartWrong => self.cmd_start_wrong(ctx, reply),
            Command::Pause => self.cmd_pause(ctx, reply),
            Command::Resume => self.cmd_resume(ctx, reply),
            Command::Play => self.cmd_play(conn, ctx, reply).await?,
            Command::Help => self.cmd_help(reply),
            Command::Status => self.cmd_status(ctx, reply),
            Command::Nudge => {}
            Command::ShowTurn(arg) => self.cmd_show_turn(conn, ctx, arg, reply).await?,
        }
        Ok(())
    }

    fn cmd_start(&self, ctx: &mut UpdateContext, reply: &mut Reply) {
        if ctx.game.is_running {
            reply.public("Game is already running.");
            return;
        }
        if ctx.game.has_players() && !ctx.sender_matches_dm() {
            reply.public(
                "A game is already running and paused. \
                 Only if the DM ends the game can you start a new one in this channel.",
            );
            return;
        }

        let code = confirmation_code();
        reply.public(format!(
            "This is a serious action, you will start a new game and become its DM. \
             To make sure you really wanted to do that type /start {code}"
        ));
        ctx.game.reset_code = Some(code);
    }

    async fn cmd_start_confirmed<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if ctx.game.is_running {
            reply.public("Game is already running.");
            return Ok(());
        }
        let had_players = ctx.game.has_players();
        if had_players && !ctx.sender_matches_dm() {
            reply.public(
                "A game is already running and paused. \
                 Only if the DM ends the game can you start a new one in this channel.",
            );
            return Ok(());
        }

        if had_players {
            self.archive_and_rebind(conn, ctx).await?;
        }

        ctx.game.is_running = true;
        ctx.game.players.clear();

        let person = repos::persons::get_or_create(conn, ctx.sender_id).await?;
        let dm = repos::players::add(
            conn,
            ctx.game.id,
            &person,
            &ctx.sender_name,
            ctx.sender_username.as_deref(),
            false,
            true,
        )
        .await?;
        ctx.game.players.push(dm);

        info!(game_id = ctx.game.id, dm = %ctx.sender_name, "game started");
        reply.public("Game has started.");
        Ok(())
    }

    fn cmd_start_wrong(&self, ctx: &UpdateContext, reply: &mut Reply) {
        reply.public(format!(
            "Wrong confirmation code. If you're really sure, then type /start {}",
            ctx.game.reset_code.as_deref().unwrap_or_default()
        ));
    }

    fn cmd_end_game(&self, ctx: &mut UpdateContext, reply: &mut Reply) {
        if !ctx.game.is_running && !ctx.game.has_players() {
            reply.public("No game has been started yet.");
            return;
        }
        if !ctx.sender_matches_dm() {
            reply.public("Only the DM may end the game.");
            return;
        }

        let code = confirmation_code();
        reply.public(format!(
            "This is a serious action, this will end the game permanently and archive all \
             messages. To make sure you really wanted to do that type /endgame {code}"
        ));
        ctx.game.reset_code = Some(code);
    }

    async fn cmd_end_game_confirmed<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.is_running && !ctx.game.has_players() {
            reply.public("No game has been started yet.");
            return Ok(());
        }
        if !ctx.sender_matches_dm() {
            reply.public("Only the DM may end the game.");
            return Ok(());
        }

        if ctx.game.has_players() {
            self.archive_and_rebind(conn, ctx).await?;
        }

        ctx.game.is_running = false;
        ctx.game.players.clear();

        reply.public("Game archived.");
        Ok(())
    }

    fn cmd_end_game_wrong(&self, ctx: &UpdateContext, reply: &mut Reply) {
        reply.public(format!(
            "Wrong confirmation code. If you're really sure, then type /endgame {}",
            ctx.game.reset_code.as_deref().unwrap_or_default()
        ));
    }

    fn cmd_pause(&self, ctx: &mut UpdateContext, reply: &mut Reply) {
        if !ctx.game.is_running {
            reply.public("Game is not running.");
            return;
        }
        if !ctx.sender_is_dm() {
            reply.public("Only the DM can pause the game.");
            return;
        }

        ctx.game.is_running = false;
        reply.public("Game paused, everyone may speak freely, messages won't be recorded.");
    }

    fn cmd_resume(&self, ctx: &mut UpdateContext, reply: &mut Reply) {
        if ctx.game.is_running {
            reply.public("Game is already running.");
            return;
        }
        if !ctx.sender_is_dm() {
            reply.public(if ctx.game.has_players() {
                "Only the DM can resume the game."
            } else {
                "No game has been started in this channel yet."
            });
            return;
        }

        ctx.game.is_running = true;
        reply.public("Game resumed.");
    }

    async fn cmd_play<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.is_running && !ctx.game.has_players() {
            reply.public(
                "Game has not been started in this channel yet. \
                 To start the game, the designated DM should type /start",
            );
            return Ok(());
        }

        if let Some(player) = ctx.sending_player() {
            reply.public(if player.has_spoken {
                "You are already in the game, and you have already spoken this turn."
            } else {
                "You are already in the game, and you still may speak this turn."
            });
            return Ok(());
        }

        // A late joiner is locked out until the next turn as soon as anyone
        // has spoken in this one.
        let can_speak = ctx.game.players.iter().all(|p| !p.has_spoken);

        let person = repos::persons::get_or_create(conn, ctx.sender_id).await?;
        let player = repos::players::add(
            conn,
            ctx.game.id,
            &person,
            &ctx.sender_name,
            ctx.sender_username.as_deref(),
            !can_speak,
            false,
        )
        .await?;
        ctx.game.players.push(player);

        reply.public(ctx.game.roster_text());
        reply.public_blank();
        reply.public(if can_speak {
            format!(
                "{} has just joined. No one has spoken yet, so they may begin speaking immediately.",
                ctx.sender_name
            )
        } else {
            format!(
                "{} has just joined and must wait for the next turn before they can speak.",
                ctx.sender_name
            )
        });

        // Joining with the lockout flag can be exactly what completes the
        // turn, so the rollover check runs here too.
        advance_turn_if_complete(&mut ctx.game, reply);
        Ok(())
    }

    fn cmd_kick_list(&self, ctx: &UpdateContext, reply: &mut Reply) {
        if !ctx.game.has_players() {
            reply.public("No game exists yet");
            return;
        }
        if !ctx.sender_matches_dm() {
            reply.public("Only the DM can kick players from the game.");
            return;
        }

        reply.public(ctx.game.numbered_roster());
        reply.public_blank();
        reply.public("Use /kick ### (where ### is the number of player from the list)");
    }

    async fn cmd_kick<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        arg: Option<usize>,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.has_players() {
            reply.public("No game exists yet");
            return Ok(());
        }
        if !ctx.sender_matches_dm() {
            reply.public("Only the DM can kick players from the game.");
            return Ok(());
        }

        let number = match arg {
            Some(n) if (1..=ctx.game.players.len()).contains(&n) => n,
            _ => {
                reply.public(ctx.game.numbered_roster());
                reply.public_blank();
                reply.public("Use /kick ### (where ### is the number of player from the list)");
                return Ok(());
            }
        };

        let removed = ctx.game.players.remove(number - 1);
        repos::players::remove(conn, removed.id).await?;
        info!(game_id = ctx.game.id, kicked = %removed.display_name, "player kicked");
        reply.public(format!(
            "{} has been removed from the game (but may still rejoin).",
            removed.display_name
        ));

        // Removal can complete an otherwise-stalled turn.
        advance_turn_if_complete(&mut ctx.game, reply);
        Ok(())
    }

    async fn cmd_show_turn<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &UpdateContext,
        arg: Option<i32>,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.is_running && !ctx.game.has_players() {
            reply.public(
                "Game has not been started in this channel yet. \
                 To start a game the designated DM should type /start",
            );
            return Ok(());
        }

        let Some(turn) = arg else {
            reply.public("Use /showturn ### (where ### is the number of the turn)");
            return Ok(());
        };

        if turn > ctx.game.turn_number {
            reply.public(format!(
                "There is no turn {turn}, game is currently on turn {}",
                ctx.game.turn_number
            ));
            return Ok(());
        }

        let messages = repos::messages::for_turn(conn, ctx.game.id, turn).await?;
        if messages.is_empty() {
            reply.public(format!("No messages found for turn {turn}"));
            return Ok(());
        }

        let transcript = messages
            .iter()
            .map(|m| format!("{}: {}", m.sender_name, m.text))
            .collect::<Vec<_>>()
            .join("\n\n");
        reply.public(format!("Here are the messages sent on turn {turn} (in order):"));
        reply.public_blank();
        reply.public(transcript);
        Ok(())
    }

    fn cmd_status(&self, ctx: &UpdateContext, reply: &mut Reply) {
        if !ctx.game.is_running && !ctx.game.has_players() {
            reply.public(
                "Game has not been started in this channel yet. \
                 To start a game the designated DM should type /start",
            );
            return;
        }

        let spoken: Vec<&str> = ctx
            .game
            .players
            .iter()
            .filter(|p| p.has_spoken)
            .map(|p| p.display_name.as_str())
            .collect();
        let silent: Vec<&str> = ctx
            .game
            .players
            .iter()
            .filter(|p| !p.has_spoken)
            .map(|p| p.display_name.as_str())
            .collect();

        let spoken_line = if spoken.is_empty() {
            "No one has spoken yet this turn.".to_string()
        } else {
            format!(
                "The following players have already spoken: {}",
                spoken.join(", ")
            )
        };
        let silent_line = if spoken.is_empty() {
            "Everyone may speak.".to_string()
        } else {
            format!("These players are yet to speak: {}", silent.join(", "))
        };

        let extra = if ctx.sending_player().is_none() {
            "\n\nType /play to join the game."
        } else {
            "\n\nType /showturn ### to view messages on a specific turn"
        };
        let paused = if ctx.game.is_running {
            ""
        } else {
            "\n\nGame is paused."
        };

        reply.public(ctx.game.roster_text());
        reply.public_blank();
        reply.public(format!("We are currently on turn #{}", ctx.game.turn_number));
        reply.public(spoken_line);
        reply.public(format!("{silent_line}{extra}{paused}"));
    }

    fn cmd_help(&self, reply: &mut Reply) {
        reply.public("General commands: /help /status /play /showturn");
        reply.public("DM commands: /kick /pause /resume /endgame");
        reply.public("To start a fresh game type /start");
    }

    /// Archive the current game and continue the update on a freshly
    /// resolved game for the same (channel, thread). The archived game keeps
    /// its player rows for history.
    async fn archive_and_rebind<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
    ) -> Result<(), DomainError> {
        ctx.game.is_archived = true;
        repos::games::save(conn, &ctx.game).await?;

        let fresh =
            repos::games::get_or_create_active(conn, ctx.game.channel_id, ctx.game.thread_id)
                .await?;
        info!(
            archived = ctx.game.id,
            fresh = fresh.id,
            "game archived, rebinding update to fresh game"
        );
        ctx.game = fresh;
        Ok(())
    }
}
