//! Non-command paths: in-game messages, edits, membership notifications and
//! private chat.

use sea_orm::ConnectionTrait;
use tracing::debug;

use super::{GameFlowService, UpdateContext};
use crate::domain::output::Reply;
use crate::domain::turns::advance_turn_if_complete;
use crate::errors::domain::DomainError;
use crate::repos;

impl GameFlowService {
    /// An ordinary channel message while the game is running: record it,
    /// mark the player spoken and roll the turn when complete. While the
    /// game is paused or not started the message passes through untouched.
    pub(super) async fn handle_game_message<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.is_running {
            // Free chat while paused; nothing is recorded.
            return Ok(());
        }

        let person = repos::persons::get_or_create(conn, ctx.sender_id).await?;

        let Some(index) = ctx
            .game
            .players
            .iter()
            .position(|p| p.external_id == ctx.sender_id)
        else {
            // Non-players may chat without joining the rotation.
            return Ok(());
        };

        if ctx.game.players[index].has_spoken {
            reply.request_delete(ctx.external_message_id);
            if person.initiated_private_chat {
                reply.private(format!(
                    "You have already spoken this turn (turn #{}). This is your message:",
                    ctx.game.turn_number
                ));
                reply.private_blank();
                reply.private(ctx.text.clone().unwrap_or_default());
            } else {
                // No private channel to preserve the text in; say so publicly.
                reply.public(format!(
                    "{name} has tried to send a message out of turn, but they did not initiate \
                     a chat with me so I cannot preserve that message in their private chat.\
                     \n\n{name}, please send the bot a private message (or alternatively press \
                     the 'Start' button in the private chat with the bot)",
                    name = ctx.sender_name
                ));
            }
            return Ok(());
        }

        if let Some(text) = ctx.text.clone() {
            repos::messages::add(
                conn,
                ctx.game.id,
                ctx.game.players[index].id,
                ctx.game.turn_number,
                ctx.external_message_id,
                &text,
            )
            .await?;
            ctx.game.players[index].has_spoken = true;
            debug!(
                game_id = ctx.game.id,
                turn = ctx.game.turn_number,
                player = %ctx.game.players[index].display_name,
                "recorded in-turn message"
            );

            advance_turn_if_complete(&mut ctx.game, reply);
        }
        Ok(())
    }

    /// An edit of a non-private message. Same-turn edits amend the stored
    /// text in place; past-turn edits get deleted and called out.
    pub(super) async fn handle_edit<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.is_running {
            return Ok(());
        }
        let Some(player) = ctx.sending_player() else {
            return Ok(());
        };
        let display_name = player.display_name.clone();

        let Some(stored) =
            repos::messages::by_external_id(conn, ctx.game.id, ctx.external_message_id).await?
        else {
            return Ok(());
        };

        let new_text = ctx.text.clone().unwrap_or_default();
        if stored.text == new_text {
            return Ok(());
        }

        if stored.turn_no == ctx.game.turn_number {
            // Still the active turn; the edit is allowed in place.
            repos::messages::update_text(conn, stored.id, &new_text).await?;
            return Ok(());
        }

        reply.request_delete(ctx.external_message_id);
        reply.public(format!(
            "{display_name} has edited their message from turn {}, \
             the edited message has been deleted.",
            stored.turn_no
        ));
        reply.private(format!(
            "You have edited one of your in game messages from turn {}. \
             It is not allowed to edit past game messages, your edited message has been \
             deleted. This was your edit: {new_text}",
            stored.turn_no
        ));
        Ok(())
    }

    /// Welcome members newly added to the channel while a game is running.
    pub(super) async fn handle_members_added<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        if !ctx.game.is_running {
            return Ok(());
        }

        let person = repos::persons::get_or_create(conn, ctx.sender_id).await?;

        for member in &ctx.added_members {
            if ctx.game.player_by_external(member.external_id).is_some() {
                continue;
            }

            let extra = if person.initiated_private_chat {
                ""
            } else {
                "\n\nNote: if this is your first time here, please go to the private chat \
                 with the bot and send me a message (or you can just click the 'Start' \
                 button there)"
            };

            reply.public(format!(
                "Welcome, {}. Type /help for help, /status for game status, \
                 or type /play to join the game.",
                member.display_name
            ));
            reply.public(format!("{}{extra}", ctx.game.roster_text()));
        }
        Ok(())
    }

    /// A message in the bot's private chat. First contact opens the private
    /// reply channel; anything after that just reports participation.
    ///
    /// Lines go to the public buffer: the driver flushes it to the
    /// originating chat, which here is the private chat itself.
    pub(super) async fn handle_private_message<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ctx: &mut UpdateContext,
        reply: &mut Reply,
    ) -> Result<(), DomainError> {
        let mut person = repos::persons::get_or_create(conn, ctx.sender_id).await?;

        if !person.initiated_private_chat {
            reply.public(
                "Thank you for sending me a message, now I can reply to you privately if you \
                 accidentally speak out of turn so that your message won't get lost.",
            );
            repos::persons::mark_initiated(conn, &mut person).await?;
        } else {
            let games = repos::persons::distinct_game_count(conn, person.id).await?;
            reply.public(format!(
                "Additional messages here have no effect, please chat in one of your game \
                 channels. You are currently participating in {games} games."
            ));
        }
        Ok(())
    }
}
