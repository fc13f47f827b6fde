#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::HashMap;

use rrbot::domain::state::Game;
use rrbot::errors::domain::DomainError;
use rrbot::repos;
use rrbot::services::game_flow::{GameFlowService, UpdateContext, UpdateOutcome};
use rrbot::transport::{ChatEvent, NewMember};
use sea_orm::DatabaseConnection;

// Logging is auto-installed for all test binaries
#[ctor::ctor]
fn init_logging() {
    rrbot_test_support::logging::init();
}

pub const CHANNEL_ID: i64 = 7001;
pub const THREAD_ID: i32 = 0;

pub async fn fresh_db() -> DatabaseConnection {
    rrbot_test_support::db::fresh_db()
        .await
        .expect("fresh in-memory database")
}

/// One simulated channel over a fresh database.
///
/// Names map to stable sender ids, message ids count up like a real
/// channel's would. Every event goes through the full interpreter path:
/// resolve game, dispatch, persist.
pub struct Channel {
    pub db: DatabaseConnection,
    pub channel_id: i64,
    /// External id of the last event, for addressing edits at it.
    pub last_message_id: i64,
    service: GameFlowService,
    ids: HashMap<String, i64>,
    next_person_id: i64,
    next_message_id: i64,
}

impl Channel {
    pub async fn new() -> Self {
        Self {
            db: fresh_db().await,
            channel_id: CHANNEL_ID,
            last_message_id: 0,
            service: GameFlowService::new(),
            ids: HashMap::new(),
            next_person_id: 100,
            next_message_id: 0,
        }
    }

    pub fn id_of(&mut self, name: &str) -> i64 {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.next_person_id;
        self.next_person_id += 1;
        self.ids.insert(name.to_string(), id);
        id
    }

    fn event(&mut self, name: &str, text: Option<&str>) -> ChatEvent {
        self.next_message_id += 1;
        self.last_message_id = self.next_message_id;
        ChatEvent {
            channel_id: self.channel_id,
            thread_id: THREAD_ID,
            sender_id: self.id_of(name),
            sender_name: name.to_string(),
            sender_username: None,
            text: text.map(str::to_string),
            external_message_id: self.next_message_id,
            ..ChatEvent::default()
        }
    }

    pub async fn drive(&self, event: ChatEvent) -> Result<UpdateOutcome, DomainError> {
        let game =
            repos::games::get_or_create_active(&self.db, event.channel_id, event.thread_id).await?;
        let ctx = UpdateContext {
            game,
            text: event.text,
            sender_id: event.sender_id,
            sender_name: event.sender_name,
            sender_username: event.sender_username,
            external_message_id: event.external_message_id,
            is_edit: event.is_edit,
            is_private: event.is_private,
            added_members: event.added_members,
        };
        self.service.handle_update(&self.db, ctx).await
    }

    /// An ordinary channel message (or command) from `name`.
    pub async fn say(&mut self, name: &str, text: &str) -> Result<UpdateOutcome, DomainError> {
        let event = self.event(name, Some(text));
        self.drive(event).await
    }

    /// `name` edits the channel message with the given external id.
    pub async fn edit(
        &mut self,
        name: &str,
        external_message_id: i64,
        text: &str,
    ) -> Result<UpdateOutcome, DomainError> {
        let mut event = self.event(name, Some(text));
        event.external_message_id = external_message_id;
        event.is_edit = true;
        self.drive(event).await
    }

    /// `name` messages the bot in the private chat.
    pub async fn private(&mut self, name: &str, text: &str) -> Result<UpdateOutcome, DomainError> {
        let mut event = self.event(name, Some(text));
        event.is_private = true;
        self.drive(event).await
    }

    /// `adder` adds `member` to the channel.
    pub async fn add_member(
        &mut self,
        adder: &str,
        member: &str,
    ) -> Result<UpdateOutcome, DomainError> {
        let member_id = self.id_of(member);
        let mut event = self.event(adder, None);
        event.added_members = vec![NewMember {
            external_id: member_id,
            display_name: member.to_string(),
        }];
        self.drive(event).await
    }

    /// The current non-archived game of this channel, reloaded.
    pub async fn game(&self) -> Result<Game, DomainError> {
        repos::games::get_or_create_active(&self.db, self.channel_id, THREAD_ID).await
    }

    /// Run the `/start` handshake for `name` so the game is running with
    /// them as the DM.
    pub async fn start_game(&mut self, name: &str) -> Result<(), DomainError> {
        let out = self.say(name, "/start").await?;
        let code = extract_code(&out.reply.public_text().expect("start prompt"));
        let out = self.say(name, &format!("/start {code}")).await?;
        assert_eq!(out.reply.public_text().as_deref(), Some("Game has started."));
        Ok(())
    }
}

/// Pull the 4-digit confirmation code off the end of a prompt.
pub fn extract_code(prompt: &str) -> String {
    let code = prompt.rsplit(' ').next().unwrap_or_default().to_string();
    assert_eq!(code.len(), 4, "expected a 4-digit code at the end of: {prompt}");
    code
}
