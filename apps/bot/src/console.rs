//! Local console transport for playing the game in a terminal.
//!
//! Each input line is one channel event from a simulated sender. Output
//! that would go to the chat service is printed to stdout instead.
//!
//! Line forms:
//!   <name>: <text>            channel message from <name>
//!   !edit <name> <id> <text>  <name> edits channel message <id>
//!   !private <name> <text>    <name> messages the bot privately
//!   !join <name> <member>     <name> adds <member> to the channel
//!   quit

use std::collections::HashMap;
use std::io::{self, BufRead};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::error;

use rrbot::services::game_flow::GameFlowService;
use rrbot::services::update_runner::run_update;
use rrbot::transport::{ChatEvent, ChatTransport, NewMember, TransportError};

const CHANNEL_ID: i64 = 1;

/// Prints outbound traffic instead of delivering it.
pub struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_public(
        &mut self,
        _channel_id: i64,
        _thread_id: i32,
        text: &str,
    ) -> Result<(), TransportError> {
        println!("[channel]\n{text}\n");
        Ok(())
    }

    async fn send_private(&mut self, recipient_id: i64, text: &str) -> Result<(), TransportError> {
        println!("[private to {recipient_id}]\n{text}\n");
        Ok(())
    }

    async fn delete_message(
        &mut self,
        _channel_id: i64,
        external_message_id: i64,
    ) -> Result<(), TransportError> {
        println!("[deleted message {external_message_id}]\n");
        Ok(())
    }
}

/// Maps console names to stable external ids and numbers the messages.
struct Session {
    ids: HashMap<String, i64>,
    next_person_id: i64,
    next_message_id: i64,
}

impl Session {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
            next_person_id: 100,
            next_message_id: 1,
        }
    }

    fn person_id(&mut self, name: &str) -> i64 {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.next_person_id;
        self.next_person_id += 1;
        self.ids.insert(name.to_string(), id);
        id
    }

    fn message_id(&mut self) -> i64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    fn event(&mut self, name: &str, text: &str) -> ChatEvent {
        ChatEvent {
            channel_id: CHANNEL_ID,
            thread_id: 0,
            sender_id: self.person_id(name),
            sender_name: name.to_string(),
            sender_username: None,
            text: Some(text.to_string()),
            external_message_id: self.message_id(),
            ..ChatEvent::default()
        }
    }

    fn parse(&mut self, line: &str) -> Option<ChatEvent> {
        if let Some(rest) = line.strip_prefix("!private ") {
            let (name, text) = rest.split_once(' ')?;
            let mut event = self.event(name, text);
            event.is_private = true;
            return Some(event);
        }
        if let Some(rest) = line.strip_prefix("!edit ") {
            let (name, rest) = rest.split_once(' ')?;
            let (id, text) = rest.split_once(' ')?;
            let mut event = self.event(name, text);
            event.external_message_id = id.parse().ok()?;
            event.is_edit = true;
            return Some(event);
        }
        if let Some(rest) = line.strip_prefix("!join ") {
            let (name, member) = rest.split_once(' ')?;
            let mut event = self.event(name, "");
            event.text = None;
            event.added_members = vec![NewMember {
                external_id: self.person_id(member),
                display_name: member.to_string(),
            }];
            return Some(event);
        }
        let (name, text) = line.split_once(": ")?;
        Some(self.event(name, text))
    }
}

/// Read events from stdin until EOF or `quit`.
pub async fn run(db: &DatabaseConnection) {
    let service = GameFlowService::new();
    let mut transport = ConsoleTransport;
    let mut session = Session::new();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let Some(event) = session.parse(line) else {
            println!("[unrecognized input, expected '<name>: <text>']\n");
            continue;
        };

        if let Err(err) = run_update(db, &service, &mut transport, event).await {
            error!(%err, "update failed");
        }
    }
}
