//! Chat sessions: an append-only message log around one responder.

use std::sync::Arc;

use folio_core::error::FolioError;
use folio_core::message::{ChatMessage, Role};
use folio_core::traits::{Picker, Responder};
use tracing::{debug, info};
use uuid::Uuid;

use crate::reply;

/// One open chat surface. Discarded on close; nothing is persisted.
pub struct Session {
    id: Uuid,
    responder: Arc<dyn Responder>,
    subject: Option<String>,
    picker: Box<dyn Picker>,
    messages: Vec<ChatMessage>,
}

impl Session {
    /// Open a session. The log starts with the responder's greeting.
    pub fn new(
        responder: Arc<dyn Responder>,
        subject: Option<String>,
        picker: Box<dyn Picker>,
    ) -> Self {
        let id = Uuid::new_v4();
        let greeting = responder.greeting(subject.as_deref());
        info!(
            "session {id}: opened with {} (subject: {})",
            responder.name(),
            subject.as_deref().unwrap_or("none")
        );
        Self {
            id,
            responder,
            subject,
            picker,
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Send a user message and wait for the reply.
    ///
    /// Blank input is rejected without touching the log. Dropping the
    /// returned future before it resolves cancels the pending reply; the user
    /// message stays in the log and no reply is recorded.
    pub async fn send(&mut self, text: &str) -> Result<&ChatMessage, FolioError> {
        if text.trim().is_empty() {
            return Err(FolioError::EmptyMessage);
        }
        self.messages.push(ChatMessage::user(text));
        debug!(
            "session {}: {} message #{}",
            self.id,
            Role::User.as_str(),
            self.messages.len()
        );

        let pending = reply::respond(
            self.responder.as_ref(),
            text,
            self.subject.as_deref(),
            self.picker.as_mut(),
        );
        let Some(reply) = pending.wait().await else {
            return Err(FolioError::Cancelled);
        };

        self.messages.push(ChatMessage::assistant(reply));
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// The log as pretty-printed JSON.
    pub fn transcript_json(&self) -> Result<String, FolioError> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    /// Close the session and drop its log.
    pub fn close(self) {
        info!(
            "session {}: closed after {} messages",
            self.id,
            self.messages.len()
        );
    }
}
