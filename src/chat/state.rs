// SPDX-License-Identifier: MPL-2.0
//! Chat conversation state.
//!
//! Each backend request moves through pending, fulfilled and rejected
//! transitions. Only one request is in flight at a time: every `begin_*`
//! method refuses to start while another request is pending.

use super::types::{ChatHistory, ChatMessage, ChatReply};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    session_id: Option<String>,
    loading: bool,
    error: Option<String>,
    /// User text of the in-flight `chat` request, appended once the reply arrives.
    pending_message: Option<String>,
}

/// One row of the rendered conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptEntry<'a> {
    /// Placeholder bubble while a request is pending.
    Thinking,
    Error(&'a str),
    /// Greeting shown in place of an empty conversation.
    Welcome,
    Message(&'a ChatMessage),
}

impl ChatState {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn start_request(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    // ---------------------------------------------------------------------
    // initSession
    // ---------------------------------------------------------------------

    /// Returns false if another request is pending.
    pub fn begin_init(&mut self) -> bool {
        self.start_request()
    }

    /// A fresh session starts with an empty conversation.
    pub fn init_succeeded(&mut self, session_id: String) {
        self.loading = false;
        self.session_id = Some(session_id);
        self.messages.clear();
    }

    // ---------------------------------------------------------------------
    // chat
    // ---------------------------------------------------------------------

    /// Starts sending `text`.
    ///
    /// Returns the trimmed text to send, or `None` if it is blank or another
    /// request is pending.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !self.start_request() {
            return None;
        }
        self.pending_message = Some(trimmed.to_string());
        Some(trimmed.to_string())
    }

    /// Appends the user message and the bot reply.
    pub fn send_succeeded(&mut self, reply: ChatReply) {
        self.loading = false;
        self.session_id = Some(reply.session_id);
        if let Some(text) = self.pending_message.take() {
            self.messages.push(ChatMessage::user(text));
        }
        self.messages.push(ChatMessage::bot(reply.result));
    }

    // ---------------------------------------------------------------------
    // getChatHistory
    // ---------------------------------------------------------------------

    /// Returns false if another request is pending.
    pub fn begin_history(&mut self) -> bool {
        self.start_request()
    }

    /// Replaces the conversation with the restored one.
    pub fn history_loaded(&mut self, history: ChatHistory) {
        self.loading = false;
        self.session_id = Some(history.session_id);
        self.messages = history.messages;
    }

    // ---------------------------------------------------------------------
    // Any request
    // ---------------------------------------------------------------------

    /// Ends the pending request with a user-facing error.
    pub fn request_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
        self.pending_message = None;
    }

    /// Rows to render, in display order.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry<'_>> {
        let mut entries = Vec::with_capacity(self.messages.len() + 2);

        if self.loading && self.messages.is_empty() {
            entries.push(TranscriptEntry::Thinking);
        }
        if let Some(error) = &self.error {
            entries.push(TranscriptEntry::Error(error));
        }
        if self.messages.is_empty() && !self.loading && self.error.is_none() {
            entries.push(TranscriptEntry::Welcome);
        }
        entries.extend(self.messages.iter().map(TranscriptEntry::Message));
        if self.loading && !self.messages.is_empty() {
            entries.push(TranscriptEntry::Thinking);
        }

        entries
    }
}
