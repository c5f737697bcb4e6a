// SPDX-License-Identifier: MPL-2.0
//! Chat backend client and conversation state.
//!
//! - [`api`] - [`ChatBackend`] port and its HTTP adapter
//! - [`state`] - conversation reducer driven by request outcomes
//! - [`types`] - domain messages and the JSON wire format

pub mod api;
pub mod state;
pub mod types;

pub use api::{ChatBackend, ChatError, ChatOperation, ChatResult, HttpChatClient};
pub use state::{ChatState, TranscriptEntry};
pub use types::{ChatHistory, ChatMessage, ChatReply, Sender};

use crate::i18n::I18n;

/// Panel title: the company name, or a generic label.
#[must_use]
pub fn panel_title(company: Option<&str>, i18n: &I18n) -> String {
    match company {
        Some(name) => name.to_string(),
        None => i18n.tr("chat-title-fallback"),
    }
}

/// Greeting shown while the conversation is empty.
#[must_use]
pub fn welcome_message(company: Option<&str>, i18n: &I18n) -> String {
    match company {
        Some(name) => i18n.tr_with_args("chat-welcome", &[("company", name)]),
        None => i18n.tr("chat-welcome-generic"),
    }
}
