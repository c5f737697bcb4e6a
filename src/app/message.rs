// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::chat::{ChatHistory, ChatReply, ChatResult};
use crate::speech::SpeechEvent;
use crate::ui::chat_panel;
use crate::ui::launcher;
use iced::{Point, Size};

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through `Launcher` and `Panel`; native events and backend
/// results arrive directly.
#[derive(Debug, Clone)]
pub enum Message {
    Launcher(launcher::Message),
    Panel(chat_panel::Message),
    /// Cursor position in window coordinates, tracked globally so gestures
    /// keep following the pointer outside the widget.
    CursorMoved(Point),
    /// Primary button released anywhere in the window.
    PointerReleased,
    /// Window opened or resized.
    ViewportResized(Size),
    Speech(SpeechEvent),
    CompanyNameLoaded(ChatResult<Option<String>>),
    SessionInitialized(ChatResult<String>),
    ReplyReceived(ChatResult<ChatReply>),
    HistoryLoaded(ChatResult<ChatHistory>),
}

/// Runtime flags passed from `main.rs` into the application on startup.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL, taking precedence over the config file.
    pub backend_url: Option<String>,
    /// Optional data directory override (for the session state file).
    /// Takes precedence over `FLOAT_CHAT_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLOAT_CHAT_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
