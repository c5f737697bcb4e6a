// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers work on an [`UpdateContext`] that borrows the pieces of `App` they
//! need. Backend calls are generic over [`ChatBackend`] so the session flow can
//! be exercised with an in-memory backend.

use super::persisted_state::AppState;
use super::Message;
use crate::chat::{ChatBackend, ChatHistory, ChatOperation, ChatReply, ChatResult, ChatState};
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::speech::{self, SpeechEvent, VoiceInput};
use crate::ui::chat_panel;
use crate::ui::launcher;
use crate::ui::state::{PointerTarget, ViewportController};
use iced::{Point, Size, Task};
use std::path::PathBuf;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a, B: ChatBackend> {
    pub i18n: &'a I18n,
    pub controller: &'a mut ViewportController,
    pub chat: &'a mut ChatState,
    pub voice: &'a mut VoiceInput,
    pub input: &'a mut String,
    pub company: &'a mut Option<String>,
    pub app_state: &'a mut AppState,
    pub config: &'a mut Config,
    /// Directory overrides for the state and config files (`None` resolves the default).
    pub data_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    /// Last cursor position reported by the event subscription.
    pub cursor: &'a mut Point,
    pub backend: &'a B,
}

/// Dispatches one message.
pub fn update<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    message: Message,
) -> Task<Message> {
    match message {
        Message::Launcher(launcher::Message::Pressed) => {
            handle_pointer_pressed(ctx, PointerTarget::Launcher)
        }
        Message::Panel(panel_message) => handle_panel_message(ctx, panel_message),
        Message::CursorMoved(position) => handle_cursor_moved(ctx, position),
        Message::PointerReleased => handle_pointer_released(ctx),
        Message::ViewportResized(size) => handle_viewport_resized(ctx, size),
        Message::Speech(event) => handle_speech_event(ctx, event),
        Message::CompanyNameLoaded(result) => handle_company_name(ctx, result),
        Message::SessionInitialized(result) => handle_session_initialized(ctx, result),
        Message::ReplyReceived(result) => handle_reply(ctx, result),
        Message::HistoryLoaded(result) => handle_history(ctx, result),
    }
}

/// Requests issued once at startup: the company name, and the stored
/// conversation when a session id survived the last run.
pub fn startup_tasks<B: ChatBackend>(ctx: &mut UpdateContext<'_, B>) -> Task<Message> {
    let company = Task::perform(ctx.backend.company_name(), Message::CompanyNameLoaded);

    let history = match ctx.app_state.chat_session_id.clone() {
        Some(session_id) if ctx.chat.begin_history() => {
            log::info!("Restoring chat session {session_id}");
            Task::perform(ctx.backend.history(session_id), Message::HistoryLoaded)
        }
        _ => Task::none(),
    };

    Task::batch([company, history])
}

// =============================================================================
// Pointer and viewport
// =============================================================================

fn handle_pointer_pressed<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    target: PointerTarget,
) -> Task<Message> {
    ctx.controller.pointer_down(target, *ctx.cursor);
    Task::none()
}

fn handle_cursor_moved<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    position: Point,
) -> Task<Message> {
    *ctx.cursor = position;
    ctx.controller.pointer_moved(position);
    Task::none()
}

fn handle_pointer_released<B: ChatBackend>(ctx: &mut UpdateContext<'_, B>) -> Task<Message> {
    let release = ctx.controller.pointer_up(*ctx.cursor);
    if release.ended.is_resizing() {
        remember_panel_size(ctx);
    }
    if release.launcher_clicked {
        ctx.controller.toggle_panel();
        if ctx.controller.is_panel_open() {
            return ensure_session(ctx);
        }
    }
    Task::none()
}

/// Saves the resized panel size as the size to start with next time.
fn remember_panel_size<B: ChatBackend>(ctx: &mut UpdateContext<'_, B>) {
    let size = ctx.controller.panel_size();
    ctx.config.widget.panel_width = Some(size.width);
    ctx.config.widget.panel_height = Some(size.height);

    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        log::warn!("{}: {err}", ctx.i18n.tr("notification-config-save-error"));
    }
}

fn handle_viewport_resized<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    size: Size,
) -> Task<Message> {
    if ctx.controller.set_viewport(size) {
        log::debug!("Viewport resized to {}x{}", size.width, size.height);
    }
    Task::none()
}

// =============================================================================
// Chat panel
// =============================================================================

fn handle_panel_message<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    message: chat_panel::Message,
) -> Task<Message> {
    match message {
        chat_panel::Message::Pressed(target) => handle_pointer_pressed(ctx, target),
        chat_panel::Message::Close => {
            ctx.controller.close_panel();
            Task::none()
        }
        chat_panel::Message::InputChanged(text) => {
            *ctx.input = text;
            Task::none()
        }
        chat_panel::Message::Send => handle_send(ctx),
        chat_panel::Message::ToggleVoice => {
            ctx.voice.toggle();
            Task::none()
        }
    }
}

fn handle_send<B: ChatBackend>(ctx: &mut UpdateContext<'_, B>) -> Task<Message> {
    let Some(text) = ctx.chat.begin_send(ctx.input.as_str()) else {
        return Task::none();
    };

    ctx.voice.stop();
    ctx.input.clear();

    let session_id = ctx
        .chat
        .session_id()
        .or(ctx.app_state.chat_session_id.as_deref())
        .map(str::to_string);
    Task::perform(
        ctx.backend.send_message(text, session_id),
        Message::ReplyReceived,
    )
}

/// Starts a backend session when the panel opens without one.
fn ensure_session<B: ChatBackend>(ctx: &mut UpdateContext<'_, B>) -> Task<Message> {
    let has_session =
        ctx.chat.session_id().is_some() || ctx.app_state.chat_session_id.is_some();
    if has_session || !ctx.chat.begin_init() {
        return Task::none();
    }
    Task::perform(ctx.backend.init_session(), Message::SessionInitialized)
}

fn handle_speech_event<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    event: SpeechEvent,
) -> Task<Message> {
    if let Some(transcript) = ctx.voice.handle_event(event) {
        *ctx.input = speech::append_transcript(ctx.input.as_str(), &transcript);
    }
    Task::none()
}

// =============================================================================
// Backend results
// =============================================================================

fn handle_company_name<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    result: ChatResult<Option<String>>,
) -> Task<Message> {
    match result {
        Ok(name) => *ctx.company = name,
        // The title and greeting fall back to generic text.
        Err(err) => log::warn!(
            "{}: {err}",
            err.user_message(ChatOperation::CompanyName, ctx.i18n)
        ),
    }
    Task::none()
}

fn handle_session_initialized<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    result: ChatResult<String>,
) -> Task<Message> {
    match result {
        Ok(session_id) => {
            persist_session(ctx, &session_id);
            ctx.chat.init_succeeded(session_id);
        }
        Err(err) => fail_request(ctx, ChatOperation::InitSession, &err),
    }
    Task::none()
}

fn handle_reply<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    result: ChatResult<ChatReply>,
) -> Task<Message> {
    match result {
        Ok(reply) => {
            persist_session(ctx, &reply.session_id);
            ctx.chat.send_succeeded(reply);
        }
        Err(err) => fail_request(ctx, ChatOperation::SendMessage, &err),
    }
    Task::none()
}

fn handle_history<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    result: ChatResult<ChatHistory>,
) -> Task<Message> {
    match result {
        Ok(history) => {
            persist_session(ctx, &history.session_id);
            ctx.chat.history_loaded(history);
        }
        Err(err) => fail_request(ctx, ChatOperation::History, &err),
    }
    Task::none()
}

fn fail_request<B: ChatBackend>(
    ctx: &mut UpdateContext<'_, B>,
    operation: ChatOperation,
    err: &crate::chat::ChatError,
) {
    ctx.chat.request_failed(err.user_message(operation, ctx.i18n));
}

/// Stores the session id the backend reported, if it changed.
fn persist_session<B: ChatBackend>(ctx: &mut UpdateContext<'_, B>, session_id: &str) {
    if !ctx.app_state.remember_session(session_id) {
        return;
    }
    if let Some(key) = ctx.app_state.save_to(ctx.data_dir.clone()) {
        log::warn!("{}", ctx.i18n.tr(&key));
    }
}
