// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the floating chat widget.
//!
//! The `App` struct wires together the viewport controller, the chat
//! conversation, voice input and localization, and translates messages into
//! side effects like backend requests or session persistence.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::chat::{ChatState, HttpChatClient};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::speech::VoiceInput;
use crate::ui::state::{PanelSize, ViewportController};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    controller: ViewportController,
    chat: ChatState,
    voice: VoiceInput,
    /// Text typed in the footer input.
    input: String,
    /// Company name reported by the backend.
    company: Option<String>,
    /// Persisted application state (chat session id).
    app_state: persisted_state::AppState,
    config: Config,
    backend: HttpChatClient,
    /// Resolved once at startup so System mode does not query the OS every frame.
    theme: Theme,
    /// Last cursor position in window coordinates.
    cursor: Point,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("panel_open", &self.controller.is_panel_open())
            .field("mode", &self.controller.mode().name())
            .field("session_id", &self.chat.session_id())
            .field("backend", &self.backend.base_url())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;

/// Everything `App::new` needs, prepared before the event loop starts.
#[derive(Debug, Clone)]
struct Boot {
    lang: Option<String>,
    config: Config,
    config_warning: Option<String>,
    backend: HttpChatClient,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let (config, config_warning) = config::load();
    let backend_url = config.backend_url(flags.backend_url.as_deref());
    let backend = HttpChatClient::new(&backend_url)?;
    log::info!("Using chat backend at {}", backend.base_url());

    let boot_state = Boot {
        lang: flags.lang,
        config,
        config_warning,
        backend,
    };
    // iced 0.14 requires an `Fn` boot function.
    let boot = move || App::new(boot_state.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Window(err.to_string()))
}

impl App {
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let i18n = I18n::new(boot.lang, &boot.config);
        if let Some(key) = boot.config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let (app_state, state_warning) = persisted_state::AppState::load();
        if let Some(key) = state_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let (width, height) = boot.config.widget.initial_panel_size();
        let controller = ViewportController::new(
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            PanelSize::new(width, height),
        );

        let mut app = App {
            i18n,
            controller,
            chat: ChatState::default(),
            voice: VoiceInput::default(),
            input: String::new(),
            company: None,
            app_state,
            theme: boot.config.general.theme_mode.iced_theme(),
            config: boot.config,
            backend: boot.backend,
            cursor: Point::ORIGIN,
        };

        let task = update::startup_tasks(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_, HttpChatClient> {
        update::UpdateContext {
            i18n: &self.i18n,
            controller: &mut self.controller,
            chat: &mut self.chat,
            voice: &mut self.voice,
            input: &mut self.input,
            company: &mut self.company,
            app_state: &mut self.app_state,
            config: &mut self.config,
            data_dir: None,
            config_dir: None,
            cursor: &mut self.cursor,
            backend: &self.backend,
        }
    }

    fn title(&self) -> String {
        match &self.company {
            Some(company) => format!("{company} - {}", self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(&mut self.update_context(), message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            chat: &self.chat,
            voice: &self.voice,
            input: &self.input,
            company: self.company.as_deref(),
        })
    }
}
