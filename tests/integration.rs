// SPDX-License-Identifier: MPL-2.0
use float_chat::app::persisted_state::AppState;
use float_chat::config::{self, Config};
use float_chat::i18n::I18n;
use float_chat::ui::state::{
    PanelSize, PointerTarget, ResizeHandle, TooltipSide, ViewportController,
};
use iced::{Point, Size};
use tempfile::tempdir;

fn controller() -> ViewportController {
    ViewportController::new(Size::new(1280.0, 800.0), PanelSize::new(300.0, 400.0))
}

#[test]
fn full_widget_session() {
    let mut ctrl = controller();
    assert_eq!(ctrl.launcher().as_point(), Point::new(1200.0, 720.0));
    assert_eq!(ctrl.tooltip_side(), TooltipSide::Left);

    // Click the launcher: press and release without moving.
    assert!(ctrl.pointer_down(PointerTarget::Launcher, Point::new(1200.0, 720.0)));
    let release = ctrl.pointer_up(Point::new(1200.0, 720.0));
    assert!(release.launcher_clicked);
    ctrl.toggle_panel();
    assert!(ctrl.is_panel_open());
    assert_eq!(ctrl.panel_bounds().position(), Point::new(930.0, 350.0));

    // Drag the panel by its header.
    assert!(ctrl.pointer_down(PointerTarget::PanelHeader, Point::new(1000.0, 360.0)));
    ctrl.pointer_moved(Point::new(500.0, 100.0));
    assert_eq!(ctrl.panel_bounds().position(), Point::new(430.0, 90.0));
    assert_eq!(ctrl.launcher().as_point(), Point::new(700.0, 460.0));

    // Dragging past the corner pins the panel to the viewport.
    ctrl.pointer_moved(Point::new(-500.0, -500.0));
    assert_eq!(ctrl.panel_bounds().position(), Point::ORIGIN);
    ctrl.pointer_up(Point::new(-500.0, -500.0));
    assert!(ctrl.mode().is_idle());

    // Widen from the right edge; the panel stops at the viewport edge.
    assert!(ctrl.pointer_down(
        PointerTarget::ResizeHandle(ResizeHandle::Right),
        Point::new(300.0, 200.0)
    ));
    ctrl.pointer_moved(Point::new(2300.0, 200.0));
    ctrl.pointer_up(Point::new(2300.0, 200.0));
    assert_eq!(ctrl.panel_size(), PanelSize::new(1280.0, 400.0));
    assert_eq!(ctrl.launcher().as_point(), Point::new(1250.0, 370.0));

    // Closing leaves the launcher on the panel's bottom-right corner.
    ctrl.close_panel();
    assert!(!ctrl.is_panel_open());
    assert_eq!(ctrl.launcher().as_point(), Point::new(1250.0, 370.0));
    assert_eq!(ctrl.tooltip_side(), TooltipSide::Left);

    // Dragging the launcher is not a click and moves the tooltip to the right.
    assert!(ctrl.pointer_down(PointerTarget::Launcher, Point::new(1250.0, 370.0)));
    ctrl.pointer_moved(Point::new(100.0, 400.0));
    let release = ctrl.pointer_up(Point::new(100.0, 400.0));
    assert!(!release.launcher_clicked);
    assert_eq!(ctrl.launcher().as_point(), Point::new(100.0, 400.0));
    assert_eq!(ctrl.tooltip_side(), TooltipSide::Right);
}

#[test]
fn presses_on_hidden_regions_are_ignored() {
    let mut ctrl = controller();
    assert!(!ctrl.pointer_down(PointerTarget::PanelHeader, Point::new(1000.0, 400.0)));
    assert!(!ctrl.pointer_down(
        PointerTarget::ResizeHandle(ResizeHandle::TopLeft),
        Point::new(900.0, 350.0)
    ));

    ctrl.open_panel();
    assert!(!ctrl.pointer_down(PointerTarget::Launcher, Point::new(1200.0, 720.0)));
    assert!(!ctrl.pointer_down(PointerTarget::CloseControl, Point::new(1210.0, 360.0)));
    assert!(ctrl.mode().is_idle());
}

#[test]
fn shrinking_viewport_keeps_open_panel_visible() {
    let mut ctrl = controller();
    ctrl.open_panel();
    assert!(ctrl.set_viewport(Size::new(640.0, 480.0)));

    let bounds = ctrl.panel_bounds();
    assert!(bounds.x >= 0.0 && bounds.x + bounds.width <= 640.0);
    assert!(bounds.y >= 0.0 && bounds.y + bounds.height <= 480.0);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("launcher-tooltip"), "Open Chat");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("launcher-tooltip"), "Ouvrir le chat");
}

#[test]
fn saved_panel_size_is_used_at_startup() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.widget.panel_width = Some(420.0);
    saved.widget.panel_height = Some(120.0);
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    // Heights below the minimum are raised to it.
    assert_eq!(loaded.widget.initial_panel_size(), (420.0, 250.0));
}

#[test]
fn chat_session_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut state = AppState::default();
    assert!(state.remember_session("abc-123"));
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (restored, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(restored.chat_session_id.as_deref(), Some("abc-123"));
}
