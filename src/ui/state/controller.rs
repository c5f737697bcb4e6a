// SPDX-License-Identifier: MPL-2.0
//! Viewport interaction controller.
//!
//! Owns the launcher position, the panel size, the open/closed flag and the
//! active pointer gesture. Pointer presses enter a gesture, pointer moves are
//! dispatched on the active [`InteractionMode`], and a release anywhere returns
//! to [`InteractionMode::Idle`]. The panel position is always derived from the
//! launcher (see [`PanelPosition::anchored_to`]), so the two cannot drift apart.

use super::drag::DragAnchor;
use super::geometry::{
    resize_far_edge, resize_near_edge, LauncherPosition, PanelPosition, PanelSize, WidgetMetrics,
};
use super::interaction::{InteractionMode, PointerTarget, ResizeHandle};
use super::tooltip::{tooltip_side, TooltipSide};
use super::viewport::ViewportState;
use crate::config::LAUNCHER_INSET;
use iced::{Point, Rectangle, Size, Vector};

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRelease {
    /// Gesture that the release ended.
    pub ended: InteractionMode,
    /// The release completes a press on the launcher that never turned into a drag.
    pub launcher_clicked: bool,
}

/// Geometry and gesture state of the floating chat widget.
#[derive(Debug, Clone)]
pub struct ViewportController {
    metrics: WidgetMetrics,
    viewport: ViewportState,
    launcher: LauncherPosition,
    panel_size: PanelSize,
    panel_open: bool,
    mode: InteractionMode,
    tooltip_side: TooltipSide,
}

impl ViewportController {
    /// Creates the controller with the launcher inset from the bottom-right corner.
    #[must_use]
    pub fn new(viewport: Size, panel_size: PanelSize) -> Self {
        Self::with_metrics(viewport, panel_size, WidgetMetrics::default())
    }

    #[must_use]
    pub fn with_metrics(viewport: Size, panel_size: PanelSize, metrics: WidgetMetrics) -> Self {
        let launcher = LauncherPosition::new(
            viewport.width - LAUNCHER_INSET,
            viewport.height - LAUNCHER_INSET,
        )
        .clamped(viewport, metrics.button_radius);

        Self {
            metrics,
            viewport: ViewportState::new(viewport),
            launcher,
            panel_size: PanelSize::new(
                panel_size.width.max(metrics.min_width),
                panel_size.height.max(metrics.min_height),
            ),
            panel_open: false,
            mode: InteractionMode::Idle,
            tooltip_side: TooltipSide::default(),
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn metrics(&self) -> WidgetMetrics {
        self.metrics
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport.size
    }

    #[must_use]
    pub fn launcher(&self) -> LauncherPosition {
        self.launcher
    }

    #[must_use]
    pub fn panel_size(&self) -> PanelSize {
        self.panel_size
    }

    /// Panel top-left corner, derived from the launcher.
    #[must_use]
    pub fn panel_position(&self) -> PanelPosition {
        PanelPosition::anchored_to(self.launcher, self.panel_size, self.metrics.button_radius)
    }

    #[must_use]
    pub fn panel_bounds(&self) -> Rectangle {
        Rectangle::new(
            self.panel_position().as_point(),
            Size::new(self.panel_size.width, self.panel_size.height),
        )
    }

    /// Launcher bounding square.
    #[must_use]
    pub fn launcher_bounds(&self) -> Rectangle {
        let radius = self.metrics.button_radius;
        Rectangle::new(
            self.launcher.as_point() - Vector::new(radius, radius),
            Size::new(radius * 2.0, radius * 2.0),
        )
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        !self.mode.is_idle()
    }

    #[must_use]
    pub fn tooltip_side(&self) -> TooltipSide {
        self.tooltip_side
    }

    // ---------------------------------------------------------------------
    // Pointer handlers
    // ---------------------------------------------------------------------

    /// Starts a gesture for a press on `target`.
    ///
    /// Returns true if a gesture started. Presses are ignored while another
    /// gesture is active, on the close control, and on regions that are not
    /// currently visible.
    pub fn pointer_down(&mut self, target: PointerTarget, pointer: Point) -> bool {
        if !self.mode.is_idle() {
            return false;
        }

        let mode = match target {
            PointerTarget::Launcher if !self.panel_open => InteractionMode::DraggingLauncher {
                anchor: DragAnchor::capture(pointer, self.launcher.as_point()),
                moved: false,
            },
            PointerTarget::PanelHeader if self.panel_open => InteractionMode::DraggingPanel {
                anchor: DragAnchor::capture(pointer, self.panel_position().as_point()),
            },
            PointerTarget::ResizeHandle(handle) if self.panel_open => InteractionMode::Resizing {
                handle,
                last_pointer: pointer,
            },
            _ => return false,
        };

        log::debug!("Pointer gesture started: {}", mode.name());
        self.mode = mode;
        true
    }

    /// Applies a pointer move to the active gesture.
    ///
    /// Returns true if the geometry changed.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        match self.mode {
            InteractionMode::Idle => false,
            InteractionMode::DraggingLauncher { anchor, moved } => {
                self.launcher = LauncherPosition::from(anchor.entity_position(pointer))
                    .clamped(self.viewport.size, self.metrics.button_radius);
                self.mode = InteractionMode::DraggingLauncher {
                    anchor,
                    moved: moved || anchor.exceeds(pointer, self.metrics.click_slop),
                };
                self.refresh_tooltip_side();
                true
            }
            InteractionMode::DraggingPanel { anchor } => {
                let top_left = anchor.entity_position(pointer);
                let panel = PanelPosition::new(top_left.x, top_left.y)
                    .clamped(self.panel_size, self.viewport.size);
                self.launcher = panel.launcher(self.panel_size, self.metrics.button_radius);
                self.refresh_tooltip_side();
                true
            }
            InteractionMode::Resizing {
                handle,
                last_pointer,
            } => {
                self.resize(handle, pointer - last_pointer);
                self.mode = InteractionMode::Resizing {
                    handle,
                    last_pointer: pointer,
                };
                true
            }
        }
    }

    /// Ends any active gesture, wherever the release happened.
    pub fn pointer_up(&mut self, pointer: Point) -> PointerRelease {
        let ended = std::mem::take(&mut self.mode);
        let launcher_clicked = match ended {
            InteractionMode::DraggingLauncher { anchor, moved } => {
                !moved && !anchor.exceeds(pointer, self.metrics.click_slop)
            }
            _ => false,
        };

        if !ended.is_idle() {
            log::debug!("Pointer gesture ended: {}", ended.name());
        }

        PointerRelease {
            ended,
            launcher_clicked,
        }
    }

    // ---------------------------------------------------------------------
    // Open / close
    // ---------------------------------------------------------------------

    /// Opens the panel if closed, closes it if open.
    pub fn toggle_panel(&mut self) {
        if self.panel_open {
            self.close_panel();
        } else {
            self.open_panel();
        }
    }

    /// Shows the panel anchored to the launcher, pulled back inside the viewport.
    pub fn open_panel(&mut self) {
        if self.panel_open {
            return;
        }
        let radius = self.metrics.button_radius;
        let panel = PanelPosition::anchored_to(self.launcher, self.panel_size, radius)
            .clamped(self.panel_size, self.viewport.size);
        self.launcher = panel.launcher(self.panel_size, radius);
        self.panel_open = true;
        self.mode = InteractionMode::Idle;
        self.refresh_tooltip_side();
    }

    /// Hides the panel, leaving the launcher on the panel's anchored corner.
    pub fn close_panel(&mut self) {
        if !self.panel_open {
            return;
        }
        self.launcher = self
            .panel_position()
            .launcher(self.panel_size, self.metrics.button_radius);
        self.panel_open = false;
        self.mode = InteractionMode::Idle;
        self.refresh_tooltip_side();
    }

    // ---------------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------------

    /// Records a new viewport size and pulls the visible entity back inside it.
    ///
    /// Returns true if the viewport size changed.
    pub fn set_viewport(&mut self, size: Size) -> bool {
        if !self.viewport.update(size) {
            return false;
        }

        let radius = self.metrics.button_radius;
        self.launcher = if self.panel_open {
            self.panel_position()
                .clamped(self.panel_size, size)
                .launcher(self.panel_size, radius)
        } else {
            self.launcher.clamped(size, radius)
        };
        self.refresh_tooltip_side();
        true
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn resize(&mut self, handle: ResizeHandle, delta: Vector) {
        let viewport = self.viewport.size;
        let WidgetMetrics {
            button_radius,
            min_width,
            min_height,
            ..
        } = self.metrics;

        let PanelPosition {
            mut left,
            mut top,
        } = self.panel_position();
        let PanelSize {
            mut width,
            mut height,
        } = self.panel_size;

        if handle.moves_right() {
            width = resize_far_edge(width, delta.x, min_width, left, viewport.width);
        }
        if handle.moves_left() {
            (left, width) = resize_near_edge(left, width, delta.x, min_width);
        }
        if handle.moves_bottom() {
            height = resize_far_edge(height, delta.y, min_height, top, viewport.height);
        }
        if handle.moves_top() {
            (top, height) = resize_near_edge(top, height, delta.y, min_height);
        }

        self.panel_size = PanelSize::new(width, height);
        self.launcher = PanelPosition::new(left, top).launcher(self.panel_size, button_radius);
        self.refresh_tooltip_side();
    }

    fn refresh_tooltip_side(&mut self) {
        self.tooltip_side = tooltip_side(
            self.launcher.x,
            self.metrics.button_radius,
            self.viewport.width(),
            self.metrics.tooltip_width,
        );
    }
}
