// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction modes and the regions that start them.

use super::drag::DragAnchor;
use iced::Point;
use std::fmt;

/// Position of a resize handle on the panel border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Left,
        ResizeHandle::Right,
        ResizeHandle::Top,
        ResizeHandle::Bottom,
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
    ];

    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeHandle::Left | ResizeHandle::TopLeft | ResizeHandle::BottomLeft
        )
    }

    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeHandle::Right | ResizeHandle::TopRight | ResizeHandle::BottomRight
        )
    }

    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeHandle::Top | ResizeHandle::TopLeft | ResizeHandle::TopRight
        )
    }

    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeHandle::Bottom | ResizeHandle::BottomLeft | ResizeHandle::BottomRight
        )
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        (self.moves_left() || self.moves_right()) && (self.moves_top() || self.moves_bottom())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeHandle::Left => "left",
            ResizeHandle::Right => "right",
            ResizeHandle::Top => "top",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::TopLeft => "top-left",
            ResizeHandle::TopRight => "top-right",
            ResizeHandle::BottomLeft => "bottom-left",
            ResizeHandle::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget region that received a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Launcher,
    PanelHeader,
    CloseControl,
    ResizeHandle(ResizeHandle),
}

/// Active pointer gesture. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    /// No gesture in progress
    #[default]
    Idle,
    /// Moving the launcher while the panel is closed
    DraggingLauncher {
        anchor: DragAnchor,
        /// Set once the pointer leaves the click slop
        moved: bool,
    },
    /// Moving the open panel by its header
    DraggingPanel { anchor: DragAnchor },
    /// Resizing the open panel from one handle
    Resizing {
        handle: ResizeHandle,
        /// Pointer position of the previous step (deltas are incremental)
        last_pointer: Point,
    },
}

impl InteractionMode {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    #[must_use]
    pub fn is_dragging_launcher(&self) -> bool {
        matches!(self, InteractionMode::DraggingLauncher { .. })
    }

    #[must_use]
    pub fn is_dragging_panel(&self) -> bool {
        matches!(self, InteractionMode::DraggingPanel { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, InteractionMode::Resizing { .. })
    }

    /// Handle being dragged, if resizing.
    #[must_use]
    pub fn active_handle(&self) -> Option<ResizeHandle> {
        match self {
            InteractionMode::Resizing { handle, .. } => Some(*handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "idle",
            InteractionMode::DraggingLauncher { .. } => "dragging-launcher",
            InteractionMode::DraggingPanel { .. } => "dragging-panel",
            InteractionMode::Resizing { .. } => "resizing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_handle_moves_at_least_one_edge() {
        for handle in ResizeHandle::ALL {
            assert!(
                handle.moves_left() || handle.moves_right() || handle.moves_top() || handle.moves_bottom(),
                "{handle} moves nothing"
            );
        }
    }

    #[test]
    fn no_handle_moves_opposite_edges() {
        for handle in ResizeHandle::ALL {
            assert!(!(handle.moves_left() && handle.moves_right()));
            assert!(!(handle.moves_top() && handle.moves_bottom()));
        }
    }

    #[test]
    fn corners_are_detected() {
        let corners: Vec<_> = ResizeHandle::ALL
            .into_iter()
            .filter(|handle| handle.is_corner())
            .collect();
        assert_eq!(
            corners,
            vec![
                ResizeHandle::TopLeft,
                ResizeHandle::TopRight,
                ResizeHandle::BottomLeft,
                ResizeHandle::BottomRight
            ]
        );
    }

    #[test]
    fn handle_names_use_kebab_case() {
        assert_eq!(ResizeHandle::BottomLeft.to_string(), "bottom-left");
        assert_eq!(ResizeHandle::Top.as_str(), "top");
    }

    #[test]
    fn default_mode_is_idle() {
        let mode = InteractionMode::default();
        assert!(mode.is_idle());
        assert!(mode.active_handle().is_none());
    }

    #[test]
    fn resizing_exposes_its_handle() {
        let mode = InteractionMode::Resizing {
            handle: ResizeHandle::TopRight,
            last_pointer: Point::ORIGIN,
        };
        assert!(mode.is_resizing());
        assert!(!mode.is_dragging_panel());
        assert_eq!(mode.active_handle(), Some(ResizeHandle::TopRight));
        assert_eq!(mode.name(), "resizing");
    }
}
