// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Geometry and pointer-gesture logic for the floating widget, kept apart from
//! the iced `App` so it can be driven and tested without a window.

pub mod controller;
pub mod drag;
pub mod geometry;
pub mod interaction;
pub mod tooltip;
pub mod viewport;

// Re-export commonly used types for convenience
pub use controller::{PointerRelease, ViewportController};
pub use drag::DragAnchor;
pub use geometry::{LauncherPosition, PanelPosition, PanelSize, WidgetMetrics};
pub use interaction::{InteractionMode, PointerTarget, ResizeHandle};
pub use tooltip::TooltipSide;
pub use viewport::ViewportState;
