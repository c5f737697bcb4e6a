// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`launcher`] - Circular launcher button with its tooltip
//! - [`chat_panel`] - Draggable, resizable chat panel
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Window-independent geometry and pointer gestures
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod chat_panel;
pub mod design_tokens;
pub mod launcher;
pub mod state;
pub mod styles;
pub mod theming;
