// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Launcher**: Floating button size and initial inset
//! - **Panel**: Chat panel default and minimum dimensions
//! - **Tooltip**: Placement heuristic inputs
//! - **Backend**: Chat service endpoint

// ==========================================================================
// Launcher Defaults
// ==========================================================================

/// Diameter of the circular launcher button (in pixels).
pub const LAUNCHER_SIZE: f32 = 60.0;

/// Distance from the bottom-right viewport corner to the launcher center at startup.
pub const LAUNCHER_INSET: f32 = 80.0;

/// Maximum pointer travel (in pixels) for a launcher press to count as a click.
pub const LAUNCHER_CLICK_SLOP: f32 = 4.0;

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Default chat panel width.
pub const DEFAULT_PANEL_WIDTH: f32 = 300.0;

/// Default chat panel height.
pub const DEFAULT_PANEL_HEIGHT: f32 = 400.0;

/// Minimum chat panel width reachable through resizing.
pub const MIN_PANEL_WIDTH: f32 = 200.0;

/// Minimum chat panel height reachable through resizing.
pub const MIN_PANEL_HEIGHT: f32 = 250.0;

// ==========================================================================
// Tooltip Defaults
// ==========================================================================

/// Estimated width of the launcher tooltip, used to pick its side.
pub const TOOLTIP_ESTIMATED_WIDTH: f32 = 100.0;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the chat backend when neither CLI nor config provide one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(LAUNCHER_SIZE > 0.0);
    assert!(LAUNCHER_INSET >= LAUNCHER_SIZE / 2.0);
    assert!(LAUNCHER_CLICK_SLOP >= 0.0);

    assert!(MIN_PANEL_WIDTH > 0.0);
    assert!(MIN_PANEL_HEIGHT > 0.0);
    assert!(DEFAULT_PANEL_WIDTH >= MIN_PANEL_WIDTH);
    assert!(DEFAULT_PANEL_HEIGHT >= MIN_PANEL_HEIGHT);

    assert!(TOOLTIP_ESTIMATED_WIDTH > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_defaults_are_valid() {
        assert_eq!(DEFAULT_PANEL_WIDTH, 300.0);
        assert_eq!(DEFAULT_PANEL_HEIGHT, 400.0);
        assert!(DEFAULT_PANEL_WIDTH >= MIN_PANEL_WIDTH);
        assert!(DEFAULT_PANEL_HEIGHT >= MIN_PANEL_HEIGHT);
    }

    #[test]
    fn launcher_fits_inside_its_inset() {
        assert!(LAUNCHER_INSET - LAUNCHER_SIZE / 2.0 > 0.0);
    }

    #[test]
    fn backend_url_is_http() {
        assert!(DEFAULT_BACKEND_URL.starts_with("http://"));
    }
}
