// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the window's inner size, which bounds every launcher and panel position.

use iced::Size;

/// Manages the current and previous viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Current viewport size
    pub size: Size,

    /// Previous viewport size (for resize detection)
    pub previous_size: Option<Size>,
}

impl ViewportState {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            previous_size: None,
        }
    }

    /// Records a new viewport size.
    /// Returns true if the size actually changed.
    pub fn update(&mut self, size: Size) -> bool {
        if size == self.size {
            return false;
        }
        self.previous_size = Some(self.size);
        self.size = size;
        true
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.height
    }
}
