// SPDX-License-Identifier: MPL-2.0
//! Drag anchor
//!
//! Captures where the pointer grabbed an entity so that later pointer
//! positions map back to entity positions without drift.

use iced::{Point, Vector};

/// Pointer-to-entity offset recorded at gesture start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer position minus entity position at press time
    pub offset: Vector,

    /// Pointer position at press time
    pub press_position: Point,
}

impl DragAnchor {
    /// Records the anchor for an entity located at `entity` grabbed at `pointer`.
    #[must_use]
    pub fn capture(pointer: Point, entity: Point) -> Self {
        Self {
            offset: pointer - entity,
            press_position: pointer,
        }
    }

    /// Entity position that keeps the original grab offset under `pointer`.
    #[must_use]
    pub fn entity_position(&self, pointer: Point) -> Point {
        pointer - self.offset
    }

    /// Whether the pointer travelled farther than `slop` from the press point.
    #[must_use]
    pub fn exceeds(&self, pointer: Point, slop: f32) -> bool {
        self.press_position.distance(pointer) > slop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn capture_records_offset_and_press() {
        let anchor = DragAnchor::capture(Point::new(110.0, 60.0), Point::new(100.0, 50.0));
        assert_eq!(anchor.offset, Vector::new(10.0, 10.0));
        assert_eq!(anchor.press_position, Point::new(110.0, 60.0));
    }

    #[test]
    fn entity_follows_pointer_without_drift() {
        let anchor = DragAnchor::capture(Point::new(200.0, 150.0), Point::new(180.0, 140.0));

        let moved = anchor.entity_position(Point::new(250.0, 100.0));
        assert_abs_diff_eq!(moved.x, 230.0);
        assert_abs_diff_eq!(moved.y, 90.0);

        // Returning to the press point restores the original entity position.
        let back = anchor.entity_position(Point::new(200.0, 150.0));
        assert_eq!(back, Point::new(180.0, 140.0));
    }

    #[test]
    fn exceeds_uses_euclidean_distance() {
        let anchor = DragAnchor::capture(Point::new(0.0, 0.0), Point::ORIGIN);
        assert!(!anchor.exceeds(Point::new(3.0, 0.0), 4.0));
        assert!(anchor.exceeds(Point::new(3.0, 3.0), 4.0));
    }
}
