//! Precision drag: scaled-down pointer motion for sub-pixel placement.
//!
//! While engaged, each pointer sample moves the target by `ratio` times the
//! raw logical delta since the previous sample, independent of zoom:
//! `target_n = target_{n-1} + ratio * (raw_n - raw_{n-1})`.
//! The surface-space cursor decorator is the target re-projected through the
//! viewport, so it visibly diverges from the real pointer.

#[cfg(test)]
#[path = "precision_test.rs"]
mod precision_test;

use crate::camera::{Point, Size, Viewport};

/// Reference state for one engagement of precision mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionDrag {
    target: Point,
    last_raw: Point,
    ratio: f64,
}

impl PrecisionDrag {
    /// Start at `target` with the pointer currently at raw logical `raw`.
    #[must_use]
    pub fn engage(target: Point, raw: Point, ratio: f64) -> Self {
        Self { target, last_raw: raw, ratio }
    }

    /// The logical position being edited.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Feed a new raw logical pointer sample.
    ///
    /// Returns the new target, or `None` when the scaled step would leave the
    /// image; the target then stays put while the raw reference still advances.
    pub fn advance(&mut self, raw: Point, image: Size) -> Option<Point> {
        let candidate = Point {
            x: self.ratio.mul_add(raw.x - self.last_raw.x, self.target.x),
            y: self.ratio.mul_add(raw.y - self.last_raw.y, self.target.y),
        };
        self.last_raw = raw;
        if !image.contains(candidate) {
            return None;
        }
        self.target = candidate;
        Some(candidate)
    }

    /// Surface position of the precision cursor decorator.
    #[must_use]
    pub fn cursor_surface(&self, viewport: &Viewport) -> Point {
        viewport.image_to_surface(self.target)
    }
}
