//! Viewport transform between surface pixels and image pixels.
//!
//! Surface space is the CSS-pixel coordinate system of the drawing surface.
//! Image (logical) space is the native pixel grid of the image being
//! annotated. The mapping is a uniform scale followed by a translation:
//! `surface = image * scale + offset`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE};

/// A point in either surface or image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a surface or image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `p` lies within `[0, width] x [0, height]`.
    #[must_use]
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Zero or negative in either dimension.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Smallest rectangle containing every point, or `None` for an empty set.
    #[must_use]
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Self { min: first, max: first };
        for p in iter {
            rect.min.x = rect.min.x.min(p.x);
            rect.min.y = rect.min.y.min(p.y);
            rect.max.x = rect.max.x.max(p.x);
            rect.max.y = rect.max.y.max(p.y);
        }
        Some(rect)
    }

    /// Grow the rectangle by `amount` on every side.
    #[must_use]
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            min: Point::new(self.min.x - amount, self.min.y - amount),
            max: Point::new(self.max.x + amount, self.max.y + amount),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }
}

/// Clamp a requested scale into the allowed zoom range.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Scale and offset for one image-viewing session.
///
/// `scale` is always within `[MIN_SCALE, MAX_SCALE]`. `offset` is the
/// surface position of the image origin, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    pub offset: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0, offset: Point::default() }
    }
}

impl Viewport {
    /// Build a viewport, clamping `scale` into the allowed range.
    #[must_use]
    pub fn new(scale: f64, offset: Point) -> Self {
        Self { scale: clamp_scale(scale), offset }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map an image-space point to surface coordinates.
    #[must_use]
    pub fn image_to_surface(&self, image: Point) -> Point {
        Point {
            x: image.x * self.scale + self.offset.x,
            y: image.y * self.scale + self.offset.y,
        }
    }

    /// Map a surface point to image space without any bounds check.
    ///
    /// Used for deltas, where the pointer may legitimately be off the image.
    #[must_use]
    pub fn surface_to_image_unbounded(&self, surface: Point) -> Point {
        Point {
            x: (surface.x - self.offset.x) / self.scale,
            y: (surface.y - self.offset.y) / self.scale,
        }
    }

    /// Map a surface point to image space, or `None` when it falls off the image.
    #[must_use]
    pub fn surface_to_image(&self, surface: Point, image: Size) -> Option<Point> {
        let p = self.surface_to_image_unbounded(surface);
        image.contains(p).then_some(p)
    }

    /// Change the scale while keeping the image point under `anchor` fixed.
    pub fn zoom_at(&mut self, anchor: Point, new_scale: f64) {
        let new_scale = clamp_scale(new_scale);
        let ratio = new_scale / self.scale;
        self.offset = Point {
            x: anchor.x - (anchor.x - self.offset.x) * ratio,
            y: anchor.y - (anchor.y - self.offset.y) * ratio,
        };
        self.scale = new_scale;
    }

    /// Set the scale, anchored at `anchor` (typically the surface center).
    pub fn set_scale(&mut self, value: f64, anchor: Point) {
        self.zoom_at(anchor, value);
    }

    /// Translate the view by a raw surface-pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Fit the whole image into the surface without upscaling, centered.
    #[must_use]
    pub fn fit(surface: Size, image: Size) -> Self {
        if surface.is_empty() || image.is_empty() {
            return Self::default();
        }
        let scale = clamp_scale((surface.width / image.width).min(surface.height / image.height).min(1.0));
        let offset = Point {
            x: (surface.width - image.width * scale) * 0.5,
            y: (surface.height - image.height * scale) * 0.5,
        };
        Self { scale, offset }
    }

    /// Fit an image-space rectangle, padded by `padding`, so it fills the surface.
    #[must_use]
    pub fn fit_to_bounds(bounds: Rect, padding: f64, surface: Size) -> Self {
        let padded = bounds.inflate(padding);
        if surface.is_empty() || padded.width() <= 0.0 || padded.height() <= 0.0 {
            return Self::default();
        }
        let scale = clamp_scale((surface.width / padded.width()).min(surface.height / padded.height()));
        let center = padded.center();
        let offset = Point {
            x: surface.width * 0.5 - center.x * scale,
            y: surface.height * 0.5 - center.y * scale,
        };
        Self { scale, offset }
    }
}
