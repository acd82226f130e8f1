//! Annotation data model: images, world points, lines, and per-frame snapshots.
//!
//! The canvas never owns annotation data. The host hands it a [`Scene`]
//! snapshot (world points and lines in the data owner's iteration order) and
//! the engine reads it to hit-test and to build the render feed. Mutations
//! flow back out as [`crate::engine::Action`]s.
//!
//! Iteration order of `Scene::points` and `Scene::lines` is significant: hit
//! testing returns the first candidate within threshold, not the nearest.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Point, Size};

/// Unique identifier for an image.
pub type ImageId = Uuid;

/// Unique identifier for a world point.
pub type PointId = Uuid;

/// Unique identifier for a line.
pub type LineId = Uuid;

/// The image being annotated. Immutable for the lifetime of a viewing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub id: ImageId,
    /// Native width in pixels.
    pub width: f64,
    /// Native height in pixels.
    pub height: f64,
}

impl ImageInfo {
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether `(u, v)` lies within the image.
    #[must_use]
    pub fn contains(&self, u: f64, v: f64) -> bool {
        self.size().contains(Point::new(u, v))
    }
}

/// Observation of a world point in one image, in that image's native pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePoint {
    pub u: f64,
    pub v: f64,
}

impl From<ImagePoint> for Point {
    fn from(ip: ImagePoint) -> Self {
        Point::new(ip.u, ip.v)
    }
}

/// A named 3D point observed in zero or more images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldPoint {
    pub id: PointId,
    pub name: String,
    /// CSS color string.
    pub color: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// At most one observation per image.
    #[serde(default)]
    pub image_points: HashMap<ImageId, ImagePoint>,
    /// Solved world position, once the backend has produced one.
    #[serde(default)]
    pub xyz: Option<[f64; 3]>,
    /// Per-axis lock flags for `xyz`.
    #[serde(default)]
    pub locked: [bool; 3],
}

impl WorldPoint {
    /// Observation in `image`, if any.
    #[must_use]
    pub fn image_point(&self, image: ImageId) -> Option<ImagePoint> {
        self.image_points.get(&image).copied()
    }

    #[must_use]
    pub fn has_locked_axes(&self) -> bool {
        self.locked.iter().any(|l| *l)
    }
}

/// A segment between two world points. Undirected for hit testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    #[serde(default)]
    pub name: String,
    pub point_a: PointId,
    pub point_b: PointId,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Construction lines are drawn dashed and excluded from the solve.
    #[serde(default)]
    pub construction: bool,
    /// CSS color string.
    pub color: String,
}

fn default_visible() -> bool {
    true
}

/// Read-only snapshot of annotation data, refreshed by the host every frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub points: Vec<WorldPoint>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Scene {
    /// Look up a world point by id.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&WorldPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Look up a line by id.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Position of a world point in `image`, if the point exists and is observed there.
    #[must_use]
    pub fn image_position(&self, id: PointId, image: ImageId) -> Option<Point> {
        self.point(id)?.image_point(image).map(Point::from)
    }

    /// Visible world points that have an observation in `image`, in iteration order.
    pub fn visible_in(&self, image: ImageId) -> impl Iterator<Item = (&WorldPoint, Point)> {
        self.points
            .iter()
            .filter(|p| p.visible)
            .filter_map(move |p| p.image_point(image).map(|ip| (p, Point::from(ip))))
    }
}

/// Selection and hover state owned by upstream selection logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub points: Vec<PointId>,
    #[serde(default)]
    pub lines: Vec<LineId>,
    /// Hovered entity (point or line), if any.
    #[serde(default)]
    pub hovered: Option<Uuid>,
}

impl Selection {
    #[must_use]
    pub fn is_point_selected(&self, id: PointId) -> bool {
        self.points.contains(&id)
    }

    #[must_use]
    pub fn is_line_selected(&self, id: LineId) -> bool {
        self.lines.contains(&id)
    }
}

/// Provisional visual for a line being constructed.
///
/// With `to = None` the preview is a rubber band from `from` to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstructionPreview {
    pub from: PointId,
    #[serde(default)]
    pub to: Option<PointId>,
}
