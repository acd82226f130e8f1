//! Proximity hit-testing of world points and lines in surface space.
//!
//! Both finders return the FIRST candidate within threshold in scene iteration
//! order, not the globally nearest one. Callers relying on "nearest" semantics
//! under dense clustering will be surprised; the order is deterministic.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, Viewport};
use crate::doc::{ImageId, LineId, PointId, Scene};

/// What lies under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Point(PointId),
    Line(LineId),
}

/// First visible world point observed in `image` within `threshold` surface pixels.
#[must_use]
pub fn find_nearest_point(
    surface: Point,
    scene: &Scene,
    image: ImageId,
    viewport: &Viewport,
    threshold: f64,
) -> Option<PointId> {
    scene
        .visible_in(image)
        .find(|(_, at)| viewport.image_to_surface(*at).distance(surface) <= threshold)
        .map(|(p, _)| p.id)
}

/// First visible line with both endpoints observed in `image` within `threshold` surface pixels.
#[must_use]
pub fn find_nearest_line(
    surface: Point,
    scene: &Scene,
    image: ImageId,
    viewport: &Viewport,
    threshold: f64,
) -> Option<LineId> {
    scene
        .lines
        .iter()
        .filter(|l| l.visible)
        .find(|l| {
            let (Some(a), Some(b)) = (scene.image_position(l.point_a, image), scene.image_position(l.point_b, image))
            else {
                return false;
            };
            let a = viewport.image_to_surface(a);
            let b = viewport.image_to_surface(b);
            point_to_segment_distance(surface, a, b) <= threshold
        })
        .map(|l| l.id)
}

/// Hit-test points first, then lines. A point hit always shadows a line hit.
#[must_use]
pub fn hit_test(
    surface: Point,
    scene: &Scene,
    image: ImageId,
    viewport: &Viewport,
    point_threshold: f64,
    line_threshold: f64,
) -> Option<Hit> {
    if let Some(id) = find_nearest_point(surface, scene, image, viewport, point_threshold) {
        return Some(Hit::Point(id));
    }
    find_nearest_line(surface, scene, image, viewport, line_threshold).map(Hit::Line)
}

/// Distance from `p` to the segment `a`-`b`, using the clamped scalar projection.
#[must_use]
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(t.mul_add(abx, a.x), t.mul_add(aby, a.y)))
}
