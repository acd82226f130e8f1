//! Render feed: an immutable per-frame snapshot handed to the draw routine.
//!
//! Everything here is already projected into surface space, so drawing needs
//! no access to the engine or the scene. Building a feed never mutates state.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::camera::{Point, Rect, Size, Viewport};
use crate::doc::{ImageId, LineId, PointId, Scene};
use crate::engine::EngineCore;
use crate::input::InputState;

/// A line segment to draw, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMarker {
    pub id: LineId,
    pub a: Point,
    pub b: Point,
    pub color: String,
    pub construction: bool,
    pub selected: bool,
    pub hovered: bool,
}

/// A world point observation to draw, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    pub id: PointId,
    pub name: String,
    pub color: String,
    pub at: Point,
    pub selected: bool,
    pub hovered: bool,
    /// Being dragged or otherwise held by the current gesture.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFeed {
    pub viewport: Viewport,
    /// Surface size in CSS pixels.
    pub surface: Size,
    pub dpr: f64,
    /// Image extent on the surface.
    pub image_bounds: Option<Rect>,
    pub lines: Vec<LineMarker>,
    pub points: Vec<PointMarker>,
    /// Rubber-band segment for a line under construction.
    pub preview: Option<(Point, Point)>,
    /// Where the precision target sits, when it diverges from the pointer.
    pub precision_cursor: Option<Point>,
    /// Crosshair while waiting for a placement click.
    pub placement_cursor: Option<Point>,
    /// Ring under an external drag hovering the surface.
    pub drop_target: Option<Point>,
}

impl RenderFeed {
    #[must_use]
    pub fn build(core: &EngineCore, scene: &Scene) -> Self {
        let viewport = core.viewport;
        let mut feed = Self {
            viewport,
            surface: core.surface,
            dpr: core.dpr,
            image_bounds: None,
            lines: Vec::new(),
            points: Vec::new(),
            preview: None,
            precision_cursor: core.input.precision().map(|drag| drag.cursor_surface(&viewport)),
            placement_cursor: None,
            drop_target: None,
        };
        match core.input {
            InputState::Placing { .. } => feed.placement_cursor = core.cursor(),
            InputState::ExternalDrop { surface } => feed.drop_target = Some(surface),
            _ => {}
        }

        let Some(image) = core.image.as_ref() else {
            return feed;
        };
        feed.image_bounds = Some(Rect {
            min: viewport.image_to_surface(Point::default()),
            max: viewport.image_to_surface(Point::new(image.width, image.height)),
        });

        let selection = &core.ui.selection;
        let hovered = |id| core.hovered() == Some(id) || selection.hovered == Some(id);
        let active = core.input.active_point();

        feed.lines = scene
            .lines
            .iter()
            .filter(|l| l.visible)
            .filter_map(|l| {
                let a = scene.image_position(l.point_a, image.id)?;
                let b = scene.image_position(l.point_b, image.id)?;
                Some(LineMarker {
                    id: l.id,
                    a: viewport.image_to_surface(a),
                    b: viewport.image_to_surface(b),
                    color: l.color.clone(),
                    construction: l.construction,
                    selected: selection.is_line_selected(l.id),
                    hovered: selection.hovered == Some(l.id),
                })
            })
            .collect();

        feed.points = scene
            .visible_in(image.id)
            .map(|(p, at)| PointMarker {
                id: p.id,
                name: p.name.clone(),
                color: p.color.clone(),
                at: viewport.image_to_surface(at),
                selected: selection.is_point_selected(p.id),
                hovered: hovered(p.id),
                active: active == Some(p.id),
            })
            .collect();

        feed.preview = construction_preview(core, scene, image.id);
        feed
    }
}

/// Segment from the construction start point to its end point, or to the cursor.
fn construction_preview(core: &EngineCore, scene: &Scene, image: ImageId) -> Option<(Point, Point)> {
    let preview = core.ui.construction?;
    let from = core.viewport.image_to_surface(scene.image_position(preview.from, image)?);
    let to = match preview.to {
        Some(to) => core.viewport.image_to_surface(scene.image_position(to, image)?),
        None => core.cursor()?,
    };
    Some((from, to))
}
