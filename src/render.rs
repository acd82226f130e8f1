//! Rendering: draws the annotation overlay to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It draws from a [`RenderFeed`] whose geometry is already in surface
//! coordinates, so the only transform applied here is the device pixel ratio.
//! The photograph itself is drawn by the host underneath this layer.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::consts::{CROSSHAIR_ARM_PX, DASH_PX, POINT_RADIUS_PX, POINT_RING_PX};
use crate::feed::{LineMarker, PointMarker, RenderFeed};

const SELECTION_COLOR: &str = "#1E90FF";
const HOVER_COLOR: &str = "rgba(30, 144, 255, 0.45)";
const PREVIEW_COLOR: &str = "rgba(255, 165, 0, 0.9)";
const PRECISION_COLOR: &str = "#FF3B30";
const LABEL_COLOR: &str = "#FFFFFF";
const LABEL_SHADOW: &str = "rgba(0, 0, 0, 0.75)";

/// Draw the full overlay: image frame, lines, points, then gesture decorators.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, feed: &RenderFeed) -> Result<(), JsValue> {
    ctx.set_transform(feed.dpr, 0.0, 0.0, feed.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, feed.surface.width, feed.surface.height);

    if let Some(bounds) = feed.image_bounds {
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.35)");
        ctx.set_line_width(1.0);
        ctx.stroke_rect(bounds.min.x, bounds.min.y, bounds.width(), bounds.height());
    }

    for line in &feed.lines {
        draw_line(ctx, line)?;
    }
    if let Some((from, to)) = feed.preview {
        draw_preview(ctx, from, to)?;
    }
    for point in &feed.points {
        draw_point(ctx, point)?;
    }

    if let Some(at) = feed.placement_cursor {
        draw_crosshair(ctx, at, SELECTION_COLOR);
    }
    if let Some(at) = feed.precision_cursor {
        draw_crosshair(ctx, at, PRECISION_COLOR);
        ctx.begin_path();
        ctx.arc(at.x, at.y, POINT_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.stroke();
    }
    if let Some(at) = feed.drop_target {
        ctx.save();
        set_dash(ctx, DASH_PX)?;
        ctx.set_stroke_style_str(SELECTION_COLOR);
        ctx.set_line_width(1.5);
        ctx.begin_path();
        ctx.arc(at.x, at.y, POINT_RADIUS_PX + POINT_RING_PX * 2.0, 0.0, 2.0 * PI)?;
        ctx.stroke();
        ctx.restore();
    }
    Ok(())
}

// =============================================================
// Entities
// =============================================================

fn draw_line(ctx: &CanvasRenderingContext2d, line: &LineMarker) -> Result<(), JsValue> {
    ctx.save();
    if line.construction {
        set_dash(ctx, DASH_PX)?;
    }
    if line.selected || line.hovered {
        ctx.set_stroke_style_str(if line.selected { SELECTION_COLOR } else { HOVER_COLOR });
        ctx.set_line_width(5.0);
        stroke_segment(ctx, line.a, line.b);
    }
    ctx.set_stroke_style_str(&line.color);
    ctx.set_line_width(2.0);
    stroke_segment(ctx, line.a, line.b);
    ctx.restore();
    Ok(())
}

fn draw_preview(ctx: &CanvasRenderingContext2d, from: Point, to: Point) -> Result<(), JsValue> {
    ctx.save();
    set_dash(ctx, DASH_PX * 1.5)?;
    ctx.set_stroke_style_str(PREVIEW_COLOR);
    ctx.set_line_width(1.5);
    stroke_segment(ctx, from, to);
    ctx.restore();
    Ok(())
}

fn draw_point(ctx: &CanvasRenderingContext2d, point: &PointMarker) -> Result<(), JsValue> {
    let Point { x, y } = point.at;
    ctx.save();

    if point.selected || point.hovered || point.active {
        ctx.set_stroke_style_str(if point.selected || point.active { SELECTION_COLOR } else { HOVER_COLOR });
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.arc(x, y, POINT_RADIUS_PX + POINT_RING_PX, 0.0, 2.0 * PI)?;
        ctx.stroke();
    }

    ctx.set_fill_style_str(&point.color);
    ctx.set_stroke_style_str(LABEL_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.arc(x, y, POINT_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.stroke();

    if !point.name.is_empty() {
        let lx = x + POINT_RADIUS_PX + POINT_RING_PX + 2.0;
        let ly = y - POINT_RADIUS_PX;
        ctx.set_font("12px sans-serif");
        ctx.set_fill_style_str(LABEL_SHADOW);
        ctx.fill_text(&point.name, lx + 1.0, ly + 1.0)?;
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.fill_text(&point.name, lx, ly)?;
    }

    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn draw_crosshair(ctx: &CanvasRenderingContext2d, at: Point, color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(1.0);
    stroke_segment(ctx, Point::new(at.x - CROSSHAIR_ARM_PX, at.y), Point::new(at.x + CROSSHAIR_ARM_PX, at.y));
    stroke_segment(ctx, Point::new(at.x, at.y - CROSSHAIR_ARM_PX), Point::new(at.x, at.y + CROSSHAIR_ARM_PX));
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, a: Point, b: Point) {
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
}

/// Dashes reset on `restore()`.
fn set_dash(ctx: &CanvasRenderingContext2d, dash: f64) -> Result<(), JsValue> {
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash.into());
    dash_array.push(&dash.into());
    ctx.set_line_dash(&dash_array)
}
