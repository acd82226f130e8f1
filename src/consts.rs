//! Shared numeric constants for the annotation canvas.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed viewport scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed viewport scale. Also caps "fit to selection".
pub const MAX_SCALE: f64 = 5.0;

/// Multiplicative zoom step applied per wheel event.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Padding in image pixels added around a selection before fitting it.
pub const SELECTION_PADDING: f64 = 50.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Surface-pixel radius within which a world point is under the cursor.
pub const POINT_HIT_RADIUS_PX: f64 = 15.0;

/// Surface-pixel distance within which a line segment is under the cursor.
pub const LINE_HIT_RADIUS_PX: f64 = 10.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in surface pixels that turns an armed press into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Fraction of raw pointer motion applied while precision is engaged.
pub const PRECISION_RATIO: f64 = 0.12;

/// A modifier released within this many milliseconds counts as a tap.
pub const PRECISION_TAP_MS: f64 = 250.0;

/// Key name (as reported by the browser) that drives precision mode.
pub const PRECISION_KEY: &str = "Shift";

// ── Rendering ───────────────────────────────────────────────────

/// Marker radius for world points in surface pixels.
pub const POINT_RADIUS_PX: f64 = 4.0;

/// Extra ring radius drawn around selected or hovered points.
pub const POINT_RING_PX: f64 = 3.0;

/// Arm length of the precision crosshair in surface pixels.
pub const CROSSHAIR_ARM_PX: f64 = 10.0;

/// Dash segment length for construction lines and previews.
pub const DASH_PX: f64 = 4.0;
