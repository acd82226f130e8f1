//! Gesture engine: turns pointer, wheel, keyboard, and drop events into actions.
//!
//! `EngineCore` holds everything except the browser canvas so it can be tested
//! natively. It never stores annotation data: every handler that needs it takes
//! the host's current [`Scene`] snapshot by reference, and all mutations are
//! returned as [`Action`]s for the data owner to apply.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Point, Rect, Size, Viewport};
use crate::config::CanvasConfig;
use crate::dnd::DropPayload;
use crate::doc::{ConstructionPreview, ImageInfo, LineId, PointId, Scene, Selection};
use crate::feed::RenderFeed;
use crate::hit::{self, Hit};
use crate::input::{Button, InputState, Key, Modifiers, PrecisionLatch, PrecisionSource, Tool, UiState, WheelDelta};
use crate::precision::PrecisionDrag;
use crate::render;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PointClicked { id: PointId, ctrl: bool, shift: bool },
    LineClicked { id: LineId, ctrl: bool, shift: bool },
    CreatePoint { u: f64, v: f64 },
    MovePoint { id: PointId, u: f64, v: f64 },
    PointHovered(Option<PointId>),
    EmptySpaceClicked { shift: bool },
    /// Escape ended placement mode; the side panel should clear its toggle.
    PlacementCancelled { id: PointId },
    SetCursor(String),
    RenderNeeded,
}

impl Action {
    fn move_point(id: PointId, at: Point) -> Self {
        Self::MovePoint { id, u: at.x, v: at.y }
    }
}

/// A press of the precision modifier that has not been released yet.
#[derive(Debug, Clone, Copy)]
struct ModifierPress {
    at_ms: f64,
    /// Whether precision was already latched when the key went down.
    was_latched: bool,
}

/// Engine state and gesture logic, independent of the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: CanvasConfig,
    pub image: Option<ImageInfo>,
    pub viewport: Viewport,
    pub surface: Size,
    pub dpr: f64,
    pub ui: UiState,
    pub input: InputState,
    cursor: Option<Point>,
    hovered: Option<PointId>,
    modifier_press: Option<ModifierPress>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            config,
            image: None,
            viewport: Viewport::default(),
            surface: Size::default(),
            dpr: 1.0,
            ui: UiState::default(),
            input: InputState::default(),
            cursor: None,
            hovered: None,
            modifier_press: None,
        }
    }

    // --- Session inputs ---

    /// Start a viewing session on `image`, fitting it to the surface.
    pub fn set_image(&mut self, image: ImageInfo) {
        debug!(image_id = %image.id, width = image.width, height = image.height, "image session started");
        self.image = Some(image);
        self.input = self.rest_state();
        self.hovered = None;
        self.zoom_to_fit();
    }

    /// Update surface dimensions (CSS pixels) and device pixel ratio.
    ///
    /// An image set while the surface had no size is fitted on the first
    /// resize that gives it one.
    pub fn set_surface_size(&mut self, width: f64, height: f64, dpr: f64) {
        let was_empty = self.surface.is_empty();
        self.surface = Size::new(width, height);
        self.dpr = dpr;
        if was_empty && !self.surface.is_empty() {
            self.zoom_to_fit();
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.ui.selection = selection;
    }

    pub fn set_construction_preview(&mut self, preview: Option<ConstructionPreview>) {
        self.ui.construction = preview;
    }

    /// Whether empty-space clicks should create points.
    pub fn set_point_creation(&mut self, enabled: bool) {
        self.ui.point_creation = enabled;
    }

    /// Enter or leave placement mode for a point missing from the current image.
    ///
    /// Placement requested mid-gesture takes effect when that gesture ends.
    pub fn set_placement(&mut self, id: Option<PointId>) -> Vec<Action> {
        self.ui.placement = id;
        match (id, self.input) {
            (Some(id), InputState::Idle | InputState::Placing { .. }) => {
                debug!(%id, "placement mode entered");
                self.input = InputState::Placing { id };
            }
            (Some(_), InputState::PrecisionDragging { source: PrecisionSource::Placement, .. })
            | (None, InputState::Placing { .. } | InputState::PrecisionDragging { source: PrecisionSource::Placement, .. }) => {
                self.input = self.rest_state();
            }
            _ => return Vec::new(),
        }
        vec![self.rest_cursor(), Action::RenderNeeded]
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, scene: &Scene, surface: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.cursor = Some(surface);
        self.sync_modifier(modifiers);
        let Some(image_id) = self.image.as_ref().map(|img| img.id) else {
            return Vec::new();
        };

        match self.input {
            InputState::Placing { id }
            | InputState::PrecisionDragging { id, source: PrecisionSource::Placement, .. }
                if button == Button::Primary =>
            {
                return self.place(id, surface);
            }
            InputState::Idle => {}
            _ => return Vec::new(),
        }
        // A press recorded before this gesture must not count as a tap within it.
        self.modifier_press = None;

        if button == Button::Middle || (button == Button::Primary && (modifiers.alt || self.ui.tool == Tool::Pan)) {
            debug!("pan started");
            self.input = InputState::Panning { button, last_surface: surface };
            return vec![Action::SetCursor("grabbing".into())];
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let hit = hit::hit_test(
            surface,
            scene,
            image_id,
            &self.viewport,
            self.config.point_hit_radius_px,
            self.config.line_hit_radius_px,
        );
        match hit {
            Some(Hit::Point(id)) => {
                let mut actions = vec![Action::PointClicked { id, ctrl: modifiers.ctrl, shift: modifiers.shift }];
                if let Some(origin) = scene.image_position(id, image_id) {
                    self.input = InputState::ArmedForDrag { id, down_surface: surface, origin };
                }
                actions.push(Action::RenderNeeded);
                actions
            }
            Some(Hit::Line(id)) => {
                vec![Action::LineClicked { id, ctrl: modifiers.ctrl, shift: modifiers.shift }, Action::RenderNeeded]
            }
            None => {
                let mut actions = vec![Action::EmptySpaceClicked { shift: modifiers.shift }];
                if self.ui.point_creation && !self.ui.explicit_tool_active() {
                    if let Some(at) = self.logical(surface) {
                        debug!(u = at.x, v = at.y, "point created");
                        actions.push(Action::CreatePoint { u: at.x, v: at.y });
                    }
                }
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    pub fn on_pointer_move(&mut self, scene: &Scene, surface: Point, modifiers: Modifiers) -> Vec<Action> {
        self.cursor = Some(surface);
        self.sync_modifier(modifiers);

        if let InputState::PrecisionDragging { latch: PrecisionLatch::Held, .. } = self.input {
            // Key-up was missed (e.g. focus left the window while held).
            if !self.modifier_held(modifiers) {
                self.disengage_precision();
            }
        }

        match self.input {
            InputState::Idle => self.update_hover(scene, surface),
            InputState::Panning { button, last_surface } => {
                self.viewport.pan_by(surface.x - last_surface.x, surface.y - last_surface.y);
                self.input = InputState::Panning { button, last_surface: surface };
                vec![Action::RenderNeeded]
            }
            InputState::ArmedForDrag { id, down_surface, origin } => {
                if surface.distance(down_surface) <= self.config.drag_threshold_px {
                    return Vec::new();
                }
                debug!(%id, "point drag started");
                let grab_offset = origin - self.raw_logical(down_surface);
                self.input = InputState::DraggingPoint { id, origin, grab_offset, last_logical: origin };
                if self.modifier_held(modifiers) {
                    return self.engage_precision();
                }
                self.drag_to(surface)
            }
            InputState::DraggingPoint { .. } => self.drag_to(surface),
            InputState::PrecisionDragging { id, source, mut drag, latch } => {
                let Some(size) = self.image_size() else {
                    return Vec::new();
                };
                let moved = drag.advance(self.raw_logical(surface), size);
                self.input = InputState::PrecisionDragging { id, source, drag, latch };
                match (source, moved) {
                    (PrecisionSource::Drag { .. }, Some(at)) => vec![Action::move_point(id, at), Action::RenderNeeded],
                    _ => vec![Action::RenderNeeded],
                }
            }
            InputState::Placing { .. } => vec![Action::RenderNeeded],
            InputState::ExternalDrop { .. } => Vec::new(),
        }
    }

    /// Ends the active gesture only when the button that started it is released.
    pub fn on_pointer_up(&mut self, surface: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.cursor = Some(surface);
        match self.input {
            InputState::Panning { button: started, .. } if started == button => {
                debug!("pan finished");
                self.input = self.rest_state();
                vec![self.rest_cursor()]
            }
            InputState::ArmedForDrag { .. } if button == Button::Primary => {
                self.input = self.rest_state();
                Vec::new()
            }
            InputState::DraggingPoint { id, .. }
            | InputState::PrecisionDragging { id, source: PrecisionSource::Drag { .. }, .. }
                if button == Button::Primary =>
            {
                debug!(%id, "point drag finished");
                self.input = self.rest_state();
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// The pointer left the surface: ends pan and drag gestures in place.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.cursor = None;
        let mut actions = Vec::new();
        if self.hovered.take().is_some() {
            actions.push(Action::PointHovered(None));
        }
        match self.input {
            InputState::Panning { .. } => {
                self.input = self.rest_state();
                actions.push(self.rest_cursor());
            }
            InputState::ArmedForDrag { .. }
            | InputState::DraggingPoint { .. }
            | InputState::PrecisionDragging { source: PrecisionSource::Drag { .. }, .. } => {
                debug!("gesture ended by pointer leave");
                self.input = self.rest_state();
            }
            InputState::PrecisionDragging { id, source: PrecisionSource::Placement, .. } => {
                self.input = InputState::Placing { id };
            }
            _ => {}
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Zoom about the cursor, one step per wheel event.
    pub fn on_wheel(&mut self, surface: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        let step = self.config.wheel_zoom_step;
        let factor = if delta.dy < 0.0 { step } else { step.recip() };
        self.viewport.zoom_at(surface, self.viewport.scale() * factor);
        vec![Action::RenderNeeded]
    }

    // --- Keyboard input ---

    /// `timestamp_ms` is the event's timestamp; only differences matter.
    pub fn on_key_down(&mut self, key: Key, timestamp_ms: f64) -> Vec<Action> {
        if key.is("Escape") {
            return self.cancel_gesture();
        }
        // Auto-repeat delivers further key-downs while held.
        if !key.is(&self.config.precision_key) || self.modifier_press.is_some() {
            return Vec::new();
        }
        // Taps only count once a drag or placement is under way. Held
        // precision engaged from the modifier state has no press to time.
        let was_latched = match self.input {
            InputState::DraggingPoint { .. } | InputState::Placing { .. } => false,
            InputState::PrecisionDragging { latch: PrecisionLatch::Latched, .. } => true,
            _ => return Vec::new(),
        };
        self.modifier_press = Some(ModifierPress { at_ms: timestamp_ms, was_latched });
        if was_latched {
            return Vec::new();
        }
        self.engage_precision()
    }

    pub fn on_key_up(&mut self, key: Key, timestamp_ms: f64) -> Vec<Action> {
        if !key.is(&self.config.precision_key) {
            return Vec::new();
        }
        let InputState::PrecisionDragging { id, source, drag, latch } = self.input else {
            self.modifier_press = None;
            return Vec::new();
        };
        let Some(press) = self.modifier_press.take() else {
            // Held since before the gesture began: a plain hold.
            return match latch {
                PrecisionLatch::Held => self.disengage_precision(),
                PrecisionLatch::Latched => Vec::new(),
            };
        };
        let tap = timestamp_ms - press.at_ms <= self.config.precision_tap_ms;
        match (tap, press.was_latched) {
            (true, false) => {
                debug!(%id, "precision latched");
                self.input = InputState::PrecisionDragging { id, source, drag, latch: PrecisionLatch::Latched };
                Vec::new()
            }
            (true, true) | (false, false) => self.disengage_precision(),
            (false, true) => Vec::new(),
        }
    }

    /// Abort the active gesture (Escape). A dragged point is restored to its drag-start position.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        let actions = match self.input {
            InputState::Idle => return Vec::new(),
            InputState::ArmedForDrag { .. } => Vec::new(),
            InputState::DraggingPoint { id, origin, .. }
            | InputState::PrecisionDragging { id, source: PrecisionSource::Drag { origin }, .. } => {
                debug!(%id, u = origin.x, v = origin.y, "drag reverted");
                vec![Action::move_point(id, origin), Action::RenderNeeded]
            }
            InputState::Placing { id } | InputState::PrecisionDragging { id, source: PrecisionSource::Placement, .. } => {
                debug!(%id, "placement cancelled");
                self.ui.placement = None;
                vec![Action::PlacementCancelled { id }, Action::SetCursor("default".into()), Action::RenderNeeded]
            }
            InputState::Panning { .. } => {
                self.input = self.rest_state();
                return vec![self.rest_cursor()];
            }
            InputState::ExternalDrop { .. } => vec![Action::RenderNeeded],
        };
        self.input = self.rest_state();
        actions
    }

    // --- External drag-and-drop ---

    pub fn on_drag_over(&mut self, surface: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle | InputState::ExternalDrop { .. } => {
                self.cursor = Some(surface);
                self.input = InputState::ExternalDrop { surface };
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_drag_leave(&mut self) -> Vec<Action> {
        if !matches!(self.input, InputState::ExternalDrop { .. }) {
            return Vec::new();
        }
        self.cursor = None;
        self.input = self.rest_state();
        vec![Action::RenderNeeded]
    }

    /// Handle a drop of a serialized [`DropPayload`]. Anything unrecognized is ignored.
    ///
    /// Both `place` and `move` drops emit [`Action::MovePoint`] at the drop
    /// position; no [`Action::CreatePoint`] is produced. The data owner adds
    /// the observation if the point has none in this image yet.
    pub fn on_drop(&mut self, surface: Point, payload: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        if matches!(self.input, InputState::ExternalDrop { .. }) {
            self.input = self.rest_state();
            actions.push(Action::RenderNeeded);
        }
        let dropped = match DropPayload::parse(payload) {
            Ok(dropped) => dropped,
            Err(error) => {
                warn!(%error, "ignoring external drop");
                return actions;
            }
        };
        let Some(at) = self.logical(surface) else {
            debug!(point_id = %dropped.world_point_id, "drop outside image ignored");
            return actions;
        };
        debug!(point_id = %dropped.world_point_id, action = ?dropped.action, u = at.x, v = at.y, "external drop");
        actions.insert(0, Action::move_point(dropped.world_point_id, at));
        actions
    }

    // --- Imperative view control ---

    /// Fit the whole image into the surface.
    pub fn zoom_to_fit(&mut self) {
        if let Some(size) = self.image_size() {
            self.viewport = Viewport::fit(self.surface, size);
        }
    }

    /// Fit the selected points observed in this image. Returns `false` when there are none.
    pub fn zoom_to_selection(&mut self, scene: &Scene) -> bool {
        let Some(image_id) = self.image.as_ref().map(|img| img.id) else {
            return false;
        };
        let positions = self.ui.selection.points.iter().filter_map(|id| scene.image_position(*id, image_id));
        let Some(bounds) = Rect::bounding(positions) else {
            return false;
        };
        self.viewport = Viewport::fit_to_bounds(bounds, self.config.selection_padding, self.surface);
        true
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// Set the scale (clamped), keeping the surface center fixed.
    pub fn set_scale(&mut self, value: f64) {
        let center = Point::new(self.surface.width * 0.5, self.surface.height * 0.5);
        self.viewport.set_scale(value, center);
    }

    /// Logical position under the cursor, or the precision target while precision is engaged.
    #[must_use]
    pub fn cursor_logical_position(&self) -> Option<Point> {
        if let Some(drag) = self.input.precision() {
            return Some(drag.target());
        }
        self.cursor.and_then(|c| self.logical(c))
    }

    // --- Queries ---

    /// Last known surface position of the pointer, if it is over the surface.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Point the engine last reported as hovered.
    #[must_use]
    pub fn hovered(&self) -> Option<PointId> {
        self.hovered
    }

    // --- Internals ---

    fn image_size(&self) -> Option<Size> {
        self.image.as_ref().map(ImageInfo::size)
    }

    fn logical(&self, surface: Point) -> Option<Point> {
        self.viewport.surface_to_image(surface, self.image_size()?)
    }

    fn raw_logical(&self, surface: Point) -> Point {
        self.viewport.surface_to_image_unbounded(surface)
    }

    /// State to return to when a gesture ends.
    fn rest_state(&self) -> InputState {
        match self.ui.placement {
            Some(id) => InputState::Placing { id },
            None => InputState::Idle,
        }
    }

    fn rest_cursor(&self) -> Action {
        let cursor = if self.ui.placement.is_some() { "crosshair" } else { "default" };
        Action::SetCursor(cursor.into())
    }

    /// Pointer events report the modifier state; a press whose key-up never
    /// arrived is dropped once the modifier is no longer held.
    fn sync_modifier(&mut self, modifiers: Modifiers) {
        if self.modifier_press.is_some() && !self.modifier_held(modifiers) {
            debug!("stale precision key press cleared");
            self.modifier_press = None;
        }
    }

    fn modifier_held(&self, modifiers: Modifiers) -> bool {
        match self.config.precision_key.as_str() {
            "Shift" => modifiers.shift,
            "Control" => modifiers.ctrl,
            "Alt" => modifiers.alt,
            "Meta" => modifiers.meta,
            _ => false,
        }
    }

    fn update_hover(&mut self, scene: &Scene, surface: Point) -> Vec<Action> {
        let hit = self.image.as_ref().and_then(|img| {
            hit::find_nearest_point(surface, scene, img.id, &self.viewport, self.config.point_hit_radius_px)
        });
        let mut actions = Vec::new();
        if hit != self.hovered {
            self.hovered = hit;
            actions.push(Action::PointHovered(hit));
            actions.push(Action::RenderNeeded);
        } else if self.ui.construction.is_some() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn drag_to(&mut self, surface: Point) -> Vec<Action> {
        let InputState::DraggingPoint { id, origin, grab_offset, .. } = self.input else {
            return Vec::new();
        };
        let target = self.raw_logical(surface) + grab_offset;
        let inside = self.image_size().is_some_and(|size| size.contains(target));
        if !inside {
            return Vec::new();
        }
        self.input = InputState::DraggingPoint { id, origin, grab_offset, last_logical: target };
        vec![Action::move_point(id, target), Action::RenderNeeded]
    }

    fn place(&mut self, id: PointId, surface: Point) -> Vec<Action> {
        let target = match self.input.precision() {
            Some(drag) => Some(drag.target()),
            None => self.logical(surface),
        };
        let Some(at) = target else {
            debug!(%id, "placement click outside image");
            return Vec::new();
        };
        debug!(%id, u = at.x, v = at.y, "point placed");
        self.ui.placement = None;
        self.input = InputState::Idle;
        vec![Action::move_point(id, at), Action::SetCursor("default".into()), Action::RenderNeeded]
    }

    fn engage_precision(&mut self) -> Vec<Action> {
        let ratio = self.config.precision_ratio;
        let (id, source, drag) = match self.input {
            InputState::DraggingPoint { id, origin, last_logical, .. } => {
                let raw = self.cursor.map_or(last_logical, |c| self.raw_logical(c));
                (id, PrecisionSource::Drag { origin }, PrecisionDrag::engage(last_logical, raw, ratio))
            }
            InputState::Placing { id } => {
                let Some(start) = self.cursor.and_then(|c| self.logical(c)) else {
                    return Vec::new();
                };
                (id, PrecisionSource::Placement, PrecisionDrag::engage(start, start, ratio))
            }
            _ => return Vec::new(),
        };
        debug!(%id, "precision engaged");
        self.input = InputState::PrecisionDragging { id, source, drag, latch: PrecisionLatch::Held };
        vec![Action::RenderNeeded]
    }

    /// Leave precision mode; 1:1 motion resumes from the current target.
    fn disengage_precision(&mut self) -> Vec<Action> {
        let InputState::PrecisionDragging { id, source, drag, .. } = self.input else {
            return Vec::new();
        };
        debug!(%id, "precision released");
        self.input = match source {
            PrecisionSource::Drag { origin } => {
                let target = drag.target();
                let raw = self.cursor.map_or(target, |c| self.raw_logical(c));
                InputState::DraggingPoint { id, origin, grab_offset: target - raw, last_logical: target }
            }
            PrecisionSource::Placement => InputState::Placing { id },
        };
        vec![Action::RenderNeeded]
    }
}

/// The full canvas engine. Wraps `EngineCore`, owns the browser canvas element,
/// and keeps the latest scene snapshot handed over by the host.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    scene: Scene,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self::with_config(canvas, CanvasConfig::default())
    }

    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: CanvasConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config), scene: Scene::default() }
    }

    // --- Delegated data inputs ---

    /// Replace the scene snapshot read by hit-testing and rendering.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn set_image(&mut self, image: ImageInfo) {
        self.core.set_image(image);
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.core.set_selection(selection);
    }

    pub fn set_construction_preview(&mut self, preview: Option<ConstructionPreview>) {
        self.core.set_construction_preview(preview);
    }

    pub fn set_point_creation(&mut self, enabled: bool) {
        self.core.set_point_creation(enabled);
    }

    pub fn set_placement(&mut self, id: Option<PointId>) -> Vec<Action> {
        self.core.set_placement(id)
    }

    // --- Viewport ---

    /// Update surface dimensions, resizing the backing store to device pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.canvas.set_width((width_css * dpr).round() as u32);
        self.canvas.set_height((height_css * dpr).round() as u32);
        self.core.set_surface_size(width_css, height_css, dpr);
    }

    pub fn zoom_to_fit(&mut self) {
        self.core.zoom_to_fit();
    }

    pub fn zoom_to_selection(&mut self) -> bool {
        self.core.zoom_to_selection(&self.scene)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.core.scale()
    }

    pub fn set_scale(&mut self, value: f64) {
        self.core.set_scale(value);
    }

    #[must_use]
    pub fn cursor_logical_position(&self) -> Option<Point> {
        self.core.cursor_logical_position()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(&self.scene, screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(&self.scene, screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: Key, timestamp_ms: f64) -> Vec<Action> {
        self.core.on_key_down(key, timestamp_ms)
    }

    pub fn on_key_up(&mut self, key: Key, timestamp_ms: f64) -> Vec<Action> {
        self.core.on_key_up(key, timestamp_ms)
    }

    pub fn on_drag_over(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_drag_over(screen_pt)
    }

    pub fn on_drag_leave(&mut self) -> Vec<Action> {
        self.core.on_drag_leave()
    }

    pub fn on_drop(&mut self, screen_pt: Point, payload: &str) -> Vec<Action> {
        self.core.on_drop(screen_pt, payload)
    }

    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        self.core.cancel_gesture()
    }

    // --- Render ---

    /// Draw the current state to the canvas. Reads state, never mutates it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("2d context unavailable"));
        };
        let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
        let feed = RenderFeed::build(&self.core, &self.scene);
        render::draw(&ctx, &feed)
    }
}
