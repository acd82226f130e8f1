//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `InputState` is a single tagged union: each variant carries exactly the
//! context its gesture needs, so combinations such as "panning while dragging
//! a point" cannot be represented. At most one gesture is active at a time and
//! new gestures only start from `Idle`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{ConstructionPreview, PointId, Selection};
use crate::precision::PrecisionDrag;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Click to select, drag to move points (default).
    #[default]
    Select,
    /// Hand tool: a primary-button drag always pans.
    Pan,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Shift"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Host-owned UI inputs mirrored into the engine.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub tool: Tool,
    pub selection: Selection,
    /// Point the side panel asked to place on the current image.
    pub placement: Option<PointId>,
    pub construction: Option<ConstructionPreview>,
    /// Whether an empty-space click should create a point.
    pub point_creation: bool,
}

impl UiState {
    /// An explicit tool or multi-step construction suppresses click-to-create.
    #[must_use]
    pub fn explicit_tool_active(&self) -> bool {
        self.tool != Tool::Select || self.construction.is_some()
    }
}

/// What a precision engagement is editing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecisionSource {
    /// An existing image point being dragged; `origin` is the drag-start position.
    Drag { origin: Point },
    /// A point being placed on the current image for the first time.
    Placement,
}

/// How precision was engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionLatch {
    /// Only while the modifier is held.
    Held,
    /// Toggled on by a tap; persists until toggled off or the gesture ends.
    Latched,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Translating the viewport by raw pointer deltas.
    Panning {
        /// Button that started the pan; only its release ends it.
        button: Button,
        /// Surface position of the previous pointer event.
        last_surface: Point,
    },
    /// Pointer went down on a point; movement not yet past the drag threshold.
    /// Point drags always use the primary button.
    ArmedForDrag {
        id: PointId,
        /// Surface position of the pointer-down.
        down_surface: Point,
        /// Logical position of the point at pointer-down.
        origin: Point,
    },
    /// Moving a point 1:1 with the pointer.
    DraggingPoint {
        id: PointId,
        /// Logical position at drag start, restored on Escape.
        origin: Point,
        /// Point position minus raw pointer logical position.
        grab_offset: Point,
        /// Last logical position reported to the data owner.
        last_logical: Point,
    },
    /// Dragging or placing with scaled-down pointer motion.
    PrecisionDragging {
        id: PointId,
        source: PrecisionSource,
        drag: PrecisionDrag,
        latch: PrecisionLatch,
    },
    /// Any click places the given point on the current image.
    Placing { id: PointId },
    /// Something is being dragged in from outside the surface.
    ExternalDrop {
        /// Current drop position, for preview.
        surface: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Point being armed, dragged, or placed, if any.
    #[must_use]
    pub fn active_point(&self) -> Option<PointId> {
        match self {
            Self::ArmedForDrag { id, .. }
            | Self::DraggingPoint { id, .. }
            | Self::PrecisionDragging { id, .. }
            | Self::Placing { id } => Some(*id),
            Self::Idle | Self::Panning { .. } | Self::ExternalDrop { .. } => None,
        }
    }

    /// Point whose image position is currently being moved by a drag.
    #[must_use]
    pub fn dragged_point(&self) -> Option<PointId> {
        match self {
            Self::DraggingPoint { id, .. }
            | Self::PrecisionDragging { id, source: PrecisionSource::Drag { .. }, .. } => Some(*id),
            _ => None,
        }
    }

    /// Whether a drag or placement is in progress (the states precision applies to).
    #[must_use]
    pub fn accepts_precision(&self) -> bool {
        matches!(self, Self::DraggingPoint { .. } | Self::PrecisionDragging { .. } | Self::Placing { .. })
    }

    /// Active precision engagement, if any.
    #[must_use]
    pub fn precision(&self) -> Option<&PrecisionDrag> {
        match self {
            Self::PrecisionDragging { drag, .. } => Some(drag),
            _ => None,
        }
    }
}
