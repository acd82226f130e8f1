//! External drag-and-drop payloads (e.g. a world point dragged from a list panel).
//!
//! The payload travels as a JSON string in the drag data transfer:
//! `{"kind": "world-point", "action": "place" | "move", "worldPointId": "<uuid>"}`.

#[cfg(test)]
#[path = "dnd_test.rs"]
mod dnd_test;

use serde::Deserialize;

use crate::doc::PointId;

/// Error returned by [`DropPayload::parse`].
#[derive(Debug, thiserror::Error)]
pub enum DropError {
    /// Not JSON, or missing/ill-typed fields.
    #[error("malformed drop payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload describes something other than a world point.
    #[error("unsupported drop kind: {0}")]
    UnknownKind(String),
    /// The action is neither `place` nor `move`.
    #[error("unsupported drop action: {0}")]
    UnknownAction(String),
}

/// What the drop asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// Add an observation of the point to this image.
    Place,
    /// Move the point's existing observation in this image.
    Move,
}

/// A decoded world-point drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPayload {
    pub action: DropAction,
    pub world_point_id: PointId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    kind: String,
    action: String,
    world_point_id: PointId,
}

impl DropPayload {
    /// Decode a drop payload string.
    ///
    /// # Errors
    ///
    /// Returns [`DropError`] when the payload is not valid JSON, is missing
    /// fields, or names an unknown kind or action.
    pub fn parse(raw: &str) -> Result<Self, DropError> {
        let payload: RawPayload = serde_json::from_str(raw)?;
        if payload.kind != "world-point" {
            return Err(DropError::UnknownKind(payload.kind));
        }
        let action = match payload.action.as_str() {
            "place" => DropAction::Place,
            "move" => DropAction::Move,
            _ => return Err(DropError::UnknownAction(payload.action)),
        };
        Ok(Self { action, world_point_id: payload.world_point_id })
    }
}
