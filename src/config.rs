//! Interaction tuning, parsed from a host-supplied JSON object.
//!
//! Every field is optional in the JSON; missing fields take the defaults in
//! [`crate::consts`]. Parsed values are validated before use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DRAG_THRESHOLD_PX, LINE_HIT_RADIUS_PX, POINT_HIT_RADIUS_PX, PRECISION_KEY, PRECISION_RATIO, PRECISION_TAP_MS,
    SELECTION_PADDING, WHEEL_ZOOM_STEP,
};

/// Errors produced while loading [`CanvasConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Surface-pixel radius for point hits.
    pub point_hit_radius_px: f64,
    /// Surface-pixel distance for line hits.
    pub line_hit_radius_px: f64,
    /// Pointer travel that turns an armed press into a drag.
    pub drag_threshold_px: f64,
    /// Fraction of pointer motion applied in precision mode.
    pub precision_ratio: f64,
    /// Max modifier hold, in milliseconds, that still counts as a tap.
    pub precision_tap_ms: f64,
    /// Browser key name of the precision modifier.
    pub precision_key: String,
    /// Zoom factor per wheel event.
    pub wheel_zoom_step: f64,
    /// Image-pixel padding around a fitted selection.
    pub selection_padding: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            point_hit_radius_px: POINT_HIT_RADIUS_PX,
            line_hit_radius_px: LINE_HIT_RADIUS_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            precision_ratio: PRECISION_RATIO,
            precision_tap_ms: PRECISION_TAP_MS,
            precision_key: PRECISION_KEY.to_string(),
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            selection_padding: SELECTION_PADDING,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as [`ConfigError::Invalid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("point_hit_radius_px", self.point_hit_radius_px > 0.0, "must be positive")?;
        require("line_hit_radius_px", self.line_hit_radius_px > 0.0, "must be positive")?;
        require("drag_threshold_px", self.drag_threshold_px >= 0.0, "must be non-negative")?;
        require(
            "precision_ratio",
            self.precision_ratio > 0.0 && self.precision_ratio <= 1.0,
            "must be in (0, 1]",
        )?;
        require("precision_tap_ms", self.precision_tap_ms > 0.0, "must be positive")?;
        require("precision_key", !self.precision_key.is_empty(), "must not be empty")?;
        require("wheel_zoom_step", self.wheel_zoom_step > 1.0, "must be greater than 1")?;
        require("selection_padding", self.selection_padding >= 0.0, "must be non-negative")
    }
}

/// NaN fails every range check, so it is rejected too.
fn require(field: &'static str, ok: bool, reason: &'static str) -> Result<(), ConfigError> {
    if ok { Ok(()) } else { Err(ConfigError::Invalid { field, reason }) }
}
