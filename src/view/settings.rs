//! View settings - geometry and colors, loadable from JSON
//!
//! Every field has a default, so an embedding page only needs to send the
//! values it wants to change, e.g. `{"cell_size": 32}`.

use serde::Deserialize;

use crate::core::error::GridError;

/// Smallest accepted cell edge in pixels.
pub const MIN_CELL_SIZE: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Edge length of one cell in pixels
    pub cell_size: f64,
    /// Inset between the surface edge and the first grid line
    pub fixed_offset: f64,
    /// Wheel deltas are divided by this before panning
    pub wheel_divisor: f64,
    /// Line width of the viewport border
    pub border_width: f64,
    /// Fill for the dead space right of / below the viewport
    pub background_color: String,
    pub line_color: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            fixed_offset: 1.0,
            wheel_divisor: 10.0,
            border_width: 3.0,
            background_color: "#ffffff".to_string(),
            line_color: "#000000".to_string(),
        }
    }
}

impl ViewSettings {
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the numeric fields the camera divides by or loops over.
    pub fn validate(&self) -> Result<(), GridError> {
        let invalid = |field: &'static str, value: f64| -> Result<(), GridError> {
            Err(GridError::InvalidSettings { field, value })
        };

        if !self.cell_size.is_finite() || self.cell_size < MIN_CELL_SIZE {
            return invalid("cell_size", self.cell_size);
        }
        if !self.wheel_divisor.is_finite() || self.wheel_divisor == 0.0 {
            return invalid("wheel_divisor", self.wheel_divisor);
        }
        if !self.fixed_offset.is_finite() || self.fixed_offset < 0.0 {
            return invalid("fixed_offset", self.fixed_offset);
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return invalid("border_width", self.border_width);
        }
        Ok(())
    }

    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            cell_size,
            ..Self::default()
        }
    }
}
