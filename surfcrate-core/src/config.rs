//! Surface configuration

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rotation::Turntable;
use crate::view::{ViewState, DEFAULT_DISPLAY_SIZE};

/// Stroke style applied to axis decorations
pub const DEFAULT_AXIS_STYLE: &str = "stroke:rgb(0,0,0);stroke-width:2";

/// Largest number of decimals accepted for path geometry
pub const MAX_PRECISION: usize = 100;

/// Configuration of a surface engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Display width in pixels
    pub width: f64,
    /// Display height in pixels
    pub height: f64,
    /// Zoom level applied to both grid spacing and heights
    pub zoom: f64,
    /// Initial yaw in radians
    pub yaw: f64,
    /// Initial pitch in radians
    pub pitch: f64,
    /// Decimal places written into path geometry
    pub precision: usize,
    /// Whether axis lines and origin markers are drawn over the surface
    pub decorations: bool,
    /// Inline style of the axis lines
    pub axis_style: String,
    /// Radius of the reference point markers
    pub marker_radius: f64,
}

impl SurfaceConfig {
    /// View state described by this configuration
    pub fn view(&self) -> ViewState {
        let mut view = ViewState::default();
        view.set_width(self.width);
        view.set_height(self.height);
        view.set_zoom(self.zoom);
        view
    }

    /// Initial turntable orientation
    pub fn turntable(&self) -> Turntable {
        Turntable::new(self.yaw, self.pitch)
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no surface can be drawn with.
    ///
    /// Zero or negative sizes and zoom are tolerated here; [`SurfaceConfig::view`]
    /// falls back to defaults for them.
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.yaw.is_finite() && self.pitch.is_finite()) {
            return Err(Error::InvalidData(format!(
                "rotation must be finite, got yaw={} pitch={}",
                self.yaw, self.pitch
            )));
        }
        if !(self.marker_radius.is_finite() && self.marker_radius >= 0.0) {
            return Err(Error::InvalidData(format!(
                "marker_radius must be a non-negative number, got {}",
                self.marker_radius
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(Error::InvalidData(format!(
                "precision {} exceeds {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        let turntable = Turntable::default();
        Self {
            width: DEFAULT_DISPLAY_SIZE,
            height: DEFAULT_DISPLAY_SIZE,
            zoom: 1.0,
            yaw: turntable.yaw,
            pitch: turntable.pitch,
            precision: 10,
            decorations: true,
            axis_style: DEFAULT_AXIS_STYLE.to_string(),
            marker_radius: 3.0,
        }
    }
}
