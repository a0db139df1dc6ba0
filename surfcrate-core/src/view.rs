//! Display size and zoom of a surface

use serde::{Deserialize, Serialize};

/// Display width used when none has been set
pub const DEFAULT_DISPLAY_SIZE: f64 = 300.0;

/// Display dimensions and zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

impl ViewState {
    /// Create a new view
    pub fn new(width: f64, height: f64, zoom: f64) -> Self {
        Self { width, height, zoom }
    }

    /// Update the display width. Missing, zero, negative or non-finite values
    /// are ignored. Returns whether the width was taken.
    pub fn set_width(&mut self, width: impl Into<Option<f64>>) -> bool {
        match accept_dimension(width.into()) {
            Some(w) => {
                self.width = w;
                true
            }
            None => false,
        }
    }

    /// Update the display height with the same rules as [`ViewState::set_width`]
    pub fn set_height(&mut self, height: impl Into<Option<f64>>) -> bool {
        match accept_dimension(height.into()) {
            Some(h) => {
                self.height = h;
                true
            }
            None => false,
        }
    }

    /// Update the zoom level. Negative and non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if zoom.is_finite() && zoom >= 0.0 {
            self.zoom = zoom;
            true
        } else {
            false
        }
    }

    /// Screen-space offset placing the origin at the centre of the drawing area
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_SIZE, DEFAULT_DISPLAY_SIZE, 1.0)
    }
}

fn accept_dimension(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.width, 300.0);
        assert_eq!(view.height, 300.0);
        assert_eq!(view.zoom, 1.0);
        assert_eq!(view.center(), (150.0, 150.0));
    }

    #[test]
    fn test_invalid_dimensions_are_ignored() {
        let mut view = ViewState::default();
        assert!(view.set_width(640.0));
        assert!(!view.set_width(0.0));
        assert!(!view.set_width(None::<f64>));
        assert!(!view.set_width(f64::NAN));
        assert!(!view.set_width(-10.0));
        assert_eq!(view.width, 640.0);

        assert!(!view.set_height(0.0));
        assert_eq!(view.height, 300.0);
        assert!(view.set_height(Some(480.0)));
        assert_eq!(view.height, 480.0);
    }

    #[test]
    fn test_zoom_bounds() {
        let mut view = ViewState::default();
        assert!(view.set_zoom(0.0));
        assert_eq!(view.zoom, 0.0);
        assert!(!view.set_zoom(-1.0));
        assert!(!view.set_zoom(f64::INFINITY));
        assert_eq!(view.zoom, 0.0);
        assert!(view.set_zoom(2.5));
        assert_eq!(view.zoom, 2.5);
    }
}
