//! Draw commands emitted by a render pass

/// Delay and duration mirrored onto an animated update, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl Transition {
    pub fn new(delay_ms: u64, duration_ms: u64) -> Self {
        Self { delay_ms, duration_ms }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(0, 250)
    }
}

/// Geometry and optional fill of one quad, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    /// SVG path data
    pub d: String,
    /// Fill to apply; `None` leaves the element's current fill untouched
    pub fill: Option<String>,
    /// Depth key the quad was sorted by
    pub depth: f64,
    /// Grid cell `(row, col)` the quad was built from
    pub cell: (usize, usize),
}

/// Cosmetic primitives layered after all quads
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
}

/// Screen-space bounding box of all quad corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Grow the box to include the extent `(min_x, min_y, max_x, max_y)`
    pub fn include(self, (x0, y0, x1, y1): (f64, f64, f64, f64)) -> Self {
        Self {
            min_x: self.min_x.min(x0),
            min_y: self.min_y.min(y0),
            max_x: self.max_x.max(x1),
            max_y: self.max_y.max(y1),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Complete draw-command list of one render pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Depth-sorted quads, farthest first
    pub paths: Vec<PathCommand>,
    /// Decorations drawn on top of the quads
    pub overlays: Vec<Overlay>,
    /// One-shot transition for this update, if one was requested
    pub transition: Option<Transition>,
    /// Extent of the quads; `None` for an empty scene
    pub bounds: Option<Bounds>,
}

impl Frame {
    /// An empty scene, optionally animated
    pub fn empty(transition: Option<Transition>) -> Self {
        Self {
            transition,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.overlays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_include() {
        let b = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        }
        .include((-2.0, 0.5, 0.5, 4.0));
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 4.0);
    }

    #[test]
    fn test_default_transition() {
        assert_eq!(Transition::default(), Transition::new(0, 250));
        assert!(Frame::empty(None).is_empty());
    }
}
