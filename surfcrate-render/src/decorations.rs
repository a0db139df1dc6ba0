//! Axis lines and reference markers drawn over the surface

use crate::frame::Overlay;
use crate::projection::ScreenPoint;

/// Style of the decoration overlay
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationStyle {
    pub axis_style: String,
    pub marker_radius: f64,
}

/// Build axis lines from the grid origin to the far corners at `(rows-1, 0)`
/// and `(0, cols-1)`, followed by a marker at each of the three points.
///
/// Degenerate grids get no decorations.
pub fn build(projected: &[Vec<ScreenPoint>], style: &DecorationStyle) -> Vec<Overlay> {
    let rows = projected.len();
    let cols = projected.first().map_or(0, Vec::len);
    if rows < 2 || cols < 2 {
        return Vec::new();
    }

    let origin = projected[0][0];
    let far_row = projected[rows - 1][0];
    let far_col = projected[0][cols - 1];

    let line = |to: ScreenPoint| Overlay::Line {
        x1: origin.x,
        y1: origin.y,
        x2: to.x,
        y2: to.y,
        style: style.axis_style.clone(),
    };
    let marker = |at: ScreenPoint| Overlay::Circle {
        cx: at.x,
        cy: at.y,
        r: style.marker_radius,
    };

    vec![
        line(far_row),
        line(far_col),
        marker(origin),
        marker(far_row),
        marker(far_col),
    ]
}
