//! Quad extraction and painter's-algorithm depth sort

use std::fmt::Write;

use itertools::iproduct;
use surfcrate_core::GridView;

use crate::projection::ScreenPoint;

/// One flat-shaded cell of the surface, built fresh on every render
#[derive(Debug, Clone, PartialEq)]
pub struct Quad<'a, T> {
    /// Corners `(r,c), (r+1,c), (r+1,c+1), (r,c+1)` in screen space
    pub corners: [ScreenPoint; 4],
    /// Sum of the corners' depth components
    pub depth: f64,
    /// Row of the cell's first corner
    pub row: usize,
    /// Column of the cell's first corner
    pub col: usize,
    /// Sample the cell originates from, used for colouring
    pub sample: &'a T,
}

impl<'a, T> Quad<'a, T> {
    /// Closed path geometry (`M` + three `L` + `Z`) with `precision` decimals
    pub fn path_data(&self, precision: usize) -> String {
        let mut d = String::with_capacity(4 * (2 * precision + 12));
        for (i, corner) in self.corners.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            // Writing into a String cannot fail.
            let _ = write!(
                d,
                "{}{},{}",
                command,
                fixed(corner.x, precision),
                fixed(corner.y, precision)
            );
        }
        d.push('Z');
        d
    }

    /// Screen-space bounding box of the corners as `(min_x, min_y, max_x, max_y)`
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        self.corners.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        )
    }
}

/// Build one quad per interior cell of the grid, in row-major cell order.
///
/// `projected` must have the same shape as `grid`.
pub fn extract_quads<'a, T>(grid: &GridView<'a, T>, projected: &[Vec<ScreenPoint>]) -> Vec<Quad<'a, T>> {
    let rows = grid.rows();
    let cols = grid.cols();
    if rows < 2 || cols < 2 {
        return Vec::new();
    }

    let mut quads = Vec::with_capacity(grid.quad_count());
    for (r, c) in iproduct!(0..rows - 1, 0..cols - 1) {
        let corners = [
            projected[r][c],
            projected[r + 1][c],
            projected[r + 1][c + 1],
            projected[r][c + 1],
        ];
        let depth = corners.iter().map(|p| p.depth).sum();
        quads.push(Quad {
            corners,
            depth,
            row: r,
            col: c,
            sample: &grid.as_rows()[r][c],
        });
    }
    quads
}

/// Order quads farthest first (descending depth key). The sort is stable.
pub fn depth_sort<T>(quads: &mut [Quad<'_, T>]) {
    quads.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

/// Format `value` with a fixed number of decimals.
///
/// Negative zero prints as `0`; small negative values keep their sign
/// (`-0.00001` at two decimals is `-0.00`).
pub fn fixed(value: f64, precision: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", precision, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{heights, Projector};
    use surfcrate_core::{RotationMatrix, ViewState};

    fn quads_for<'a>(grid: &GridView<'a, f64>, yaw: f64, pitch: f64) -> Vec<Quad<'a, f64>> {
        let projector = Projector::new(
            RotationMatrix::turntable(yaw, pitch),
            ViewState::new(100.0, 100.0, 1.0),
        );
        let h = heights(grid, |v: &f64, _, _| *v);
        let projected = projector.project_grid(grid, &h);
        extract_quads(grid, &projected)
    }

    #[test]
    fn test_quad_count() {
        for (rows, cols) in [(2, 2), (3, 4), (7, 5), (1, 6), (6, 1)] {
            let data = vec![vec![0.0; cols]; rows];
            let grid = GridView::new(&data).unwrap();
            let quads = quads_for(&grid, 0.5, 0.5);
            assert_eq!(quads.len(), (rows - 1) * (cols - 1), "{}x{}", rows, cols);
        }
    }

    #[test]
    fn test_winding_order_and_sample() {
        let data = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let grid = GridView::new(&data).unwrap();
        let quads = quads_for(&grid, 0.0, 0.0);
        assert_eq!(quads.len(), 1);

        let q = &quads[0];
        assert_eq!(*q.sample, 0.0);
        // heights follow the (r,c), (r+1,c), (r+1,c+1), (r,c+1) walk
        let ys: Vec<f64> = q.corners.iter().map(|p| p.y - 50.0).collect();
        assert_eq!(ys, vec![0.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_depth_key_is_corner_sum() {
        let data = vec![vec![0.3, 1.0, -2.0], vec![2.0, 0.5, 1.5], vec![-1.0, 0.0, 4.0]];
        let grid = GridView::new(&data).unwrap();
        for q in quads_for(&grid, 1.1, -0.4) {
            let sum: f64 = q.corners.iter().map(|p| p.depth).sum();
            assert_eq!(q.depth, sum);
        }
    }

    #[test]
    fn test_depth_sort_is_descending() {
        let data: Vec<Vec<f64>> = (0..6)
            .map(|r| (0..6).map(|c| ((r * c) as f64).sin()).collect())
            .collect();
        let grid = GridView::new(&data).unwrap();
        let mut quads = quads_for(&grid, 0.8, 0.3);
        depth_sort(&mut quads);
        assert!(quads.windows(2).all(|w| w[0].depth >= w[1].depth));
    }

    #[test]
    fn test_path_data_format() {
        let data = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let grid = GridView::new(&data).unwrap();
        let quads = quads_for(&grid, 0.0, 0.0);
        assert_eq!(
            quads[0].path_data(2),
            "M14.54,50.00L50.00,52.00L50.00,53.00L14.54,51.00Z"
        );
    }

    #[test]
    fn test_fixed_normalises_only_exact_negative_zero() {
        assert_eq!(fixed(-0.0, 3), "0.000");
        assert_eq!(fixed(0.0, 2), "0.00");
        assert_eq!(fixed(-0.00001, 2), "-0.00");
        assert_eq!(fixed(-1.5, 1), "-1.5");
        assert_eq!(fixed(14.539007092198581, 10), "14.5390070922");
    }
}
