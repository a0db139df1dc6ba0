//! Orthographic projection of grid samples onto the drawing area

use surfcrate_core::{GridView, Point3d, RotationMatrix, ViewState};

/// Spacing divisor applied to grid coordinates before scaling by the display width
const GRID_SPREAD: f64 = 1.41;

/// A projected point: screen position plus the depth component used for sorting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Projects grid cells through a cached rotation into screen space
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub rotation: RotationMatrix,
    pub view: ViewState,
}

impl Projector {
    /// Create a new projector
    pub fn new(rotation: RotationMatrix, view: ViewState) -> Self {
        Self { rotation, view }
    }

    /// Pre-projection point of the cell at `(row, col)` with height `h`.
    ///
    /// Both horizontal axes scale by the display width.
    pub fn model_point(&self, row: usize, col: usize, h: f64, rows: usize, cols: usize) -> Point3d {
        let ViewState { width, zoom, .. } = self.view;
        let (rows, cols) = (rows as f64, cols as f64);
        Point3d::new(
            (row as f64 - rows / 2.0) / (rows * GRID_SPREAD) * width * zoom,
            h * zoom,
            (col as f64 - cols / 2.0) / (cols * GRID_SPREAD) * width * zoom,
        )
    }

    /// Rotate a model point and translate it to the centre of the drawing area
    pub fn project(&self, point: &Point3d) -> ScreenPoint {
        let p = self.rotation.transform_point(point);
        let (cx, cy) = self.view.center();
        ScreenPoint {
            x: p.x + cx,
            y: p.y + cy,
            depth: p.z,
        }
    }

    /// Project every cell of `grid` using the matching entry of `heights`
    pub fn project_grid<T>(&self, grid: &GridView<'_, T>, heights: &[Vec<f64>]) -> Vec<Vec<ScreenPoint>> {
        let (rows, cols) = (grid.rows(), grid.cols());
        heights
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &h)| self.project(&self.model_point(r, c, h, rows, cols)))
                    .collect()
            })
            .collect()
    }
}

/// Evaluate `height_fn` over every cell of the grid. Nothing is cached.
pub fn heights<T, F>(grid: &GridView<'_, T>, height_fn: F) -> Vec<Vec<f64>>
where
    F: Fn(&T, usize, usize) -> f64,
{
    grid.as_rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, sample)| height_fn(sample, r, c))
                .collect()
        })
        .collect()
}
