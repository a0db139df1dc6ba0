//! Rectangular sample grids

use crate::error::{Error, Result};

/// A validated, borrowed view over a rectangular array-of-rows.
///
/// The view never copies samples; it only checks that the rows it wraps are
/// non-empty and all of the same length.
#[derive(Debug)]
pub struct GridView<'a, T> {
    data: &'a [Vec<T>],
    cols: usize,
}

impl<'a, T> Clone for GridView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for GridView<'a, T> {}

impl<'a, T> GridView<'a, T> {
    /// Validate `data` as a rectangular, non-empty grid
    pub fn new(data: &'a [Vec<T>]) -> Result<Self> {
        let first = data.first().ok_or_else(|| Error::MalformedGrid {
            surface: None,
            rows: 0,
            detail: "grid has no rows".to_string(),
        })?;

        let cols = first.len();
        if cols == 0 {
            return Err(Error::MalformedGrid {
                surface: None,
                rows: data.len(),
                detail: "grid has no columns".to_string(),
            });
        }

        if let Some((index, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::MalformedGrid {
                surface: None,
                rows: data.len(),
                detail: format!("row {} has {} columns, expected {}", index, row.len(), cols),
            });
        }

        Ok(Self { data, cols })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the sample at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Number of quads spanned by the grid: `(rows - 1) * (cols - 1)`
    pub fn quad_count(&self) -> usize {
        self.rows().saturating_sub(1) * self.cols.saturating_sub(1)
    }

    /// Iterate over all samples in row-major order with their coordinates
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &'a T)> + 'a {
        self.data
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, v)))
    }

    /// Borrow the underlying rows
    pub fn as_rows(&self) -> &'a [Vec<T>] {
        self.data
    }
}

impl<'a, T> std::ops::Index<(usize, usize)> for GridView<'a, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_grid() {
        let data = vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]];
        let grid = GridView::new(&data).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[(1, 2)], 5.0);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.quad_count(), 2);
    }

    #[test]
    fn test_degenerate_grids_have_no_quads() {
        let single_row = vec![vec![1.0, 2.0, 3.0]];
        assert_eq!(GridView::new(&single_row).unwrap().quad_count(), 0);

        let single_col = vec![vec![1.0], vec![2.0]];
        assert_eq!(GridView::new(&single_col).unwrap().quad_count(), 0);
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            GridView::new(&empty),
            Err(Error::MalformedGrid { rows: 0, .. })
        ));

        let no_cols: Vec<Vec<f64>> = vec![Vec::new(), Vec::new()];
        assert!(matches!(
            GridView::new(&no_cols),
            Err(Error::MalformedGrid { rows: 2, .. })
        ));
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        let err = GridView::new(&ragged).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row 1 has 1 columns, expected 2"), "{}", message);
        assert!(message.contains("3 rows"), "{}", message);
    }

    #[test]
    fn test_cells_are_row_major() {
        let data = vec![vec!['a', 'b'], vec!['c', 'd']];
        let grid = GridView::new(&data).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0, &'a'), (0, 1, &'b'), (1, 0, &'c'), (1, 1, &'d')]);
    }
}
