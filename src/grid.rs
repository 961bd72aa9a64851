use crate::color::Color;

/// Read-only view of a `rows x cols` matrix of cell colors
///
/// The display borrows a grid for the duration of one render call only.
pub trait ColorGrid {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Color of a cell, `None` when the cell does not exist (ragged rows)
    fn color_at(&self, row: usize, col: usize) -> Option<Color>;

    /// `rows * cols`; zero means there is nothing to rasterize
    fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }
}

impl ColorGrid for [Vec<Color>] {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.get(row)?.get(col).copied()
    }
}

impl ColorGrid for Vec<Vec<Color>> {
    fn rows(&self) -> usize {
        self.as_slice().rows()
    }

    fn cols(&self) -> usize {
        self.as_slice().cols()
    }

    fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.as_slice().color_at(row, col)
    }
}

impl<const R: usize, const C: usize> ColorGrid for [[Color; C]; R] {
    fn rows(&self) -> usize {
        R
    }

    fn cols(&self) -> usize {
        C
    }

    fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.get(row)?.get(col).copied()
    }
}

/// Owned row-major cell matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl CellMatrix {
    /// Matrix filled with one color
    pub fn filled(rows: usize, cols: usize, color: Color) -> Self {
        Self {
            rows,
            cols,
            cells: vec![color; rows * cols],
        }
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = color;
        }
    }
}

impl ColorGrid for CellMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_vec_dimensions() {
        let grid = vec![vec![Color::RED; 3]; 2];
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.color_at(1, 2), Some(Color::RED));
        assert_eq!(grid.color_at(2, 0), None);
    }

    #[test]
    fn test_ragged_rows_report_missing_cells() {
        let grid = vec![vec![Color::RED, Color::GREEN], vec![Color::BLUE]];
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.color_at(1, 1), None);
    }

    #[test]
    fn test_empty_grids() {
        let no_rows: Vec<Vec<Color>> = Vec::new();
        let no_cols: Vec<Vec<Color>> = vec![Vec::new(), Vec::new()];
        assert_eq!(no_rows.cell_count(), 0);
        assert_eq!(no_cols.cell_count(), 0);
        assert_eq!(CellMatrix::filled(0, 4, Color::RED).cell_count(), 0);
    }

    #[test]
    fn test_array_grid() {
        let grid = [[Color::RED, Color::GREEN], [Color::BLUE, Color::WHITE]];
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid.color_at(1, 0), Some(Color::BLUE));
    }

    #[test]
    fn test_cell_matrix_set_and_bounds() {
        let mut m = CellMatrix::filled(2, 2, Color::BLACK);
        m.set(1, 1, Color::WHITE);
        m.set(5, 5, Color::WHITE);
        assert_eq!(m.color_at(1, 1), Some(Color::WHITE));
        assert_eq!(m.color_at(0, 0), Some(Color::BLACK));
        assert_eq!(m.color_at(2, 0), None);
    }
}
