//! Wall-flag grid underlying every maze

use crate::error::{MazeError, Result};
use crate::Cell;

/// Rectangular grid of wall flags
///
/// Cells with both coordinates odd form the passage lattice; everything else
/// stays a wall unless the generator carves through it. Dimensions are fixed
/// at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major wall flags
    walls: Vec<bool>,
}

impl Grid {
    /// Neighbour offsets in the order up, down, left, right
    pub(crate) const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Create an all-wall grid
    ///
    /// Returns [MazeError::InvalidDimensions] unless both `rows` and `cols`
    /// are odd and at least 3.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 3 || cols < 3 || rows % 2 == 0 || cols % 2 == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            walls: vec![true; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Top-left passage cell, where the player starts
    pub fn entrance(&self) -> Cell {
        Cell::new(1, 1)
    }

    /// Bottom-right passage cell
    pub fn exit(&self) -> Cell {
        Cell::new(self.rows - 2, self.cols - 2)
    }

    pub fn is_wall(&self, cell: Cell) -> Result<bool> {
        Ok(self.walls[self.index(cell)?])
    }

    /// Clear the wall flag of `cell`
    pub fn set_passage(&mut self, cell: Cell) -> Result<()> {
        let idx = self.index(cell)?;
        self.walls[idx] = false;
        Ok(())
    }

    /// In-bounds 4-adjacent cells, in the order up, down, left, right
    pub fn neighbors4(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Self::OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(cell, dr, dc))
    }

    /// Non-wall cells in row-major order
    pub fn passages(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls
            .iter()
            .enumerate()
            .filter(|(_, wall)| !**wall)
            .map(|(idx, _)| Cell::new(idx / self.cols, idx % self.cols))
    }

    /// Number of adjacent non-wall pairs
    ///
    /// Each pair is counted once, looking only down and right.
    pub fn open_edges(&self) -> usize {
        self.passages()
            .map(|cell| {
                [(1, 0), (0, 1)]
                    .into_iter()
                    .filter_map(|(dr, dc)| self.offset(cell, dr, dc))
                    .filter(|&n| !self.walls[self.flat(n)])
                    .count()
            })
            .sum()
    }

    /// Cell at `(dr, dc)` from `cell`, if it lies inside the grid
    pub(crate) fn offset(&self, cell: Cell, dr: isize, dc: isize) -> Option<Cell> {
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let target = Cell::new(row, col);
        self.contains(target).then_some(target)
    }

    /// Row-major index of `cell`
    pub(crate) fn index(&self, cell: Cell) -> Result<usize> {
        if self.contains(cell) {
            Ok(self.flat(cell))
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.walls.len()
    }

    fn flat(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MazeError;
    use crate::{Cell, Grid};

    #[test]
    fn reject_even_or_small_dimensions() {
        for (rows, cols) in [(4, 5), (5, 4), (1, 5), (5, 1), (0, 0), (2, 3)] {
            assert_eq!(
                Grid::new(rows, cols),
                Err(MazeError::InvalidDimensions { rows, cols })
            );
        }
        assert!(Grid::new(3, 3).is_ok());
    }

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(5, 7).unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 7);
        for row in 0..5 {
            for col in 0..7 {
                assert!(grid.is_wall(Cell::new(row, col)).unwrap());
            }
        }
        assert_eq!(grid.passages().count(), 0);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut grid = Grid::new(5, 5).unwrap();
        let outside = Cell::new(5, 2);
        assert_eq!(
            grid.is_wall(outside),
            Err(MazeError::OutOfBounds {
                cell: outside,
                rows: 5,
                cols: 5
            })
        );
        assert!(grid.set_passage(Cell::new(0, 5)).is_err());
    }

    #[test]
    fn set_passage_clears_only_that_cell() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_passage(Cell::new(1, 2)).unwrap();
        assert!(!grid.is_wall(Cell::new(1, 2)).unwrap());
        assert_eq!(grid.passages().collect::<Vec<_>>(), vec![Cell::new(1, 2)]);
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(
            grid.neighbors4(Cell::new(2, 2)).collect::<Vec<_>>(),
            vec![
                Cell::new(1, 2),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(2, 3)
            ]
        );
        // Corner keeps only the in-bounds neighbours
        assert_eq!(
            grid.neighbors4(Cell::new(0, 4)).collect::<Vec<_>>(),
            vec![Cell::new(1, 4), Cell::new(0, 3)]
        );
    }

    #[test]
    fn entrance_and_exit() {
        let grid = Grid::new(7, 9).unwrap();
        assert_eq!(grid.entrance(), Cell::new(1, 1));
        assert_eq!(grid.exit(), Cell::new(5, 7));
    }

    #[test]
    fn count_open_edges() {
        let mut grid = Grid::new(5, 5).unwrap();
        for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)] {
            grid.set_passage(Cell::new(row, col)).unwrap();
        }
        assert_eq!(grid.open_edges(), 4);
    }
}
