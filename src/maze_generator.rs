//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::Result;
use crate::{Cell, Grid};

/// Maze generator drawing every maze from one random stream.
///
/// A seeded generator yields the same sequence of mazes on every run.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a perfect maze of `rows` x `cols` cells
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> Result<Grid> {
        let mut grid = Grid::new(rows, cols)?;
        carve(&mut grid, &mut self.random)?;
        Ok(grid)
    }
}

/// Generate a perfect maze, seeded for reproducibility or from entropy
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Grid> {
    MazeGenerator::new(seed).generate_maze(rows, cols)
}

/// Carve a perfect maze into an all-wall `grid` by randomized backtracking
///
/// Starting from the entrance, repeatedly step two cells in a random
/// direction into an untouched lattice cell, clearing the wall in between.
/// When the current cell has no untouched lattice neighbours, backtrack.
/// The backtracking stack is kept on the heap so grid size is not limited by
/// call depth.
///
/// A cell is only ever carved into once, so the passages form a spanning
/// tree of the lattice.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, random: &mut R) -> Result<()> {
    let start = grid.entrance();
    grid.set_passage(start)?;

    let mut stack = vec![start];
    let mut carved = 1;
    let mut candidates = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        candidates.clear();
        for &(dr, dc) in &Grid::OFFSETS {
            if let Some(target) = grid.offset(current, 2 * dr, 2 * dc) {
                if in_lattice(grid, target) && grid.is_wall(target)? {
                    candidates.push((target, dr, dc));
                }
            }
        }

        match candidates.choose(&mut *random) {
            Some(&(target, dr, dc)) => {
                let between = Cell::new(
                    current.row.wrapping_add_signed(dr),
                    current.col.wrapping_add_signed(dc),
                );
                trace!("Carving {} -> {} -> {}", current, between, target);
                grid.set_passage(between)?;
                grid.set_passage(target)?;
                stack.push(target);
                carved += 1;
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(
        "Generated {}x{} maze with {} lattice cells",
        grid.rows(),
        grid.cols(),
        carved
    );
    Ok(())
}

/// Passage lattice excludes the outer border
fn in_lattice(grid: &Grid, cell: Cell) -> bool {
    (1..grid.rows() - 1).contains(&cell.row) && (1..grid.cols() - 1).contains(&cell.col)
}
