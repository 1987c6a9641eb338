//! Shortest path search over a finished maze

use std::collections::VecDeque;

use log::debug;

use crate::error::{MazeError, Result};
use crate::{Cell, Grid};

/// Ordered cells from start to goal, both included
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells on the path
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A path always holds at least its start cell
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves needed to walk the path
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.0.last().copied()
    }
}

/// Outcome of a shortest path search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Found(Path),
    /// Goal lies in a different component than start
    Unreachable,
}

impl Solution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Solution::Found(path) => Some(path),
            Solution::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Solution::Found(_))
    }
}

/// Find the shortest path from `start` to `goal` by breadth-first search
///
/// Both endpoints must be passages: a wall gives [MazeError::InvalidCell],
/// a cell outside the grid gives [MazeError::OutOfBounds]. Cells are marked
/// visited when enqueued, so each is expanded at most once.
///
/// # Examples
/// ```
/// use maze_runner::{generate_maze, solve_shortest_path};
///
/// let grid = generate_maze(11, 11, Some(1)).unwrap();
/// let solution = solve_shortest_path(&grid, grid.entrance(), grid.exit()).unwrap();
/// let path = solution.path().unwrap();
/// assert_eq!(path.start(), Some(grid.entrance()));
/// assert_eq!(path.goal(), Some(grid.exit()));
/// ```
pub fn solve_shortest_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Solution> {
    for cell in [start, goal] {
        if grid.is_wall(cell)? {
            return Err(MazeError::InvalidCell { cell });
        }
    }

    let mut prev: Vec<Option<Cell>> = vec![None; grid.len()];
    let mut visited = vec![false; grid.len()];
    visited[grid.index(start)?] = true;
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            let path = reconstruct(grid, &prev, goal)?;
            debug!("Shortest path {} -> {} has {} steps", start, goal, path.steps());
            return Ok(Solution::Found(path));
        }
        for next in grid.neighbors4(current) {
            let idx = grid.index(next)?;
            if visited[idx] || grid.is_wall(next)? {
                continue;
            }
            visited[idx] = true;
            prev[idx] = Some(current);
            frontier.push_back(next);
        }
    }

    debug!("No path from {} to {}", start, goal);
    Ok(Solution::Unreachable)
}

/// Follow predecessors back from `goal` until the start, which has none
fn reconstruct(grid: &Grid, prev: &[Option<Cell>], goal: Cell) -> Result<Path> {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(before) = prev[grid.index(current)?] {
        cells.push(before);
        current = before;
    }
    cells.reverse();
    Ok(Path(cells))
}
