//! Generate a random maze, walk it in the terminal, and ask for the way out
//!
//! Mazes are carved by randomized depth-first backtracking and solved by
//! breadth-first search. The maze is a grid of wall flags where cells with
//! two odd coordinates are rooms; the entrance is the top-left room and the
//! exit the bottom-right one.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use maze_runner::{generate_maze, solve_shortest_path};
//!
//! let grid = generate_maze(21, 21, Some(7)).unwrap();
//! let solution = solve_shortest_path(&grid, grid.entrance(), grid.exit()).unwrap();
//! println!("{}", grid.to_text());
//! println!("The shortest path is {} steps.", solution.path().unwrap().steps());
//! ```
//!
//! ## Solve a hand-drawn maze
//! ```
//! use maze_runner::{parse_text, solve_shortest_path, Cell};
//!
//! let maze = "
//! ███████
//! █     █
//! █ ███ █
//! █   █ █
//! ███ █ █
//! █     █
//! ███████";
//! let grid = parse_text(maze.trim_start_matches('\n')).unwrap();
//! let solution = solve_shortest_path(&grid, grid.entrance(), grid.exit()).unwrap();
//! assert_eq!(solution.path().unwrap().steps(), 8);
//! assert_eq!(grid.exit(), Cell::new(5, 5));
//! ```

use std::fmt;

pub mod error;
pub mod game;
pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod solver;
pub mod terminal;

pub use error::{MazeError, Result};
pub use grid::Grid;
pub use maze_generator::{carve, generate_maze, MazeGenerator};
pub use render::{parse_text, render, Overlay};
pub use solver::{solve_shortest_path, Path, Solution};

/// Location in the maze
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
