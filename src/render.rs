//! Text form of a maze
//!
//! A maze is drawn one character per cell. The same characters are accepted
//! when reading a maze back, overlay glyphs included, so the output of
//! `generate-maze` can be fed to `solve-maze` as is.

use itertools::Itertools;

use crate::error::{MazeError, Result};
use crate::solver::Path;
use crate::{Cell, Grid};

pub const S_WALL: char = '█';
pub const S_PASSAGE: char = ' ';
pub const S_PLAYER: char = '@';
pub const S_EXIT: char = 'X';
pub const S_PATH: char = '.';
/// ASCII alternative for walls, accepted when parsing
pub const S_WALL_ASCII: char = '#';

/// Glyphs drawn on top of the terrain
///
/// Precedence, highest first: player, exit, path.
#[derive(Default, Clone, Copy, Debug)]
pub struct Overlay<'a> {
    pub player: Option<Cell>,
    pub exit: Option<Cell>,
    pub path: Option<&'a Path>,
}

/// Draw `grid` with `overlay`, one string per row
pub fn render(grid: &Grid, overlay: &Overlay) -> Vec<String> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| glyph_at(grid, overlay, Cell::new(row, col)))
                .collect()
        })
        .collect()
}

fn glyph_at(grid: &Grid, overlay: &Overlay, cell: Cell) -> char {
    if overlay.player == Some(cell) {
        S_PLAYER
    } else if overlay.exit == Some(cell) {
        S_EXIT
    } else if overlay.path.is_some_and(|path| path.contains(cell)) {
        S_PATH
    } else if grid.is_wall(cell).unwrap_or(true) {
        S_WALL
    } else {
        S_PASSAGE
    }
}

/// Parse a maze drawn with [render]
///
/// Walls are `█` or `#`; passages are space, `.`, `@` or `X`. Every row must
/// have the same width, and the dimensions must be odd and at least 3.
/// Trailing line breaks are ignored; spaces are significant.
pub fn parse_text(text: &str) -> Result<Grid> {
    let lines: Vec<Vec<char>> = text
        .trim_end_matches(['\n', '\r'])
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    let rows = lines.len();
    let cols = lines.first().map_or(0, Vec::len);
    let mut grid = Grid::new(rows, cols)?;

    for (row, line) in lines.iter().enumerate() {
        if line.len() != cols {
            return Err(MazeError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }
        for (col, &glyph) in line.iter().enumerate() {
            match glyph {
                S_WALL | S_WALL_ASCII => (),
                S_PASSAGE | S_PATH | S_PLAYER | S_EXIT => grid.set_passage(Cell::new(row, col))?,
                _ => return Err(MazeError::UnexpectedGlyph { glyph, row, col }),
            }
        }
    }
    Ok(grid)
}

impl Grid {
    /// Plain drawing without overlay, rows joined by newlines
    pub fn to_text(&self) -> String {
        render(self, &Overlay::default()).iter().join("\n")
    }
}
