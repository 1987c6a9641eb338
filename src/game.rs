//! Game session: player movement, solution hint and win detection
//!
//! The session is independent of any terminal; it is driven by [Command]s
//! and produces frames as lines of text.

use log::{debug, info};

use crate::error::Result;
use crate::maze_generator::MazeGenerator;
use crate::render::{render, Overlay};
use crate::solver::{solve_shortest_path, Solution};
use crate::{Cell, Grid};

pub const INSTRUCTIONS: [&str; 4] = [
    "Use arrow keys to move",
    "Press 's' to toggle solution",
    "Press 'n' to generate new maze",
    "Press 'q' to quit",
];

pub const WIN_MESSAGE: [&str; 2] = [
    "Congratulations! You've completed the maze.",
    "Press 'n' for a new maze or 'q' to quit.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column offset of one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    ToggleSolution,
    NewMaze,
    Quit,
}

/// Whether the driving loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// Player stands on the exit
    Won,
}

/// One game in progress
pub struct MazeGame {
    generator: MazeGenerator,
    grid: Grid,
    player: Cell,
    show_solution: bool,
    /// Shortest path from the player to the exit
    solution: Solution,
    status: Status,
}

impl MazeGame {
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self> {
        let mut generator = MazeGenerator::new(seed);
        let grid = generator.generate_maze(rows, cols)?;
        let player = grid.entrance();
        let solution = solve_shortest_path(&grid, player, grid.exit())?;
        let status = Self::status_at(&grid, player);
        Ok(Self {
            generator,
            grid,
            player,
            show_solution: false,
            solution,
            status,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn is_solution_shown(&self) -> bool {
        self.show_solution
    }

    /// Apply a single command
    ///
    /// After a win only [Command::NewMaze] and [Command::Quit] take effect.
    pub fn apply(&mut self, command: Command) -> Result<Flow> {
        match (command, self.status) {
            (Command::Quit, _) => return Ok(Flow::Quit),
            (Command::NewMaze, _) => self.new_maze()?,
            (Command::Move(direction), Status::Playing) => {
                self.step(direction)?;
            }
            (Command::ToggleSolution, Status::Playing) => {
                self.show_solution = !self.show_solution;
            }
            (_, Status::Won) => (),
        }
        Ok(Flow::Continue)
    }

    /// Move the player one cell, unless blocked by a wall or the border
    ///
    /// Returns whether the player moved.
    pub fn step(&mut self, direction: Direction) -> Result<bool> {
        let (dr, dc) = direction.delta();
        let target = match self.grid.offset(self.player, dr, dc) {
            Some(target) if !self.grid.is_wall(target)? => target,
            _ => return Ok(false),
        };
        self.player = target;
        self.solution = solve_shortest_path(&self.grid, self.player, self.grid.exit())?;
        self.status = Self::status_at(&self.grid, self.player);
        if self.status == Status::Won {
            info!("Maze completed");
        }
        Ok(true)
    }

    /// Replace the maze with a fresh one of the same size
    pub fn new_maze(&mut self) -> Result<()> {
        self.grid = self
            .generator
            .generate_maze(self.grid.rows(), self.grid.cols())?;
        self.player = self.grid.entrance();
        self.solution = solve_shortest_path(&self.grid, self.player, self.grid.exit())?;
        self.show_solution = false;
        self.status = Self::status_at(&self.grid, self.player);
        debug!("New {}x{} maze", self.grid.rows(), self.grid.cols());
        Ok(())
    }

    /// A 3x3 maze starts on its own exit
    fn status_at(grid: &Grid, player: Cell) -> Status {
        if player == grid.exit() {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Lines to draw for the current state
    pub fn frame(&self) -> Vec<String> {
        if self.status == Status::Won {
            return WIN_MESSAGE.iter().map(|line| line.to_string()).collect();
        }
        let overlay = Overlay {
            player: Some(self.player),
            exit: Some(self.grid.exit()),
            path: self.solution.path().filter(|_| self.show_solution),
        };
        let mut lines = render(&self.grid, &overlay);
        lines.push(String::new());
        lines.extend(INSTRUCTIONS.iter().map(|line| line.to_string()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{Command, Direction, Flow, MazeGame, Status, INSTRUCTIONS, WIN_MESSAGE};
    use crate::render::{S_EXIT, S_PATH, S_PLAYER};
    use crate::Cell;

    /// Direction from `from` to the adjacent cell `to`
    fn direction(from: Cell, to: Cell) -> Direction {
        if to.row < from.row {
            Direction::Up
        } else if to.row > from.row {
            Direction::Down
        } else if to.col < from.col {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Walk the current solution to the exit
    fn walk_to_exit(game: &mut MazeGame) {
        let path = game.solution().path().unwrap().cells().to_vec();
        for pair in path.windows(2) {
            let flow = game.apply(Command::Move(direction(pair[0], pair[1]))).unwrap();
            assert_eq!(flow, Flow::Continue);
            assert_eq!(game.player(), pair[1]);
        }
    }

    #[test]
    fn start_at_entrance() {
        let game = MazeGame::new(9, 9, Some(0)).unwrap();
        assert_eq!(game.player(), Cell::new(1, 1));
        assert_eq!(game.status(), Status::Playing);
        assert!(!game.is_solution_shown());
        assert!(game.solution().is_reachable());
    }

    #[test]
    fn reject_even_dimensions() {
        assert!(MazeGame::new(8, 9, Some(0)).is_err());
    }

    #[test]
    fn walls_block_movement() {
        let mut game = MazeGame::new(9, 9, Some(0)).unwrap();
        // Row 0 is border wall
        assert!(!game.step(Direction::Up).unwrap());
        assert!(!game.step(Direction::Left).unwrap());
        assert_eq!(game.player(), Cell::new(1, 1));
    }

    #[test]
    fn move_recomputes_solution() {
        let mut game = MazeGame::new(11, 11, Some(3)).unwrap();
        let before = game.solution().path().unwrap().steps();
        let next = game.solution().path().unwrap().cells()[1];
        assert!(game.step(direction(game.player(), next)).unwrap());
        assert_eq!(game.solution().path().unwrap().steps(), before - 1);
        assert_eq!(game.solution().path().unwrap().start(), Some(next));
    }

    #[test]
    fn reach_exit_and_win() {
        let mut game = MazeGame::new(11, 13, Some(8)).unwrap();
        walk_to_exit(&mut game);
        assert_eq!(game.player(), game.grid().exit());
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.frame(), WIN_MESSAGE.to_vec());

        // Only new maze or quit are accepted after a win
        let exit = game.player();
        game.apply(Command::Move(Direction::Up)).unwrap();
        game.apply(Command::ToggleSolution).unwrap();
        assert_eq!(game.player(), exit);
        assert!(!game.is_solution_shown());

        game.apply(Command::NewMaze).unwrap();
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.player(), Cell::new(1, 1));
    }

    #[test]
    fn toggle_solution_overlay() {
        let mut game = MazeGame::new(9, 9, Some(5)).unwrap();
        let hidden = game.frame();
        assert!(!hidden.iter().any(|line| line.contains(S_PATH)));

        game.apply(Command::ToggleSolution).unwrap();
        assert!(game.is_solution_shown());
        let shown = game.frame();
        let dots = shown.iter().map(|l| l.matches(S_PATH).count()).sum::<usize>();
        // Path cells minus the player and exit glyphs
        assert_eq!(dots, game.solution().path().unwrap().len() - 2);

        game.apply(Command::ToggleSolution).unwrap();
        assert_eq!(game.frame(), hidden);
    }

    #[test]
    fn frame_layout() {
        let game = MazeGame::new(7, 9, Some(1)).unwrap();
        let frame = game.frame();
        assert_eq!(frame.len(), 7 + 1 + INSTRUCTIONS.len());
        assert_eq!(frame[1].chars().nth(1), Some(S_PLAYER));
        assert_eq!(frame[5].chars().nth(7), Some(S_EXIT));
        assert_eq!(&frame[8..], INSTRUCTIONS.map(String::from));
    }

    #[test]
    fn new_maze_resets_session() {
        let mut game = MazeGame::new(15, 15, Some(2)).unwrap();
        let first = game.grid().clone();
        let next = game.solution().path().unwrap().cells()[1];
        game.step(direction(game.player(), next)).unwrap();
        game.apply(Command::ToggleSolution).unwrap();

        game.apply(Command::NewMaze).unwrap();
        assert_ne!(game.grid(), &first);
        assert_eq!(game.grid().rows(), 15);
        assert_eq!(game.player(), game.grid().entrance());
        assert!(!game.is_solution_shown());
        assert_eq!(
            game.solution().path().unwrap().goal(),
            Some(game.grid().exit())
        );
    }

    #[test]
    fn single_cell_maze_is_won_immediately() {
        let game = MazeGame::new(3, 3, Some(0)).unwrap();
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn quit() {
        let mut game = MazeGame::new(5, 5, Some(0)).unwrap();
        assert_eq!(game.apply(Command::Quit).unwrap(), Flow::Quit);
    }
}
