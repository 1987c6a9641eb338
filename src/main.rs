//! Interactive maze game

use anyhow::Context;
use clap::Parser;
use maze_runner::game::MazeGame;
use maze_runner::terminal;

/// Find your way from the top-left corner to the exit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in cells, odd and at least 3
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Maze width in cells, odd and at least 3
    #[arg(long, default_value_t = 21)]
    cols: usize,

    /// Random seed, for a reproducible sequence of mazes
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game =
        MazeGame::new(args.rows, args.cols, args.seed).context("Could not create the maze")?;
    terminal::play(&mut game)
}
