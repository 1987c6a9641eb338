//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use maze_runner::{generate_maze, render, solve_shortest_path, Overlay};

/// Print a randomly generated perfect maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height, odd and at least 3
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Generated maze width, odd and at least 3
    #[arg(long, default_value_t = 21)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Mark the shortest path from entrance to exit
    #[arg(short, long)]
    solve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let grid = generate_maze(args.rows, args.cols, args.seed).context("Could not generate maze")?;
    let solution = if args.solve {
        Some(solve_shortest_path(&grid, grid.entrance(), grid.exit())?)
    } else {
        None
    };
    let overlay = Overlay {
        path: solution.as_ref().and_then(|s| s.path()),
        ..Overlay::default()
    };
    println!("{}", render(&grid, &overlay).iter().join("\n"));
    Ok(())
}
