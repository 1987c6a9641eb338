//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use maze_runner::{parse_text, render, solve_shortest_path, Overlay, Solution};

/// The shortest way from the top-left room to the bottom-right one
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the maze with the shortest path marked
    #[arg(short, long)]
    show: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let grid = parse_text(&text).context("Could not parse maze")?;
    let solution = solve_shortest_path(&grid, grid.entrance(), grid.exit())?;

    if args.show {
        let overlay = Overlay {
            path: solution.path(),
            ..Overlay::default()
        };
        println!("{}", render(&grid, &overlay).iter().join("\n"));
    }
    match solution {
        Solution::Found(path) => println!("The shortest path is {} steps.", path.steps()),
        Solution::Unreachable => println!("The maze has no path from entrance to exit."),
    }
    Ok(())
}
