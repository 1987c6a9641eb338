//! Interactive play in a raw-mode terminal

use std::io::{self, Stdout, Write};

use anyhow::Context;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use log::debug;

use crate::game::{Command, Direction, Flow, MazeGame};

/// Raw mode and alternate screen, undone on drop
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Nothing sensible to do with errors while restoring
        let _ = self.stdout.execute(Show);
        let _ = self.stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Translate a key press into a game command
///
/// Arrow keys and `h j k l` move; `s`, `n` and `q` (either case) toggle the
/// solution, start a new maze and quit. Releases are ignored.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Char('s' | 'S') => Command::ToggleSolution,
        KeyCode::Char('n' | 'N') => Command::NewMaze,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Play `game` until the player quits
pub fn play(game: &mut MazeGame) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::enter().context("Could not set up the terminal")?;
    let stdout = &mut guard.stdout;

    draw(stdout, &game.frame())?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = command_for(key) else {
            continue;
        };
        debug!("{:?}", command);
        if game.apply(command)? == Flow::Quit {
            return Ok(());
        }
        draw(stdout, &game.frame())?;
    }
}

fn draw(stdout: &mut Stdout, lines: &[String]) -> io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    for (y, line) in lines.iter().enumerate() {
        stdout.queue(MoveTo(0, y as u16))?;
        stdout.queue(Print(line))?;
    }
    stdout.flush()
}
