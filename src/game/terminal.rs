use std::io::{Stdout, Write, stdout};

use anyhow::Context as _;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    foundation::error::SnakeGifResult,
    game::{
        session::StateView,
        state::{Cell, GameState},
    },
};

/// Raw mode plus alternate screen for the lifetime of the guard.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> SnakeGifResult<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        let mut out = stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(anyhow::Error::new(e).context("enter alternate screen").into());
        }
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Character-cell preview of the board.
pub struct TerminalView {
    out: Stdout,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

/// One text row per grid row, framed by a border.
pub fn board_rows(state: &GameState) -> Vec<String> {
    let w = state.width() as usize;
    let h = state.height() as usize;
    let mut grid = vec![vec![' '; w]; h];

    let mut put = |c: Cell, ch: char| {
        if state.in_bounds(c) {
            grid[c.y as usize][c.x as usize] = ch;
        }
    };
    if let Some(f) = state.fruit() {
        put(f, '*');
    }
    for seg in state.snake() {
        put(seg, 'o');
    }
    put(state.head(), '@');

    let border = format!("+{}+", "-".repeat(w));
    let mut rows = Vec::with_capacity(h + 2);
    rows.push(border.clone());
    for row in grid {
        rows.push(format!("|{}|", row.into_iter().collect::<String>()));
    }
    rows.push(border);
    rows
}

impl StateView for TerminalView {
    fn show(&mut self, state: &GameState, ticks: u64) -> SnakeGifResult<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            Clear(ClearType::All),
            SetForegroundColor(Color::Green)
        )
        .context("draw board")?;
        for (i, row) in board_rows(state).iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, i as u16), Print(row)).context("draw board")?;
        }
        let status_row = state.height() as u16 + 2;
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, status_row),
            Print(format!(
                "tick {ticks}  arrows/WASD steer, q or Esc quits"
            ))
        )
        .context("draw status line")?;
        self.out.flush().context("flush terminal")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/terminal.rs"]
mod tests;
