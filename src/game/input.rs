use std::{collections::VecDeque, time::Duration};

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{foundation::error::SnakeGifResult, game::state::Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
}

/// Source of player input, drained once per tick.
pub trait InputSource {
    /// Events that arrived since the previous call, oldest first. Never blocks.
    fn poll(&mut self) -> SnakeGifResult<Vec<InputEvent>>;
}

/// Plays back a fixed list of per-tick events; ticks past the end see no input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<InputEvent>>,
    cycle: bool,
    played: Vec<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(ticks: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
            cycle: false,
            played: Vec::new(),
        }
    }

    /// Repeat the script forever.
    pub fn cycled(mut self) -> Self {
        self.cycle = true;
        self
    }

    /// One optional turn per tick.
    pub fn turns(turns: impl IntoIterator<Item = Option<Direction>>) -> Self {
        Self::new(
            turns
                .into_iter()
                .map(|t| t.map(InputEvent::Turn).into_iter().collect()),
        )
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> SnakeGifResult<Vec<InputEvent>> {
        if self.ticks.is_empty() && self.cycle {
            self.ticks.extend(self.played.drain(..));
        }
        let events = self.ticks.pop_front().unwrap_or_default();
        if self.cycle {
            self.played.push(events.clone());
        }
        Ok(events)
    }
}

/// Arrow keys and WASD steer; `q`, Esc and Ctrl-C quit.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    let dir = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(InputEvent::Quit),
        _ => return None,
    };
    Some(InputEvent::Turn(dir))
}

/// Keyboard input read from the controlling terminal. Expects raw mode to be enabled
/// (see [`crate::game::terminal::TerminalGuard`]).
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> SnakeGifResult<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).context("poll terminal events")? {
            if let Event::Key(key) = event::read().context("read terminal event")? {
                events.extend(map_key(&key));
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/input.rs"]
mod tests;
