use std::collections::VecDeque;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    foundation::error::SnakeGifResult,
    game::config::GameConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in grid coordinates (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Crashed(Collision),
}

/// What one recorded tick looks like; enough to render the frame later.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Tail first, head last.
    pub snake: Vec<Cell>,
    pub direction: Direction,
    pub fruit: Option<Cell>,
    pub elapsed_secs: f64,
}

/// Board state: the chain (tail first, head last), heading, and target cell.
#[derive(Clone, Debug)]
pub struct GameState {
    width: i32,
    height: i32,
    snake: VecDeque<Cell>,
    target_len: usize,
    growth: usize,
    direction: Direction,
    pending: Direction,
    fruit: Option<Cell>,
    rng: StdRng,
}

impl GameState {
    pub fn new(cfg: &GameConfig, seed: u64) -> SnakeGifResult<Self> {
        cfg.validate()?;
        let width = cfg.map_width as i32;
        let height = cfg.map_height as i32;
        let len = cfg.snake_length as i32;

        let row = height / 2;
        let start_x = (width / 2 - len / 2).min(width - len).max(0);
        let snake = (0..len).map(|i| Cell::new(start_x + i, row)).collect();

        let mut state = Self {
            width,
            height,
            snake,
            target_len: cfg.snake_length,
            growth: cfg.growth_per_fruit,
            direction: Direction::Right,
            pending: Direction::Right,
            fruit: None,
            rng: StdRng::seed_from_u64(seed),
        };
        state.fruit = state.spawn_fruit();
        Ok(state)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Segments from tail to head.
    pub fn snake(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.snake.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn head(&self) -> Cell {
        // The chain is never empty after construction.
        self.snake.back().copied().unwrap_or(Cell::new(0, 0))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Option<Cell> {
        self.fruit
    }

    pub fn snapshot(&self, elapsed_secs: f64) -> Snapshot {
        Snapshot {
            snake: self.snake.iter().copied().collect(),
            direction: self.direction,
            fruit: self.fruit,
            elapsed_secs,
        }
    }

    pub fn in_bounds(&self, c: Cell) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    pub fn can_turn(&self, dir: Direction) -> bool {
        self.snake.len() < 2 || dir != self.direction.opposite()
    }

    /// Queue a heading change for the next step. Reversals are ignored.
    pub fn request_turn(&mut self, dir: Direction) -> bool {
        if self.can_turn(dir) {
            self.pending = dir;
            true
        } else {
            false
        }
    }

    /// Advance the head one cell. On a crash the chain is left untouched.
    pub fn advance(&mut self) -> StepOutcome {
        self.direction = self.pending;
        let next = self.head().step(self.direction);

        if !self.in_bounds(next) {
            return StepOutcome::Crashed(Collision::Wall);
        }
        if self.snake.contains(&next) {
            return StepOutcome::Crashed(Collision::SelfBite);
        }

        self.snake.push_back(next);
        let ate = self.fruit == Some(next);
        if ate {
            self.target_len += self.growth;
            self.fruit = self.spawn_fruit();
        }
        while self.snake.len() > self.target_len {
            self.snake.pop_front();
        }

        if ate {
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    fn spawn_fruit(&mut self) -> Option<Cell> {
        let free: Vec<Cell> = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Cell::new(x, y)))
            .filter(|c| !self.snake.contains(c))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/state.rs"]
mod tests;
