use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use crate::foundation::{
    core::{Canvas, Fps},
    error::{SnakeGifError, SnakeGifResult},
};

pub type Rgb8 = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub tail: Rgb8,
    pub head: Rgb8,
    pub fruit: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tail: [70, 140, 240],
            head: [10, 40, 140],
            fruit: [230, 60, 60],
        }
    }
}

/// Game and recording settings. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Grid width in cells.
    pub map_width: u32,
    /// Grid height in cells.
    pub map_height: u32,
    /// Edge of one cell in pixels.
    pub cell_size: u32,
    pub duration_secs: f64,
    pub fps: u32,
    pub gif_path: PathBuf,
    pub snake_length: usize,
    /// Extra cells gained per fruit; 0 keeps the chain at a fixed length.
    pub growth_per_fruit: usize,
    /// Fruit placement seed. Random when absent.
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 75,
            map_height: 15,
            cell_size: 24,
            duration_secs: 20.0,
            fps: 10,
            gif_path: PathBuf::from("snake.gif"),
            snake_length: 8,
            growth_per_fruit: 0,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn from_reader<R: Read>(r: R) -> SnakeGifResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SnakeGifError::validation(format!("parse game config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SnakeGifResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SnakeGifError::NotFound(path.to_path_buf()));
        }
        let f = File::open(path).map_err(|e| {
            SnakeGifError::validation(format!("open game config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> SnakeGifResult<()> {
        if self.map_width == 0 || self.map_height == 0 {
            return Err(SnakeGifError::validation("map width/height must be non-zero"));
        }
        if self.cell_size == 0 {
            return Err(SnakeGifError::validation("cell size must be non-zero"));
        }
        self.canvas()?;
        self.fps()?;
        self.duration()?;
        if self.snake_length == 0 {
            return Err(SnakeGifError::validation("snake length must be >= 1"));
        }
        if self.snake_length > self.map_width as usize {
            return Err(SnakeGifError::validation(format!(
                "snake length {} does not fit a map {} cells wide",
                self.snake_length, self.map_width
            )));
        }
        Ok(())
    }

    /// Output image size.
    pub fn canvas(&self) -> SnakeGifResult<Canvas> {
        let w = self.map_width.checked_mul(self.cell_size);
        let h = self.map_height.checked_mul(self.cell_size);
        match (w, h) {
            (Some(w), Some(h)) => Canvas::new(w, h),
            _ => Err(SnakeGifError::validation("map pixel size overflows")),
        }
    }

    pub fn fps(&self) -> SnakeGifResult<Fps> {
        Fps::new(self.fps)
    }

    /// Game time limit. Rejects non-positive values and values `Duration` cannot hold.
    pub fn duration(&self) -> SnakeGifResult<Duration> {
        if self.duration_secs.is_nan() || self.duration_secs <= 0.0 {
            return Err(SnakeGifError::validation(
                "game duration must be a positive number of seconds",
            ));
        }
        Duration::try_from_secs_f64(self.duration_secs).map_err(|e| {
            SnakeGifError::validation(format!(
                "game duration {}s is out of range: {e}",
                self.duration_secs
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/config.rs"]
mod tests;
