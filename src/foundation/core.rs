use std::time::Duration;

use crate::foundation::error::{SnakeGifError, SnakeGifResult};

/// Shortest frame duration written to an output GIF, in milliseconds.
pub const MIN_FRAME_MS: u32 = 10;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Logical screen size shared by every frame of one sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> SnakeGifResult<Self> {
        if width == 0 || height == 0 {
            return Err(SnakeGifError::validation("canvas width/height must be non-zero"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(SnakeGifError::validation(format!(
                "canvas {width}x{height} exceeds the GIF limit of {max}x{max}",
                max = u16::MAX
            )));
        }
        Ok(Self { width, height })
    }
}

/// Whole ticks per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(u32);

impl Fps {
    pub fn new(per_sec: u32) -> SnakeGifResult<Self> {
        if per_sec == 0 {
            return Err(SnakeGifError::validation("fps must be > 0"));
        }
        Ok(Self(per_sec))
    }

    /// Wall-clock period of one tick.
    pub fn tick_period(self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.0))
    }

    /// Per-frame display time of a recording, truncated to whole milliseconds.
    pub fn frame_delay_ms(self) -> u32 {
        1000 / self.0
    }
}

/// Half-open playback interval `[start, end)` in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    pub start_secs: f64,
    pub end_secs: f64,
}

impl TimeWindow {
    pub fn new(start_secs: f64, end_secs: f64) -> SnakeGifResult<Self> {
        if !start_secs.is_finite() || !end_secs.is_finite() {
            return Err(SnakeGifError::validation(
                "time window bounds must be finite numbers",
            ));
        }
        if start_secs < 0.0 {
            return Err(SnakeGifError::validation(
                "time window start must be >= 0",
            ));
        }
        if end_secs <= start_secs {
            return Err(SnakeGifError::validation(format!(
                "time window end ({end_secs}s) must be after start ({start_secs}s)"
            )));
        }
        Ok(Self {
            start_secs,
            end_secs,
        })
    }

    pub fn start_ms(self) -> f64 {
        self.start_secs * 1000.0
    }

    pub fn end_ms(self) -> f64 {
        self.end_secs * 1000.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
