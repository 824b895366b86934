use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    compose::frame::TimedFrame,
    foundation::{
        core::MIN_FRAME_MS,
        error::{SnakeGifError, SnakeGifResult},
    },
};

/// Playback speed multiplier; `2.0` plays twice as fast.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpeedRatio(f64);

impl SpeedRatio {
    pub fn new(ratio: f64) -> SnakeGifResult<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(SnakeGifError::validation(format!(
                "invalid ratio: {ratio}. Must be > 0."
            )));
        }
        Ok(Self(ratio))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn scale_ms(self, duration_ms: u32) -> u32 {
        let scaled = (f64::from(duration_ms) / self.0).floor();
        (scaled.min(f64::from(u32::MAX)) as u32).max(MIN_FRAME_MS)
    }

    /// File name suffix: `_2` for integral ratios, `_1.5` / `_0.25` otherwise.
    pub fn suffix(self) -> String {
        if self.0.fract() == 0.0 {
            return format!("_{}", self.0 as i64);
        }
        let s = format!("_{:.2}", self.0);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

impl fmt::Display for SpeedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

impl FromStr for SpeedRatio {
    type Err = SnakeGifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ratio: f64 = s.trim().parse().map_err(|_| {
            SnakeGifError::validation(format!("invalid ratio: {s}. Must be > 0."))
        })?;
        Self::new(ratio)
    }
}

/// Scale every duration by `1 / ratio`, never going below 10 ms.
pub fn rescale(mut frames: Vec<TimedFrame>, ratio: SpeedRatio) -> Vec<TimedFrame> {
    for frame in &mut frames {
        frame.duration_ms = ratio.scale_ms(frame.duration_ms);
    }
    frames
}

/// `dir/snake_cut.gif` at 2x becomes `dir/snake_cut_2.gif`.
pub fn speed_output_path(input: &Path, ratio: SpeedRatio) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}{}", ratio.suffix());
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/retime/speed.rs"]
mod tests;
