use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    compose::{disposal::DisposalMode, frame::TimedFrame},
    foundation::{
        core::Canvas,
        error::{SnakeGifError, SnakeGifResult},
    },
};

/// Milliseconds to GIF hundredths of a second, truncating.
pub fn ms_to_centis(ms: u32) -> u16 {
    (ms / 10).min(u32::from(u16::MAX)) as u16
}

#[derive(Clone, Debug)]
pub struct GifEncodeConfig {
    pub canvas: Canvas,
    pub out_path: PathBuf,
    /// Disposal written on every frame.
    pub disposal: DisposalMode,
    /// NeuQuant speed, 1 (best) ..= 30 (fastest).
    pub quantize_speed: i32,
    pub overwrite: bool,
}

impl GifEncodeConfig {
    pub fn validate(&self) -> SnakeGifResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !(1..=30).contains(&self.quantize_speed) {
            return Err(SnakeGifError::validation(
                "gif quantize speed must be in 1..=30",
            ));
        }
        Ok(())
    }
}

/// Looping GIF output that clears to transparent after each frame.
pub fn default_gif_config(out_path: impl Into<PathBuf>, canvas: Canvas) -> GifEncodeConfig {
    GifEncodeConfig {
        canvas,
        out_path: out_path.into(),
        disposal: DisposalMode::Reset,
        quantize_speed: 10,
        overwrite: true,
    }
}

pub fn ensure_parent_dir(path: &Path) -> SnakeGifResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Incremental GIF writer: push canvas-sized frames, then [`GifSink::finish`].
pub struct GifSink<W: Write> {
    cfg: GifEncodeConfig,
    encoder: gif::Encoder<W>,
    frames: usize,
}

impl GifSink<BufWriter<File>> {
    pub fn create(cfg: GifEncodeConfig) -> SnakeGifResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(SnakeGifError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        let f = File::create(&cfg.out_path)
            .with_context(|| format!("create gif '{}'", cfg.out_path.display()))?;
        Self::new(BufWriter::new(f), cfg)
    }
}

impl<W: Write> GifSink<W> {
    pub fn new(writer: W, cfg: GifEncodeConfig) -> SnakeGifResult<Self> {
        cfg.validate()?;
        let mut encoder = gif::Encoder::new(
            writer,
            cfg.canvas.width as u16,
            cfg.canvas.height as u16,
            &[],
        )
        .map_err(|e| SnakeGifError::encode(format!("write gif header: {e}")))?;
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(|e| SnakeGifError::encode(format!("write loop extension: {e}")))?;

        Ok(Self {
            cfg,
            encoder,
            frames: 0,
        })
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }

    pub fn push(&mut self, image: &RgbaImage, duration_ms: u32) -> SnakeGifResult<()> {
        let (w, h) = image.dimensions();
        if w != self.cfg.canvas.width || h != self.cfg.canvas.height {
            return Err(SnakeGifError::validation(format!(
                "frame size mismatch: got {w}x{h}, expected {}x{}",
                self.cfg.canvas.width, self.cfg.canvas.height
            )));
        }

        let mut pixels = image.as_raw().clone();
        let mut frame = gif::Frame::from_rgba_speed(
            w as u16,
            h as u16,
            &mut pixels,
            self.cfg.quantize_speed,
        );
        frame.delay = ms_to_centis(duration_ms);
        frame.dispose = self.cfg.disposal.to_gif();

        self.encoder
            .write_frame(&frame)
            .map_err(|e| SnakeGifError::encode(format!("write frame {}: {e}", self.frames)))?;
        self.frames += 1;
        Ok(())
    }

    pub fn push_timed(&mut self, frame: &TimedFrame) -> SnakeGifResult<()> {
        self.push(&frame.image, frame.duration_ms)
    }

    /// Write the trailer and flush. Returns the underlying writer.
    pub fn finish(self) -> SnakeGifResult<W> {
        if self.frames == 0 {
            return Err(SnakeGifError::encode("refusing to write a gif with no frames"));
        }
        let mut writer = self
            .encoder
            .into_inner()
            .context("write gif trailer")?;
        writer.flush().context("flush gif output")?;
        tracing::debug!(
            frames = self.frames,
            path = %self.cfg.out_path.display(),
            "gif finished"
        );
        Ok(writer)
    }
}

/// Write `frames` to `cfg.out_path` in one pass.
pub fn write_gif(cfg: GifEncodeConfig, frames: &[TimedFrame]) -> SnakeGifResult<()> {
    if frames.is_empty() {
        return Err(SnakeGifError::encode("refusing to write a gif with no frames"));
    }
    let mut sink = GifSink::create(cfg)?;
    for frame in frames {
        sink.push_timed(frame)?;
    }
    sink.finish()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/gif_io/encode.rs"]
mod tests;
