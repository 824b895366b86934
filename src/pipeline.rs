use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    compose::{
        compositor::{Compositor, composite_all},
        frame::{TimedFrame, total_duration_ms},
    },
    foundation::{
        core::{Canvas, FrameIndex, TimeWindow},
        error::{SnakeGifError, SnakeGifResult},
    },
    gif_io::{
        decode::open_gif,
        encode::{default_gif_config, ensure_parent_dir, write_gif},
    },
    retime::{
        speed::{SpeedRatio, rescale, speed_output_path},
        window::select_window,
    },
};

/// Summary of a re-rendered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetimeReport {
    pub frames_in: usize,
    pub frames_out: usize,
    pub duration_in_ms: u64,
    pub duration_out_ms: u64,
}

/// Decode `path` and rebuild the full picture of every frame.
#[tracing::instrument(fields(path = %path.display()))]
pub fn composite_file(path: &Path) -> SnakeGifResult<(Canvas, Vec<TimedFrame>)> {
    let frames = open_gif(path)?;
    let screen = frames.screen();
    let out = composite_all(screen, frames)?;
    if out.is_empty() {
        return Err(SnakeGifError::decode(format!(
            "'{}' contains no frames",
            path.display()
        )));
    }
    tracing::info!(
        frames = out.len(),
        width = screen.width,
        height = screen.height,
        "read frames"
    );
    Ok((screen, out))
}

impl RetimeReport {
    fn new(frames_in: &[TimedFrame], frames_out: &[TimedFrame]) -> Self {
        Self {
            frames_in: frames_in.len(),
            frames_out: frames_out.len(),
            duration_in_ms: total_duration_ms(frames_in),
            duration_out_ms: total_duration_ms(frames_out),
        }
    }
}

/// Keep only the part of `src` shown during `window` and write it to `dst`.
#[tracing::instrument(fields(src = %src.display(), dst = %dst.display()))]
pub fn cut_gif(src: &Path, dst: &Path, window: TimeWindow) -> SnakeGifResult<RetimeReport> {
    let (screen, frames) = composite_file(src)?;
    let (frames_in, duration_in_ms) = (frames.len(), total_duration_ms(&frames));
    let kept = select_window(frames, window)?;
    let report = RetimeReport {
        frames_in,
        duration_in_ms,
        ..RetimeReport::new(&[], &kept)
    };
    write_gif(default_gif_config(dst, screen), &kept)?;
    tracing::info!(kept = report.frames_out, "cut written");
    Ok(report)
}

/// Rescale every frame duration of `src` by `1 / ratio` and write it to `dst`.
#[tracing::instrument(fields(src = %src.display(), dst = %dst.display(), ratio = ratio.get()))]
pub fn speed_gif_to(src: &Path, dst: &Path, ratio: SpeedRatio) -> SnakeGifResult<RetimeReport> {
    let (screen, frames) = composite_file(src)?;
    let (frames_in, duration_in_ms) = (frames.len(), total_duration_ms(&frames));
    let scaled = rescale(frames, ratio);
    let report = RetimeReport {
        frames_in,
        duration_in_ms,
        ..RetimeReport::new(&[], &scaled)
    };
    write_gif(default_gif_config(dst, screen), &scaled)?;
    tracing::info!(
        duration_in_ms = report.duration_in_ms,
        duration_out_ms = report.duration_out_ms,
        "retimed gif written"
    );
    Ok(report)
}

/// Like [`speed_gif_to`], writing next to `src` with a ratio suffix. Returns the output path.
pub fn speed_gif(src: &Path, ratio: SpeedRatio) -> SnakeGifResult<(PathBuf, RetimeReport)> {
    let dst = speed_output_path(src, ratio);
    let report = speed_gif_to(src, &dst, ratio)?;
    Ok((dst, report))
}

/// The composited picture shown while frame `index` is on screen.
#[tracing::instrument(fields(src = %src.display(), index = index.0))]
pub fn extract_frame(src: &Path, index: FrameIndex) -> SnakeGifResult<RgbaImage> {
    let frames = open_gif(src)?;
    let mut compositor = Compositor::new(frames.screen());
    let mut seen = 0u64;
    for raw in frames {
        compositor.apply(&raw?)?;
        if seen == index.0 {
            return Ok(compositor.canvas().clone());
        }
        seen += 1;
    }
    Err(SnakeGifError::validation(format!(
        "frame {} out of range: '{}' has {seen} frames",
        index.0,
        src.display()
    )))
}

pub fn save_png(image: &RgbaImage, out: &Path) -> SnakeGifResult<()> {
    ensure_parent_dir(out)?;
    image
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
