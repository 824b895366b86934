use std::{
    ffi::OsString,
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::{
    foundation::{
        core::TimeWindow,
        error::{SnakeGifError, SnakeGifResult},
    },
    gif_io::encode::ensure_parent_dir,
};

/// Palette pipeline used when re-encoding to GIF.
const GIF_PALETTE_FILTER: &str = "split[a][b];[a]palettegen[p];[b][p]paletteuse";

#[derive(Clone, Debug)]
pub struct TrimConfig {
    pub in_path: PathBuf,
    pub out_path: PathBuf,
    pub window: TimeWindow,
    pub overwrite: bool,
}

impl TrimConfig {
    pub fn validate(&self) -> SnakeGifResult<()> {
        if !self.in_path.exists() {
            return Err(SnakeGifError::NotFound(self.in_path.clone()));
        }
        if self.in_path == self.out_path {
            return Err(SnakeGifError::validation(
                "trim output must not overwrite its input",
            ));
        }
        if !self.overwrite && self.out_path.exists() {
            return Err(SnakeGifError::validation(format!(
                "output file '{}' already exists",
                self.out_path.display()
            )));
        }
        Ok(())
    }

    /// Arguments passed to `ffmpeg`, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            if self.overwrite { "-y" } else { "-n" }.into(),
            "-loglevel".into(),
            "error".into(),
            "-i".into(),
            self.in_path.clone().into_os_string(),
            "-ss".into(),
            format!("{:.3}", self.window.start_secs).into(),
            "-to".into(),
            format!("{:.3}", self.window.end_secs).into(),
            "-filter_complex".into(),
            GIF_PALETTE_FILTER.into(),
            "-loop".into(),
            "0".into(),
        ];
        args.push(self.out_path.clone().into_os_string());
        args
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Cut `cfg.window` out of `cfg.in_path` with the system `ffmpeg` binary.
#[tracing::instrument(skip(cfg), fields(in_path = %cfg.in_path.display(), out_path = %cfg.out_path.display()))]
pub fn trim_with_ffmpeg(cfg: &TrimConfig) -> SnakeGifResult<()> {
    cfg.validate()?;
    ensure_parent_dir(&cfg.out_path)?;

    if !is_ffmpeg_on_path() {
        return Err(SnakeGifError::external(
            "ffmpeg is required for external trimming, but was not found on PATH",
        ));
    }

    let output = Command::new("ffmpeg")
        .args(cfg.args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            SnakeGifError::external(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SnakeGifError::external(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    tracing::info!("ffmpeg trim finished");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
