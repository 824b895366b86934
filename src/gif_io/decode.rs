use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    compose::{disposal::DisposalMode, frame::RawFrame},
    foundation::{
        core::Canvas,
        error::{SnakeGifError, SnakeGifResult},
    },
};

/// GIF delays are stored in hundredths of a second.
pub fn centis_to_ms(delay: u16) -> u32 {
    u32::from(delay) * 10
}

/// Streaming reader over the frames of an animated GIF.
pub struct GifFrames<R: Read> {
    decoder: gif::Decoder<R>,
    screen: Canvas,
    index: usize,
}

impl<R: Read> GifFrames<R> {
    pub fn new(reader: R) -> SnakeGifResult<Self> {
        let mut opts = gif::DecodeOptions::new();
        opts.set_color_output(gif::ColorOutput::RGBA);
        let decoder = opts
            .read_info(reader)
            .map_err(|e| SnakeGifError::decode(format!("read gif header: {e}")))?;
        let screen = Canvas::new(u32::from(decoder.width()), u32::from(decoder.height()))?;
        Ok(Self {
            decoder,
            screen,
            index: 0,
        })
    }

    /// Logical screen size.
    pub fn screen(&self) -> Canvas {
        self.screen
    }

    fn next_frame(&mut self) -> SnakeGifResult<Option<RawFrame>> {
        let Some(frame) = self
            .decoder
            .read_next_frame()
            .map_err(|e| SnakeGifError::decode(format!("read frame {}: {e}", self.index)))?
        else {
            return Ok(None);
        };

        let raw = RawFrame {
            left: u32::from(frame.left),
            top: u32::from(frame.top),
            width: u32::from(frame.width),
            height: u32::from(frame.height),
            rgba: frame.buffer.to_vec(),
            duration_ms: centis_to_ms(frame.delay),
            disposal: DisposalMode::from(frame.dispose),
        };
        tracing::trace!(
            index = self.index,
            left = raw.left,
            top = raw.top,
            width = raw.width,
            height = raw.height,
            duration_ms = raw.duration_ms,
            disposal = ?raw.disposal,
            "decoded frame"
        );
        self.index += 1;
        Ok(Some(raw))
    }
}

impl<R: Read> Iterator for GifFrames<R> {
    type Item = SnakeGifResult<RawFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}

/// Open `path` for frame-by-frame decoding.
pub fn open_gif(path: &Path) -> SnakeGifResult<GifFrames<BufReader<File>>> {
    if !path.exists() {
        return Err(SnakeGifError::NotFound(path.to_path_buf()));
    }
    let f = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    GifFrames::new(BufReader::new(f))
}

/// Decode every frame of the GIF at `path`.
pub fn read_gif(path: &Path) -> SnakeGifResult<(Canvas, Vec<RawFrame>)> {
    let frames = open_gif(path)?;
    let screen = frames.screen();
    let frames = frames.collect::<SnakeGifResult<Vec<_>>>()?;
    Ok((screen, frames))
}

#[cfg(test)]
#[path = "../../tests/unit/gif_io/decode.rs"]
mod tests;
