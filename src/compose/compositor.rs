use image::RgbaImage;

use crate::{
    compose::{
        disposal::DisposalMode,
        frame::{RawFrame, TimedFrame},
    },
    foundation::{
        core::Canvas,
        error::{SnakeGifError, SnakeGifResult},
    },
};

pub type Rgba8 = [u8; 4];

/// Straight-alpha source-over.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = u32::from(dst[3]);
    let inv = 255 - sa;
    // Output alpha scaled by 255.
    let out_a = sa * 255 + da * inv;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * da * inv;
        out[i] = ((num + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = ((out_a + 127) / 255) as u8;
    out
}

/// Rebuilds the picture a viewer shows for each frame of a sequence.
///
/// The canvas is prepared according to the disposal mode of the *previous* frame; the
/// first frame always starts from a transparent canvas.
#[derive(Debug)]
pub struct Compositor {
    canvas: RgbaImage,
    previous: Option<DisposalMode>,
}

impl Compositor {
    pub fn new(screen: Canvas) -> Self {
        Self {
            canvas: RgbaImage::new(screen.width, screen.height),
            previous: None,
        }
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Composite `frame` and return the resulting canvas.
    pub fn apply(&mut self, frame: &RawFrame) -> SnakeGifResult<&RgbaImage> {
        let expected = (frame.width as usize) * (frame.height as usize) * 4;
        if frame.rgba.len() != expected {
            return Err(SnakeGifError::decode(format!(
                "frame pixel buffer is {} bytes, expected {expected} for {}x{}",
                frame.rgba.len(),
                frame.width,
                frame.height
            )));
        }

        let mode = self.previous.unwrap_or(DisposalMode::Reset);
        if mode.clears_canvas() {
            self.clear();
        }
        self.paint(frame);
        self.previous = Some(frame.disposal);

        Ok(&self.canvas)
    }

    fn clear(&mut self) {
        self.canvas.fill(0);
    }

    fn paint(&mut self, frame: &RawFrame) {
        let (cw, ch) = self.canvas.dimensions();
        if frame.left >= cw || frame.top >= ch {
            return;
        }
        let cols = frame.width.min(cw - frame.left) as usize;
        let rows = frame.height.min(ch - frame.top);
        let src_stride = frame.width as usize * 4;
        let dst_stride = cw as usize * 4;

        let dst: &mut [u8] = &mut self.canvas;
        for row in 0..rows {
            let src_off = row as usize * src_stride;
            let dst_off = (frame.top + row) as usize * dst_stride + frame.left as usize * 4;
            let src_row = &frame.rgba[src_off..src_off + cols * 4];
            let dst_row = &mut dst[dst_off..dst_off + cols * 4];
            for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }
    }
}

/// Composite a whole sequence, keeping each frame's own duration. Stops at the first
/// error yielded by `frames`.
pub fn composite_all<I>(screen: Canvas, frames: I) -> SnakeGifResult<Vec<TimedFrame>>
where
    I: IntoIterator<Item = SnakeGifResult<RawFrame>>,
{
    let mut compositor = Compositor::new(screen);
    let mut out = Vec::new();
    for frame in frames {
        let frame = frame?;
        let image = compositor.apply(&frame)?.clone();
        out.push(TimedFrame {
            image,
            duration_ms: frame.duration_ms,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
