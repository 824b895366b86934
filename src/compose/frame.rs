use image::RgbaImage;

use crate::compose::disposal::DisposalMode;

/// One frame as stored in the file: a sub-rectangle of the logical screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RawFrame {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    /// Straight RGBA8, row-major, tightly packed (`width * height * 4` bytes).
    pub rgba: Vec<u8>,
    pub duration_ms: u32,
    pub disposal: DisposalMode,
}

impl RawFrame {
    /// A frame covering the whole canvas, starting at the origin.
    pub fn full(
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        duration_ms: u32,
        disposal: DisposalMode,
    ) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
            rgba,
            duration_ms,
            disposal,
        }
    }
}

/// A fully composited, canvas-sized picture and how long it stays on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedFrame {
    pub image: RgbaImage,
    pub duration_ms: u32,
}

/// Total play time of a sequence in milliseconds.
pub fn total_duration_ms(frames: &[TimedFrame]) -> u64 {
    frames.iter().map(|f| u64::from(f.duration_ms)).sum()
}
