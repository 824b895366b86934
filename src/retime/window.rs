use crate::{
    compose::frame::TimedFrame,
    foundation::{
        core::{MIN_FRAME_MS, TimeWindow},
        error::{SnakeGifError, SnakeGifResult},
    },
};

/// On-screen time of the interval `[frame_start, frame_end)` (ms) inside `window`, or
/// `None` when they do not intersect.
pub fn overlap_ms(frame_start: u64, frame_end: u64, window: TimeWindow) -> Option<u32> {
    let (fs, fe) = (frame_start as f64, frame_end as f64);
    let (ws, we) = (window.start_ms(), window.end_ms());
    if !(fe > ws && fs < we) {
        return None;
    }
    let shown = fe.min(we) - fs.max(ws);
    Some(shown.max(f64::from(MIN_FRAME_MS)).round_ties_even() as u32)
}

/// Keep the frames that are on screen during `window`, with durations cut to the part
/// that falls inside it.
pub fn select_window(frames: Vec<TimedFrame>, window: TimeWindow) -> SnakeGifResult<Vec<TimedFrame>> {
    let mut kept = Vec::new();
    let mut t = 0u64;
    for mut frame in frames {
        let start = t;
        let end = t + u64::from(frame.duration_ms);
        t = end;
        if let Some(duration_ms) = overlap_ms(start, end, window) {
            frame.duration_ms = duration_ms;
            kept.push(frame);
        }
    }

    if kept.is_empty() {
        return Err(SnakeGifError::EmptyWindow {
            start: window.start_secs,
            end: window.end_secs,
        });
    }
    tracing::debug!(
        kept = kept.len(),
        total_ms = t,
        start = window.start_secs,
        end = window.end_secs,
        "time window selected"
    );
    Ok(kept)
}

#[cfg(test)]
#[path = "../../tests/unit/retime/window.rs"]
mod tests;
