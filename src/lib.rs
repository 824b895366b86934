//! snakegif plays a terminal Snake game, records it as an animated GIF, and post-processes
//! the recording.
//!
//! # Pipeline overview
//!
//! 1. **Play**: `GameConfig + InputSource + Clock -> Recording` (one `Snapshot` per tick)
//! 2. **Record**: `Recording -> GIF` (rasterised with kurbo shapes, uniform frame delay)
//! 3. **Composite**: `GIF -> Vec<TimedFrame>` (sub-rectangles resolved against the previous
//!    frame's disposal)
//! 4. **Retime**: cut to a time window or rescale every duration by a speed ratio
//! 5. **Trim** (optional): hand the cut to the system `ffmpeg` binary instead
//!
//! Frame durations are whole milliseconds in memory and never drop below [`MIN_FRAME_MS`].
#![forbid(unsafe_code)]

mod compose;
mod encode;
mod foundation;
mod game;
mod gif_io;
mod pipeline;
mod retime;

pub use compose::compositor::{Compositor, Rgba8, composite_all, over};
pub use compose::disposal::DisposalMode;
pub use compose::frame::{RawFrame, TimedFrame, total_duration_ms};
pub use foundation::core::{Canvas, Fps, FrameIndex, MIN_FRAME_MS, TimeWindow};
pub use foundation::error::{SnakeGifError, SnakeGifResult};
pub use game::clock::{Clock, RealClock, SimulatedClock};
pub use game::config::{GameConfig, Palette, Rgb8};
pub use game::input::{InputEvent, InputSource, ScriptedInput, TerminalInput, map_key};
pub use game::render::{SceneRenderer, fill_shape, fruit_color, lerp_rgb};
pub use game::session::{Ending, GameSession, Recording, StateView, save_recording};
pub use game::state::{Cell, Collision, Direction, GameState, Snapshot, StepOutcome};
pub use game::terminal::{TerminalGuard, TerminalView, board_rows};
pub use gif_io::decode::{GifFrames, centis_to_ms, open_gif, read_gif};
pub use gif_io::encode::{
    GifEncodeConfig, GifSink, default_gif_config, ensure_parent_dir, ms_to_centis, write_gif,
};
pub use pipeline::{
    RetimeReport, composite_file, cut_gif, extract_frame, save_png, speed_gif, speed_gif_to,
};
pub use retime::speed::{SpeedRatio, rescale, speed_output_path};
pub use retime::window::{overlap_ms, select_window};

pub use encode::ffmpeg::{TrimConfig, is_ffmpeg_on_path, trim_with_ffmpeg};
