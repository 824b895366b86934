use std::path::Path;

use crate::{
    foundation::error::SnakeGifResult,
    game::{
        clock::Clock,
        config::GameConfig,
        input::{InputEvent, InputSource},
        render::SceneRenderer,
        state::{Collision, GameState, Snapshot, StepOutcome},
    },
    gif_io::encode::{GifSink, default_gif_config},
};

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    Collision(Collision),
    Timeout,
    /// The player asked to stop. The loop ends at once; the tick the request arrived on
    /// is neither moved nor recorded.
    Quit,
}

/// Live view of the board, refreshed once per rendered tick.
pub trait StateView {
    fn show(&mut self, state: &GameState, ticks: u64) -> SnakeGifResult<()>;
}

/// Everything a finished game produced. One snapshot per rendered tick.
#[derive(Clone, Debug)]
pub struct Recording {
    pub snapshots: Vec<Snapshot>,
    pub ending: Ending,
    pub fruits: u32,
}

impl Recording {
    pub fn ticks(&self) -> u64 {
        self.snapshots.len() as u64
    }
}

pub struct GameSession {
    cfg: GameConfig,
    state: GameState,
}

impl GameSession {
    pub fn new(cfg: GameConfig, seed: u64) -> SnakeGifResult<Self> {
        let state = GameState::new(&cfg, seed)?;
        Ok(Self { cfg, state })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the fixed-tick loop until a collision, the time limit, or a quit request.
    #[tracing::instrument(skip_all, fields(seed = ?self.cfg.seed))]
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        clock: &mut dyn Clock,
        mut view: Option<&mut dyn StateView>,
    ) -> SnakeGifResult<Recording> {
        let limit = self.cfg.duration()?;
        let mut snapshots = vec![self.state.snapshot(0.0)];
        let mut fruits = 0u32;
        if let Some(v) = view.as_deref_mut() {
            v.show(&self.state, 1)?;
        }

        let ending = loop {
            let elapsed = clock.elapsed();
            if elapsed >= limit {
                break Ending::Timeout;
            }

            let mut quit = false;
            for event in input.poll()? {
                match event {
                    InputEvent::Quit => quit = true,
                    InputEvent::Turn(dir) => {
                        self.state.request_turn(dir);
                    }
                }
            }
            if quit {
                break Ending::Quit;
            }

            match self.state.advance() {
                StepOutcome::Crashed(c) => break Ending::Collision(c),
                StepOutcome::Ate => {
                    fruits += 1;
                    tracing::debug!(fruits, tick = snapshots.len(), "fruit eaten");
                }
                StepOutcome::Moved => {}
            }

            snapshots.push(self.state.snapshot(elapsed.as_secs_f64()));
            if let Some(v) = view.as_deref_mut() {
                v.show(&self.state, snapshots.len() as u64)?;
            }
            clock.wait_tick();
        };

        tracing::info!(ticks = snapshots.len(), ?ending, fruits, "game over");
        Ok(Recording {
            snapshots,
            ending,
            fruits,
        })
    }
}

/// Render every snapshot and write them as a looping GIF with a uniform frame delay.
#[tracing::instrument(skip(cfg, recording), fields(frames = recording.snapshots.len()))]
pub fn save_recording(cfg: &GameConfig, recording: &Recording, out: &Path) -> SnakeGifResult<()> {
    let renderer = SceneRenderer::new(cfg)?;
    let delay_ms = cfg.fps()?.frame_delay_ms();
    let mut sink = GifSink::create(default_gif_config(out, renderer.canvas()))?;
    for snap in &recording.snapshots {
        sink.push(&renderer.render(snap), delay_ms)?;
    }
    sink.finish()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/game/session.rs"]
mod tests;
