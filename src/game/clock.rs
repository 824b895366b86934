use std::time::{Duration, Instant};

use crate::foundation::core::Fps;

/// Time source driving the game loop.
pub trait Clock {
    /// Time since the game started.
    fn elapsed(&self) -> Duration;
    /// Block until the next tick is due.
    fn wait_tick(&mut self);
}

/// Wall clock that throttles the loop to at most `fps` ticks per second.
#[derive(Debug)]
pub struct RealClock {
    start: Instant,
    last_tick: Instant,
    period: Duration,
}

impl RealClock {
    pub fn new(fps: Fps) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            period: fps.tick_period(),
        }
    }
}

impl Clock for RealClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn wait_tick(&mut self) {
        let due = self.last_tick + self.period;
        let now = Instant::now();
        if now < due {
            std::thread::sleep(due - now);
        }
        self.last_tick = Instant::now();
    }
}

/// Clock that advances exactly one tick period per tick and never sleeps.
#[derive(Clone, Debug)]
pub struct SimulatedClock {
    elapsed: Duration,
    period: Duration,
}

impl SimulatedClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period: fps.tick_period(),
        }
    }
}

impl Clock for SimulatedClock {
    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn wait_tick(&mut self) {
        self.elapsed += self.period;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/clock.rs"]
mod tests;
