//! Timekeeping for the main loop.

use std::time::{Duration, Instant};

/// Longest stretch of time one frame may account for, in seconds.
///
/// Longer gaps (a debugger pause, a dragged window) are dropped rather than
/// simulated tick by tick.
pub const MAX_FRAME_TIME: f64 = 1.0;

/// Seconds since the frame was created, or since the last `set`.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    base: f64,
    start: Instant,
}

impl Clock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Clock {
            base: 0.0,
            start: Instant::now(),
        }
    }

    /// Returns the current time in seconds.
    pub fn time(&self) -> f64 {
        self.base + self.start.elapsed().as_secs_f64()
    }

    /// Makes the current time read `time` seconds.
    pub fn set(&mut self, time: f64) {
        self.base = time;
        self.start = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

/// Fixed-rate simulation ticks fed by variable frame times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timestep {
    tick: f64,
    accumulated: f64,
}

impl Timestep {
    /// Ticks `tick_hz` times per second. Zero is treated as one.
    pub fn new(tick_hz: u32) -> Self {
        Timestep {
            tick: 1.0 / f64::from(tick_hz.max(1)),
            accumulated: 0.0,
        }
    }

    /// Length of one tick in seconds.
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Adds elapsed frame time. The backlog never exceeds `MAX_FRAME_TIME`.
    pub fn advance(&mut self, elapsed: f64) {
        self.accumulated = (self.accumulated + elapsed.max(0.0)).min(MAX_FRAME_TIME);
    }

    /// Takes one whole tick from the backlog, if there is one.
    pub fn consume(&mut self) -> bool {
        if self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            true
        } else {
            false
        }
    }

    /// Time left over after all whole ticks, in seconds.
    pub fn remainder(&self) -> f64 {
        self.accumulated
    }
}

/// Caps the frame rate by sleeping out the rest of each frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameCap {
    budget: Option<Duration>,
}

impl FrameCap {
    /// At most `fps` frames per second; zero means uncapped.
    pub fn new(fps: u32) -> Self {
        let budget = if fps == 0 {
            None
        } else {
            Some(Duration::from_secs(1) / fps)
        };
        FrameCap { budget }
    }

    /// Returns how long to sleep after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let budget = self.budget?;
        budget.checked_sub(elapsed).filter(|rest| !rest.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_can_be_reset() {
        let mut clock = Clock::new();
        clock.set(100.0);
        let now = clock.time();
        assert!(now >= 100.0 && now < 101.0);
        clock.set(0.0);
        assert!(clock.time() < 1.0);
    }

    #[test]
    fn whole_ticks_leave_a_remainder() {
        let mut timestep = Timestep::new(4);
        timestep.advance(0.6);
        let mut ticks = 0;
        while timestep.consume() {
            ticks += 1;
        }
        assert_eq!(2, ticks);
        assert!((timestep.remainder() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn backlog_is_clamped() {
        let mut timestep = Timestep::new(10);
        timestep.advance(30.0);
        assert_eq!(MAX_FRAME_TIME, timestep.remainder());
        timestep.advance(-5.0);
        assert_eq!(MAX_FRAME_TIME, timestep.remainder());

        let mut ticks = 0;
        while timestep.consume() {
            ticks += 1;
        }
        assert!(ticks == 9 || ticks == 10);
    }

    #[test]
    fn zero_hz_ticks_once_a_second() {
        assert_eq!(1.0, Timestep::new(0).tick());
    }

    #[test]
    fn frame_cap_budget() {
        let cap = FrameCap::new(50);
        assert_eq!(Some(Duration::from_millis(15)), cap.remaining(Duration::from_millis(5)));
        assert_eq!(None, cap.remaining(Duration::from_millis(20)));
        assert_eq!(None, cap.remaining(Duration::from_millis(35)));
        assert_eq!(None, FrameCap::new(0).remaining(Duration::ZERO));
    }
}
