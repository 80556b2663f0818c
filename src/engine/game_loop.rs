/// Tick clock for the arena driver
///
/// Implements a fixed timestep accumulator: wall-clock time is accumulated
/// every frame and converted into a whole number of simulation ticks, so the
/// physics advances at the configured rate regardless of how often the
/// driver loop wakes up.
use std::time::{Duration, Instant};

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed-timestep clock
pub struct TickClock {
    /// Duration of one simulation tick
    tick_duration: Duration,

    /// Accumulated time not yet converted into ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the clock was created
    start_time: Instant,

    /// Whether ticking is suspended
    paused: bool,

    /// Frames begun so far
    frame_count: u64,

    /// Ticks handed out so far
    tick_count: u64,
}

impl TickClock {
    /// Create a clock producing `tick_rate` ticks per second
    ///
    /// A zero rate is treated as one tick per second; configuration
    /// validation rejects it before it gets here.
    pub fn new(tick_rate: u32) -> Self {
        let now = Instant::now();
        Self {
            tick_duration: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // Drop whatever could not be caught up on instead of carrying the debt
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.tick_duration {
            log::debug!(
                "tick clock fell behind, dropping {:?} of simulation time",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        let since_frame = Instant::now().duration_since(self.last_frame_time);
        self.tick_duration.saturating_sub(self.accumulator + since_frame)
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a burst of ticks
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = TickClock::new(60);
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_count(), 0);
        assert!(!clock.is_paused());
        assert_eq!(clock.tick_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let clock = TickClock::new(0);
        assert_eq!(clock.tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = TickClock::default();
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut clock = TickClock::new(1000);
        clock.pause();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.begin_frame(), 0);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_ticks_accumulate() {
        let mut clock = TickClock::new(1000);
        thread::sleep(Duration::from_millis(3));
        let ticks = clock.begin_frame();
        assert!(ticks >= 1);
        assert_eq!(clock.tick_count(), ticks as u64);
    }

    #[test]
    fn test_max_ticks_per_frame_limit() {
        let mut clock = TickClock::new(60);
        // 300ms would allow 18 ticks
        thread::sleep(Duration::from_millis(300));
        assert_eq!(clock.begin_frame(), MAX_TICKS_PER_FRAME);
        // Debt was dropped, so the next frame does not burst again
        assert!(clock.begin_frame() <= 1);
    }

    #[test]
    fn test_until_next_tick_is_bounded() {
        let clock = TickClock::new(60);
        assert!(clock.until_next_tick() <= clock.tick_duration());
    }
}
