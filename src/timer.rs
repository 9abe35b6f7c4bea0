use std::num::NonZeroUsize;
use std::time::Instant;

use crate::config::TimerConfig;
use crate::input::Action;
use crate::state::Tier;

/// Current slide index plus the countdown running on it.
pub struct Slideshow {
    config: TimerConfig,
    slide_count: NonZeroUsize,
    current: usize,
    slide_start: Instant,
    remaining: f32,
}

impl Slideshow {
    pub fn new(config: TimerConfig, slide_count: NonZeroUsize, now: Instant) -> Self {
        Self {
            config,
            slide_count,
            current: 0,
            slide_start: now,
            remaining: config.duration(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn tier(&self) -> Tier {
        Tier::from_remaining(self.remaining, &self.config)
    }

    pub fn next(&mut self, now: Instant) {
        self.current = (self.current + 1) % self.slide_count.get();
        self.reset(now);
    }

    pub fn previous(&mut self, now: Instant) {
        let count = self.slide_count.get();
        self.current = (self.current + count - 1) % count;
        self.reset(now);
    }

    /// Restarts the countdown without changing slide.
    pub fn reset(&mut self, now: Instant) {
        self.slide_start = now;
        self.remaining = self.config.duration();
    }

    /// Recomputes the time left from the wall clock and advances once it runs out.
    /// Returns `true` when the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.slide_start).as_secs_f32();
        self.remaining = self.config.duration() - elapsed;

        if self.remaining <= 0.0 {
            self.next(now);
            return true;
        }
        false
    }

    /// Applies a navigation action. Actions that do not concern the countdown are ignored.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Next => self.next(now),
            Action::Previous => self.previous(now),
            Action::ResetTimer => self.reset(now),
            Action::Quit | Action::Resize(_) => {}
        }
    }
}
