//! Testimonial carousel: a wrap-around index that auto-advances on an
//! interval, paused while the pointer rests on it.

use std::time::Duration;

/// Default auto-advance interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Carousel position and auto-advance timer.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: Duration,
    clock: Duration,
    next_advance: Duration,
    hovered: bool,
}

impl Carousel {
    /// Carousel over `len` slides.
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            interval,
            clock: Duration::ZERO,
            next_advance: interval,
            hovered: false,
        }
    }

    /// Current slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True with no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Next slide, wrapping to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
            self.restart_timer();
        }
    }

    /// Previous slide, wrapping to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
            self.restart_timer();
        }
    }

    /// Jump to `index`. Out-of-range indices are refused.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.restart_timer();
        true
    }

    /// Pointer entered or left the carousel.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered && !hovered {
            self.restart_timer();
        }
        self.hovered = hovered;
    }

    /// Advance the clock. Returns true when the slide auto-advanced.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.clock = self.clock.max(now);
        if self.hovered || self.len < 2 || self.clock < self.next_advance {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.restart_timer();
        true
    }

    fn restart_timer(&mut self) {
        self.next_advance = self.clock + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = Carousel::new(3, DEFAULT_INTERVAL);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut c = Carousel::new(3, DEFAULT_INTERVAL);
        assert!(c.go_to(2));
        assert!(!c.go_to(3));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn auto_advances_on_interval() {
        let mut c = Carousel::new(3, secs(5));
        assert!(!c.tick(secs(4)));
        assert!(c.tick(secs(5)));
        assert_eq!(c.index(), 1);
        assert!(!c.tick(secs(9)));
        assert!(c.tick(secs(10)));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn hover_pauses_and_leaving_restarts_interval() {
        let mut c = Carousel::new(3, secs(5));
        c.set_hovered(true);
        assert!(!c.tick(secs(20)));
        c.set_hovered(false);
        assert!(!c.tick(secs(24)));
        assert!(c.tick(secs(25)));
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let mut c = Carousel::new(3, secs(5));
        c.tick(secs(4));
        c.next();
        assert!(!c.tick(secs(5)));
        assert!(c.tick(secs(9)));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_and_single_slide_never_move() {
        let mut empty = Carousel::new(0, secs(1));
        empty.next();
        empty.prev();
        assert!(!empty.tick(secs(10)));
        assert_eq!(empty.index(), 0);

        let mut single = Carousel::new(1, secs(1));
        assert!(!single.tick(secs(10)));
    }
}
