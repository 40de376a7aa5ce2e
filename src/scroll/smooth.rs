//! Smooth-scroll collaborator and the scroll-to-top affordance.
//!
//! A [`SmoothScroll`] implementation owns one in-flight animation. The shell
//! ticks it with the loop clock and applies each yielded position to the
//! document. [`ScrollToTop`] is handed its collaborator explicitly; when none
//! is supplied it drives a [`FrameLoopScroller`] itself.

use super::easing::Easing;
use crate::model::ScrollY;
use std::time::Duration;
use tracing::debug;

/// Duration of the scroll-to-top animation.
pub const SCROLL_TO_TOP_DURATION: Duration = Duration::from_millis(2500);

/// Parameters of a smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// Total animation time.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration: SCROLL_TO_TOP_DURATION,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// An animated scroll helper.
pub trait SmoothScroll {
    /// Start animating from `from` to `target`, replacing any animation in
    /// flight. `now` is the loop clock.
    fn scroll_to(&mut self, from: ScrollY, target: ScrollY, options: ScrollOptions, now: Duration);

    /// Position for `now`, or `None` when idle. The final call of an
    /// animation yields the exact target.
    fn tick(&mut self, now: Duration) -> Option<ScrollY>;

    /// True while an animation is in flight.
    fn is_animating(&self) -> bool;

    /// Abandon the animation in flight (user scrolled manually).
    fn cancel(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    started: Duration,
    options: ScrollOptions,
}

/// Steps an animation once per frame from the elapsed time.
#[derive(Debug, Clone, Default)]
pub struct FrameLoopScroller {
    animation: Option<Animation>,
}

impl FrameLoopScroller {
    /// Idle scroller.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SmoothScroll for FrameLoopScroller {
    fn scroll_to(&mut self, from: ScrollY, target: ScrollY, options: ScrollOptions, now: Duration) {
        self.animation = Some(Animation {
            from: from.get(),
            to: target.get(),
            started: now,
            options,
        });
    }

    fn tick(&mut self, now: Duration) -> Option<ScrollY> {
        let animation = self.animation?;
        let elapsed = now.saturating_sub(animation.started);
        let total = animation.options.duration;
        if total.is_zero() || elapsed >= total {
            self.animation = None;
            return Some(ScrollY::new(animation.to));
        }
        let t = elapsed.as_secs_f64() / total.as_secs_f64();
        let eased = animation.options.easing.apply(t);
        Some(ScrollY::new(
            animation.from + (animation.to - animation.from) * eased,
        ))
    }

    fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn cancel(&mut self) {
        self.animation = None;
    }
}

/// The "back to top" control.
pub struct ScrollToTop {
    scroller: Box<dyn SmoothScroll>,
    duration: Duration,
}

impl std::fmt::Debug for ScrollToTop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollToTop")
            .field("duration", &self.duration)
            .field("animating", &self.scroller.is_animating())
            .finish()
    }
}

impl ScrollToTop {
    /// Use `collaborator` when supplied, otherwise the frame-loop fallback.
    pub fn new(collaborator: Option<Box<dyn SmoothScroll>>, duration: Duration) -> Self {
        let scroller = collaborator.unwrap_or_else(|| Box::new(FrameLoopScroller::new()));
        Self { scroller, duration }
    }

    /// Start scrolling from `current` to the top.
    pub fn trigger(&mut self, current: ScrollY, now: Duration) {
        if current == ScrollY::TOP {
            return;
        }
        debug!(from = current.get(), "Scrolling to top");
        let options = ScrollOptions {
            duration: self.duration,
            easing: Easing::EaseInOutCubic,
        };
        self.scroller.scroll_to(current, ScrollY::TOP, options, now);
    }

    /// Forward a frame tick to the scroller.
    pub fn tick(&mut self, now: Duration) -> Option<ScrollY> {
        self.scroller.tick(now)
    }

    /// True while scrolling.
    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    /// Stop scrolling.
    pub fn cancel(&mut self) {
        self.scroller.cancel();
    }
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new(None, SCROLL_TO_TOP_DURATION)
    }
}
