//! Dropdown Positioner.
//!
//! Keeps the mega-menu panel's top edge pinned beneath the navigation bar while
//! the bar itself slides in and out. `DropdownTop` is always read from the
//! bar's current rendered rectangle, never derived from cached state.
//!
//! The positioner is pure: it decides *when* a measurement is due and asks the
//! caller to schedule animation frames or settle timers. The owning component
//! performs the scheduling and feeds the callbacks back in.

use crate::model::BoundingRect;
use std::time::Duration;
use tracing::trace;

/// Default delay used by [`SettleStrategy::Delay`].
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Read access to the rendered navigation bar.
pub trait LayoutProbe {
    /// Bounding rectangle of the bar element, `None` when it is not mounted.
    fn navbar_rect(&self) -> Option<BoundingRect>;
}

/// How the positioner detects that the bar's show/hide animation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStrategy {
    /// Measure when the bar reports its transition has ended.
    TransitionEnd,
    /// Measure a fixed delay after the visibility change.
    Delay(Duration),
}

impl Default for SettleStrategy {
    fn default() -> Self {
        Self::TransitionEnd
    }
}

/// Scheduling the caller must perform after a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleRequest {
    /// Wait for the bar's transition-end event.
    AwaitTransitionEnd,
    /// Arm a one-shot timer and call [`DropdownPositioner::on_settle_timer`].
    StartTimer(Duration),
}

/// Pending settle point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleState {
    /// Nothing pending.
    Idle,
    /// Waiting for the transition-end event.
    AwaitingTransition,
    /// Waiting for the settle timer.
    AwaitingTimer,
}

/// Tracks `DropdownTop` and the pending measurement triggers.
#[derive(Debug, Clone)]
pub struct DropdownPositioner {
    top: Option<f64>,
    frame_pending: bool,
    settle: SettleState,
    strategy: SettleStrategy,
}

impl DropdownPositioner {
    /// A positioner that has not measured yet.
    pub fn new(strategy: SettleStrategy) -> Self {
        Self {
            top: None,
            frame_pending: false,
            settle: SettleState::Idle,
            strategy,
        }
    }

    /// Last measured `DropdownTop`.
    pub fn top(&self) -> Option<f64> {
        self.top
    }

    /// Configured settle strategy.
    pub fn strategy(&self) -> SettleStrategy {
        self.strategy
    }

    /// True while a scroll-triggered frame is outstanding.
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Current settle state.
    pub fn settle_state(&self) -> SettleState {
        self.settle
    }

    /// Read the bar's rectangle and pin the panel to its bottom edge.
    ///
    /// Idempotent; a no-op when the bar is absent (the previous value is kept).
    pub fn measure(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        if let Some(rect) = probe.navbar_rect() {
            let bottom = rect.bottom();
            if self.top != Some(bottom) {
                trace!(top = bottom, "Dropdown top measured");
            }
            self.top = Some(bottom);
        }
        self.top
    }

    /// Mount trigger: measure immediately.
    pub fn on_mount(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        self.measure(probe)
    }

    /// Resize trigger: measure immediately.
    pub fn on_resize(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        self.measure(probe)
    }

    /// Scroll trigger. Returns `true` when the caller must request an
    /// animation frame; further scrolls before that frame runs coalesce.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// The frame requested by [`Self::on_scroll`] is running.
    pub fn on_animation_frame(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        self.frame_pending = false;
        self.measure(probe)
    }

    /// Visibility changed: arm the settle point.
    pub fn on_visibility_change(&mut self) -> SettleRequest {
        match self.strategy {
            SettleStrategy::TransitionEnd => {
                self.settle = SettleState::AwaitingTransition;
                SettleRequest::AwaitTransitionEnd
            }
            SettleStrategy::Delay(delay) => {
                self.settle = SettleState::AwaitingTimer;
                SettleRequest::StartTimer(delay)
            }
        }
    }

    /// The bar finished a transition. Always re-measures: the bar's position
    /// just changed whether or not a settle point was armed.
    pub fn on_transition_end(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        if self.settle == SettleState::AwaitingTransition {
            self.settle = SettleState::Idle;
        }
        self.measure(probe)
    }

    /// The settle timer fired.
    pub fn on_settle_timer(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        if self.settle == SettleState::AwaitingTimer {
            self.settle = SettleState::Idle;
        }
        self.measure(probe)
    }

    /// A mega-menu panel opened; its presence can change layout.
    pub fn on_panel_opened(&mut self, probe: &dyn LayoutProbe) -> Option<f64> {
        self.measure(probe)
    }

    /// Forget outstanding frame/settle requests (teardown).
    pub fn cancel_pending(&mut self) {
        self.frame_pending = false;
        self.settle = SettleState::Idle;
    }
}

impl Default for DropdownPositioner {
    fn default() -> Self {
        Self::new(SettleStrategy::default())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "dropdown_tests.rs"]
mod tests;
