//! Smooth scrolling.

pub mod easing;
pub mod smooth;

pub use easing::{ease_in_out_cubic, Easing};
pub use smooth::{
    FrameLoopScroller, ScrollOptions, ScrollToTop, SmoothScroll, SCROLL_TO_TOP_DURATION,
};
