//! Browser-like runtime: the event loop and the document it drives.

pub mod document;
pub mod event_loop;

pub use document::{Document, Viewport, NAVBAR_SLIDE_DURATION};
pub use event_loop::{
    EventKind, EventLoop, FrameHandle, PageEvent, Subscription, TimerHandle, WeakEventLoop,
};
