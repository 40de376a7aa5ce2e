//! Single-threaded event loop: listeners, animation frames and timers.
//!
//! Everything runs on one thread. Listener handlers, frame callbacks and
//! timer callbacks are invoked with no borrow of the loop held, so they may
//! register or drop listeners, request frames and arm timers freely.
//!
//! Registrations are owned through RAII handles. Dropping a [`Subscription`],
//! [`FrameHandle`] or [`TimerHandle`] removes the listener or cancels the
//! pending callback; a handle that outlives its callback is inert.

use crate::model::{Point, ScrollY};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::trace;

/// A page-level event delivered to listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The document scrolled.
    Scroll(ScrollY),
    /// The viewport changed size.
    Resize {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },
    /// The navigation bar finished its slide transition.
    TransitionEnd,
    /// The pointer moved to a page coordinate.
    PointerMove(Point),
}

impl PageEvent {
    /// Listener category for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll(_) => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
            Self::TransitionEnd => EventKind::TransitionEnd,
            Self::PointerMove(_) => EventKind::PointerMove,
        }
    }
}

/// Listener category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`PageEvent::Scroll`]
    Scroll,
    /// [`PageEvent::Resize`]
    Resize,
    /// [`PageEvent::TransitionEnd`]
    TransitionEnd,
    /// [`PageEvent::PointerMove`]
    PointerMove,
}

type Handler = Rc<RefCell<dyn FnMut(&PageEvent)>>;
type Callback = Box<dyn FnOnce()>;

struct Listener {
    id: u64,
    kind: EventKind,
    handler: Handler,
}

struct Timer {
    id: u64,
    due: Duration,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    now: Duration,
    listeners: Vec<Listener>,
    frames: Vec<(u64, Callback)>,
    timers: Vec<Timer>,
}

impl Inner {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Handle to the loop. Clones share the same loop.
#[derive(Clone, Default)]
pub struct EventLoop {
    inner: Rc<RefCell<Inner>>,
}

/// Non-owning handle, for callbacks that must not keep the loop alive.
#[derive(Clone, Default)]
pub struct WeakEventLoop {
    inner: Weak<RefCell<Inner>>,
}

impl WeakEventLoop {
    /// The loop, if it still exists.
    pub fn upgrade(&self) -> Option<EventLoop> {
        self.inner.upgrade().map(|inner| EventLoop { inner })
    }
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EventLoop")
            .field("now", &inner.now)
            .field("listeners", &inner.listeners.len())
            .field("frames", &inner.frames.len())
            .field("timers", &inner.timers.len())
            .finish()
    }
}

impl EventLoop {
    /// Empty loop at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-owning handle.
    pub fn downgrade(&self) -> WeakEventLoop {
        WeakEventLoop {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Current loop time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Register `handler` for events of `kind`.
    ///
    /// The listener lives as long as the returned [`Subscription`].
    #[must_use = "dropping the subscription removes the listener"]
    pub fn add_listener(
        &self,
        kind: EventKind,
        handler: impl FnMut(&PageEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.listeners.push(Listener {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to its listeners in registration order.
    ///
    /// Listeners removed by an earlier handler in the same dispatch are
    /// skipped; listeners added during dispatch see the next event. A
    /// handler that re-dispatches into itself is not re-entered.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &PageEvent) -> usize {
        let kind = event.kind();
        let snapshot: Vec<(u64, Handler)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| (l.id, Rc::clone(&l.handler)))
            .collect();

        let mut invoked = 0;
        for (id, handler) in snapshot {
            let still_registered = self.inner.borrow().listeners.iter().any(|l| l.id == id);
            if !still_registered {
                continue;
            }
            let Ok(mut handler) = handler.try_borrow_mut() else {
                trace!(?kind, id, "Skipping re-entrant listener");
                continue;
            };
            (&mut *handler)(event);
            invoked += 1;
        }
        invoked
    }

    /// Queue `callback` for the next animation frame.
    #[must_use = "dropping the handle cancels the frame callback"]
    pub fn request_animation_frame(&self, callback: impl FnOnce() + 'static) -> FrameHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        inner.frames.push((id, Box::new(callback)));
        FrameHandle {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Run every frame callback queued before this call. Callbacks queued
    /// while running wait for the next frame.
    ///
    /// Returns the number of callbacks run.
    pub fn run_animation_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
        let count = frames.len();
        for (_, callback) in frames {
            callback();
        }
        count
    }

    /// Arm a one-shot timer firing `delay` after the current loop time.
    #[must_use = "dropping the handle cancels the timer"]
    pub fn set_timeout(&self, delay: Duration, callback: impl FnOnce() + 'static) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.allocate_id();
        let due = inner.now + delay;
        inner.timers.push(Timer {
            id,
            due,
            callback: Box::new(callback),
        });
        TimerHandle {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Move the clock forward to `now`, firing due timers in deadline order.
    ///
    /// The clock never runs backwards. Returns the number of timers fired.
    pub fn advance_to(&self, now: Duration) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= now)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let timer = inner.timers.remove(index);
                        inner.now = inner.now.max(timer.due);
                        Some(timer.callback)
                    }
                    None => {
                        inner.now = inner.now.max(now);
                        None
                    }
                }
            };
            match next {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => return fired,
            }
        }
    }

    /// Registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Queued frame callbacks.
    pub fn pending_frames(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    /// Armed timers.
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }
}

/// Remove an entry under a short borrow and hand it back, so whatever the
/// entry owns is dropped after the borrow is released.
fn take_where<T>(
    inner: &Weak<RefCell<Inner>>,
    remove: impl FnOnce(&mut Inner) -> Option<T>,
) -> Option<T> {
    let inner = inner.upgrade()?;
    let mut guard = inner.try_borrow_mut().ok()?;
    remove(&mut guard)
}

/// Keeps a listener registered. Dropping it removes the listener.
#[derive(Debug)]
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let removed = take_where(&self.inner, |inner| {
            let index = inner.listeners.iter().position(|l| l.id == self.id)?;
            Some(inner.listeners.remove(index))
        });
        drop(removed);
    }
}

/// A queued animation-frame callback. Dropping it cancels the callback.
#[derive(Debug)]
pub struct FrameHandle {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        let removed = take_where(&self.inner, |inner| {
            let index = inner.frames.iter().position(|(id, _)| *id == self.id)?;
            Some(inner.frames.remove(index))
        });
        drop(removed);
    }
}

/// An armed timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct TimerHandle {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let removed = take_where(&self.inner, |inner| {
            let index = inner.timers.iter().position(|t| t.id == self.id)?;
            Some(inner.timers.remove(index))
        });
        drop(removed);
    }
}

#[cfg(test)]
#[path = "event_loop_tests.rs"]
mod tests;
