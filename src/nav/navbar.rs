//! The mounted navigation bar component.
//!
//! Wires the scroll tracker, visibility controller, dropdown positioner and
//! hover machine onto the event loop:
//!
//! - scroll: recompute hero visibility, then measure on the next frame
//! - resize: measure now and recompute visibility
//! - transition end: measure once the slide has settled
//! - pointer move: hit test triggers and the open panel
//!
//! Every listener, frame request and timer is owned by the component and
//! released when it is dropped or [`Navbar::unmount`]ed. Handlers only hold
//! weak references, so events delivered after teardown are ignored.

use super::layout::{panel_link_rects, panel_rect, trigger_rects};
use crate::model::{BoundingRect, MenuKey, NavMenu, Point, RoutePath};
use crate::runtime::{
    Document, EventKind, EventLoop, FrameHandle, PageEvent, Subscription, TimerHandle,
    WeakEventLoop,
};
use crate::state::{
    DropdownPositioner, HoverMachine, HoverSignal, HoverTarget, LayoutProbe, NavbarPresentation,
    SettleRequest, SettleStrategy, VisibilityController, VisibilityTransition, NAVBAR_HEIGHT,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

/// Mount-time settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarOptions {
    /// Bar height in pixels.
    pub navbar_height: f64,
    /// How the dropdown positioner waits for the slide to finish.
    pub settle: SettleStrategy,
}

impl Default for NavbarOptions {
    fn default() -> Self {
        Self {
            navbar_height: NAVBAR_HEIGHT,
            settle: SettleStrategy::default(),
        }
    }
}

/// The panel currently shown under the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPanel {
    /// Menu item owning the panel.
    pub key: MenuKey,
    /// Where the panel is drawn.
    pub rect: BoundingRect,
}

#[derive(Debug)]
struct NavbarState {
    menu: NavMenu,
    visibility: VisibilityController,
    presentation: NavbarPresentation,
    positioner: DropdownPositioner,
    hover: HoverMachine,
    frame: Option<FrameHandle>,
    settle_timer: Option<TimerHandle>,
}

impl NavbarState {
    fn on_hover_signal(&mut self, signal: &HoverSignal, document: &Document) {
        if signal.opened_key().is_some() {
            self.positioner.on_panel_opened(document);
        }
    }

    fn open_panel(&self, document: &Document) -> Option<OpenPanel> {
        let key = self.hover.hovered()?;
        self.menu.panel(key)?;
        let top = self.positioner.top()?;
        Some(OpenPanel {
            key: key.clone(),
            rect: panel_rect(top, document.viewport().width),
        })
    }

    fn hit_test(&self, document: &Document, point: Point) -> Option<HoverTarget> {
        if !self.presentation.is_interactive() {
            return None;
        }
        if let Some(panel) = self.open_panel(document) {
            if panel.rect.contains(point) {
                return Some(HoverTarget::Panel);
            }
        }
        let bar = document.navbar_rect()?;
        trigger_rects(bar, &self.menu)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(key, _)| HoverTarget::Trigger(key))
    }
}

/// Handles shared by every listener closure.
#[derive(Clone)]
struct Wiring {
    state: Weak<RefCell<NavbarState>>,
    document: Weak<RefCell<Document>>,
    event_loop: WeakEventLoop,
}

impl Wiring {
    fn upgrade(&self) -> Option<(Rc<RefCell<NavbarState>>, Rc<RefCell<Document>>, EventLoop)> {
        Some((
            self.state.upgrade()?,
            self.document.upgrade()?,
            self.event_loop.upgrade()?,
        ))
    }

    fn on_scroll(&self) {
        let Some((state, document, event_loop)) = self.upgrade() else {
            return;
        };
        self.refresh_visibility(&state, &document, &event_loop);

        let mut st = state.borrow_mut();
        if st.positioner.on_scroll() {
            let wiring = self.clone();
            st.frame = Some(event_loop.request_animation_frame(move || wiring.on_frame()));
        }
    }

    fn on_frame(&self) {
        let Some((state, document, _)) = self.upgrade() else {
            return;
        };
        let mut st = state.borrow_mut();
        st.frame = None;
        st.positioner.on_animation_frame(&*document.borrow());
    }

    fn on_resize(&self) {
        let Some((state, document, event_loop)) = self.upgrade() else {
            return;
        };
        state.borrow_mut().positioner.on_resize(&*document.borrow());
        self.refresh_visibility(&state, &document, &event_loop);
    }

    fn on_transition_end(&self) {
        let Some((state, document, _)) = self.upgrade() else {
            return;
        };
        state
            .borrow_mut()
            .positioner
            .on_transition_end(&*document.borrow());
    }

    fn on_settle_timer(&self) {
        let Some((state, document, _)) = self.upgrade() else {
            return;
        };
        let mut st = state.borrow_mut();
        st.settle_timer = None;
        st.positioner.on_settle_timer(&*document.borrow());
    }

    fn on_pointer_move(&self, point: Point) {
        let Some((state, document, _)) = self.upgrade() else {
            return;
        };
        let document = document.borrow();
        let mut st = state.borrow_mut();
        let target = st.hit_test(&document, point);
        if let Some(signal) = st.hover.pointer_over(target) {
            st.on_hover_signal(&signal, &document);
        }
    }

    fn refresh_visibility(
        &self,
        state: &Rc<RefCell<NavbarState>>,
        document: &Rc<RefCell<Document>>,
        event_loop: &EventLoop,
    ) {
        let (scroll, hero) = {
            let doc = document.borrow();
            (doc.scroll(), doc.hero())
        };
        let mut st = state.borrow_mut();
        let Some(transition) = st.visibility.observe(scroll, hero) else {
            return;
        };
        let visible = transition == VisibilityTransition::Shown;
        st.presentation = NavbarPresentation::for_visibility(visible);
        if !visible {
            st.hover.close();
        }
        document
            .borrow_mut()
            .slide_navbar(!visible, event_loop.now());

        match st.positioner.on_visibility_change() {
            SettleRequest::AwaitTransitionEnd => st.settle_timer = None,
            SettleRequest::StartTimer(delay) => {
                let wiring = self.clone();
                st.settle_timer =
                    Some(event_loop.set_timeout(delay, move || wiring.on_settle_timer()));
            }
        }
    }
}

/// A navigation bar mounted on a document.
pub struct Navbar {
    state: Rc<RefCell<NavbarState>>,
    document: Rc<RefCell<Document>>,
    subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for Navbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navbar")
            .field("state", &self.state)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl Navbar {
    /// Attach the bar element to `document` and start listening on `event_loop`.
    pub fn mount(
        event_loop: &EventLoop,
        document: Rc<RefCell<Document>>,
        menu: NavMenu,
        options: NavbarOptions,
    ) -> Self {
        document.borrow_mut().attach_navbar(options.navbar_height);

        let mut positioner = DropdownPositioner::new(options.settle);
        positioner.on_mount(&*document.borrow());

        let state = Rc::new(RefCell::new(NavbarState {
            menu,
            visibility: VisibilityController::new(options.navbar_height),
            presentation: NavbarPresentation::for_visibility(true),
            positioner,
            hover: HoverMachine::new(),
            frame: None,
            settle_timer: None,
        }));

        let wiring = Wiring {
            state: Rc::downgrade(&state),
            document: Rc::downgrade(&document),
            event_loop: event_loop.downgrade(),
        };

        let subscriptions = vec![
            {
                let w = wiring.clone();
                event_loop.add_listener(EventKind::Scroll, move |_| w.on_scroll())
            },
            {
                let w = wiring.clone();
                event_loop.add_listener(EventKind::Resize, move |_| w.on_resize())
            },
            {
                let w = wiring.clone();
                event_loop.add_listener(EventKind::TransitionEnd, move |_| w.on_transition_end())
            },
            {
                let w = wiring.clone();
                event_loop.add_listener(EventKind::PointerMove, move |event| {
                    if let PageEvent::PointerMove(point) = event {
                        w.on_pointer_move(*point);
                    }
                })
            },
        ];

        // Mounted mid-page: start from the current scroll position.
        wiring.refresh_visibility(&state, &document, event_loop);

        info!(
            navbar_height = options.navbar_height,
            settle = ?options.settle,
            "Navbar mounted"
        );
        Self {
            state,
            document,
            subscriptions,
        }
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().visibility.is_visible()
    }

    /// Target presentation for the current visibility.
    pub fn presentation(&self) -> NavbarPresentation {
        self.state.borrow().presentation
    }

    /// Last measured dropdown top.
    pub fn dropdown_top(&self) -> Option<f64> {
        self.state.borrow().positioner.top()
    }

    /// Hovered menu key.
    pub fn hovered(&self) -> Option<MenuKey> {
        self.state.borrow().hover.hovered().cloned()
    }

    /// The open mega-menu panel, if the hovered item has one.
    pub fn open_panel(&self) -> Option<OpenPanel> {
        self.state.borrow().open_panel(&self.document.borrow())
    }

    /// Menu shown by the bar.
    pub fn menu(&self) -> NavMenu {
        self.state.borrow().menu.clone()
    }

    /// Trigger rectangles at the bar's current position.
    pub fn trigger_rects(&self) -> Vec<(MenuKey, BoundingRect)> {
        let st = self.state.borrow();
        self.document
            .borrow()
            .navbar_rect()
            .map(|bar| trigger_rects(bar, &st.menu))
            .unwrap_or_default()
    }

    /// Route a click at `point` leads to: a link in the open panel or a
    /// top-level trigger. A hidden bar is not clickable.
    pub fn link_at(&self, point: Point) -> Option<RoutePath> {
        let st = self.state.borrow();
        if !st.presentation.is_interactive() {
            return None;
        }
        let document = self.document.borrow();
        if let Some(panel) = st.open_panel(&document) {
            if let Some(content) = st.menu.panel(&panel.key) {
                let hit = panel_link_rects(panel.rect, content)
                    .into_iter()
                    .find(|(rect, _)| rect.contains(point))
                    .map(|(_, link)| link.path.clone());
                if hit.is_some() {
                    return hit;
                }
            }
        }
        let bar = document.navbar_rect()?;
        let key = trigger_rects(bar, &st.menu)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(key, _)| key)?;
        st.menu.get(&key).map(|item| item.path.clone())
    }

    /// Close the open panel (Escape, navigation).
    pub fn close_menu(&self) -> bool {
        self.state.borrow_mut().hover.close().is_some()
    }

    /// Tear down: remove listeners, cancel the pending frame and settle timer,
    /// and detach the bar element.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for Navbar {
    fn drop(&mut self) {
        self.subscriptions.clear();
        if let Ok(mut st) = self.state.try_borrow_mut() {
            st.positioner.cancel_pending();
            st.frame = None;
            st.settle_timer = None;
            st.hover.close();
        }
        if let Ok(mut document) = self.document.try_borrow_mut() {
            document.detach_navbar();
        }
        debug!("Navbar unmounted");
    }
}

#[cfg(test)]
#[path = "navbar_tests.rs"]
mod tests;
