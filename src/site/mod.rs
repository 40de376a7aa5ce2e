//! The mounted site: one document, the navbar chrome and the page widgets,
//! driven by a virtual clock.
//!
//! This is the composition root the terminal preview talks to. Input is
//! translated into [`PageEvent`]s on the [`EventLoop`]; [`Site::tick`] then
//! advances timers, the bar's slide, any smooth scroll and the next frame.

use crate::bridge::{FrameBridge, LogParent, ParentFrame};
use crate::contact::{self, ContactEndpoint, ContactError, ContactForm};
use crate::model::{AppError, MenuKey, Point, RoutePath, ScrollY};
use crate::nav::{Navbar, NavbarOptions};
use crate::page::{PageDefinition, SiteCatalog};
use crate::router::{active_menu_key, HistoryRouter, RouteError, Router};
use crate::runtime::{Document, EventLoop, PageEvent, Viewport};
use crate::scroll::{ScrollToTop, SmoothScroll};
use crate::state::{ToastKind, ToastQueue};
use crate::widgets::{Carousel, Typewriter, TypewriterTiming, VideoPlayer};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, warn};

/// Hero headline phrases cycled by the typewriter.
pub const HERO_PHRASES: [&str; 3] = [
    "Intelligence, engineered",
    "AI that ships",
    "Models you can audit",
];

/// Testimonial quotes shown by the carousel.
pub const TESTIMONIALS: [&str; 3] = [
    "\"Cut our triage time in half.\" - Regional health network",
    "\"The first model risk team that signed off in a week.\" - Tier 1 bank",
    "\"Downtime is now a forecast, not a surprise.\" - Auto supplier",
];

/// Length of the showcase video.
pub const SHOWCASE_DURATION: Duration = Duration::from_secs(94);

/// Mount-time settings for a [`Site`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteSettings {
    /// Navbar options.
    pub navbar: NavbarOptions,
    /// Scroll-to-top animation length.
    pub scroll_to_top: Duration,
    /// Post route changes to a parent frame.
    pub embedded: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            navbar: NavbarOptions::default(),
            scroll_to_top: crate::scroll::SCROLL_TO_TOP_DURATION,
            embedded: false,
        }
    }
}

/// A site mounted in a viewport.
pub struct Site {
    catalog: SiteCatalog,
    router: HistoryRouter,
    route_changes: Rc<RefCell<Vec<RoutePath>>>,
    event_loop: EventLoop,
    document: Rc<RefCell<Document>>,
    navbar: Navbar,
    scroll_to_top: ScrollToTop,
    bridge: FrameBridge<Box<dyn ParentFrame>>,
    toasts: ToastQueue,
    typewriter: Typewriter,
    carousel: Carousel,
    player: VideoPlayer,
    player_focused: bool,
    contact_form: ContactForm,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("route", self.router.current_path())
            .field("scroll", &self.document.borrow().scroll())
            .field("navbar", &self.navbar)
            .finish()
    }
}

impl Site {
    /// Mount `catalog` at `start`.
    ///
    /// # Errors
    ///
    /// [`AppError::UnknownRoute`] when no page is registered at `start`.
    pub fn new(
        catalog: SiteCatalog,
        start: RoutePath,
        viewport: Viewport,
        settings: SiteSettings,
    ) -> Result<Self, AppError> {
        Self::with_scroller(catalog, start, viewport, settings, None)
    }

    /// Like [`Site::new`], with an injected smooth-scroll collaborator for
    /// the scroll-to-top control.
    pub fn with_scroller(
        catalog: SiteCatalog,
        start: RoutePath,
        viewport: Viewport,
        settings: SiteSettings,
        scroller: Option<Box<dyn SmoothScroll>>,
    ) -> Result<Self, AppError> {
        Self::with_collaborators(catalog, start, viewport, settings, scroller, Box::new(LogParent))
    }

    /// Like [`Site::with_scroller`], also taking the parent frame that
    /// receives route changes while embedded.
    pub fn with_collaborators(
        catalog: SiteCatalog,
        start: RoutePath,
        viewport: Viewport,
        settings: SiteSettings,
        scroller: Option<Box<dyn SmoothScroll>>,
        parent: Box<dyn ParentFrame>,
    ) -> Result<Self, AppError> {
        let page = catalog
            .page(&start)
            .cloned()
            .ok_or_else(|| AppError::UnknownRoute(start.clone()))?;

        let route_changes = Rc::new(RefCell::new(Vec::new()));
        let mut router = HistoryRouter::new(start.clone())
            .with_routes(catalog.pages().iter().map(|p| p.route.clone()));
        {
            let changes = Rc::clone(&route_changes);
            router.subscribe(move |path| changes.borrow_mut().push(path.clone()));
        }

        let event_loop = EventLoop::new();
        let document = Rc::new(RefCell::new(Document::new(page, viewport)));
        let navbar = Navbar::mount(
            &event_loop,
            Rc::clone(&document),
            catalog.menu().clone(),
            settings.navbar,
        );

        let mut bridge = FrameBridge::new(parent, settings.embedded);
        if let Err(err) = bridge.route_changed(&start) {
            warn!(error = %err, "Could not announce start route");
        }

        info!(route = %start, embedded = settings.embedded, "Site mounted");
        Ok(Self {
            catalog,
            router,
            route_changes,
            event_loop,
            document,
            navbar,
            scroll_to_top: ScrollToTop::new(scroller, settings.scroll_to_top),
            bridge,
            toasts: ToastQueue::new(),
            typewriter: Typewriter::new(
                HERO_PHRASES.iter().map(|p| p.to_string()).collect(),
                TypewriterTiming::default(),
            ),
            carousel: Carousel::new(
                TESTIMONIALS.len(),
                crate::widgets::carousel::DEFAULT_INTERVAL,
            ),
            player: VideoPlayer::new(SHOWCASE_DURATION),
            player_focused: false,
            contact_form: ContactForm::new(),
        })
    }

    /// Current clock.
    pub fn now(&self) -> Duration {
        self.event_loop.now()
    }

    /// The document.
    pub fn document(&self) -> Ref<'_, Document> {
        self.document.borrow()
    }

    /// The page currently shown.
    pub fn page(&self) -> PageDefinition {
        self.document.borrow().page().clone()
    }

    /// The mounted navbar.
    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    /// The router.
    pub fn router(&self) -> &HistoryRouter {
        &self.router
    }

    /// The catalog of pages.
    pub fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    /// The frame bridge.
    pub fn bridge(&self) -> &FrameBridge<Box<dyn ParentFrame>> {
        &self.bridge
    }

    /// Live notifications.
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Raise a notification.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(kind, message);
    }

    /// Hero typewriter.
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Testimonial carousel.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Mutable testimonial carousel.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Showcase player.
    pub fn player(&self) -> &VideoPlayer {
        &self.player
    }

    /// Mutable showcase player.
    pub fn player_mut(&mut self) -> &mut VideoPlayer {
        &mut self.player
    }

    /// True while keys go to the player.
    pub fn player_focused(&self) -> bool {
        self.player_focused
    }

    /// Give or take keyboard focus to the player.
    pub fn set_player_focused(&mut self, focused: bool) {
        self.player_focused = focused;
    }

    /// The contact form.
    pub fn contact_form(&self) -> &ContactForm {
        &self.contact_form
    }

    /// Mutable contact form.
    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact_form
    }

    /// Submit the contact form to `endpoint`, reporting the outcome as a toast.
    ///
    /// # Errors
    ///
    /// Whatever [`contact::submit`] reports; the form is kept on failure.
    pub fn submit_contact(
        &mut self,
        endpoint: &mut dyn ContactEndpoint,
    ) -> Result<(), ContactError> {
        contact::submit(&mut self.contact_form, endpoint, &mut self.toasts)
    }

    /// Key of the menu item matching the current route.
    pub fn active_menu_key(&self) -> Option<MenuKey> {
        active_menu_key(&self.router, self.catalog.menu()).cloned()
    }

    /// Scroll by `delta` pixels. Manual scrolling cancels scroll-to-top.
    pub fn scroll_by(&mut self, delta: f64) -> ScrollY {
        self.scroll_to_top.cancel();
        let scroll = self.document.borrow_mut().scroll_by(delta);
        self.event_loop.dispatch(&PageEvent::Scroll(scroll));
        scroll
    }

    /// Jump to the bottom of the page.
    pub fn scroll_to_bottom(&mut self) -> ScrollY {
        let max = self.document.borrow().max_scroll();
        let current = self.document.borrow().scroll().get();
        self.scroll_by(max - current)
    }

    /// Start the smooth scroll back to the top.
    pub fn scroll_to_top(&mut self) {
        let scroll = self.document.borrow().scroll();
        self.scroll_to_top.trigger(scroll, self.now());
    }

    /// True while scrolling to the top.
    pub fn scrolling_to_top(&self) -> bool {
        self.scroll_to_top.is_animating()
    }

    /// Viewport resized.
    pub fn resize(&mut self, viewport: Viewport) {
        self.document.borrow_mut().resize(viewport);
        self.event_loop.dispatch(&PageEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        });
    }

    /// Pointer moved to `point` (viewport coordinates).
    pub fn pointer_move(&mut self, point: Point) {
        self.event_loop.dispatch(&PageEvent::PointerMove(point));
    }

    /// Click at `point`. Follows the link under it, if any.
    pub fn click(&mut self, point: Point) -> Option<RoutePath> {
        let path = self.navbar.link_at(point)?;
        self.navigate(path.clone()).ok()?;
        Some(path)
    }

    /// Move keyboard focus `step` triggers along the menu, opening its panel.
    pub fn focus_menu(&mut self, step: isize) -> Option<MenuKey> {
        let triggers = self.navbar.trigger_rects();
        if triggers.is_empty() || !self.navbar.presentation().is_interactive() {
            return None;
        }
        let len = triggers.len() as isize;
        let next = match self.navbar.hovered() {
            Some(key) => {
                let current = triggers.iter().position(|(k, _)| *k == key).unwrap_or(0) as isize;
                (current + step).rem_euclid(len)
            }
            None if step < 0 => len - 1,
            None => 0,
        };
        let (key, rect) = triggers[next as usize].clone();
        self.pointer_move(Point::new(
            rect.left + rect.width / 2.0,
            rect.top + rect.height / 2.0,
        ));
        Some(key)
    }

    /// Close the open menu.
    pub fn close_menu(&mut self) -> bool {
        self.navbar.close_menu()
    }

    /// Navigate to `path`.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] when no page is registered there; the
    /// current page stays mounted.
    pub fn navigate(&mut self, path: RoutePath) -> Result<(), RouteError> {
        self.router.navigate(path)?;
        self.sync_route();
        Ok(())
    }

    /// Go back in history.
    pub fn back(&mut self) -> bool {
        let moved = self.router.back();
        self.sync_route();
        moved
    }

    /// Go forward in history.
    pub fn forward(&mut self) -> bool {
        let moved = self.router.forward();
        self.sync_route();
        moved
    }

    /// Handle a raw message from the parent frame.
    pub fn receive_parent_message(&mut self, raw: &str) {
        self.bridge.receive(raw, &mut self.router);
        self.sync_route();
    }

    /// Advance every animation to `now`. Returns true when something visible
    /// may have changed.
    ///
    /// The bar's slide advances before timers fire, so a settle timer
    /// measures the bar where it is at `now`.
    pub fn tick(&mut self, now: Duration) -> bool {
        let now = now.max(self.event_loop.now());

        let (settled, sliding) = {
            let mut document = self.document.borrow_mut();
            let settled = document.tick(now);
            (settled, document.navbar_sliding())
        };
        if settled {
            self.event_loop.dispatch(&PageEvent::TransitionEnd);
        }
        let mut changed = settled || sliding;
        changed |= self.event_loop.advance_to(now) > 0;

        if let Some(scroll) = self.scroll_to_top.tick(now) {
            self.document.borrow_mut().set_scroll(scroll);
            self.event_loop.dispatch(&PageEvent::Scroll(scroll));
            changed = true;
        }

        changed |= self.event_loop.run_animation_frame() > 0;
        changed |= self.toasts.tick(now);
        changed |= self.typewriter.tick(now);
        changed |= self.carousel.tick(now);
        if self.player.is_playing() {
            self.player.tick(now);
            changed = true;
        }
        changed
    }

    fn sync_route(&mut self) {
        let Some(path) = self.route_changes.borrow_mut().drain(..).last() else {
            return;
        };
        let Some(page) = self.catalog.page(&path).cloned() else {
            return;
        };

        self.scroll_to_top.cancel();
        self.navbar.close_menu();
        let scroll = {
            let mut document = self.document.borrow_mut();
            document.set_page(page);
            document.scroll()
        };
        self.event_loop.dispatch(&PageEvent::Scroll(scroll));

        if let Err(err) = self.bridge.route_changed(&path) {
            warn!(error = %err, "Could not post route change");
        }
        info!(route = %path, "Route changed");
    }
}

#[cfg(test)]
#[path = "site_tests.rs"]
mod tests;
