//! The rendered page: scroll offset, viewport, current page and the
//! navigation bar element.
//!
//! The bar element's rectangle is what the dropdown positioner measures. It
//! slides between `translateY(0)` and `translateY(-100%)` over
//! [`NAVBAR_SLIDE_DURATION`]; the shell calls [`Document::tick`] every frame
//! and dispatches a transition-end event when a slide completes.

use crate::model::{BoundingRect, HeroRegion, ScrollY};
use crate::page::{resolve_hero, PageDefinition};
use crate::scroll::ease_in_out_cubic;
use crate::state::LayoutProbe;
use std::time::Duration;

/// Length of the bar's show/hide transition.
pub const NAVBAR_SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Viewport {
    /// A `width` × `height` viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Slide {
    from: f64,
    to: f64,
    started: Duration,
}

/// The mounted navigation bar element.
#[derive(Debug, Clone, PartialEq)]
struct NavbarElement {
    height: f64,
    /// Fraction of the bar's height it is shifted up: 0 shown, 1 hidden.
    hidden_fraction: f64,
    slide: Option<Slide>,
}

/// Page state shared by the navigation components and the shell.
#[derive(Debug, Clone)]
pub struct Document {
    page: PageDefinition,
    viewport: Viewport,
    scroll: ScrollY,
    navbar: Option<NavbarElement>,
}

impl Document {
    /// Document showing `page` scrolled to the top.
    pub fn new(page: PageDefinition, viewport: Viewport) -> Self {
        Self {
            page,
            viewport,
            scroll: ScrollY::TOP,
            navbar: None,
        }
    }

    /// Current page.
    pub fn page(&self) -> &PageDefinition {
        &self.page
    }

    /// Navigate: swap the page and reset scroll to the top.
    pub fn set_page(&mut self, page: PageDefinition) {
        self.page = page;
        self.scroll = ScrollY::TOP;
    }

    /// Viewport size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport, keeping the scroll offset within range.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let max = self.max_scroll();
        if self.scroll.get() > max {
            self.scroll = ScrollY::new(max);
        }
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> ScrollY {
        self.scroll
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        self.page.layout.max_scroll(self.viewport.height)
    }

    /// Set the raw scroll offset (as reported by the platform).
    pub fn set_scroll(&mut self, scroll: ScrollY) {
        self.scroll = scroll;
    }

    /// Scroll by `delta` pixels, clamped to the document.
    pub fn scroll_by(&mut self, delta: f64) -> ScrollY {
        self.scroll = self.scroll.offset_by(delta, self.max_scroll());
        self.scroll
    }

    /// The current page's hero, resolved from its registration.
    pub fn hero(&self) -> Option<HeroRegion> {
        resolve_hero(&self.page.layout, &self.page.hero)
    }

    /// Mount the bar element, shown.
    pub fn attach_navbar(&mut self, height: f64) {
        self.navbar = Some(NavbarElement {
            height,
            hidden_fraction: 0.0,
            slide: None,
        });
    }

    /// Unmount the bar element.
    pub fn detach_navbar(&mut self) {
        self.navbar = None;
    }

    /// True while the bar element is mounted.
    pub fn has_navbar(&self) -> bool {
        self.navbar.is_some()
    }

    /// Start sliding the bar towards shown or hidden from wherever it is now.
    pub fn slide_navbar(&mut self, hidden: bool, now: Duration) {
        if let Some(bar) = &mut self.navbar {
            let to = if hidden { 1.0 } else { 0.0 };
            bar.slide = Some(Slide {
                from: bar.hidden_fraction,
                to,
                started: now,
            });
        }
    }

    /// True while the bar is mid-transition.
    pub fn navbar_sliding(&self) -> bool {
        self.navbar.as_ref().is_some_and(|bar| bar.slide.is_some())
    }

    /// Advance the bar's slide. Returns `true` when a transition completed
    /// during this tick.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(bar) = &mut self.navbar else {
            return false;
        };
        let Some(slide) = bar.slide else {
            return false;
        };
        let elapsed = now.saturating_sub(slide.started);
        if elapsed >= NAVBAR_SLIDE_DURATION {
            bar.hidden_fraction = slide.to;
            bar.slide = None;
            return true;
        }
        let t = elapsed.as_secs_f64() / NAVBAR_SLIDE_DURATION.as_secs_f64();
        bar.hidden_fraction = slide.from + (slide.to - slide.from) * ease_in_out_cubic(t);
        false
    }
}

impl LayoutProbe for Document {
    fn navbar_rect(&self) -> Option<BoundingRect> {
        self.navbar.as_ref().map(|bar| {
            BoundingRect::new(
                0.0,
                -bar.height * bar.hidden_fraction,
                self.viewport.width,
                bar.height,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoutePath;
    use crate::page::SiteCatalog;

    fn home() -> Document {
        let site = SiteCatalog::neuroverse();
        let page = site.page(&RoutePath::root()).cloned().unwrap();
        Document::new(page, Viewport::new(1280.0, 800.0))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn no_rect_without_navbar() {
        let doc = home();
        assert_eq!(doc.navbar_rect(), None);
    }

    #[test]
    fn attached_navbar_sits_at_top() {
        let mut doc = home();
        doc.attach_navbar(96.0);
        assert_eq!(
            doc.navbar_rect(),
            Some(BoundingRect::new(0.0, 0.0, 1280.0, 96.0))
        );
    }

    #[test]
    fn slide_hides_bar_after_transition() {
        let mut doc = home();
        doc.attach_navbar(96.0);
        doc.slide_navbar(true, ms(0));
        assert!(!doc.tick(ms(150)));
        let mid = doc.navbar_rect().unwrap();
        assert_eq!(mid.top, -48.0);
        assert!(doc.tick(ms(300)));
        assert_eq!(doc.navbar_rect().unwrap().top, -96.0);
        assert_eq!(doc.navbar_rect().unwrap().bottom(), 0.0);
        assert!(!doc.tick(ms(400)), "completion is reported once");
    }

    #[test]
    fn reversing_mid_slide_starts_from_current_offset() {
        let mut doc = home();
        doc.attach_navbar(96.0);
        doc.slide_navbar(true, ms(0));
        doc.tick(ms(150));
        doc.slide_navbar(false, ms(150));
        doc.tick(ms(150));
        assert_eq!(doc.navbar_rect().unwrap().top, -48.0);
        assert!(doc.tick(ms(450)));
        assert_eq!(doc.navbar_rect().unwrap().top, 0.0);
    }

    #[test]
    fn scroll_by_clamps_to_document() {
        let mut doc = home();
        let max = doc.max_scroll();
        assert_eq!(doc.scroll_by(-50.0), ScrollY::TOP);
        assert_eq!(doc.scroll_by(1e9), ScrollY::new(max));
    }

    #[test]
    fn resize_pulls_scroll_back_into_range() {
        let mut doc = home();
        doc.scroll_by(1e9);
        doc.resize(Viewport::new(1280.0, 1600.0));
        assert_eq!(doc.scroll().get(), doc.max_scroll());
    }

    #[test]
    fn set_page_resets_scroll() {
        let mut doc = home();
        doc.scroll_by(500.0);
        let site = SiteCatalog::neuroverse();
        let careers = site
            .page(&RoutePath::new("/careers").unwrap())
            .cloned()
            .unwrap();
        doc.set_page(careers);
        assert_eq!(doc.scroll(), ScrollY::TOP);
        assert_eq!(doc.hero().unwrap().bottom, 800.0);
    }
}
