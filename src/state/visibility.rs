//! Scroll Tracker and Visibility Controller.
//!
//! Converts the raw scroll offset into the "in hero" signal that drives the
//! navigation bar's animated presence. Visibility is a pure function of the
//! scroll offset and the hero region; the controller only remembers the last
//! answer so it can report transitions.

use crate::model::{HeroRegion, ScrollY};
use tracing::debug;

/// Height of the navigation bar in pixels on the reference site.
pub const NAVBAR_HEIGHT: f64 = 96.0;

/// Whether the viewport is still within the hero.
///
/// `true` when `0 <= scroll <= hero.bottom - navbar_height`. With no resolvable
/// hero the answer is `true`: the bar stays visible rather than disappearing
/// unexpectedly.
///
/// ```
/// use neuroverse_nav::model::{HeroRegion, ScrollY};
/// use neuroverse_nav::state::visibility::{is_in_hero, NAVBAR_HEIGHT};
///
/// let hero = Some(HeroRegion::from_offset(0.0, 1000.0));
/// assert!(is_in_hero(ScrollY::new(904.0), hero, NAVBAR_HEIGHT));
/// assert!(!is_in_hero(ScrollY::new(905.0), hero, NAVBAR_HEIGHT));
/// assert!(is_in_hero(ScrollY::new(1e9), None, NAVBAR_HEIGHT));
/// ```
pub fn is_in_hero(scroll: ScrollY, hero: Option<HeroRegion>, navbar_height: f64) -> bool {
    match hero {
        Some(hero) => {
            let y = scroll.get();
            y >= 0.0 && y <= hero.bottom - navbar_height
        }
        None => true,
    }
}

/// Edge reported when visibility flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityTransition {
    /// The bar slides back in.
    Shown,
    /// The bar slides out of view.
    Hidden,
}

/// Holds the current `VisibilityState` and reports its transitions.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    visible: bool,
    navbar_height: f64,
}

impl VisibilityController {
    /// Starts visible, as the bar is on first paint.
    pub fn new(navbar_height: f64) -> Self {
        Self {
            visible: true,
            navbar_height,
        }
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bar height used for the hero cut-off.
    pub fn navbar_height(&self) -> f64 {
        self.navbar_height
    }

    /// Recompute visibility for a scroll tick.
    ///
    /// Returns the transition if the state changed, `None` otherwise.
    pub fn observe(
        &mut self,
        scroll: ScrollY,
        hero: Option<HeroRegion>,
    ) -> Option<VisibilityTransition> {
        let visible = is_in_hero(scroll, hero, self.navbar_height);
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        let transition = if visible {
            VisibilityTransition::Shown
        } else {
            VisibilityTransition::Hidden
        };
        debug!(scroll = scroll.get(), ?transition, "Navbar visibility changed");
        Some(transition)
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(NAVBAR_HEIGHT)
    }
}

/// Vertical offset applied to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOffset {
    /// `translateY(0)`.
    Shown,
    /// `translateY(-100%)`: fully above the viewport.
    Hidden,
}

/// Whether the bar intercepts pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    /// Normal hit testing.
    Auto,
    /// Clicks and hovers pass through.
    None,
}

/// Style the bar animates towards for a visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarPresentation {
    /// Target offset.
    pub offset: BarOffset,
    /// Pointer interactivity.
    pub pointer_events: PointerEvents,
}

impl NavbarPresentation {
    /// Presentation for `visible`: shown bars are interactive, hidden ones never are.
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self {
                offset: BarOffset::Shown,
                pointer_events: PointerEvents::Auto,
            }
        } else {
            Self {
                offset: BarOffset::Hidden,
                pointer_events: PointerEvents::None,
            }
        }
    }

    /// True when hit testing should consider the bar.
    pub fn is_interactive(&self) -> bool {
        self.pointer_events == PointerEvents::Auto
    }
}
