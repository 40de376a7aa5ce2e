//! End-to-end scroll scenarios on the mounted home page.
//!
//! The home hero is 800px tall and the bar 96px, so the bar must hide on the
//! first scroll tick past 704px and nowhere else.

use neuroverse_nav::model::{HeroRegion, RoutePath, ScrollY};
use neuroverse_nav::page::SiteCatalog;
use neuroverse_nav::runtime::{Viewport, NAVBAR_SLIDE_DURATION};
use neuroverse_nav::site::{Site, SiteSettings};
use neuroverse_nav::state::{VisibilityController, VisibilityTransition};
use std::time::Duration;

fn home() -> Site {
    Site::new(
        SiteCatalog::neuroverse(),
        RoutePath::root(),
        Viewport::new(1280.0, 800.0),
        SiteSettings::default(),
    )
    .expect("home page is registered")
}

#[test]
fn controller_hides_once_on_the_way_down() {
    let hero = Some(HeroRegion::from_offset(0.0, 800.0));
    let mut controller = VisibilityController::default();

    let transitions: Vec<(u32, VisibilityTransition)> = (0..=2000)
        .filter_map(|y| {
            controller
                .observe(ScrollY::new(f64::from(y)), hero)
                .map(|t| (y, t))
        })
        .collect();

    assert_eq!(transitions, vec![(705, VisibilityTransition::Hidden)]);
}

#[test]
fn site_hides_bar_once_while_scrolling_down() {
    let mut site = home();
    let mut flips = Vec::new();
    let mut visible = site.navbar().is_visible();

    for _ in 0..2000 {
        let y = site.scroll_by(1.0).get();
        if site.navbar().is_visible() != visible {
            visible = site.navbar().is_visible();
            flips.push((y, visible));
        }
    }

    assert_eq!(flips, vec![(705.0, false)]);
    assert_eq!(site.document().scroll().get(), 2000.0);
}

#[test]
fn bar_returns_when_scrolling_back_into_hero() {
    let mut site = home();
    site.scroll_by(1000.0);
    site.tick(NAVBAR_SLIDE_DURATION);
    assert!(!site.navbar().is_visible());

    site.scroll_by(-296.0);
    assert!(site.navbar().is_visible(), "704px is still inside the hero band");
}

#[test]
fn dropdown_settles_to_bar_bottom_after_each_slide() {
    let mut site = home();
    assert_eq!(site.navbar().dropdown_top(), Some(96.0));

    site.scroll_by(1200.0);
    site.tick(NAVBAR_SLIDE_DURATION + Duration::from_millis(1));
    assert_eq!(site.navbar().dropdown_top(), Some(0.0));

    site.scroll_by(-1200.0);
    site.tick(2 * NAVBAR_SLIDE_DURATION + Duration::from_millis(2));
    assert_eq!(site.navbar().dropdown_top(), Some(96.0));
}

#[test]
fn hidden_bar_ignores_pointer() {
    let mut site = home();
    site.scroll_by(1200.0);
    site.tick(NAVBAR_SLIDE_DURATION);

    site.pointer_move(neuroverse_nav::model::Point::new(216.0, 48.0));
    assert_eq!(site.navbar().hovered(), None);
    assert!(site.navbar().open_panel().is_none());
}
