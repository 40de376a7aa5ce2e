//! Tests for the mounted navbar.

use super::*;
use crate::model::ScrollY;
use crate::page::SiteCatalog;
use crate::runtime::Viewport;
use crate::state::dropdown::DEFAULT_SETTLE_DELAY;
use std::time::Duration;

struct Harness {
    event_loop: EventLoop,
    document: Rc<RefCell<Document>>,
    navbar: Navbar,
}

impl Harness {
    fn mount(route: &str, settle: SettleStrategy) -> Self {
        let site = SiteCatalog::neuroverse();
        let page = site
            .page(&RoutePath::new(route).unwrap())
            .cloned()
            .unwrap();
        let event_loop = EventLoop::new();
        let document = Rc::new(RefCell::new(Document::new(
            page,
            Viewport::new(1280.0, 800.0),
        )));
        let navbar = Navbar::mount(
            &event_loop,
            Rc::clone(&document),
            site.menu().clone(),
            NavbarOptions {
                navbar_height: 96.0,
                settle,
            },
        );
        Self {
            event_loop,
            document,
            navbar,
        }
    }

    fn home() -> Self {
        Self::mount("/", SettleStrategy::TransitionEnd)
    }

    fn scroll_to(&self, y: f64) {
        self.document.borrow_mut().set_scroll(ScrollY::new(y));
        self.event_loop
            .dispatch(&PageEvent::Scroll(ScrollY::new(y)));
    }

    fn pointer(&self, x: f64, y: f64) {
        self.event_loop
            .dispatch(&PageEvent::PointerMove(Point::new(x, y)));
    }

    fn finish_slide(&self) {
        if self.document.borrow_mut().tick(Duration::from_secs(60)) {
            self.event_loop.dispatch(&PageEvent::TransitionEnd);
        }
    }
}

fn key(name: &str) -> MenuKey {
    MenuKey::new(name).unwrap()
}

#[test]
fn mount_measures_dropdown_top() {
    let h = Harness::home();
    assert!(h.navbar.is_visible());
    assert_eq!(h.navbar.dropdown_top(), Some(96.0));
    assert_eq!(h.event_loop.listener_count(), 4);
}

#[test]
fn scrolling_past_hero_hides_bar() {
    let h = Harness::home();
    h.scroll_to(704.0);
    assert!(h.navbar.is_visible());
    h.scroll_to(705.0);
    assert!(!h.navbar.is_visible());
    assert!(!h.navbar.presentation().is_interactive());
    assert!(h.document.borrow().navbar_sliding());
}

#[test]
fn scroll_measurement_is_coalesced_into_one_frame() {
    let h = Harness::home();
    for y in [10.0, 20.0, 30.0, 40.0] {
        h.scroll_to(y);
    }
    assert_eq!(h.event_loop.pending_frames(), 1);
    assert_eq!(h.event_loop.run_animation_frame(), 1);
    assert_eq!(h.navbar.dropdown_top(), Some(96.0));
    h.scroll_to(50.0);
    assert_eq!(h.event_loop.pending_frames(), 1);
}

#[test]
fn transition_end_settles_dropdown_under_hidden_bar() {
    let h = Harness::home();
    h.scroll_to(1000.0);
    h.event_loop.run_animation_frame();
    assert_eq!(h.event_loop.pending_timers(), 0);

    h.finish_slide();
    assert_eq!(h.navbar.dropdown_top(), Some(0.0));
}

#[test]
fn delay_strategy_settles_on_timer() {
    let h = Harness::mount("/", SettleStrategy::Delay(DEFAULT_SETTLE_DELAY));
    h.scroll_to(1000.0);
    assert_eq!(h.event_loop.pending_timers(), 1);

    h.document.borrow_mut().tick(Duration::from_secs(60));
    assert_eq!(h.event_loop.advance_to(Duration::from_millis(99)), 0);
    assert_eq!(h.event_loop.advance_to(Duration::from_millis(100)), 1);
    assert_eq!(h.navbar.dropdown_top(), Some(0.0));
    assert_eq!(h.event_loop.pending_timers(), 0);
}

#[test]
fn showing_again_restores_dropdown_top() {
    let h = Harness::home();
    h.scroll_to(1000.0);
    h.finish_slide();
    h.scroll_to(0.0);
    assert!(h.navbar.is_visible());
    h.finish_slide();
    assert_eq!(h.navbar.dropdown_top(), Some(96.0));
}

#[test]
fn resize_remeasures_immediately() {
    let h = Harness::home();
    h.scroll_to(1000.0);
    h.document.borrow_mut().tick(Duration::from_secs(60));
    h.event_loop.dispatch(&PageEvent::Resize {
        width: 1024.0,
        height: 768.0,
    });
    assert_eq!(h.navbar.dropdown_top(), Some(0.0));
}

#[test]
fn hovering_trigger_opens_panel_at_dropdown_top() {
    let h = Harness::home();
    h.pointer(170.0, 10.0);
    assert_eq!(h.navbar.hovered(), Some(key("industries")));
    let panel = h.navbar.open_panel().unwrap();
    assert_eq!(panel.key, key("industries"));
    assert_eq!(panel.rect.top, 96.0);
}

#[test]
fn moving_into_panel_keeps_it_open() {
    let h = Harness::home();
    h.pointer(170.0, 10.0);
    h.pointer(600.0, 150.0);
    assert_eq!(h.navbar.hovered(), Some(key("industries")));
    h.pointer(600.0, 700.0);
    assert_eq!(h.navbar.hovered(), None);
    assert_eq!(h.navbar.open_panel(), None);
}

#[test]
fn hovering_another_trigger_switches_directly() {
    let h = Harness::home();
    h.pointer(170.0, 10.0);
    h.pointer(300.0, 10.0);
    assert_eq!(h.navbar.hovered(), Some(key("solutions")));
}

#[test]
fn item_without_panel_hovers_but_shows_nothing() {
    let h = Harness::home();
    h.pointer(500.0, 10.0);
    assert_eq!(h.navbar.hovered(), Some(key("careers")));
    assert_eq!(h.navbar.open_panel(), None);
}

#[test]
fn hidden_bar_ignores_pointer_and_closes_panel() {
    let h = Harness::home();
    h.pointer(170.0, 10.0);
    h.scroll_to(1000.0);
    assert_eq!(h.navbar.hovered(), None);

    h.pointer(170.0, 10.0);
    assert_eq!(h.navbar.hovered(), None);
    assert_eq!(h.navbar.link_at(Point::new(170.0, 10.0)), None);
}

#[test]
fn clicks_resolve_panel_links_and_triggers() {
    let h = Harness::home();
    h.pointer(170.0, 10.0);
    assert_eq!(
        h.navbar.link_at(Point::new(500.0, 96.0 + 32.0 + 5.0)),
        Some(RoutePath::new("/industries/healthcare").unwrap())
    );
    assert_eq!(
        h.navbar.link_at(Point::new(500.0, 10.0)),
        Some(RoutePath::new("/careers").unwrap())
    );
    assert_eq!(h.navbar.link_at(Point::new(50.0, 10.0)), None);
}

#[test]
fn close_menu_reports_whether_anything_closed() {
    let h = Harness::home();
    assert!(!h.navbar.close_menu());
    h.pointer(170.0, 10.0);
    assert!(h.navbar.close_menu());
    assert_eq!(h.navbar.hovered(), None);
}

#[test]
fn page_without_hero_keeps_bar_visible() {
    let h = Harness::mount("/contact", SettleStrategy::TransitionEnd);
    for y in [0.0, 500.0, 1000.0] {
        h.scroll_to(y);
        assert!(h.navbar.is_visible());
    }
}

#[test]
fn mounting_below_hero_starts_hidden() {
    let site = SiteCatalog::neuroverse();
    let page = site.page(&RoutePath::root()).cloned().unwrap();
    let event_loop = EventLoop::new();
    let document = Rc::new(RefCell::new(Document::new(
        page,
        Viewport::new(1280.0, 800.0),
    )));
    document.borrow_mut().set_scroll(ScrollY::new(1500.0));
    let navbar = Navbar::mount(
        &event_loop,
        Rc::clone(&document),
        site.menu().clone(),
        NavbarOptions::default(),
    );
    assert!(!navbar.is_visible());
}

#[test]
fn unmount_releases_everything() {
    let h = Harness::mount("/", SettleStrategy::Delay(DEFAULT_SETTLE_DELAY));
    h.scroll_to(1000.0);
    assert_eq!(h.event_loop.pending_frames(), 1);
    assert_eq!(h.event_loop.pending_timers(), 1);

    let Harness {
        event_loop,
        document,
        navbar,
    } = h;
    navbar.unmount();

    assert_eq!(event_loop.listener_count(), 0);
    assert_eq!(event_loop.pending_frames(), 0);
    assert_eq!(event_loop.pending_timers(), 0);
    assert!(!document.borrow().has_navbar());
}

#[test]
fn events_after_unmount_change_nothing() {
    let h = Harness::home();
    let Harness {
        event_loop,
        document,
        navbar,
    } = h;
    navbar.unmount();

    document.borrow_mut().set_scroll(ScrollY::new(2000.0));
    assert_eq!(
        event_loop.dispatch(&PageEvent::Scroll(ScrollY::new(2000.0))),
        0
    );
    event_loop.dispatch(&PageEvent::PointerMove(Point::new(170.0, 10.0)));
    event_loop.dispatch(&PageEvent::TransitionEnd);
    assert_eq!(event_loop.run_animation_frame(), 0);
    assert!(!document.borrow().navbar_sliding());
}
