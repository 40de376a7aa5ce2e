//! Tests for the mounted site.

use super::*;
use crate::model::Point;
use crate::runtime::NAVBAR_SLIDE_DURATION;
use crate::scroll::ScrollOptions;
use std::cell::Cell;

fn route(p: &str) -> RoutePath {
    RoutePath::new(p).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn home() -> Site {
    Site::new(
        SiteCatalog::neuroverse(),
        RoutePath::root(),
        Viewport::new(1280.0, 800.0),
        SiteSettings::default(),
    )
    .unwrap()
}

#[test]
fn unknown_start_route_is_rejected() {
    let result = Site::new(
        SiteCatalog::neuroverse(),
        route("/nowhere"),
        Viewport::new(1280.0, 800.0),
        SiteSettings::default(),
    );
    assert!(matches!(result, Err(AppError::UnknownRoute(_))));
}

#[test]
fn scrolling_past_hero_hides_bar_and_settles_dropdown() {
    let mut site = home();
    assert!(site.navbar().is_visible());
    assert_eq!(site.navbar().dropdown_top(), Some(96.0));

    site.scroll_by(900.0);
    assert!(!site.navbar().is_visible());

    site.tick(NAVBAR_SLIDE_DURATION + ms(10));
    assert!(!site.document().navbar_sliding());
    assert_eq!(site.navbar().dropdown_top(), Some(0.0));
}

#[test]
fn navigation_resets_scroll_and_shows_bar() {
    let mut site = home();
    site.scroll_by(1200.0);
    site.tick(ms(400));
    assert!(!site.navbar().is_visible());

    site.navigate(route("/careers")).unwrap();

    assert_eq!(site.page().route, route("/careers"));
    assert_eq!(site.document().scroll(), ScrollY::TOP);
    assert!(site.navbar().is_visible());
}

#[test]
fn unknown_route_keeps_current_page() {
    let mut site = home();
    let err = site.navigate(route("/nowhere")).unwrap_err();
    assert_eq!(err, RouteError::UnknownRoute(route("/nowhere")));
    assert_eq!(site.page().route, RoutePath::root());
}

#[test]
fn history_drives_the_document() {
    let mut site = home();
    site.navigate(route("/industries/finance")).unwrap();
    assert_eq!(site.active_menu_key(), Some(MenuKey::new("industries").unwrap()));

    assert!(site.back());
    assert_eq!(site.page().route, RoutePath::root());
    assert_eq!(site.active_menu_key(), None);

    assert!(site.forward());
    assert_eq!(site.page().route, route("/industries/finance"));
    assert!(!site.forward());
}

#[test]
fn parent_message_navigates_back() {
    let mut site = home();
    site.navigate(route("/insights")).unwrap();
    site.receive_parent_message(r#"{"type":"navigate","direction":"back"}"#);
    assert_eq!(site.page().route, RoutePath::root());

    site.receive_parent_message("not json");
    assert_eq!(site.page().route, RoutePath::root());
}

#[test]
fn scroll_to_top_animates_to_zero() {
    let mut site = home();
    site.scroll_by(1500.0);
    site.scroll_to_top();
    assert!(site.scrolling_to_top());

    site.tick(ms(1250));
    let midway = site.document().scroll().get();
    assert!(midway > 0.0 && midway < 1500.0, "{midway}");

    site.tick(ms(2500));
    assert_eq!(site.document().scroll(), ScrollY::TOP);
    assert!(!site.scrolling_to_top());
    assert!(site.navbar().is_visible());
}

#[test]
fn manual_scroll_cancels_scroll_to_top() {
    let mut site = home();
    site.scroll_by(1500.0);
    site.scroll_to_top();
    site.scroll_by(-100.0);
    assert!(!site.scrolling_to_top());
}

struct CountingScroller {
    targets: Rc<Cell<usize>>,
    active: bool,
}

impl SmoothScroll for CountingScroller {
    fn scroll_to(
        &mut self,
        _from: ScrollY,
        _target: ScrollY,
        _options: ScrollOptions,
        _now: Duration,
    ) {
        self.targets.set(self.targets.get() + 1);
        self.active = true;
    }

    fn tick(&mut self, _now: Duration) -> Option<ScrollY> {
        if std::mem::take(&mut self.active) {
            Some(ScrollY::TOP)
        } else {
            None
        }
    }

    fn is_animating(&self) -> bool {
        self.active
    }

    fn cancel(&mut self) {
        self.active = false;
    }
}

#[test]
fn injected_scroller_is_used() {
    let targets = Rc::new(Cell::new(0));
    let scroller = CountingScroller {
        targets: Rc::clone(&targets),
        active: false,
    };
    let mut site = Site::with_scroller(
        SiteCatalog::neuroverse(),
        RoutePath::root(),
        Viewport::new(1280.0, 800.0),
        SiteSettings::default(),
        Some(Box::new(scroller)),
    )
    .unwrap();

    site.scroll_by(600.0);
    site.scroll_to_top();
    site.tick(ms(16));

    assert_eq!(targets.get(), 1);
    assert_eq!(site.document().scroll(), ScrollY::TOP);
}

#[test]
fn focus_menu_cycles_triggers() {
    let mut site = home();
    let industries = MenuKey::new("industries").unwrap();
    let contact = MenuKey::new("contact").unwrap();

    assert_eq!(site.focus_menu(1), Some(industries.clone()));
    assert_eq!(site.navbar().hovered(), Some(industries.clone()));
    assert!(site.navbar().open_panel().is_some());

    assert_eq!(site.focus_menu(-1), Some(contact.clone()));
    assert_eq!(site.navbar().hovered(), Some(contact));
    assert!(site.navbar().open_panel().is_none());

    assert!(site.close_menu());
    assert_eq!(site.navbar().hovered(), None);
}

#[test]
fn focus_menu_does_nothing_while_hidden() {
    let mut site = home();
    site.scroll_by(1000.0);
    assert_eq!(site.focus_menu(1), None);
}

#[test]
fn clicking_a_trigger_follows_its_link() {
    let mut site = home();
    let followed = site.click(Point::new(216.0, 48.0));
    assert_eq!(followed, Some(route("/industries/healthcare")));
    assert_eq!(site.page().route, route("/industries/healthcare"));

    assert_eq!(site.click(Point::new(10.0, 500.0)), None);
}

#[test]
fn tick_drives_widgets_and_toasts() {
    let mut site = home();
    site.notify(ToastKind::Success, "Saved");
    assert_eq!(site.toasts().len(), 1);

    assert!(site.tick(ms(80)));
    assert_eq!(site.typewriter().text(), "I");

    site.tick(Duration::from_secs(6));
    assert!(site.toasts().is_empty());
    assert_eq!(site.carousel().index(), 1);
}

#[test]
fn player_only_advances_while_playing() {
    let mut site = home();
    site.player_mut().play();
    site.tick(Duration::from_secs(1));
    site.tick(Duration::from_secs(3));
    assert_eq!(site.player().position(), Duration::from_secs(2));
}

#[test]
fn contact_submission_raises_one_toast_and_clears_form() {
    let mut site = home();
    {
        let form = site.contact_form_mut();
        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.phone = "555-0100".into();
        form.message = "Demo please".into();
    }

    site.submit_contact(&mut crate::contact::LogEndpoint).unwrap();

    assert!(site.contact_form().is_empty());
    assert_eq!(site.toasts().len(), 1);
    let toast = site.toasts().visible().next().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn incomplete_contact_form_raises_error_toast() {
    let mut site = home();
    site.contact_form_mut().name = "Ada".into();

    let err = site.submit_contact(&mut crate::contact::LogEndpoint).unwrap_err();

    assert_eq!(err, ContactError::MissingField("email"));
    assert_eq!(site.contact_form().name, "Ada");
    assert_eq!(site.toasts().visible().next().unwrap().kind, ToastKind::Error);
}

#[derive(Default, Clone)]
struct SharedParent {
    posted: Rc<RefCell<Vec<String>>>,
}

impl ParentFrame for SharedParent {
    fn post_message(&mut self, message: &str) -> Result<(), crate::bridge::BridgeError> {
        self.posted.borrow_mut().push(message.to_string());
        Ok(())
    }
}

fn mounted_with(parent: &SharedParent, embedded: bool) -> Site {
    Site::with_collaborators(
        SiteCatalog::neuroverse(),
        RoutePath::root(),
        Viewport::new(1280.0, 800.0),
        SiteSettings {
            embedded,
            ..SiteSettings::default()
        },
        None,
        Box::new(parent.clone()),
    )
    .unwrap()
}

fn route_change(path: &str) -> String {
    format!(r#"{{"type":"iframe-route-change","path":"{path}"}}"#)
}

#[test]
fn embedded_site_posts_each_route_change_once() {
    let parent = SharedParent::default();
    let mut site = mounted_with(&parent, true);
    assert_eq!(*parent.posted.borrow(), vec![route_change("/")]);

    site.navigate(route("/careers")).unwrap();
    site.back();
    site.receive_parent_message(r#"{"type":"navigate","direction":"forward"}"#);

    assert_eq!(
        *parent.posted.borrow(),
        vec![
            route_change("/"),
            route_change("/careers"),
            route_change("/"),
            route_change("/careers"),
        ]
    );
}

#[test]
fn rejected_navigation_posts_nothing() {
    let parent = SharedParent::default();
    let mut site = mounted_with(&parent, true);

    assert!(site.navigate(route("/nowhere")).is_err());
    assert!(!site.back());
    site.receive_parent_message("not json");

    assert_eq!(parent.posted.borrow().len(), 1);
}

#[test]
fn detached_site_never_posts() {
    let parent = SharedParent::default();
    let mut site = mounted_with(&parent, false);

    site.navigate(route("/careers")).unwrap();
    site.back();
    site.receive_parent_message(r#"{"type":"navigate","direction":"forward"}"#);

    assert_eq!(site.page().route, route("/careers"));
    assert!(parent.posted.borrow().is_empty());
}

#[test]
fn settle_timer_measures_the_bar_mid_slide() {
    let mut site = Site::new(
        SiteCatalog::neuroverse(),
        RoutePath::root(),
        Viewport::new(1280.0, 800.0),
        SiteSettings {
            navbar: NavbarOptions {
                settle: crate::state::dropdown::SettleStrategy::Delay(ms(150)),
                ..NavbarOptions::default()
            },
            ..SiteSettings::default()
        },
    )
    .unwrap();

    site.scroll_by(900.0);
    site.tick(ms(1));
    assert!(site.navbar().dropdown_top().is_some_and(|top| top > 90.0));

    site.tick(ms(150));
    assert!(site.document().navbar_sliding());
    assert_eq!(site.navbar().dropdown_top(), Some(48.0));
}
