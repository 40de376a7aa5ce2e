//! Property-based tests for the navbar visibility rule.
//!
//! Tests validate:
//! 1. `is_in_hero` is exactly the `0 <= y <= hero.bottom - navbar_height` band
//! 2. A missing hero always keeps the bar visible
//! 3. The controller reports a transition exactly when the answer flips,
//!    and transitions alternate

use neuroverse_nav::model::{HeroRegion, ScrollY};
use neuroverse_nav::state::{is_in_hero, VisibilityController, VisibilityTransition, NAVBAR_HEIGHT};
use proptest::prelude::*;

// ===== Property 1: Hero band =====

proptest! {
    #[test]
    fn in_hero_matches_band(
        top in -500.0f64..500.0,
        height in 0.0f64..4000.0,
        y in -1000.0f64..6000.0,
    ) {
        let hero = HeroRegion::from_offset(top, height);
        let expected = y >= 0.0 && y <= hero.bottom - NAVBAR_HEIGHT;
        prop_assert_eq!(is_in_hero(ScrollY::new(y), Some(hero), NAVBAR_HEIGHT), expected);
    }

    #[test]
    fn deeper_scroll_never_reenters_hero(
        height in 100.0f64..4000.0,
        a in 0.0f64..6000.0,
        b in 0.0f64..6000.0,
    ) {
        let hero = Some(HeroRegion::from_offset(0.0, height));
        let (shallow, deep) = if a <= b { (a, b) } else { (b, a) };
        if !is_in_hero(ScrollY::new(shallow), hero, NAVBAR_HEIGHT) {
            prop_assert!(!is_in_hero(ScrollY::new(deep), hero, NAVBAR_HEIGHT));
        }
    }
}

// ===== Property 2: Fail open =====

proptest! {
    #[test]
    fn missing_hero_is_always_visible(y in proptest::num::f64::ANY) {
        prop_assert!(is_in_hero(ScrollY::new(y), None, NAVBAR_HEIGHT));
    }
}

// ===== Property 3: Transitions =====

proptest! {
    #[test]
    fn transitions_follow_flips(
        height in 200.0f64..2000.0,
        ticks in prop::collection::vec(0.0f64..3000.0, 1..64),
    ) {
        let hero = Some(HeroRegion::from_offset(0.0, height));
        let mut controller = VisibilityController::default();
        let mut previous = true;
        let mut last_transition = None;

        for y in ticks {
            let scroll = ScrollY::new(y);
            let now = is_in_hero(scroll, hero, NAVBAR_HEIGHT);
            let transition = controller.observe(scroll, hero);

            if now == previous {
                prop_assert_eq!(transition, None);
            } else {
                let expected = if now {
                    VisibilityTransition::Shown
                } else {
                    VisibilityTransition::Hidden
                };
                prop_assert_eq!(transition, Some(expected));
                prop_assert_ne!(Some(expected), last_transition);
                last_transition = Some(expected);
            }
            prop_assert_eq!(controller.is_visible(), now);
            previous = now;
        }
    }
}
