//! Hero landmark registration and resolution.
//!
//! Each page declares how its hero is found instead of the controller guessing
//! from the URL. Resolution never fails loudly: an unresolvable anchor yields
//! `None`, which the visibility controller treats as "keep the bar visible".

use super::layout::PageLayout;
use crate::model::{HeroRegion, SectionId};
use tracing::debug;

/// How a page locates its hero section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeroAnchor {
    /// The section carrying `id`.
    Landmark {
        /// Landmark element id.
        id: SectionId,
        /// Use the first section when the landmark is missing.
        fallback_to_first: bool,
    },
    /// The page's first section acts as its hero.
    FirstSection,
    /// The page has no hero; the navbar always stays visible.
    #[default]
    None,
}

impl HeroAnchor {
    /// Landmark anchor without fallback.
    pub fn landmark(id: SectionId) -> Self {
        Self::Landmark {
            id,
            fallback_to_first: false,
        }
    }

    /// Landmark anchor that falls back to the first section.
    pub fn landmark_or_first(id: SectionId) -> Self {
        Self::Landmark {
            id,
            fallback_to_first: true,
        }
    }
}

/// Resolve the hero region of `layout` according to `anchor`.
///
/// Returns `None` when nothing resolves; callers fail open.
pub fn resolve_hero(layout: &PageLayout, anchor: &HeroAnchor) -> Option<HeroRegion> {
    match anchor {
        HeroAnchor::Landmark {
            id,
            fallback_to_first,
        } => match layout.position(id) {
            Some(index) => layout.region(index),
            None if *fallback_to_first => {
                debug!(landmark = %id, "Hero landmark missing, using first section");
                layout.region(0)
            }
            None => {
                debug!(landmark = %id, "Hero landmark missing");
                None
            }
        },
        HeroAnchor::FirstSection => layout.region(0),
        HeroAnchor::None => None,
    }
}
