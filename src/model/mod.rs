//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod contact;
pub mod error;
pub mod geometry;
pub mod identifiers;
pub mod key_action;
pub mod menu;

// Re-export for convenience
pub use contact::{ContactPayload, RequestType};
pub use error::AppError;
pub use geometry::{BoundingRect, HeroRegion, Point, ScrollY};
pub use identifiers::{
    InvalidMenuKey, InvalidRoutePath, InvalidSectionId, MenuKey, RoutePath, SectionId,
};
pub use key_action::KeyAction;
pub use menu::{FeaturedPanel, MegaMenuPanel, MenuItem, MenuLink, NavMenu, PromoPanel};
