//! Pages, their section layout, and hero registration.

pub mod catalog;
pub mod hero;
pub mod layout;
pub mod offset_index;

pub use catalog::{PageDefinition, SiteCatalog};
pub use hero::{resolve_hero, HeroAnchor};
pub use layout::{PageLayout, Section};
