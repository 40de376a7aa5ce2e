//! Navigation menu model: top-level items and their mega-menu panels.

use super::identifiers::{MenuKey, RoutePath};

/// A navigable link inside the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    /// Visible label.
    pub label: String,
    /// Destination route.
    pub path: RoutePath,
}

impl MenuLink {
    /// Create a link.
    pub fn new(label: impl Into<String>, path: RoutePath) -> Self {
        Self {
            label: label.into(),
            path,
        }
    }
}

/// Left column of a mega-menu: a promotional blurb with a call to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoPanel {
    /// Heading.
    pub title: String,
    /// Short description.
    pub blurb: String,
    /// Call-to-action link.
    pub cta: MenuLink,
}

/// Right column of a mega-menu: one featured piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedPanel {
    /// Heading.
    pub title: String,
    /// Teaser text.
    pub summary: String,
    /// Link to the featured content.
    pub link: MenuLink,
}

/// Dropdown content for a top-level item, laid out in three columns:
/// promo, link list, featured content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MegaMenuPanel {
    /// Promotional column.
    pub promo: PromoPanel,
    /// Middle column links.
    pub links: Vec<MenuLink>,
    /// Featured-content column.
    pub featured: FeaturedPanel,
}

impl MegaMenuPanel {
    /// Every link the panel exposes, in reading order (promo, list, featured).
    pub fn all_links(&self) -> impl Iterator<Item = &MenuLink> {
        std::iter::once(&self.promo.cta)
            .chain(self.links.iter())
            .chain(std::iter::once(&self.featured.link))
    }
}

/// A top-level navigation item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable key used by the hover state machine.
    pub key: MenuKey,
    /// Visible label.
    pub label: String,
    /// Route opened when the trigger itself is activated.
    pub path: RoutePath,
    /// Route subtree for which this item is highlighted as active.
    pub section: RoutePath,
    /// Mega-menu content; `None` for plain links.
    pub panel: Option<MegaMenuPanel>,
}

/// Ordered set of top-level navigation items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavMenu {
    items: Vec<MenuItem>,
}

impl NavMenu {
    /// Build a menu from its items in display order.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by key.
    pub fn get(&self, key: &MenuKey) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    /// Mega-menu panel for `key`, if that item has one.
    pub fn panel(&self, key: &MenuKey) -> Option<&MegaMenuPanel> {
        self.get(key).and_then(|item| item.panel.as_ref())
    }

    /// Key of the item to highlight for `current`.
    ///
    /// The item whose section is the longest prefix of the current path wins,
    /// so nested sections beat their parents.
    pub fn active_key(&self, current: &RoutePath) -> Option<&MenuKey> {
        self.items
            .iter()
            .filter(|item| current.is_within(&item.section))
            .max_by_key(|item| item.section.as_str().len())
            .map(|item| &item.key)
    }
}
