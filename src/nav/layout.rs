//! Geometry of the navigation bar and its mega-menu panel.
//!
//! Hit testing and rendering both place triggers, the panel and the panel's
//! links with these functions, so what the user sees is what they can hover.

use crate::model::{BoundingRect, MegaMenuPanel, MenuKey, MenuLink, NavMenu};

/// Space reserved for the logo at the left of the bar.
pub const LOGO_WIDTH: f64 = 160.0;

/// Width of each top-level trigger.
pub const TRIGGER_WIDTH: f64 = 112.0;

/// Height of the open mega-menu panel.
pub const PANEL_HEIGHT: f64 = 256.0;

/// Height of one line inside the panel.
pub const PANEL_LINE_HEIGHT: f64 = 32.0;

/// Trigger rectangles for every menu item, left to right, inside `bar`.
pub fn trigger_rects(bar: BoundingRect, menu: &NavMenu) -> Vec<(MenuKey, BoundingRect)> {
    menu.items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let left = bar.left + LOGO_WIDTH + TRIGGER_WIDTH * index as f64;
            (
                item.key.clone(),
                BoundingRect::new(left, bar.top, TRIGGER_WIDTH, bar.height),
            )
        })
        .collect()
}

/// The panel, full width, hanging from `top`.
pub fn panel_rect(top: f64, width: f64) -> BoundingRect {
    BoundingRect::new(0.0, top, width, PANEL_HEIGHT)
}

/// The panel's three columns: promo, links, featured.
pub fn panel_columns(panel: BoundingRect) -> [BoundingRect; 3] {
    let width = panel.width / 3.0;
    [0.0, 1.0, 2.0]
        .map(|i| BoundingRect::new(panel.left + width * i, panel.top, width, panel.height))
}

/// Clickable links inside an open panel, each with its rectangle.
///
/// The link column lists one link per line below its heading; the promo
/// call-to-action and the featured link sit on the last line of their
/// columns.
pub fn panel_link_rects(
    panel: BoundingRect,
    content: &MegaMenuPanel,
) -> Vec<(BoundingRect, &MenuLink)> {
    let [promo, links, featured] = panel_columns(panel);
    let last_line = panel.top + panel.height - PANEL_LINE_HEIGHT;

    let mut rects: Vec<(BoundingRect, &MenuLink)> = content
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let top = links.top + PANEL_LINE_HEIGHT * (i as f64 + 1.0);
            (BoundingRect::new(links.left, top, links.width, PANEL_LINE_HEIGHT), link)
        })
        .collect();
    rects.push((
        BoundingRect::new(promo.left, last_line, promo.width, PANEL_LINE_HEIGHT),
        &content.promo.cta,
    ));
    rects.push((
        BoundingRect::new(featured.left, last_line, featured.width, PANEL_LINE_HEIGHT),
        &content.featured.link,
    ));
    rects
}
