//! The navigation bar and its mega-menu panel.
//!
//! Both are placed with the same geometry the controllers hit test against,
//! so a hidden bar slides off the top row by row and the panel hangs from the
//! measured dropdown top.

use super::{layout::PixelScale, ChromeStyles};
use crate::model::BoundingRect;
use crate::nav::layout::{panel_columns, panel_link_rects, LOGO_WIDTH, PANEL_LINE_HEIGHT};
use crate::site::Site;
use crate::state::LayoutProbe;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

/// Brand shown at the left of the bar.
pub const LOGO_TEXT: &str = "◆ NeuroVerse";

fn middle_row(rect: Rect) -> Rect {
    Rect::new(rect.x, rect.y + rect.height / 2, rect.width, rect.height.min(1))
}

/// Render the bar at its current slide position.
pub fn render_navbar(
    frame: &mut Frame,
    area: Rect,
    site: &Site,
    scale: PixelScale,
    styles: &ChromeStyles,
) {
    let Some(bar) = site.document().navbar_rect() else {
        return;
    };
    let Some(bar_cells) = scale.to_cells(bar, area) else {
        return;
    };

    frame.render_widget(Clear, bar_cells);
    frame.render_widget(Block::default().style(styles.navbar), bar_cells);

    let logo = BoundingRect::new(bar.left, bar.top, LOGO_WIDTH, bar.height);
    if let Some(cells) = scale.to_cells(logo, area) {
        frame.render_widget(
            Paragraph::new(Span::styled(LOGO_TEXT, styles.logo)).alignment(Alignment::Center),
            middle_row(cells),
        );
    }

    let navbar = site.navbar();
    let hovered = navbar.hovered();
    let active = site.active_menu_key();
    let menu = site.catalog().menu();

    for (key, rect) in navbar.trigger_rects() {
        let Some(cells) = scale.to_cells(rect, area) else {
            continue;
        };
        let Some(item) = menu.get(&key) else {
            continue;
        };
        let style = if hovered.as_ref() == Some(&key) {
            styles.trigger_hovered
        } else if active.as_ref() == Some(&key) {
            styles.trigger_active
        } else {
            styles.trigger
        };
        let label = if item.panel.is_some() {
            format!("{} ▾", item.label)
        } else {
            item.label.clone()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
            middle_row(cells),
        );
    }
}

/// Render the open mega-menu panel, if any.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    site: &Site,
    scale: PixelScale,
    styles: &ChromeStyles,
) {
    let Some(open) = site.navbar().open_panel() else {
        return;
    };
    let menu = site.catalog().menu();
    let (Some(item), Some(content)) = (menu.get(&open.key), menu.panel(&open.key)) else {
        return;
    };
    let Some(panel_cells) = scale.to_cells(open.rect, area) else {
        return;
    };

    frame.render_widget(Clear, panel_cells);
    frame.render_widget(Block::default().style(styles.panel), panel_cells);

    // Column bodies stop above the last line, which holds the column links.
    let [promo, links, featured] = panel_columns(open.rect);
    let body = |column: BoundingRect| {
        BoundingRect::new(
            column.left + scale.px_per_col,
            column.top,
            column.width - 2.0 * scale.px_per_col,
            column.height - PANEL_LINE_HEIGHT,
        )
    };

    let columns = [
        (promo, &content.promo.title, Some(&content.promo.blurb)),
        (links, &item.label, None),
        (featured, &content.featured.title, Some(&content.featured.summary)),
    ];
    for (column, heading, text) in columns {
        let Some(cells) = scale.to_cells(body(column), area) else {
            continue;
        };
        let mut lines = vec![Line::from(Span::styled(heading.clone(), styles.panel_heading))];
        if let Some(text) = text {
            lines.push(Line::from(Span::styled(text.clone(), styles.panel)));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), cells);
    }

    for (rect, link) in panel_link_rects(open.rect, content) {
        let inset = BoundingRect::new(
            rect.left + scale.px_per_col,
            rect.top,
            rect.width - 2.0 * scale.px_per_col,
            rect.height,
        );
        if let Some(cells) = scale.to_cells(inset, area) {
            frame.render_widget(
                Paragraph::new(Span::styled(format!("→ {}", link.label), styles.link)),
                middle_row(cells),
            );
        }
    }
}
