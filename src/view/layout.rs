//! Pixel to cell mapping and top-level frame layout.
//!
//! The site works in CSS pixels; the terminal in cells. One row stands for
//! `px_per_row` pixels and one column for [`PX_PER_COL`] pixels, so the
//! viewport the document sees is the terminal area scaled up.

use crate::model::{BoundingRect, Point};
use crate::runtime::Viewport;
use crate::site::Site;
use crate::view::constants::{PX_PER_COL, STATUS_BAR_HEIGHT};
use crate::view::{navbar, overlay, page, ChromeStyles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Size of one terminal cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    /// Pixels per row.
    pub px_per_row: f64,
    /// Pixels per column.
    pub px_per_col: f64,
}

impl PixelScale {
    /// Scale with `px_per_row` and the default column width.
    pub fn new(px_per_row: f64) -> Self {
        Self {
            px_per_row,
            px_per_col: PX_PER_COL,
        }
    }

    /// The pixel viewport covered by `area`.
    pub fn viewport(&self, area: Rect) -> Viewport {
        Viewport::new(
            f64::from(area.width) * self.px_per_col,
            f64::from(area.height) * self.px_per_row,
        )
    }

    /// Centre of cell (`column`, `row`) in viewport pixels, or `None` when the
    /// cell lies outside `area`.
    pub fn cell_center(&self, area: Rect, column: u16, row: u16) -> Option<Point> {
        if !area.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        Some(Point::new(
            (f64::from(column - area.x) + 0.5) * self.px_per_col,
            (f64::from(row - area.y) + 0.5) * self.px_per_row,
        ))
    }

    /// Cells covered by a viewport rectangle, clipped to `area`.
    pub fn to_cells(&self, rect: BoundingRect, area: Rect) -> Option<Rect> {
        let rows = |px: f64| (px / self.px_per_row).round();
        let cols = |px: f64| (px / self.px_per_col).round();

        let top = rows(rect.top).max(0.0);
        let bottom = rows(rect.bottom()).min(f64::from(area.height));
        let left = cols(rect.left).max(0.0);
        let right = cols(rect.right()).min(f64::from(area.width));
        if bottom <= top || right <= left {
            return None;
        }
        // Bounded by the u16 area above.
        Some(Rect::new(
            area.x + left as u16,
            area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}

/// Split the frame into the page body and the status bar.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the whole preview: page, navbar, open panel, toasts, status bar.
pub fn render_layout(frame: &mut Frame, site: &Site, scale: PixelScale, styles: &ChromeStyles) {
    let (body, status) = split(frame.area());

    page::render_page(frame, body, site, scale, styles);
    navbar::render_navbar(frame, body, site, scale, styles);
    navbar::render_panel(frame, body, site, scale, styles);
    overlay::render_toasts(frame, body, site, scale, styles);
    overlay::render_status_bar(frame, status, site, styles);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
