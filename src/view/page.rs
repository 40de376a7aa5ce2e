//! Page sections, drawn at their scrolled position.

use super::{layout::PixelScale, ChromeStyles};
use crate::model::{BoundingRect, RoutePath};
use crate::site::{Site, TESTIMONIALS};
use crate::widgets::{Carousel, VideoPlayer};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Render every section intersecting `area`.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    site: &Site,
    scale: PixelScale,
    styles: &ChromeStyles,
) {
    let document = site.document();
    let scroll = document.scroll().get();
    let width = document.viewport().width;
    let page = document.page();
    let is_home = page.route == RoutePath::root();

    for (index, section) in page.layout.sections().iter().enumerate() {
        let Some(top) = page.layout.section_top(index) else {
            continue;
        };
        let rect = BoundingRect::new(0.0, top - scroll, width, f64::from(section.height));
        let Some(cells) = scale.to_cells(rect, area) else {
            continue;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.section)
            .title(Span::styled(format!(" {} ", section.title), styles.section));

        let body: Vec<Line> = match section.id.as_str() {
            "hero" if is_home => vec![Line::from(vec![
                Span::styled(site.typewriter().text().to_string(), styles.hero),
                Span::styled("▌", styles.hero),
            ])],
            "testimonials" => carousel_lines(site.carousel()),
            "showcase" => vec![Line::from(player_status(site.player(), site.player_focused()))],
            _ => Vec::new(),
        };

        frame.render_widget(
            Paragraph::new(body).block(block).wrap(Wrap { trim: true }),
            cells,
        );
    }
}

fn carousel_lines(carousel: &Carousel) -> Vec<Line<'static>> {
    let quote = TESTIMONIALS
        .get(carousel.index())
        .copied()
        .unwrap_or_default();
    let dots: String = (0..carousel.len())
        .map(|i| if i == carousel.index() { '●' } else { '○' })
        .collect();
    vec![Line::from(quote), Line::from(format!("{dots}   , prev  . next"))]
}

fn clock(t: Duration) -> String {
    let secs = t.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// One-line description of the showcase player.
pub fn player_status(player: &VideoPlayer, focused: bool) -> String {
    let icon = if player.is_playing() { "❚❚" } else { "▶" };
    let volume = (player.volume() * 100.0).round() as u8;
    let mut line = format!(
        "{icon} {} / {}  vol {volume}%",
        clock(player.position()),
        clock(player.duration())
    );
    if player.is_muted() {
        line.push_str(" (muted)");
    }
    if player.is_fullscreen() {
        line.push_str(" [fullscreen]");
    }
    if focused {
        line.push_str("  space/k play  ←/→ j/l seek  ↑/↓ vol  m f 0-9  esc done");
    } else {
        line.push_str("  v to control");
    }
    line
}
