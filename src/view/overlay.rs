//! Toasts and the status bar.

use super::{constants::TOAST_WIDTH, layout::PixelScale, ChromeStyles};
use crate::model::{RoutePath, ScrollY};
use crate::router::Router;
use crate::site::Site;
use crate::state::LayoutProbe;
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};

/// Cells a toast needs: its text plus one cell of padding each side, capped
/// at [`TOAST_WIDTH`].
pub fn toast_width(message: &str) -> u16 {
    let text = u16::try_from(message.width()).unwrap_or(u16::MAX);
    text.saturating_add(2).min(TOAST_WIDTH)
}

/// Stack toasts in the top-right corner, just under the bar.
pub fn render_toasts(
    frame: &mut Frame,
    area: Rect,
    site: &Site,
    scale: PixelScale,
    styles: &ChromeStyles,
) {
    let bar_bottom = site
        .document()
        .navbar_rect()
        .map_or(0.0, |bar| bar.bottom().max(0.0));
    let first_row = area.y + (bar_bottom / scale.px_per_row).round() as u16;

    for (i, toast) in site.toasts().visible().enumerate() {
        let y = first_row + i as u16;
        if y >= area.bottom() {
            break;
        }
        let width = toast_width(&toast.message).min(area.width);
        let cells = Rect::new(area.right() - width, y, width, 1);
        frame.render_widget(Clear, cells);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", toast.message), styles.toast(toast.kind)))
                .style(styles.toast(toast.kind)),
            cells,
        );
    }
}

const KEY_HINTS: &str = "j/k scroll  tab menu  [ ] history  g top  q quit";

/// Text of the status bar.
pub fn status_line(
    route: &RoutePath,
    scroll: ScrollY,
    navbar_visible: bool,
    dropdown_top: Option<f64>,
) -> String {
    let bar = if navbar_visible { "shown" } else { "hidden" };
    let dropdown = dropdown_top.map_or_else(|| "-".to_string(), |top| format!("{top:.0}px"));
    format!(
        "{route}  y={:.0}px  navbar {bar}  dropdown {dropdown}  |  {KEY_HINTS}",
        scroll.get()
    )
}

/// Render the status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, site: &Site, styles: &ChromeStyles) {
    let line = status_line(
        site.router().current_path(),
        site.document().scroll(),
        site.navbar().is_visible(),
        site.navbar().dropdown_top(),
    );
    frame.render_widget(Paragraph::new(format!(" {line}")).style(styles.status), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_width_pads_and_caps() {
        assert_eq!(toast_width("Saved"), 7);
        assert_eq!(toast_width("送信済み"), 10);
        assert_eq!(toast_width(&"x".repeat(80)), TOAST_WIDTH);
    }

    #[test]
    fn status_line_when_shown() {
        let line = status_line(&RoutePath::root(), ScrollY::new(120.4), true, Some(96.0));
        let (state, hints) = line.split_once("  |  ").unwrap();
        insta::assert_snapshot!(state, @"/  y=120px  navbar shown  dropdown 96px");
        assert_eq!(hints, "j/k scroll  tab menu  [ ] history  g top  q quit");
    }

    #[test]
    fn status_line_when_hidden_before_first_measure() {
        let careers = RoutePath::new("/careers").unwrap();
        let line = status_line(&careers, ScrollY::new(1000.0), false, None);
        assert!(line.starts_with("/careers  y=1000px  navbar hidden  dropdown -"), "{line}");
    }
}
