//! Colors for the preview chrome.

use crate::state::ToastKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether output is colored.
///
/// Disabled by `--no-color` or a `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors forced on or off.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ChromeStyles =====

/// Styles for the navbar, menus, page and overlays.
///
/// Without color, emphasis falls back to bold and reversed text so hovered
/// and active items stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeStyles {
    /// Bar background.
    pub navbar: Style,
    /// Logo text.
    pub logo: Style,
    /// Idle trigger.
    pub trigger: Style,
    /// Trigger under the pointer.
    pub trigger_hovered: Style,
    /// Trigger for the current route.
    pub trigger_active: Style,
    /// Mega-menu panel.
    pub panel: Style,
    /// Panel column headings.
    pub panel_heading: Style,
    /// Links inside the panel.
    pub link: Style,
    /// Section borders and titles.
    pub section: Style,
    /// Hero headline.
    pub hero: Style,
    /// Success toast.
    pub toast_success: Style,
    /// Error toast.
    pub toast_error: Style,
    /// Status bar.
    pub status: Style,
}

impl ChromeStyles {
    /// Styles for `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                navbar: Style::default().bg(Color::Black).fg(Color::White),
                logo: bold.fg(Color::Cyan),
                trigger: Style::default().fg(Color::White),
                trigger_hovered: bold.fg(Color::Black).bg(Color::Cyan),
                trigger_active: bold.fg(Color::Cyan),
                panel: Style::default().bg(Color::Black).fg(Color::Gray),
                panel_heading: bold.fg(Color::Magenta),
                link: Style::default().fg(Color::Cyan),
                section: Style::default().fg(Color::DarkGray),
                hero: bold.fg(Color::Yellow),
                toast_success: Style::default().fg(Color::Black).bg(Color::Green),
                toast_error: Style::default().fg(Color::White).bg(Color::Red),
                status: Style::default().fg(Color::Black).bg(Color::Gray),
            }
        } else {
            let reversed = Style::default().add_modifier(Modifier::REVERSED);
            Self {
                navbar: Style::default(),
                logo: bold,
                trigger: Style::default(),
                trigger_hovered: reversed,
                trigger_active: bold,
                panel: Style::default(),
                panel_heading: bold,
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                section: Style::default(),
                hero: bold,
                toast_success: reversed,
                toast_error: reversed.add_modifier(Modifier::BOLD),
                status: reversed,
            }
        }
    }

    /// Style for a toast.
    pub fn toast(&self, kind: ToastKind) -> Style {
        match kind {
            ToastKind::Success => self.toast_success,
            ToastKind::Error => self.toast_error,
        }
    }
}

impl Default for ChromeStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
