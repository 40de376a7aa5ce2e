//! Terminal preview of the site chrome (impure shell).
//!
//! The mounted [`Site`] is pure; this module owns the terminal, turns
//! crossterm input into site calls and drives [`Site::tick`] from a wall
//! clock.

pub mod constants;
pub mod layout;
mod navbar;
mod overlay;
mod page;
mod styles;

pub use layout::{render_layout, PixelScale};
pub use overlay::status_line;
pub use page::player_status;
pub use styles::{ChromeStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::contact::LogEndpoint;
use crate::model::{AppError, KeyAction, RequestType, RoutePath};
use crate::page::SiteCatalog;
use crate::router::Router;
use crate::site::{Site, SiteSettings};
use constants::FRAME_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fraction of the viewport moved by a page scroll.
const PAGE_FRACTION: f64 = 0.9;

/// Errors that can occur while running the preview.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// The interactive preview.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct PreviewApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    site: Site,
    key_bindings: KeyBindings,
    styles: ChromeStyles,
    scale: PixelScale,
    scroll_step: f64,
    body: Rect,
    started: Instant,
}

impl PreviewApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen and mount the site.
    ///
    /// The terminal is restored before returning an error.
    pub fn new(config: &ResolvedConfig, color: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let app = Self::enter_and_mount(config, color);
        if app.is_err() {
            if let Err(err) = restore_terminal() {
                warn!(error = %err, "Could not restore terminal");
            }
        }
        app
    }

    fn enter_and_mount(config: &ResolvedConfig, color: ColorConfig) -> Result<Self, TuiError> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, config, ChromeStyles::with_color_config(color))
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
                self.tick(self.started.elapsed());
                self.draw()?;
                continue;
            }

            if self.tick(self.started.elapsed()) {
                self.draw()?;
            }
        }
    }
}

impl<B> PreviewApp<B>
where
    B: Backend,
{
    /// Mount the site on an existing terminal.
    ///
    /// # Errors
    ///
    /// [`AppError`] when the configured start route is malformed or unknown.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        styles: ChromeStyles,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let (body, _) = layout::split(Rect::new(0, 0, size.width.max(1), size.height));
        let scale = PixelScale::new(config.px_per_row);

        let start = RoutePath::new(&config.start_route).map_err(AppError::from)?;
        let settings = SiteSettings {
            navbar: config.navbar_options(),
            scroll_to_top: config.scroll_to_top_duration(),
            embedded: config.embedded,
        };
        let site = Site::new(SiteCatalog::neuroverse(), start, scale.viewport(body), settings)?;

        Ok(Self {
            terminal,
            site,
            key_bindings: KeyBindings::default(),
            styles,
            scale,
            scroll_step: config.scroll_step_px,
            body,
            started: Instant::now(),
        })
    }

    /// The mounted site.
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The terminal, for inspecting the last frame.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the preview should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if self.site.player_focused() {
            if key.code == KeyCode::Esc {
                self.site.set_player_focused(false);
            } else {
                self.site.player_mut().handle_key(key);
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        let page = self.site.document().viewport().height * PAGE_FRACTION;
        match action {
            KeyAction::ScrollUp => {
                self.site.scroll_by(-self.scroll_step);
            }
            KeyAction::ScrollDown => {
                self.site.scroll_by(self.scroll_step);
            }
            KeyAction::PageUp => {
                self.site.scroll_by(-page);
            }
            KeyAction::PageDown => {
                self.site.scroll_by(page);
            }
            KeyAction::ScrollToTop => self.site.scroll_to_top(),
            KeyAction::ScrollToBottom => {
                self.site.scroll_to_bottom();
            }
            KeyAction::HistoryBack => {
                self.site.back();
            }
            KeyAction::HistoryForward => {
                self.site.forward();
            }
            KeyAction::FocusNextMenu => {
                self.site.focus_menu(1);
            }
            KeyAction::FocusPrevMenu => {
                self.site.focus_menu(-1);
            }
            KeyAction::CloseMenu => {
                self.site.close_menu();
            }
            KeyAction::FocusPlayer => self.site.set_player_focused(true),
            KeyAction::CarouselNext => self.site.carousel_mut().next(),
            KeyAction::CarouselPrev => self.site.carousel_mut().prev(),
            KeyAction::SendContact => self.send_sample_contact(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Handle a single mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.site.scroll_by(self.scroll_step);
            }
            MouseEventKind::ScrollUp => {
                self.site.scroll_by(-self.scroll_step);
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let Some(point) = self.scale.cell_center(self.body, mouse.column, mouse.row) else {
                    return;
                };
                self.site.pointer_move(point);
                let over_testimonials = {
                    let document = self.site.document();
                    let layout = &document.page().layout;
                    layout
                        .section_at(document.scroll().get() + point.y)
                        .and_then(|index| layout.sections().get(index))
                        .is_some_and(|section| section.id.as_str() == "testimonials")
                };
                self.site.carousel_mut().set_hovered(over_testimonials);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(point) = self.scale.cell_center(self.body, mouse.column, mouse.row) {
                    if let Some(path) = self.site.click(point) {
                        info!(route = %path, "Followed link");
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        let (body, _) = layout::split(Rect::new(0, 0, width.max(1), height));
        self.body = body;
        self.site.resize(self.scale.viewport(body));
    }

    /// Advance the site clock. Returns true when a redraw is due.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.site.tick(now)
    }

    /// Render the current frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let site = &self.site;
        let scale = self.scale;
        let styles = &self.styles;
        self.terminal.draw(|frame| render_layout(frame, site, scale, styles))?;
        Ok(())
    }

    fn send_sample_contact(&mut self) {
        if self.site.router().current_path().as_str() != "/contact" {
            return;
        }
        {
            let form = self.site.contact_form_mut();
            form.name = "Preview Visitor".into();
            form.email = "visitor@example.com".into();
            form.company = "NeuroVerse".into();
            form.phone = "555-0100".into();
            form.message = "Requesting a product demo.".into();
            form.request_type = RequestType::Demo;
        }
        if let Err(err) = self.site.submit_contact(&mut LogEndpoint) {
            debug!(error = %err, "Sample contact request not sent");
        }
    }
}

/// Mount the site in the terminal and run the preview.
///
/// Terminal state is restored even when the run fails. Logging must be
/// initialized by the caller.
pub fn run_preview(config: &ResolvedConfig, color: ColorConfig) -> Result<(), TuiError> {
    let mut app = PreviewApp::new(config, color)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state.
///
/// Disables raw mode, mouse capture, and leaves alternate screen.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app_at(route: &str) -> PreviewApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(160, 26)).unwrap();
        let config = ResolvedConfig {
            start_route: route.to_string(),
            ..ResolvedConfig::default()
        };
        let styles = ChromeStyles::with_color_config(ColorConfig::fixed(false));
        PreviewApp::with_terminal(terminal, &config, styles).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(app: &PreviewApp<TestBackend>) -> String {
        let buffer = app.terminal().backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn tui_error_from_io_error() {
        let tui_err: TuiError = io::Error::other("test error").into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn malformed_start_route_is_an_app_error() {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let config = ResolvedConfig {
            start_route: "careers".to_string(),
            ..ResolvedConfig::default()
        };
        let result = PreviewApp::with_terminal(terminal, &config, ChromeStyles::default());
        assert!(matches!(result, Err(TuiError::App(AppError::InvalidRoute(_)))));
    }

    #[test]
    fn viewport_follows_body_area() {
        let app = app_at("/");
        let viewport = app.site().document().viewport();
        assert_eq!(viewport.width, 1280.0);
        assert_eq!(viewport.height, 800.0);
    }

    #[test]
    fn q_quits_and_other_keys_do_not() {
        let mut app = app_at("/");
        assert!(!app.handle_key(press(KeyCode::Char('x'))));
        assert!(app.handle_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn released_keys_are_ignored() {
        let mut app = app_at("/");
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert!(!app.handle_key(key));
    }

    #[test]
    fn scroll_keys_move_the_document() {
        let mut app = app_at("/");
        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.site().document().scroll().get(), 64.0);

        app.handle_key(press(KeyCode::PageDown));
        assert_eq!(app.site().document().scroll().get(), 64.0 + 720.0);
        assert!(!app.site().navbar().is_visible());

        app.handle_key(press(KeyCode::End));
        assert_eq!(app.site().document().scroll().get(), 2800.0);
    }

    #[test]
    fn player_focus_captures_keys_until_esc() {
        let mut app = app_at("/");
        app.handle_key(press(KeyCode::Char('v')));
        assert!(app.site().player_focused());

        assert!(
            !app.handle_key(press(KeyCode::Char('q'))),
            "q is not quit while the player has focus"
        );
        app.handle_key(press(KeyCode::Char(' ')));
        assert!(app.site().player().is_playing());

        app.handle_key(press(KeyCode::Esc));
        assert!(!app.site().player_focused());
    }

    #[test]
    fn enter_sends_contact_only_on_contact_page() {
        let mut app = app_at("/");
        app.handle_key(press(KeyCode::Enter));
        assert!(app.site().toasts().is_empty());

        let mut app = app_at("/contact");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.site().toasts().len(), 1);
        assert!(app.site().contact_form().is_empty());
    }

    #[test]
    fn hovering_first_trigger_opens_its_panel() {
        let mut app = app_at("/");
        // Column 27, row 1 is the centre cell of the first trigger.
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 27,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.site().navbar().open_panel().is_some());
    }

    #[test]
    fn wheel_scrolls_by_step() {
        let mut app = app_at("/");
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.site().document().scroll().get(), 64.0);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut app = app_at("/");
        app.handle_resize(100, 11);
        let viewport = app.site().document().viewport();
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 320.0);
    }

    #[test]
    fn draw_renders_bar_and_status() {
        let mut app = app_at("/");
        app.draw().unwrap();
        let screen = screen(&app);
        assert!(screen.contains("◆ NeuroVerse"), "{screen}");
        assert!(screen.contains("navbar shown"), "{screen}");
    }

    #[test]
    fn hidden_bar_is_not_drawn() {
        let mut app = app_at("/");
        app.handle_key(press(KeyCode::PageDown));
        app.tick(Duration::from_millis(400));
        app.draw().unwrap();
        let screen = screen(&app);
        assert!(!screen.contains("◆ NeuroVerse"), "{screen}");
        assert!(screen.contains("navbar hidden"), "{screen}");
    }
}
