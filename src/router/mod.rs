//! Routing collaborator.
//!
//! The [`Router`] trait is what the navigation components need from a
//! router: the current path, push navigation and history traversal.
//! [`HistoryRouter`] keeps the history in memory, the way a browser session
//! history works: navigating after going back drops the forward entries.

use crate::model::{AppError, MenuKey, NavMenu, RoutePath};
use thiserror::Error;
use tracing::debug;

/// Routing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No page is registered at the path.
    #[error("no page registered at {0}")]
    UnknownRoute(RoutePath),
}

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::UnknownRoute(path) => AppError::UnknownRoute(path),
        }
    }
}

/// Observer notified with the new path after every route change.
pub type RouteObserver = Box<dyn FnMut(&RoutePath)>;

/// A router.
pub trait Router {
    /// Path currently displayed.
    fn current_path(&self) -> &RoutePath;

    /// Push `path` onto the history and display it.
    fn navigate(&mut self, path: RoutePath) -> Result<(), RouteError>;

    /// Go back one entry. Returns `false` at the start of history.
    fn back(&mut self) -> bool;

    /// Go forward one entry. Returns `false` at the end of history.
    fn forward(&mut self) -> bool;
}

/// Key of the menu item to highlight for the router's current path.
pub fn active_menu_key<'m>(router: &dyn Router, menu: &'m NavMenu) -> Option<&'m MenuKey> {
    menu.active_key(router.current_path())
}

/// In-memory session history.
pub struct HistoryRouter {
    entries: Vec<RoutePath>,
    cursor: usize,
    known: Option<Vec<RoutePath>>,
    observers: Vec<RouteObserver>,
}

impl std::fmt::Debug for HistoryRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryRouter")
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl HistoryRouter {
    /// History holding only `start`. Any path may be navigated to.
    pub fn new(start: RoutePath) -> Self {
        Self {
            entries: vec![start],
            cursor: 0,
            known: None,
            observers: Vec::new(),
        }
    }

    /// Restrict navigation to `routes`.
    pub fn with_routes(mut self, routes: impl IntoIterator<Item = RoutePath>) -> Self {
        self.known = Some(routes.into_iter().collect());
        self
    }

    /// Register an observer for route changes.
    pub fn subscribe(&mut self, observer: impl FnMut(&RoutePath) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Whether [`Router::back`] would move.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`Router::forward`] would move.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[RoutePath] {
        &self.entries
    }

    fn notify(&mut self) {
        let path = self.entries[self.cursor].clone();
        debug!(%path, "Route changed");
        for observer in &mut self.observers {
            observer(&path);
        }
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> &RoutePath {
        &self.entries[self.cursor]
    }

    fn navigate(&mut self, path: RoutePath) -> Result<(), RouteError> {
        if let Some(known) = &self.known {
            if !known.contains(&path) {
                return Err(RouteError::UnknownRoute(path));
            }
        }
        if *self.current_path() == path {
            return Ok(());
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
        self.notify();
        Ok(())
    }

    fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        self.notify();
        true
    }

    fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        self.notify();
        true
    }
}
