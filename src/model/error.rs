//! Error types for the navigation preview.
//!
//! This module defines the top of the error taxonomy using `thiserror`. Errors
//! compose via `?` and `From` conversions; concern-specific errors
//! (`ConfigError`, `LoggingError`, `ContactError`, `BridgeError`) live next to
//! the code that raises them.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InvalidRoutePath`] - a malformed path was supplied (CLI, config, link)
//!   - `UnknownRoute` - the path is well-formed but no page is registered for it
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! Navigation-controller failures never surface here: an unresolvable hero
//! landmark fails open to "visible", and measuring an absent element is a
//! silent no-op. Only startup problems and terminal failures are fatal.

use super::identifiers::{InvalidRoutePath, RoutePath};
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A route string could not be parsed.
    ///
    /// **Recovery**: report the offending value and exit with non-zero status.
    #[error("Invalid route: {0}")]
    InvalidRoute(#[from] InvalidRoutePath),

    /// No page is registered for the requested route.
    ///
    /// **Recovery**: at startup, report and exit; during navigation the router
    /// refuses the transition and the current page stays mounted.
    #[error("No page registered for route {0}")]
    UnknownRoute(RoutePath),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_route_converts_via_from() {
        fn parse() -> Result<RoutePath, AppError> {
            Ok(RoutePath::new("relative")?)
        }
        assert!(matches!(parse(), Err(AppError::InvalidRoute(_))));
    }

    #[test]
    fn unknown_route_message_names_path() {
        let err = AppError::UnknownRoute(RoutePath::new("/nope").unwrap());
        assert_eq!(err.to_string(), "No page registered for route /nope");
    }

    #[test]
    fn io_error_converts_to_terminal() {
        let err: AppError = std::io::Error::other("boom").into();
        assert!(matches!(err, AppError::Terminal(_)));
    }
}
