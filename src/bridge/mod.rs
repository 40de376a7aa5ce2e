//! Cross-frame messaging with an embedding parent page.
//!
//! When the site runs inside a frame it reports every route change to the
//! parent, and the parent can drive history traversal:
//!
//! ```text
//! site  -> parent   {"type":"iframe-route-change","path":"/careers"}
//! parent -> site    {"type":"navigate","direction":"back"}
//! ```
//!
//! Anything the parent sends that does not decode as a known message is
//! ignored.

use crate::model::RoutePath;
use crate::router::Router;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Bridge errors.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The outgoing message could not be encoded.
    #[error("failed to encode frame message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The parent frame refused or could not take the message.
    #[error("parent frame unavailable: {0}")]
    Unavailable(String),
}

/// Messages the site posts to its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameMessage {
    /// The displayed route changed.
    #[serde(rename = "iframe-route-change")]
    RouteChange {
        /// New path.
        path: String,
    },
}

/// History direction requested by the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One entry back.
    Back,
    /// One entry forward.
    Forward,
}

/// Messages the parent posts to the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParentMessage {
    /// Traverse history.
    #[serde(rename = "navigate")]
    Navigate {
        /// Which way.
        direction: Direction,
    },
}

/// The embedding page's `postMessage` endpoint.
pub trait ParentFrame {
    /// Deliver an encoded message to the parent.
    fn post_message(&mut self, message: &str) -> Result<(), BridgeError>;
}

impl<P: ParentFrame + ?Sized> ParentFrame for Box<P> {
    fn post_message(&mut self, message: &str) -> Result<(), BridgeError> {
        (**self).post_message(message)
    }
}

/// Parent that writes posted messages to the log. Used when the preview runs
/// with `--embedded` and no real parent exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogParent;

impl ParentFrame for LogParent {
    fn post_message(&mut self, message: &str) -> Result<(), BridgeError> {
        info!(message, "postMessage to parent");
        Ok(())
    }
}

/// Encode an outgoing message.
pub fn encode(message: &FrameMessage) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode an incoming message.
pub fn decode(raw: &str) -> Result<ParentMessage, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Connects the router to the parent frame.
#[derive(Debug)]
pub struct FrameBridge<P> {
    parent: P,
    embedded: bool,
}

impl<P: ParentFrame> FrameBridge<P> {
    /// Bridge to `parent`. Outgoing messages are only sent when `embedded`.
    pub fn new(parent: P, embedded: bool) -> Self {
        Self { parent, embedded }
    }

    /// Whether the site is framed.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// The parent endpoint.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// Report a route change. Returns `true` if a message was posted.
    pub fn route_changed(&mut self, path: &RoutePath) -> Result<bool, BridgeError> {
        if !self.embedded {
            return Ok(false);
        }
        let message = encode(&FrameMessage::RouteChange {
            path: path.to_string(),
        })?;
        self.parent.post_message(&message)?;
        Ok(true)
    }

    /// Handle a raw message from the parent, driving `router`.
    ///
    /// Returns the direction applied, or `None` if the message was ignored.
    pub fn receive(&mut self, raw: &str, router: &mut dyn Router) -> Option<Direction> {
        let message = match decode(raw) {
            Ok(message) => message,
            Err(err) => {
                warn!(error = %err, "Ignoring frame message");
                return None;
            }
        };
        match message {
            ParentMessage::Navigate { direction } => {
                let moved = match direction {
                    Direction::Back => router.back(),
                    Direction::Forward => router.forward(),
                };
                debug!(?direction, moved, "Parent requested navigation");
                Some(direction)
            }
        }
    }
}
