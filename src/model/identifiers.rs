//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate their input at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Identifier of a page section (the `id` attribute of a `<section>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Smart constructor: validates a non-empty id without whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSectionId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidSectionId::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(InvalidSectionId::Whitespace(raw));
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Construct from a compile-time literal of the built-in site catalog.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        debug_assert!(Self::new(raw).is_ok(), "invalid section id literal {raw:?}");
        Self(raw.to_string())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of a top-level navigation item (e.g. "industries").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuKey(String);

impl MenuKey {
    /// Smart constructor: validates non-empty key.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidMenuKey> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidMenuKey::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Construct from a compile-time literal of the built-in site catalog.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        debug_assert!(Self::new(raw).is_ok(), "invalid menu key literal {raw:?}");
        Self(raw.to_string())
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute URL path of a page (e.g. `/industries/healthcare`).
///
/// Always starts with `/`; a trailing slash is stripped except for the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Smart constructor: validates an absolute, whitespace-free path.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRoutePath> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidRoutePath::Empty);
        }
        if !raw.starts_with('/') {
            return Err(InvalidRoutePath::NotAbsolute(raw));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(InvalidRoutePath::Whitespace(raw));
        }
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            Ok(Self::root())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The site root `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Borrow the raw path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Construct from a compile-time literal of the built-in site catalog.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        debug_assert!(
            Self::new(raw).is_ok_and(|p| p.0 == raw),
            "non-canonical route literal {raw:?}"
        );
        Self(raw.to_string())
    }

    /// True when `self` equals `ancestor` or is nested below it
    /// (segment-wise, so `/industries-old` is not below `/industries`).
    pub fn is_within(&self, ancestor: &RoutePath) -> bool {
        if ancestor.0 == "/" {
            return self.0 == "/";
        }
        self.0 == ancestor.0
            || (self.0.starts_with(&ancestor.0) && self.0[ancestor.0.len()..].starts_with('/'))
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected section id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSectionId {
    /// Empty id.
    #[error("Section ID cannot be empty")]
    Empty,
    /// Id containing whitespace.
    #[error("Section ID cannot contain whitespace: {0:?}")]
    Whitespace(String),
}

/// Rejected menu key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMenuKey {
    /// Empty or blank key.
    #[error("Menu key cannot be empty")]
    Empty,
}

/// Rejected route path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRoutePath {
    /// Empty path.
    #[error("Route path cannot be empty")]
    Empty,
    /// Relative path.
    #[error("Route path must start with '/': {0:?}")]
    NotAbsolute(String),
    /// Path containing whitespace.
    #[error("Route path cannot contain whitespace: {0:?}")]
    Whitespace(String),
}

// ===== Tests =====
