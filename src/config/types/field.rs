//! Config field path with index support.

use owo_colors::OwoColorize;
use std::fmt;

/// A config field path mirroring the TOML structure of `docsmith.toml`.
///
/// Paths are built incrementally while walking the configuration tree, so
/// diagnostics can point at a precise location inside nested sequences,
/// e.g. `theme.sidebar[2].items[0].link`.
///
/// # Example
///
/// ```ignore
/// let field = FieldPath::root("theme")
///     .child("sidebar")
///     .index(2)
///     .child("items");
/// assert_eq!(field.as_str(), "theme.sidebar[2].items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    /// Start a path at a top-level field.
    #[inline]
    pub fn root(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Append a named field segment (`parent.name`).
    #[inline]
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Append a sequence index segment (`parent[i]`).
    #[inline]
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
