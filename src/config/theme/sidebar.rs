//! `[[theme.sidebar]]` configuration: the hierarchical document tree.
//!
//! The sidebar is a list of groups; each group holds links and nested
//! groups to arbitrary depth. An entry is either a group (has `items`) or
//! a link (has `link`) - the sum type makes a "link with children"
//! unrepresentable.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "Guide"
//! collapsible = true
//!
//! [[theme.sidebar.items]]
//! text = "Getting Started"
//! link = "/guide/getting-started"
//!
//! [[theme.sidebar.items]]
//! text = "Advanced"
//! items = [{ text = "Caching", link = "/guide/advanced/caching" }]
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// One sidebar entry: a nested group or a document link.
///
/// Untagged: a table with `items` deserializes as a group, a table with
/// `link` as a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Group(SidebarGroup),
    Link(SidebarLink),
}

impl SidebarEntry {
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Validate this entry at `field` (e.g. `theme.sidebar[0].items[2]`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Group(group) => group.validate(field, diag),
            Self::Link(link) => link.validate(field, diag),
        }
    }

    /// Nesting depth below this entry. A link counts as 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Link(_) => 1,
            Self::Group(group) => {
                1 + group
                    .items
                    .iter()
                    .map(SidebarEntry::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

/// A collapsible group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Whether the group can be collapsed in the UI.
    #[serde(default)]
    pub collapsible: bool,

    /// Initial collapsed state. Only meaningful when `collapsible` is true.
    #[serde(default)]
    pub collapsed: bool,

    /// Child entries, in authored order. Must be non-empty.
    pub items: Vec<SidebarEntry>,
}

impl SidebarGroup {
    /// Validate this group and its subtree at `field`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(field.child("text"), "group heading must not be empty");
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                field.child("items"),
                "group must contain at least one entry",
                "add a link to the group or remove it",
            );
        }

        if self.collapsed && !self.collapsible {
            diag.warn(
                field.child("collapsed"),
                "has no effect unless `collapsible` is true",
            );
        }

        let items = field.child("items");
        for (i, entry) in self.items.iter().enumerate() {
            entry.validate(&items.index(i), diag);
        }
    }

    /// Iterate all links in the subtree, depth-first, authored order.
    pub fn links(&self) -> impl Iterator<Item = &SidebarLink> {
        // Explicit stack; recursion with boxed iterators reads worse here.
        let mut stack: Vec<&SidebarEntry> = self.items.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(entry) = stack.pop() {
                match entry {
                    SidebarEntry::Link(link) => return Some(link),
                    SidebarEntry::Group(group) => {
                        stack.extend(group.items.iter().rev());
                    }
                }
            }
            None
        })
    }
}

/// A leaf entry pointing at a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Label shown in the sidebar.
    pub text: String,

    /// Target document route. Existence of the document is checked by the
    /// hosting framework at build time, not here.
    pub link: String,
}

impl SidebarLink {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(field.child("text"), "link label must not be empty");
        }
        check_link(&self.link, field.child("link"), diag);
    }
}

// ============================================================================
// tests
// ============================================================================
