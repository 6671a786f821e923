//! `[theme]` section configuration.
//!
//! Everything the default theme renders around the document content:
//! nav bar, sidebar tree, social icons, and search.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Guide"
//! collapsible = true
//! items = [{ text = "Getting Started", link = "/guide/getting-started" }]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/alice"
//!
//! [theme.search]
//! provider = "local"
//! ```

mod nav;
mod search;
mod sidebar;
mod social;

pub use nav::NavItem;
pub use search::{SearchConfig, SearchOptions, SearchProvider};
pub use sidebar::{SidebarEntry, SidebarGroup, SidebarLink};
pub use social::{SocialIcon, SocialLink};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Theme section: nav, sidebar, social links, and search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation bar entries, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar document tree. Top-level entries are groups.
    pub sidebar: Vec<SidebarGroup>,

    /// Social icons shown in the nav bar.
    pub social_links: Vec<SocialLink>,

    /// Full-text search. Absent means search is disabled.
    pub search: Option<SearchConfig>,
}

impl ThemeConfig {
    /// Validate the whole theme section, collecting every error.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let theme = FieldPath::root("theme");

        let nav = theme.child("nav");
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&nav.index(i), diag);
        }

        let sidebar = theme.child("sidebar");
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(&sidebar.index(i), diag);
        }

        let social = theme.child("social_links");
        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&social.index(i), diag);
        }

        if let Some(search) = &self.search {
            search.validate(&theme.child("search"), diag);
        }
    }

    /// Total number of document links across the sidebar tree.
    pub fn sidebar_link_count(&self) -> usize {
        self.sidebar.iter().map(|g| g.links().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_empty_theme_is_valid() {
        let theme = ThemeConfig::default();
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_errors_collected_across_subsections() {
        let config = test_parse_config(
            r#"
[[theme.nav]]
text = "Broken"
link = ""

[[theme.sidebar]]
text = "Empty"
items = []
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);

        assert_eq!(diag.len(), 2);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"theme.nav[0].link"));
        assert!(fields.contains(&"theme.sidebar[0].items"));
    }

    #[test]
    fn test_sidebar_link_count() {
        let config = test_parse_config(
            r#"
[[theme.sidebar]]
text = "Guide"
items = [
    { text = "a", link = "/a" },
    { text = "sub", items = [{ text = "b", link = "/b" }] },
]
"#,
        );
        assert_eq!(config.theme.sidebar_link_count(), 2);
    }
}
