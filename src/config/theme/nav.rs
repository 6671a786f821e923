//! `[[theme.nav]]` configuration: the top navigation bar.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "Guide"
//! link = "/guide/"
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single entry in the top navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the nav bar.
    pub text: String,

    /// Target: root-relative path or full URL.
    pub link: String,
}

impl NavItem {
    /// Validate one nav entry at `field` (e.g. `theme.nav[1]`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(field.child("text"), "nav label must not be empty");
        }
        check_link(&self.link, field.child("link"), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_nav_parses_in_order() {
        let config = test_parse_config(
            "[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"\n\
             [[theme.nav]]\ntext = \"Guide\"\nlink = \"/guide/\"",
        );
        assert_eq!(config.theme.nav.len(), 2);
        assert_eq!(config.theme.nav[0].link, "/");
        assert_eq!(config.theme.nav[1].text, "Guide");
    }

    #[test]
    fn test_bad_nav_link_reported_with_index() {
        let item = NavItem {
            text: "Broken".into(),
            link: "guide".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(&FieldPath::root("theme").child("nav").index(3), &mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[3].link");
    }
}
