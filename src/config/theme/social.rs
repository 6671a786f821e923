//! `[[theme.social_links]]` configuration.
//!
//! # Example
//!
//! ```toml
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/alice"
//!
//! [[theme.social_links]]
//! icon = { svg = "<svg viewBox=\"0 0 24 24\">...</svg>" }
//! link = "https://example.com/feed.xml"
//! ```

use crate::config::util::check_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A social icon shown in the nav bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform icon: a known identifier or an inline SVG asset.
    pub icon: SocialIcon,

    /// Target profile or page.
    pub link: String,
}

/// Icon source for a social link.
///
/// Untagged: a plain string is a platform identifier, a table with `svg`
/// is an inline vector asset rendered verbatim by the framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialIcon {
    /// Known platform identifier (e.g. "github", "mastodon").
    Named(String),
    /// Inline SVG markup.
    Svg { svg: String },
}

impl SocialLink {
    /// Validate one social link at `field` (e.g. `theme.social_links[0]`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        match &self.icon {
            SocialIcon::Named(name) if name.is_empty() => {
                diag.error(field.child("icon"), "icon identifier must not be empty");
            }
            SocialIcon::Svg { svg } if svg.is_empty() => {
                diag.error(field.child("icon"), "inline svg must not be empty");
            }
            _ => {}
        }
        check_link(&self.link, field.child("link"), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_named_icon_parses_from_string() {
        let config = test_parse_config(
            "[[theme.social_links]]\nicon = \"github\"\nlink = \"https://github.com/alice\"",
        );
        assert_eq!(
            config.theme.social_links[0].icon,
            SocialIcon::Named("github".into())
        );
    }

    #[test]
    fn test_inline_svg_parses_from_table() {
        let config = test_parse_config(
            "[[theme.social_links]]\nicon = { svg = \"<svg/>\" }\nlink = \"/feed.xml\"",
        );
        assert_eq!(
            config.theme.social_links[0].icon,
            SocialIcon::Svg { svg: "<svg/>".into() }
        );
    }

    #[test]
    fn test_empty_icon_rejected() {
        let social = SocialLink {
            icon: SocialIcon::Named(String::new()),
            link: "https://example.com".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        social.validate(
            &FieldPath::root("theme").child("social_links").index(1),
            &mut diag,
        );
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "theme.social_links[1].icon");
    }
}
