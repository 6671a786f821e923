//! Check command implementation.
//!
//! Loading already validates the configuration, so by the time this runs
//! the config is known-good; the command reports a short summary of what
//! the site contains.

use crate::config::{SearchProvider, SiteConfig};
use crate::log;
use anyhow::Result;

/// Report a summary of the validated configuration.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    let file = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.config_path.display().to_string());

    log!("check"; "{} is valid", file);
    log!(
        "check";
        "site: \"{}\" served under \"{}\"{}",
        config.title,
        config.base,
        if config.clean_urls { " (clean urls)" } else { "" }
    );
    log!(
        "check";
        "theme: {} nav, {} sidebar {} with {} {}, {} social {}",
        plural_count(config.theme.nav.len(), "item"),
        config.theme.sidebar.len(),
        pluralize(config.theme.sidebar.len(), "group"),
        config.theme.sidebar_link_count(),
        pluralize(config.theme.sidebar_link_count(), "link"),
        config.theme.social_links.len(),
        pluralize(config.theme.social_links.len(), "link")
    );

    match config.theme.search.as_ref().map(|s| s.provider) {
        Some(SearchProvider::Local) => log!("check"; "search: local index"),
        Some(SearchProvider::External) => log!("check"; "search: external provider"),
        None => log!("check"; "search: disabled"),
    }

    Ok(())
}

/// Format a count with a pluralized noun ("1 item", "3 items").
fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {}", pluralize(count, noun))
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
