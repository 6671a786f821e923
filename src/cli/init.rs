//! Site initialization command.
//!
//! Creates a new site skeleton: a starter `docsmith.toml` and a `docs/`
//! directory with an index page.

use crate::{config::SiteConfig, log};
use anyhow::{Result, bail};
use std::fs;

/// Starter configuration written by `docsmith init`.
///
/// Kept in sync with the schema; a test below loads and validates it.
const CONFIG_TEMPLATE: &str = r#"title = "My Documentation"
description = "Notes and guides"
base = "/"
clean_urls = true

[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar]]
text = "Guide"
collapsible = true
collapsed = false

[[theme.sidebar.items]]
text = "Getting Started"
link = "/guide/getting-started"

[[theme.social_links]]
icon = "github"
link = "https://github.com/your-name"

[theme.search]
provider = "local"

[theme.search.options.boost]
title = 4.0
text = 1.0
"#;

const INDEX_TEMPLATE: &str = "# My Documentation\n\nEdit `docs/index.md` to get started.\n";

/// Create a new site with default structure
///
/// # Steps
/// 1. Refuse to overwrite an existing config
/// 2. Create the `docs/` directory
/// 3. Write `docsmith.toml` and `docs/index.md`
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{CONFIG_TEMPLATE}");
        return Ok(());
    }

    if config.config_path.exists() {
        bail!(
            "config file already exists at '{}'",
            config.config_path.display()
        );
    }

    let root = config.get_root();
    fs::create_dir_all(config.root_join("docs"))?;
    fs::write(&config.config_path, CONFIG_TEMPLATE)?;

    let index = config.root_join("docs/index.md");
    if !index.exists() {
        fs::write(&index, INDEX_TEMPLATE)?;
    }

    log!("init"; "created {}", config.config_path.display());
    log!("init"; "site root: {}", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchProvider;

    #[test]
    fn test_template_is_valid_config() {
        let config = SiteConfig::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.title, "My Documentation");
        assert_eq!(config.base, "/");
        assert!(config.clean_urls);
        assert_eq!(config.theme.sidebar_link_count(), 1);
        assert_eq!(
            config.theme.search.as_ref().unwrap().provider,
            SearchProvider::Local
        );
    }

    #[test]
    fn test_new_site_writes_skeleton() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        config.config_path = dir.path().join("docsmith.toml");

        new_site(&config, false).unwrap();

        assert!(config.config_path.exists());
        assert!(dir.path().join("docs/index.md").exists());

        // Running again must not clobber the existing config
        assert!(new_site(&config, false).is_err());
    }
}
