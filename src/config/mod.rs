//! Site configuration management for `docsmith.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── theme/         # [theme] section definitions
//! │   ├── nav        # [[theme.nav]]
//! │   ├── sidebar    # [[theme.sidebar]]
//! │   ├── social     # [[theme.social_links]]
//! │   └── search     # [theme.search]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Link checking, config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The whole structure is built once at startup, validated, and then
//! passed around as a read-only reference. There is no global handle and
//! no runtime mutation.

pub mod theme;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from theme/
pub use theme::{
    NavItem, SearchConfig, SearchOptions, SearchProvider, SidebarEntry, SidebarGroup, SidebarLink,
    SocialIcon, SocialLink, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsmith.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site title, shown in the nav bar and page titles.
    pub title: String,

    /// Site description, used for meta tags.
    pub description: String,

    /// URL path prefix the site is served under. Starts and ends with '/'.
    pub base: String,

    /// Strip trailing extensions from generated links.
    pub clean_urls: bool,

    /// Theme settings (nav, sidebar, social links, search).
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            title: String::new(),
            description: String::new(),
            base: "/".into(),
            clean_urls: false,
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The site root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'docsmith init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths and apply CLI overrides
        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if cli.is_init() {
            let path = match cli.init_target() {
                Some(name) => cwd.join(name).join(&cli.config),
                None => cwd.join(&cli.config),
            };
            let exists = path.exists();
            return Ok((path, exists));
        }

        // Search upward from cwd
        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.root = root;

        crate::logger::set_verbose(cli.verbose);

        // CLI --base overrides the config file, e.g. for CI deployments
        // under a different path prefix.
        if let Some(base) = &cli.base {
            self.base = base.clone();
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (docsmith.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the site root directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the site root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the loaded configuration.
    ///
    /// Collects all validation errors and returns them at once. Startup
    /// must abort on failure - a malformed nav or sidebar tree would
    /// silently break the generated site.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_base(&mut diag);
        self.theme.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Check the `base` path prefix shape.
    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::root("base");

        if self.base.is_empty() {
            diag.error_with_hint(field, "must not be empty", "use \"/\" to serve from the root");
            return;
        }
        if !self.base.starts_with('/') {
            diag.error_with_hint(
                field.clone(),
                format!("'{}' must start with '/'", self.base),
                "use a root-relative prefix like \"/docs/\"",
            );
        }
        if !self.base.ends_with('/') {
            diag.error_with_hint(
                field,
                format!("'{}' must end with '/'", self.base),
                format!("use \"{}/\"", self.base),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required root fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title = "T"
description = "D"
base = "/x/"

[[theme.nav]]
text = "Home"
link = "/"
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[theme\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.title, "");
        assert_eq!(config.base, "/");
        assert!(!config.clean_urls);
        assert!(config.theme.nav.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_loads() {
        let config = SiteConfig::from_str(MINIMAL).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.base, "/x/");
        assert_eq!(config.theme.nav[0].link, "/");
        assert!(config.theme.sidebar.is_empty());
        assert!(config.theme.social_links.is_empty());
    }

    #[test]
    fn test_loading_is_deterministic() {
        let a = SiteConfig::from_str(MINIMAL).unwrap();
        let b = SiteConfig::from_str(MINIMAL).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_base_must_end_with_slash() {
        let config = test_parse_config("base = \"/docs\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base"));
        assert!(err.to_string().contains("end with '/'"));
    }

    #[test]
    fn test_base_must_start_with_slash() {
        let config = test_parse_config("base = \"docs/\"");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_sidebar_group_fails_validation() {
        let config = test_parse_config(
            "[[theme.sidebar]]\ntext = \"A\"\nitems = []",
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme.sidebar[0].items"));
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let config = test_parse_config(
            r#"
base = "docs"

[[theme.nav]]
text = "Broken"
link = "nope"

[[theme.sidebar]]
text = "Empty"
items = []
"#,
        );
        let err = config.validate().unwrap_err();
        let report = err.to_string();
        // base start + base end + nav link + sidebar items
        assert!(report.contains("4"));
        assert!(report.contains("errors"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "title = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_root_join() {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/site");
        assert_eq!(config.root_join("docs"), PathBuf::from("/site/docs"));
    }
}
