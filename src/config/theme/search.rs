//! `[theme.search]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.search]
//! provider = "local"
//!
//! [theme.search.options]
//! fuzzy = true
//! prefix = true
//!
//! [theme.search.options.boost]
//! title = 4.0
//! text = 1.0
//!
//! [theme.search.options.locales.de]
//! button_label = "Suche"
//! placeholder = "Dokumentation durchsuchen"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Search backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built by the framework at build time.
    #[default]
    Local,

    /// Hosted search service configured outside this file.
    External,
}

/// Full-text search configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search backend: local | external.
    pub provider: SearchProvider,

    /// Index tuning options, passed through to the framework's indexer.
    pub options: SearchOptions,
}

/// Index tuning options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Allow fuzzy term matching.
    pub fuzzy: bool,

    /// Match on term prefixes while typing.
    pub prefix: bool,

    /// Per-field score weights (e.g. title = 4.0). Must be positive.
    pub boost: FxHashMap<String, f64>,

    /// UI translation strings per locale code.
    pub locales: FxHashMap<String, FxHashMap<String, String>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            prefix: true,
            boost: FxHashMap::default(),
            locales: FxHashMap::default(),
        }
    }
}

impl SearchConfig {
    /// Validate search settings at `field` (`theme.search`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let boost = field.child("options").child("boost");
        for (name, weight) in &self.options.boost {
            if *weight <= 0.0 || !weight.is_finite() {
                diag.error_with_hint(
                    boost.child(name),
                    format!("weight {weight} is not a positive number"),
                    "boost weights scale relevance and must be > 0",
                );
            }
        }
    }
}
