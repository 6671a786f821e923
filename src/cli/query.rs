//! Query command implementation.
//!
//! Prints the loaded (and already validated) configuration as JSON, either
//! whole or narrowed to a dotted-path subtree. Numeric segments index into
//! sequences, e.g. `theme.sidebar.0.items`.

use std::fs;
use std::io::Write;

use anyhow::{Result, anyhow};
use serde_json::Value as JsonValue;

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::debug;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let value = serde_json::to_value(config)?;

    let selected = match &args.path {
        Some(path) => resolve_path(&value, path)?,
        None => &value,
    };

    debug!(
        "query";
        "selected {}",
        args.path.as_deref().unwrap_or("whole config")
    );

    let formatted = if args.pretty {
        serde_json::to_string_pretty(selected)?
    } else {
        serde_json::to_string(selected)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        debug!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Walk a dotted path through the JSON tree.
fn resolve_path<'a>(value: &'a JsonValue, path: &str) -> Result<&'a JsonValue> {
    let mut current = value;
    for segment in path.split('.') {
        let next = match current {
            JsonValue::Object(map) => map.get(segment),
            JsonValue::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
            _ => None,
        };
        current = next.ok_or_else(|| anyhow!("no value at '{segment}' in path '{path}'"))?;
    }
    Ok(current)
}
