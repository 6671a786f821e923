//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// docsmith documentation site CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsmith.toml)
    #[arg(short = 'C', long, global = true, default_value = "docsmith.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the site base path prefix (must start and end with '/').
    ///
    /// Useful for CI/CD deployments where the production prefix differs
    /// from the one in docsmith.toml, e.g. GitHub Pages project sites.
    #[arg(short = 'B', long, global = true)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site with a starter configuration
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the site configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the loaded configuration (or a subtree) as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Dotted path into the config, e.g. "theme.sidebar.0.items".
    /// Omit to print the whole configuration.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }

    /// Target directory for `init NAME`, if any.
    pub fn init_target(&self) -> Option<&Path> {
        match &self.command {
            Commands::Init { name, .. } => name.as_deref(),
            _ => None,
        }
    }
}
