//! docsmith - documentation site generator.
//!
//! This binary is the configuration front-end: it loads and validates
//! `docsmith.toml` and hands the resulting value to the commands. The
//! config is built once at startup and passed by reference; there is no
//! global configuration state.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Check => cli::check::check_config(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
