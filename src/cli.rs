//! CLI definitions for gantry
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gantry",
    version,
    about = "Deployment bootstrap and developer tooling for containerized services",
    long_about = "Deployment bootstrap and developer tooling written in Rust.\nReplaces fragile shell-script glue with type-safe, testable code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format source code with ruff
    Fmt {
        /// Check only; report unformatted files without rewriting them
        #[arg(long)]
        check: bool,

        /// Target paths (default: src tests)
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Lint source code with ruff
    Lint {
        /// Apply safe fixes automatically
        #[arg(long)]
        fix: bool,

        /// Also apply fixes ruff marks as unsafe
        #[arg(short = 'u', long, visible_alias = "unsafe-fix")]
        unsafe_fixes: bool,

        /// Tolerate up to N errors before failing
        #[arg(short = 'f', long = "max-errors", value_name = "N")]
        max_errors: Option<u32>,

        /// Target paths (default: src tests)
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Sync the project virtual environment with uv
    Sync {
        /// Respect the lockfile exactly; fail instead of updating it
        #[arg(long)]
        frozen: bool,
    },

    /// Apply pending database migrations
    Migrate {
        /// Database URL for the migration runner (or set DATABASE_URL)
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },
}
