//! Formatter wrapper around ruff.
//!
//! Forwards to `ruff format` and propagates its exit status unchanged.
//! `--check` is an idempotent dry run; no file is rewritten.

use std::process::Stdio;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::process::Command;
use tracing::debug;

use crate::commands::resolve_targets;
use crate::tools;

pub async fn execute(check: bool, paths: Vec<String>) -> Result<i32> {
    let targets = resolve_targets(paths);
    let ruff = tools::get_tool_path(tools::tools::RUFF);

    if check {
        println!("🔍 Checking formatting of {}...", targets.join(" ").cyan());
    } else {
        println!("✨ Formatting {}...", targets.join(" ").cyan());
    }

    let args = format_args(check);
    debug!("{} {} {}", ruff, args.join(" "), targets.join(" "));

    let status = Command::new(&ruff)
        .args(&args)
        .args(&targets)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", ruff))?;

    Ok(status.code().unwrap_or(1))
}

fn format_args(check: bool) -> Vec<&'static str> {
    let mut args = vec!["format"];
    if check {
        args.push("--check");
    }
    args
}
