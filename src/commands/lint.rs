//! Linter wrapper around ruff.
//!
//! Forwards to `ruff check` and propagates its exit status unchanged.
//! With `-f <max_errors>` the tool output is still printed as-is, but the
//! command succeeds as long as the diagnostic count stays at or below the
//! threshold.

use std::process::Stdio;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::process::Command;
use tracing::debug;

use crate::commands::resolve_targets;
use crate::tools;
use crate::ui;

pub async fn execute(
    fix: bool,
    unsafe_fixes: bool,
    max_errors: Option<u32>,
    paths: Vec<String>,
) -> Result<i32> {
    let targets = resolve_targets(paths);
    let ruff = tools::get_tool_path(tools::tools::RUFF);

    println!("🔍 Linting {}...", targets.join(" ").cyan());

    let args = check_args(fix, unsafe_fixes);
    debug!("{} {} {}", ruff, args.join(" "), targets.join(" "));

    if let Some(limit) = max_errors {
        return execute_with_threshold(&ruff, &args, &targets, limit).await;
    }

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

/// Threshold mode captures the output so the diagnostic count can be
/// compared against the limit; the output itself is replayed unchanged.
async fn execute_with_threshold(
    ruff: &str,
    args: &[&str],
    targets: &[String],
    limit: u32,
) -> Result<i32> {
    let output = Command::new(ruff)
        .args(args)
        .args(targets)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await
        .with_context(|| format!("Failed to run {}", ruff))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    print!("{}", stdout);

    if output.status.success() {
        return Ok(0);
    }

    // Exit code 1 is ruff's "violations found"; anything else is a tool
    // failure and its status propagates untouched.
    if output.status.code() != Some(1) {
        return Ok(output.status.code().unwrap_or(1));
    }

    match count_errors(&stdout) {
        Some(errors) if errors <= limit as usize => {
            ui::print_warning(&format!("{} error(s), within threshold of {}", errors, limit));
            Ok(0)
        }
        Some(errors) => {
            ui::print_error(&format!("{} error(s) exceed threshold of {}", errors, limit));
            Ok(1)
        }
        None => Ok(1),
    }
}

fn check_args(fix: bool, unsafe_fixes: bool) -> Vec<&'static str> {
    let mut args = vec!["check"];
    if fix {
        args.push("--fix");
    }
    if unsafe_fixes {
        args.push("--unsafe-fixes");
    }
    args
}

/// Diagnostic count from ruff's output: the trailing "Found N errors."
/// summary when present, otherwise the number of non-empty diagnostic
/// lines. `None` when the output carries no diagnostics at all, which
/// means the failure was not a lint result.
fn count_errors(stdout: &str) -> Option<usize> {
    for line in stdout.lines() {
        if let Some(rest) = line.strip_prefix("Found ") {
            if let Some(n) = rest.split_whitespace().next().and_then(|w| w.parse().ok()) {
                return Some(n);
            }
        }
    }
    let lines = stdout.lines().filter(|l| !l.trim().is_empty()).count();
    if lines > 0 {
        Some(lines)
    } else {
        None
    }
}
