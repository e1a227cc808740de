//! Virtual environment sync wrapper around uv.
//!
//! Forwards to `uv sync` and propagates its exit status unchanged. The
//! virtual environment location comes from the process environment
//! (`VIRTUAL_ENV` / `UV_PROJECT_ENVIRONMENT`); uv reads it directly.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::debug;

use crate::tools;
use crate::ui;

pub async fn execute(frozen: bool) -> Result<i32> {
    let uv = tools::get_tool_path(tools::tools::UV);

    println!("📦 Syncing virtual environment...");

    let args = sync_args(frozen);
    debug!("{} {}", uv, args.join(" "));

    let status = Command::new(&uv)
        .args(&args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", uv))?;

    if status.success() {
        ui::print_success("Environment synced");
    }

    Ok(status.code().unwrap_or(1))
}

fn sync_args(frozen: bool) -> Vec<&'static str> {
    let mut args = vec!["sync"];
    if frozen {
        args.push("--frozen");
    }
    args
}
