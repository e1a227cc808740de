//! Standalone migration step for operators.
//!
//! Same contract as the entrypoint's migration step: invoke the runner,
//! treat any non-zero exit as fatal. The runner is idempotent, so
//! re-running against an already-migrated database is a no-op.

use std::process::Stdio;

use anyhow::{bail, Context, Result};
use tokio::process::Command;
use tracing::debug;

use crate::tools;

pub async fn execute(database_url: Option<String>) -> Result<()> {
    let alembic = tools::get_tool_path(tools::tools::ALEMBIC);
    debug!("migration runner: {}", alembic);

    println!("Run apply migrations..");

    let mut command = Command::new(&alembic);
    command.args(&["upgrade", "head"]);
    if let Some(url) = database_url {
        command.env("DATABASE_URL", url);
    }

    let status = command
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", alembic))?;

    if !status.success() {
        bail!("Migration runner exited with {}", status);
    }

    println!("Migrations applied!");
    Ok(())
}
