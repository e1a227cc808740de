use anyhow::Result;
use clap::Parser;

use gantry::cli::{Cli, Commands};
use gantry::commands::{envsync, format, lint, migrations};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    // The wrapper commands propagate the wrapped tool's exit code unchanged.
    let code = match cli.command {
        Commands::Fmt { check, paths } => format::execute(check, paths).await?,
        Commands::Lint {
            fix,
            unsafe_fixes,
            max_errors,
            paths,
        } => lint::execute(fix, unsafe_fixes, max_errors, paths).await?,
        Commands::Sync { frozen } => envsync::execute(frozen).await?,
        Commands::Migrate { database_url } => {
            migrations::execute(database_url).await?;
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
