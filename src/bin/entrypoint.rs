//! Container entrypoint
//!
//! Applies pending database migrations and then replaces itself with the
//! application process. The replacement is a true exec, not spawn-and-wait,
//! so the container supervisor sees a single long-lived process and signals
//! reach the application directly.

use std::os::unix::process::CommandExt;
use std::process::exit;

use gantry::commands::bootstrap;
use gantry::config::BootstrapEnv;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let env = match BootstrapEnv::resolve() {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Failed to resolve deployment environment: {}", e);
            exit(1);
        }
    };

    let mut command = match bootstrap::sequence(&env, &argv) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    // This never returns if successful
    let err = command.exec();
    eprintln!("Failed to launch application: {}", err);
    exit(1);
}
