//! Bootstrap sequencing for the container entry process.
//!
//! Brings an instance from "container started" to "application running":
//! enter the project root, apply pending schema migrations, enter the
//! application source directory, and hand back the launch command for the
//! final exec. Every step is fail-fast; the application must never start
//! against an unmigrated or partially migrated schema.
//!
//! The migration runner is assumed idempotent (re-running against a
//! migrated schema is a no-op) and atomic per migration step. If several
//! instances start at once during a rolling deployment, concurrency safety
//! rests entirely on the runner's own transactional behavior.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::BootstrapEnv;
use crate::error::{BootstrapError, LaunchError, MigrationError, SetupError};

/// Run the full sequence and return the launch command ready to exec.
///
/// The caller performs the exec itself; keeping the process replacement
/// out of this function is what makes the sequence testable.
pub fn sequence(env: &BootstrapEnv, argv: &[String]) -> Result<Command, BootstrapError> {
    enter_dir(&env.project_root)?;
    apply_migrations(env)?;
    enter_dir(&env.app_dir())?;
    let command = launch_command(env, argv)?;
    Ok(command)
}

fn enter_dir(path: &Path) -> Result<(), SetupError> {
    std::env::set_current_dir(path).map_err(|source| SetupError::Chdir {
        path: path.display().to_string(),
        source,
    })
}

/// Invoke the migration runner against the configured database.
///
/// Any non-zero exit is fatal. The runner's own output is inherited
/// unchanged; only the two context lines below are added.
pub fn apply_migrations(env: &BootstrapEnv) -> Result<(), MigrationError> {
    println!("Run apply migrations..");

    let status = Command::new(&env.migration_runner)
        .args(&["upgrade", "head"])
        .current_dir(&env.project_root)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| MigrationError::RunnerUnavailable {
            runner: env.migration_runner.clone(),
            source,
        })?;

    if !status.success() {
        return Err(MigrationError::RunnerFailed { status });
    }

    println!("Migrations applied!");
    Ok(())
}

/// Build the application launch command from the container's argument
/// vector, falling back to the configured default when none was given.
pub fn launch_command(env: &BootstrapEnv, argv: &[String]) -> Result<Command, LaunchError> {
    let argv = if argv.is_empty() {
        &env.default_command[..]
    } else {
        argv
    };
    let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;

    // Surface a missing executable here, with a readable error, instead of
    // from a failed exec.
    if which::which(program).is_err() && !Path::new(program).is_file() {
        return Err(LaunchError::ExecutableNotFound {
            program: program.clone(),
        });
    }

    let mut command = Command::new(program);
    command.args(args);
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_env(root: &Path) -> BootstrapEnv {
        BootstrapEnv {
            project_root: root.to_path_buf(),
            app_source_dir: PathBuf::from("src"),
            virtual_env: PathBuf::from("/opt/venv"),
            migration_runner: "alembic".to_string(),
            default_command: vec!["/bin/sh".to_string()],
        }
    }

    #[test]
    fn empty_argv_falls_back_to_default_command() {
        let env = test_env(Path::new("/tmp"));
        let command = launch_command(&env, &[]).unwrap();
        assert_eq!(command.get_program(), "/bin/sh");
    }

    #[test]
    fn explicit_argv_is_passed_through_unchanged() {
        let env = test_env(Path::new("/tmp"));
        let argv = vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            "echo ready".to_string(),
        ];
        let command = launch_command(&env, &argv).unwrap();
        assert_eq!(command.get_program(), "/bin/sh");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["-c", "echo ready"]);
    }

    #[test]
    fn missing_executable_is_a_launch_error() {
        let env = test_env(Path::new("/tmp"));
        let argv = vec!["/nonexistent/gantry-app".to_string()];
        let err = launch_command(&env, &argv).unwrap_err();
        assert!(matches!(err, LaunchError::ExecutableNotFound { .. }));
    }

    #[test]
    fn unavailable_runner_is_a_migration_error() {
        let mut env = test_env(Path::new("/tmp"));
        env.migration_runner = "/nonexistent/gantry-runner".to_string();
        let err = apply_migrations(&env).unwrap_err();
        assert!(matches!(err, MigrationError::RunnerUnavailable { .. }));
    }
}
