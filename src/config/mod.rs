//! # Deployment environment configuration
//!
//! The bootstrap sequence reads its environment once, up front, into an
//! explicit struct instead of consulting ambient process state at each
//! step. The struct is threaded through the sequencing functions so that
//! everything short of the final exec can be exercised in tests with a
//! synthetic environment.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::SetupError;
use crate::tools;

/// Launch command used when the container supplies no command override.
pub const DEFAULT_APP_COMMAND: [&str; 2] = ["python", "main.py"];

/// Application source subdirectory, relative to the project root.
pub const DEFAULT_APP_SOURCE_DIR: &str = "src";

/// Default virtual environment location inside the container image.
pub const DEFAULT_VIRTUAL_ENV: &str = "/opt/venv";

/// Everything the bootstrap sequence needs to know about the instance it
/// is starting. Values the sequence merely passes along (database
/// connection info, application settings) stay in the process environment
/// and are never inspected here.
#[derive(Debug, Clone)]
pub struct BootstrapEnv {
    /// Project root; the migration runner is invoked from here.
    pub project_root: PathBuf,

    /// Application source directory, relative to the project root.
    pub app_source_dir: PathBuf,

    /// Virtual environment path (consumed by the external tools).
    pub virtual_env: PathBuf,

    /// Migration runner executable.
    pub migration_runner: String,

    /// Launch command used when no override is supplied.
    pub default_command: Vec<String>,
}

impl BootstrapEnv {
    /// Resolve the deployment environment from process env vars, falling
    /// back to the directory above the entrypoint binary for the project
    /// root.
    pub fn resolve() -> Result<Self, SetupError> {
        let project_root = match env::var_os("APP_ROOT") {
            Some(root) => PathBuf::from(root),
            None => default_project_root()?,
        };
        Ok(Self::for_root(project_root))
    }

    /// Build the environment for a known project root.
    pub fn for_root(project_root: PathBuf) -> Self {
        let app_source_dir = env::var_os("APP_SOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_SOURCE_DIR));
        let virtual_env = env::var_os("VIRTUAL_ENV")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VIRTUAL_ENV));

        Self {
            project_root,
            app_source_dir,
            virtual_env,
            migration_runner: tools::get_tool_path(tools::tools::ALEMBIC),
            default_command: DEFAULT_APP_COMMAND
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Absolute application source directory.
    pub fn app_dir(&self) -> PathBuf {
        self.project_root.join(&self.app_source_dir)
    }
}

/// The image installs the entrypoint binary in a subdirectory of the
/// project root, so the root is the directory above the binary's own
/// location.
fn default_project_root() -> Result<PathBuf, SetupError> {
    let exe = env::current_exe().map_err(SetupError::ExeLocation)?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or(SetupError::RootNotFound)
}
