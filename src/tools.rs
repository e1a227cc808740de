//! Runtime tool path resolution
//!
//! External tools (the migration runner, formatter, package manager) are
//! resolved through a `{TOOL}_BIN` environment variable with a PATH
//! fallback. Container images pin exact tool paths via the env vars;
//! development machines fall back to whatever is on PATH.

use std::env;

/// Get the path to an external tool
///
/// Checks for an environment variable `{TOOL}_BIN` (uppercase tool name,
/// dashes mapped to underscores, plus "_BIN"). Falls back to the tool name
/// itself if the envvar is not set, which relies on PATH.
pub fn get_tool_path(tool: &str) -> String {
    let env_var = format!("{}_BIN", tool.to_uppercase().replace('-', "_"));
    env::var(&env_var).unwrap_or_else(|_| tool.to_string())
}

/// Tool names used across the commands
pub mod tools {
    pub const ALEMBIC: &str = "alembic";
    pub const RUFF: &str = "ruff";
    pub const UV: &str = "uv";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_get_tool_path_from_env() {
        env::set_var("FAKETOOL_BIN", "/opt/tools/bin/faketool");
        assert_eq!(get_tool_path("faketool"), "/opt/tools/bin/faketool");
        env::remove_var("FAKETOOL_BIN");
    }

    #[test]
    fn test_get_tool_path_fallback() {
        env::remove_var("ABSENT_TOOL_BIN");
        assert_eq!(get_tool_path("absent-tool"), "absent-tool");
    }

    #[test]
    fn test_dash_maps_to_underscore() {
        env::set_var("DASHED_TOOL_BIN", "/opt/tools/bin/dashed-tool");
        assert_eq!(get_tool_path("dashed-tool"), "/opt/tools/bin/dashed-tool");
        env::remove_var("DASHED_TOOL_BIN");
    }
}
