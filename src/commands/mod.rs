//! Developer and operator commands.

pub mod bootstrap;
pub mod envsync;
pub mod format;
pub mod lint;
pub mod migrations;

/// Wrapper targets used when no paths are given on the command line.
pub const DEFAULT_TARGETS: [&str; 2] = ["src", "tests"];

pub(crate) fn resolve_targets(paths: Vec<String>) -> Vec<String> {
    if paths.is_empty() {
        DEFAULT_TARGETS.iter().map(|s| (*s).to_string()).collect()
    } else {
        paths
    }
}
