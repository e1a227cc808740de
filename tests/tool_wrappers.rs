//! Wrapper exit-code behavior against fake tool scripts.
//!
//! The scenarios share the `RUFF_BIN` override, which is process-global,
//! so they run sequentially inside one test.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use gantry::commands::{format, lint};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn use_ruff(script: &Path) {
    std::env::set_var("RUFF_BIN", script);
}

#[tokio::test]
async fn wrapper_exit_codes_follow_the_tool() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let targets = vec![root.join("src").display().to_string()];
    std::fs::create_dir(root.join("src")).unwrap();

    // fmt --check: the tool's distinctive exit code comes back unchanged.
    use_ruff(&write_script(&root, "ruff-unformatted", "exit 5"));
    let code = format::execute(true, targets.clone()).await.unwrap();
    assert_eq!(code, 5);

    // Same propagation for lint without a threshold.
    use_ruff(&write_script(&root, "ruff-failing", "exit 5"));
    let code = lint::execute(false, false, None, targets.clone())
        .await
        .unwrap();
    assert_eq!(code, 5);

    // A clean run is exit zero either way.
    use_ruff(&write_script(&root, "ruff-clean", "exit 0"));
    let code = format::execute(true, targets.clone()).await.unwrap();
    assert_eq!(code, 0);

    // Threshold mode: violations at or below the limit pass.
    use_ruff(&write_script(
        &root,
        "ruff-three-errors",
        "echo 'src/a.py:1:1: F401 unused import'\necho 'Found 3 errors.'\nexit 1",
    ));
    let code = lint::execute(false, false, Some(5), targets.clone())
        .await
        .unwrap();
    assert_eq!(code, 0);

    // Violations above the limit fail.
    let code = lint::execute(false, false, Some(2), targets.clone())
        .await
        .unwrap();
    assert_eq!(code, 1);

    // A tool failure (exit 2, no diagnostics) is never softened by the
    // threshold; its status propagates unchanged.
    use_ruff(&write_script(
        &root,
        "ruff-crashing",
        "echo 'ruff crashed' >&2\nexit 2",
    ));
    let code = lint::execute(false, false, Some(5), targets.clone())
        .await
        .unwrap();
    assert_eq!(code, 2);

    std::env::remove_var("RUFF_BIN");
}
