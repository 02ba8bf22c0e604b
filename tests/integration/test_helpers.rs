use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Common setup helpers shared by the integration tests

/// Path to the compiled lstack binary under test
pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lstack"))
}

/// Create a fresh temporary workspace directory
pub fn create_workspace() -> TempDir {
    TempDir::new().expect("temp workspace should be creatable")
}

/// Run the binary with the given arguments inside the workspace
pub fn run_cli(workspace: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .current_dir(workspace)
        .output()
        .expect("command should run")
}

/// Run the binary and assert the invocation succeeded
pub fn run_cli_ok(workspace: &Path, args: &[&str]) -> Output {
    let output = run_cli(workspace, args);
    assert!(
        output.status.success(),
        "command {:?} failed\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Initialize a workspace; the field file starts with one default entry
pub fn init_workspace(workspace: &Path) {
    run_cli_ok(workspace, &["init"]);
}

/// Read the published field file of an initialized workspace
pub fn read_field_file(workspace: &Path) -> String {
    std::fs::read_to_string(workspace.join("lora_stack.json"))
        .expect("field file should exist after init")
}
