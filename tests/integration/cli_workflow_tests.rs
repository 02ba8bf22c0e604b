use super::test_helpers::{create_workspace, init_workspace, read_field_file, run_cli, run_cli_ok};

const DEFAULT_ENTRY: &str = r#"{"on":true,"lora":"None","strength":1.0}"#;

#[test]
fn test_init_creates_workspace_with_one_default_entry() {
    let workspace = create_workspace();

    init_workspace(workspace.path());

    assert!(workspace.path().join(".lorastack/config.json").exists());
    assert_eq!(
        read_field_file(workspace.path()),
        format!("[{DEFAULT_ENTRY}]")
    );
}

#[test]
fn test_init_twice_requires_force() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    let output = run_cli(workspace.path(), &["init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already initialized"), "stderr: {stderr}");

    run_cli_ok(workspace.path(), &["init", "--force"]);
    assert_eq!(
        read_field_file(workspace.path()),
        format!("[{DEFAULT_ENTRY}]")
    );
}

#[test]
fn test_full_editing_workflow() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    // One default entry exists; grow the stack and edit both entries
    run_cli_ok(workspace.path(), &["stack", "add"]);
    run_cli_ok(workspace.path(), &["stack", "set", "2", "strength", "-1.5"]);
    run_cli_ok(workspace.path(), &["stack", "set", "1", "on", "off"]);

    assert_eq!(
        read_field_file(workspace.path()),
        r#"[{"on":false,"lora":"None","strength":1.0},{"on":true,"lora":"None","strength":-1.5}]"#
    );

    // Removing entry 1 shifts the edited entry into position 1 unchanged
    run_cli_ok(workspace.path(), &["stack", "remove", "1"]);

    let output = run_cli_ok(workspace.path(), &["stack", "show", "--raw"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"[{"on":true,"lora":"None","strength":-1.5}]"#
    );
}

#[test]
fn test_remove_only_entry_leaves_empty_encoding() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    run_cli_ok(workspace.path(), &["stack", "remove", "1"]);

    assert_eq!(read_field_file(workspace.path()), "[]");
}

#[test]
fn test_remove_out_of_range_fails_and_preserves_field_file() {
    let workspace = create_workspace();
    init_workspace(workspace.path());
    let before = read_field_file(workspace.path());

    let output = run_cli(workspace.path(), &["stack", "remove", "5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
    assert_eq!(read_field_file(workspace.path()), before);
}

#[test]
fn test_position_zero_rejected() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    let output = run_cli(workspace.path(), &["stack", "remove", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1-based"), "stderr: {stderr}");
}

#[test]
fn test_strength_outside_configured_range_rejected() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    let output = run_cli(workspace.path(), &["stack", "set", "1", "strength", "5.0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside configured range"), "stderr: {stderr}");
}

#[test]
fn test_toggle_all_round_trip() {
    let workspace = create_workspace();
    init_workspace(workspace.path());
    run_cli_ok(workspace.path(), &["stack", "add"]);

    run_cli_ok(workspace.path(), &["stack", "toggle-all"]);
    assert_eq!(
        read_field_file(workspace.path()),
        r#"[{"on":false,"lora":"None","strength":1.0},{"on":false,"lora":"None","strength":1.0}]"#
    );

    run_cli_ok(workspace.path(), &["stack", "toggle-all"]);
    assert_eq!(
        read_field_file(workspace.path()),
        format!("[{DEFAULT_ENTRY},{DEFAULT_ENTRY}]")
    );
}

#[test]
fn test_enable_all_and_disable_all() {
    let workspace = create_workspace();
    init_workspace(workspace.path());
    run_cli_ok(workspace.path(), &["stack", "add"]);
    run_cli_ok(workspace.path(), &["stack", "set", "1", "on", "off"]);

    run_cli_ok(workspace.path(), &["stack", "disable-all"]);
    assert!(!read_field_file(workspace.path()).contains("true"));

    run_cli_ok(workspace.path(), &["stack", "enable-all"]);
    assert!(!read_field_file(workspace.path()).contains("false"));
}

#[test]
fn test_corrupt_field_file_surfaces_malformed_encoding() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    std::fs::write(workspace.path().join("lora_stack.json"), "{ not a stack").unwrap();

    let output = run_cli(workspace.path(), &["stack", "show"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed stack encoding"), "stderr: {stderr}");
}

#[test]
fn test_commands_require_initialized_workspace() {
    let workspace = create_workspace();

    let output = run_cli(workspace.path(), &["stack", "add"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not initialized"), "stderr: {stderr}");
}

#[test]
fn test_config_set_and_get() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    run_cli_ok(
        workspace.path(),
        &["config", "set", "catalog.url", "http://graph-host:9000"],
    );
    let output = run_cli_ok(workspace.path(), &["config", "get", "catalog.url"]);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "http://graph-host:9000"
    );
}

#[test]
fn test_config_rejects_unknown_key() {
    let workspace = create_workspace();
    init_workspace(workspace.path());

    let output = run_cli(workspace.path(), &["config", "set", "stack.bogus", "1"]);

    assert!(!output.status.success());
}

#[test]
fn test_completions_generate() {
    let workspace = create_workspace();

    let output = run_cli_ok(workspace.path(), &["completions", "bash"]);

    assert!(!output.stdout.is_empty());
}
