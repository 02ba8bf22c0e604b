use lora_stack::config::{self, Settings};
use lora_stack::errors::LoraStackError;
use lora_stack::stack::{codec, StackSession};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn initialized_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    config::initialize_workspace(temp_dir.path(), None).unwrap();
    temp_dir
}

fn field_file_contents(workspace: &Path) -> String {
    fs::read_to_string(workspace.join("lora_stack.json")).unwrap()
}

#[test]
fn test_open_uninitialized_workspace_fails() {
    let temp_dir = TempDir::new().unwrap();

    let err = StackSession::open(temp_dir.path()).unwrap_err();

    assert!(matches!(err, LoraStackError::Config(_)));
}

#[test]
fn test_session_starts_empty_without_field_file() {
    let workspace = initialized_workspace();

    let session = StackSession::open(workspace.path()).unwrap();

    assert!(session.controller().is_empty());
    assert_eq!(session.controller().serialized_value(), "[]");
}

#[test]
fn test_field_file_tracks_every_mutation() {
    let workspace = initialized_workspace();
    let mut session = StackSession::open(workspace.path()).unwrap();

    session.append().unwrap();
    assert_eq!(
        field_file_contents(workspace.path()),
        session.controller().serialized_value()
    );

    session.append().unwrap();
    session
        .set_field(1, lora_stack::stack::EntryEdit::Enabled(false))
        .unwrap();
    assert_eq!(
        field_file_contents(workspace.path()),
        session.controller().serialized_value()
    );

    session.toggle_all().unwrap();
    assert_eq!(
        field_file_contents(workspace.path()),
        session.controller().serialized_value()
    );

    session.remove_at(0).unwrap();
    assert_eq!(
        field_file_contents(workspace.path()),
        session.controller().serialized_value()
    );
}

#[test]
fn test_session_round_trip_across_reopens() {
    let workspace = initialized_workspace();

    {
        let mut session = StackSession::open(workspace.path()).unwrap();
        session.append().unwrap();
        session.append().unwrap();
        session
            .set_field(0, lora_stack::stack::EntryEdit::Lora("a.safetensors".to_string()))
            .unwrap();
        session
            .set_field(1, lora_stack::stack::EntryEdit::Strength(0.25))
            .unwrap();
    }

    let reopened = StackSession::open(workspace.path()).unwrap();

    assert_eq!(reopened.controller().len(), 2);
    assert_eq!(reopened.controller().get(0).unwrap().lora, "a.safetensors");
    assert_eq!(reopened.controller().get(1).unwrap().strength, 0.25);
}

#[test]
fn test_failed_removal_leaves_field_file_untouched() {
    let workspace = initialized_workspace();
    let mut session = StackSession::open(workspace.path()).unwrap();
    session.append().unwrap();
    let before = field_file_contents(workspace.path());

    assert!(session.remove_at(3).is_err());

    assert_eq!(field_file_contents(workspace.path()), before);
}

#[test]
fn test_corrupt_field_file_fails_hydration() {
    let workspace = initialized_workspace();
    fs::write(workspace.path().join("lora_stack.json"), "[{\"on\":true}]").unwrap();

    let err = StackSession::open(workspace.path()).unwrap_err();

    assert!(matches!(err, LoraStackError::MalformedEncoding(_)));
}

#[test]
fn test_custom_field_file_location() {
    let temp_dir = TempDir::new().unwrap();
    config::initialize_workspace(temp_dir.path(), None).unwrap();

    let config_file = config::get_workspace_config_dir(temp_dir.path()).join("config.json");
    let mut settings = Settings::load_from_file(&config_file).unwrap();
    settings.set_value("stack.field_file", "fields/stack.json").unwrap();
    settings.save_to_file(&config_file).unwrap();
    fs::create_dir_all(temp_dir.path().join("fields")).unwrap();

    let mut session = StackSession::open(temp_dir.path()).unwrap();
    session.append().unwrap();

    let published = fs::read_to_string(temp_dir.path().join("fields/stack.json")).unwrap();
    assert_eq!(codec::decode(&published).unwrap().len(), 1);
}
