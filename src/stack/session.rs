use crate::config::{self, Settings};
use crate::errors::{LoraStackError, Result};
use crate::stack::codec;
use crate::stack::controller::StackController;
use crate::stack::entry::{EntryEdit, LoraEntry};
use crate::stack::sink::FieldFileSink;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Manages one editing session over a workspace's persisted field file
///
/// Hydrates the controller by decoding the field file's current contents, and
/// every mutation republishes the canonical encoding back to it. The field
/// file is the only persistence the system has.
#[derive(Debug)]
pub struct StackSession {
    settings: Settings,
    field_file: PathBuf,
    controller: StackController<FieldFileSink>,
}

impl StackSession {
    /// Open a session in an initialized workspace
    pub fn open(workspace: &Path) -> Result<Self> {
        if !config::is_workspace_initialized(workspace) {
            return Err(LoraStackError::not_initialized(
                "Workspace is not initialized. Run 'lstack init' first",
            ));
        }

        let config_dir = config::get_workspace_config_dir(workspace);
        let settings = Settings::load_from_file(&config_dir.join("config.json"))?;
        let field_file = workspace.join(&settings.stack.field_file);

        let entries = if field_file.exists() {
            let raw = fs::read_to_string(&field_file).map_err(|e| {
                LoraStackError::config(format!(
                    "Failed to read field file {}: {e}",
                    field_file.display()
                ))
            })?;
            codec::decode(&raw)?
        } else {
            Vec::new()
        };

        let controller = StackController::with_entries(entries, FieldFileSink::new(&field_file));

        Ok(Self {
            settings,
            field_file,
            controller,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn field_file(&self) -> &Path {
        &self.field_file
    }

    pub fn controller(&self) -> &StackController<FieldFileSink> {
        &self.controller
    }

    /// Append a default entry; returns its index
    pub fn append(&mut self) -> Result<usize> {
        let index = self.controller.append()?;
        info!(
            "Appended {} ({} entries)",
            self.controller.label_of(index).unwrap_or("entry"),
            self.controller.len()
        );
        Ok(index)
    }

    /// Remove the entry at the given 0-based index
    pub fn remove_at(&mut self, index: usize) -> Result<LoraEntry> {
        let removed = self.controller.remove_at(index)?;
        info!(
            "Removed entry {} ({} remain)",
            index + 1,
            self.controller.len()
        );
        Ok(removed)
    }

    /// Apply a single-field edit to the entry at the given 0-based index
    pub fn set_field(&mut self, index: usize, edit: EntryEdit) -> Result<()> {
        let field = edit.field_name();
        self.controller.set_field(index, edit)?;
        info!("Set {} on entry {}", field, index + 1);
        Ok(())
    }

    /// Toggle every entry based on the all-enabled policy
    pub fn toggle_all(&mut self) -> Result<bool> {
        let new_state = self.controller.toggle_all()?;
        info!(
            "Toggled all entries {}",
            if new_state { "on" } else { "off" }
        );
        Ok(new_state)
    }

    /// Set every entry's enabled flag
    pub fn set_all_enabled(&mut self, enabled: bool) -> Result<()> {
        self.controller.set_all_enabled(enabled)?;
        info!(
            "Set all entries {}",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }
}
