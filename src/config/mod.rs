pub mod settings;

pub use settings::{CatalogConfig, Settings, StackConfig};

use crate::errors::{LoraStackError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-workspace configuration directory
pub const CONFIG_DIR_NAME: &str = ".lorastack";

/// Get the configuration directory for a specific workspace
pub fn get_workspace_config_dir(workspace: &Path) -> PathBuf {
    workspace.join(CONFIG_DIR_NAME)
}

/// Ensure the configuration directory exists
pub fn ensure_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).map_err(|e| {
            LoraStackError::config(format!("Failed to create config directory: {e}"))
        })?;
    }

    Ok(())
}

/// Check if a workspace is initialized for LoRA stack editing
pub fn is_workspace_initialized(workspace: &Path) -> bool {
    let config_dir = workspace.join(CONFIG_DIR_NAME);
    config_dir.exists() && config_dir.join("config.json").exists()
}

/// Initialize a workspace: write default settings under `.lorastack/`
pub fn initialize_workspace(workspace: &Path, catalog_url: Option<String>) -> Result<()> {
    let config_dir = get_workspace_config_dir(workspace);
    ensure_config_dir(&config_dir)?;

    let settings = Settings::default_for_workspace(catalog_url);
    settings.validate()?;
    settings.save_to_file(&config_dir.join("config.json"))?;

    tracing::info!(
        "Initialized LoRA stack workspace at {}",
        workspace.display()
    );
    Ok(())
}
