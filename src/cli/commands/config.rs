use crate::cli::output::Output;
use crate::config::{get_workspace_config_dir, is_workspace_initialized, Settings};
use crate::errors::{LoraStackError, Result};
use clap::Subcommand;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., catalog.url)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// List all configuration values
    List,
}

pub async fn run(action: ConfigAction) -> Result<()> {
    let config_file = config_file_path()?;

    match action {
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load_from_file(&config_file)?;
            settings.set_value(&key, &value)?;
            settings.validate()?;
            settings.save_to_file(&config_file)?;
            Output::success(format!("Set {key} = {value}"));
        }
        ConfigAction::Get { key } => {
            let settings = Settings::load_from_file(&config_file)?;
            println!("{}", settings.get_value(&key)?);
        }
        ConfigAction::List => {
            let settings = Settings::load_from_file(&config_file)?;
            Output::section("Configuration");
            for (key, value) in settings.entries() {
                Output::bullet(format!("{key} = {value}"));
            }
        }
    }

    Ok(())
}

fn config_file_path() -> Result<PathBuf> {
    let workspace = env::current_dir()
        .map_err(|e| LoraStackError::config(format!("Could not get current directory: {e}")))?;

    if !is_workspace_initialized(&workspace) {
        return Err(LoraStackError::not_initialized(
            "Workspace is not initialized. Run 'lstack init' first",
        ));
    }

    Ok(get_workspace_config_dir(&workspace).join("config.json"))
}
