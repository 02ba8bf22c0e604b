use crate::cli::output::Output;
use crate::config::{get_workspace_config_dir, initialize_workspace, is_workspace_initialized};
use crate::errors::{LoraStackError, Result};
use crate::stack::StackSession;
use std::env;
use std::fs;

/// Initialize a workspace for LoRA stack editing
pub async fn run(catalog_url: Option<String>, force: bool) -> Result<()> {
    tracing::info!("Initializing LoRA stack workspace...");

    let workspace = env::current_dir()
        .map_err(|e| LoraStackError::config(format!("Could not get current directory: {e}")))?;

    if is_workspace_initialized(&workspace) && !force {
        return Err(LoraStackError::config(
            "Workspace is already initialized. Use --force to reinitialize.",
        ));
    }

    if force && is_workspace_initialized(&workspace) {
        tracing::warn!("Force reinitializing workspace...");

        // A reinitialized workspace starts from a fresh field file; a corrupt
        // one would otherwise fail hydration below
        let old_settings = crate::config::Settings::load_from_file(
            &get_workspace_config_dir(&workspace).join("config.json"),
        )
        .unwrap_or_default();
        let old_field_file = workspace.join(&old_settings.stack.field_file);
        if old_field_file.exists() {
            fs::remove_file(&old_field_file)?;
        }
    }

    initialize_workspace(&workspace, catalog_url.clone())?;

    // Host convention: a freshly created stack carries one default entry
    let mut session = StackSession::open(&workspace)?;
    session.append()?;

    Output::success("Initialized LoRA stack workspace");
    Output::sub_item(format!("Field file: {}", session.field_file().display()));
    if let Some(url) = &catalog_url {
        Output::sub_item(format!("Catalog host: {url}"));
    }

    Output::next_steps(&[
        "lstack stack show",
        "lstack catalog",
        "lstack stack set 1 lora <name>",
        "lstack stack set 1 strength 0.8",
    ]);

    Ok(())
}
