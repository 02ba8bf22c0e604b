use crate::catalog::RemoteCatalog;
use crate::cli::output::Output;
use crate::config::is_workspace_initialized;
use crate::errors::{LoraStackError, Result};
use crate::stack::StackSession;
use std::env;

/// Show workspace overview: field file, entry counts, catalog reachability
pub async fn run() -> Result<()> {
    Output::section("Workspace Overview");

    let workspace = env::current_dir()
        .map_err(|e| LoraStackError::config(format!("Could not get current directory: {e}")))?;

    if !is_workspace_initialized(&workspace) {
        Output::error("Workspace is not initialized");
        Output::tip("Run 'lstack init' to get started");
        return Ok(());
    }

    let session = StackSession::open(&workspace)?;
    let controller = session.controller();

    Output::sub_item(format!("Workspace: {}", workspace.display()));
    Output::sub_item(format!("Field file: {}", session.field_file().display()));

    Output::section("Stack");
    let effective = controller
        .entries()
        .iter()
        .filter(|entry| entry.is_effective())
        .count();
    let enabled = controller
        .entries()
        .iter()
        .filter(|entry| entry.enabled)
        .count();
    Output::sub_item(format!("Entries: {}", controller.len()));
    Output::sub_item(format!("Enabled: {enabled}"));
    Output::sub_item(format!("Effective downstream: {effective}"));

    Output::section("Catalog");
    let catalog_config = &session.settings().catalog;
    Output::sub_item(format!("Host: {}", catalog_config.url));
    Output::sub_item(format!(
        "Strength input: {}..{} step {}",
        session.settings().stack.strength_min,
        session.settings().stack.strength_max,
        session.settings().stack.strength_step
    ));

    let remote = RemoteCatalog::new(catalog_config)?;
    match remote.fetch_selectable_names().await {
        Ok(names) => Output::success(format!("Catalog reachable ({} names)", names.len())),
        Err(e) => Output::warning(format!("{e} (editing falls back to 'None' only)")),
    }

    Ok(())
}
