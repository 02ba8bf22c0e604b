use crate::catalog::RemoteCatalog;
use crate::cli::output::Output;
use crate::errors::{LoraStackError, Result};
use crate::stack::StackSession;
use std::env;

/// List the selectable LoRA names supplied by the host
pub async fn run() -> Result<()> {
    let workspace = env::current_dir()
        .map_err(|e| LoraStackError::config(format!("Could not get current directory: {e}")))?;

    let session = StackSession::open(&workspace)?;
    let remote = RemoteCatalog::new(&session.settings().catalog)?;
    let catalog = remote.fetch_or_fallback().await;

    Output::section("LoRA Catalog");

    if catalog.is_fallback() {
        Output::warning(format!(
            "Catalog host {} unreachable; only the 'None' sentinel is available",
            session.settings().catalog.url
        ));
    }

    for name in catalog.names() {
        Output::bullet(name);
    }

    Output::spacing();
    Output::sub_item(format!("{} selectable names", catalog.names().len()));

    Ok(())
}
