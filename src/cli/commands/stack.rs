use crate::catalog::RemoteCatalog;
use crate::cli::output::Output;
use crate::errors::{LoraStackError, Result};
use crate::stack::{EntryEdit, StackSession};
use clap::{Subcommand, ValueEnum};
use console::style;
use std::env;

#[derive(Debug, Subcommand)]
pub enum StackAction {
    /// Append a new entry with default values
    Add,

    /// Remove the entry at the given position
    Remove {
        /// Entry position (1-based, as shown by 'stack show')
        position: usize,
    },

    /// Set one field on the entry at the given position
    Set {
        /// Entry position (1-based)
        position: usize,

        /// Field to update
        #[arg(value_enum)]
        field: FieldArg,

        /// New value for the field
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Toggle every entry: disables all when all are enabled, enables all otherwise
    ToggleAll,

    /// Enable every entry
    EnableAll,

    /// Disable every entry
    DisableAll,

    /// Show the stack
    Show {
        /// Print only the raw encoded field value
        #[arg(long)]
        raw: bool,
    },
}

/// Entry fields addressable from the command line, named per the wire contract
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    On,
    Lora,
    Strength,
}

pub async fn run(action: StackAction) -> Result<()> {
    let workspace = env::current_dir()
        .map_err(|e| LoraStackError::config(format!("Could not get current directory: {e}")))?;

    let mut session = StackSession::open(&workspace)?;

    match action {
        StackAction::Add => add(&mut session),
        StackAction::Remove { position } => remove(&mut session, position),
        StackAction::Set {
            position,
            field,
            value,
        } => set(&mut session, position, field, &value).await,
        StackAction::ToggleAll => toggle_all(&mut session),
        StackAction::EnableAll => set_all(&mut session, true),
        StackAction::DisableAll => set_all(&mut session, false),
        StackAction::Show { raw } => show(&session, raw),
    }
}

fn add(session: &mut StackSession) -> Result<()> {
    let index = session.append()?;

    let label = session
        .controller()
        .label_of(index)
        .unwrap_or("entry")
        .to_string();
    Output::success(format!("Added {label}"));
    Output::sub_item(format!("Entries: {}", session.controller().len()));

    Ok(())
}

fn remove(session: &mut StackSession, position: usize) -> Result<()> {
    let index = to_index(position)?;
    let removed = session.remove_at(index)?;

    Output::success(format!("Removed entry {position} ({})", removed.lora));
    if session.controller().is_empty() {
        Output::sub_item("Stack is now empty");
    } else {
        Output::sub_item(format!(
            "Remaining entries relabeled 1..{}",
            session.controller().len()
        ));
    }

    Ok(())
}

async fn set(
    session: &mut StackSession,
    position: usize,
    field: FieldArg,
    value: &str,
) -> Result<()> {
    let index = to_index(position)?;

    let edit = match field {
        FieldArg::On => EntryEdit::Enabled(parse_enabled(value)?),
        FieldArg::Lora => {
            validate_selection(session, value).await?;
            EntryEdit::Lora(value.to_string())
        }
        FieldArg::Strength => EntryEdit::Strength(parse_strength(session, value)?),
    };

    let field_name = edit.field_name();
    session.set_field(index, edit)?;

    Output::success(format!("Set {field_name} = {value} on entry {position}"));
    Ok(())
}

fn toggle_all(session: &mut StackSession) -> Result<()> {
    let enabled = session.toggle_all()?;

    if enabled {
        Output::success("Enabled all entries");
    } else {
        Output::success("Disabled all entries");
    }
    Ok(())
}

fn set_all(session: &mut StackSession, enabled: bool) -> Result<()> {
    session.set_all_enabled(enabled)?;

    Output::success(if enabled {
        "Enabled all entries"
    } else {
        "Disabled all entries"
    });
    Ok(())
}

fn show(session: &StackSession, raw: bool) -> Result<()> {
    if raw {
        println!("{}", session.controller().serialized_value());
        return Ok(());
    }

    Output::section("LoRA Stack");

    if session.controller().is_empty() {
        Output::info("Stack is empty. Add an entry with 'lstack stack add'");
        return Ok(());
    }

    for (index, entry) in session.controller().entries().iter().enumerate() {
        let label = session.controller().label_of(index).unwrap_or("entry");
        let state = if entry.enabled {
            style("on").green()
        } else {
            style("off").red()
        };

        println!(
            "  {:<8} [{}] {} @ {}",
            style(label).bold(),
            state,
            entry.lora,
            entry.strength
        );
    }

    Output::spacing();
    Output::sub_item(format!("Field file: {}", session.field_file().display()));

    Ok(())
}

/// Convert a 1-based display position into a 0-based stack index
fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| LoraStackError::validation("Entry positions are 1-based"))
}

fn parse_enabled(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(LoraStackError::validation(format!(
            "Invalid boolean value: {value} (expected on/off/true/false)"
        ))),
    }
}

fn parse_strength(session: &StackSession, value: &str) -> Result<f64> {
    let strength: f64 = value
        .parse()
        .map_err(|_| LoraStackError::validation(format!("Invalid strength value: {value}")))?;

    let stack = &session.settings().stack;
    if strength < stack.strength_min || strength > stack.strength_max {
        return Err(LoraStackError::validation(format!(
            "Strength {strength} outside configured range {}..{} (step {})",
            stack.strength_min, stack.strength_max, stack.strength_step
        )));
    }

    Ok(strength)
}

/// Check a selection against the host catalog when one can be fetched
///
/// On the degraded fallback catalog the name is accepted unvalidated, so
/// editing stays usable without a reachable host.
async fn validate_selection(session: &StackSession, name: &str) -> Result<()> {
    let remote = RemoteCatalog::new(&session.settings().catalog)?;
    let catalog = remote.fetch_or_fallback().await;

    if catalog.is_fallback() {
        if name != crate::stack::NONE_SELECTION {
            tracing::warn!("Catalog unavailable; accepting '{name}' without validation");
        }
        return Ok(());
    }

    if !catalog.contains(name) {
        return Err(LoraStackError::validation(format!(
            "Unknown LoRA name: {name} ({} known names; see 'lstack catalog')",
            catalog.names().len()
        )));
    }

    Ok(())
}
