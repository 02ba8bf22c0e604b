use serde::{Deserialize, Serialize};

/// Sentinel selection meaning no LoRA has been chosen yet
pub const NONE_SELECTION: &str = "None";

/// Represents a single entry in the LoRA stack
///
/// The serialized field names (`on`, `lora`, `strength`) are the wire contract
/// consumed downstream and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoraEntry {
    /// Whether this entry is applied by the downstream consumer
    #[serde(rename = "on")]
    pub enabled: bool,
    /// Selected LoRA name, or the `"None"` sentinel
    pub lora: String,
    /// Application strength
    pub strength: f64,
}

impl Default for LoraEntry {
    fn default() -> Self {
        Self {
            enabled: true,
            lora: NONE_SELECTION.to_string(),
            strength: 1.0,
        }
    }
}

impl LoraEntry {
    /// Whether a real LoRA name has been selected
    pub fn has_selection(&self) -> bool {
        self.lora != NONE_SELECTION
    }

    /// Whether the downstream consumer would actually apply this entry
    ///
    /// Disabled entries, unselected entries, and zero-strength entries are
    /// all skipped on the consuming side.
    pub fn is_effective(&self) -> bool {
        self.enabled && self.has_selection() && self.strength != 0.0
    }
}

/// A single-field edit applied to an existing entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryEdit {
    Enabled(bool),
    Lora(String),
    Strength(f64),
}

impl EntryEdit {
    /// Name of the field this edit targets, in wire-contract terms
    pub fn field_name(&self) -> &'static str {
        match self {
            EntryEdit::Enabled(_) => "on",
            EntryEdit::Lora(_) => "lora",
            EntryEdit::Strength(_) => "strength",
        }
    }
}
