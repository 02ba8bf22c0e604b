//! Canonical encoding of the LoRA stack
//!
//! The encoded form is a JSON array of `{"on": …, "lora": …, "strength": …}`
//! objects in stack order. Encoding is deterministic: the same entry sequence
//! always produces byte-identical output, and `decode(encode(s)) == s`.

use crate::errors::{LoraStackError, Result};
use crate::stack::entry::LoraEntry;

/// Canonical encoding of the empty stack
pub const EMPTY_ENCODING: &str = "[]";

/// Encode entries into the canonical field value
pub fn encode(entries: &[LoraEntry]) -> String {
    // A slice of plain structs with string keys cannot fail to serialize
    serde_json::to_string(entries).expect("stack entries always serialize")
}

/// Decode a field value back into entries
///
/// Rejects anything that is not a JSON array of complete three-field entry
/// objects, including entries with unknown keys.
pub fn decode(encoded: &str) -> Result<Vec<LoraEntry>> {
    serde_json::from_str(encoded).map_err(|e| LoraStackError::malformed(e.to_string()))
}
