//! Catalog of selectable LoRA names
//!
//! The host supplies the list of valid names; the core never validates
//! membership itself. When the host cannot be reached the catalog degrades to
//! the `"None"`-only fallback so editing stays usable.

pub mod remote;

pub use remote::RemoteCatalog;

use crate::stack::entry::NONE_SELECTION;

/// Ordered list of selectable LoRA names, always headed by the `"None"`
/// sentinel
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Fallback used when the remote source is unavailable or empty
    pub fn fallback() -> Self {
        Self {
            names: vec![NONE_SELECTION.to_string()],
        }
    }

    /// Build a catalog from host-supplied names, deduplicated in order
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut catalog = vec![NONE_SELECTION.to_string()];
        for name in names {
            if name != NONE_SELECTION && !catalog.contains(&name) {
                catalog.push(name);
            }
        }

        Self { names: catalog }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a selection is valid; the `"None"` sentinel always is
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    /// Whether this is the degraded `"None"`-only catalog
    pub fn is_fallback(&self) -> bool {
        self.names.len() == 1
    }
}
