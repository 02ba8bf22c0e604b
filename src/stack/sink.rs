use crate::errors::Result;
use crate::stack::codec::EMPTY_ENCODING;
use crate::utils::atomic_file;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Externally owned string slot that receives the canonical encoding after
/// every mutation
///
/// The slot holds the encoding of the current in-memory stack as of the last
/// completed mutation; it is overwritten wholesale, never updated
/// incrementally.
pub trait OutputSink {
    fn publish(&mut self, encoded: &str) -> Result<()>;
}

/// In-memory sink for tests and embedding hosts
#[derive(Debug, Clone)]
pub struct MemorySink {
    value: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            value: EMPTY_ENCODING.to_string(),
        }
    }

    /// Current slot contents
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for MemorySink {
    fn publish(&mut self, encoded: &str) -> Result<()> {
        self.value = encoded.to_string();
        Ok(())
    }
}

/// File-backed sink holding the host's persisted field value
#[derive(Debug)]
pub struct FieldFileSink {
    path: PathBuf,
}

impl FieldFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FieldFileSink {
    fn publish(&mut self, encoded: &str) -> Result<()> {
        atomic_file::write_string(&self.path, encoded)?;
        debug!(
            "Published {} bytes to {}",
            encoded.len(),
            self.path.display()
        );
        Ok(())
    }
}
