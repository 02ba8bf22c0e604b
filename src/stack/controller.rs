use crate::errors::{LoraStackError, Result};
use crate::stack::codec;
use crate::stack::entry::{EntryEdit, LoraEntry};
use crate::stack::sink::OutputSink;
use tracing::debug;

/// Owns the ordered entry list and publishes the canonical encoding to the
/// output sink after every mutation
///
/// Entries are addressed purely by their current 0-based index; after any
/// public call returns, indices are contiguous and the 1-based display labels
/// match positions. Index validation happens before anything is touched, so a
/// failed call leaves both the stack and the sink exactly as they were.
#[derive(Debug)]
pub struct StackController<S: OutputSink> {
    entries: Vec<LoraEntry>,
    labels: Vec<String>,
    sink: S,
}

impl<S: OutputSink> StackController<S> {
    /// Create an empty controller
    ///
    /// The stack starts with no entries; hosts conventionally append one
    /// immediately after construction.
    pub fn new(sink: S) -> Self {
        Self {
            entries: Vec::new(),
            labels: Vec::new(),
            sink,
        }
    }

    /// Hydrate a controller from entries decoded out of an existing field value
    pub fn with_entries(entries: Vec<LoraEntry>, sink: S) -> Self {
        let mut controller = Self {
            entries,
            labels: Vec::new(),
            sink,
        };
        controller.relabel();
        controller
    }

    /// Append a new entry with default values at the end of the stack
    ///
    /// Returns the new entry's index. The list mutation itself cannot fail;
    /// an error can only arise from the sink publish.
    pub fn append(&mut self) -> Result<usize> {
        self.entries.push(LoraEntry::default());
        self.relabel();
        self.publish()?;
        Ok(self.entries.len() - 1)
    }

    /// Remove the entry at `index`, shifting subsequent entries down
    ///
    /// Remaining entries keep their relative order and are relabeled to match
    /// their new positions.
    pub fn remove_at(&mut self, index: usize) -> Result<LoraEntry> {
        if index >= self.entries.len() {
            return Err(LoraStackError::index_out_of_range(
                index,
                self.entries.len(),
            ));
        }

        let removed = self.entries.remove(index);
        self.relabel();
        self.publish()?;
        Ok(removed)
    }

    /// Update exactly one field on the entry at `index`
    pub fn set_field(&mut self, index: usize, edit: EntryEdit) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| LoraStackError::index_out_of_range(index, len))?;

        match edit {
            EntryEdit::Enabled(enabled) => entry.enabled = enabled,
            EntryEdit::Lora(lora) => entry.lora = lora,
            EntryEdit::Strength(strength) => entry.strength = strength,
        }

        self.publish()
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<()> {
        self.set_field(index, EntryEdit::Enabled(enabled))
    }

    pub fn set_lora(&mut self, index: usize, lora: impl Into<String>) -> Result<()> {
        self.set_field(index, EntryEdit::Lora(lora.into()))
    }

    pub fn set_strength(&mut self, index: usize, strength: f64) -> Result<()> {
        self.set_field(index, EntryEdit::Strength(strength))
    }

    /// Flip every entry to the opposite of "all enabled"
    ///
    /// `all_enabled` is vacuously true for an empty stack. A mixed stack is
    /// not all-enabled, so toggling it enables every entry. Returns the flag
    /// value every entry now carries.
    pub fn toggle_all(&mut self) -> Result<bool> {
        let all_enabled = self.entries.iter().all(|entry| entry.enabled);
        let new_state = !all_enabled;

        for entry in &mut self.entries {
            entry.enabled = new_state;
        }

        self.publish()?;
        Ok(new_state)
    }

    /// Set every entry's enabled flag to the given value
    pub fn set_all_enabled(&mut self, enabled: bool) -> Result<()> {
        for entry in &mut self.entries {
            entry.enabled = enabled;
        }

        self.publish()
    }

    /// Current canonical encoding of the stack
    ///
    /// Pure read; safe to call at any time, including on an empty stack.
    pub fn serialized_value(&self) -> String {
        codec::encode(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoraEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LoraEntry> {
        self.entries.get(index)
    }

    /// 1-based display labels, one per entry, in stack order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Recompute the 1-based display labels from current positions
    ///
    /// Must run after every structural change, before publish.
    fn relabel(&mut self) {
        self.labels = (1..=self.entries.len())
            .map(|position| format!("LoRA {position}"))
            .collect();
    }

    fn publish(&mut self) -> Result<()> {
        let encoded = codec::encode(&self.entries);
        self.sink.publish(&encoded)?;
        debug!("Published stack of {} entries", self.entries.len());
        Ok(())
    }
}
