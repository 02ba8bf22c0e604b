//! LoRA stack editing core
//!
//! This module implements the in-memory stack management:
//! - Entry data model and single-field edits
//! - StackController: append/remove/edit/toggle with publish-on-mutation
//! - Canonical JSON codec for the published field value
//! - Output sinks (in-memory and field-file backed)
//! - Workspace sessions gluing settings, field file, and controller

pub mod codec;
pub mod controller;
pub mod entry;
pub mod session;
pub mod sink;

pub use controller::StackController;
pub use entry::{EntryEdit, LoraEntry, NONE_SELECTION};
pub use session::StackSession;
pub use sink::{FieldFileSink, MemorySink, OutputSink};
