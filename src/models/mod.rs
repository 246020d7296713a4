//! Data models for taskrank
//!
//! - Task: the typed view scoring works on
//! - TaskRecord: the untyped form read from task files

pub mod record;
pub mod task;

pub use record::{TaskRecord, parse_timestamp};
pub use task::{Priority, Task, TaskStatus};
