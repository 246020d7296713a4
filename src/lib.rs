//! taskrank - composite priority scoring and ranking for task lists
//!
//! This library scores tasks from their priority, deadline, status, tags and
//! recency, and ranks collections of tasks by that score.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod clock;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod ranking;
pub mod scoring;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ScoringConfig};
pub use error::{Error, Result};
pub use models::{Priority, Task, TaskRecord, TaskStatus};
pub use ranking::{DEFAULT_TOP_LIMIT, get_top_priority_tasks, sort_tasks_by_importance};
pub use scoring::{ScoreBreakdown, TaskScorer, calculate_task_score, calculate_task_score_at};
