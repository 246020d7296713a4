//! Shared test fixtures and helpers
//!
//! Every scorer built here is frozen at [`now`], so expected scores can be
//! worked out by hand.

use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use taskrank::clock::FixedClock;
use taskrank::models::{Priority, Task, TaskStatus};
use taskrank::scoring::TaskScorer;

/// The instant all fixture scores are computed against
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// `now` shifted by `delta`
pub fn at(delta: TimeDelta) -> DateTime<Utc> {
    now() + delta
}

/// Scorer with default weights frozen at [`now`]
pub fn scorer() -> TaskScorer<FixedClock> {
    TaskScorer::with_clock(FixedClock::new(now()))
}

/// A task untouched for ten days, with no deadline and no tags.
///
/// Its score is exactly its base score plus the status adjustment.
pub fn stale_task(priority: Priority, status: TaskStatus) -> Task {
    Task::new(priority, status, at(TimeDelta::days(-10)))
}

/// Stale active task with the given id
pub fn active(id: &str, priority: Priority) -> Task {
    stale_task(priority, TaskStatus::Active).with_id(id)
}

/// Path to a file under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Ids of tasks, in order
pub fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone().unwrap_or_default()).collect()
}
