//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use chrono::TimeDelta;
use taskrank::models::{Priority, TaskStatus};
use test_case::test_case;

use crate::common::{at, scorer, stale_task};

// =============================================================================
// Base score
// =============================================================================

#[test_case(Priority::Low, 10 ; "low")]
#[test_case(Priority::Medium, 20 ; "medium")]
#[test_case(Priority::High, 40 ; "high")]
#[test_case(Priority::Urgent, 60 ; "urgent")]
#[test_case(Priority::Other("critical".into()), 0 ; "unrecognized")]
fn test_base_score(priority: Priority, expected: i64) {
    let task = stale_task(priority, TaskStatus::Active);
    assert_eq!(scorer().breakdown(&task).base, expected);
    assert_eq!(scorer().score(&task), expected);
}

// =============================================================================
// Due-date bands
// =============================================================================

#[test_case(TimeDelta::days(-3), 35 ; "overdue by days")]
#[test_case(TimeDelta::minutes(-5), 35 ; "overdue by minutes")]
#[test_case(TimeDelta::zero(), 20 ; "due now")]
#[test_case(TimeDelta::hours(12), 20 ; "due later today")]
#[test_case(TimeDelta::days(1), 15 ; "due tomorrow")]
#[test_case(TimeDelta::days(2) + TimeDelta::hours(23), 15 ; "end of soon band")]
#[test_case(TimeDelta::days(3), 10 ; "start of week band")]
#[test_case(TimeDelta::days(7), 10 ; "end of week band")]
#[test_case(TimeDelta::days(8), 0 ; "beyond a week")]
#[test_case(TimeDelta::days(365), 0 ; "next year")]
fn test_due_band(offset: TimeDelta, expected: i64) {
    let task = stale_task(Priority::Low, TaskStatus::Active).with_due_date(at(offset));
    assert_eq!(scorer().breakdown(&task).due, expected);
}

// =============================================================================
// Status
// =============================================================================

#[test_case(TaskStatus::Active, 0 ; "active")]
#[test_case(TaskStatus::Review, -15 ; "review")]
#[test_case(TaskStatus::Done, -50 ; "done")]
#[test_case(TaskStatus::Other("archived".into()), 0 ; "unrecognized")]
fn test_status_adjustment(status: TaskStatus, expected: i64) {
    let task = stale_task(Priority::Medium, status);
    assert_eq!(scorer().breakdown(&task).status, expected);
}

// =============================================================================
// Recency
// =============================================================================

#[test_case(TimeDelta::zero(), 5 ; "updated now")]
#[test_case(TimeDelta::hours(-23), 5 ; "updated 23 hours ago")]
#[test_case(TimeDelta::days(-1), 0 ; "updated a day ago")]
#[test_case(TimeDelta::days(-30), 0 ; "updated a month ago")]
#[test_case(TimeDelta::hours(2), 5 ; "updated in the future")]
fn test_recency(offset: TimeDelta, expected: i64) {
    let mut task = stale_task(Priority::Low, TaskStatus::Active);
    task.updated_at = at(offset);
    assert_eq!(scorer().breakdown(&task).recency, expected);
}
