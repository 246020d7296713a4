//! Task scoring
//!
//! A score is the sum of five independent adjustments:
//!
//! | rule     | contribution                                              |
//! |----------|-----------------------------------------------------------|
//! | base     | priority weight x 10 (low 1, medium 2, high 4, urgent 6)  |
//! | due      | overdue +35, today +20, 1-2 days +15, 3-7 days +10        |
//! | status   | done -50, review -15                                      |
//! | tags     | +8 if any tag is `blocker`, `critical` or `urgent`        |
//! | recency  | +5 if updated less than one whole day ago                 |
//!
//! Day counts floor toward negative infinity, so one second overdue is
//! already day -1 and 23 hours ahead is still day 0.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::{DueBonuses, ScoringConfig};
use crate::error::Result;
use crate::models::{Priority, Task, TaskRecord, TaskStatus};

/// Score `task` against the system clock with default weights
#[must_use]
pub fn calculate_task_score(task: &Task) -> i64 {
    TaskScorer::new().score(task)
}

/// Score `task` as of `now` with default weights
#[must_use]
pub fn calculate_task_score_at(task: &Task, now: DateTime<Utc>) -> i64 {
    TaskScorer::new().breakdown_at(task, now).total()
}

/// Whole days in `delta`, floored toward negative infinity
#[must_use]
pub fn floor_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    // num_days truncates toward zero
    if delta < TimeDelta::days(days) { days - 1 } else { days }
}

/// Deadline band a task falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueBand {
    /// Past due
    Overdue,
    /// Due within the current whole day
    Today,
    /// Due in the next couple of days
    Soon,
    /// Due within the week
    WithinWeek,
    /// Due later than that
    Later,
}

impl DueBand {
    /// Classify a whole-day distance to the deadline; first matching band wins
    #[must_use]
    pub const fn classify(days_until_due: i64, bands: &DueBonuses) -> Self {
        if days_until_due < 0 {
            Self::Overdue
        } else if days_until_due == 0 {
            Self::Today
        } else if days_until_due <= bands.soon_days {
            Self::Soon
        } else if days_until_due <= bands.week_days {
            Self::WithinWeek
        } else {
            Self::Later
        }
    }

    /// Bonus this band earns
    #[must_use]
    pub const fn bonus(self, bands: &DueBonuses) -> i64 {
        match self {
            Self::Overdue => bands.overdue,
            Self::Today => bands.today,
            Self::Soon => bands.soon,
            Self::WithinWeek => bands.within_week,
            Self::Later => 0,
        }
    }
}

impl std::fmt::Display for DueBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue => write!(f, "overdue"),
            Self::Today => write!(f, "today"),
            Self::Soon => write!(f, "soon"),
            Self::WithinWeek => write!(f, "within_week"),
            Self::Later => write!(f, "later"),
        }
    }
}

/// Per-rule contributions to a score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Priority weight times multiplier
    pub base: i64,
    /// Deadline band bonus
    pub due: i64,
    /// Status adjustment
    pub status: i64,
    /// Critical tag boost
    pub tags: i64,
    /// Recent update boost
    pub recency: i64,
    /// Whole days until the deadline, if there is one
    pub days_until_due: Option<i64>,
    /// Band the deadline falls in, if there is one
    pub due_band: Option<DueBand>,
    /// Whole days since the last update (negative if in the future)
    pub days_since_update: i64,
}

impl ScoreBreakdown {
    /// The score: sum of all contributions, saturating at the `i64` bounds
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.base
            .saturating_add(self.due)
            .saturating_add(self.status)
            .saturating_add(self.tags)
            .saturating_add(self.recency)
    }
}

/// Scores tasks with a set of weights against a clock
#[derive(Debug, Clone, Default)]
pub struct TaskScorer<C = SystemClock> {
    config: ScoringConfig,
    clock: C,
}

impl TaskScorer<SystemClock> {
    /// Default weights, system clock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> TaskScorer<C> {
    /// Default weights, given clock
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            config: ScoringConfig::default(),
            clock,
        }
    }

    /// Replace the weights
    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Weights in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The clock scores are measured against
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Score one task as of the clock's current instant
    #[must_use]
    pub fn score(&self, task: &Task) -> i64 {
        self.breakdown(task).total()
    }

    /// Break down one task's score as of the clock's current instant
    #[must_use]
    pub fn breakdown(&self, task: &Task) -> ScoreBreakdown {
        self.breakdown_at(task, self.clock.now())
    }

    /// Convert a raw record and score it
    pub fn score_record(&self, record: TaskRecord) -> Result<i64> {
        let task = Task::try_from(record)?;
        Ok(self.score(&task))
    }

    /// Break down one task's score as of `now`
    #[must_use]
    pub fn breakdown_at(&self, task: &Task, now: DateTime<Utc>) -> ScoreBreakdown {
        let cfg = &self.config;

        let base = self.priority_weight(&task.priority).saturating_mul(cfg.base_multiplier);

        let days_until_due = task.due_date.map(|due| floor_days(due - now));
        let due_band = days_until_due.map(|days| DueBand::classify(days, &cfg.due));
        let due = due_band.map_or(0, |band| band.bonus(&cfg.due));
        if let (Some(days), Some(band)) = (days_until_due, due_band) {
            log::trace!("due in {days} day(s): {band}");
        }

        let status = match task.status {
            TaskStatus::Done => cfg.status.done,
            TaskStatus::Review => cfg.status.review,
            TaskStatus::Active | TaskStatus::Other(_) => 0,
        };

        let tags = if cfg.critical_tags.iter().any(|tag| task.has_tag(tag)) {
            cfg.tag_boost
        } else {
            0
        };

        let days_since_update = floor_days(now - task.updated_at);
        let recency = if days_since_update < cfg.recency_window_days {
            cfg.recency_boost
        } else {
            0
        };

        let breakdown = ScoreBreakdown {
            base,
            due,
            status,
            tags,
            recency,
            days_until_due,
            due_band,
            days_since_update,
        };
        log::debug!(
            "task {}: base={} due={} status={} tags={} recency={} total={}",
            task.id.as_deref().unwrap_or("-"),
            base,
            due,
            status,
            tags,
            recency,
            breakdown.total()
        );
        breakdown
    }

    const fn priority_weight(&self, priority: &Priority) -> i64 {
        let weights = &self.config.priority_weights;
        match priority {
            Priority::Low => weights.low,
            Priority::Medium => weights.medium,
            Priority::High => weights.high,
            Priority::Urgent => weights.urgent,
            Priority::Other(_) => 0,
        }
    }
}
