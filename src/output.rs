//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::Task;
use crate::scoring::{DueBand, ScoreBreakdown};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A task with its score
#[derive(Debug, Serialize)]
pub struct ScoredTaskInfo {
    /// 1-based position in the listing
    pub rank: usize,
    /// Task id, or `#N` for its position in the file
    pub id: String,
    /// Task title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Computed score
    pub score: i64,
    /// Priority level
    pub priority: String,
    /// Status
    pub status: String,
    /// Deadline (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Tags
    pub tags: Vec<String>,
}

impl ScoredTaskInfo {
    /// Build from a task, its display label and its score
    #[must_use]
    pub fn new(rank: usize, label: String, task: &Task, score: i64) -> Self {
        Self {
            rank,
            id: label,
            title: task.title.clone(),
            score,
            priority: task.priority.to_string(),
            status: task.status.to_string(),
            due_date: task.due_date.map(|d| d.to_rfc3339()),
            tags: task.tags.clone(),
        }
    }
}

/// Result of a score, rank or top listing
#[derive(Debug, Serialize)]
pub struct RankingResult {
    /// Instant the scores were computed against (RFC3339)
    pub now: String,
    /// Number of tasks listed
    pub total: usize,
    /// Listed tasks
    pub tasks: Vec<ScoredTaskInfo>,
}

/// Result of explaining one task's score
#[derive(Debug, Serialize)]
pub struct BreakdownResult {
    /// Instant the score was computed against (RFC3339)
    pub now: String,
    /// Task id or position label
    pub id: String,
    /// Task title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Final score
    pub score: i64,
    /// Per-rule contributions
    pub breakdown: ScoreBreakdown,
}

fn colored_score(score: i64) -> String {
    let text = format!("{score:>4}");
    if score >= 60 {
        text.red().bold().to_string()
    } else if score >= 30 {
        text.yellow().to_string()
    } else if score < 0 {
        text.dimmed().to_string()
    } else {
        text
    }
}

impl RankingResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks.");
            return;
        }

        println!("Scored {} task(s) as of {}\n", self.total, self.now);
        for t in &self.tasks {
            let title = t.title.as_deref().unwrap_or("");
            println!("  {:>3}. {} [{}] {}", t.rank, colored_score(t.score), t.id, title);
            let due = t.due_date.as_deref().unwrap_or("none");
            println!("         {} / {} / due {}", t.priority, t.status, due);
            if !t.tags.is_empty() {
                println!("         tags: {}", t.tags.join(", "));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl BreakdownResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let b = &self.breakdown;
        match &self.title {
            Some(title) => println!("[{}] {}", self.id, title),
            None => println!("[{}]", self.id),
        }
        println!("  as of {}\n", self.now);
        println!("  base     {:>+5}", b.base);
        match (b.days_until_due, b.due_band) {
            (Some(days), Some(band)) => {
                println!("  due      {:>+5}  ({} day(s), {})", b.due, days, band_label(band));
            },
            _ => println!("  due      {:>+5}  (no deadline)", b.due),
        }
        println!("  status   {:>+5}", b.status);
        println!("  tags     {:>+5}", b.tags);
        println!(
            "  recency  {:>+5}  ({} day(s) since update)",
            b.recency, b.days_since_update
        );
        println!("  ----------------");
        println!("  score    {}", colored_score(self.score));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

const fn band_label(band: DueBand) -> &'static str {
    match band {
        DueBand::Overdue => "overdue",
        DueBand::Today => "due today",
        DueBand::Soon => "due soon",
        DueBand::WithinWeek => "due this week",
        DueBand::Later => "due later",
    }
}
