//! Ranking tasks by score
//!
//! Rankings are stable: tasks with equal scores keep their input order.
//! Every task is scored once per ranking, against a single instant.

use std::cmp::Reverse;

use crate::clock::Clock;
use crate::models::Task;
use crate::scoring::TaskScorer;

/// Number of tasks [`get_top_priority_tasks`] callers usually ask for
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// All tasks, highest score first, using the system clock and default weights
#[must_use]
pub fn sort_tasks_by_importance(tasks: &[Task]) -> Vec<&Task> {
    TaskScorer::new().rank(tasks)
}

/// The first `limit` tasks of [`sort_tasks_by_importance`]
#[must_use]
pub fn get_top_priority_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    TaskScorer::new().top(tasks, limit)
}

impl<C: Clock> TaskScorer<C> {
    /// Tasks paired with their scores, highest score first
    #[must_use]
    pub fn rank_with_scores<'a>(&self, tasks: &'a [Task]) -> Vec<(&'a Task, i64)> {
        let now = self.clock().now();
        let mut scored: Vec<(&Task, i64)> =
            tasks.iter().map(|task| (task, self.breakdown_at(task, now).total())).collect();
        // sort_by_key is stable, so ties keep input order
        scored.sort_by_key(|&(_, score)| Reverse(score));
        log::debug!("ranked {} task(s)", scored.len());
        scored
    }

    /// Tasks, highest score first
    #[must_use]
    pub fn rank<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        self.rank_with_scores(tasks).into_iter().map(|(task, _)| task).collect()
    }

    /// The first `limit` tasks of [`TaskScorer::rank`]
    #[must_use]
    pub fn top<'a>(&self, tasks: &'a [Task], limit: usize) -> Vec<&'a Task> {
        self.top_with_scores(tasks, limit).into_iter().map(|(task, _)| task).collect()
    }

    /// The first `limit` entries of [`TaskScorer::rank_with_scores`]
    #[must_use]
    pub fn top_with_scores<'a>(&self, tasks: &'a [Task], limit: usize) -> Vec<(&'a Task, i64)> {
        let mut ranked = self.rank_with_scores(tasks);
        ranked.truncate(limit);
        ranked
    }
}
