//! Score, rank and top commands

use std::path::Path;

use anyhow::Context as _;
use taskrank::clock::Clock;
use taskrank::loader::{load_tasks, task_label};
use taskrank::models::Task;
use taskrank::output::{RankingResult, ScoredTaskInfo};

use super::Context;

fn load(path: &Path) -> anyhow::Result<Vec<Task>> {
    load_tasks(path).with_context(|| format!("failed to load tasks from {}", path.display()))
}

/// Labels follow file position, so look them up before reordering
fn label_of(tasks: &[Task], task: &Task) -> String {
    let index = tasks.iter().position(|t| std::ptr::eq(t, task)).unwrap_or_default();
    task_label(task, index)
}

fn render(ctx: &Context, tasks: &[Task], listed: &[(&Task, i64)]) {
    let infos: Vec<ScoredTaskInfo> = listed
        .iter()
        .enumerate()
        .map(|(i, &(task, score))| ScoredTaskInfo::new(i + 1, label_of(tasks, task), task, score))
        .collect();

    RankingResult {
        now: ctx.scorer.clock().now().to_rfc3339(),
        total: infos.len(),
        tasks: infos,
    }
    .render(ctx.mode);
}

/// Score every task in file order
pub fn score(ctx: &Context, path: &Path) -> anyhow::Result<()> {
    let tasks = load(path)?;
    let scored: Vec<(&Task, i64)> = tasks.iter().map(|t| (t, ctx.scorer.score(t))).collect();
    render(ctx, &tasks, &scored);
    Ok(())
}

/// List every task, highest score first
pub fn rank(ctx: &Context, path: &Path) -> anyhow::Result<()> {
    let tasks = load(path)?;
    let ranked = ctx.scorer.rank_with_scores(&tasks);
    render(ctx, &tasks, &ranked);
    Ok(())
}

/// List the first `limit` tasks of the ranking
pub fn top(ctx: &Context, path: &Path, limit: usize) -> anyhow::Result<()> {
    let tasks = load(path)?;
    let ranked = ctx.scorer.top_with_scores(&tasks, limit);
    render(ctx, &tasks, &ranked);
    Ok(())
}
