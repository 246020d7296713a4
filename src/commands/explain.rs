//! Explain command - per-rule score breakdown for one task

use std::path::Path;

use anyhow::Context as _;
use taskrank::clock::Clock;
use taskrank::loader::{find_task, load_tasks};
use taskrank::output::BreakdownResult;

use super::Context;

/// Print how one task's score is made up
pub fn explain(ctx: &Context, path: &Path, id: &str) -> anyhow::Result<()> {
    let tasks =
        load_tasks(path).with_context(|| format!("failed to load tasks from {}", path.display()))?;
    let task = find_task(&tasks, id)?;
    let breakdown = ctx.scorer.breakdown(task);

    BreakdownResult {
        now: ctx.scorer.clock().now().to_rfc3339(),
        id: id.to_string(),
        title: task.title.clone(),
        score: breakdown.total(),
        breakdown,
    }
    .render(ctx.mode);
    Ok(())
}
