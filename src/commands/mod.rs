//! Command implementations

mod explain;
mod rank;

pub use explain::explain;
pub use rank::{rank, score, top};

use taskrank::clock::FixedClock;
use taskrank::output::OutputMode;
use taskrank::scoring::TaskScorer;

/// Shared state for one CLI invocation
#[derive(Debug)]
pub struct Context {
    /// Scorer frozen at the invocation's instant
    pub scorer: TaskScorer<FixedClock>,
    /// How to render results
    pub mode: OutputMode,
}
