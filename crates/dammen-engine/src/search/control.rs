//! Search control: wall-clock deadline and node budget.

use std::time::{Duration, Instant};

/// Decides when a search must stop.
///
/// Polled by the search at the top of every node and before every root
/// move. Either limit tripping aborts the running iteration; a single
/// expensive node (typically its evaluation) can overshoot the deadline.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    deadline: Option<Instant>,
    node_budget: Option<u64>,
}

impl SearchControl {
    /// Create control with a time budget and a node budget.
    pub fn new(time_budget: Duration, node_budget: u64) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: start.checked_add(time_budget),
            node_budget: Some(node_budget),
        }
    }

    /// Create control without any limit.
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            deadline: None,
            node_budget: None,
        }
    }

    /// Return `true` once `nodes` exceeds the budget or the deadline passed.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if let Some(budget) = self.node_budget
            && nodes > budget
        {
            return true;
        }
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
