//! Item progress statistics for a plan.

use serde::{Deserialize, Serialize};

use super::{Plan, PlanItemStatus};

/// Counts of a plan's items by status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlanProgress {
    /// Total number of items
    pub total: usize,
    /// Number of pending items
    pub pending: usize,
    /// Number of in-progress items
    pub in_progress: usize,
    /// Number of completed items
    pub completed: usize,
}

impl PlanProgress {
    /// Returns true when the plan has items and all of them are completed.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl From<&Plan> for PlanProgress {
    fn from(plan: &Plan) -> Self {
        plan.items
            .iter()
            .fold(Self::default(), |mut progress, item| {
                progress.total += 1;
                match item.status {
                    PlanItemStatus::Pending => progress.pending += 1,
                    PlanItemStatus::InProgress => progress.in_progress += 1,
                    PlanItemStatus::Completed => progress.completed += 1,
                }
                progress
            })
    }
}
