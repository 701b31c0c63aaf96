//! Status types for plans and plan items.

use std::{borrow::Cow, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Lifecycle status of a plan.
///
/// The set of plan statuses is owned by whoever consumes the document (a
/// codec or schema), so this is an open, string-backed value. Only
/// [`PlanStatus::DRAFT`] is known to the builder; any other status is carried
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct PlanStatus(Cow<'static, str>);

impl PlanStatus {
    /// Plan is being written and has not been proposed yet
    pub const DRAFT: PlanStatus = PlanStatus(Cow::Borrowed("draft"));

    /// Creates a status from any collaborator-defined name.
    pub fn new(status: impl Into<String>) -> Self {
        Self(Cow::Owned(status.into()))
    }

    /// Returns the status name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the draft status.
    pub fn is_draft(&self) -> bool {
        *self == Self::DRAFT
    }
}

impl Default for PlanStatus {
    fn default() -> Self {
        Self::DRAFT
    }
}

impl FromStr for PlanStatus {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(
                DocumentError::invalid_input("status").with_reason("Plan status cannot be empty")
            );
        }

        if trimmed.eq_ignore_ascii_case(Self::DRAFT.as_str()) {
            Ok(Self::DRAFT)
        } else {
            Ok(Self::new(trimmed))
        }
    }
}

/// Type-safe enumeration of plan item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum PlanItemStatus {
    /// Item has not been started
    #[default]
    Pending,

    /// Item is being worked on
    InProgress,

    /// Item has been completed
    Completed,
}

impl FromStr for PlanItemStatus {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(PlanItemStatus::Pending),
            "inprogress" | "in_progress" | "in-progress" => Ok(PlanItemStatus::InProgress),
            "completed" => Ok(PlanItemStatus::Completed),
            _ => Err(DocumentError::invalid_input("status")
                .with_reason(format!("Invalid plan item status: {s}"))),
        }
    }
}

impl PlanItemStatus {
    /// Convert to the document string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanItemStatus::Pending => "pending",
            PlanItemStatus::InProgress => "inProgress",
            PlanItemStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for completed items
    /// - `➤ In Progress` - Arrow for active items
    /// - `○ Pending` - Circle for pending items
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcontext_core::models::PlanItemStatus;
    ///
    /// assert_eq!(PlanItemStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(PlanItemStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(PlanItemStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanItemStatus::Completed => "✓ Completed",
            PlanItemStatus::InProgress => "➤ In Progress",
            PlanItemStatus::Pending => "○ Pending",
        }
    }
}
