//! Fluent builder for plan documents.
//!
//! [`PlanBuilder`] owns a [`Document`] while it is being assembled. Every
//! method takes the builder by value, mutates the document in place and
//! hands the builder back, so calls chain naturally:
//!
//! ```rust
//! use vcontext_core::{PlanBuilder, PlanItemStatus, PlanStatus};
//!
//! let document = PlanBuilder::new("My Plan", "1.0")
//!     .with_author("A")
//!     .with_problem("Problem", "desc")
//!     .add_pending_item("Task 1")
//!     .build();
//!
//! assert_eq!(document.info.version, "1.0");
//! assert_eq!(document.info.author.as_deref(), Some("A"));
//! assert_eq!(document.plan.title, "My Plan");
//! assert_eq!(document.plan.status, PlanStatus::DRAFT);
//! assert_eq!(document.plan.items[0].status, PlanItemStatus::Pending);
//! ```
//!
//! No method can fail. The builder does not check that a proposal exists,
//! that item titles are unique, or that status changes make sense; those
//! rules belong to whoever consumes the finished document.
//!
//! [`PlanBuilder::build`] consumes the builder and moves the document out,
//! so nothing can modify it through the builder afterwards. To keep
//! building after taking a copy, clone the builder first: the copy is a
//! snapshot and does not see later changes.

use log::{debug, trace};

use crate::models::{
    narrative_keys, Document, Info, Narrative, Plan, PlanItem, PlanItemStatus, PlanStatus,
};


/// Builder for assembling [`Document`]s that describe a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a PlanBuilder does nothing until `build` is called"]
pub struct PlanBuilder {
    document: Document,
}

impl PlanBuilder {
    /// Creates a builder for a draft plan.
    ///
    /// Shorthand for [`PlanBuilder::new_with_status`] with
    /// [`PlanStatus::DRAFT`]. Note the argument order: title first, then
    /// version.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new_with_status(version, title, PlanStatus::DRAFT)
    }

    /// Creates a builder with an explicit plan status.
    ///
    /// The document starts with no author, no description, no narratives
    /// and no items.
    pub fn new_with_status(
        version: impl Into<String>,
        title: impl Into<String>,
        status: PlanStatus,
    ) -> Self {
        Self {
            document: Document {
                info: Info::new(version),
                plan: Plan::new(title, status),
            },
        }
    }

    /// Sets the document author. The last call wins.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.document.info.author = Some(author.into());
        self
    }

    /// Sets the document description. The last call wins.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.document.info.description = Some(description.into());
        self
    }

    /// Sets the plan status.
    ///
    /// Any status may replace any other; no transition rules apply.
    pub fn with_plan_status(mut self, status: PlanStatus) -> Self {
        self.document.plan.status = status;
        self
    }

    /// Adds a narrative under `key`.
    ///
    /// An existing narrative with the same key is replaced, not merged.
    pub fn with_narrative(
        mut self,
        key: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let narrative = Narrative::new(title, content);
        if self
            .document
            .plan
            .narratives
            .insert(key.clone(), narrative)
            .is_some()
        {
            debug!("Replaced existing narrative '{key}'");
        }
        self
    }

    /// Adds the proposal narrative.
    ///
    /// Plans conventionally carry one, but [`build`](Self::build) does not
    /// require it.
    pub fn with_proposal(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_narrative(narrative_keys::PROPOSAL, title, content)
    }

    /// Adds a problem statement narrative.
    pub fn with_problem(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_narrative(narrative_keys::PROBLEM, title, content)
    }

    /// Adds a context narrative.
    pub fn with_context(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_narrative(narrative_keys::CONTEXT, title, content)
    }

    /// Adds an alternatives narrative.
    pub fn with_alternatives(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_narrative(narrative_keys::ALTERNATIVES, title, content)
    }

    /// Adds a risks narrative.
    pub fn with_risks(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_narrative(narrative_keys::RISKS, title, content)
    }

    /// Adds a testing narrative.
    pub fn with_testing(self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_narrative(narrative_keys::TESTING, title, content)
    }

    /// Appends an item to the plan.
    ///
    /// Items keep their insertion order. Duplicate titles are allowed.
    pub fn add_plan_item(mut self, title: impl Into<String>, status: PlanItemStatus) -> Self {
        let item = PlanItem::new(title, status);
        trace!("Appending plan item '{}' ({})", item.title, item.status);
        self.document.plan.items.push(item);
        self
    }

    /// Appends a pending item.
    pub fn add_pending_item(self, title: impl Into<String>) -> Self {
        self.add_plan_item(title, PlanItemStatus::Pending)
    }

    /// Appends an in-progress item.
    pub fn add_in_progress_item(self, title: impl Into<String>) -> Self {
        self.add_plan_item(title, PlanItemStatus::InProgress)
    }

    /// Appends a completed item.
    pub fn add_completed_item(self, title: impl Into<String>) -> Self {
        self.add_plan_item(title, PlanItemStatus::Completed)
    }

    /// Returns the document assembled so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the constructed document.
    ///
    /// No completeness checks are made.
    pub fn build(self) -> Document {
        debug!(
            "Built plan '{}' with {} narratives and {} items",
            self.document.plan.title,
            self.document.plan.narratives.len(),
            self.document.plan.items.len()
        );
        self.document
    }
}

impl From<PlanBuilder> for Document {
    fn from(builder: PlanBuilder) -> Self {
        builder.build()
    }
}
