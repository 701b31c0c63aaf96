//! Data models for plan documents.
//!
//! This module contains the document shape produced by
//! [`PlanBuilder`](crate::builder::PlanBuilder): a [`Document`] made of
//! [`Info`] metadata and a [`Plan`] body with narratives and items. Display
//! implementations for these models are located in [`crate::display`] to
//! keep data structures apart from presentation.
//!
//! All fields are public. Downstream collaborators (codecs, storage,
//! renderers) read them directly; nothing here validates their contents.
//!
//! # Examples
//!
//! ```rust
//! use vcontext_core::models::{Narrative, Plan, PlanItem, PlanItemStatus, PlanStatus};
//!
//! let mut plan = Plan::new("Migrate storage", PlanStatus::DRAFT);
//! plan.narratives.insert(
//!     "problem".to_string(),
//!     Narrative::new("Problem", "The old store is slow"),
//! );
//! plan.items.push(PlanItem::new("Benchmark", PlanItemStatus::Completed));
//!
//! assert_eq!(plan.narrative("problem").map(|n| n.title.as_str()), Some("Problem"));
//! ```

pub mod document;
pub mod plan;
pub mod progress;
pub mod status;

#[cfg(test)]
mod tests;

pub use document::{Document, Info};
pub use plan::{narrative_keys, Narrative, Plan, PlanItem};
pub use progress::PlanProgress;
pub use status::{PlanItemStatus, PlanStatus};
