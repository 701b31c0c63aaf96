//! Core library for building vContext plan documents.
//!
//! This crate provides the in-memory document model for plans and a fluent
//! builder to assemble them. It performs no I/O, no persistence and no
//! serialization of its own; codecs and storage layers consume the public
//! fields of the [`Document`] it produces.
//!
//! # Quick Start
//!
//! ```rust
//! use vcontext_core::{PlanBuilder, PlanStatus};
//!
//! let document = PlanBuilder::new_with_status("1.0", "Adopt structured plans", PlanStatus::DRAFT)
//!     .with_author("Platform Team")
//!     .with_proposal("Proposal", "Describe every change as a plan document.")
//!     .with_risks("Risks", "Plans may drift from the code.")
//!     .add_completed_item("Draft the format")
//!     .add_in_progress_item("Write the builder")
//!     .add_pending_item("Migrate existing docs")
//!     .build();
//!
//! assert_eq!(document.plan.items.len(), 3);
//! println!("{document}");
//! ```

pub mod builder;
pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use builder::PlanBuilder;
pub use error::{DocumentError, Result};
pub use models::{
    narrative_keys, Document, Info, Narrative, Plan, PlanItem, PlanItemStatus, PlanProgress,
    PlanStatus,
};
