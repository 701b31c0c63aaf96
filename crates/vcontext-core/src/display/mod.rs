//! Markdown display for plan documents.
//!
//! The models implement [`std::fmt::Display`] here rather than next to their
//! definitions, keeping data shapes apart from presentation. Every
//! implementation produces markdown suitable for terminal rendering.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PlanBuilder   │───▶│    Document     │───▶│    Markdown     │
//! │                 │    │  (Info, Plan)   │    │ (Display impls) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Layout
//!
//! - Plan title as the top-level header
//! - Metadata list (status, version, author)
//! - Description paragraph, when present
//! - One section per narrative, well-known keys first
//! - Items with status icons and a completed/total counter
//!
//! ```rust
//! use vcontext_core::PlanBuilder;
//!
//! let document = PlanBuilder::new("Release 2.0", "1.0")
//!     .with_proposal("Proposal", "Ship it")
//!     .add_completed_item("Freeze branch")
//!     .add_pending_item("Tag release")
//!     .build();
//!
//! let output = document.to_string();
//! assert!(output.starts_with("# Release 2.0"));
//! assert!(output.contains("## Items (1/2)"));
//! assert!(output.contains("- Freeze branch (✓ Completed)"));
//! ```

pub mod models;
