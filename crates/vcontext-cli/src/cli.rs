//! Command-line argument definitions and command handling.
//!
//! Argument structs carry clap-specific attributes and convert into a
//! [`PlanBuilder`] through `From`, keeping the core crate free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → PlanBuilder → Document → Markdown
//! ```

use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use log::{debug, info};
use vcontext_core::{PlanBuilder, PlanItemStatus, PlanStatus};

use crate::renderer::TerminalRenderer;

/// Build a plan document
///
/// Narratives given through the dedicated flags (--proposal, --problem, ...)
/// are applied before --narrative entries, so a --narrative with the same key
/// replaces them. Items are appended in this order: --item entries as given,
/// then --pending, --in-progress and --completed entries.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    pub title: String,
    #[arg(long, default_value = "1.0", help = "Document format version")]
    pub doc_version: String,
    #[arg(short, long, help = "Plan status (defaults to draft)")]
    pub status: Option<PlanStatus>,
    #[arg(short, long, help = "Author of the document")]
    pub author: Option<String>,
    #[arg(short, long, help = "Short description of the document")]
    pub description: Option<String>,
    #[arg(long, value_name = "TITLE:CONTENT", help = "Proposal narrative")]
    pub proposal: Option<SectionArg>,
    #[arg(long, value_name = "TITLE:CONTENT", help = "Problem statement narrative")]
    pub problem: Option<SectionArg>,
    #[arg(long, value_name = "TITLE:CONTENT", help = "Context narrative")]
    pub context: Option<SectionArg>,
    #[arg(long, value_name = "TITLE:CONTENT", help = "Alternatives narrative")]
    pub alternatives: Option<SectionArg>,
    #[arg(long, value_name = "TITLE:CONTENT", help = "Risks narrative")]
    pub risks: Option<SectionArg>,
    #[arg(long, value_name = "TITLE:CONTENT", help = "Testing narrative")]
    pub testing: Option<SectionArg>,
    #[arg(
        short,
        long,
        value_name = "KEY:TITLE:CONTENT",
        help = "Narrative under a custom key (repeatable)"
    )]
    pub narrative: Vec<NarrativeArg>,
    #[arg(
        short,
        long,
        value_name = "STATUS:TITLE",
        help = "Plan item with status pending, in-progress or completed (repeatable)"
    )]
    pub item: Vec<ItemArg>,
    #[arg(long, value_name = "TITLE", help = "Pending plan item (repeatable)")]
    pub pending: Vec<String>,
    #[arg(long, value_name = "TITLE", help = "In-progress plan item (repeatable)")]
    pub in_progress: Vec<String>,
    #[arg(long, value_name = "TITLE", help = "Completed plan item (repeatable)")]
    pub completed: Vec<String>,
}

impl From<CreatePlanArgs> for PlanBuilder {
    fn from(val: CreatePlanArgs) -> Self {
        let status = val.status.unwrap_or_default();
        let mut builder = PlanBuilder::new_with_status(val.doc_version, val.title, status);

        if let Some(author) = val.author {
            builder = builder.with_author(author);
        }
        if let Some(description) = val.description {
            builder = builder.with_description(description);
        }

        if let Some(SectionArg { title, content }) = val.proposal {
            builder = builder.with_proposal(title, content);
        }
        if let Some(SectionArg { title, content }) = val.problem {
            builder = builder.with_problem(title, content);
        }
        if let Some(SectionArg { title, content }) = val.context {
            builder = builder.with_context(title, content);
        }
        if let Some(SectionArg { title, content }) = val.alternatives {
            builder = builder.with_alternatives(title, content);
        }
        if let Some(SectionArg { title, content }) = val.risks {
            builder = builder.with_risks(title, content);
        }
        if let Some(SectionArg { title, content }) = val.testing {
            builder = builder.with_testing(title, content);
        }

        for NarrativeArg { key, title, content } in val.narrative {
            builder = builder.with_narrative(key, title, content);
        }

        for ItemArg { status, title } in val.item {
            builder = builder.add_plan_item(title, status);
        }
        for title in val.pending {
            builder = builder.add_pending_item(title);
        }
        for title in val.in_progress {
            builder = builder.add_in_progress_item(title);
        }
        for title in val.completed {
            builder = builder.add_completed_item(title);
        }

        builder
    }
}

/// A narrative given as `TITLE:CONTENT`.
///
/// Everything after the first colon is content, so content may contain
/// colons while the title may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionArg {
    pub title: String,
    pub content: String,
}

impl FromStr for SectionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (title, content) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected TITLE:CONTENT, got '{s}'"))?;
        let title = title.trim();
        if title.is_empty() {
            return Err("Narrative title cannot be empty".to_string());
        }

        Ok(Self {
            title: title.to_string(),
            content: content.trim().to_string(),
        })
    }
}

/// A narrative given as `KEY:TITLE:CONTENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeArg {
    pub key: String,
    pub title: String,
    pub content: String,
}

impl FromStr for NarrativeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected KEY:TITLE:CONTENT, got '{s}'"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err("Narrative key cannot be empty".to_string());
        }
        let SectionArg { title, content } = rest
            .parse()
            .map_err(|_| format!("Expected KEY:TITLE:CONTENT, got '{s}'"))?;

        Ok(Self {
            key: key.to_string(),
            title,
            content,
        })
    }
}

/// A plan item given as `STATUS:TITLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub status: PlanItemStatus,
    pub title: String,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (status, title) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected STATUS:TITLE, got '{s}'"))?;
        let status = status.parse::<PlanItemStatus>().map_err(|e| e.to_string())?;
        let title = title.trim();
        if title.is_empty() {
            return Err("Plan item title cannot be empty".to_string());
        }

        Ok(Self {
            status,
            title: title.to_string(),
        })
    }
}

/// Runs CLI commands and renders their output.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Builds the requested plan and renders it as markdown.
    pub fn create_plan(&self, args: CreatePlanArgs) -> Result<()> {
        info!("Building plan '{}'", args.title);

        let document = PlanBuilder::from(args).build();
        debug!(
            "Plan has {} narratives and {} items",
            document.plan.narratives.len(),
            document.plan.items.len()
        );

        self.renderer.render(&document.to_string())
    }
}
