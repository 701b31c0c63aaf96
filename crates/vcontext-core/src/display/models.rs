//! Display implementations for document models.

use std::fmt;

use crate::models::{Document, Narrative, PlanItem, PlanItemStatus, PlanProgress, PlanStatus};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.completed, self.total)
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.content)
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.status.with_icon())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.plan;

        writeln!(f, "# {}", plan.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", plan.status)?;
        writeln!(f, "- Version: {}", self.info.version)?;
        if let Some(author) = &self.info.author {
            writeln!(f, "- Author: {author}")?;
        }

        if let Some(desc) = &self.info.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for (_, narrative) in plan.ordered_narratives() {
            writeln!(f)?;
            write!(f, "{narrative}")?;
        }

        if plan.items.is_empty() {
            writeln!(f, "\nNo items in this plan.")?;
        } else {
            writeln!(f, "\n## Items {}", PlanProgress::from(plan))?;
            writeln!(f)?;
            for item in &plan.items {
                writeln!(f, "- {item}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        models::{Narrative, PlanItem, PlanItemStatus, PlanProgress, PlanStatus},
        PlanBuilder,
    };

    #[test]
    fn test_status_display() {
        assert_eq!(PlanStatus::DRAFT.to_string(), "draft");
        assert_eq!(PlanStatus::new("approved").to_string(), "approved");
        assert_eq!(PlanItemStatus::InProgress.to_string(), "inProgress");
    }

    #[test]
    fn test_plan_item_display() {
        let item = PlanItem::new("Write docs", PlanItemStatus::InProgress);
        assert_eq!(item.to_string(), "Write docs (➤ In Progress)");
    }

    #[test]
    fn test_narrative_display() {
        let narrative = Narrative::new("Risks", "Schema drift");
        assert_eq!(narrative.to_string(), "## Risks\n\nSchema drift\n");
    }

    #[test]
    fn test_progress_display() {
        let progress = PlanProgress {
            total: 5,
            pending: 2,
            in_progress: 1,
            completed: 2,
        };
        assert_eq!(progress.to_string(), "(2/5)");
    }

    #[test]
    fn test_document_display_full() {
        let document = PlanBuilder::new("Test Plan Title", "1.0")
            .with_author("Ada")
            .with_description("This is a test plan")
            .with_narrative("appendix", "Appendix", "extra")
            .with_testing("Testing", "unit tests")
            .with_proposal("Proposal", "do it")
            .add_completed_item("First")
            .add_in_progress_item("Second")
            .add_pending_item("Third")
            .build();
        let output = document.to_string();

        assert!(output.starts_with("# Test Plan Title\n"));
        assert!(output.contains("- Status: draft"));
        assert!(output.contains("- Version: 1.0"));
        assert!(output.contains("- Author: Ada"));
        assert!(output.contains("This is a test plan"));
        assert!(output.contains("## Items (1/3)"));
        assert!(output.contains("- First (✓ Completed)"));
        assert!(output.contains("- Second (➤ In Progress)"));
        assert!(output.contains("- Third (○ Pending)"));

        let proposal = output.find("## Proposal").unwrap();
        let testing = output.find("## Testing").unwrap();
        let appendix = output.find("## Appendix").unwrap();
        let items = output.find("## Items").unwrap();
        assert!(proposal < testing);
        assert!(testing < appendix);
        assert!(appendix < items);
    }

    #[test]
    fn test_document_display_minimal() {
        let document = PlanBuilder::new("Bare", "0.1").build();
        let output = document.to_string();

        assert_eq!(
            output,
            "# Bare\n\n- Status: draft\n- Version: 0.1\n\nNo items in this plan.\n"
        );
        assert!(!output.contains("- Author:"));
        assert!(!output.contains("## Items"));
    }
}
