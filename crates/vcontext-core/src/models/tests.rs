#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use crate::{
        error::DocumentError,
        models::{
            narrative_keys, Document, Info, Narrative, Plan, PlanItem, PlanItemStatus,
            PlanProgress, PlanStatus,
        },
    };

    fn create_test_plan() -> Plan {
        let mut plan = Plan::new("Test Plan Title", PlanStatus::DRAFT);
        plan.narratives.insert(
            "zeta".to_string(),
            Narrative::new("Zeta Notes", "custom section"),
        );
        plan.narratives.insert(
            narrative_keys::RISKS.to_string(),
            Narrative::new("Risks", "might break"),
        );
        plan.narratives.insert(
            "appendix".to_string(),
            Narrative::new("Appendix", "extra material"),
        );
        plan.narratives.insert(
            narrative_keys::PROPOSAL.to_string(),
            Narrative::new("Proposal", "do the thing"),
        );
        plan.items = vec![
            PlanItem::new("First", PlanItemStatus::Completed),
            PlanItem::new("Second", PlanItemStatus::InProgress),
            PlanItem::new("Third", PlanItemStatus::Pending),
        ];
        plan
    }

    #[test]
    fn test_plan_item_status_with_icon() {
        assert_eq!(PlanItemStatus::Completed.with_icon(), "✓ Completed");
        assert_eq!(PlanItemStatus::InProgress.with_icon(), "➤ In Progress");
        assert_eq!(PlanItemStatus::Pending.with_icon(), "○ Pending");
    }

    #[test]
    fn test_plan_item_status_as_str() {
        assert_eq!(PlanItemStatus::Pending.as_str(), "pending");
        assert_eq!(PlanItemStatus::InProgress.as_str(), "inProgress");
        assert_eq!(PlanItemStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_plan_item_status_from_str_variants() {
        assert_eq!(
            PlanItemStatus::from_str("pending").unwrap(),
            PlanItemStatus::Pending
        );
        assert_eq!(
            PlanItemStatus::from_str("Completed").unwrap(),
            PlanItemStatus::Completed
        );
        for input in ["inProgress", "inprogress", "in_progress", "in-progress", " IN-PROGRESS "] {
            assert_eq!(
                PlanItemStatus::from_str(input).unwrap(),
                PlanItemStatus::InProgress,
                "failed to parse {input:?}"
            );
        }
    }

    #[test]
    fn test_plan_item_status_from_str_invalid() {
        let err = PlanItemStatus::from_str("done").unwrap_err();

        match err {
            DocumentError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("Invalid plan item status: done"));
            }
        }
    }

    #[test]
    fn test_plan_item_status_default_is_pending() {
        assert_eq!(PlanItemStatus::default(), PlanItemStatus::Pending);
    }

    #[test]
    fn test_plan_status_draft_and_default() {
        assert_eq!(PlanStatus::default(), PlanStatus::DRAFT);
        assert_eq!(PlanStatus::DRAFT.as_str(), "draft");
        assert!(PlanStatus::DRAFT.is_draft());
        assert!(PlanStatus::new("draft").is_draft());
        assert!(!PlanStatus::new("approved").is_draft());
    }

    #[test]
    fn test_plan_status_from_str() {
        assert_eq!(PlanStatus::from_str("Draft").unwrap(), PlanStatus::DRAFT);
        assert_eq!(
            PlanStatus::from_str("  underReview ").unwrap().as_str(),
            "underReview"
        );
    }

    #[test]
    fn test_plan_status_from_str_empty() {
        let err = PlanStatus::from_str("   ").unwrap_err();

        match err {
            DocumentError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("cannot be empty"));
            }
        }
    }

    #[test]
    fn test_plan_new_is_empty() {
        let plan = Plan::new("Empty", PlanStatus::new("proposed"));

        assert_eq!(plan.title, "Empty");
        assert_eq!(plan.status.as_str(), "proposed");
        assert!(plan.narratives.is_empty());
        assert!(plan.items.is_empty());
    }

    #[test]
    fn test_ordered_narratives_known_keys_first() {
        let plan = create_test_plan();
        let keys: Vec<&str> = plan.ordered_narratives().map(|(key, _)| key).collect();

        assert_eq!(keys, vec!["proposal", "risks", "appendix", "zeta"]);
    }

    #[test]
    fn test_ordered_narratives_empty() {
        let plan = Plan::new("Empty", PlanStatus::DRAFT);
        assert_eq!(plan.ordered_narratives().count(), 0);
    }

    #[test]
    fn test_narrative_lookup() {
        let plan = create_test_plan();

        assert_eq!(
            plan.narrative("risks"),
            Some(&Narrative::new("Risks", "might break"))
        );
        assert_eq!(plan.narrative("testing"), None);
    }

    #[test]
    fn test_plan_progress_from_plan() {
        let plan = create_test_plan();
        let progress = PlanProgress::from(&plan);

        assert_eq!(progress.total, 3);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.pending, 1);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_plan_progress_all_completed() {
        let mut plan = create_test_plan();
        for item in &mut plan.items {
            item.status = PlanItemStatus::Completed;
        }
        let progress = PlanProgress::from(&plan);

        assert_eq!(progress.completed, 3);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_plan_progress_empty_plan_is_not_complete() {
        let plan = Plan::new("Empty", PlanStatus::DRAFT);
        let progress = PlanProgress::from(&plan);

        assert_eq!(progress, PlanProgress::default());
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_info_new_leaves_optional_fields_unset() {
        let info = Info::new("1.0");

        assert_eq!(info.version, "1.0");
        assert_eq!(info.author, None);
        assert_eq!(info.description, None);
    }

    #[test]
    fn test_serde_field_names() {
        let document = Document {
            info: Info::new("1.0"),
            plan: Plan {
                items: vec![PlanItem::new("Task", PlanItemStatus::InProgress)],
                ..Plan::new("Title", PlanStatus::DRAFT)
            },
        };

        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["info"]["version"], "1.0");
        assert!(value["info"].get("author").is_none());
        assert_eq!(value["plan"]["status"], "draft");
        assert_eq!(value["plan"]["items"][0]["status"], "inProgress");
        assert!(value["plan"].get("narratives").is_none());
    }
}
