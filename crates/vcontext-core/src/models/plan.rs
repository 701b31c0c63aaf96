//! Plan model definition and related functionality.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PlanItemStatus, PlanStatus};

/// Well-known narrative keys.
///
/// These are ordinary keys; a narrative stored under any of them is no
/// different from one stored under a custom key. They only decide the
/// presentation order when a plan is rendered.
pub mod narrative_keys {
    /// The proposed change
    pub const PROPOSAL: &str = "proposal";
    /// The problem being solved
    pub const PROBLEM: &str = "problem";
    /// Background needed to follow the plan
    pub const CONTEXT: &str = "context";
    /// Options considered and rejected
    pub const ALTERNATIVES: &str = "alternatives";
    /// Known risks
    pub const RISKS: &str = "risks";
    /// How the work will be verified
    pub const TESTING: &str = "testing";

    /// Presentation order of the well-known keys.
    pub const ORDERED: [&str; 6] = [PROPOSAL, PROBLEM, CONTEXT, ALTERNATIVES, RISKS, TESTING];
}

/// Represents the body of a plan document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Plan {
    /// Title of the plan
    pub title: String,

    /// Lifecycle status of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// Narrative sections keyed by name; one entry per key
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub narratives: BTreeMap<String, Narrative>,

    /// Plan items in presentation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PlanItem>,
}

impl Plan {
    /// Creates an empty plan with the given title and status.
    pub fn new(title: impl Into<String>, status: PlanStatus) -> Self {
        Self {
            title: title.into(),
            status,
            narratives: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Looks up a narrative by key.
    pub fn narrative(&self, key: &str) -> Option<&Narrative> {
        self.narratives.get(key)
    }

    /// Iterates narratives in presentation order.
    ///
    /// Well-known keys come first in [`narrative_keys::ORDERED`] order,
    /// followed by every other key alphabetically.
    pub fn ordered_narratives(&self) -> impl Iterator<Item = (&str, &Narrative)> {
        let known = narrative_keys::ORDERED
            .into_iter()
            .filter_map(move |key| self.narratives.get(key).map(|n| (key, n)));
        let custom = self
            .narratives
            .iter()
            .filter(|(key, _)| !narrative_keys::ORDERED.contains(&key.as_str()))
            .map(|(key, n)| (key.as_str(), n));

        known.chain(custom)
    }
}

/// A titled block of free-form text within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Narrative {
    /// Section heading
    pub title: String,

    /// Free-form section body
    pub content: String,
}

impl Narrative {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A single actionable unit within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PlanItem {
    /// Brief title of the item
    pub title: String,

    /// Current status of the item
    pub status: PlanItemStatus,
}

impl PlanItem {
    pub fn new(title: impl Into<String>, status: PlanItemStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}
