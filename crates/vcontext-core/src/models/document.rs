//! Document container and metadata.

use serde::{Deserialize, Serialize};

use super::Plan;

/// Top-level document holding metadata and the plan body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Document {
    /// Document metadata
    pub info: Info,

    /// The plan described by this document
    pub plan: Plan,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Info {
    /// Document format version, fixed when the document is created
    pub version: String,

    /// Author of the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Short description of the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Info {
    /// Creates metadata with only the version set.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            author: None,
            description: None,
        }
    }
}
