//! Schema of the progress chart.
//!
//! Keys follow the interchange layout consumed by chart renderers, so the
//! Rust field names are mapped onto `progressItem`, `subchild` and
//! `subLevel` when serialized. Optional fields are skipped when absent rather
//! than written as `null`.

use serde::{Deserialize, Serialize};

/// A single metric attached to a [`Node`] or [`SubNode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgressItem {
    /// Description of what is being measured.
    pub field: String,
    /// Free-form value, usually a percentage such as `"10%"` or `"5-10%"`.
    pub value: String,
}

/// Top-level chart entry representing a strategic category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Tier of the category within the chart, starting at 1.
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onprogress: Option<bool>,
    #[serde(
        rename = "progressItem",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_item: Option<Vec<ProgressItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subchild: Option<Vec<SubNode>>,
}

/// Sub-category nested under a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNode {
    #[serde(rename = "subLevel")]
    pub sub_level: u32,
    pub name: String,
    pub onprogress: bool,
    #[serde(rename = "progressItem")]
    pub progress_item: Vec<ProgressItem>,
}

impl ProgressItem {
    pub fn new(field: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl Node {
    /// Progress items attached directly to this node, empty when absent.
    pub fn items(&self) -> &[ProgressItem] {
        self.progress_item.as_deref().unwrap_or(&[])
    }

    /// Sub-nodes of this node, empty when absent.
    pub fn sub_nodes(&self) -> &[SubNode] {
        self.subchild.as_deref().unwrap_or(&[])
    }
}
