use serde::{Deserialize, Serialize};

/// A node in one of the measurable taxonomies (functions, processes, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurable {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Kind code; a measurable without one belongs to no kind group
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Measurable {
    pub fn new(id: i64, name: &str, kind: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: Some(kind.to_string()),
            parent_id: None,
            description: None,
        }
    }
}

/// An application's rating against a measurable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// A rating without a measurable id is left out like a dangling one
    #[serde(default)]
    pub measurable_id: Option<i64>,
    #[serde(default)]
    pub rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rating {
    pub fn new(measurable_id: i64, rating: &str) -> Self {
        Self {
            measurable_id: Some(measurable_id),
            rating: rating.to_string(),
            description: None,
        }
    }
}
