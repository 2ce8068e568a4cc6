use super::join_key::{JoinKey, RawId};
use serde::{Deserialize, Serialize};

/// Weak reference to another catalog entity (relation only, no ownership)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    #[serde(default)]
    pub kind: Option<String>,
    /// Absent or `null` ids are tolerated; such references join nothing
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityReference {
    pub fn new(kind: &str, id: i64) -> Self {
        Self::with_raw_id(kind, RawId::Number(id))
    }

    pub fn with_raw_id(kind: &str, id: RawId) -> Self {
        Self {
            kind: Some(kind.to_string()),
            id: Some(id),
            name: None,
        }
    }

    pub fn join_key(&self) -> Option<JoinKey> {
        self.id.as_ref().and_then(RawId::join_key)
    }
}
