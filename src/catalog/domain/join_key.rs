use serde::{Deserialize, Serialize};

/// Canonical key used to join entity ids across collections
///
/// Ids arrive as integers on entities (`Application::id`) but as loosely
/// typed values inside references (`parentEntity.id`). Both sides of a join
/// must go through `JoinKey` so that `7`, `"7"` and `" 7 "` meet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JoinKey(String);

impl JoinKey {
    /// Key for a numeric entity id
    pub fn from_id(id: i64) -> Self {
        Self(id.to_string())
    }

    /// Key for a textual id
    ///
    /// Numeric text is normalized to its decimal form, anything else is kept
    /// verbatim after trimming. Blank text has no key.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse::<i64>() {
            Ok(id) => Some(Self::from_id(id)),
            Err(_) => Some(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity id as it appears inside a reference: number or string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn join_key(&self) -> Option<JoinKey> {
        match self {
            RawId::Number(id) => Some(JoinKey::from_id(*id)),
            RawId::Text(text) => JoinKey::from_text(text),
        }
    }
}

impl From<i64> for RawId {
    fn from(id: i64) -> Self {
        RawId::Number(id)
    }
}

impl From<&str> for RawId {
    fn from(text: &str) -> Self {
        RawId::Text(text.to_string())
    }
}
