use super::entity_reference::EntityReference;
use super::join_key::JoinKey;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of entity an attestation run attests
///
/// Tags are normalized (trimmed, upper-cased, `-` read as `_`) wherever they
/// come from, so snapshot runs and requested kinds compare on the same key.
/// Known tags get their own variant; any other tag is kept in normalized
/// form so that two different unknown kinds never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttestedEntityKind {
    #[default]
    LogicalDataFlow,
    PhysicalFlow,
    Other(String),
}

impl AttestedEntityKind {
    pub fn as_str(&self) -> &str {
        match self {
            AttestedEntityKind::LogicalDataFlow => "LOGICAL_DATA_FLOW",
            AttestedEntityKind::PhysicalFlow => "PHYSICAL_FLOW",
            AttestedEntityKind::Other(tag) => tag,
        }
    }
}

/// Canonical form of a kind tag
fn normalize_kind_tag(tag: &str) -> String {
    tag.trim().to_uppercase().replace('-', "_")
}

impl From<String> for AttestedEntityKind {
    fn from(tag: String) -> Self {
        let tag = normalize_kind_tag(&tag);
        match tag.as_str() {
            "LOGICAL_DATA_FLOW" => AttestedEntityKind::LogicalDataFlow,
            "PHYSICAL_FLOW" => AttestedEntityKind::PhysicalFlow,
            _ => AttestedEntityKind::Other(tag),
        }
    }
}

impl From<AttestedEntityKind> for String {
    fn from(kind: AttestedEntityKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::str::FromStr for AttestedEntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Attested entity kind must not be empty".to_string());
        }
        Ok(AttestedEntityKind::from(s.to_string()))
    }
}

impl std::fmt::Display for AttestedEntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An attestation campaign for one kind of entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationRun {
    pub id: i64,
    pub attested_entity_kind: AttestedEntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AttestationRun {
    pub fn new(id: i64, attested_entity_kind: AttestedEntityKind) -> Self {
        Self {
            id,
            attested_entity_kind,
            name: None,
        }
    }
}

/// A single entity's attestation within a run
///
/// `attested_at == None` means the attestation is still pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub parent_entity: Option<EntityReference>,
    /// Instances without a run id belong to no run and never qualify
    #[serde(default)]
    pub attestation_run_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub attested_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub attested_by: Option<String>,
}

impl AttestationInstance {
    pub fn new(parent_entity: EntityReference, attestation_run_id: i64) -> Self {
        Self {
            id: None,
            parent_entity: Some(parent_entity),
            attestation_run_id: Some(attestation_run_id),
            attested_at: None,
            attested_by: None,
        }
    }

    pub fn attested(mut self, attested_at: NaiveDateTime, attested_by: &str) -> Self {
        self.attested_at = Some(attested_at);
        self.attested_by = Some(attested_by.to_string());
        self
    }

    pub fn is_attested(&self) -> bool {
        self.attested_at.is_some()
    }

    pub fn parent_key(&self) -> Option<JoinKey> {
        self.parent_entity.as_ref().and_then(EntityReference::join_key)
    }
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses the timestamp shapes the data-fetch layer emits
///
/// Accepts RFC 3339, ISO local date-times (with `T` or a space) and plain
/// dates, which are read as midnight.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) => parse_timestamp(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", text))),
    }
}

fn serialize_timestamp<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => serializer.serialize_some(&timestamp.format(TIMESTAMP_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}
