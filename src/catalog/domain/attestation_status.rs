use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Label used for classification keys missing from the status catalog
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Attestation coverage classification of a grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttestationStatus {
    Attested,
    NeverAttested,
}

impl AttestationStatus {
    pub fn key(&self) -> &'static str {
        match self {
            AttestationStatus::Attested => "ATTESTED",
            AttestationStatus::NeverAttested => "NEVER_ATTESTED",
        }
    }

    /// Display label from the status catalog
    pub fn label(&self) -> &'static str {
        status_label(self.key())
    }
}

impl std::fmt::Display for AttestationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Static catalog entry for an attestation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub position: u32,
}

/// The attestation status catalog, in presentation order
pub const ATTESTATION_STATUSES: &[StatusDescriptor] = &[
    StatusDescriptor {
        key: "ATTESTED",
        name: "Attested",
        description: "This flow has been attested",
        position: 10,
    },
    StatusDescriptor {
        key: "NEVER_ATTESTED",
        name: "Never Attested",
        description: "This flow has never been attested",
        position: 20,
    },
];

fn status_index() -> &'static HashMap<&'static str, &'static StatusDescriptor> {
    static INDEX: OnceLock<HashMap<&'static str, &'static StatusDescriptor>> = OnceLock::new();
    INDEX.get_or_init(|| ATTESTATION_STATUSES.iter().map(|s| (s.key, s)).collect())
}

/// Looks up a status descriptor by key
pub fn find_status(key: &str) -> Option<&'static StatusDescriptor> {
    status_index().get(key).copied()
}

/// Display label for a status key, `"Unknown"` when not in the catalog
pub fn status_label(key: &str) -> &'static str {
    find_status(key).map(|s| s.name).unwrap_or(UNKNOWN_LABEL)
}
