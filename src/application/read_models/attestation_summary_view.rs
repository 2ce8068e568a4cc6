//! Summary (pie) view over attestation status counts

use crate::catalog::domain::attestation_status::status_label;
use crate::catalog::domain::ATTESTATION_STATUSES;
use crate::catalog::services::fill_missing_keys;
use serde::Serialize;
use std::collections::BTreeMap;

/// One slice of the attestation summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySegment {
    pub key: String,
    /// Catalog name of the status, or "Unknown"
    pub label: &'static str,
    pub count: usize,
}

/// Attestation status counts, zero-filled against the status catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationSummaryView {
    /// Catalog statuses first (by position), then any unrecognised keys
    pub segments: Vec<SummarySegment>,
    pub total: usize,
    pub has_entries: bool,
}

impl AttestationSummaryView {
    /// Builds the view from sparse counts keyed by status key
    pub fn from_counts(counts: &BTreeMap<&str, usize>) -> Self {
        let mut catalog = ATTESTATION_STATUSES.to_vec();
        catalog.sort_by_key(|status| status.position);
        let all_keys: Vec<&str> = catalog.iter().map(|status| status.key).collect();

        let segments: Vec<SummarySegment> = fill_missing_keys(counts, &all_keys)
            .into_iter()
            .map(|(key, count)| SummarySegment {
                key: key.to_string(),
                label: status_label(key),
                count,
            })
            .collect();

        let total = segments.iter().map(|segment| segment.count).sum();

        Self {
            segments,
            total,
            has_entries: total > 0,
        }
    }

    pub fn count_for(&self, key: &str) -> usize {
        self.segments
            .iter()
            .find(|segment| segment.key == key)
            .map(|segment| segment.count)
            .unwrap_or(0)
    }
}
