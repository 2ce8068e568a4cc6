use super::grouping::count_by_key;
use crate::catalog::domain::{AggregatedAttestationRow, AttestationStatus};
use std::collections::BTreeMap;

/// SummaryReducer service collapsing aggregator output into counts
pub struct SummaryReducer;

impl SummaryReducer {
    /// Counts rows per classification key
    ///
    /// Sparse: keys no row classifies into are absent.
    pub fn summarize<'a, T, K, F>(rows: &'a [T], classifier: F) -> BTreeMap<K, usize>
    where
        K: Ord,
        F: Fn(&'a T) -> K,
    {
        count_by_key(rows, classifier)
    }

    /// Counts attestation grid rows per attestation status
    pub fn prepare_summary_data(
        rows: &[AggregatedAttestationRow],
    ) -> BTreeMap<AttestationStatus, usize> {
        Self::summarize(rows, |row| row.is_attested)
    }

    /// Whether any row was counted at all
    pub fn has_entries<K>(counts: &BTreeMap<K, usize>) -> bool {
        counts.values().sum::<usize>() > 0
    }
}
