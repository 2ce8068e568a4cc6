use crate::catalog::domain::{AggregatedAttestationRow, AttestationStatus, KindGroup};
use std::collections::BTreeMap;

/// ViewResponse - Internal response DTO from the catalog view use case
///
/// Holds the raw aggregation results; views that were not requested are
/// `None`. Read models are built from this by `CatalogViewReadModelBuilder`.
#[derive(Debug, Clone, Default)]
pub struct ViewResponse {
    /// One row per application, in application input order
    pub attestation_rows: Option<Vec<AggregatedAttestationRow>>,
    /// Sparse status counts over `attestation_rows`
    pub attestation_summary: Option<BTreeMap<AttestationStatus, usize>>,
    /// One group per catalog measurable kind, sorted by kind name
    pub kind_groups: Option<Vec<KindGroup>>,
    /// Ratings dropped because their measurable is unknown
    pub dangling_rating_count: usize,
}

impl ViewResponse {
    /// Number of applications with no qualifying attestation
    pub fn unattested_count(&self) -> usize {
        self.attestation_summary
            .as_ref()
            .and_then(|summary| summary.get(&AttestationStatus::NeverAttested))
            .copied()
            .unwrap_or(0)
    }

    /// Whether any application was never attested
    ///
    /// Always false when the attestation view was not built.
    pub fn has_unattested(&self) -> bool {
        self.unattested_count() > 0
    }
}
