//! Builder for constructing CatalogViewReadModel from aggregation results

use super::attestation_grid_view::{
    AttestationGridRowView, AttestationGridView, ATTESTATION_GRID_COLUMNS,
};
use super::attestation_summary_view::AttestationSummaryView;
use super::catalog_view_read_model::CatalogViewReadModel;
use super::rating_tabs_view::RatingTabsView;
use crate::application::dto::ViewResponse;
use crate::catalog::domain::{AggregatedAttestationRow, AttestationStatus, AttestedEntityKind};
use std::collections::BTreeMap;

/// Builder for constructing CatalogViewReadModel from a use case response
pub struct CatalogViewReadModelBuilder;

impl CatalogViewReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `response` - Aggregation results of the use case
    /// * `attested_entity_kind` - Kind the attestation grid was built for
    ///
    /// # Returns
    /// A read model holding the views present in `response`
    pub fn build(
        response: &ViewResponse,
        attested_entity_kind: &AttestedEntityKind,
    ) -> CatalogViewReadModel {
        let attestation = response.attestation_rows.as_ref().map(|rows| {
            let counts = response
                .attestation_summary
                .clone()
                .unwrap_or_default();
            Self::build_grid(rows, &counts, attested_entity_kind)
        });

        let ratings = response
            .kind_groups
            .as_ref()
            .map(|groups| RatingTabsView::from_groups(groups));

        CatalogViewReadModel {
            attestation,
            ratings,
        }
    }

    fn build_grid(
        rows: &[AggregatedAttestationRow],
        counts: &BTreeMap<AttestationStatus, usize>,
        attested_entity_kind: &AttestedEntityKind,
    ) -> AttestationGridView {
        let keyed: BTreeMap<&str, usize> = counts
            .iter()
            .map(|(status, count)| (status.key(), *count))
            .collect();

        AttestationGridView {
            attested_entity_kind: attested_entity_kind.to_string(),
            columns: ATTESTATION_GRID_COLUMNS,
            rows: rows.iter().map(AttestationGridRowView::from_row).collect(),
            summary: AttestationSummaryView::from_counts(&keyed),
        }
    }
}
