//! Catalog view read model handed to formatters

use super::attestation_grid_view::AttestationGridView;
use super::rating_tabs_view::RatingTabsView;
use serde::Serialize;

/// Main read model for catalog views
///
/// A view that was not requested is `None` and omitted from JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogViewReadModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<AttestationGridView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<RatingTabsView>,
}
