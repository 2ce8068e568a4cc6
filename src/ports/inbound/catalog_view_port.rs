use crate::application::dto::{ViewRequest, ViewResponse};
use crate::shared::Result;

/// CatalogViewPort - Inbound port for building catalog views
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger view generation.
pub trait CatalogViewPort {
    /// Builds the requested catalog views
    ///
    /// # Arguments
    /// * `request` - Snapshot location, requested views and attestation kind
    ///
    /// # Returns
    /// The aggregation results of the requested views
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be located, read or parsed
    fn build_view(&self, request: ViewRequest) -> Result<ViewResponse>;
}
