use crate::catalog::domain::{
    Application, AttestationInstance, AttestationRun, Measurable, Rating,
};
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// The raw collections delivered by the data-fetch layer
///
/// Every collection defaults to empty when its source is absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSnapshot {
    pub applications: Vec<Application>,
    pub attestation_runs: Vec<AttestationRun>,
    pub attestation_instances: Vec<AttestationInstance>,
    pub measurables: Vec<Measurable>,
    pub ratings: Vec<Rating>,
}

/// CatalogReader port for loading catalog collections
///
/// This port abstracts the data-fetch layer. Implementations deliver fully
/// resolved collections; partial or streaming delivery is not supported.
pub trait CatalogReader {
    /// Reads all collections of a snapshot
    ///
    /// # Arguments
    /// * `source` - Location of the snapshot (e.g. a directory of JSON files)
    ///
    /// # Returns
    /// The collections, with absent ones defaulted to empty
    ///
    /// # Errors
    /// Returns an error if:
    /// - The snapshot location does not exist
    /// - A present collection cannot be read or parsed
    fn read_snapshot(&self, source: &Path) -> Result<CatalogSnapshot>;
}
