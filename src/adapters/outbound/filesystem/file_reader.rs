use crate::ports::outbound::{CatalogReader, CatalogSnapshot};
use crate::shared::error::CatalogError;
use crate::shared::security::read_guarded;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const APPLICATIONS_FILE: &str = "applications.json";
pub const ATTESTATION_RUNS_FILE: &str = "attestation-runs.json";
pub const ATTESTATION_INSTANCES_FILE: &str = "attestation-instances.json";
pub const MEASURABLES_FILE: &str = "measurables.json";
pub const RATINGS_FILE: &str = "ratings.json";

/// FileSystemReader adapter for reading catalog snapshots from a directory
///
/// Each collection lives in its own JSON array file. A missing file stands
/// for an empty collection; a present but malformed file is an error.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads one collection file, defaulting to empty when absent
    fn read_collection<T: DeserializeOwned>(&self, dir: &Path, file_name: &str) -> Result<Vec<T>> {
        let path = dir.join(file_name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = read_guarded(&path, file_name)?;
        serde_json::from_str(&content).map_err(|e| {
            CatalogError::SnapshotParseError {
                path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for FileSystemReader {
    fn read_snapshot(&self, source: &Path) -> Result<CatalogSnapshot> {
        if !source.exists() {
            return Err(CatalogError::SnapshotNotFound {
                path: source.to_path_buf(),
                suggestion: format!(
                    "Snapshot directory \"{}\" does not exist.\n   \
                     Please specify the directory holding {} and friends with the --snapshot option.",
                    source.display(),
                    APPLICATIONS_FILE
                ),
            }
            .into());
        }

        if !source.is_dir() {
            return Err(CatalogError::InvalidSnapshotPath {
                path: source.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        Ok(CatalogSnapshot {
            applications: self.read_collection(source, APPLICATIONS_FILE)?,
            attestation_runs: self.read_collection(source, ATTESTATION_RUNS_FILE)?,
            attestation_instances: self.read_collection(source, ATTESTATION_INSTANCES_FILE)?,
            measurables: self.read_collection(source, MEASURABLES_FILE)?,
            ratings: self.read_collection(source, RATINGS_FILE)?,
        })
    }
}
