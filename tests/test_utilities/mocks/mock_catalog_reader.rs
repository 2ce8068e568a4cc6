use catalog_views::prelude::*;
use std::path::Path;

/// Mock CatalogReader serving an in-memory snapshot
#[derive(Default, Clone)]
pub struct MockCatalogReader {
    snapshot: CatalogSnapshot,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockCatalogReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_applications(mut self, applications: Vec<Application>) -> Self {
        self.snapshot.applications = applications;
        self
    }

    pub fn with_attestation_runs(mut self, runs: Vec<AttestationRun>) -> Self {
        self.snapshot.attestation_runs = runs;
        self
    }

    pub fn with_attestation_instances(mut self, instances: Vec<AttestationInstance>) -> Self {
        self.snapshot.attestation_instances = instances;
        self
    }

    pub fn with_measurables(mut self, measurables: Vec<Measurable>) -> Self {
        self.snapshot.measurables = measurables;
        self
    }

    pub fn with_ratings(mut self, ratings: Vec<Rating>) -> Self {
        self.snapshot.ratings = ratings;
        self
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_snapshot(&self, source: &Path) -> Result<CatalogSnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock snapshot read failure: {}", source.display());
        }
        Ok(self.snapshot.clone())
    }
}
