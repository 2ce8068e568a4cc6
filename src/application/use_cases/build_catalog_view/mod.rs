use crate::application::dto::{ViewRequest, ViewResponse};
use crate::catalog::domain::{AggregatedAttestationRow, AttestationStatus, KindGroup};
use crate::catalog::services::{
    AttestationAggregator, AttestationGridInput, RatingAggregator, SummaryReducer,
};
use crate::ports::inbound::CatalogViewPort;
use crate::ports::outbound::{CatalogReader, CatalogSnapshot, DisplayNameLookup, ProgressReporter};
use crate::shared::Result;
use std::collections::BTreeMap;

/// Attestation rows with their status counts
type AttestationGrid = (Vec<AggregatedAttestationRow>, BTreeMap<AttestationStatus, usize>);

/// BuildCatalogViewUseCase - Core use case for catalog view generation
///
/// Loads a snapshot and runs the requested aggregation pipelines, using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `DNL` - DisplayNameLookup implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildCatalogViewUseCase<CR, DNL, PR> {
    catalog_reader: CR,
    display_name_lookup: DNL,
    progress_reporter: PR,
}

impl<CR, DNL, PR> BuildCatalogViewUseCase<CR, DNL, PR>
where
    CR: CatalogReader,
    DNL: DisplayNameLookup,
    PR: ProgressReporter,
{
    /// Creates a new BuildCatalogViewUseCase with injected dependencies
    pub fn new(catalog_reader: CR, display_name_lookup: DNL, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            display_name_lookup,
            progress_reporter,
        }
    }

    /// Executes the catalog view use case
    ///
    /// # Arguments
    /// * `request` - Snapshot location, requested views and attestation kind
    ///
    /// # Returns
    /// ViewResponse holding the rows, summary counts and kind groups of the
    /// requested views
    ///
    /// # Errors
    /// Returns an error only if the snapshot cannot be read. The aggregation
    /// itself never fails.
    pub fn execute(&self, request: ViewRequest) -> Result<ViewResponse> {
        let total_steps = 1
            + usize::from(request.view.includes_attestation())
            + usize::from(request.view.includes_ratings());
        let mut step = 0;

        // Step 1: Load the snapshot
        let snapshot = self.load_snapshot(&request)?;
        step += 1;
        self.progress_reporter
            .report_progress(step, total_steps, Some("snapshot loaded"));

        let mut response = ViewResponse::default();

        // Step 2: Attestation grid
        if request.view.includes_attestation() {
            let (rows, summary) = self.build_attestation_grid(&snapshot, &request);
            response.attestation_rows = Some(rows);
            response.attestation_summary = Some(summary);
            step += 1;
            self.progress_reporter
                .report_progress(step, total_steps, Some("attestation grid"));
        }

        // Step 3: Ratings by kind
        if request.view.includes_ratings() {
            let (groups, dangling) = self.build_rating_groups(&snapshot);
            response.kind_groups = Some(groups);
            response.dangling_rating_count = dangling;
            step += 1;
            self.progress_reporter
                .report_progress(step, total_steps, Some("rating tabs"));
        }

        self.report_outcome(&response);
        Ok(response)
    }

    fn load_snapshot(&self, request: &ViewRequest) -> Result<CatalogSnapshot> {
        self.progress_reporter.report(&format!(
            "📂 Loading catalog snapshot from: {}",
            request.snapshot_path.display()
        ));

        let snapshot = self.catalog_reader.read_snapshot(&request.snapshot_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} application(s), {} attestation run(s), {} attestation instance(s), {} measurable(s), {} rating(s)",
            snapshot.applications.len(),
            snapshot.attestation_runs.len(),
            snapshot.attestation_instances.len(),
            snapshot.measurables.len(),
            snapshot.ratings.len()
        ));

        Ok(snapshot)
    }

    fn build_attestation_grid(
        &self,
        snapshot: &CatalogSnapshot,
        request: &ViewRequest,
    ) -> AttestationGrid {
        let qualifying_runs = snapshot
            .attestation_runs
            .iter()
            .filter(|run| run.attested_entity_kind == request.attested_entity_kind)
            .count();

        self.progress_reporter.report(&format!(
            "🔎 {} attestation run(s) cover {}",
            qualifying_runs, request.attested_entity_kind
        ));

        if qualifying_runs == 0 && !snapshot.applications.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "No attestation run attests {}; every application will be shown as never attested",
                request.attested_entity_kind
            ));
        }

        let input = AttestationGridInput::new(
            &snapshot.applications,
            &snapshot.attestation_runs,
            &snapshot.attestation_instances,
            request.attested_entity_kind.clone(),
        );
        let rows = AttestationAggregator::build_grid(&input, &self.display_name_lookup);
        let summary = SummaryReducer::prepare_summary_data(&rows);

        (rows, summary)
    }

    fn build_rating_groups(&self, snapshot: &CatalogSnapshot) -> (Vec<KindGroup>, usize) {
        let groups =
            RatingAggregator::build_ratings_by_kind(&snapshot.measurables, &snapshot.ratings);

        let dangling =
            RatingAggregator::dangling_ratings(&snapshot.measurables, &snapshot.ratings).len();
        if dangling > 0 {
            self.progress_reporter.report_warning(&format!(
                "{} rating(s) reference unknown measurables and were left out",
                dangling
            ));
        }

        (groups, dangling)
    }

    fn report_outcome(&self, response: &ViewResponse) {
        let mut parts = Vec::new();

        if let Some(rows) = &response.attestation_rows {
            parts.push(format!(
                "{} application row(s), {} never attested",
                rows.len(),
                response.unattested_count()
            ));
        }

        if let Some(groups) = &response.kind_groups {
            let rated = groups.iter().filter(|g| g.has_ratings()).count();
            parts.push(format!("{} of {} kind tab(s) rated", rated, groups.len()));
        }

        self.progress_reporter
            .report_completion(&format!("✨ Catalog view ready: {}", parts.join("; ")));
    }
}

impl<CR, DNL, PR> CatalogViewPort for BuildCatalogViewUseCase<CR, DNL, PR>
where
    CR: CatalogReader,
    DNL: DisplayNameLookup,
    PR: ProgressReporter,
{
    fn build_view(&self, request: ViewRequest) -> Result<ViewResponse> {
        self.execute(request)
    }
}
