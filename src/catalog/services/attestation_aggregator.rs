use super::display_decorator::decorate;
use super::grouping::{group_by, GroupKey};
use crate::catalog::domain::{
    AggregatedAttestationRow, Application, AttestationInstance, AttestationRun,
    AttestationStatus, AttestedEntityKind, JoinKey,
};
use crate::catalog::policies::LatestAttestation;
use crate::ports::outbound::DisplayNameLookup;
use std::collections::{BTreeMap, HashSet};

/// Inputs of the attestation grid
///
/// Collections default to empty and the attested entity kind defaults to
/// `LOGICAL_DATA_FLOW`, so `AttestationGridInput::default()` is a valid
/// (empty) grid request.
#[derive(Debug, Clone, Default)]
pub struct AttestationGridInput<'a> {
    /// All applications subject to aggregation; one row each, in this order
    pub applications: &'a [Application],
    /// Attestation runs covering the applications
    pub attestation_runs: &'a [AttestationRun],
    /// Attestation instances of those runs
    pub attestation_instances: &'a [AttestationInstance],
    /// Kind of entity whose attestations are collected
    pub attested_entity_kind: AttestedEntityKind,
}

impl<'a> AttestationGridInput<'a> {
    pub fn new(
        applications: &'a [Application],
        attestation_runs: &'a [AttestationRun],
        attestation_instances: &'a [AttestationInstance],
        attested_entity_kind: AttestedEntityKind,
    ) -> Self {
        Self {
            applications,
            attestation_runs,
            attestation_instances,
            attested_entity_kind,
        }
    }
}

/// AttestationAggregator service joining applications to attestation coverage
///
/// Pure: no I/O, inputs are only borrowed, and identical inputs always
/// produce identical, order-stable rows.
pub struct AttestationAggregator;

impl AttestationAggregator {
    /// Builds one grid row per application
    ///
    /// # Arguments
    /// * `input` - Applications, runs, instances and the attested entity kind
    /// * `lookup` - Display-name capability used to decorate each application
    ///
    /// # Returns
    /// Rows in `input.applications` order. An application is `Attested` when
    /// at least one instance of a matching run has an `attested_at`; the
    /// row then carries the latest such instance.
    pub fn build_grid<L>(input: &AttestationGridInput<'_>, lookup: &L) -> Vec<AggregatedAttestationRow>
    where
        L: DisplayNameLookup + ?Sized,
    {
        let run_ids = Self::qualifying_run_ids(input.attestation_runs, &input.attested_entity_kind);
        let attestations_by_parent = Self::attestations_by_parent(input.attestation_instances, &run_ids);

        input
            .applications
            .iter()
            .map(|app| {
                let latest = attestations_by_parent
                    .get(&GroupKey::Key(app.join_key()))
                    .and_then(|instances| LatestAttestation::select(instances.iter().copied()));

                let is_attested = if latest.is_some() {
                    AttestationStatus::Attested
                } else {
                    AttestationStatus::NeverAttested
                };

                AggregatedAttestationRow {
                    application: decorate(app, lookup),
                    is_attested,
                    attestation: latest.cloned(),
                }
            })
            .collect()
    }

    /// Ids of the runs attesting the requested kind
    fn qualifying_run_ids(runs: &[AttestationRun], kind: &AttestedEntityKind) -> HashSet<i64> {
        runs.iter()
            .filter(|run| &run.attested_entity_kind == kind)
            .map(|run| run.id)
            .collect()
    }

    /// Attested instances of the qualifying runs, grouped by parent entity
    ///
    /// Instances without a usable parent id end up in the undefined bucket,
    /// which no application can match. Instances without a run id never
    /// qualify.
    fn attestations_by_parent<'a>(
        instances: &'a [AttestationInstance],
        run_ids: &HashSet<i64>,
    ) -> BTreeMap<GroupKey<JoinKey>, Vec<&'a AttestationInstance>> {
        let qualifying: Vec<&AttestationInstance> = instances
            .iter()
            .filter(|instance| {
                instance.is_attested()
                    && instance
                        .attestation_run_id
                        .is_some_and(|run_id| run_ids.contains(&run_id))
            })
            .collect();

        group_by(&qualifying, |instance| instance.parent_key())
            .into_iter()
            .map(|(key, group)| (key, group.into_iter().copied().collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::attestation::parse_timestamp;
    use crate::catalog::domain::{DisplayNames, DisplayRequest, EntityReference, RawId};

    struct NoNames;

    impl DisplayNameLookup for NoNames {
        fn resolve(&self, _request: &DisplayRequest<'_>) -> DisplayNames {
            DisplayNames::new()
        }
    }

    fn apps(ids: &[i64]) -> Vec<Application> {
        ids.iter().map(|id| Application::new(*id, &format!("App {}", id))).collect()
    }

    fn attested(parent: i64, run_id: i64, at: &str, by: &str) -> AttestationInstance {
        attested_raw(RawId::Number(parent), run_id, at, by)
    }

    fn attested_raw(parent: RawId, run_id: i64, at: &str, by: &str) -> AttestationInstance {
        AttestationInstance::new(EntityReference::with_raw_id("APPLICATION", parent), run_id)
            .attested(parse_timestamp(at).unwrap(), by)
    }

    fn logical_run(id: i64) -> AttestationRun {
        AttestationRun::new(id, AttestedEntityKind::LogicalDataFlow)
    }

    #[test]
    fn test_attested_and_never_attested() {
        let applications = apps(&[1, 2]);
        let runs = vec![logical_run(10)];
        let instances = vec![attested(1, 10, "2023-01-01", "alice")];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].application.entity.id, 1);
        assert_eq!(rows[0].is_attested, AttestationStatus::Attested);
        assert_eq!(rows[0].attestation.as_ref(), Some(&instances[0]));
        assert_eq!(rows[1].is_attested, AttestationStatus::NeverAttested);
        assert!(rows[1].attestation.is_none());
    }

    #[test]
    fn test_pending_instance_does_not_count() {
        let applications = apps(&[1]);
        let runs = vec![logical_run(10)];
        let instances = vec![AttestationInstance::new(EntityReference::new("APPLICATION", 1), 10)];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows[0].is_attested, AttestationStatus::NeverAttested);
    }

    #[test]
    fn test_other_kind_runs_are_ignored() {
        let applications = apps(&[1]);
        let runs = vec![AttestationRun::new(10, AttestedEntityKind::PhysicalFlow)];
        let instances = vec![attested(1, 10, "2023-01-01", "alice")];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows[0].is_attested, AttestationStatus::NeverAttested);
    }

    #[test]
    fn test_instance_of_unknown_run_is_ignored() {
        let applications = apps(&[1]);
        let runs = vec![logical_run(10)];
        let instances = vec![attested(1, 99, "2023-01-01", "alice")];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows[0].is_attested, AttestationStatus::NeverAttested);
    }

    #[test]
    fn test_latest_instance_wins() {
        let applications = apps(&[1]);
        let runs = vec![logical_run(10), logical_run(11)];
        let instances = vec![
            attested(1, 10, "2022-01-01", "old"),
            attested(1, 11, "2023-09-30", "new"),
            attested(1, 10, "2023-02-01", "middle"),
        ];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        let attestation = rows[0].attestation.as_ref().unwrap();
        assert_eq!(attestation.attested_by.as_deref(), Some("new"));
    }

    #[test]
    fn test_string_parent_id_matches_numeric_application_id() {
        let applications = apps(&[42]);
        let runs = vec![logical_run(10)];
        let instances = vec![attested_raw(RawId::from("42"), 10, "2023-01-01", "alice")];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows[0].is_attested, AttestationStatus::Attested);
    }

    #[test]
    fn test_instance_without_parent_matches_nothing() {
        let applications = apps(&[1]);
        let runs = vec![logical_run(10)];
        let mut orphan = attested(1, 10, "2023-01-01", "alice");
        orphan.parent_entity = None;
        let instances = vec![orphan];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows[0].is_attested, AttestationStatus::NeverAttested);
    }

    #[test]
    fn test_no_runs_means_never_attested() {
        let applications = apps(&[1, 2, 3]);
        let instances = vec![attested(1, 10, "2023-01-01", "alice")];
        let input = AttestationGridInput {
            applications: &applications,
            attestation_instances: &instances,
            ..Default::default()
        };

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows.len(), 3);
        assert!(rows
            .iter()
            .all(|row| row.is_attested == AttestationStatus::NeverAttested));
    }

    #[test]
    fn test_default_input_yields_empty_grid() {
        let rows = AttestationAggregator::build_grid(&AttestationGridInput::default(), &NoNames);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_duplicate_applications_each_get_a_row() {
        let applications = apps(&[1, 1]);
        let runs = vec![logical_run(10)];
        let instances = vec![attested(1, 10, "2023-01-01", "alice")];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn test_wire_instance_without_parent_id_is_never_attested() {
        let applications = apps(&[1]);
        let runs = vec![logical_run(10)];
        let instances: Vec<AttestationInstance> = serde_json::from_str(
            r#"[
                {"parentEntity": {"kind": "APPLICATION"}, "attestationRunId": 10, "attestedAt": "2023-01-01"},
                {"parentEntity": {"kind": "APPLICATION", "id": null}, "attestationRunId": 10, "attestedAt": "2023-01-02"}
            ]"#,
        )
        .unwrap();
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].is_attested, AttestationStatus::NeverAttested);
        assert!(rows[0].attestation.is_none());
    }

    #[test]
    fn test_instance_without_run_id_does_not_qualify() {
        let applications = apps(&[1]);
        let runs = vec![logical_run(10)];
        let mut unassigned = attested(1, 10, "2023-01-01", "alice");
        unassigned.attestation_run_id = None;
        let instances = vec![unassigned];
        let input = AttestationGridInput::new(
            &applications,
            &runs,
            &instances,
            AttestedEntityKind::LogicalDataFlow,
        );

        let rows = AttestationAggregator::build_grid(&input, &NoNames);
        assert_eq!(rows[0].is_attested, AttestationStatus::NeverAttested);
    }
}
