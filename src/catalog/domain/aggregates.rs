use super::application::Application;
use super::attestation::AttestationInstance;
use super::attestation_status::AttestationStatus;
use super::display::Decorated;
use super::measurable::{Measurable, Rating};
use super::measurable_kind::MeasurableKindDescriptor;
use serde::Serialize;

/// One attestation grid row: an application and its coverage
///
/// `attestation` is present exactly when `is_attested` is `Attested`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedAttestationRow {
    pub application: Decorated<Application>,
    pub is_attested: AttestationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<AttestationInstance>,
}

/// Measurables of one catalog kind together with the ratings against them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindGroup {
    pub kind: &'static MeasurableKindDescriptor,
    pub measurables: Vec<Measurable>,
    pub ratings: Vec<Rating>,
}

impl KindGroup {
    pub fn is_empty(&self) -> bool {
        self.measurables.is_empty()
    }

    pub fn has_ratings(&self) -> bool {
        !self.ratings.is_empty()
    }
}
