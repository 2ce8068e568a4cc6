use crate::catalog::domain::AttestationInstance;

/// LatestAttestation policy for picking the attestation shown on a grid row
///
/// The most recent `attested_at` wins. When several instances share the
/// same timestamp, the first one encountered is kept. Pending instances
/// (no `attested_at`) are never selected.
pub struct LatestAttestation;

impl LatestAttestation {
    /// Selects the latest attested instance, if any
    pub fn select<'a, I>(instances: I) -> Option<&'a AttestationInstance>
    where
        I: IntoIterator<Item = &'a AttestationInstance>,
    {
        instances
            .into_iter()
            .filter(|instance| instance.attested_at.is_some())
            .fold(None, |latest: Option<&AttestationInstance>, candidate| match latest {
                Some(current) if candidate.attested_at <= current.attested_at => Some(current),
                _ => Some(candidate),
            })
    }
}
