mod latest_attestation;

pub use latest_attestation::LatestAttestation;
