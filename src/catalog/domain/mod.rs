pub mod aggregates;
pub mod application;
pub mod attestation;
pub mod attestation_status;
pub mod display;
pub mod entity_reference;
pub mod join_key;
pub mod measurable;
pub mod measurable_kind;

pub use aggregates::{AggregatedAttestationRow, KindGroup};
pub use application::Application;
pub use attestation::{AttestationInstance, AttestationRun, AttestedEntityKind};
pub use attestation_status::{AttestationStatus, StatusDescriptor, ATTESTATION_STATUSES};
pub use display::{Decorated, Describable, DisplayCode, DisplayNames, DisplayRequest};
pub use entity_reference::EntityReference;
pub use join_key::{JoinKey, RawId};
pub use measurable::{Measurable, Rating};
pub use measurable_kind::{MeasurableKindDescriptor, MEASURABLE_KINDS};
