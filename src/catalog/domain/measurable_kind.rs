use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Static catalog entry for a measurable kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurableKindDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub position: u32,
}

/// The measurable kind catalog
///
/// Note that `CAPABILITY` is presented as "Function", so display-name order
/// differs from code order.
pub const MEASURABLE_KINDS: &[MeasurableKindDescriptor] = &[
    MeasurableKindDescriptor {
        code: "BUSINESS_LINE",
        name: "Business Line",
        description: "Business lines served by the application",
        position: 10,
    },
    MeasurableKindDescriptor {
        code: "CAPABILITY",
        name: "Function",
        description: "Business functions the application supports",
        position: 20,
    },
    MeasurableKindDescriptor {
        code: "PROCESS",
        name: "Process",
        description: "Business processes the application takes part in",
        position: 30,
    },
    MeasurableKindDescriptor {
        code: "PRODUCT",
        name: "Product",
        description: "Products delivered with the help of the application",
        position: 40,
    },
    MeasurableKindDescriptor {
        code: "REGION",
        name: "Region",
        description: "Geographic regions the application operates in",
        position: 50,
    },
    MeasurableKindDescriptor {
        code: "SERVICE",
        name: "Service",
        description: "Services the application provides",
        position: 60,
    },
];

fn kind_index() -> &'static HashMap<&'static str, &'static MeasurableKindDescriptor> {
    static INDEX: OnceLock<HashMap<&'static str, &'static MeasurableKindDescriptor>> =
        OnceLock::new();
    INDEX.get_or_init(|| MEASURABLE_KINDS.iter().map(|k| (k.code, k)).collect())
}

/// Looks up a measurable kind by code
pub fn find_measurable_kind(code: &str) -> Option<&'static MeasurableKindDescriptor> {
    kind_index().get(code).copied()
}
