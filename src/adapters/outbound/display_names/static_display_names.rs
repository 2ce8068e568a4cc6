use crate::catalog::domain::{DisplayNames, DisplayRequest};
use crate::ports::outbound::DisplayNameLookup;
use std::collections::BTreeMap;

/// Name tables keyed by name type, then by code
pub type DisplayNameTables = BTreeMap<String, BTreeMap<String, String>>;

const BUILT_IN: &[(&str, &[(&str, &str)])] = &[
    (
        "applicationKind",
        &[
            ("IN_HOUSE", "In House"),
            ("INTERNALLY_HOSTED", "Hosted"),
            ("EXTERNALLY_HOSTED", "External to the organisation"),
            ("EUC", "End User Computing"),
            ("THIRD_PARTY", "Third Party"),
            ("CUSTOMISED", "Customised"),
            ("EXTERNAL", "External"),
        ],
    ),
    (
        "lifecyclePhase",
        &[
            ("CONCEPTUAL", "Conceptual"),
            ("DEVELOPMENT", "Development"),
            ("PRODUCTION", "Production"),
            ("RETIRED", "Retired"),
        ],
    ),
    (
        "criticality",
        &[
            ("NONE", "None"),
            ("LOW", "Low"),
            ("MEDIUM", "Medium"),
            ("HIGH", "High"),
            ("VERY_HIGH", "Very High"),
            ("UNKNOWN", "Unknown"),
        ],
    ),
];

/// StaticDisplayNames adapter resolving codes from in-memory tables
///
/// Starts from the built-in enum names; configured tables are merged on
/// top, so a configured name replaces the built-in one for the same code.
#[derive(Debug, Clone, Default)]
pub struct StaticDisplayNames {
    tables: DisplayNameTables,
}

impl StaticDisplayNames {
    /// Lookup with no names at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lookup with the built-in application enum names
    pub fn with_defaults() -> Self {
        let tables = BUILT_IN
            .iter()
            .map(|(name_type, entries)| {
                let table = entries
                    .iter()
                    .map(|(code, name)| (code.to_string(), name.to_string()))
                    .collect();
                (name_type.to_string(), table)
            })
            .collect();
        Self { tables }
    }

    /// Merges `overrides` into the current tables
    pub fn merged_with(mut self, overrides: &DisplayNameTables) -> Self {
        for (name_type, entries) in overrides {
            let table = self.tables.entry(name_type.clone()).or_default();
            for (code, name) in entries {
                table.insert(code.clone(), name.clone());
            }
        }
        self
    }

    pub fn name_for(&self, name_type: &str, code: &str) -> Option<&str> {
        self.tables
            .get(name_type)
            .and_then(|table| table.get(code))
            .map(String::as_str)
    }
}

impl DisplayNameLookup for StaticDisplayNames {
    fn resolve(&self, request: &DisplayRequest<'_>) -> DisplayNames {
        request
            .codes
            .iter()
            .filter_map(|code| {
                self.name_for(code.name_type, code.code)
                    .map(|name| (code.display_field(), name.to_string()))
            })
            .collect()
    }
}
