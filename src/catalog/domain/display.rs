use serde::Serialize;
use std::collections::BTreeMap;

/// Display-name fields keyed by field name, e.g. `kindDisplay -> "In House"`
pub type DisplayNames = BTreeMap<String, String>;

/// One coded attribute of an entity that has a human-readable name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCode<'a> {
    /// Attribute the code was read from, e.g. `lifecyclePhase`
    pub attribute: &'static str,
    /// Name table the code belongs to, e.g. `lifecyclePhase` or `criticality`
    pub name_type: &'static str,
    /// Raw code value, e.g. `PRODUCTION`
    pub code: &'a str,
}

impl DisplayCode<'_> {
    /// Field under which the resolved name is attached: `<attribute>Display`
    pub fn display_field(&self) -> String {
        format!("{}Display", self.attribute)
    }
}

/// What a display-name lookup is asked to resolve for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest<'a> {
    pub entity_kind: &'static str,
    pub codes: Vec<DisplayCode<'a>>,
}

/// Entities that expose coded attributes for display-name decoration
pub trait Describable {
    fn display_request(&self) -> DisplayRequest<'_>;
}

/// A copy of an entity with display names merged alongside its own fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorated<T> {
    #[serde(flatten)]
    pub entity: T,
    #[serde(flatten)]
    pub display_names: DisplayNames,
}

impl<T> Decorated<T> {
    pub fn new(entity: T, display_names: DisplayNames) -> Self {
        Self {
            entity,
            display_names,
        }
    }

    pub fn display_name(&self, field: &str) -> Option<&str> {
        self.display_names.get(field).map(String::as_str)
    }
}
