use super::display::{Describable, DisplayCode, DisplayRequest};
use super::join_key::JoinKey;
use serde::{Deserialize, Serialize};

/// Application entity as delivered by the data-fetch layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_criticality: Option<String>,
}

impl Application {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            asset_code: None,
            kind: None,
            lifecycle_phase: None,
            business_criticality: None,
        }
    }

    pub fn join_key(&self) -> JoinKey {
        JoinKey::from_id(self.id)
    }
}

impl Describable for Application {
    fn display_request(&self) -> DisplayRequest<'_> {
        let codes = [
            ("kind", "applicationKind", self.kind.as_deref()),
            (
                "lifecyclePhase",
                "lifecyclePhase",
                self.lifecycle_phase.as_deref(),
            ),
            (
                "businessCriticality",
                "criticality",
                self.business_criticality.as_deref(),
            ),
        ]
        .into_iter()
        .filter_map(|(attribute, name_type, code)| {
            code.map(|code| DisplayCode {
                attribute,
                name_type,
                code,
            })
        })
        .collect();

        DisplayRequest {
            entity_kind: "APPLICATION",
            codes,
        }
    }
}
