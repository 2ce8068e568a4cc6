//! Attestation grid read model

use super::attestation_summary_view::AttestationSummaryView;
use crate::catalog::domain::{AggregatedAttestationRow, AttestationStatus};
use serde::Serialize;

/// Column definition of a display grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridColumn {
    /// camelCase field of the row view holding the cell value
    pub field: &'static str,
    /// Column header
    pub name: &'static str,
}

/// Columns of the attestation grid, in display order
pub const ATTESTATION_GRID_COLUMNS: &[GridColumn] = &[
    GridColumn {
        field: "name",
        name: "Name",
    },
    GridColumn {
        field: "assetCode",
        name: "Asset Code",
    },
    GridColumn {
        field: "kind",
        name: "Kind",
    },
    GridColumn {
        field: "businessCriticality",
        name: "Business Criticality",
    },
    GridColumn {
        field: "lifecyclePhase",
        name: "Lifecycle Phase",
    },
    GridColumn {
        field: "lastAttestedBy",
        name: "Last Attested By",
    },
    GridColumn {
        field: "lastAttestedAt",
        name: "Last Attested At",
    },
];

/// One flattened grid row
///
/// Coded attributes carry the display name when one was resolved and the
/// raw code otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationGridRowView {
    pub application_id: i64,
    pub name: String,
    pub asset_code: Option<String>,
    pub kind: Option<String>,
    pub business_criticality: Option<String>,
    pub lifecycle_phase: Option<String>,
    pub is_attested: AttestationStatus,
    pub last_attested_by: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub last_attested_at: Option<String>,
}

impl AttestationGridRowView {
    pub fn from_row(row: &AggregatedAttestationRow) -> Self {
        let app = &row.application;
        let displayed = |field: &str, raw: &Option<String>| {
            app.display_name(field)
                .map(str::to_string)
                .or_else(|| raw.clone())
        };

        Self {
            application_id: app.entity.id,
            name: app.entity.name.clone(),
            asset_code: app.entity.asset_code.clone(),
            kind: displayed("kindDisplay", &app.entity.kind),
            business_criticality: displayed(
                "businessCriticalityDisplay",
                &app.entity.business_criticality,
            ),
            lifecycle_phase: displayed("lifecyclePhaseDisplay", &app.entity.lifecycle_phase),
            is_attested: row.is_attested,
            last_attested_by: row
                .attestation
                .as_ref()
                .and_then(|a| a.attested_by.clone()),
            last_attested_at: row
                .attestation
                .as_ref()
                .and_then(|a| a.attested_at)
                .map(|at| at.format("%Y-%m-%d %H:%M:%S%.f").to_string()),
        }
    }

    /// Cell value for a column field; empty when absent
    pub fn cell(&self, field: &str) -> String {
        let value = match field {
            "name" => Some(self.name.as_str()),
            "assetCode" => self.asset_code.as_deref(),
            "kind" => self.kind.as_deref(),
            "businessCriticality" => self.business_criticality.as_deref(),
            "lifecyclePhase" => self.lifecycle_phase.as_deref(),
            "lastAttestedBy" => self.last_attested_by.as_deref(),
            "lastAttestedAt" => self.last_attested_at.as_deref(),
            _ => None,
        };
        value.unwrap_or_default().to_string()
    }
}

/// Attestation grid plus its summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationGridView {
    pub attested_entity_kind: String,
    pub columns: &'static [GridColumn],
    pub rows: Vec<AttestationGridRowView>,
    pub summary: AttestationSummaryView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{
        Application, AttestationInstance, Decorated, DisplayNames, EntityReference,
    };
    use chrono::NaiveDate;

    fn decorated_app() -> Decorated<Application> {
        let mut app = Application::new(1, "Payments");
        app.asset_code = Some("PAY-01".to_string());
        app.kind = Some("IN_HOUSE".to_string());
        app.lifecycle_phase = Some("PRODUCTION".to_string());
        app.business_criticality = Some("HIGH".to_string());

        let mut names = DisplayNames::new();
        names.insert("kindDisplay".to_string(), "In House".to_string());
        names.insert("lifecyclePhaseDisplay".to_string(), "Production".to_string());
        Decorated::new(app, names)
    }

    #[test]
    fn test_columns_match_grid_layout() {
        let names: Vec<&str> = ATTESTATION_GRID_COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Name",
                "Asset Code",
                "Kind",
                "Business Criticality",
                "Lifecycle Phase",
                "Last Attested By",
                "Last Attested At"
            ]
        );
    }

    #[test]
    fn test_from_row_prefers_display_names() {
        let row = AggregatedAttestationRow {
            application: decorated_app(),
            is_attested: AttestationStatus::NeverAttested,
            attestation: None,
        };

        let view = AttestationGridRowView::from_row(&row);

        assert_eq!(view.kind.as_deref(), Some("In House"));
        assert_eq!(view.lifecycle_phase.as_deref(), Some("Production"));
        // no display name resolved: raw code
        assert_eq!(view.business_criticality.as_deref(), Some("HIGH"));
        assert_eq!(view.last_attested_by, None);
        assert_eq!(view.last_attested_at, None);
    }

    #[test]
    fn test_from_row_with_attestation() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let row = AggregatedAttestationRow {
            application: decorated_app(),
            is_attested: AttestationStatus::Attested,
            attestation: Some(
                AttestationInstance::new(EntityReference::new("APPLICATION", 1), 10)
                    .attested(at, "alice"),
            ),
        };

        let view = AttestationGridRowView::from_row(&row);

        assert_eq!(view.last_attested_by.as_deref(), Some("alice"));
        assert_eq!(view.last_attested_at.as_deref(), Some("2024-03-05 09:30:00"));
        assert_eq!(view.cell("lastAttestedAt"), "2024-03-05 09:30:00");
    }

    #[test]
    fn test_every_column_has_a_cell() {
        let row = AggregatedAttestationRow {
            application: decorated_app(),
            is_attested: AttestationStatus::NeverAttested,
            attestation: None,
        };
        let view = AttestationGridRowView::from_row(&row);

        assert_eq!(view.cell("name"), "Payments");
        assert_eq!(view.cell("assetCode"), "PAY-01");
        assert_eq!(view.cell("lastAttestedBy"), "");
        assert_eq!(view.cell("unknownField"), "");
    }

    #[test]
    fn test_attested_at_keeps_fractional_seconds() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(9, 30, 0, 120)
            .unwrap();
        let row = AggregatedAttestationRow {
            application: decorated_app(),
            is_attested: AttestationStatus::Attested,
            attestation: Some(
                AttestationInstance::new(EntityReference::new("APPLICATION", 1), 10)
                    .attested(at, "alice"),
            ),
        };

        let view = AttestationGridRowView::from_row(&row);
        assert_eq!(view.last_attested_at.as_deref(), Some("2024-03-05 09:30:00.120"));
    }
}
