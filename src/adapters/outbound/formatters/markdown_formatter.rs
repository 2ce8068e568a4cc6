use crate::application::read_models::{
    AttestationGridView, AttestationSummaryView, CatalogViewReadModel, RatingTabView,
    RatingTabsView,
};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// Markdown table header for the attestation summary
const SUMMARY_TABLE_HEADER: &str = "| Status | Count |\n";

/// Markdown table separator line for the attestation summary
const SUMMARY_TABLE_SEPARATOR: &str = "|--------|-------|\n";

/// Markdown table header for rating rows
const RATING_TABLE_HEADER: &str = "| Measurable | Rating | Description |\n";

/// Markdown table separator line for rating rows
const RATING_TABLE_SEPARATOR: &str = "|------------|--------|-------------|\n";

/// MarkdownFormatter adapter rendering catalog views as Markdown tables
///
/// The attestation grid is rendered from its column definitions, so the
/// table follows `ATTESTATION_GRID_COLUMNS`. Each rating tab becomes a
/// subsection.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn table_row<I, S>(cells: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<String> = cells
            .into_iter()
            .map(|cell| Self::escape_markdown_table_cell(cell.as_ref()))
            .collect();
        format!("| {} |\n", cells.join(" | "))
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String) {
        output.push_str("# Catalog View\n\n");
    }

    fn render_attestation(&self, output: &mut String, grid: &AttestationGridView) {
        output.push_str(&format!(
            "## Attestation Coverage ({})\n\n",
            grid.attested_entity_kind
        ));

        self.render_summary(output, &grid.summary);

        if grid.rows.is_empty() {
            output.push_str("_No applications in this snapshot._\n\n");
            return;
        }

        output.push_str(&Self::table_row(grid.columns.iter().map(|c| c.name)));
        output.push_str(&Self::table_row(grid.columns.iter().map(|_| "---")));
        for row in &grid.rows {
            output.push_str(&Self::table_row(
                grid.columns.iter().map(|column| row.cell(column.field)),
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, summary: &AttestationSummaryView) {
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        for segment in &summary.segments {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(segment.label),
                segment.count
            ));
        }
        output.push_str(&format!("| **Total** | **{}** |\n\n", summary.total));
    }

    fn render_ratings(&self, output: &mut String, tabs: &RatingTabsView) {
        output.push_str("## Ratings by Measurable Kind\n\n");

        match tabs
            .active_tab
            .and_then(|code| tabs.tabs.iter().find(|tab| tab.code == code))
        {
            Some(tab) => output.push_str(&format!("Default tab: **{}**\n\n", tab.name)),
            None => output.push_str("_No ratings recorded._\n\n"),
        }

        for tab in &tabs.tabs {
            self.render_tab(output, tab);
        }
    }

    fn render_tab(&self, output: &mut String, tab: &RatingTabView) {
        output.push_str(&format!("### {}\n\n", tab.name));
        output.push_str(&format!(
            "{} measurable(s), {} rating(s)\n\n",
            tab.measurable_count, tab.rating_count
        ));

        if tab.ratings.is_empty() {
            return;
        }

        output.push_str(RATING_TABLE_HEADER);
        output.push_str(RATING_TABLE_SEPARATOR);
        for rating in &tab.ratings {
            output.push_str(&Self::table_row([
                rating.measurable_name.as_str(),
                rating.rating.as_str(),
                rating.description.as_deref().unwrap_or(""),
            ]));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for MarkdownFormatter {
    fn format(&self, model: &CatalogViewReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output);

        if let Some(grid) = &model.attestation {
            self.render_attestation(&mut output, grid);
        }

        if let Some(tabs) = &model.ratings {
            self.render_ratings(&mut output, tabs);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{AttestationGridRowView, ATTESTATION_GRID_COLUMNS};
    use crate::catalog::domain::{AttestationStatus, Measurable, Rating};
    use crate::catalog::services::RatingAggregator;
    use std::collections::BTreeMap;

    fn grid_row(name: &str, attested_by: Option<&str>) -> AttestationGridRowView {
        AttestationGridRowView {
            application_id: 1,
            name: name.to_string(),
            asset_code: Some("A-1".to_string()),
            kind: Some("In House".to_string()),
            business_criticality: None,
            lifecycle_phase: Some("Production".to_string()),
            is_attested: if attested_by.is_some() {
                AttestationStatus::Attested
            } else {
                AttestationStatus::NeverAttested
            },
            last_attested_by: attested_by.map(str::to_string),
            last_attested_at: attested_by.map(|_| "2024-01-05 12:00:00".to_string()),
        }
    }

    fn grid(rows: Vec<AttestationGridRowView>) -> AttestationGridView {
        let mut counts = BTreeMap::new();
        for row in &rows {
            *counts.entry(row.is_attested.key()).or_insert(0) += 1;
        }
        AttestationGridView {
            attested_entity_kind: "LOGICAL_DATA_FLOW".to_string(),
            columns: ATTESTATION_GRID_COLUMNS,
            summary: AttestationSummaryView::from_counts(&counts),
            rows,
        }
    }

    #[test]
    fn test_format_header_only() {
        let output = MarkdownFormatter::new()
            .format(&CatalogViewReadModel::default())
            .unwrap();
        assert_eq!(output, "# Catalog View\n\n");
    }

    #[test]
    fn test_format_attestation_grid() {
        let model = CatalogViewReadModel {
            attestation: Some(grid(vec![
                grid_row("Payments", Some("alice")),
                grid_row("Ledger", None),
            ])),
            ratings: None,
        };

        let output = MarkdownFormatter::new().format(&model).unwrap();

        assert!(output.contains("## Attestation Coverage (LOGICAL_DATA_FLOW)"));
        assert!(output.contains("| Attested | 1 |"));
        assert!(output.contains("| Never Attested | 1 |"));
        assert!(output.contains("| **Total** | **2** |"));
        assert!(output.contains(
            "| Name | Asset Code | Kind | Business Criticality | Lifecycle Phase | Last Attested By | Last Attested At |"
        ));
        assert!(output.contains(
            "| Payments | A-1 | In House |  | Production | alice | 2024-01-05 12:00:00 |"
        ));
        assert!(output.contains("| Ledger | A-1 | In House |  | Production |  |  |"));
    }

    #[test]
    fn test_format_empty_grid() {
        let model = CatalogViewReadModel {
            attestation: Some(grid(vec![])),
            ratings: None,
        };

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("| **Total** | **0** |"));
        assert!(output.contains("_No applications in this snapshot._"));
    }

    #[test]
    fn test_format_ratings() {
        let measurables = vec![Measurable::new(1, "Payments", "CAPABILITY")];
        let mut rating = Rating::new(1, "G");
        rating.description = Some("Good | stable".to_string());
        let groups = RatingAggregator::build_ratings_by_kind(&measurables, &[rating]);

        let model = CatalogViewReadModel {
            attestation: None,
            ratings: Some(RatingTabsView::from_groups(&groups)),
        };

        let output = MarkdownFormatter::new().format(&model).unwrap();

        assert!(output.contains("Default tab: **Function**"));
        assert!(output.contains("### Function\n\n1 measurable(s), 1 rating(s)"));
        assert!(output.contains("| Payments | G | Good \\| stable |"));
        assert!(output.contains("### Service\n\n0 measurable(s), 0 rating(s)"));
    }

    #[test]
    fn test_format_ratings_without_any_rating() {
        let groups = RatingAggregator::build_ratings_by_kind(&[], &[]);
        let model = CatalogViewReadModel {
            attestation: None,
            ratings: Some(RatingTabsView::from_groups(&groups)),
        };

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("_No ratings recorded._"));
        assert!(!output.contains(RATING_TABLE_HEADER));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
