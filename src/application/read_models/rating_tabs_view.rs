//! Tabbed ratings read model, one tab per measurable kind

use crate::catalog::domain::KindGroup;
use crate::catalog::services::RatingAggregator;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRowView {
    pub measurable_id: i64,
    pub measurable_name: String,
    pub rating: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTabView {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub measurable_count: usize,
    pub rating_count: usize,
    pub ratings: Vec<RatingRowView>,
}

impl RatingTabView {
    pub fn from_group(group: &KindGroup) -> Self {
        let names: HashMap<i64, &str> = group
            .measurables
            .iter()
            .map(|m| (m.id, m.name.as_str()))
            .collect();

        // Grouped ratings always carry a measurable id
        let ratings = group
            .ratings
            .iter()
            .filter_map(|r| {
                let measurable_id = r.measurable_id?;
                Some(RatingRowView {
                    measurable_id,
                    measurable_name: names
                        .get(&measurable_id)
                        .copied()
                        .unwrap_or_default()
                        .to_string(),
                    rating: r.rating.clone(),
                    description: r.description.clone(),
                })
            })
            .collect();

        Self {
            code: group.kind.code,
            name: group.kind.name,
            description: group.kind.description,
            measurable_count: group.measurables.len(),
            rating_count: group.ratings.len(),
            ratings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTabsView {
    pub tabs: Vec<RatingTabView>,
    /// Code of the initially selected tab: the first with any ratings
    pub active_tab: Option<&'static str>,
}

impl RatingTabsView {
    pub fn from_groups(groups: &[KindGroup]) -> Self {
        Self {
            tabs: groups.iter().map(RatingTabView::from_group).collect(),
            active_tab: RatingAggregator::first_rated_kind(groups),
        }
    }
}
