use super::grouping::{group_by, GroupKey};
use crate::catalog::domain::{KindGroup, Measurable, Rating, MEASURABLE_KINDS};
use std::collections::HashSet;

/// RatingAggregator service grouping ratings by measurable kind
///
/// Produces one group per entry of the measurable kind catalog, including
/// kinds nothing was rated against.
pub struct RatingAggregator;

impl RatingAggregator {
    /// Groups measurables and their ratings by catalog kind
    ///
    /// # Arguments
    /// * `measurables` - Measurables referenced by the ratings
    /// * `ratings` - Ratings against those measurables
    ///
    /// # Returns
    /// One group per catalog kind, sorted by the kind's display name.
    /// Ratings whose measurable is unknown or missing appear in no group,
    /// as do measurables without a kind.
    pub fn build_ratings_by_kind(measurables: &[Measurable], ratings: &[Rating]) -> Vec<KindGroup> {
        let measurables_by_kind = group_by(measurables, |m| m.kind.as_deref());

        let mut groups: Vec<KindGroup> = MEASURABLE_KINDS
            .iter()
            .map(|kind| {
                let used: Vec<Measurable> = measurables_by_kind
                    .get(&GroupKey::Key(kind.code))
                    .map(|group| group.iter().map(|m| (*m).clone()).collect())
                    .unwrap_or_default();

                let measurable_ids: HashSet<i64> = used.iter().map(|m| m.id).collect();
                let ratings_for_kind: Vec<Rating> = ratings
                    .iter()
                    .filter(|r| r.measurable_id.is_some_and(|id| measurable_ids.contains(&id)))
                    .cloned()
                    .collect();

                KindGroup {
                    kind,
                    measurables: used,
                    ratings: ratings_for_kind,
                }
            })
            .collect();

        // Stable, so equal names keep catalog order
        groups.sort_by(|a, b| a.kind.name.cmp(b.kind.name));
        groups
    }

    /// Code of the first group with at least one rating
    ///
    /// Used to pick the initially selected tab.
    pub fn first_rated_kind(groups: &[KindGroup]) -> Option<&'static str> {
        groups.iter().find(|g| g.has_ratings()).map(|g| g.kind.code)
    }

    /// Ratings that reference no known measurable, or no measurable at all
    pub fn dangling_ratings<'a>(measurables: &[Measurable], ratings: &'a [Rating]) -> Vec<&'a Rating> {
        let known: HashSet<i64> = measurables.iter().map(|m| m.id).collect();
        ratings
            .iter()
            .filter(|r| !r.measurable_id.is_some_and(|id| known.contains(&id)))
            .collect()
    }
}
