mod attestation_aggregator;
mod display_decorator;
pub mod grouping;
mod rating_aggregator;
mod summary_reducer;

pub use attestation_aggregator::{AttestationAggregator, AttestationGridInput};
pub use display_decorator::decorate;
pub use grouping::{count_by_key, fill_missing_keys, group_by, GroupKey};
pub use rating_aggregator::RatingAggregator;
pub use summary_reducer::SummaryReducer;
