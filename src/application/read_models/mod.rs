//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of aggregation results for display.

mod attestation_grid_view;
mod attestation_summary_view;
mod catalog_view_read_model;
mod catalog_view_read_model_builder;
mod rating_tabs_view;

pub use attestation_grid_view::{
    AttestationGridRowView, AttestationGridView, GridColumn, ATTESTATION_GRID_COLUMNS,
};
pub use attestation_summary_view::{AttestationSummaryView, SummarySegment};
pub use catalog_view_read_model::CatalogViewReadModel;
pub use catalog_view_read_model_builder::CatalogViewReadModelBuilder;
pub use rating_tabs_view::{RatingRowView, RatingTabView, RatingTabsView};
