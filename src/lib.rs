//! catalog-views - aggregation engine for enterprise-architecture catalog views
//!
//! This library folds independently fetched catalog collections (applications,
//! attestation runs and instances, measurables, ratings) into denormalized view
//! rows: an attestation coverage grid with its summary, and ratings grouped by
//! measurable kind. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Pure aggregation logic and domain models
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use catalog_views::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let catalog_reader = FileSystemReader::new();
//! let display_names = StaticDisplayNames::with_defaults();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildCatalogViewUseCase::new(catalog_reader, display_names, progress_reporter);
//!
//! // Execute
//! let request = ViewRequest::builder().snapshot_path("./snapshot").build()?;
//! let response = use_case.execute(request.clone())?;
//!
//! // Format output
//! let model = CatalogViewReadModelBuilder::build(&response, &request.attested_entity_kind);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::display_names::{DisplayNameTables, StaticDisplayNames};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ViewKind, ViewRequest, ViewResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{CatalogViewReadModel, CatalogViewReadModelBuilder};
    pub use crate::application::use_cases::BuildCatalogViewUseCase;
    pub use crate::catalog::domain::{
        AggregatedAttestationRow, Application, AttestationInstance, AttestationRun,
        AttestationStatus, AttestedEntityKind, Decorated, EntityReference, JoinKey, KindGroup,
        Measurable, Rating, RawId,
    };
    pub use crate::catalog::policies::LatestAttestation;
    pub use crate::catalog::services::{
        count_by_key, decorate, fill_missing_keys, group_by, AttestationAggregator,
        AttestationGridInput, GroupKey, RatingAggregator, SummaryReducer,
    };
    pub use crate::ports::inbound::CatalogViewPort;
    pub use crate::ports::outbound::{
        CatalogReader, CatalogSnapshot, DisplayNameLookup, OutputPresenter, ProgressReporter,
        ViewFormatter,
    };
    pub use crate::shared::Result;
}
