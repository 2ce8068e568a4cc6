/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (data-fetch layer, display-name
/// service, console, output destinations).
pub mod catalog_reader;
pub mod display_name_lookup;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_reader::{CatalogReader, CatalogSnapshot};
pub use display_name_lookup::DisplayNameLookup;
pub use formatter::ViewFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
