use crate::application::read_models::CatalogViewReadModel;
use crate::shared::Result;

/// ViewFormatter port for rendering catalog views
///
/// This port abstracts the formatting logic for different output formats
/// (JSON, Markdown, etc.).
pub trait ViewFormatter {
    /// Formats the catalog view read model
    ///
    /// # Arguments
    /// * `model` - The read model holding whichever views were requested
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CatalogViewReadModel) -> Result<String>;
}
