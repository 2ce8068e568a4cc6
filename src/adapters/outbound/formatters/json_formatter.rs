use crate::application::read_models::CatalogViewReadModel;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, model: &CatalogViewReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}
