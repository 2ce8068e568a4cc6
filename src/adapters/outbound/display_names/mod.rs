/// Display-name adapters
mod static_display_names;

pub use static_display_names::{DisplayNameTables, StaticDisplayNames};
