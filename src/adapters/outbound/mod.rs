/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod display_names;
pub mod filesystem;
pub mod formatters;
