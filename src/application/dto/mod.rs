/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod view_kind;
mod view_request;
mod view_response;

pub use output_format::OutputFormat;
pub use view_kind::ViewKind;
pub use view_request::{ViewRequest, ViewRequestBuilder};
pub use view_response::ViewResponse;
