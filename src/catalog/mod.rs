/// Catalog aggregation core
///
/// Pure domain types and stateless services that join independently
/// fetched collections into view rows. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
