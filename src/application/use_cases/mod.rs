/// Use cases module containing application business logic orchestration
mod build_catalog_view;

pub use build_catalog_view::BuildCatalogViewUseCase;
