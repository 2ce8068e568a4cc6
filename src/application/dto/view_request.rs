use super::view_kind::ViewKind;
use crate::catalog::domain::AttestedEntityKind;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::path::PathBuf;

/// ViewRequest - Internal request DTO for the catalog view use case
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    /// Directory holding the snapshot JSON files
    pub snapshot_path: PathBuf,
    /// Which views to build
    pub view: ViewKind,
    /// Attestation runs of this kind count towards coverage
    pub attested_entity_kind: AttestedEntityKind,
    /// Fail the run when any application was never attested
    pub require_attested: bool,
}

impl ViewRequest {
    /// Request for all views with default settings
    pub fn new(snapshot_path: PathBuf) -> Self {
        Self {
            snapshot_path,
            view: ViewKind::default(),
            attested_entity_kind: AttestedEntityKind::default(),
            require_attested: false,
        }
    }

    pub fn builder() -> ViewRequestBuilder {
        ViewRequestBuilder::default()
    }
}

/// Builder for `ViewRequest`
///
/// The attested entity kind is taken as text and validated on `build`.
#[derive(Debug, Clone, Default)]
pub struct ViewRequestBuilder {
    snapshot_path: Option<PathBuf>,
    view: Option<ViewKind>,
    attested_entity_kind: Option<String>,
    require_attested: bool,
}

impl ViewRequestBuilder {
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn view(mut self, view: ViewKind) -> Self {
        self.view = Some(view);
        self
    }

    pub fn attested_entity_kind(mut self, kind: impl Into<String>) -> Self {
        self.attested_entity_kind = Some(kind.into());
        self
    }

    pub fn require_attested(mut self, require: bool) -> Self {
        self.require_attested = require;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns `CatalogError::Validation` if no snapshot path was given or
    /// the attested entity kind is blank.
    pub fn build(self) -> Result<ViewRequest> {
        let snapshot_path = self.snapshot_path.ok_or_else(|| CatalogError::Validation {
            message: "snapshot path is required".to_string(),
        })?;

        let attested_entity_kind = match self.attested_entity_kind {
            Some(text) => text
                .parse::<AttestedEntityKind>()
                .map_err(|message| CatalogError::Validation { message })?,
            None => AttestedEntityKind::default(),
        };

        Ok(ViewRequest {
            snapshot_path,
            view: self.view.unwrap_or_default(),
            attested_entity_kind,
            require_attested: self.require_attested,
        })
    }
}
