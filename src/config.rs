//! Configuration file support for catalog-views.
//!
//! Provides YAML-based configuration through `catalog-views.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use catalog_views::adapters::outbound::display_names::DisplayNameTables;
use catalog_views::application::dto::{OutputFormat, ViewKind};
use catalog_views::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "catalog-views.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub view: Option<ViewKind>,
    pub attested_entity_kind: Option<String>,
    pub require_attested: Option<bool>,
    /// Display names keyed by name type (`applicationKind`, `lifecyclePhase`,
    /// `criticality`), then by code.
    pub display_names: Option<DisplayNameTables>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings after applying CLI > config > default precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSettings {
    pub format: OutputFormat,
    pub view: ViewKind,
    pub attested_entity_kind: Option<String>,
    pub require_attested: bool,
    pub display_names: DisplayNameTables,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax \
             and that format/view hold a supported value.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merges command-line arguments over an optional config file.
pub fn merge(args: &Args, config: Option<ConfigFile>) -> EffectiveSettings {
    let config = config.unwrap_or_default();

    EffectiveSettings {
        format: args.format.or(config.format).unwrap_or_default(),
        view: args.view.or(config.view).unwrap_or_default(),
        attested_entity_kind: args.kind.clone().or(config.attested_entity_kind),
        require_attested: args.require_attested || config.require_attested.unwrap_or(false),
        display_names: config.display_names.unwrap_or_default(),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref kind) = config.attested_entity_kind {
        if kind.trim().is_empty() {
            bail!(
                "Invalid config: attested_entity_kind must not be empty.\n\n\
                 💡 Hint: Use a kind such as LOGICAL_DATA_FLOW or remove the field to use the default."
            );
        }
    }

    if let Some(ref tables) = config.display_names {
        for (name_type, entries) in tables {
            if name_type.trim().is_empty() {
                bail!(
                    "Invalid config: display_names contains an empty name type.\n\n\
                     💡 Hint: Name types are applicationKind, lifecyclePhase or criticality."
                );
            }
            for code in entries.keys() {
                if code.trim().is_empty() {
                    bail!(
                        "Invalid config: display_names.{} contains an empty code.\n\n\
                         💡 Hint: Each entry maps a non-empty code to its display name (e.g., PRODUCTION: \"Production\").",
                        name_type
                    );
                }
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
