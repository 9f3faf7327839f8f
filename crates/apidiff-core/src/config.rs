//! Run configuration.
//!
//! A TOML file may preset any field; the CLI overrides individual values.
//!
//! ```toml
//! dialect = "classic"
//! on_duplicate = "fail"
//! format = "json"
//! ```

use crate::errors::{io_error, ApiDiffError, Result};
use crate::policy::{ClassifierPolicy, Dialect, DuplicatePolicy};
use crate::render::OutputFormat;
use crate::simplify::Simplifier;
use crate::snapshot::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one diff run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    pub dialect: Dialect,
    pub on_duplicate: DuplicatePolicy,
    pub format: OutputFormat,
}

impl DiffConfig {
    /// Decode a configuration from TOML text
    ///
    /// # Errors
    /// * `ERR_CONFIG` - malformed TOML, unknown keys or unknown values
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            ApiDiffError::Config {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and decode a configuration file
    ///
    /// # Errors
    /// * `ERR_IO` - the file cannot be read
    /// * `ERR_CONFIG` - the file cannot be decoded
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| io_error("load_config", path, &e))?;
        Self::from_toml_str(&text).map_err(|e| e.with_path(path))
    }

    /// Parser options implied by this configuration
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            policy: ClassifierPolicy::for_dialect(self.dialect),
            duplicates: self.on_duplicate,
        }
    }

    /// Simplifier implied by this configuration
    pub fn simplifier(&self) -> Simplifier {
        Simplifier::for_dialect(self.dialect)
    }
}
