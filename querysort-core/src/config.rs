//! Sorting configuration.
//!
//! The only tunables are the request parameter names. They can come from a
//! TOML `[sorting]` table and be overridden by environment variables:
//!
//! ```toml
//! [sorting]
//! key_param = "order"
//! dir_param = "direction"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SortError};
use crate::params::ParamNames;

/// Overrides [`ParamNames::key_param`].
pub const ENV_KEY_PARAM: &str = "QUERYSORT_KEY_PARAM";
/// Overrides [`ParamNames::dir_param`].
pub const ENV_DIR_PARAM: &str = "QUERYSORT_DIR_PARAM";

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub sorting: FileSortingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSortingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir_param: Option<String>,
}

/// Effective sorting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingConfig {
    pub params: ParamNames,
}

impl SortingConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(raw)?;
        Self::from_file_config(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loaded sorting config");
        Self::from_toml_str(&raw)
    }

    pub fn from_file_config(file: FileConfig) -> Result<Self> {
        let defaults = ParamNames::default();
        let params = ParamNames {
            key_param: file.sorting.key_param.unwrap_or(defaults.key_param),
            dir_param: file.sorting.dir_param.unwrap_or(defaults.dir_param),
        };
        Self { params }.validated()
    }

    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Load the optional config file, optionally read `.env`, then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>, read_dotenv: bool) -> Result<Self> {
        if read_dotenv {
            match dotenvy::dotenv() {
                Ok(env_path) => debug!(path = %env_path.display(), "loaded .env"),
                Err(err) if err.not_found() => {}
                Err(err) => warn!("failed to read .env: {err}"),
            }
        }

        let base = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        base.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        if let Some(key_param) = lookup(ENV_KEY_PARAM) {
            self.params.key_param = key_param;
        }
        if let Some(dir_param) = lookup(ENV_DIR_PARAM) {
            self.params.dir_param = dir_param;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self> {
        for (field, value) in [
            ("key_param", &self.params.key_param),
            ("dir_param", &self.params.dir_param),
        ] {
            if value.trim().is_empty() {
                warn!(field, "sort parameter name is empty");
                return Err(SortError::InvalidParamName {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.params.key_param == self.params.dir_param {
            return Err(SortError::InvalidParamName {
                field: "dir_param",
                reason: format!(
                    "must differ from key_param ({})",
                    self.params.key_param
                ),
            });
        }

        Ok(self)
    }
}
