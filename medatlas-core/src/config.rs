// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Configuration for store construction
//!
//! Controls how a store builder reacts to authoring mistakes in literal data:
//! duplicate ids and cross-references that point at records nobody wrote yet.

use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable overriding [`StoreConfig::duplicate_policy`]
pub const ENV_DUPLICATE_POLICY: &str = "MEDATLAS_DUPLICATE_POLICY";

/// Environment variable overriding [`StoreConfig::validate_cross_references`]
pub const ENV_VALIDATE_REFERENCES: &str = "MEDATLAS_VALIDATE_REFERENCES";

/// What the builder does when two records share an id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail store construction with [`AtlasError::DuplicateId`]
    #[default]
    Reject,
    /// Replace the earlier record in place and log a warning
    Overwrite,
}

impl FromStr for DuplicatePolicy {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            other => Err(AtlasError::Config(format!(
                "invalid duplicate policy '{}' (expected 'reject' or 'overwrite')",
                other
            ))),
        }
    }
}

/// Configuration for building a content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Duplicate id handling
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Report cross-references whose target id is not in the store.
    /// Dangling references are logged, never fatal.
    #[serde(default = "default_validate_cross_references")]
    pub validate_cross_references: bool,
}

fn default_validate_cross_references() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            validate_cross_references: default_validate_cross_references(),
        }
    }
}

impl StoreConfig {
    /// Strict construction: reject duplicates, report dangling references
    pub fn strict() -> Self {
        Self::default()
    }

    /// Last-write-wins construction with no reference validation
    pub fn permissive() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Overwrite,
            validate_cross_references: false,
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration: file (when given and present), then environment overrides
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let config = match config_file {
            Some(path) if path.exists() => {
                tracing::info!("Loading store configuration from file: {:?}", path);
                Self::from_file(&path)?
            }
            Some(path) => {
                tracing::warn!("Config file not found: {:?}, using defaults", path);
                Self::default()
            }
            None => Self::default(),
        };

        config.merge_with_env()
    }

    /// Apply environment variables that are explicitly set
    ///
    /// Supported environment variables:
    /// - MEDATLAS_DUPLICATE_POLICY: `reject` or `overwrite` (default: reject)
    /// - MEDATLAS_VALIDATE_REFERENCES: `true` or `false` (default: true)
    pub fn merge_with_env(mut self) -> Result<Self> {
        if let Ok(policy) = std::env::var(ENV_DUPLICATE_POLICY) {
            self.duplicate_policy = policy.parse()?;
        }

        if let Ok(validate) = std::env::var(ENV_VALIDATE_REFERENCES) {
            self.validate_cross_references = validate.trim().parse().map_err(|_| {
                AtlasError::Config(format!(
                    "{} must be 'true' or 'false', got '{}'",
                    ENV_VALIDATE_REFERENCES, validate
                ))
            })?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert!(config.validate_cross_references);
    }

    #[test]
    fn test_permissive_config() {
        let config = StoreConfig::permissive();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
        assert!(!config.validate_cross_references);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = StoreConfig::from_toml_str("duplicate_policy = \"overwrite\"").unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
        assert!(config.validate_cross_references);
    }

    #[test]
    fn test_from_toml_rejects_unknown_policy() {
        assert!(StoreConfig::from_toml_str("duplicate_policy = \"merge\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "validate_cross_references = false").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert!(!config.validate_cross_references);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_duplicate_policy_parse() {
        assert_eq!("Overwrite".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Overwrite);
        assert_eq!(" reject ".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Reject);
        assert!("ignore".parse::<DuplicatePolicy>().is_err());
    }
}
