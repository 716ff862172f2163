// Copyright 2025 Sushanth (https://github.com/sushanthpy)
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

use anyhow::{Context, Result};
use medatlas_core::StoreConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const ENV_HTTP_ADDR: &str = "MEDATLAS_HTTP_ADDR";
const ENV_ENABLE_CORS: &str = "MEDATLAS_ENABLE_CORS";

/// Medatlas Server Configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpServerConfig {
    /// HTTP API listen address (e.g., "127.0.0.1:47200")
    #[serde(default = "default_http_addr")]
    pub listen_addr: String,

    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_http_addr(),
            enable_cors: default_enable_cors(),
        }
    }
}

fn default_http_addr() -> String {
    "127.0.0.1:47200".to_string()
}

fn default_enable_cors() -> bool {
    true
}

impl ServerConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from file (if provided) and environment variables.
    /// Environment variables take priority over the file.
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let config = if let Some(path) = config_file {
            if path.exists() {
                tracing::info!("Loading configuration from file: {:?}", path);
                Self::from_file(&path)?
            } else {
                tracing::warn!("Config file not found: {:?}, using defaults", path);
                Self::default()
            }
        } else {
            Self::default()
        };

        config.merge_with_env()
    }

    /// Merge config with environment variables (env takes priority)
    ///
    /// Supported environment variables:
    /// - MEDATLAS_HTTP_ADDR: HTTP listen address (default: 127.0.0.1:47200)
    /// - MEDATLAS_ENABLE_CORS: Enable CORS (default: true)
    /// - MEDATLAS_DUPLICATE_POLICY, MEDATLAS_VALIDATE_REFERENCES: store options
    fn merge_with_env(mut self) -> Result<Self> {
        if let Ok(addr) = std::env::var(ENV_HTTP_ADDR) {
            self.server.listen_addr = addr;
        }

        if let Ok(cors) = std::env::var(ENV_ENABLE_CORS) {
            self.server.enable_cors = cors.parse().unwrap_or(true);
        }

        self.store = self.store.merge_with_env()?;
        Ok(self)
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {}", self.server.listen_addr))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medatlas_core::DuplicatePolicy;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1:47200");
        assert!(config.server.enable_cors);
        assert_eq!(config.store, StoreConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nenable_cors = false\n\n[store]\nduplicate_policy = \"overwrite\""
        )
        .unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert!(!config.server.enable_cors);
        assert_eq!(config.server.listen_addr, "127.0.0.1:47200");
        assert_eq!(config.store.duplicate_policy, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_invalid_listen_addr() {
        let mut config = ServerConfig::default();
        config.server.listen_addr = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }
}
