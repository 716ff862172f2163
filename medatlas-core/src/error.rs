// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Medatlas error types

use thiserror::Error;

/// Result type for medatlas operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Errors raised while building stores or parsing caller input.
///
/// Lookups never produce an error: a missing record is `None` and an
/// unmatched query is an empty `Vec`.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Two literal records in one store share an id
    #[error("Duplicate id '{id}' in {store} store")]
    DuplicateId { store: &'static str, id: String },

    /// A category name outside the declared vocabulary
    #[error("Unknown {kind}: {value}")]
    UnknownCategory { kind: &'static str, value: String },

    /// A store name that does not exist
    #[error("Unknown store: {0}")]
    UnknownStore(String),

    /// Explanation level outside 1..=5
    #[error("Invalid complexity level {0} (expected 1-5)")]
    InvalidLevel(u8),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record could not be converted to its wire form
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = AtlasError::DuplicateId {
            store: "muscular",
            id: "deltoid-left".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate id 'deltoid-left' in muscular store");
    }

    #[test]
    fn test_unknown_category_message() {
        let err = AtlasError::UnknownCategory {
            kind: "occupational category",
            value: "cardiology".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown occupational category: cardiology");
    }
}
