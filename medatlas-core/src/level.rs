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

//! Five-step complexity scale for educational text.
//!
//! Level 1 targets a lay reader, level 5 a specialist. Content is authored
//! per level and may skip levels; lookups fall back to the nearest lower
//! level that exists.

use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned when no level at or below the requested one is authored
pub const NO_EXPLANATION: &str = "No explanation available.";

/// A complexity level in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ComplexityLevel(u8);

impl ComplexityLevel {
    pub const MIN: ComplexityLevel = ComplexityLevel(1);
    pub const MAX: ComplexityLevel = ComplexityLevel(5);

    pub fn new(level: u8) -> Result<Self> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(AtlasError::InvalidLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// This level and every lower one, highest first
    pub fn descending(self) -> impl Iterator<Item = ComplexityLevel> {
        (1..=self.0).rev().map(ComplexityLevel)
    }
}

impl TryFrom<u8> for ComplexityLevel {
    type Error = AtlasError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

/// Leveled explanation text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level5: Option<String>,
}

impl Explanations {
    /// Text authored at exactly `level`
    pub fn at(&self, level: ComplexityLevel) -> Option<&str> {
        let text = match level.get() {
            1 => &self.level1,
            2 => &self.level2,
            3 => &self.level3,
            4 => &self.level4,
            _ => &self.level5,
        };
        text.as_deref()
    }

    /// Text at `level`, else the nearest lower authored level, else [`NO_EXPLANATION`]
    pub fn resolve(&self, level: ComplexityLevel) -> &str {
        level
            .descending()
            .find_map(|l| self.at(l))
            .unwrap_or(NO_EXPLANATION)
    }

    /// All authored text, lowest level first
    pub fn authored(&self) -> impl Iterator<Item = &str> {
        [&self.level1, &self.level2, &self.level3, &self.level4, &self.level5]
            .into_iter()
            .filter_map(|text| text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> ComplexityLevel {
        ComplexityLevel::new(n).unwrap()
    }

    #[test]
    fn test_level_bounds() {
        assert!(ComplexityLevel::new(0).is_err());
        assert!(ComplexityLevel::new(6).is_err());
        assert_eq!(ComplexityLevel::new(3).unwrap().get(), 3);
    }

    #[test]
    fn test_resolve_falls_back_to_lower_level() {
        let explanations = Explanations {
            level1: Some("basic".into()),
            level3: Some("intermediate".into()),
            ..Default::default()
        };

        assert_eq!(explanations.resolve(level(5)), "intermediate");
        assert_eq!(explanations.resolve(level(3)), "intermediate");
        assert_eq!(explanations.resolve(level(2)), "basic");
    }

    #[test]
    fn test_resolve_without_any_text() {
        let explanations = Explanations::default();
        assert_eq!(explanations.resolve(level(4)), NO_EXPLANATION);
    }

    #[test]
    fn test_level_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<ComplexityLevel>("7").is_err());
        assert_eq!(serde_json::from_str::<ComplexityLevel>("2").unwrap(), level(2));
    }
}
