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

//! Traits every stored record and category implements.

use crate::error::AtlasError;
use crate::level::ComplexityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A closed classification vocabulary.
///
/// Declaration order defines `Ord`, which in turn defines the order of
/// category listings and counts. Values parse from their kebab-case wire
/// name; unknown names fail with [`AtlasError::UnknownCategory`].
pub trait Category:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = AtlasError>
    + Send
    + Sync
    + 'static
{
    /// Human-readable vocabulary name, used in error messages
    const KIND: &'static str;

    /// Every declared value
    fn all() -> &'static [Self];

    /// Kebab-case wire name
    fn as_str(&self) -> &'static str;
}

/// A secondary classification value, e.g. `("joint", "shoulder")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facet {
    pub name: &'static str,
    pub value: &'static str,
}

impl Facet {
    pub fn new<C: Category>(name: &'static str, value: C) -> Self {
        Self {
            name,
            value: value.as_str(),
        }
    }
}

/// A weak reference from one record to another record's id.
///
/// The target may not exist in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossReference<'a> {
    pub target_id: &'a str,
    pub label: Option<&'a str>,
}

/// Compact listing form of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// A record held by a content store.
pub trait ContentRecord: Clone + Send + Sync + 'static {
    /// Primary classification
    type Category: Category;

    /// Store name used in logs and errors
    const STORE: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn category(&self) -> Self::Category;

    /// Alternate and localized names, indexed alongside `name`
    fn alternate_names(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Identifier in an external authority (e.g. an anatomical ontology)
    fn external_id(&self) -> Option<&str> {
        None
    }

    /// Fields joined into the search haystack, in a fixed order
    fn searchable_fields(&self) -> Vec<&str>;

    /// Secondary classifications. A record may carry several values of one facet.
    fn facets(&self) -> Vec<Facet> {
        Vec::new()
    }

    fn cross_references(&self) -> Vec<CrossReference<'_>> {
        Vec::new()
    }

    /// Leveled educational text, for records that carry it
    fn leveled_text(&self, _level: ComplexityLevel) -> Option<&str> {
        None
    }

    /// Lowercased, space-joined searchable fields
    fn haystack(&self) -> String {
        self.searchable_fields().join(" ").to_lowercase()
    }

    fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category().as_str().to_string(),
        }
    }
}
