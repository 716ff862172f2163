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

//! Store catalog for hosts that pick a store at runtime.
//!
//! [`StoreView`] is an object-safe view over any content store. Category
//! names arrive as strings and are parsed here, records leave as JSON.

use crate::muscular::{create_muscular_store_with_config, MuscularStore};
use crate::occupational::{create_occupational_store_with_config, OccupationalStore};
use crate::topics::{create_safety_topic_store_with_config, SafetyTopicStore};
use medatlas_core::{
    AtlasError, Category, ComplexityLevel, ContentRecord, RecordSummary, Result, StoreConfig,
};
use medatlas_index::{ContentStore, DanglingReference, StoreStats};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// The stores a host can address by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Muscular,
    Occupational,
    Topics,
}

impl StoreKind {
    pub const ALL: [StoreKind; 3] = [StoreKind::Muscular, StoreKind::Occupational, StoreKind::Topics];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Muscular => "muscular",
            StoreKind::Occupational => "occupational",
            StoreKind::Topics => "topics",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "muscular" | "muscles" => Ok(StoreKind::Muscular),
            "occupational" | "occupational-medicine" => Ok(StoreKind::Occupational),
            "topics" | "safety-topics" => Ok(StoreKind::Topics),
            _ => Err(AtlasError::UnknownStore(s.to_string())),
        }
    }
}

/// Records in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: usize,
}

/// Object-safe query surface over one store.
pub trait StoreView: Send + Sync {
    fn name(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records matching `query` (substring search) and `categories` (wire
    /// names). `None` skips a condition; unknown category names are an error.
    fn find(&self, query: Option<&str>, categories: Option<&[String]>) -> Result<Vec<Value>>;

    fn find_summaries(
        &self,
        query: Option<&str>,
        categories: Option<&[String]>,
    ) -> Result<Vec<RecordSummary>>;

    fn contains(&self, id: &str) -> bool;

    fn get(&self, id: &str) -> Result<Option<Value>>;

    fn get_by_name(&self, name: &str) -> Result<Option<Value>>;

    fn related(&self, id: &str) -> Vec<RecordSummary>;

    /// Category wire names present, in declaration order
    fn categories(&self) -> Vec<&'static str>;

    fn counts(&self) -> Vec<CategoryCount>;

    fn stats(&self) -> StoreStats;

    /// Configuration the store was built with
    fn config(&self) -> &StoreConfig;

    fn dangling_references(&self) -> &[DanglingReference];

    /// Leveled text for `id`; `None` when the record is absent or the store
    /// carries no leveled content
    fn leveled_text(&self, id: &str, level: ComplexityLevel) -> Option<&str>;
}

fn to_json<R: Serialize>(record: &R) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| AtlasError::Serialization(e.to_string()))
}

fn parse_categories<C: Category>(names: Option<&[String]>) -> Result<Option<Vec<C>>> {
    names
        .map(|names| names.iter().map(|name| name.parse::<C>()).collect())
        .transpose()
}

impl<R> StoreView for ContentStore<R>
where
    R: ContentRecord + Serialize,
{
    fn name(&self) -> &'static str {
        R::STORE
    }

    fn len(&self) -> usize {
        ContentStore::len(self)
    }

    fn find(&self, query: Option<&str>, categories: Option<&[String]>) -> Result<Vec<Value>> {
        let categories = parse_categories::<R::Category>(categories)?;
        self.select(query, categories.as_deref())
            .into_iter()
            .map(to_json)
            .collect()
    }

    fn find_summaries(
        &self,
        query: Option<&str>,
        categories: Option<&[String]>,
    ) -> Result<Vec<RecordSummary>> {
        let categories = parse_categories::<R::Category>(categories)?;
        Ok(self
            .select(query, categories.as_deref())
            .into_iter()
            .map(R::summary)
            .collect())
    }

    fn contains(&self, id: &str) -> bool {
        ContentStore::contains(self, id)
    }

    fn get(&self, id: &str) -> Result<Option<Value>> {
        ContentStore::get(self, id).map(to_json).transpose()
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Value>> {
        ContentStore::get_by_name(self, name).map(to_json).transpose()
    }

    fn related(&self, id: &str) -> Vec<RecordSummary> {
        ContentStore::related(self, id)
            .into_iter()
            .map(R::summary)
            .collect()
    }

    fn categories(&self) -> Vec<&'static str> {
        ContentStore::categories(self)
            .into_iter()
            .map(|category| category.as_str())
            .collect()
    }

    fn counts(&self) -> Vec<CategoryCount> {
        self.count_by_category()
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.as_str(),
                count,
            })
            .collect()
    }

    fn stats(&self) -> StoreStats {
        ContentStore::stats(self)
    }

    fn config(&self) -> &StoreConfig {
        ContentStore::config(self)
    }

    fn dangling_references(&self) -> &[DanglingReference] {
        ContentStore::dangling_references(self)
    }

    fn leveled_text(&self, id: &str, level: ComplexityLevel) -> Option<&str> {
        ContentStore::get(self, id).and_then(|record| record.leveled_text(level))
    }
}

/// All stores, built once and shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub muscular: Arc<MuscularStore>,
    pub occupational: Arc<OccupationalStore>,
    pub topics: Arc<SafetyTopicStore>,
}

impl Catalog {
    /// Build every store with `config`. Fails on the first duplicate id.
    pub fn load(config: &StoreConfig) -> Result<Self> {
        let catalog = Self {
            muscular: Arc::new(create_muscular_store_with_config(config.clone())?),
            occupational: Arc::new(create_occupational_store_with_config(config.clone())?),
            topics: Arc::new(create_safety_topic_store_with_config(config.clone())?),
        };

        info!(
            muscular = catalog.muscular.len(),
            occupational = catalog.occupational.len(),
            topics = catalog.topics.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn view(&self, kind: StoreKind) -> &dyn StoreView {
        match kind {
            StoreKind::Muscular => self.muscular.inner(),
            StoreKind::Occupational => self.occupational.inner(),
            StoreKind::Topics => self.topics.inner(),
        }
    }

    /// Resolve a store by name
    pub fn view_named(&self, name: &str) -> Result<&dyn StoreView> {
        Ok(self.view(name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load(&StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_store_kind_parse() {
        assert_eq!("Muscular".parse::<StoreKind>().unwrap(), StoreKind::Muscular);
        assert_eq!("safety-topics".parse::<StoreKind>().unwrap(), StoreKind::Topics);
        assert!(matches!(
            "cardiology".parse::<StoreKind>(),
            Err(AtlasError::UnknownStore(_))
        ));
    }

    #[test]
    fn test_find_with_categories() {
        let catalog = catalog();
        let view = catalog.view(StoreKind::Occupational);

        let categories = vec!["regulatory".to_string()];
        let found = view.find(None, Some(&categories)).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["category"], "regulatory");

        let unknown = vec!["cardiology".to_string()];
        assert!(matches!(
            view.find(None, Some(&unknown)),
            Err(AtlasError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_counts_in_declaration_order() {
        let catalog = catalog();
        let counts = catalog.view(StoreKind::Occupational).counts();
        assert_eq!(counts[0], CategoryCount { category: "respiratory", count: 7 });
        assert_eq!(counts.len(), 8);
    }

    #[test]
    fn test_leveled_text_per_store() {
        let catalog = catalog();
        let level = ComplexityLevel::new(1).unwrap();
        assert!(catalog
            .view(StoreKind::Muscular)
            .leveled_text("diaphragm", level)
            .is_some());
        assert!(catalog
            .view(StoreKind::Occupational)
            .leveled_text("silicosis", level)
            .is_none());
    }

    #[test]
    fn test_contains_and_config() {
        let catalog = Catalog::load(&StoreConfig::permissive()).unwrap();
        let view = catalog.view(StoreKind::Muscular);
        assert!(view.contains("deltoid-left"));
        assert!(!view.contains("deltoid"));
        assert!(!view.config().validate_cross_references);
        assert!(view.dangling_references().is_empty());

        let topics = catalog.view(StoreKind::Topics);
        assert_eq!(topics.config(), &StoreConfig::permissive());
        assert!(topics.dangling_references().is_empty());
    }

    #[test]
    fn test_view_named() {
        let catalog = catalog();
        assert_eq!(catalog.view_named("topics").unwrap().name(), "topics");
        assert!(catalog.view_named("bones").is_err());
    }
}
