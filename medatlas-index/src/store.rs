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

//! The frozen content store and its query surface.
//!
//! Every query is pure and total: unknown ids give `None`, queries with no
//! matches give an empty `Vec`. Lists are returned in primary-store
//! (insertion) order.

use crate::builder::StoreBuilder;
use crate::indexes::SecondaryIndexes;
use crate::stats::StoreStats;
use crate::validation::DanglingReference;
use medatlas_core::{Category, ContentRecord, RecordSummary, Result, StoreConfig};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Immutable, indexed collection of records.
#[derive(Debug, Clone)]
pub struct ContentStore<R: ContentRecord> {
    config: StoreConfig,
    records: Vec<R>,
    positions: HashMap<String, usize>,
    indexes: SecondaryIndexes<R::Category>,
    dangling: Vec<DanglingReference>,
}

impl<R: ContentRecord> ContentStore<R> {
    /// Build a store from literal records.
    pub fn from_records<I>(records: I, config: StoreConfig) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
    {
        let mut builder = StoreBuilder::with_config(config);
        builder.extend(records)?;
        Ok(builder.build())
    }

    pub(crate) fn from_parts(
        config: StoreConfig,
        records: Vec<R>,
        positions: HashMap<String, usize>,
        indexes: SecondaryIndexes<R::Category>,
        dangling: Vec<DanglingReference>,
    ) -> Self {
        Self {
            config,
            records,
            positions,
            indexes,
            dangling,
        }
    }

    pub fn name(&self) -> &'static str {
        R::STORE
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.positions.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over each record's searchable fields.
    ///
    /// The fields are joined with a single space, so a query can match across
    /// a field boundary. An empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&R> {
        let needle = query.to_lowercase();
        self.indexes
            .haystacks
            .iter()
            .zip(&self.records)
            .filter(|(haystack, _)| haystack.contains(&needle))
            .map(|(_, record)| record)
            .collect()
    }

    /// Records whose category is in `categories`. An empty set matches nothing.
    pub fn filter_by_categories(&self, categories: &[R::Category]) -> Vec<&R> {
        if categories.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| categories.contains(&record.category()))
            .collect()
    }

    /// Search and category filter in one pass. `None` skips that condition.
    pub fn select(&self, query: Option<&str>, categories: Option<&[R::Category]>) -> Vec<&R> {
        let needle = query.map(str::to_lowercase);
        self.indexes
            .haystacks
            .iter()
            .zip(&self.records)
            .filter(|(haystack, record)| {
                needle.as_deref().map_or(true, |needle| haystack.contains(needle))
                    && categories.map_or(true, |set| set.contains(&record.category()))
            })
            .map(|(_, record)| record)
            .collect()
    }

    /// Distinct categories present in the store.
    pub fn categories(&self) -> BTreeSet<R::Category> {
        self.indexes.by_category.keys().copied().collect()
    }

    /// Record count per category. Categories with no records are omitted.
    pub fn count_by_category(&self) -> BTreeMap<R::Category, usize> {
        self.indexes
            .by_category
            .iter()
            .map(|(category, positions)| (*category, positions.len()))
            .collect()
    }

    pub fn by_category(&self, category: R::Category) -> Vec<&R> {
        self.resolve(self.indexes.by_category.get(&category))
    }

    /// Ids of the records in `category`.
    pub fn category_ids(&self, category: R::Category) -> Vec<&str> {
        self.by_category(category)
            .into_iter()
            .map(|record| record.id())
            .collect()
    }

    /// Case-insensitive exact match on the display, alternate or localized name.
    pub fn get_by_name(&self, name: &str) -> Option<&R> {
        self.indexes
            .by_name
            .get(&name.to_lowercase())
            .map(|&position| &self.records[position])
    }

    pub fn get_by_external_id(&self, external_id: &str) -> Option<&R> {
        self.indexes
            .by_external_id
            .get(external_id)
            .map(|&position| &self.records[position])
    }

    /// Records carrying `value` for facet `facet`, e.g. `("joint", "shoulder")`.
    pub fn by_facet(&self, facet: &str, value: &str) -> Vec<&R> {
        self.resolve(
            self.indexes
                .by_facet
                .get(facet)
                .and_then(|values| values.get(value)),
        )
    }

    /// Cross-referenced records that exist, in reference order, without repeats.
    pub fn related(&self, id: &str) -> Vec<&R> {
        let Some(record) = self.get(id) else {
            return Vec::new();
        };

        let mut seen = Vec::new();
        for reference in record.cross_references() {
            if let Some(&position) = self.positions.get(reference.target_id) {
                if !seen.contains(&position) {
                    seen.push(position);
                }
            }
        }
        seen.into_iter().map(|position| &self.records[position]).collect()
    }

    pub fn summaries(&self) -> Vec<RecordSummary> {
        self.records.iter().map(R::summary).collect()
    }

    /// Cross-references found missing at build time. Empty when validation is off.
    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.dangling
    }

    pub fn stats(&self) -> StoreStats {
        let by_category = self
            .count_by_category()
            .into_iter()
            .map(|(category, count)| (category.as_str().to_string(), count))
            .collect();

        let by_facet = self
            .indexes
            .by_facet
            .iter()
            .map(|(facet, values)| {
                let counts = values
                    .iter()
                    .map(|(value, positions)| (value.to_string(), positions.len()))
                    .collect();
                (facet.to_string(), counts)
            })
            .collect();

        StoreStats {
            store: R::STORE.to_string(),
            total: self.records.len(),
            by_category,
            by_facet,
            indexed_names: self.indexes.by_name.len(),
            dangling_references: self.dangling.len(),
        }
    }

    fn resolve(&self, positions: Option<&Vec<usize>>) -> Vec<&R> {
        positions
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medatlas_core::{AtlasError, OccupationalCategory, OccupationalMedicineEntry};

    fn entry(id: &str, category: OccupationalCategory, exposure: &str) -> OccupationalMedicineEntry {
        OccupationalMedicineEntry {
            id: id.to_string(),
            name: id.replace('_', " "),
            category,
            description: String::new(),
            exposure: exposure.to_string(),
            clinical_features: vec![],
            diagnosis: vec![],
            management: vec![],
            prevention: vec![],
            legal_aspects: vec![],
        }
    }

    fn store() -> ContentStore<OccupationalMedicineEntry> {
        ContentStore::from_records(
            [
                entry("silicosis", OccupationalCategory::Respiratory, "Quarrying"),
                entry("lead_poisoning", OccupationalCategory::ToxicExposure, "Battery recycling"),
                entry("asbestosis", OccupationalCategory::Respiratory, "Shipyards"),
            ],
            StoreConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_get_and_order() {
        let store = store();
        assert_eq!(store.get("lead_poisoning").unwrap().exposure, "Battery recycling");
        assert!(store.get("missing").is_none());
        let ids: Vec<&str> = store.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["silicosis", "lead_poisoning", "asbestosis"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let store = store();
        assert_eq!(store.search("SHIPYARDS").len(), 1);
        assert_eq!(store.search("").len(), 3);
        assert!(store.search("xyzzy").is_empty());
    }

    #[test]
    fn test_search_spans_field_boundary() {
        // name "silicosis" + " " + exposure "Quarrying"
        let store = store();
        assert_eq!(store.search("silicosis quarrying").len(), 1);
    }

    #[test]
    fn test_filter_and_counts() {
        let store = store();
        assert!(store.filter_by_categories(&[]).is_empty());

        let respiratory = store.filter_by_categories(&[OccupationalCategory::Respiratory]);
        assert_eq!(respiratory.len(), 2);

        let counts = store.count_by_category();
        assert_eq!(counts[&OccupationalCategory::Respiratory], 2);
        assert_eq!(counts[&OccupationalCategory::ToxicExposure], 1);
        assert!(!counts.contains_key(&OccupationalCategory::Regulatory));

        let categories: Vec<_> = store.categories().into_iter().collect();
        assert_eq!(
            categories,
            vec![OccupationalCategory::Respiratory, OccupationalCategory::ToxicExposure]
        );
    }

    #[test]
    fn test_select_combines_query_and_categories() {
        let store = store();
        let respiratory = [OccupationalCategory::Respiratory];

        let ids: Vec<&str> = store
            .select(Some("s"), Some(&respiratory))
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["silicosis", "asbestosis"]);
        assert_eq!(store.select(None, None).len(), 3);
        assert!(store.select(Some("battery"), Some(&respiratory)).is_empty());
        assert!(store.select(None, Some(&[])).is_empty());
    }

    #[test]
    fn test_get_by_name_ignores_case() {
        let store = store();
        assert_eq!(store.get_by_name("LEAD POISONING").unwrap().id, "lead_poisoning");
        assert!(store.get_by_name("lead").is_none());
    }

    #[test]
    fn test_stats() {
        let stats = store().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_category["respiratory"], 2);
        assert_eq!(stats.dangling_references, 0);
        assert_eq!(stats.store, "occupational");
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let result = ContentStore::from_records(
            [
                entry("silicosis", OccupationalCategory::Respiratory, ""),
                entry("silicosis", OccupationalCategory::Respiratory, ""),
            ],
            StoreConfig::strict(),
        );
        assert!(matches!(result, Err(AtlasError::DuplicateId { .. })));
    }

    #[test]
    fn test_contains_and_config() {
        let store = store();
        assert!(store.contains("asbestosis"));
        assert!(!store.contains("Asbestosis"));
        assert_eq!(store.config(), &StoreConfig::default());

        let permissive = ContentStore::from_records(
            [entry("silicosis", OccupationalCategory::Respiratory, "Quarrying")],
            StoreConfig::permissive(),
        )
        .unwrap();
        assert!(!permissive.config().validate_cross_references);
    }
}
