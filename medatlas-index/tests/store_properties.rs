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

//! Property-based tests for the store query surface.
//! Checks the lookup, search and filter invariants over generated record sets.

use medatlas_core::{
    Category, ContentRecord, OccupationalCategory, OccupationalMedicineEntry, StoreConfig,
};
use medatlas_index::ContentStore;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn entry(index: usize, category: OccupationalCategory, text: String) -> OccupationalMedicineEntry {
    OccupationalMedicineEntry {
        id: format!("entry-{index}"),
        name: format!("Entry {index}"),
        category,
        description: text,
        exposure: String::new(),
        clinical_features: vec![],
        diagnosis: vec![],
        management: vec![],
        prevention: vec![],
        legal_aspects: vec![],
    }
}

fn category() -> impl Strategy<Value = OccupationalCategory> {
    prop::sample::select(OccupationalCategory::ALL)
}

fn records() -> impl Strategy<Value = Vec<OccupationalMedicineEntry>> {
    prop::collection::vec((category(), "[A-Za-z ]{0,24}"), 0..24).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (category, text))| entry(i, category, text))
            .collect()
    })
}

/// Records with generated names and descriptions; never empty.
fn named_records() -> impl Strategy<Value = Vec<OccupationalMedicineEntry>> {
    prop::collection::vec(
        (category(), "[A-Za-z][A-Za-z ]{0,20}", "[A-Za-z ]{0,24}"),
        1..16,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (category, name, text))| OccupationalMedicineEntry {
                name,
                ..entry(i, category, text)
            })
            .collect()
    })
}

fn build(records: Vec<OccupationalMedicineEntry>) -> ContentStore<OccupationalMedicineEntry> {
    ContentStore::from_records(records, StoreConfig::default()).unwrap()
}

proptest! {
    /// Every stored record is found again by its own id.
    #[test]
    fn get_round_trips_every_id(records in records()) {
        let store = build(records);
        for record in store.all() {
            prop_assert_eq!(store.get(&record.id).map(|r| r.id.as_str()), Some(record.id.as_str()));
        }
    }

    /// Search ignores the case of the query.
    #[test]
    fn search_is_case_insensitive(records in records(), query in "[A-Za-z]{0,4}") {
        let store = build(records);
        let lower: Vec<&str> = store.search(&query.to_lowercase()).iter().map(|r| r.id()).collect();
        let upper: Vec<&str> = store.search(&query.to_uppercase()).iter().map(|r| r.id()).collect();
        prop_assert_eq!(lower, upper);
    }

    /// Search returns exactly the records whose id, name, description or
    /// exposure contains the query, ignoring case.
    #[test]
    fn search_matches_substring_containment(records in named_records(), query in "[a-z ]{0,3}") {
        let store = build(records);
        let expected: Vec<&str> = store
            .all()
            .iter()
            .filter(|r| {
                [r.id.as_str(), r.name.as_str(), r.description.as_str(), r.exposure.as_str()]
                    .join(" ")
                    .to_lowercase()
                    .contains(&query)
            })
            .map(|r| r.id.as_str())
            .collect();
        let found: Vec<&str> = store.search(&query).iter().map(|r| r.id()).collect();
        prop_assert_eq!(found, expected);
    }

    /// Any contiguous piece of a record's name finds that record, in either case.
    #[test]
    fn search_finds_every_name_substring(
        records in named_records(),
        pick in any::<prop::sample::Index>(),
        start in any::<prop::sample::Index>(),
        len in 0usize..24,
    ) {
        let store = build(records);
        let record = pick.get(store.all());
        let chars: Vec<char> = record.name().chars().collect();
        let start = start.index(chars.len());
        let end = (start + len).min(chars.len());
        let slice: String = chars[start..end].iter().collect();

        for query in [slice.clone(), slice.to_uppercase()] {
            let found = store.search(&query);
            prop_assert!(
                found.iter().any(|r| r.id() == record.id()),
                "{:?} not found by {:?}",
                record.id(),
                query
            );
        }
    }

    /// Filtering by one category yields as many records as the count reports.
    #[test]
    fn filter_agrees_with_counts(records in records()) {
        let store = build(records);
        let counts = store.count_by_category();
        for category in OccupationalCategory::all() {
            let filtered = store.filter_by_categories(&[*category]).len();
            prop_assert_eq!(filtered, counts.get(category).copied().unwrap_or(0));
        }
        prop_assert_eq!(counts.values().sum::<usize>(), store.len());
    }

    /// Filtering by every present category returns the whole store.
    #[test]
    fn filter_by_all_present_categories(records in records()) {
        let store = build(records);
        let present: Vec<OccupationalCategory> = store.categories().into_iter().collect();
        prop_assert_eq!(store.filter_by_categories(&present).len(), store.len());
        prop_assert!(store.filter_by_categories(&[]).is_empty());
    }

    /// Building twice from the same literals gives the same observable store.
    #[test]
    fn construction_is_idempotent(records in records()) {
        let first = build(records.clone());
        let second = build(records);
        prop_assert_eq!(first.all(), second.all());
        prop_assert_eq!(first.count_by_category(), second.count_by_category());
        let first_categories: BTreeSet<_> = first.categories();
        prop_assert_eq!(first_categories, second.categories());
        prop_assert_eq!(first.stats(), second.stats());
    }
}
