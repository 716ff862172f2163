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

//! End-to-end scenarios over the authored stores.

use medatlas_content::{
    create_muscular_store, create_occupational_store, create_safety_topic_store, Catalog,
    StoreKind,
};
use medatlas_core::{
    AtlasError, ComplexityLevel, ContentRecord, DuplicatePolicy, MuscleRegion,
    OccupationalCategory, StoreConfig, NO_EXPLANATION,
};
use medatlas_index::StoreBuilder;
use proptest::prelude::*;

fn ids<'a, R>(records: impl IntoIterator<Item = &'a R>) -> Vec<&'a str>
where
    R: ContentRecord + 'a,
{
    records.into_iter().map(|r| r.id()).collect()
}

/// Sided muscles carry their side in name and id
#[test]
fn test_deltoid_left_lookup() {
    let store = create_muscular_store().unwrap();
    let deltoid = store.get("deltoid-left").unwrap();
    assert_eq!(deltoid.name, "Left Deltoid");
    assert_eq!(deltoid.region, MuscleRegion::ShoulderGirdle);
}

/// The shoulder girdle filter returns both deltoids and the rotator cuff
#[test]
fn test_shoulder_girdle_filter() {
    let store = create_muscular_store().unwrap();
    let found = store.filter_by_categories(&[MuscleRegion::ShoulderGirdle]);
    let found = ids(found);

    for id in [
        "deltoid-left",
        "deltoid-right",
        "supraspinatus-left",
        "infraspinatus-right",
        "teres-minor-left",
        "subscapularis-right",
    ] {
        assert!(found.contains(&id), "missing {id}");
    }
    assert!(!found.contains(&"biceps-brachii-left"));
}

/// Search reaches exposure text, not just names
#[test]
fn test_search_exposure_text() {
    let store = create_occupational_store().unwrap();
    let found = ids(store.search("organophosphate"));

    assert!(found.contains(&"occupational_asthma"));
    assert!(found.contains(&"chemical_burn"));
    assert!(!found.contains(&"lead_poisoning"));

    assert_eq!(ids(store.search("ORGANOPHOSPHATE")), found);
}

#[test]
fn test_respiratory_count() {
    let store = create_occupational_store().unwrap();
    let counts = store.count_by_category();
    assert_eq!(counts.get(&OccupationalCategory::Respiratory), Some(&7));
    assert_eq!(
        store.filter_by_categories(&[OccupationalCategory::Respiratory]).len(),
        7
    );
}

/// Missing ids are absent, never an error
#[test]
fn test_unknown_id_everywhere() {
    let catalog = Catalog::load(&StoreConfig::default()).unwrap();
    for kind in StoreKind::ALL {
        let view = catalog.view(kind);
        assert!(view.get("nonexistent-id").unwrap().is_none());
        assert!(view.related("nonexistent-id").is_empty());
    }
    assert!(catalog.muscular.get("nonexistent-id").is_none());
    assert!(catalog.occupational.get("nonexistent-id").is_none());
    assert!(catalog.topics.get("nonexistent-id").is_none());
}

#[test]
fn test_every_occupational_category_present() {
    let store = create_occupational_store().unwrap();
    let categories: Vec<OccupationalCategory> = store.categories().into_iter().collect();
    assert_eq!(categories, OccupationalCategory::ALL.to_vec());
}

/// Rebuilding from an existing store's records with a duplicate fails
#[test]
fn test_duplicate_rejected_and_overwritten() {
    let store = create_occupational_store().unwrap();
    let mut records = store.all().to_vec();
    let mut duplicate = records[0].clone();
    duplicate.name = "Replacement".to_string();
    records.push(duplicate);

    let mut builder = StoreBuilder::new();
    let err = builder.extend(records.clone()).unwrap_err();
    assert!(matches!(err, AtlasError::DuplicateId { .. }));

    let mut builder = StoreBuilder::with_config(StoreConfig {
        duplicate_policy: DuplicatePolicy::Overwrite,
        ..StoreConfig::default()
    });
    builder.extend(records).unwrap();
    let rebuilt = builder.build();
    assert_eq!(rebuilt.len(), store.len());
    assert_eq!(rebuilt.all()[0].name, "Replacement");
}

/// Building twice yields identical query results
#[test]
fn test_construction_is_deterministic() {
    let a = create_muscular_store().unwrap();
    let b = create_muscular_store().unwrap();
    assert_eq!(ids(a.all()), ids(b.all()));
    assert_eq!(ids(a.search("flex")), ids(b.search("flex")));
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn test_name_lookup_is_case_insensitive() {
    let store = create_muscular_store().unwrap();
    assert_eq!(store.get_by_name("LEFT DELTOID").unwrap().id, "deltoid-left");
    assert_eq!(store.get_by_name("diafragma").unwrap().id, "diaphragm");

    let topics = create_safety_topic_store().unwrap();
    assert_eq!(
        topics.get_by_name("workers' comp").unwrap().id,
        "topic-workers-compensation-basics"
    );
}

proptest! {
    /// Explanations resolve to the highest authored level at or below the request
    #[test]
    fn prop_explanation_fallback(index in 0usize..79, level in 1u8..=5) {
        let store = create_muscular_store().unwrap();
        let muscle = &store.all()[index % store.len()];
        let level = ComplexityLevel::new(level).unwrap();

        let expected = level
            .descending()
            .find_map(|l| muscle.explanations.at(l))
            .unwrap_or(NO_EXPLANATION);
        prop_assert_eq!(store.explanation(&muscle.id, level), expected);
    }

    /// Every name and alternate name finds a record
    #[test]
    fn prop_names_resolve(index in 0usize..27) {
        let store = create_occupational_store().unwrap();
        let entry = &store.all()[index % store.len()];
        prop_assert!(store.get_by_name(&entry.name.to_uppercase()).is_some());
    }
}
