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

//! Integration tests for the generic content store

use medatlas_core::{
    BodySide, Joint, Muscle, MuscleGroup, MuscleRegion, MuscleShape, RelationshipKind,
    StoreConfig,
};
use medatlas_index::{ContentStore, DanglingReference, StoreBuilder};

fn rotator_cuff_fixture() -> Vec<Muscle> {
    vec![
        Muscle::new(
            "supraspinatus-left",
            "Left Supraspinatus",
            MuscleRegion::ShoulderGirdle,
            MuscleGroup::RotatorCuff,
            MuscleShape::Fusiform,
            BodySide::Left,
        )
        .latin("Musculus supraspinatus")
        .localized("Supraespinoso izquierdo")
        .fma("FMA:9629")
        .action(Joint::Shoulder, "Abduction (first 15 degrees)")
        .relationship("deltoid-left", "Left Deltoid", RelationshipKind::Synergist)
        .related(&["infraspinatus-left", "trapezius-left"]),
        Muscle::new(
            "infraspinatus-left",
            "Left Infraspinatus",
            MuscleRegion::ShoulderGirdle,
            MuscleGroup::RotatorCuff,
            MuscleShape::Multipennate,
            BodySide::Left,
        )
        .latin("Musculus infraspinatus")
        .action(Joint::Shoulder, "External rotation"),
        Muscle::new(
            "deltoid-left",
            "Left Deltoid",
            MuscleRegion::ShoulderGirdle,
            MuscleGroup::ShoulderPrimeMovers,
            MuscleShape::Multipennate,
            BodySide::Left,
        )
        .action(Joint::Shoulder, "Abduction"),
        Muscle::new(
            "biceps-brachii-left",
            "Left Biceps Brachii",
            MuscleRegion::Arm,
            MuscleGroup::ElbowFlexors,
            MuscleShape::Fusiform,
            BodySide::Left,
        )
        .action(Joint::Elbow, "Flexion")
        .action(Joint::Radioulnar, "Supination")
        .action(Joint::Shoulder, "Flexion"),
    ]
}

/// Test that name lookups resolve display, Latin and localized names
#[test]
fn test_name_index_resolves_alternate_names() {
    let store = ContentStore::from_records(rotator_cuff_fixture(), StoreConfig::default()).unwrap();

    assert_eq!(store.get_by_name("left supraspinatus").unwrap().id, "supraspinatus-left");
    assert_eq!(store.get_by_name("MUSCULUS SUPRASPINATUS").unwrap().id, "supraspinatus-left");
    assert_eq!(store.get_by_name("Supraespinoso izquierdo").unwrap().id, "supraspinatus-left");
    assert_eq!(store.get_by_external_id("FMA:9629").unwrap().id, "supraspinatus-left");
    assert!(store.get_by_external_id("FMA:0").is_none());
}

/// Test facet lookup for a muscle acting on several joints
#[test]
fn test_facet_lookup() {
    let store = ContentStore::from_records(rotator_cuff_fixture(), StoreConfig::default()).unwrap();

    let shoulder: Vec<&str> = store
        .by_facet("joint", "shoulder")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(
        shoulder,
        vec!["supraspinatus-left", "infraspinatus-left", "deltoid-left", "biceps-brachii-left"]
    );
    assert_eq!(store.by_facet("group", "rotator-cuff").len(), 2);
    assert!(store.by_facet("joint", "knee").is_empty());
    assert!(store.by_facet("colour", "red").is_empty());
}

/// Test that dangling references are reported without failing the build
#[test]
fn test_dangling_references_reported() {
    let store = ContentStore::from_records(rotator_cuff_fixture(), StoreConfig::default()).unwrap();

    assert_eq!(
        store.dangling_references(),
        &[DanglingReference {
            source_id: "supraspinatus-left".to_string(),
            target_id: "trapezius-left".to_string(),
            label: None,
        }]
    );
    assert_eq!(store.stats().dangling_references, 1);
}

/// Test that disabling validation skips the report
#[test]
fn test_validation_disabled() {
    let config = StoreConfig {
        validate_cross_references: false,
        ..StoreConfig::default()
    };
    let store = ContentStore::from_records(rotator_cuff_fixture(), config).unwrap();
    assert!(store.dangling_references().is_empty());
}

/// Test that related() resolves existing targets only
#[test]
fn test_related_skips_missing_targets() {
    let store = ContentStore::from_records(rotator_cuff_fixture(), StoreConfig::default()).unwrap();

    let related: Vec<&str> = store
        .related("supraspinatus-left")
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(related, vec!["deltoid-left", "infraspinatus-left"]);
    assert!(store.related("missing").is_empty());
}

/// Test category index against the filter surface
#[test]
fn test_by_category_matches_filter() {
    let store = ContentStore::from_records(rotator_cuff_fixture(), StoreConfig::default()).unwrap();

    for region in store.categories() {
        let via_index: Vec<&str> = store.category_ids(region);
        let via_filter: Vec<&str> = store
            .filter_by_categories(&[region])
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(via_index, via_filter);
    }
}

/// Test that stats aggregate categories and facets
#[test]
fn test_stats() {
    let store = ContentStore::from_records(rotator_cuff_fixture(), StoreConfig::default()).unwrap();
    let stats = store.stats();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.by_category["shoulder-girdle"], 3);
    assert_eq!(stats.by_category["arm"], 1);
    assert_eq!(stats.by_facet["joint"]["shoulder"], 4);
    assert_eq!(stats.by_facet["side"]["left"], 4);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["byCategory"]["arm"], 1);
}

/// Test building incrementally with the builder
#[test]
fn test_builder_incremental() {
    let mut builder = StoreBuilder::new();
    for muscle in rotator_cuff_fixture() {
        builder.insert(muscle).unwrap();
    }
    assert_eq!(builder.len(), 4);

    let store = builder.build();
    assert_eq!(store.summaries()[3].category, "arm");
    assert_eq!(store.name(), "muscular");
}
