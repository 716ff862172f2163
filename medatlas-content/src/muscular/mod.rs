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

//! Muscular system store.
//!
//! Typed lookups by region, group, shape and joint on top of the generic
//! [`ContentStore`], plus leveled explanations.

mod data;

use medatlas_core::{
    ComplexityLevel, Joint, Muscle, MuscleGroup, MuscleRegion, MuscleShape, Result, StoreConfig,
    NO_EXPLANATION,
};
use medatlas_index::ContentStore;
use std::ops::Deref;

/// The muscular store. Derefs to the generic query surface.
#[derive(Debug, Clone)]
pub struct MuscularStore {
    store: ContentStore<Muscle>,
}

impl MuscularStore {
    pub fn inner(&self) -> &ContentStore<Muscle> {
        &self.store
    }

    pub fn by_region(&self, region: MuscleRegion) -> Vec<&Muscle> {
        self.store.by_category(region)
    }

    pub fn by_group(&self, group: MuscleGroup) -> Vec<&Muscle> {
        self.store.by_facet("group", group.as_str())
    }

    pub fn by_shape(&self, shape: MuscleShape) -> Vec<&Muscle> {
        self.store.by_facet("shape", shape.as_str())
    }

    /// Muscles with at least one action at `joint`
    pub fn by_joint(&self, joint: Joint) -> Vec<&Muscle> {
        self.store.by_facet("joint", joint.as_str())
    }

    pub fn get_by_fma_id(&self, fma_id: &str) -> Option<&Muscle> {
        self.store.get_by_external_id(fma_id)
    }

    /// Explanation at `level`, falling back to the nearest lower authored level.
    ///
    /// Unknown ids get the same fixed text as a muscle with no explanations.
    pub fn explanation(&self, id: &str, level: ComplexityLevel) -> &str {
        self.store
            .get(id)
            .map(|muscle| muscle.explanations.resolve(level))
            .unwrap_or(NO_EXPLANATION)
    }

    /// Related and relationship muscles that exist in the store
    pub fn related_muscles(&self, id: &str) -> Vec<&Muscle> {
        self.store.related(id)
    }
}

impl Deref for MuscularStore {
    type Target = ContentStore<Muscle>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Build the muscular store with the default configuration.
pub fn create_muscular_store() -> Result<MuscularStore> {
    create_muscular_store_with_config(StoreConfig::default())
}

pub fn create_muscular_store_with_config(config: StoreConfig) -> Result<MuscularStore> {
    let store = ContentStore::from_records(data::muscles(), config)?;
    Ok(MuscularStore { store })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MuscularStore {
        create_muscular_store().unwrap()
    }

    #[test]
    fn test_no_dangling_references() {
        assert!(store().dangling_references().is_empty());
    }

    #[test]
    fn test_every_region_present() {
        assert_eq!(store().categories().len(), MuscleRegion::ALL.len());
    }

    #[test]
    fn test_by_joint_includes_multi_joint_muscles() {
        let store = store();
        let knee: Vec<&str> = store.by_joint(Joint::Knee).iter().map(|m| m.id.as_str()).collect();
        assert!(knee.contains(&"gastrocnemius-left"));
        assert!(knee.contains(&"rectus-femoris-right"));
        assert!(!knee.contains(&"soleus-left"));
    }

    #[test]
    fn test_by_group_and_shape() {
        let store = store();
        assert_eq!(store.by_group(MuscleGroup::RotatorCuff).len(), 8);
        assert!(store
            .by_shape(MuscleShape::Circular)
            .iter()
            .all(|m| m.id.starts_with("orbicularis-oculi")));
    }

    #[test]
    fn test_get_by_fma_id() {
        let store = store();
        assert_eq!(store.get_by_fma_id("FMA:13295").unwrap().id, "diaphragm");
        assert!(store.get_by_fma_id("FMA:0").is_none());
    }

    #[test]
    fn test_explanation_fallback() {
        let store = store();
        let level = |n| ComplexityLevel::new(n).unwrap();

        // deltoid has no level 4 text
        assert_eq!(
            store.explanation("deltoid-left", level(4)),
            store.explanation("deltoid-left", level(3))
        );
        // supraspinatus has no level 2 text
        assert!(store
            .explanation("supraspinatus-right", level(2))
            .starts_with("The supraspinatus is a small muscle"));
        assert_eq!(store.explanation("nonexistent-id", level(1)), NO_EXPLANATION);
    }

    #[test]
    fn test_related_muscles() {
        let store = store();
        let related: Vec<&str> = store
            .related_muscles("biceps-brachii-left")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(
            related,
            vec!["triceps-brachii-left", "brachialis-left", "brachioradialis-left"]
        );
    }
}
