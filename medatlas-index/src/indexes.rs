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

//! Secondary indexes derived from the primary store.
//!
//! Every index holds positions into the primary record vector, so a lookup
//! never clones a record. Lists keep primary-store order.

use medatlas_core::ContentRecord;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// facet name -> facet value -> positions
pub type FacetIndex = BTreeMap<&'static str, BTreeMap<&'static str, Vec<usize>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryIndexes<C> {
    /// Primary category -> positions
    pub by_category: BTreeMap<C, Vec<usize>>,
    /// Lowercased display, alternate and localized names -> position
    pub by_name: HashMap<String, usize>,
    /// External identifier -> position
    pub by_external_id: HashMap<String, usize>,
    pub by_facet: FacetIndex,
    /// Lowercased search haystack per position
    pub haystacks: Vec<String>,
}

impl<C: medatlas_core::Category> SecondaryIndexes<C> {
    /// One pass over `records`. The same input always yields the same indexes.
    pub fn build<R>(records: &[R]) -> Self
    where
        R: ContentRecord<Category = C>,
    {
        let mut by_category: BTreeMap<C, Vec<usize>> = BTreeMap::new();
        let mut by_name = HashMap::new();
        let mut by_external_id = HashMap::new();
        let mut by_facet = FacetIndex::new();
        let mut haystacks = Vec::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            by_category.entry(record.category()).or_default().push(position);

            let names = std::iter::once(record.name()).chain(record.alternate_names());
            for name in names {
                let key = name.to_lowercase();
                if let Some(previous) = by_name.insert(key, position) {
                    if previous != position {
                        debug!(
                            store = R::STORE,
                            record_name = name,
                            previous = records[previous].id(),
                            current = record.id(),
                            "Name collision, keeping latest record"
                        );
                    }
                }
            }

            if let Some(external_id) = record.external_id() {
                by_external_id.insert(external_id.to_string(), position);
            }

            for facet in record.facets() {
                let positions = by_facet
                    .entry(facet.name)
                    .or_default()
                    .entry(facet.value)
                    .or_default();
                // a record may repeat one facet value, e.g. two movements at one joint
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }

            haystacks.push(record.haystack());
        }

        Self {
            by_category,
            by_name,
            by_external_id,
            by_facet,
            haystacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medatlas_core::{
        create_basic_muscle, BasicMuscleSpec, BodySide, Joint, Muscle, MuscleGroup,
        MuscleRegion, MuscleShape,
    };

    fn muscle(id: &'static str, name: &'static str, region: MuscleRegion, fma: &'static str) -> Muscle {
        create_basic_muscle(&BasicMuscleSpec {
            id,
            name,
            latin_name: "Musculus deltoideus",
            region,
            group: MuscleGroup::ShoulderPrimeMovers,
            shape: MuscleShape::Multipennate,
            side: BodySide::Left,
            fma_id: fma,
            actions: &[
                (Joint::Shoulder, "Abduction"),
                (Joint::Shoulder, "Flexion"),
            ],
        })
    }

    #[test]
    fn test_build_indexes() {
        let records = vec![
            muscle("deltoid-left", "Left Deltoid", MuscleRegion::ShoulderGirdle, "FMA:32521"),
            muscle("deltoid-right", "Right Deltoid", MuscleRegion::ShoulderGirdle, "FMA:32522"),
        ];
        let indexes = SecondaryIndexes::build(&records);

        assert_eq!(indexes.by_category[&MuscleRegion::ShoulderGirdle], vec![0, 1]);
        assert_eq!(indexes.by_name["left deltoid"], 0);
        assert_eq!(indexes.by_external_id["FMA:32522"], 1);
        assert_eq!(indexes.by_facet["joint"]["shoulder"], vec![0, 1]);
        assert_eq!(indexes.haystacks.len(), 2);
    }

    #[test]
    fn test_name_collision_keeps_latest() {
        let records = vec![
            muscle("deltoid-left", "Left Deltoid", MuscleRegion::ShoulderGirdle, "FMA:1"),
            muscle("deltoid-right", "Right Deltoid", MuscleRegion::ShoulderGirdle, "FMA:2"),
        ];
        let indexes = SecondaryIndexes::build(&records);

        // both share the Latin name
        assert_eq!(indexes.by_name["musculus deltoideus"], 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let records = vec![
            muscle("deltoid-left", "Left Deltoid", MuscleRegion::ShoulderGirdle, "FMA:1"),
            muscle("biceps-left", "Left Biceps", MuscleRegion::Arm, "FMA:2"),
        ];
        assert_eq!(SecondaryIndexes::build(&records), SecondaryIndexes::build(&records));
    }
}
