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

//! Cross-reference validation.

use medatlas_core::ContentRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cross-reference whose target id is not in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    pub source_id: String,
    pub target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Every cross-reference in `records` that misses `positions`, in record order
pub fn find_dangling<R: ContentRecord>(
    records: &[R],
    positions: &HashMap<String, usize>,
) -> Vec<DanglingReference> {
    records
        .iter()
        .flat_map(|record| {
            record
                .cross_references()
                .into_iter()
                .filter(|reference| !positions.contains_key(reference.target_id))
                .map(|reference| DanglingReference {
                    source_id: record.id().to_string(),
                    target_id: reference.target_id.to_string(),
                    label: reference.label.map(str::to_string),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use medatlas_core::{
        BodySide, Muscle, MuscleGroup, MuscleRegion, MuscleShape, RelationshipKind,
    };

    #[test]
    fn test_reports_only_missing_targets() {
        let supraspinatus = Muscle::new(
            "supraspinatus-left",
            "Left Supraspinatus",
            MuscleRegion::ShoulderGirdle,
            MuscleGroup::RotatorCuff,
            MuscleShape::Fusiform,
            BodySide::Left,
        )
        .relationship("deltoid-left", "Left Deltoid", RelationshipKind::Synergist)
        .related(&["trapezius-left"]);
        let deltoid = Muscle::new(
            "deltoid-left",
            "Left Deltoid",
            MuscleRegion::ShoulderGirdle,
            MuscleGroup::ShoulderPrimeMovers,
            MuscleShape::Multipennate,
            BodySide::Left,
        );

        let records = vec![supraspinatus, deltoid];
        let positions: HashMap<String, usize> = records
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();

        let dangling = find_dangling(&records, &positions);
        assert_eq!(
            dangling,
            vec![DanglingReference {
                source_id: "supraspinatus-left".into(),
                target_id: "trapezius-left".into(),
                label: None,
            }]
        );
    }
}
