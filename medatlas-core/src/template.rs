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

//! Boilerplate muscle records from a handful of parameters.
//!
//! Only lowercasing and hyphen-to-space substitution are applied; the output
//! is fully determined by the input.

use crate::level::Explanations;
use crate::muscle::{BodySide, Joint, Muscle, MuscleGroup, MuscleRegion, MuscleShape};

/// Parameters for [`create_basic_muscle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicMuscleSpec<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub latin_name: &'a str,
    pub region: MuscleRegion,
    pub group: MuscleGroup,
    pub shape: MuscleShape,
    pub side: BodySide,
    pub fma_id: &'a str,
    /// Joint and movement pairs
    pub actions: &'a [(Joint, &'a str)],
}

/// Replace hyphens with spaces, e.g. `shoulder-girdle` -> `shoulder girdle`
pub fn humanize(slug: &str) -> String {
    slug.replace('-', " ")
}

pub fn create_basic_muscle(spec: &BasicMuscleSpec<'_>) -> Muscle {
    let name = spec.name.to_lowercase();
    let region = humanize(spec.region.as_str());
    let group = humanize(spec.group.as_str());
    let shape = spec.shape.as_str();

    let explanations = Explanations {
        level1: Some(format!(
            "The {name} is a muscle in your body that helps you move and hold your posture."
        )),
        level2: Some(format!(
            "The {name} ({}) is a {shape} muscle in the {region} region.",
            spec.latin_name
        )),
        level3: Some(format!(
            "The {name} belongs to the {group} group and is located in the {region}."
        )),
        level4: Some(format!(
            "The {name} ({}, {}) has a {shape} fiber arrangement that sets its balance of force and range.",
            spec.latin_name, spec.fma_id
        )),
        level5: Some(format!(
            "Clinical considerations for the {name} include strains, tendinopathy and nerve injuries relevant to its anatomical location."
        )),
    };

    let paired_fact = if spec.side == BodySide::Midline {
        "Unpaired midline muscle"
    } else {
        "Exists as a pair (left and right)"
    };

    let mut muscle = Muscle::new(spec.id, spec.name, spec.region, spec.group, spec.shape, spec.side)
        .latin(spec.latin_name)
        .fma(spec.fma_id)
        .location(format!("Part of the {region}"))
        .explanations(explanations)
        .key_facts(&[
            &format!("Classified as a {shape} muscle"),
            &format!("Part of the {group} group"),
            &format!("Located in the {region}"),
            paired_fact,
        ]);
    for (joint, movement) in spec.actions {
        muscle = muscle.action(*joint, movement);
    }
    muscle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::ComplexityLevel;

    fn teres_minor() -> BasicMuscleSpec<'static> {
        BasicMuscleSpec {
            id: "teres-minor-left",
            name: "Left Teres Minor",
            latin_name: "Musculus teres minor",
            region: MuscleRegion::ShoulderGirdle,
            group: MuscleGroup::RotatorCuff,
            shape: MuscleShape::Fusiform,
            side: BodySide::Left,
            fma_id: "FMA:32549",
            actions: &[(Joint::Shoulder, "External rotation")],
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("shoulder-girdle"), "shoulder girdle");
        assert_eq!(humanize("arm"), "arm");
    }

    #[test]
    fn test_basic_muscle_boilerplate() {
        let muscle = create_basic_muscle(&teres_minor());

        assert_eq!(muscle.location, "Part of the shoulder girdle");
        assert_eq!(muscle.fma_id.as_deref(), Some("FMA:32549"));
        assert!(muscle.paired);
        assert_eq!(
            muscle.key_facts,
            vec![
                "Classified as a fusiform muscle",
                "Part of the rotator cuff group",
                "Located in the shoulder girdle",
                "Exists as a pair (left and right)",
            ]
        );
        assert_eq!(muscle.joints(), vec![Joint::Shoulder]);

        let level2 = muscle.explanations.resolve(ComplexityLevel::new(2).unwrap());
        assert_eq!(
            level2,
            "The left teres minor (Musculus teres minor) is a fusiform muscle in the shoulder girdle region."
        );
    }

    #[test]
    fn test_midline_fact() {
        let spec = BasicMuscleSpec {
            side: BodySide::Midline,
            ..teres_minor()
        };
        let muscle = create_basic_muscle(&spec);
        assert!(!muscle.paired);
        assert_eq!(muscle.key_facts[3], "Unpaired midline muscle");
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(create_basic_muscle(&teres_minor()), create_basic_muscle(&teres_minor()));
    }
}
