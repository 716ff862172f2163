// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Muscle records
//!
//! A muscle has exactly one region (its primary category) but may act on
//! several joints, so it appears under many `joint` facet values.

use crate::level::{ComplexityLevel, Explanations};
use crate::record::{ContentRecord, CrossReference, Facet};
use serde::{Deserialize, Serialize};

category_enum! {
    /// Anatomical region, the primary category of the muscular store
    pub enum MuscleRegion ("muscle region") {
        HeadFace => "head-face",
        Neck => "neck",
        ShoulderGirdle => "shoulder-girdle",
        Arm => "arm",
        Forearm => "forearm",
        Hand => "hand",
        Thorax => "thorax",
        Abdomen => "abdomen",
        Back => "back",
        PelvisHip => "pelvis-hip",
        Thigh => "thigh",
        Leg => "leg",
        Foot => "foot",
    }
}

category_enum! {
    /// Functional group
    pub enum MuscleGroup ("muscle group") {
        Mastication => "mastication",
        FacialExpression => "facial-expression",
        Cervical => "cervical",
        RotatorCuff => "rotator-cuff",
        ScapularStabilizers => "scapular-stabilizers",
        ShoulderPrimeMovers => "shoulder-prime-movers",
        ElbowFlexors => "elbow-flexors",
        ElbowExtensors => "elbow-extensors",
        ForearmFlexors => "forearm-flexors",
        ForearmExtensors => "forearm-extensors",
        IntrinsicHand => "intrinsic-hand",
        Respiratory => "respiratory",
        AbdominalWall => "abdominal-wall",
        DeepBack => "deep-back",
        Gluteal => "gluteal",
        HipFlexors => "hip-flexors",
        Quadriceps => "quadriceps",
        Hamstrings => "hamstrings",
        Adductors => "adductors",
        Calf => "calf",
        AnteriorLeg => "anterior-leg",
        IntrinsicFoot => "intrinsic-foot",
    }
}

category_enum! {
    /// Fascicle architecture
    pub enum MuscleShape ("muscle shape") {
        Fusiform => "fusiform",
        Unipennate => "unipennate",
        Bipennate => "bipennate",
        Multipennate => "multipennate",
        Convergent => "convergent",
        Parallel => "parallel",
        Circular => "circular",
        Quadrate => "quadrate",
        Flat => "flat",
    }
}

category_enum! {
    pub enum BodySide ("body side") {
        Left => "left",
        Right => "right",
        Midline => "midline",
    }
}

category_enum! {
    /// Joint a muscle acts on
    pub enum Joint ("joint") {
        Temporomandibular => "temporomandibular",
        CervicalSpine => "cervical-spine",
        Scapulothoracic => "scapulothoracic",
        Shoulder => "shoulder",
        Elbow => "elbow",
        Radioulnar => "radioulnar",
        Wrist => "wrist",
        Fingers => "fingers",
        Thumb => "thumb",
        ThoracicCage => "thoracic-cage",
        ThoracolumbarSpine => "thoracolumbar-spine",
        Hip => "hip",
        Knee => "knee",
        Ankle => "ankle",
        Subtalar => "subtalar",
        Toes => "toes",
    }
}

/// Functional relation between two muscles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    Synergist,
    Antagonist,
    Stabilizer,
}

/// Origin or insertion site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Bone or structure, e.g. "Scapula"
    pub structure: String,
    /// Where on the structure, e.g. "supraspinous fossa"
    pub description: String,
}

/// One movement at one joint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointAction {
    pub joint: Joint,
    pub movement: String,
}

/// Weak reference to another muscle, with a denormalized label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleRelationship {
    pub muscle_id: String,
    pub label: String,
    pub kind: RelationshipKind,
}

/// A skeletal muscle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Muscle {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    /// Spanish display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    /// Foundational Model of Anatomy identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fma_id: Option<String>,
    pub region: MuscleRegion,
    pub group: MuscleGroup,
    pub shape: MuscleShape,
    pub side: BodySide,
    pub paired: bool,
    pub location: String,
    pub origin: Vec<Attachment>,
    pub insertion: Vec<Attachment>,
    pub actions: Vec<JointAction>,
    pub innervation: Vec<String>,
    pub blood_supply: Vec<String>,
    pub explanations: Explanations,
    pub key_facts: Vec<String>,
    pub clinical_relevance: Vec<String>,
    pub relationships: Vec<MuscleRelationship>,
    pub related_muscles: Vec<String>,
}

impl Muscle {
    /// Start a muscle record; `paired` follows from `side`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region: MuscleRegion,
        group: MuscleGroup,
        shape: MuscleShape,
        side: BodySide,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latin_name: None,
            localized_name: None,
            fma_id: None,
            region,
            group,
            shape,
            side,
            paired: side != BodySide::Midline,
            location: String::new(),
            origin: Vec::new(),
            insertion: Vec::new(),
            actions: Vec::new(),
            innervation: Vec::new(),
            blood_supply: Vec::new(),
            explanations: Explanations::default(),
            key_facts: Vec::new(),
            clinical_relevance: Vec::new(),
            relationships: Vec::new(),
            related_muscles: Vec::new(),
        }
    }

    pub fn latin(mut self, latin_name: impl Into<String>) -> Self {
        self.latin_name = Some(latin_name.into());
        self
    }

    pub fn localized(mut self, localized_name: impl Into<String>) -> Self {
        self.localized_name = Some(localized_name.into());
        self
    }

    pub fn fma(mut self, fma_id: impl Into<String>) -> Self {
        self.fma_id = Some(fma_id.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Add an origin site
    pub fn origin(mut self, structure: &str, description: &str) -> Self {
        self.origin.push(Attachment {
            structure: structure.to_string(),
            description: description.to_string(),
        });
        self
    }

    /// Add an insertion site
    pub fn insertion(mut self, structure: &str, description: &str) -> Self {
        self.insertion.push(Attachment {
            structure: structure.to_string(),
            description: description.to_string(),
        });
        self
    }

    pub fn action(mut self, joint: Joint, movement: &str) -> Self {
        self.actions.push(JointAction {
            joint,
            movement: movement.to_string(),
        });
        self
    }

    pub fn innervation(mut self, nerves: &[&str]) -> Self {
        self.innervation = to_strings(nerves);
        self
    }

    pub fn blood_supply(mut self, vessels: &[&str]) -> Self {
        self.blood_supply = to_strings(vessels);
        self
    }

    pub fn explanations(mut self, explanations: Explanations) -> Self {
        self.explanations = explanations;
        self
    }

    pub fn key_facts(mut self, facts: &[&str]) -> Self {
        self.key_facts = to_strings(facts);
        self
    }

    pub fn clinical_relevance(mut self, notes: &[&str]) -> Self {
        self.clinical_relevance = to_strings(notes);
        self
    }

    pub fn relationship(mut self, muscle_id: &str, label: &str, kind: RelationshipKind) -> Self {
        self.relationships.push(MuscleRelationship {
            muscle_id: muscle_id.to_string(),
            label: label.to_string(),
            kind,
        });
        self
    }

    pub fn related(mut self, muscle_ids: &[&str]) -> Self {
        self.related_muscles = to_strings(muscle_ids);
        self
    }

    /// Distinct joints this muscle acts on, in first-mention order
    pub fn joints(&self) -> Vec<Joint> {
        let mut joints: Vec<Joint> = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            if !joints.contains(&action.joint) {
                joints.push(action.joint);
            }
        }
        joints
    }
}

impl ContentRecord for Muscle {
    type Category = MuscleRegion;

    const STORE: &'static str = "muscular";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> MuscleRegion {
        self.region
    }

    fn alternate_names(&self) -> Vec<&str> {
        self.latin_name
            .iter()
            .chain(self.localized_name.iter())
            .map(String::as_str)
            .collect()
    }

    fn external_id(&self) -> Option<&str> {
        self.fma_id.as_deref()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        fields.extend(self.alternate_names());
        fields.extend(self.key_facts.iter().map(String::as_str));
        fields
    }

    fn facets(&self) -> Vec<Facet> {
        let mut facets = vec![
            Facet::new("group", self.group),
            Facet::new("shape", self.shape),
            Facet::new("side", self.side),
        ];
        facets.extend(self.joints().into_iter().map(|joint| Facet::new("joint", joint)));
        facets
    }

    fn cross_references(&self) -> Vec<CrossReference<'_>> {
        let relationships = self.relationships.iter().map(|r| CrossReference {
            target_id: &r.muscle_id,
            label: Some(r.label.as_str()),
        });
        let related = self.related_muscles.iter().map(|id| CrossReference {
            target_id: id,
            label: None,
        });
        relationships.chain(related).collect()
    }

    fn leveled_text(&self, level: ComplexityLevel) -> Option<&str> {
        Some(self.explanations.resolve(level))
    }
}

pub(crate) fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    fn biceps() -> Muscle {
        Muscle::new(
            "biceps-brachii-left",
            "Left Biceps Brachii",
            MuscleRegion::Arm,
            MuscleGroup::ElbowFlexors,
            MuscleShape::Fusiform,
            BodySide::Left,
        )
        .latin("Musculus biceps brachii")
        .localized("Biceps braquial izquierdo")
        .fma("FMA:37670")
        .action(Joint::Elbow, "Flexion")
        .action(Joint::Radioulnar, "Supination")
        .action(Joint::Elbow, "Assists flexion against load")
        .key_facts(&["Strongest supinator of the forearm"])
        .relationship("brachialis-left", "Brachialis", RelationshipKind::Synergist)
        .related(&["triceps-brachii-left"])
    }

    #[test]
    fn test_region_round_trip() {
        for region in MuscleRegion::all() {
            assert_eq!(region.as_str().parse::<MuscleRegion>().unwrap(), *region);
        }
        assert_eq!("Shoulder_Girdle".parse::<MuscleRegion>().unwrap(), MuscleRegion::ShoulderGirdle);
        assert!("wing".parse::<MuscleRegion>().is_err());
    }

    #[test]
    fn test_paired_follows_side() {
        assert!(biceps().paired);
        let diaphragm = Muscle::new(
            "diaphragm",
            "Diaphragm",
            MuscleRegion::Thorax,
            MuscleGroup::Respiratory,
            MuscleShape::Convergent,
            BodySide::Midline,
        );
        assert!(!diaphragm.paired);
    }

    #[test]
    fn test_joints_are_distinct() {
        assert_eq!(biceps().joints(), vec![Joint::Elbow, Joint::Radioulnar]);
    }

    #[test]
    fn test_alternate_names_and_search_fields() {
        let muscle = biceps();
        assert_eq!(
            muscle.alternate_names(),
            vec!["Musculus biceps brachii", "Biceps braquial izquierdo"]
        );
        let haystack = muscle.haystack();
        assert!(haystack.contains("biceps-brachii-left"));
        assert!(haystack.contains("strongest supinator"));
    }

    #[test]
    fn test_cross_references_include_relationships_and_related() {
        let muscle = biceps();
        let targets: Vec<&str> = muscle.cross_references().iter().map(|r| r.target_id).collect();
        assert_eq!(targets, vec!["brachialis-left", "triceps-brachii-left"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(biceps()).unwrap();
        assert_eq!(json["latinName"], "Musculus biceps brachii");
        assert_eq!(json["region"], "arm");
        assert_eq!(json["actions"][1]["joint"], "radioulnar");
    }
}
