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

//! Literal muscle records.
//!
//! A few muscles are authored in full; the rest come in left/right pairs from
//! [`create_basic_muscle`].

use medatlas_core::{
    create_basic_muscle, BasicMuscleSpec, BodySide, Explanations, Joint, Muscle, MuscleGroup,
    MuscleRegion, MuscleShape, RelationshipKind,
};

/// A left/right pair built from the basic template.
struct PairSpec {
    id: &'static str,
    name: &'static str,
    latin_name: &'static str,
    region: MuscleRegion,
    group: MuscleGroup,
    shape: MuscleShape,
    /// FMA ids for the left and right muscle
    fma_ids: [&'static str; 2],
    actions: &'static [(Joint, &'static str)],
}

const SIDES: [BodySide; 2] = [BodySide::Left, BodySide::Right];

fn sided_id(id: &str, side: BodySide) -> String {
    format!("{id}-{side}")
}

fn sided_name(name: &str, side: BodySide) -> String {
    match side {
        BodySide::Left => format!("Left {name}"),
        BodySide::Right => format!("Right {name}"),
        BodySide::Midline => name.to_string(),
    }
}

fn spanish_side(side: BodySide) -> &'static str {
    match side {
        BodySide::Left => "izquierdo",
        BodySide::Right => "derecho",
        BodySide::Midline => "",
    }
}

fn basic_pair(spec: &PairSpec) -> Vec<Muscle> {
    SIDES
        .iter()
        .zip(spec.fma_ids)
        .map(|(&side, fma_id)| {
            let id = sided_id(spec.id, side);
            let name = sided_name(spec.name, side);
            create_basic_muscle(&BasicMuscleSpec {
                id: &id,
                name: &name,
                latin_name: spec.latin_name,
                region: spec.region,
                group: spec.group,
                shape: spec.shape,
                side,
                fma_id,
                actions: spec.actions,
            })
        })
        .collect()
}

fn deltoid(side: BodySide, fma_id: &str) -> Muscle {
    Muscle::new(
        sided_id("deltoid", side),
        sided_name("Deltoid", side),
        MuscleRegion::ShoulderGirdle,
        MuscleGroup::ShoulderPrimeMovers,
        MuscleShape::Multipennate,
        side,
    )
    .latin("Musculus deltoideus")
    .localized(format!("Deltoides {}", spanish_side(side)))
    .fma(fma_id)
    .location("Forms the rounded contour of the shoulder over the glenohumeral joint")
    .origin("Clavicle", "Lateral third of the anterior border")
    .origin("Scapula", "Acromion and spine of the scapula")
    .insertion("Humerus", "Deltoid tuberosity")
    .action(Joint::Shoulder, "Abduction beyond the first 15 degrees (middle fibers)")
    .action(Joint::Shoulder, "Flexion and medial rotation (anterior fibers)")
    .action(Joint::Shoulder, "Extension and lateral rotation (posterior fibers)")
    .innervation(&["Axillary nerve (C5-C6)"])
    .blood_supply(&["Posterior circumflex humeral artery", "Deltoid branch of the thoracoacromial artery"])
    .explanations(Explanations {
        level1: Some("The deltoid is the big rounded muscle on top of your shoulder that lifts your arm out to the side.".into()),
        level2: Some("The deltoid has three parts (front, middle and back) that work together to raise and swing the arm.".into()),
        level3: Some("The deltoid arises from the clavicle, acromion and scapular spine and inserts on the deltoid tuberosity of the humerus. It is the main abductor of the arm after the supraspinatus starts the movement.".into()),
        level4: None,
        level5: Some("Multipennate middle fibers give the deltoid high force at short excursion. Axillary nerve injury from shoulder dislocation or surgical neck fracture produces flattened shoulder contour, weak abduction and a patch of numbness over the lateral arm.".into()),
    })
    .key_facts(&[
        "Three heads: anterior, middle and posterior",
        "Common intramuscular injection site",
        "Supplied by the axillary nerve",
    ])
    .clinical_relevance(&[
        "Axillary nerve palsy after anterior shoulder dislocation",
        "Deltoid atrophy in rotator cuff arthropathy",
    ])
    .relationship(&sided_id("supraspinatus", side), &sided_name("Supraspinatus", side), RelationshipKind::Synergist)
    .relationship(&sided_id("latissimus-dorsi", side), &sided_name("Latissimus Dorsi", side), RelationshipKind::Antagonist)
    .related(&[
        &sided_id("pectoralis-major", side),
        &sided_id("teres-minor", side),
    ])
}

fn supraspinatus(side: BodySide, fma_id: &str) -> Muscle {
    Muscle::new(
        sided_id("supraspinatus", side),
        sided_name("Supraspinatus", side),
        MuscleRegion::ShoulderGirdle,
        MuscleGroup::RotatorCuff,
        MuscleShape::Bipennate,
        side,
    )
    .latin("Musculus supraspinatus")
    .localized(format!("Supraespinoso {}", spanish_side(side)))
    .fma(fma_id)
    .location("Lies in the supraspinous fossa above the spine of the scapula")
    .origin("Scapula", "Supraspinous fossa")
    .insertion("Humerus", "Superior facet of the greater tubercle")
    .action(Joint::Shoulder, "Initiates abduction (first 15 degrees)")
    .action(Joint::Shoulder, "Stabilizes the humeral head in the glenoid")
    .innervation(&["Suprascapular nerve (C5-C6)"])
    .blood_supply(&["Suprascapular artery"])
    .explanations(Explanations {
        level1: Some("The supraspinatus is a small muscle on top of your shoulder blade that helps start lifting your arm.".into()),
        level2: None,
        level3: Some("One of the four rotator cuff muscles, the supraspinatus runs under the acromion to the greater tubercle and holds the humeral head in its socket.".into()),
        level4: Some("Its tendon passes through the subacromial space, where reduced clearance causes impingement. Together with the deltoid it forms a force couple for abduction.".into()),
        level5: None,
    })
    .key_facts(&[
        "Most commonly torn rotator cuff tendon",
        "Tested with the empty can (Jobe) test",
        "Part of the rotator cuff (SITS muscles)",
    ])
    .clinical_relevance(&[
        "Subacromial impingement in overhead workers",
        "Full-thickness tears with age and repetitive strain",
    ])
    .relationship(&sided_id("deltoid", side), &sided_name("Deltoid", side), RelationshipKind::Synergist)
    .relationship(&sided_id("infraspinatus", side), &sided_name("Infraspinatus", side), RelationshipKind::Stabilizer)
    .related(&[
        &sided_id("teres-minor", side),
        &sided_id("subscapularis", side),
    ])
}

fn biceps_brachii(side: BodySide, fma_id: &str) -> Muscle {
    Muscle::new(
        sided_id("biceps-brachii", side),
        sided_name("Biceps Brachii", side),
        MuscleRegion::Arm,
        MuscleGroup::ElbowFlexors,
        MuscleShape::Fusiform,
        side,
    )
    .latin("Musculus biceps brachii")
    .localized(format!("Bíceps braquial {}", spanish_side(side)))
    .fma(fma_id)
    .location("Anterior compartment of the arm")
    .origin("Scapula", "Supraglenoid tubercle (long head)")
    .origin("Scapula", "Coracoid process (short head)")
    .insertion("Radius", "Radial tuberosity")
    .insertion("Forearm fascia", "Bicipital aponeurosis")
    .action(Joint::Elbow, "Flexion")
    .action(Joint::Radioulnar, "Supination")
    .action(Joint::Shoulder, "Assists flexion")
    .innervation(&["Musculocutaneous nerve (C5-C6)"])
    .blood_supply(&["Muscular branches of the brachial artery"])
    .explanations(Explanations {
        level1: Some("The biceps is the muscle on the front of your upper arm that bends your elbow.".into()),
        level2: Some("The biceps has two heads that join into one muscle belly. It bends the elbow and turns the palm up.".into()),
        level3: Some("Biceps brachii crosses both the shoulder and elbow. It is the most powerful supinator of the forearm, strongest when the elbow is flexed.".into()),
        level4: None,
        level5: None,
    })
    .key_facts(&[
        "Two heads: long and short",
        "Strongest supinator of the forearm",
        "Tested by the biceps reflex (C5-C6)",
    ])
    .clinical_relevance(&[
        "Distal biceps tendon rupture with heavy lifting",
        "Long head tendinopathy presents as anterior shoulder pain",
    ])
    .relationship(&sided_id("triceps-brachii", side), &sided_name("Triceps Brachii", side), RelationshipKind::Antagonist)
    .relationship(&sided_id("brachialis", side), &sided_name("Brachialis", side), RelationshipKind::Synergist)
    .related(&[&sided_id("brachioradialis", side)])
}

fn diaphragm() -> Muscle {
    Muscle::new(
        "diaphragm",
        "Diaphragm",
        MuscleRegion::Thorax,
        MuscleGroup::Respiratory,
        MuscleShape::Convergent,
        BodySide::Midline,
    )
    .latin("Diaphragma")
    .localized("Diafragma")
    .fma("FMA:13295")
    .location("Dome-shaped partition between the thoracic and abdominal cavities")
    .origin("Sternum", "Posterior surface of the xiphoid process")
    .origin("Ribs", "Inner surfaces of costal cartilages 7-12")
    .origin("Lumbar vertebrae", "Crura from L1-L3")
    .insertion("Central tendon", "Converging fibers")
    .action(Joint::ThoracicCage, "Inspiration by flattening the dome")
    .innervation(&["Phrenic nerve (C3-C5)"])
    .blood_supply(&["Pericardiacophrenic artery", "Musculophrenic artery", "Inferior phrenic arteries"])
    .explanations(Explanations {
        level1: Some("The diaphragm is the main muscle you breathe with. It sits under your lungs.".into()),
        level2: Some("When the diaphragm tightens it moves down, making room for the lungs to fill with air.".into()),
        level3: Some("The diaphragm separates chest and abdomen and is pierced by the caval, esophageal and aortic openings at T8, T10 and T12.".into()),
        level4: Some("Innervated by the phrenic nerve (C3, C4, C5); contraction increases vertical thoracic dimension and lowers intrathoracic pressure.".into()),
        level5: Some("Unilateral phrenic palsy causes paradoxical elevation on sniff testing. Diaphragmatic weakness is an occupational concern in neuromuscular disease and high cervical spinal injury.".into()),
    })
    .key_facts(&[
        "Primary muscle of inspiration",
        "C3, C4, C5 keeps the diaphragm alive",
        "Three major openings: caval, esophageal and aortic",
    ])
    .clinical_relevance(&[
        "Phrenic nerve palsy",
        "Hiatal hernia through the esophageal opening",
    ])
    .relationship("external-intercostal-left", "Left External Intercostal", RelationshipKind::Synergist)
    .relationship("external-intercostal-right", "Right External Intercostal", RelationshipKind::Synergist)
    .related(&["rectus-abdominis-left", "rectus-abdominis-right"])
}

const PAIRS: &[PairSpec] = &[
    // head and face
    PairSpec {
        id: "masseter",
        name: "Masseter",
        latin_name: "Musculus masseter",
        region: MuscleRegion::HeadFace,
        group: MuscleGroup::Mastication,
        shape: MuscleShape::Multipennate,
        fma_ids: ["FMA:49001", "FMA:49002"],
        actions: &[(Joint::Temporomandibular, "Elevation of the mandible")],
    },
    PairSpec {
        id: "temporalis",
        name: "Temporalis",
        latin_name: "Musculus temporalis",
        region: MuscleRegion::HeadFace,
        group: MuscleGroup::Mastication,
        shape: MuscleShape::Convergent,
        fma_ids: ["FMA:49011", "FMA:49012"],
        actions: &[(Joint::Temporomandibular, "Elevation and retraction of the mandible")],
    },
    PairSpec {
        id: "orbicularis-oculi",
        name: "Orbicularis Oculi",
        latin_name: "Musculus orbicularis oculi",
        region: MuscleRegion::HeadFace,
        group: MuscleGroup::FacialExpression,
        shape: MuscleShape::Circular,
        fma_ids: ["FMA:46811", "FMA:46812"],
        actions: &[],
    },
    // neck
    PairSpec {
        id: "sternocleidomastoid",
        name: "Sternocleidomastoid",
        latin_name: "Musculus sternocleidomastoideus",
        region: MuscleRegion::Neck,
        group: MuscleGroup::Cervical,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:13411", "FMA:13412"],
        actions: &[(Joint::CervicalSpine, "Contralateral rotation and flexion of the head")],
    },
    // shoulder girdle
    PairSpec {
        id: "infraspinatus",
        name: "Infraspinatus",
        latin_name: "Musculus infraspinatus",
        region: MuscleRegion::ShoulderGirdle,
        group: MuscleGroup::RotatorCuff,
        shape: MuscleShape::Multipennate,
        fma_ids: ["FMA:32551", "FMA:32552"],
        actions: &[(Joint::Shoulder, "Lateral rotation")],
    },
    PairSpec {
        id: "teres-minor",
        name: "Teres Minor",
        latin_name: "Musculus teres minor",
        region: MuscleRegion::ShoulderGirdle,
        group: MuscleGroup::RotatorCuff,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:32561", "FMA:32562"],
        actions: &[(Joint::Shoulder, "Lateral rotation")],
    },
    PairSpec {
        id: "subscapularis",
        name: "Subscapularis",
        latin_name: "Musculus subscapularis",
        region: MuscleRegion::ShoulderGirdle,
        group: MuscleGroup::RotatorCuff,
        shape: MuscleShape::Multipennate,
        fma_ids: ["FMA:13421", "FMA:13422"],
        actions: &[(Joint::Shoulder, "Medial rotation")],
    },
    PairSpec {
        id: "teres-major",
        name: "Teres Major",
        latin_name: "Musculus teres major",
        region: MuscleRegion::ShoulderGirdle,
        group: MuscleGroup::ShoulderPrimeMovers,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:32571", "FMA:32572"],
        actions: &[(Joint::Shoulder, "Adduction and medial rotation")],
    },
    // arm
    PairSpec {
        id: "brachialis",
        name: "Brachialis",
        latin_name: "Musculus brachialis",
        region: MuscleRegion::Arm,
        group: MuscleGroup::ElbowFlexors,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:37681", "FMA:37682"],
        actions: &[(Joint::Elbow, "Flexion")],
    },
    PairSpec {
        id: "triceps-brachii",
        name: "Triceps Brachii",
        latin_name: "Musculus triceps brachii",
        region: MuscleRegion::Arm,
        group: MuscleGroup::ElbowExtensors,
        shape: MuscleShape::Multipennate,
        fma_ids: ["FMA:37691", "FMA:37692"],
        actions: &[(Joint::Elbow, "Extension"), (Joint::Shoulder, "Extension (long head)")],
    },
    // forearm
    PairSpec {
        id: "brachioradialis",
        name: "Brachioradialis",
        latin_name: "Musculus brachioradialis",
        region: MuscleRegion::Forearm,
        group: MuscleGroup::ElbowFlexors,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:38491", "FMA:38492"],
        actions: &[(Joint::Elbow, "Flexion with the forearm mid-prone")],
    },
    PairSpec {
        id: "flexor-carpi-radialis",
        name: "Flexor Carpi Radialis",
        latin_name: "Musculus flexor carpi radialis",
        region: MuscleRegion::Forearm,
        group: MuscleGroup::ForearmFlexors,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:38461", "FMA:38462"],
        actions: &[(Joint::Wrist, "Flexion and radial deviation")],
    },
    PairSpec {
        id: "extensor-carpi-radialis-longus",
        name: "Extensor Carpi Radialis Longus",
        latin_name: "Musculus extensor carpi radialis longus",
        region: MuscleRegion::Forearm,
        group: MuscleGroup::ForearmExtensors,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:38501", "FMA:38502"],
        actions: &[(Joint::Wrist, "Extension and radial deviation")],
    },
    // hand
    PairSpec {
        id: "abductor-pollicis-brevis",
        name: "Abductor Pollicis Brevis",
        latin_name: "Musculus abductor pollicis brevis",
        region: MuscleRegion::Hand,
        group: MuscleGroup::IntrinsicHand,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:37371", "FMA:37372"],
        actions: &[(Joint::Thumb, "Abduction")],
    },
    PairSpec {
        id: "first-dorsal-interosseous",
        name: "First Dorsal Interosseous",
        latin_name: "Musculus interosseus dorsalis primus",
        region: MuscleRegion::Hand,
        group: MuscleGroup::IntrinsicHand,
        shape: MuscleShape::Bipennate,
        fma_ids: ["FMA:37381", "FMA:37382"],
        actions: &[(Joint::Fingers, "Abduction of the index finger")],
    },
    // thorax
    PairSpec {
        id: "pectoralis-major",
        name: "Pectoralis Major",
        latin_name: "Musculus pectoralis major",
        region: MuscleRegion::Thorax,
        group: MuscleGroup::ShoulderPrimeMovers,
        shape: MuscleShape::Convergent,
        fma_ids: ["FMA:9631", "FMA:9632"],
        actions: &[(Joint::Shoulder, "Adduction, medial rotation and flexion")],
    },
    PairSpec {
        id: "serratus-anterior",
        name: "Serratus Anterior",
        latin_name: "Musculus serratus anterior",
        region: MuscleRegion::Thorax,
        group: MuscleGroup::ScapularStabilizers,
        shape: MuscleShape::Flat,
        fma_ids: ["FMA:13401", "FMA:13402"],
        actions: &[(Joint::Scapulothoracic, "Protraction and upward rotation")],
    },
    PairSpec {
        id: "external-intercostal",
        name: "External Intercostal",
        latin_name: "Musculi intercostales externi",
        region: MuscleRegion::Thorax,
        group: MuscleGroup::Respiratory,
        shape: MuscleShape::Flat,
        fma_ids: ["FMA:13361", "FMA:13362"],
        actions: &[(Joint::ThoracicCage, "Elevation of the ribs in inspiration")],
    },
    // abdomen
    PairSpec {
        id: "rectus-abdominis",
        name: "Rectus Abdominis",
        latin_name: "Musculus rectus abdominis",
        region: MuscleRegion::Abdomen,
        group: MuscleGroup::AbdominalWall,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:9641", "FMA:9642"],
        actions: &[(Joint::ThoracolumbarSpine, "Flexion of the trunk")],
    },
    PairSpec {
        id: "external-oblique",
        name: "External Oblique",
        latin_name: "Musculus obliquus externus abdominis",
        region: MuscleRegion::Abdomen,
        group: MuscleGroup::AbdominalWall,
        shape: MuscleShape::Flat,
        fma_ids: ["FMA:13341", "FMA:13342"],
        actions: &[(Joint::ThoracolumbarSpine, "Contralateral rotation and lateral flexion")],
    },
    // back
    PairSpec {
        id: "trapezius",
        name: "Trapezius",
        latin_name: "Musculus trapezius",
        region: MuscleRegion::Back,
        group: MuscleGroup::ScapularStabilizers,
        shape: MuscleShape::Flat,
        fma_ids: ["FMA:9651", "FMA:9652"],
        actions: &[
            (Joint::Scapulothoracic, "Elevation, retraction and upward rotation"),
            (Joint::CervicalSpine, "Extension of the neck"),
        ],
    },
    PairSpec {
        id: "latissimus-dorsi",
        name: "Latissimus Dorsi",
        latin_name: "Musculus latissimus dorsi",
        region: MuscleRegion::Back,
        group: MuscleGroup::ShoulderPrimeMovers,
        shape: MuscleShape::Flat,
        fma_ids: ["FMA:13371", "FMA:13372"],
        actions: &[(Joint::Shoulder, "Extension, adduction and medial rotation")],
    },
    PairSpec {
        id: "rhomboid-major",
        name: "Rhomboid Major",
        latin_name: "Musculus rhomboideus major",
        region: MuscleRegion::Back,
        group: MuscleGroup::ScapularStabilizers,
        shape: MuscleShape::Quadrate,
        fma_ids: ["FMA:13381", "FMA:13382"],
        actions: &[(Joint::Scapulothoracic, "Retraction")],
    },
    PairSpec {
        id: "erector-spinae",
        name: "Erector Spinae",
        latin_name: "Musculus erector spinae",
        region: MuscleRegion::Back,
        group: MuscleGroup::DeepBack,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:71311", "FMA:71312"],
        actions: &[(Joint::ThoracolumbarSpine, "Extension and lateral flexion")],
    },
    // pelvis and hip
    PairSpec {
        id: "gluteus-maximus",
        name: "Gluteus Maximus",
        latin_name: "Musculus gluteus maximus",
        region: MuscleRegion::PelvisHip,
        group: MuscleGroup::Gluteal,
        shape: MuscleShape::Quadrate,
        fma_ids: ["FMA:22321", "FMA:22322"],
        actions: &[(Joint::Hip, "Extension and lateral rotation")],
    },
    PairSpec {
        id: "gluteus-medius",
        name: "Gluteus Medius",
        latin_name: "Musculus gluteus medius",
        region: MuscleRegion::PelvisHip,
        group: MuscleGroup::Gluteal,
        shape: MuscleShape::Convergent,
        fma_ids: ["FMA:22331", "FMA:22332"],
        actions: &[(Joint::Hip, "Abduction and pelvic stabilization")],
    },
    PairSpec {
        id: "iliopsoas",
        name: "Iliopsoas",
        latin_name: "Musculus iliopsoas",
        region: MuscleRegion::PelvisHip,
        group: MuscleGroup::HipFlexors,
        shape: MuscleShape::Parallel,
        fma_ids: ["FMA:64921", "FMA:64922"],
        actions: &[(Joint::Hip, "Flexion")],
    },
    // thigh
    PairSpec {
        id: "rectus-femoris",
        name: "Rectus Femoris",
        latin_name: "Musculus rectus femoris",
        region: MuscleRegion::Thigh,
        group: MuscleGroup::Quadriceps,
        shape: MuscleShape::Bipennate,
        fma_ids: ["FMA:22441", "FMA:22442"],
        actions: &[(Joint::Knee, "Extension"), (Joint::Hip, "Flexion")],
    },
    PairSpec {
        id: "vastus-lateralis",
        name: "Vastus Lateralis",
        latin_name: "Musculus vastus lateralis",
        region: MuscleRegion::Thigh,
        group: MuscleGroup::Quadriceps,
        shape: MuscleShape::Unipennate,
        fma_ids: ["FMA:22451", "FMA:22452"],
        actions: &[(Joint::Knee, "Extension")],
    },
    PairSpec {
        id: "biceps-femoris",
        name: "Biceps Femoris",
        latin_name: "Musculus biceps femoris",
        region: MuscleRegion::Thigh,
        group: MuscleGroup::Hamstrings,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:22361", "FMA:22362"],
        actions: &[(Joint::Knee, "Flexion and lateral rotation"), (Joint::Hip, "Extension")],
    },
    PairSpec {
        id: "semitendinosus",
        name: "Semitendinosus",
        latin_name: "Musculus semitendinosus",
        region: MuscleRegion::Thigh,
        group: MuscleGroup::Hamstrings,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:22371", "FMA:22372"],
        actions: &[(Joint::Knee, "Flexion and medial rotation"), (Joint::Hip, "Extension")],
    },
    PairSpec {
        id: "adductor-longus",
        name: "Adductor Longus",
        latin_name: "Musculus adductor longus",
        region: MuscleRegion::Thigh,
        group: MuscleGroup::Adductors,
        shape: MuscleShape::Flat,
        fma_ids: ["FMA:22461", "FMA:22462"],
        actions: &[(Joint::Hip, "Adduction")],
    },
    // leg
    PairSpec {
        id: "gastrocnemius",
        name: "Gastrocnemius",
        latin_name: "Musculus gastrocnemius",
        region: MuscleRegion::Leg,
        group: MuscleGroup::Calf,
        shape: MuscleShape::Bipennate,
        fma_ids: ["FMA:22551", "FMA:22552"],
        actions: &[(Joint::Ankle, "Plantarflexion"), (Joint::Knee, "Flexion")],
    },
    PairSpec {
        id: "soleus",
        name: "Soleus",
        latin_name: "Musculus soleus",
        region: MuscleRegion::Leg,
        group: MuscleGroup::Calf,
        shape: MuscleShape::Multipennate,
        fma_ids: ["FMA:22561", "FMA:22562"],
        actions: &[(Joint::Ankle, "Plantarflexion")],
    },
    PairSpec {
        id: "tibialis-anterior",
        name: "Tibialis Anterior",
        latin_name: "Musculus tibialis anterior",
        region: MuscleRegion::Leg,
        group: MuscleGroup::AnteriorLeg,
        shape: MuscleShape::Fusiform,
        fma_ids: ["FMA:22571", "FMA:22572"],
        actions: &[(Joint::Ankle, "Dorsiflexion"), (Joint::Subtalar, "Inversion")],
    },
    // foot
    PairSpec {
        id: "abductor-hallucis",
        name: "Abductor Hallucis",
        latin_name: "Musculus abductor hallucis",
        region: MuscleRegion::Foot,
        group: MuscleGroup::IntrinsicFoot,
        shape: MuscleShape::Unipennate,
        fma_ids: ["FMA:37451", "FMA:37452"],
        actions: &[(Joint::Toes, "Abduction of the great toe")],
    },
];

pub(super) fn muscles() -> Vec<Muscle> {
    let mut muscles = Vec::with_capacity(PAIRS.len() * 2 + 7);
    for (side, [deltoid_fma, supraspinatus_fma, biceps_fma]) in SIDES.into_iter().zip([
        ["FMA:32523", "FMA:9621", "FMA:37671"],
        ["FMA:32524", "FMA:9622", "FMA:37672"],
    ]) {
        muscles.push(deltoid(side, deltoid_fma));
        muscles.push(supraspinatus(side, supraspinatus_fma));
        muscles.push(biceps_brachii(side, biceps_fma));
    }
    muscles.push(diaphragm());
    for pair in PAIRS {
        muscles.extend(basic_pair(pair));
    }
    muscles
}
