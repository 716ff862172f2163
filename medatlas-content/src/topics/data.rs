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

//! Literal safety topics.
//!
//! Cross-references may name topics that have not been written yet; the store
//! reports those as dangling.

use medatlas_core::{
    Citation, ComplexityLevel, EducationalTopic, TopicCrossReference, TopicDomain, TopicLevel,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn level(level: u8, summary: &str, key_terms: &[&str]) -> Option<TopicLevel> {
    Some(TopicLevel {
        level: ComplexityLevel::new(level).ok()?,
        summary: summary.to_string(),
        key_terms: strings(key_terms),
    })
}

fn citation(id: &str, title: &str, source: &str, url: &str) -> Citation {
    Citation {
        id: id.to_string(),
        title: title.to_string(),
        source: source.to_string(),
        url: url.to_string(),
    }
}

fn related(target_id: &str, label: &str) -> TopicCrossReference {
    TopicCrossReference {
        target_id: target_id.to_string(),
        label: label.to_string(),
        relationship: "related".to_string(),
    }
}

fn back_injury_prevention() -> EducationalTopic {
    EducationalTopic {
        id: "topic-back-injury-prevention".into(),
        name: "Back Injury Prevention".into(),
        localized_name: Some("Prevencion de Lesiones de Espalda".into()),
        alternate_names: strings(&[
            "Low Back Pain Prevention",
            "Safe Lifting",
            "Ergonomic Lifting",
            "Workplace Back Safety",
            "Prevencion de Dolor de Espalda",
            "Levantamiento Seguro",
        ]),
        domain: TopicDomain::Ergonomics,
        levels: [
            level(
                1,
                "Back injuries are one of the most common workplace injuries. They can happen when you lift, carry, push, or pull heavy objects the wrong way, or when you bend and twist too much. Learning to protect your back can prevent serious pain and disability.",
                &["disc", "sciatica", "sprain", "strain", "ergonomics"],
            ),
            level(
                2,
                "Occupational back injuries encompass acute strains/sprains, disc herniations, and chronic low back pain arising from manual material handling, sustained postures, and vibration exposure. Prevention requires a combination of proper lifting biomechanics, workplace engineering controls, administrative controls, and exercise.",
                &["disc herniation", "lumbar spine", "whole-body vibration", "core muscles", "NIOSH Lifting Equation", "radiculopathy"],
            ),
            level(
                3,
                "Occupational low back disorders involve complex interactions between biomechanical loading, spinal tissue tolerance, psychosocial factors, and individual risk. Evidence-based prevention integrates the NIOSH Lifting Equation, comprehensive ergonomic assessment, exercise-based interventions, and organizational workplace safety programs.",
                &["NIOSH Lifting Equation", "annulus fibrosus", "yellow flags", "STarT Back Tool", "Lifting Index", "nucleus pulposus"],
            ),
            level(
                4,
                "Advanced management of occupational low back disorders requires integration of evidence-based diagnostic algorithms, imaging interpretation, surgical indications, impairment rating methodology, and comprehensive return-to-work planning. Understanding the biopsychosocial model of pain, the limitations of structural diagnosis, and the medicolegal framework for causation analysis is essential.",
                &["cauda equina syndrome", "biopsychosocial model", "concordant imaging", "neurogenic claudication", "apportionment"],
            ),
            level(
                5,
                "Expert-level occupational spine care integrates advanced imaging biomarkers, mechanistic understanding of pain chronification, population-level surveillance methodology, health economic analysis of prevention versus treatment, and emerging technologies including AI-driven ergonomic monitoring, wearable sensors for load quantification, and precision rehabilitation approaches.",
                &["Modic changes", "T1rho mapping", "central sensitization", "passive lumbar exoskeleton", "neuroinflammation"],
            ),
        ]
        .into_iter()
        .flatten()
        .collect(),
        citations: vec![
            citation(
                "osha-back-injuries",
                "Back Injuries - Prevention",
                "OSHA",
                "https://www.osha.gov/back-injuries",
            ),
            citation(
                "cdc-niosh-lifting",
                "Ergonomics and Musculoskeletal Disorders - Lifting",
                "CDC/NIOSH",
                "https://www.cdc.gov/niosh/topics/ergonomics/",
            ),
            citation(
                "medlineplus-back-pain",
                "Back Pain",
                "MedlinePlus",
                "https://medlineplus.gov/backpain.html",
            ),
            citation(
                "osha-ergonomic-guidelines",
                "Ergonomic Guidelines for Manual Material Handling",
                "OSHA/NIOSH",
                "https://www.cdc.gov/niosh/docs/2007-131/",
            ),
        ],
        cross_references: vec![
            related("topic-repetitive-strain-injuries", "Repetitive Strain Injuries"),
            related("topic-workers-compensation-basics", "Workers Compensation Basics"),
            related("topic-construction-worker-safety", "Construction Worker Safety"),
        ],
        keywords: strings(&[
            "back injury",
            "low back pain",
            "disc herniation",
            "lifting",
            "ergonomics",
            "NIOSH Lifting Equation",
            "manual material handling",
            "spine",
        ]),
    }
}

fn osha_rights_all_workers() -> EducationalTopic {
    EducationalTopic {
        id: "topic-osha-rights-all-workers".into(),
        name: "OSHA Rights for All Workers".into(),
        localized_name: Some("Derechos OSHA para Todos los Trabajadores".into()),
        alternate_names: strings(&[
            "Worker Safety Rights",
            "OSHA Protections",
            "Workplace Safety Rights",
            "Derechos de Seguridad en el Trabajo",
            "Employee Safety Rights",
        ]),
        domain: TopicDomain::WorkerRights,
        levels: [
            level(
                1,
                "OSHA is a government agency that protects ALL workers from dangerous conditions at work. Your rights are the same whether you are a citizen, have a visa, or are undocumented. No one can take these rights away from you.",
                &["OSHA", "retaliation", "hazard", "complaint", "inspection"],
            ),
            level(
                2,
                "The Occupational Safety and Health Act of 1970 establishes workplace safety rights for all employees in the United States, enforced by OSHA through inspections, citations, and penalties. These protections extend to all workers regardless of immigration status, with specific anti-retaliation provisions under Section 11(c).",
                &["General Duty Clause", "Hazard Communication Standard", "Safety Data Sheet", "Section 11(c)", "OSHA 300 Log", "imminent danger"],
            ),
            level(
                3,
                "OSHA regulatory authority derives from the OSH Act of 1970, implementing workplace safety through a framework of promulgated standards, the General Duty Clause, inspection protocols, citation procedures, and whistleblower protections. Application to all workers regardless of immigration status is supported by statutory text, agency policy, and evolving inter-agency agreements addressing enforcement conflicts.",
                &["General Duty Clause", "willful violation", "Field Operations Manual", "chilling effect", "Susan Harwood Training Grant", "imminent danger"],
            ),
            level(
                4,
                "Advanced OSHA practice involves navigating multi-employer worksite liability, understanding the interplay between federal and state-plan OSHA jurisdiction, interpreting evolving case law on worker classification and immigration-related retaliation, and designing comprehensive workplace safety programs that meet regulatory requirements while addressing the unique vulnerabilities of immigrant worker populations.",
                &["multi-employer worksite doctrine", "controlling employer", "state plan OSHA", "economic reality test", "I-9 retaliation"],
            ),
            level(
                5,
                "Expert analysis of OSHA worker protections requires understanding of administrative law principles governing agency authority, constitutional dimensions of workplace safety regulation, the evolving intersection of labor law and immigration enforcement policy, international comparative regulatory models, and evidence-based strategies for addressing the structural determinants of occupational health inequity among vulnerable worker populations.",
                &["significant risk doctrine", "feasibility analysis", "firewall policy", "ILO Convention 155", "promotora model"],
            ),
        ]
        .into_iter()
        .flatten()
        .collect(),
        citations: vec![
            citation(
                "osha-worker-rights",
                "Workers' Rights",
                "OSHA",
                "https://www.osha.gov/workers",
            ),
            citation(
                "osha-immigrant-workers",
                "Protecting Immigrant Workers",
                "OSHA",
                "https://www.osha.gov/immigrant-workers",
            ),
            citation(
                "cdc-niosh-worker-rights",
                "Workplace Safety and Health Topics",
                "CDC/NIOSH",
                "https://www.cdc.gov/niosh/topics/",
            ),
            citation(
                "medlineplus-occupational-health",
                "Occupational Health",
                "MedlinePlus",
                "https://medlineplus.gov/occupationalhealth.html",
            ),
        ],
        cross_references: vec![
            related("topic-workers-compensation-basics", "Workers Compensation Basics"),
            related("topic-heat-illness-prevention", "Heat Illness Prevention"),
            related("topic-workplace-injury-first-aid", "Workplace Injury First Aid"),
        ],
        keywords: strings(&[
            "OSHA",
            "worker rights",
            "workplace safety",
            "immigrant workers",
            "retaliation",
            "whistleblower",
            "inspection",
            "General Duty Clause",
        ]),
    }
}
fn workers_compensation_basics() -> EducationalTopic {
    EducationalTopic {
        id: "topic-workers-compensation-basics".into(),
        name: "Workers Compensation Basics".into(),
        localized_name: Some("Conceptos Basicos de Compensacion Laboral".into()),
        alternate_names: strings(&["Workers' Comp", "Compensacion al Trabajador"]),
        domain: TopicDomain::WorkerRights,
        levels: [
            level(
                1,
                "If you get hurt or sick because of your job, workers compensation pays for your medical care and part of the wages you lose. You do not have to prove your employer did anything wrong, and you cannot be fired for filing a claim.",
                &["claim", "lost wages", "retaliation"],
            ),
            level(
                3,
                "Workers compensation is a no-fault, state-administered insurance system. Compensability requires an injury arising out of and in the course of employment; benefits cover medical treatment, temporary and permanent disability, and vocational rehabilitation in exchange for the exclusive remedy bar on civil suits against the employer.",
                &["exclusive remedy", "temporary total disability", "maximum medical improvement", "apportionment"],
            ),
        ]
        .into_iter()
        .flatten()
        .collect(),
        citations: vec![citation(
            "dol-workers-compensation",
            "Workers' Compensation",
            "U.S. Department of Labor",
            "https://www.dol.gov/general/topic/workcomp",
        )],
        cross_references: vec![
            related("topic-osha-rights-all-workers", "OSHA Rights for All Workers"),
            related("topic-back-injury-prevention", "Back Injury Prevention"),
        ],
        keywords: strings(&[
            "workers compensation",
            "disability benefits",
            "return to work",
            "work-related injury",
        ]),
    }
}

pub(super) fn topics() -> Vec<EducationalTopic> {
    vec![
        back_injury_prevention(),
        osha_rights_all_workers(),
        workers_compensation_basics(),
    ]
}
