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

//! Leveled educational topics (workplace safety, worker rights).

use crate::level::{ComplexityLevel, NO_EXPLANATION};
use crate::record::{ContentRecord, CrossReference};
use serde::{Deserialize, Serialize};

category_enum! {
    pub enum TopicDomain ("topic domain") {
        Ergonomics => "ergonomics",
        WorkerRights => "worker-rights",
        WorkplaceSafety => "workplace-safety",
        OccupationalHealth => "occupational-health",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicLevel {
    pub level: ComplexityLevel,
    pub summary: String,
    pub key_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    pub title: String,
    pub source: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCrossReference {
    pub target_id: String,
    pub label: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalTopic {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    pub alternate_names: Vec<String>,
    pub domain: TopicDomain,
    pub levels: Vec<TopicLevel>,
    pub citations: Vec<Citation>,
    pub cross_references: Vec<TopicCrossReference>,
    pub keywords: Vec<String>,
}

impl EducationalTopic {
    /// Summary at `level`, falling back to the nearest lower authored level
    pub fn summary_at(&self, level: ComplexityLevel) -> &str {
        level
            .descending()
            .find_map(|l| {
                self.levels
                    .iter()
                    .find(|authored| authored.level == l)
                    .map(|authored| authored.summary.as_str())
            })
            .unwrap_or(NO_EXPLANATION)
    }
}

impl ContentRecord for EducationalTopic {
    type Category = TopicDomain;

    const STORE: &'static str = "topics";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> TopicDomain {
        self.domain
    }

    fn alternate_names(&self) -> Vec<&str> {
        self.localized_name
            .iter()
            .chain(self.alternate_names.iter())
            .map(String::as_str)
            .collect()
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        fields.extend(self.alternate_names());
        fields.extend(self.keywords.iter().map(String::as_str));
        fields.extend(self.levels.iter().map(|l| l.summary.as_str()));
        fields
    }

    fn cross_references(&self) -> Vec<CrossReference<'_>> {
        self.cross_references
            .iter()
            .map(|r| CrossReference {
                target_id: &r.target_id,
                label: Some(r.label.as_str()),
            })
            .collect()
    }

    fn leveled_text(&self, level: ComplexityLevel) -> Option<&str> {
        Some(self.summary_at(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic() -> EducationalTopic {
        EducationalTopic {
            id: "topic-safe-lifting".into(),
            name: "Safe Lifting".into(),
            localized_name: Some("Levantamiento Seguro".into()),
            alternate_names: vec!["Ergonomic Lifting".into()],
            domain: TopicDomain::Ergonomics,
            levels: vec![
                TopicLevel {
                    level: ComplexityLevel::new(1).unwrap(),
                    summary: "Bend your knees.".into(),
                    key_terms: vec![],
                },
                TopicLevel {
                    level: ComplexityLevel::new(4).unwrap(),
                    summary: "Apply the NIOSH lifting equation.".into(),
                    key_terms: vec!["RWL".into()],
                },
            ],
            citations: vec![],
            cross_references: vec![TopicCrossReference {
                target_id: "topic-missing".into(),
                label: "Missing".into(),
                relationship: "related".into(),
            }],
            keywords: vec!["manual material handling".into()],
        }
    }

    #[test]
    fn test_summary_fallback() {
        let topic = topic();
        let level = |n| ComplexityLevel::new(n).unwrap();
        assert_eq!(topic.summary_at(level(5)), "Apply the NIOSH lifting equation.");
        assert_eq!(topic.summary_at(level(3)), "Bend your knees.");
    }

    #[test]
    fn test_alternate_names_start_with_localized_name() {
        assert_eq!(
            topic().alternate_names(),
            vec!["Levantamiento Seguro", "Ergonomic Lifting"]
        );
    }

    #[test]
    fn test_cross_references() {
        let topic = topic();
        let refs = topic.cross_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].target_id, "topic-missing");
        assert_eq!(refs[0].label, Some("Missing"));
    }
}
