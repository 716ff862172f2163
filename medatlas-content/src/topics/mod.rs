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

//! Workplace safety and worker rights topics.

mod data;

use medatlas_core::{ComplexityLevel, EducationalTopic, Result, StoreConfig, NO_EXPLANATION};
use medatlas_index::ContentStore;
use std::ops::Deref;

#[derive(Debug, Clone)]
pub struct SafetyTopicStore {
    store: ContentStore<EducationalTopic>,
}

impl SafetyTopicStore {
    pub fn inner(&self) -> &ContentStore<EducationalTopic> {
        &self.store
    }

    /// Summary at `level`, falling back to the nearest lower authored level
    pub fn summary(&self, id: &str, level: ComplexityLevel) -> &str {
        self.store
            .get(id)
            .map(|topic| topic.summary_at(level))
            .unwrap_or(NO_EXPLANATION)
    }
}

impl Deref for SafetyTopicStore {
    type Target = ContentStore<EducationalTopic>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

pub fn create_safety_topic_store() -> Result<SafetyTopicStore> {
    create_safety_topic_store_with_config(StoreConfig::default())
}

pub fn create_safety_topic_store_with_config(config: StoreConfig) -> Result<SafetyTopicStore> {
    let store = ContentStore::from_records(data::topics(), config)?;
    Ok(SafetyTopicStore { store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use medatlas_core::TopicDomain;

    fn level(n: u8) -> ComplexityLevel {
        ComplexityLevel::new(n).unwrap()
    }

    #[test]
    fn test_summary_fallback() {
        let store = create_safety_topic_store().unwrap();
        let at_three = store.summary("topic-workers-compensation-basics", level(3));
        assert_eq!(store.summary("topic-workers-compensation-basics", level(5)), at_three);
        assert!(store
            .summary("topic-workers-compensation-basics", level(2))
            .starts_with("If you get hurt"));
        assert_eq!(store.summary("topic-missing", level(1)), NO_EXPLANATION);
    }

    #[test]
    fn test_unwritten_topics_dangle() {
        let store = create_safety_topic_store().unwrap();
        let targets: Vec<&str> = store
            .dangling_references()
            .iter()
            .map(|r| r.target_id.as_str())
            .collect();
        assert!(targets.contains(&"topic-heat-illness-prevention"));
        assert!(!targets.contains(&"topic-workers-compensation-basics"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_lookup_by_localized_and_alternate_name() {
        let store = create_safety_topic_store().unwrap();
        assert_eq!(
            store.get_by_name("levantamiento seguro").unwrap().id,
            "topic-back-injury-prevention"
        );
        assert_eq!(
            store.get_by_name("Derechos OSHA para Todos los Trabajadores").unwrap().domain,
            TopicDomain::WorkerRights
        );
    }
}
