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

//! Occupational medicine entries: conditions, regulatory frameworks and
//! evaluation protocols.

use crate::record::ContentRecord;
use serde::{Deserialize, Serialize};

category_enum! {
    pub enum OccupationalCategory ("occupational category") {
        Respiratory => "respiratory",
        Musculoskeletal => "musculoskeletal",
        ToxicExposure => "toxic-exposure",
        InfectiousOccupational => "infectious-occupational",
        Environmental => "environmental",
        Regulatory => "regulatory",
        Evaluation => "evaluation",
        Psychological => "psychological",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationalMedicineEntry {
    pub id: String,
    pub name: String,
    pub category: OccupationalCategory,
    pub description: String,
    /// Exposure sources, industries and agents
    pub exposure: String,
    pub clinical_features: Vec<String>,
    pub diagnosis: Vec<String>,
    pub management: Vec<String>,
    pub prevention: Vec<String>,
    pub legal_aspects: Vec<String>,
}

impl ContentRecord for OccupationalMedicineEntry {
    type Category = OccupationalCategory;

    const STORE: &'static str = "occupational";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> OccupationalCategory {
        self.category
    }

    /// id, name, description, exposure, then each clinical feature
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.id.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.exposure.as_str(),
        ];
        fields.extend(self.clinical_features.iter().map(String::as_str));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> OccupationalMedicineEntry {
        OccupationalMedicineEntry {
            id: "silicosis".into(),
            name: "Silicosis".into(),
            category: OccupationalCategory::Respiratory,
            description: "Fibrotic lung disease from crystalline silica".into(),
            exposure: "Sandblasting, stone cutting".into(),
            clinical_features: vec!["Upper-lobe nodules".into()],
            diagnosis: vec!["Chest radiograph".into()],
            management: vec!["Remove from exposure".into()],
            prevention: vec!["Wet cutting methods".into()],
            legal_aspects: vec!["Reportable disease".into()],
        }
    }

    #[test]
    fn test_haystack_covers_fixed_fields_only() {
        let haystack = entry().haystack();
        assert!(haystack.contains("sandblasting"));
        assert!(haystack.contains("upper-lobe nodules"));
        assert!(!haystack.contains("wet cutting"));
        assert!(!haystack.contains("reportable"));
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(OccupationalCategory::ToxicExposure.to_string(), "toxic-exposure");
        assert_eq!(
            "infectious_occupational".parse::<OccupationalCategory>().unwrap(),
            OccupationalCategory::InfectiousOccupational
        );
        let json = serde_json::to_value(entry()).unwrap();
        assert_eq!(json["category"], "respiratory");
        assert!(json.get("clinicalFeatures").is_some());
    }
}
