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

//! Medatlas Core
//!
//! Record schema shared by every medatlas content store:
//!
//! - **Categories**: closed vocabularies (`MuscleRegion`, `OccupationalCategory`,
//!   `TopicDomain`, ...) with a stable kebab-case wire form
//! - **Records**: `Muscle`, `OccupationalMedicineEntry`, `EducationalTopic`
//! - **`ContentRecord`**: how a store identifies, classifies, names and searches
//!   a record
//! - **Templating**: `create_basic_muscle` for boilerplate muscle records
//! - **Configuration** and **errors** used by the store builders

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod level;
pub mod muscle;
pub mod occupational;
pub mod record;
pub mod template;
pub mod topic;

pub use config::{DuplicatePolicy, StoreConfig};
pub use error::{AtlasError, Result};
pub use level::{ComplexityLevel, Explanations, NO_EXPLANATION};
pub use muscle::{
    Attachment, BodySide, Joint, JointAction, Muscle, MuscleGroup, MuscleRegion,
    MuscleRelationship, MuscleShape, RelationshipKind,
};
pub use occupational::{OccupationalCategory, OccupationalMedicineEntry};
pub use record::{Category, ContentRecord, CrossReference, Facet, RecordSummary};
pub use template::{create_basic_muscle, humanize, BasicMuscleSpec};
pub use topic::{Citation, EducationalTopic, TopicCrossReference, TopicDomain, TopicLevel};
