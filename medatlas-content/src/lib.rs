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

//! Medatlas Content
//!
//! The authored stores, each built through the generic
//! [`medatlas_index::ContentStore`]:
//!
//! - [`create_muscular_store`]: 79 muscles across 13 body regions
//! - [`create_occupational_store`]: occupational conditions, regulation and
//!   evaluation protocols
//! - [`create_safety_topic_store`]: leveled workplace safety topics
//!
//! [`Catalog`] bundles all of them behind the object-safe [`StoreView`].

pub mod catalog;
pub mod muscular;
pub mod occupational;
pub mod topics;

pub use catalog::{Catalog, CategoryCount, StoreKind, StoreView};
pub use muscular::{create_muscular_store, create_muscular_store_with_config, MuscularStore};
pub use occupational::{
    create_occupational_store, create_occupational_store_with_config, OccupationalStore,
};
pub use topics::{
    create_safety_topic_store, create_safety_topic_store_with_config, SafetyTopicStore,
};
