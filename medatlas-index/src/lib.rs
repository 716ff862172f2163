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

//! Medatlas Index Layer
//!
//! A generic content store over any [`ContentRecord`](medatlas_core::ContentRecord):
//!
//! - **Primary store**: records in insertion order, keyed by id, filled once
//!   through [`StoreBuilder`]
//! - **Secondary indexes**: category, lowercased name, external id, facet and
//!   search haystacks, all derived in a single pass at build time
//! - **Query surface**: pure, total lookups on the frozen [`ContentStore`]
//! - **Validation**: dangling cross-references collected into a report
//!
//! The store is immutable once built and is `Send + Sync`; share it through
//! an `Arc`.

pub mod builder;
pub mod indexes;
pub mod stats;
pub mod store;
pub mod validation;

pub use builder::StoreBuilder;
pub use stats::StoreStats;
pub use store::ContentStore;
pub use validation::DanglingReference;
