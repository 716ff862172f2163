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

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Store statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    /// Store name
    pub store: String,
    /// Total records.
    pub total: usize,
    /// Records per category wire name, categories with no records omitted.
    pub by_category: BTreeMap<String, usize>,
    /// Records per facet name and value.
    pub by_facet: BTreeMap<String, BTreeMap<String, usize>>,
    /// Distinct names in the name index.
    pub indexed_names: usize,
    /// Cross-references whose target is absent.
    pub dangling_references: usize,
}
