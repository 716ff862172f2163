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

//! Occupational medicine store: conditions, regulatory frameworks and
//! evaluation protocols.

mod data;

use medatlas_core::{OccupationalMedicineEntry, Result, StoreConfig};
use medatlas_index::ContentStore;
use std::ops::Deref;

/// The occupational medicine store. Derefs to the generic query surface.
#[derive(Debug, Clone)]
pub struct OccupationalStore {
    store: ContentStore<OccupationalMedicineEntry>,
}

impl OccupationalStore {
    pub fn inner(&self) -> &ContentStore<OccupationalMedicineEntry> {
        &self.store
    }
}

impl Deref for OccupationalStore {
    type Target = ContentStore<OccupationalMedicineEntry>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Build the occupational medicine store with the default configuration.
pub fn create_occupational_store() -> Result<OccupationalStore> {
    create_occupational_store_with_config(StoreConfig::default())
}

pub fn create_occupational_store_with_config(config: StoreConfig) -> Result<OccupationalStore> {
    let store = ContentStore::from_records(data::entries(), config)?;
    Ok(OccupationalStore { store })
}
