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

//! Populates the primary store and freezes it into a [`ContentStore`].

use crate::indexes::SecondaryIndexes;
use crate::store::ContentStore;
use crate::validation;
use medatlas_core::{AtlasError, ContentRecord, DuplicatePolicy, Result, StoreConfig};
use std::collections::HashMap;
use tracing::{info, warn};

/// Collects records by id before the indexes are derived.
pub struct StoreBuilder<R: ContentRecord> {
    config: StoreConfig,
    records: Vec<R>,
    positions: HashMap<String, usize>,
}

impl<R: ContentRecord> Default for StoreBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ContentRecord> StoreBuilder<R> {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Insert a record under its id.
    ///
    /// A repeated id fails with [`AtlasError::DuplicateId`] under
    /// [`DuplicatePolicy::Reject`]. Under [`DuplicatePolicy::Overwrite`] the new
    /// record replaces the old one in place.
    pub fn insert(&mut self, record: R) -> Result<()> {
        let id = record.id().to_string();
        match self.positions.get(&id) {
            Some(&position) => match self.config.duplicate_policy {
                DuplicatePolicy::Reject => Err(AtlasError::DuplicateId { store: R::STORE, id }),
                DuplicatePolicy::Overwrite => {
                    warn!(store = R::STORE, id = %id, "Overwriting record with duplicate id");
                    self.records[position] = record;
                    Ok(())
                }
            },
            None => {
                self.positions.insert(id, self.records.len());
                self.records.push(record);
                Ok(())
            }
        }
    }

    pub fn extend<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
    {
        for record in records {
            self.insert(record)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the secondary indexes and freeze the store.
    pub fn build(self) -> ContentStore<R> {
        let indexes = SecondaryIndexes::build(&self.records);

        let dangling = if self.config.validate_cross_references {
            validation::find_dangling(&self.records, &self.positions)
        } else {
            Vec::new()
        };
        for reference in &dangling {
            warn!(
                store = R::STORE,
                source = %reference.source_id,
                target = %reference.target_id,
                "Dangling cross-reference"
            );
        }

        info!(
            store = R::STORE,
            records = self.records.len(),
            categories = indexes.by_category.len(),
            names = indexes.by_name.len(),
            dangling = dangling.len(),
            "Content store built"
        );

        ContentStore::from_parts(self.config, self.records, self.positions, indexes, dangling)
    }
}
