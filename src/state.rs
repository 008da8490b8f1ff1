// Application state: the ten record stores, constructed explicitly and
// passed around by reference. Hydration and flushing go through a
// PersistenceAdapter handed in by the caller; nothing here reaches for a
// global.

use crate::error::VitroLabError;
use crate::persistence::{PersistenceAdapter, StorageBackend};
use crate::records::{
    AutoclaveRecord, DomainRecord, HoldingAreaRecord, IncubationRecord, IndoorSamplingRecord,
    MediaBatchRecord, MortalityRecord, OutdoorSamplingRecord, PrimaryHardeningRecord,
    SecondaryHardeningRecord, SubcultureRecord,
};
use crate::seeds;
use crate::status::StatusFilter;
use crate::storage_keys::StoreKey;
use crate::store::{RecordStore, StatusCounts};
use serde::{Deserialize, Serialize};

/// One mutation against one store, in the JSON shape the tooling speaks.
/// The record payload stays a raw value here and is decoded against the
/// addressed store's record type on apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Operation {
    Add {
        store: StoreKey,
        record: serde_json::Value,
    },
    Update {
        store: StoreKey,
        record: serde_json::Value,
    },
    Delete {
        store: StoreKey,
        id: String,
    },
}

/// What a completed mutation reports back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub store: StoreKey,
    pub action: String,
    pub id: String,
    /// Delete only: whether a record was actually removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    pub record_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErpState {
    pub media_batches: RecordStore<MediaBatchRecord>,
    pub autoclave_cycles: RecordStore<AutoclaveRecord>,
    pub subcultures: RecordStore<SubcultureRecord>,
    pub incubation_runs: RecordStore<IncubationRecord>,
    pub indoor_samples: RecordStore<IndoorSamplingRecord>,
    pub outdoor_samples: RecordStore<OutdoorSamplingRecord>,
    pub primary_hardening: RecordStore<PrimaryHardeningRecord>,
    pub secondary_hardening: RecordStore<SecondaryHardeningRecord>,
    pub mortality_events: RecordStore<MortalityRecord>,
    pub holding_lots: RecordStore<HoldingAreaRecord>,
}

impl Default for ErpState {
    fn default() -> Self {
        Self::empty()
    }
}

impl ErpState {
    pub fn empty() -> Self {
        Self {
            media_batches: RecordStore::new(),
            autoclave_cycles: RecordStore::new(),
            subcultures: RecordStore::new(),
            incubation_runs: RecordStore::new(),
            indoor_samples: RecordStore::new(),
            outdoor_samples: RecordStore::new(),
            primary_hardening: RecordStore::new(),
            secondary_hardening: RecordStore::new(),
            mortality_events: RecordStore::new(),
            holding_lots: RecordStore::new(),
        }
    }

    /// Every store on its seed dataset.
    pub fn seeded() -> Self {
        Self {
            media_batches: RecordStore::from_records(seeds::media_batches()),
            autoclave_cycles: RecordStore::from_records(seeds::autoclave_cycles()),
            subcultures: RecordStore::from_records(seeds::subcultures()),
            incubation_runs: RecordStore::from_records(seeds::incubation_runs()),
            indoor_samples: RecordStore::from_records(seeds::indoor_samples()),
            outdoor_samples: RecordStore::from_records(seeds::outdoor_samples()),
            primary_hardening: RecordStore::from_records(seeds::primary_hardening()),
            secondary_hardening: RecordStore::from_records(seeds::secondary_hardening()),
            mortality_events: RecordStore::from_records(seeds::mortality_events()),
            holding_lots: RecordStore::from_records(seeds::holding_lots()),
        }
    }

    /// Loads every slot, falling back to the seed set per store.
    pub fn hydrate<B: StorageBackend>(adapter: &PersistenceAdapter<B>) -> Self {
        Self {
            media_batches: RecordStore::from_records(
                adapter.load(StoreKey::MediaBatch, seeds::media_batches()),
            ),
            autoclave_cycles: RecordStore::from_records(
                adapter.load(StoreKey::Autoclave, seeds::autoclave_cycles()),
            ),
            subcultures: RecordStore::from_records(
                adapter.load(StoreKey::Subculture, seeds::subcultures()),
            ),
            incubation_runs: RecordStore::from_records(
                adapter.load(StoreKey::Incubation, seeds::incubation_runs()),
            ),
            indoor_samples: RecordStore::from_records(
                adapter.load(StoreKey::IndoorSampling, seeds::indoor_samples()),
            ),
            outdoor_samples: RecordStore::from_records(
                adapter.load(StoreKey::OutdoorSampling, seeds::outdoor_samples()),
            ),
            primary_hardening: RecordStore::from_records(
                adapter.load(StoreKey::PrimaryHardening, seeds::primary_hardening()),
            ),
            secondary_hardening: RecordStore::from_records(
                adapter.load(StoreKey::SecondaryHardening, seeds::secondary_hardening()),
            ),
            mortality_events: RecordStore::from_records(
                adapter.load(StoreKey::Mortality, seeds::mortality_events()),
            ),
            holding_lots: RecordStore::from_records(
                adapter.load(StoreKey::HoldingArea, seeds::holding_lots()),
            ),
        }
    }

    /// Writes every slot. Invoked once per completed mutation, so a burst
    /// of store changes within one action lands as one batch of writes,
    /// the way the original middleware mirrored the whole state tree.
    pub fn flush<B: StorageBackend>(&self, adapter: &mut PersistenceAdapter<B>) {
        adapter.save(StoreKey::MediaBatch, self.media_batches.records());
        adapter.save(StoreKey::Autoclave, self.autoclave_cycles.records());
        adapter.save(StoreKey::Subculture, self.subcultures.records());
        adapter.save(StoreKey::Incubation, self.incubation_runs.records());
        adapter.save(StoreKey::IndoorSampling, self.indoor_samples.records());
        adapter.save(StoreKey::OutdoorSampling, self.outdoor_samples.records());
        adapter.save(StoreKey::PrimaryHardening, self.primary_hardening.records());
        adapter.save(
            StoreKey::SecondaryHardening,
            self.secondary_hardening.records(),
        );
        adapter.save(StoreKey::Mortality, self.mortality_events.records());
        adapter.save(StoreKey::HoldingArea, self.holding_lots.records());
    }

    pub fn record_count(&self, store: StoreKey) -> usize {
        match store {
            StoreKey::MediaBatch => self.media_batches.len(),
            StoreKey::Autoclave => self.autoclave_cycles.len(),
            StoreKey::Subculture => self.subcultures.len(),
            StoreKey::Incubation => self.incubation_runs.len(),
            StoreKey::IndoorSampling => self.indoor_samples.len(),
            StoreKey::OutdoorSampling => self.outdoor_samples.len(),
            StoreKey::PrimaryHardening => self.primary_hardening.len(),
            StoreKey::SecondaryHardening => self.secondary_hardening.len(),
            StoreKey::Mortality => self.mortality_events.len(),
            StoreKey::HoldingArea => self.holding_lots.len(),
        }
    }

    pub fn status_counts(&self, store: StoreKey) -> StatusCounts {
        match store {
            StoreKey::MediaBatch => self.media_batches.status_counts(),
            StoreKey::Autoclave => self.autoclave_cycles.status_counts(),
            StoreKey::Subculture => self.subcultures.status_counts(),
            StoreKey::Incubation => self.incubation_runs.status_counts(),
            StoreKey::IndoorSampling => self.indoor_samples.status_counts(),
            StoreKey::OutdoorSampling => self.outdoor_samples.status_counts(),
            StoreKey::PrimaryHardening => self.primary_hardening.status_counts(),
            StoreKey::SecondaryHardening => self.secondary_hardening.status_counts(),
            StoreKey::Mortality => self.mortality_events.status_counts(),
            StoreKey::HoldingArea => self.holding_lots.status_counts(),
        }
    }

    /// The combined search/filter query of one store, as JSON rows.
    pub fn rows(
        &self,
        store: StoreKey,
        search: &str,
        filter: StatusFilter,
    ) -> Result<Vec<serde_json::Value>, VitroLabError> {
        fn rows_of<R: DomainRecord>(
            store: &RecordStore<R>,
            search: &str,
            filter: StatusFilter,
        ) -> Result<Vec<serde_json::Value>, VitroLabError> {
            store
                .query(search, filter)
                .map(|r| serde_json::to_value(r).map_err(VitroLabError::from))
                .collect()
        }
        match store {
            StoreKey::MediaBatch => rows_of(&self.media_batches, search, filter),
            StoreKey::Autoclave => rows_of(&self.autoclave_cycles, search, filter),
            StoreKey::Subculture => rows_of(&self.subcultures, search, filter),
            StoreKey::Incubation => rows_of(&self.incubation_runs, search, filter),
            StoreKey::IndoorSampling => rows_of(&self.indoor_samples, search, filter),
            StoreKey::OutdoorSampling => rows_of(&self.outdoor_samples, search, filter),
            StoreKey::PrimaryHardening => rows_of(&self.primary_hardening, search, filter),
            StoreKey::SecondaryHardening => rows_of(&self.secondary_hardening, search, filter),
            StoreKey::Mortality => rows_of(&self.mortality_events, search, filter),
            StoreKey::HoldingArea => rows_of(&self.holding_lots, search, filter),
        }
    }

    pub fn apply(&mut self, op: Operation) -> Result<Receipt, VitroLabError> {
        match op {
            Operation::Add { store, record } => self.add_value(store, record),
            Operation::Update { store, record } => self.update_value(store, record),
            Operation::Delete { store, id } => {
                let removed = match store {
                    StoreKey::MediaBatch => self.media_batches.delete(&id),
                    StoreKey::Autoclave => self.autoclave_cycles.delete(&id),
                    StoreKey::Subculture => self.subcultures.delete(&id),
                    StoreKey::Incubation => self.incubation_runs.delete(&id),
                    StoreKey::IndoorSampling => self.indoor_samples.delete(&id),
                    StoreKey::OutdoorSampling => self.outdoor_samples.delete(&id),
                    StoreKey::PrimaryHardening => self.primary_hardening.delete(&id),
                    StoreKey::SecondaryHardening => self.secondary_hardening.delete(&id),
                    StoreKey::Mortality => self.mortality_events.delete(&id),
                    StoreKey::HoldingArea => self.holding_lots.delete(&id),
                };
                Ok(Receipt {
                    store,
                    action: "delete".to_string(),
                    id,
                    removed: Some(removed),
                    record_count: self.record_count(store),
                })
            }
        }
    }

    fn add_value(
        &mut self,
        store: StoreKey,
        value: serde_json::Value,
    ) -> Result<Receipt, VitroLabError> {
        fn add_into<R: DomainRecord>(
            store: &mut RecordStore<R>,
            value: serde_json::Value,
        ) -> Result<Receipt, VitroLabError> {
            let record: R = serde_json::from_value(value)?;
            let id = record.id().to_string();
            store.add(record)?;
            Ok(Receipt {
                store: R::STORE,
                action: "add".to_string(),
                id,
                removed: None,
                record_count: store.len(),
            })
        }
        match store {
            StoreKey::MediaBatch => add_into(&mut self.media_batches, value),
            StoreKey::Autoclave => add_into(&mut self.autoclave_cycles, value),
            StoreKey::Subculture => add_into(&mut self.subcultures, value),
            StoreKey::Incubation => add_into(&mut self.incubation_runs, value),
            StoreKey::IndoorSampling => add_into(&mut self.indoor_samples, value),
            StoreKey::OutdoorSampling => add_into(&mut self.outdoor_samples, value),
            StoreKey::PrimaryHardening => add_into(&mut self.primary_hardening, value),
            StoreKey::SecondaryHardening => add_into(&mut self.secondary_hardening, value),
            StoreKey::Mortality => add_into(&mut self.mortality_events, value),
            StoreKey::HoldingArea => add_into(&mut self.holding_lots, value),
        }
    }

    fn update_value(
        &mut self,
        store: StoreKey,
        value: serde_json::Value,
    ) -> Result<Receipt, VitroLabError> {
        fn update_into<R: DomainRecord>(
            store: &mut RecordStore<R>,
            value: serde_json::Value,
        ) -> Result<Receipt, VitroLabError> {
            let record: R = serde_json::from_value(value)?;
            let id = record.id().to_string();
            store.update(record)?;
            Ok(Receipt {
                store: R::STORE,
                action: "update".to_string(),
                id,
                removed: None,
                record_count: store.len(),
            })
        }
        match store {
            StoreKey::MediaBatch => update_into(&mut self.media_batches, value),
            StoreKey::Autoclave => update_into(&mut self.autoclave_cycles, value),
            StoreKey::Subculture => update_into(&mut self.subcultures, value),
            StoreKey::Incubation => update_into(&mut self.incubation_runs, value),
            StoreKey::IndoorSampling => update_into(&mut self.indoor_samples, value),
            StoreKey::OutdoorSampling => update_into(&mut self.outdoor_samples, value),
            StoreKey::PrimaryHardening => update_into(&mut self.primary_hardening, value),
            StoreKey::SecondaryHardening => update_into(&mut self.secondary_hardening, value),
            StoreKey::Mortality => update_into(&mut self.mortality_events, value),
            StoreKey::HoldingArea => update_into(&mut self.holding_lots, value),
        }
    }
}

/// Owns the state and its adapter: applies a mutation, then mirrors every
/// slot. A failed mutation persists nothing.
#[derive(Debug)]
pub struct Erp<B: StorageBackend> {
    state: ErpState,
    adapter: PersistenceAdapter<B>,
}

impl<B: StorageBackend> Erp<B> {
    pub fn open(backend: B) -> Self {
        let adapter = PersistenceAdapter::new(backend);
        let state = ErpState::hydrate(&adapter);
        Self { state, adapter }
    }

    pub fn state(&self) -> &ErpState {
        &self.state
    }

    pub fn apply(&mut self, op: Operation) -> Result<Receipt, VitroLabError> {
        let receipt = self.state.apply(op)?;
        self.state.flush(&mut self.adapter);
        Ok(receipt)
    }

    /// Drops all live data in favor of the seed datasets and persists them.
    pub fn reseed(&mut self) {
        self.state = ErpState::seeded();
        self.state.flush(&mut self.adapter);
    }

    pub fn into_backend(self) -> B {
        self.adapter.into_backend()
    }
}
