// Aggregate view over the whole state: the counts the dashboard and the
// per-page stat cards display. Everything is recomputed from the live
// collections on each call; at hundreds of records per store there is
// nothing worth caching incrementally.

use crate::state::ErpState;
use crate::status::Status;
use crate::storage_keys::StoreKey;
use crate::store::StatusCounts;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Serialize)]
pub struct StoreSummary {
    pub store: StoreKey,
    pub label: &'static str,
    pub counts: StatusCounts,
}

#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    /// Records across the laboratory stores (media, autoclave,
    /// subculture, incubation, indoor sampling).
    pub indoor_records: usize,
    /// Records across the field stores (hardening, mortality, holding,
    /// outdoor sampling).
    pub outdoor_records: usize,
    /// Plants in both hardening phases plus holding-area stock.
    pub total_plants: u64,
    /// Hardening plants grouped by crop.
    pub plants_by_crop: BTreeMap<String, u64>,
    /// Mean of the secondary-hardening survivability percentages.
    pub average_survivability: f64,
    pub total_mortality: u64,
    /// Contaminated records across every store.
    pub active_issues: usize,
    pub stores: Vec<StoreSummary>,
}

impl DashboardSummary {
    pub fn from_state(state: &ErpState) -> Self {
        let stores: Vec<StoreSummary> = StoreKey::ALL
            .iter()
            .map(|&store| StoreSummary {
                store,
                label: store.label(),
                counts: state.status_counts(store),
            })
            .collect();

        let indoor_keys = [
            StoreKey::MediaBatch,
            StoreKey::Autoclave,
            StoreKey::Subculture,
            StoreKey::Incubation,
            StoreKey::IndoorSampling,
        ];
        let indoor_records = indoor_keys
            .iter()
            .map(|&k| state.record_count(k))
            .sum::<usize>();
        let outdoor_records = StoreKey::ALL
            .iter()
            .filter(|&k| !indoor_keys.contains(k))
            .copied()
            .map(|k| state.record_count(k))
            .sum::<usize>();

        let mut plants_by_crop: BTreeMap<String, u64> = BTreeMap::new();
        for r in state.primary_hardening.records() {
            *plants_by_crop.entry(r.crop.clone()).or_default() += u64::from(r.plants);
        }
        for r in state.secondary_hardening.records() {
            *plants_by_crop.entry(r.crop.clone()).or_default() += u64::from(r.plants);
        }

        let hardening_plants = state.primary_hardening.sum_by(|r| u64::from(r.plants))
            + state.secondary_hardening.sum_by(|r| u64::from(r.plants));
        let holding_plants = state.holding_lots.sum_by(|r| u64::from(r.quantity));

        let active_issues = stores.iter().map(|s| s.counts.contaminated).sum();

        Self {
            indoor_records,
            outdoor_records,
            total_plants: hardening_plants + holding_plants,
            plants_by_crop,
            average_survivability: average_survivability(state),
            total_mortality: state.mortality_events.sum_by(|r| u64::from(r.mortality)),
            active_issues,
            stores,
        }
    }
}

/// Mean of the "96%"-style survivability strings, mirroring the original
/// page's parseFloat-and-round treatment (unparsable entries count as 0).
fn average_survivability(state: &ErpState) -> f64 {
    state.secondary_hardening.aggregate(|records| {
        if records.is_empty() {
            return 0.0;
        }
        let sum: f64 = records
            .iter()
            .map(|r| {
                r.survivability
                    .trim()
                    .trim_end_matches('%')
                    .parse::<f64>()
                    .unwrap_or(0.0)
            })
            .sum();
        sum / records.len() as f64
    })
}

/// Contaminated records across every store, with identifiers, for the
/// alerts panel.
pub fn contaminated_ids(state: &ErpState) -> Vec<(StoreKey, String)> {
    let mut out = Vec::new();
    for &store in &StoreKey::ALL {
        let rows = state
            .rows(store, "", crate::status::StatusFilter::Only(Status::Contaminated))
            .unwrap_or_default();
        for row in rows {
            if let Some(id) = row.get("id").and_then(|v| v.as_str()) {
                out.push((store, id.to_string()));
            }
        }
    }
    out
}
