// Generic record store: one ordered, uniquely keyed collection per domain
// area. Nine UI slices in the original application each re-derived this by
// hand; here it exists once and is instantiated per record type.

use crate::error::VitroLabError;
use crate::records::DomainRecord;
use crate::status::{Status, StatusFilter};
use crate::storage_keys::StoreKey;
use itertools::Itertools;
use serde::Serialize;

/// Counts by lifecycle status, recomputed from the live collection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub active: usize,
    pub completed: usize,
    pub contaminated: usize,
}

impl StatusCounts {
    pub fn of(statuses: impl Iterator<Item = Status>) -> Self {
        let by_status = statuses.counts();
        let count = |status: Status| by_status.get(&status).copied().unwrap_or(0);
        Self {
            total: by_status.values().sum(),
            pending: count(Status::Pending),
            active: count(Status::Active),
            completed: count(Status::Completed),
            contaminated: count(Status::Contaminated),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordStore<R: DomainRecord> {
    records: Vec<R>,
}

impl<R: DomainRecord> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DomainRecord> RecordStore<R> {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    /// Wraps an already-persisted collection. Hydration trusts its input;
    /// uniqueness is enforced on the mutation path.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn key(&self) -> StoreKey {
        R::STORE
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Appends a record; insertion order is display order. Rejects an
    /// identifier the store already holds.
    pub fn add(&mut self, record: R) -> Result<(), VitroLabError> {
        record.validate()?;
        if self.get(record.id()).is_some() {
            return Err(VitroLabError::DuplicateKey {
                store: R::STORE,
                id: record.id().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Replaces the record with the same identifier wholesale. No merge
    /// with previous field values takes place.
    pub fn update(&mut self, record: R) -> Result<(), VitroLabError> {
        record.validate()?;
        let index = self
            .records
            .iter()
            .position(|r| r.id() == record.id())
            .ok_or_else(|| VitroLabError::NotFound {
                store: R::STORE,
                id: record.id().to_string(),
            })?;
        self.records[index] = record;
        Ok(())
    }

    /// Removes the record with the given identifier. Idempotent: an absent
    /// identifier is a no-op, reported through the return value.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    /// The combined search the UIs apply: case-insensitive substring match
    /// against any scalar field (an empty term matches everything), AND an
    /// exact status filter. Lazy and restartable; collection order is
    /// preserved.
    pub fn query<'a>(
        &'a self,
        search: &str,
        filter: StatusFilter,
    ) -> impl Iterator<Item = &'a R> + 'a {
        self.query_where(search, filter, |_| true)
    }

    /// `query` with an additional store-specific predicate.
    pub fn query_where<'a, P>(
        &'a self,
        search: &str,
        filter: StatusFilter,
        extra: P,
    ) -> impl Iterator<Item = &'a R> + 'a
    where
        P: Fn(&R) -> bool + 'a,
    {
        let needle = search.to_lowercase();
        self.records.iter().filter(move |r| {
            Self::matches_search(r, &needle) && filter.matches(r.status()) && extra(r)
        })
    }

    /// Query scoped to records referencing one batch code exactly.
    pub fn query_batch<'a>(
        &'a self,
        search: &str,
        filter: StatusFilter,
        batch: &'a str,
    ) -> impl Iterator<Item = &'a R> + 'a {
        self.query_where(search, filter, move |r| r.batch_ref() == Some(batch))
    }

    fn matches_search(record: &R, needle: &str) -> bool {
        needle.is_empty()
            || record
                .field_text()
                .iter()
                .any(|value| value.to_lowercase().contains(needle))
    }

    /// Derived statistics over the live collection.
    pub fn aggregate<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        f(&self.records)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::of(self.records.iter().map(|r| r.status()))
    }

    pub fn sum_by(&self, f: impl Fn(&R) -> u64) -> u64 {
        self.records.iter().map(f).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MediaBatchRecord;

    fn batch(id: &str, prepared_by: &str, status: Status) -> MediaBatchRecord {
        MediaBatchRecord {
            id: id.to_string(),
            prep_date: "2024-11-18".into(),
            media_type: "MS Medium".into(),
            quantity: "5L".into(),
            p_h: "5.8".into(),
            prepared_by: prepared_by.to_string(),
            status,
        }
    }

    fn seeded() -> RecordStore<MediaBatchRecord> {
        let mut store = RecordStore::new();
        store
            .add(batch("MB-2024-001", "Rajesh Kumar", Status::Completed))
            .unwrap();
        store
            .add(batch("MB-2024-002", "Priya Sharma", Status::Active))
            .unwrap();
        store
            .add(batch("MB-2024-003", "Amit Patel", Status::Pending))
            .unwrap();
        store
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = seeded();
        let ids: Vec<&str> = store.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["MB-2024-001", "MB-2024-002", "MB-2024-003"]);
    }

    #[test]
    fn add_rejects_duplicate_identifier() {
        let mut store = seeded();
        let err = store
            .add(batch("MB-2024-001", "Someone Else", Status::Pending))
            .expect_err("duplicate must be rejected");
        assert!(matches!(err, VitroLabError::DuplicateKey { .. }), "{err}");
        assert_eq!(store.len(), 3, "rejected add leaves the collection alone");
    }

    #[test]
    fn update_replaces_the_record_wholesale() {
        let mut store = seeded();
        let replacement = batch("MB-2024-001", "Sunita Verma", Status::Contaminated);
        store.update(replacement.clone()).unwrap();
        assert_eq!(store.get("MB-2024-001"), Some(&replacement));
        // Position in the collection is unchanged.
        assert_eq!(store.records()[0].id(), "MB-2024-001");
    }

    #[test]
    fn update_unknown_identifier_is_not_found() {
        let mut store = seeded();
        let err = store
            .update(batch("MB-2024-099", "Nobody", Status::Pending))
            .expect_err("unknown id");
        assert!(matches!(err, VitroLabError::NotFound { .. }), "{err}");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = seeded();
        assert!(store.delete("MB-2024-002"));
        let after_first: Vec<String> =
            store.records().iter().map(|r| r.id().to_string()).collect();
        assert!(!store.delete("MB-2024-002"));
        let after_second: Vec<String> =
            store.records().iter().map(|r| r.id().to_string()).collect();
        assert_eq!(after_first, after_second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_across_any_field() {
        let store = seeded();
        let hits: Vec<&str> = store
            .query("rajesh", StatusFilter::All)
            .map(|r| r.id())
            .collect();
        assert_eq!(hits, vec!["MB-2024-001"]);

        let hits: Vec<&str> = store
            .query("RAJESH", StatusFilter::All)
            .map(|r| r.id())
            .collect();
        assert_eq!(hits, vec!["MB-2024-001"]);

        assert_eq!(store.query("nonexistent", StatusFilter::All).count(), 0);

        // Matching any single field is enough; "medium" hits every record.
        assert_eq!(store.query("medium", StatusFilter::All).count(), 3);
    }

    #[test]
    fn empty_search_matches_everything() {
        let store = seeded();
        assert_eq!(store.query("", StatusFilter::All).count(), 3);
    }

    #[test]
    fn status_filter_is_exact() {
        let store = seeded();
        let hits: Vec<&str> = store
            .query("", StatusFilter::Only(Status::Completed))
            .map(|r| r.id())
            .collect();
        assert_eq!(hits, vec!["MB-2024-001"]);
    }

    #[test]
    fn query_is_restartable() {
        let store = seeded();
        let query = store.query("medium", StatusFilter::All);
        assert_eq!(query.count(), 3);
        // A fresh call walks the collection again from the start.
        assert_eq!(store.query("medium", StatusFilter::All).count(), 3);
    }

    #[test]
    fn query_where_conjoins_the_extra_predicate() {
        let store = seeded();
        let hits: Vec<&str> = store
            .query_where("", StatusFilter::All, |r| r.p_h == "5.8")
            .map(|r| r.id())
            .collect();
        assert_eq!(hits, vec!["MB-2024-001", "MB-2024-002", "MB-2024-003"]);

        let hits = store
            .query_where("rajesh", StatusFilter::Only(Status::Pending), |_| true)
            .count();
        assert_eq!(hits, 0, "search and filter are a conjunction");
    }

    #[test]
    fn query_batch_scopes_to_one_batch_code() {
        use crate::records::AutoclaveRecord;

        let cycle = |id: &str, batch: &str, status| AutoclaveRecord {
            id: id.to_string(),
            date: "2024-11-18".into(),
            batch: batch.to_string(),
            temperature: "121°C".into(),
            pressure: "15 PSI".into(),
            duration: "45 min".into(),
            status,
        };

        let mut store = RecordStore::new();
        store.add(cycle("AC-001", "MB-2024-001", Status::Completed)).unwrap();
        store.add(cycle("AC-002", "MB-2024-002", Status::Completed)).unwrap();
        store.add(cycle("AC-003", "MB-2024-001", Status::Pending)).unwrap();

        let hits: Vec<&str> = store
            .query_batch("", StatusFilter::All, "MB-2024-001")
            .map(|r| r.id())
            .collect();
        assert_eq!(hits, vec!["AC-001", "AC-003"]);

        let hits: Vec<&str> = store
            .query_batch("", StatusFilter::Only(Status::Completed), "MB-2024-001")
            .map(|r| r.id())
            .collect();
        assert_eq!(hits, vec!["AC-001"]);
    }

    #[test]
    fn status_counts_and_aggregate_read_the_live_collection() {
        let mut store = seeded();
        let counts = store.status_counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.active, 1);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.contaminated, 0);

        store
            .update(batch("MB-2024-002", "Priya Sharma", Status::Contaminated))
            .unwrap();
        assert_eq!(store.status_counts().contaminated, 1);

        let longest = store.aggregate(|records| {
            records
                .iter()
                .map(|r| r.prepared_by.len())
                .max()
                .unwrap_or(0)
        });
        assert_eq!(longest, "Rajesh Kumar".len());
    }
}
