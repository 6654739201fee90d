//! In-memory record store implementation.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use recordzone_core::storage::{
    Cursor, DeleteOutcome, QueryPage, RawRecord, RecordId, RecordStore, Result, SaveOutcome,
    SavePolicy, StoreError, ZoneId,
};

/// Default number of records per query page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A call the store can receive, used to script faults and count requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreCall {
    CreateZone,
    Query,
    Upsert,
    Delete,
}

/// How the store answers a scripted call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Handle the call normally.
    Pass,
    /// Fail with this error without touching stored data.
    Fail(StoreError),
    /// Apply the change, then report this count instead of 1 (upsert and delete only).
    Miscount(usize),
}

/// In-memory record store.
///
/// Records keep insertion order within a zone; updating a record keeps its
/// position. A query cursor is the insertion key of the last record returned,
/// so deletes between pages never shift unread records out of view.
/// Operations on a zone that was never created fail with `NotFound`, like a
/// real backend would.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore {
    zones: Arc<RwLock<HashMap<ZoneId, ZoneRecords>>>,
    page_size: usize,
    faults: Arc<Mutex<HashMap<StoreCall, VecDeque<Fault>>>>,
    calls: Arc<Mutex<HashMap<StoreCall, usize>>>,
}

/// Records of one zone keyed by insertion sequence.
#[derive(Debug, Default)]
struct ZoneRecords {
    next_seq: u64,
    records: BTreeMap<u64, RawRecord>,
}

impl ZoneRecords {
    fn find_mut(&mut self, id: &RecordId) -> Option<&mut RawRecord> {
        self.records.values_mut().find(|r| r.id == *id)
    }

    fn seq_of(&self, id: &RecordId) -> Option<u64> {
        self.records
            .iter()
            .find(|(_, r)| r.id == *id)
            .map(|(seq, _)| *seq)
    }

    fn push(&mut self, record: RawRecord) {
        self.records.insert(self.next_seq, record);
        self.next_seq += 1;
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Creates an empty store with the default page size.
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(HashMap::new())),
            page_size: DEFAULT_PAGE_SIZE,
            faults: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Sets the maximum number of records returned per page (at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Queues faults for upcoming calls of one kind, consumed in order.
    /// Calls beyond the queued faults are handled normally.
    pub async fn script(&self, call: StoreCall, faults: impl IntoIterator<Item = Fault>) {
        let mut scripted = self.faults.lock().await;
        scripted.entry(call).or_default().extend(faults);
    }

    /// Number of calls of one kind received so far, faulted ones included.
    pub async fn call_count(&self, call: StoreCall) -> usize {
        let calls = self.calls.lock().await;
        calls.get(&call).copied().unwrap_or(0)
    }

    async fn next_fault(&self, call: StoreCall) -> Fault {
        *self.calls.lock().await.entry(call).or_insert(0) += 1;
        let mut scripted = self.faults.lock().await;
        scripted
            .get_mut(&call)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Fault::Pass)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_zone(&self, zone: &ZoneId) -> Result<()> {
        if let Fault::Fail(err) = self.next_fault(StoreCall::CreateZone).await {
            return Err(err);
        }

        let mut zones = self.zones.write().await;
        zones.entry(zone.clone()).or_default();
        Ok(())
    }

    async fn query(
        &self,
        zone: &ZoneId,
        record_type: &str,
        cursor: Option<&Cursor>,
    ) -> Result<QueryPage> {
        if let Fault::Fail(err) = self.next_fault(StoreCall::Query).await {
            return Err(err);
        }

        let after = match cursor {
            Some(cursor) => Bound::Excluded(parse_seq(cursor)?),
            None => Bound::Unbounded,
        };

        let zones = self.zones.read().await;
        let zone_records = zones.get(zone).ok_or_else(|| zone_not_found(zone))?;
        let mut matching = zone_records
            .records
            .range((after, Bound::Unbounded))
            .filter(|(_, r)| r.record_type == record_type);

        let mut page = Vec::new();
        let mut last_seq = None;
        for (seq, record) in matching.by_ref().take(self.page_size) {
            page.push(record.clone());
            last_seq = Some(*seq);
        }
        let next_cursor = match (last_seq, matching.next()) {
            (Some(seq), Some(_)) => Some(Cursor::new(seq.to_string())),
            _ => None,
        };

        Ok(QueryPage::new(page, next_cursor))
    }

    async fn upsert(&self, record: &RawRecord, policy: SavePolicy) -> Result<SaveOutcome> {
        let fault = self.next_fault(StoreCall::Upsert).await;
        if let Fault::Fail(err) = fault {
            return Err(err);
        }

        let mut zones = self.zones.write().await;
        let zone_records = zones
            .get_mut(&record.id.zone)
            .ok_or_else(|| zone_not_found(&record.id.zone))?;

        match zone_records.find_mut(&record.id) {
            Some(existing) => merge(existing, record, policy),
            None => zone_records.push(stored_form(record)),
        }

        let saved_count = match fault {
            Fault::Miscount(count) => count,
            _ => 1,
        };
        Ok(SaveOutcome { saved_count })
    }

    async fn delete(&self, id: &RecordId) -> Result<DeleteOutcome> {
        let fault = self.next_fault(StoreCall::Delete).await;
        if let Fault::Fail(err) = fault {
            return Err(err);
        }

        let mut zones = self.zones.write().await;
        let zone_records = zones
            .get_mut(&id.zone)
            .ok_or_else(|| zone_not_found(&id.zone))?;

        let seq = zone_records
            .seq_of(id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: "Record",
                id: id.to_string(),
            })?;
        zone_records.records.remove(&seq);

        let deleted_count = match fault {
            Fault::Miscount(count) => count,
            _ => 1,
        };
        Ok(DeleteOutcome { deleted_count })
    }
}

/// The record as stored: cleared fields dropped.
fn stored_form(record: &RawRecord) -> RawRecord {
    let mut stored = record.clone();
    stored.fields.retain(|_, value| value.is_some());
    stored
}

fn merge(existing: &mut RawRecord, incoming: &RawRecord, policy: SavePolicy) {
    match policy {
        SavePolicy::AllKeys => *existing = stored_form(incoming),
        SavePolicy::ChangedKeys => {
            existing.record_type = incoming.record_type.clone();
            for (name, value) in &incoming.fields {
                match value {
                    Some(value) => {
                        existing.fields.insert(name.clone(), Some(value.clone()));
                    }
                    None => {
                        existing.fields.remove(name);
                    }
                }
            }
        }
    }
}

fn parse_seq(cursor: &Cursor) -> Result<u64> {
    cursor
        .as_str()
        .parse()
        .map_err(|_| StoreError::Serialization(format!("Invalid cursor: {}", cursor.as_str())))
}

fn zone_not_found(zone: &ZoneId) -> StoreError {
    StoreError::NotFound {
        entity_type: "Zone",
        id: zone.to_string(),
    }
}
