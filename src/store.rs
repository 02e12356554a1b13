use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Record, RecordFields, RecordId, SyncSnapshot};

/// The record categories the service keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Maternal,
    Child,
    Growth,
}

impl CollectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Maternal => "maternal",
            CollectionKind::Child => "child",
            CollectionKind::Growth => "growth",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct CollectionInner {
    records: Vec<Record>,
    last_id: RecordId,
}

impl CollectionInner {
    /// Millisecond-epoch ids, bumped past the last issued one so that two
    /// creates within the same millisecond never collide.
    fn next_id(&mut self, now_ms: RecordId) -> RecordId {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

/// Insertion-ordered collection of records of one category.
///
/// Reads share the lock; `create` and `replace` hold the write lock for their
/// whole read-modify-write step, so id assignment and in-place replacement
/// never interleave.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    kind: CollectionKind,
    inner: Arc<RwLock<CollectionInner>>,
}

impl RecordCollection {
    pub fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            inner: Arc::new(RwLock::new(CollectionInner::default())),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Every record currently held, in insertion order
    pub async fn list(&self) -> Vec<Record> {
        self.inner.read().await.records.clone()
    }

    /// First record with the given id, if any
    pub async fn get(&self, id: RecordId) -> Option<Record> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|record| record.id == id).cloned()
    }

    /// Append a new record built from `fields` and return the stored copy
    pub async fn create(&self, fields: RecordFields) -> Record {
        let now = Utc::now();
        let mut inner = self.inner.write().await;
        let id = inner.next_id(now.timestamp_millis());
        let record = Record::new(fields, id, now);
        inner.records.push(record.clone());

        tracing::debug!("Appended {} record with id: {}", self.kind, id);
        record
    }

    /// Replace the record with `id` wholesale, keeping its position.
    ///
    /// Fields absent from `fields` are dropped. Returns `None` and leaves the
    /// collection untouched when no record has that id.
    pub async fn replace(&self, id: RecordId, fields: RecordFields) -> Option<Record> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        let record = Record::new(fields, id, Utc::now());
        inner.records[index] = record.clone();

        tracing::debug!("Replaced {} record with id: {}", self.kind, id);
        Some(record)
    }
}

/// Owns the three record collections for the lifetime of the process
#[derive(Debug, Clone)]
pub struct RecordStore {
    pub maternal: RecordCollection,
    pub child: RecordCollection,
    pub growth: RecordCollection,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            maternal: RecordCollection::new(CollectionKind::Maternal),
            child: RecordCollection::new(CollectionKind::Child),
            growth: RecordCollection::new(CollectionKind::Growth),
        }
    }

    /// Current contents of all three collections, stamped with one timestamp
    pub async fn snapshot(&self) -> SyncSnapshot {
        SyncSnapshot {
            maternal: self.maternal.list().await,
            child: self.child.list().await,
            growth: self.growth.list().await,
            synced_at: Utc::now(),
        }
    }
}
