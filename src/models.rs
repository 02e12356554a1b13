use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Identifier assigned to a record when it is first stored
pub type RecordId = i64;

/// Caller-supplied record content, kept in the order it was submitted
pub type RecordFields = Map<String, JsonValue>;

/// Keys owned by the server; caller values for these are discarded
pub const RESERVED_FIELDS: [&str; 2] = ["id", "server_synced_at"];

/// A stored record: arbitrary caller fields plus the two server-assigned ones.
///
/// Serializes flat, caller fields first, e.g.
/// `{"name":"Alice","id":1714564800000,"server_synced_at":"2024-05-01T12:00:00.000Z"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub fields: RecordFields,
    pub id: RecordId,
    #[serde(with = "timestamp")]
    pub server_synced_at: DateTime<Utc>,
}

impl Record {
    /// Build a record from a payload, stripping any reserved keys it carries
    pub fn new(mut fields: RecordFields, id: RecordId, server_synced_at: DateTime<Utc>) -> Self {
        for key in RESERVED_FIELDS {
            fields.shift_remove(key);
        }
        Self {
            fields,
            id,
            server_synced_at,
        }
    }
}

/// Combined view of every collection, returned by the sync endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SyncSnapshot {
    pub maternal: Vec<Record>,
    pub child: Vec<Record>,
    pub growth: Vec<Record>,
    #[serde(with = "timestamp")]
    pub synced_at: DateTime<Utc>,
}

/// ISO-8601 UTC timestamps with millisecond precision and a `Z` suffix
pub mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn format(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
