//! Persisted snapshot format.
//!
//! Collections and the profile are stored inside a small envelope:
//!
//! ```json
//! {"version": 1, "data": [ ... ]}
//! ```
//!
//! A bare JSON value (no envelope) is the unversioned layout written before
//! the envelope existed and is read as version 0.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const SCHEMA_VERSION: u64 = 1;

const VERSION_FIELD: &str = "version";
const DATA_FIELD: &str = "data";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot version field is not an unsigned integer")]
    InvalidVersion,

    #[error("snapshot version {found} is newer than supported version {}", SCHEMA_VERSION)]
    UnsupportedVersion { found: u64 },
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u64,
    data: &'a T,
}

/// Serialize `data` at the current schema version
pub fn encode<T: Serialize>(data: &T) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        data,
    })?)
}

/// Parse a stored snapshot, upgrading older layouts first
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, SnapshotError> {
    let value: Value = serde_json::from_str(raw)?;

    let (version, data) = match value {
        Value::Object(mut map) if map.contains_key(VERSION_FIELD) => {
            let version = map
                .get(VERSION_FIELD)
                .and_then(Value::as_u64)
                .ok_or(SnapshotError::InvalidVersion)?;
            let data = map.remove(DATA_FIELD).unwrap_or(Value::Null);
            (version, data)
        }
        legacy => (0, legacy),
    };

    let data = upgrade(version, data)?;
    Ok(serde_json::from_value(data)?)
}

/// Bring `data` from `version` up to `SCHEMA_VERSION`
fn upgrade(version: u64, data: Value) -> Result<Value, SnapshotError> {
    match version {
        // v0 -> v1 only added the envelope; record shape is unchanged
        0 | SCHEMA_VERSION => Ok(data),
        found => Err(SnapshotError::UnsupportedVersion { found }),
    }
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Only the exact string "true" counts as set
pub fn decode_flag(raw: &str) -> bool {
    raw == "true"
}
