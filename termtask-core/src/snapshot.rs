//! Snapshot codec for the persisted task collection.
//!
//! The full collection is serialized as one JSON array of task records,
//! written under a fixed path on every mutation and reloaded once at
//! startup. There is no schema version field and no migration path; a
//! shape change requires a coordinated reader/writer update.

use crate::task::Task;

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The collection could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    /// The stored blob is not a valid task collection.
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encodes the full task collection as a JSON snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode(tasks: &[Task]) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(tasks).map_err(SnapshotError::Encode)
}

/// Decodes a JSON snapshot back into the task collection.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] if the blob is corrupt or does not
/// match the task record shape.
pub fn decode(blob: &str) -> Result<Vec<Task>, SnapshotError> {
    serde_json::from_str(blob).map_err(SnapshotError::Decode)
}
