//! Storage layer for studyflow.
//!
//! One JSON snapshot file holds the whole session log; there is no
//! partial update path.

mod snapshot;

pub use snapshot::SnapshotStore;
