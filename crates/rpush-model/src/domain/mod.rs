mod snapshot;
pub use snapshot::SnapshotRecord;

mod error;
pub use error::ModelError;

/// Raw snapshot timestamp as emitted by restic (extended ISO-8601).
pub type SnapshotTime = String;
