use serde::{Deserialize, Deserializer};

use crate::{ModelError, SnapshotTime};

/// One snapshot entry of `restic snapshots --json`.
///
/// Only the fields needed for metric labels and the sample value are kept; everything else restic emits is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapshotRecord {
    /// Machine the snapshot was taken on.
    pub hostname: String,
    /// Account that created the snapshot.
    pub username: String,
    /// Backup source paths. Required, may be empty.
    pub paths: Vec<String>,
    /// Snapshot tags. restic omits the field when there are none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Creation time, e.g. `2024-03-01T10:15:30.123456789+01:00`.
    pub time: SnapshotTime,
}

impl SnapshotRecord {
    /// Create a record without paths or tags.
    pub fn new<H, U, T>(hostname: H, username: U, time: T) -> Self
    where
        H: Into<String>,
        U: Into<String>,
        T: Into<String>,
    {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            paths: Vec::new(),
            tags: Vec::new(),
            time: time.into(),
        }
    }

    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the snapshot carries at least one tag.
    #[inline]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Check that identity and time fields are non-empty.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.hostname.is_empty() {
            return Err(ModelError::EmptyField("hostname"));
        }
        if self.username.is_empty() {
            return Err(ModelError::EmptyField("username"));
        }
        if self.time.is_empty() {
            return Err(ModelError::EmptyField("time"));
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
