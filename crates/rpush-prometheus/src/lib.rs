//! Prometheus text exposition for restic snapshots.
//!
//! Renders one `restic_last_snapshot` counter sample per [`rpush_model::SnapshotRecord`], with the snapshot creation time as the value.
//!
//! ## Example
//! ```rust
//! use rpush_model::SnapshotRecord;
//! use rpush_prometheus::{LocalZone, Renderer};
//! use time::UtcOffset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshots = vec![
//!     SnapshotRecord::new("backup01", "root", "2024-03-01T10:15:30.123456")
//!         .with_paths(["/srv", "/etc"]),
//! ];
//!
//! let renderer = Renderer::new(LocalZone::Fixed(UtcOffset::UTC));
//! let exposition = renderer.render(&snapshots)?;
//! assert_eq!(
//!     exposition.as_str(),
//!     "# TYPE restic_last_snapshot counter\n\
//!      restic_last_snapshot{hostname=\"backup01\",username=\"root\",paths=\"/etc,/srv\"} 1709288130\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `restic_last_snapshot{hostname, username, paths[, tags]}` - Counter
//!
//! Label values are written verbatim. Quotes, backslashes or newlines in hostnames, paths or tags are not escaped.

mod error;
pub use error::RenderError;

mod exposition;
pub use exposition::{Exposition, METRIC_NAME, Renderer};

mod timestamp;
pub use timestamp::{LocalZone, epoch_seconds};

/// Content type of the text exposition format.
pub use prometheus::TEXT_FORMAT as CONTENT_TYPE;
