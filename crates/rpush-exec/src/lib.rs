mod error;
pub use error::{ExecError, ExecResult};

mod util;

pub mod inventory;
pub use inventory::{InventoryConfig, InventoryFetcher, decode_snapshots};
