use tracing::{debug, trace};

use rpush_model::SnapshotRecord;

use crate::{
    error::{ExecError, ExecResult},
    util::cmd_program,
};

/// Default inventory binary, resolved through `PATH`.
pub const RESTIC_PROGRAM: &str = "restic";

/// Latest snapshot only, compact JSON on stdout.
pub const RESTIC_LATEST_ARGS: [&str; 5] = ["snapshots", "--latest", "1", "--compact", "--json"];

/// Inventory command configuration.
#[derive(Clone, Debug)]
pub struct InventoryConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl InventoryConfig {
    /// `restic snapshots --latest 1 --compact --json` using the given binary.
    pub fn restic(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: RESTIC_LATEST_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::restic(RESTIC_PROGRAM)
    }
}

/// Runs the inventory command once and decodes its output.
pub struct InventoryFetcher {
    cfg: InventoryConfig,
}

impl InventoryFetcher {
    pub fn new(cfg: InventoryConfig) -> Self {
        Self { cfg }
    }

    /// Run the command to completion and decode stdout.
    ///
    /// No timeout is applied; the call lasts as long as the command does.
    pub async fn fetch(&self) -> ExecResult<Vec<SnapshotRecord>> {
        if self.cfg.program.is_empty() {
            return Err(ExecError::MissingProgram);
        }

        trace!(target: "rpush.exec", program = %self.cfg.program, args = ?self.cfg.args, "spawn");

        let output = cmd_program(&self.cfg.program, &self.cfg.args)
            .output()
            .await
            .map_err(|e| ExecError::Spawn(format!("{}: {e}", self.cfg.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(match output.status.code() {
                Some(code) => {
                    debug!(target: "rpush.exec", code, "exit non-zero");
                    ExecError::NonZeroExit { code, stderr }
                }
                None => ExecError::KilledBySignal { stderr },
            });
        }

        let records = decode_snapshots(&output.stdout)?;
        debug!(target: "rpush.exec", count = records.len(), "snapshots decoded");
        Ok(records)
    }
}

/// Decode a JSON array of snapshot records and check each one.
pub fn decode_snapshots(raw: &[u8]) -> ExecResult<Vec<SnapshotRecord>> {
    let records: Vec<SnapshotRecord> = serde_json::from_slice(raw).map_err(ExecError::Decode)?;
    for (index, rec) in records.iter().enumerate() {
        rec.validate()
            .map_err(|source| ExecError::InvalidRecord { index, source })?;
    }
    Ok(records)
}
