use rpush_model::ModelError;
use thiserror::Error;

pub type ExecResult<T> = Result<T, ExecError>;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("missing program")]
    MissingProgram,
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("non-zero exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
    #[error("killed by signal: {stderr}")]
    KilledBySignal { stderr: String },
    /// Parser details stay in the source and out of the message.
    #[error("Decoding JSON response failed")]
    Decode(#[source] serde_json::Error),
    #[error("invalid snapshot record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ModelError,
    },
}
