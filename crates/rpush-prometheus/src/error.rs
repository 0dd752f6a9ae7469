use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid snapshot time: {0:?}")]
    InvalidTime(String),
}
