use thiserror::Error;

use crate::tokenizer::{ScanError, SourceError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type InternalResult<T> = Result<T, Error>;
