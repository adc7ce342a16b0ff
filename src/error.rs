use crate::config::{ListFormat, SourceId};
use std::path::PathBuf;
use thiserror::Error;

// Conditions that abort a run. Per-line oddities never end up here.
#[derive(Error, Debug)]
pub enum MinerError {
    #[error("No word sources enabled")]
    NoSourcesEnabled,
    #[error("Source {id} cannot read {format} input {}", path.display())]
    FormatMismatch { id: SourceId, format: ListFormat, path: PathBuf },
    #[error("Source {id} unavailable: {} does not exist", path.display())]
    SourceUnavailable { id: SourceId, path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, MinerError>;

impl MinerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
