use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cs::select::Algorithm;

/// Errors produced by the selection algorithms and the harness around them.
#[derive(Debug, Error)]
pub enum Error {
    /// `k` is outside `[1, len]`. An empty input always lands here.
    #[error("invalid rank: k = {k} is outside [1, {len}]")]
    InvalidRank { k: usize, len: usize },

    /// An algorithm returned a different value than the reference algorithm
    /// for the same input and rank.
    #[error("{algorithm} returned {found}, expected {expected}")]
    Disagreement {
        algorithm: Algorithm,
        expected: String,
        found: String,
    },

    /// The result sink could not be created or written.
    #[error("failed to write results to {}: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
