//! Error types for predictor configuration and trace I/O.

use thiserror::Error;

/// A rejected predictor configuration.
///
/// Raised at construction time only; a successfully built predictor
/// never fails during a trace pass.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("table size must be nonzero")]
    ZeroTableSize,

    #[error("history width {0} is out of range (1..={max})", max = usize::BITS)]
    HistoryWidth(usize),

    #[error("training threshold must be non-negative (got {0})")]
    NegativeThreshold(f64),

    #[error("at least one tagged table is required")]
    ZeroTableCount,
}

/// Failure to load or save a trace dataset.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed trace file: {0}")]
    Csv(#[from] csv::Error),

    #[error("no usable records in {0}")]
    Empty(String),
}
