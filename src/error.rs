//! Error types for Sweepmap.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sweepmap operations.
pub type Result<T> = std::result::Result<T, SweepmapError>;

/// Errors that can occur in Sweepmap.
#[derive(Debug, Error)]
pub enum SweepmapError {
    /// A map dataset contained no samples.
    #[error("Map dataset is empty")]
    EmptyDataset,

    /// A sample carried a NaN or infinite value.
    #[error("Non-finite value at ({x_index}, {y_index})")]
    NonFiniteValue { x_index: usize, y_index: usize },

    /// The sampled points do not cover their bounding rectangle.
    #[error("Map dataset has no sample at ({x_index}, {y_index})")]
    MissingCell { x_index: usize, y_index: usize },

    /// Grid storage could not take the aggregated shape.
    #[error("Grid shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// A layout or axis calibration is unusable.
    #[error("Invalid calibration: {0}")]
    InvalidCalibration(String),

    /// A time window with its bounds reversed.
    #[error("Invalid time window: from {from_time} is after to {to_time}")]
    InvalidWindow { from_time: u64, to_time: u64 },

    /// Time-series metadata that cannot describe a series.
    #[error("Invalid time series: {0}")]
    InvalidSeries(String),

    /// A bin size of zero.
    #[error("Bin size must be greater than zero")]
    InvalidBinSize,

    /// A zoom window size of zero.
    #[error("Window size must be greater than zero")]
    InvalidWindowSize,

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed request base URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SweepmapError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an InvalidCalibration error.
    pub fn invalid_calibration(msg: impl Into<String>) -> Self {
        Self::InvalidCalibration(msg.into())
    }

    /// Create an InvalidSeries error.
    pub fn invalid_series(msg: impl Into<String>) -> Self {
        Self::InvalidSeries(msg.into())
    }
}
