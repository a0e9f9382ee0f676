//! Map dataset records and time-series metadata.
//!
//! This module handles decoding the JSON payloads served for a dataset:
//! the sampled map points, the physical calibration arrays, and the
//! per-dataset time-series description.

mod dataset;
mod reader;
mod sample;

pub use dataset::SeriesInfo;
pub use reader::{
    load_calibration_values, load_samples, parse_calibration_values, parse_samples,
};
pub use sample::Sample;
