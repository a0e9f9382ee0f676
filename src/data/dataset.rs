//! Time-series metadata for a dataset.

use crate::error::{Result, SweepmapError};
use crate::selection::{BinSize, TimeWindow};
use std::ops::Range;

/// Shape of the time series recorded at every map point.
///
/// Both fields are non-zero and their product fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesInfo {
    length: u64,
    sample_interval: u64,
}

impl SeriesInfo {
    /// Create series metadata, rejecting empty series and zero intervals.
    pub fn new(length: u64, sample_interval: u64) -> Result<Self> {
        if length == 0 {
            return Err(SweepmapError::invalid_series("series length is zero"));
        }
        if sample_interval == 0 {
            return Err(SweepmapError::invalid_series("sample interval is zero"));
        }
        length
            .checked_mul(sample_interval)
            .ok_or_else(|| SweepmapError::invalid_series("total duration overflows"))?;
        Ok(Self {
            length,
            sample_interval,
        })
    }

    /// Number of samples per series.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Time between consecutive samples.
    pub fn sample_interval(&self) -> u64 {
        self.sample_interval
    }

    /// Length of the whole series in time units.
    pub fn total_duration(&self) -> u64 {
        self.length * self.sample_interval
    }

    /// The default window `[0, total_duration - 1]`.
    pub fn full_window(&self) -> TimeWindow {
        TimeWindow {
            from_time: 0,
            to_time: self.total_duration() - 1,
        }
    }

    /// Selections snap to the sampling interval.
    pub fn bin_size(&self) -> BinSize {
        BinSize::from_interval(self.sample_interval)
    }

    /// Sample indices covered by a time window.
    ///
    /// The start rounds down and the end rounds up to whole samples, and the
    /// range never extends past the end of the series.
    pub fn sample_range(&self, window: TimeWindow) -> Range<usize> {
        let interval = self.sample_interval;
        let from = (window.from_time / interval).min(self.length);
        let to = (window.to_time / interval + u64::from(window.to_time % interval != 0))
            .min(self.length);
        from as usize..to.max(from) as usize
    }
}
