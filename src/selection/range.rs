//! Pixel selections on a time-series plot to bin-aligned time ranges.

use crate::coords::AxisCalibration;
use crate::error::{Result, SweepmapError};
use std::num::NonZeroU64;

/// Smallest time step a selection can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinSize(NonZeroU64);

impl BinSize {
    /// Create a bin size; zero is rejected.
    pub fn new(size: u64) -> Result<Self> {
        NonZeroU64::new(size)
            .map(Self)
            .ok_or(SweepmapError::InvalidBinSize)
    }

    /// Bin size for an interval already known to be non-zero.
    pub(crate) fn from_interval(interval: u64) -> Self {
        Self(NonZeroU64::new(interval).unwrap_or(NonZeroU64::MIN))
    }

    /// The size as a plain integer.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Inclusive time range `[from_time, to_time]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// First time in the window.
    pub from_time: u64,
    /// Last time in the window.
    pub to_time: u64,
}

impl TimeWindow {
    /// Create a window, rejecting `from_time > to_time`.
    pub fn new(from_time: u64, to_time: u64) -> Result<Self> {
        if from_time > to_time {
            return Err(SweepmapError::InvalidWindow { from_time, to_time });
        }
        Ok(Self { from_time, to_time })
    }

    /// Distance between the bounds.
    pub fn range(&self) -> u64 {
        self.to_time.saturating_sub(self.from_time)
    }
}

/// Selection rectangle in screen pixels over a rendered time-series image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// Left edge.
    pub x1: i64,
    /// Top edge.
    pub y1: i64,
    /// Right edge.
    pub x2: i64,
    /// Bottom edge.
    pub y2: i64,
}

impl PixelRect {
    /// Create a rectangle from its corners.
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Result of [`repair_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRepair {
    /// The rectangle fitted to the data area.
    pub rect: PixelRect,
    /// Whether any edge had to move; the widget showing the selection
    /// should be updated when set.
    pub corrected: bool,
}

/// Pixel position within the plot's data area, in `[0, pixel_width]`.
pub fn normalize_pixel(x: i64, calibration: &AxisCalibration) -> i64 {
    calibration.normalize_pixel(x)
}

/// Fit a selection rectangle into the data area of a time-series plot.
///
/// `x1` is kept inside the data area, `x2` no further right than its right
/// edge, and the rectangle at least one pixel wide. Only the horizontal
/// edges are touched. Applying the repair twice changes nothing further.
pub fn repair_selection(rect: PixelRect, calibration: &AxisCalibration) -> SelectionRepair {
    let left = calibration.pixel_offset;
    let right = left.saturating_add(calibration.pixel_width.max(1));
    let mut fixed = rect;

    if fixed.x1 < left {
        fixed.x1 = left;
    }
    if fixed.x1 > right - 1 {
        fixed.x1 = right - 1;
    }
    if fixed.x2 > right {
        fixed.x2 = right;
    }
    if fixed.x2 <= fixed.x1 {
        fixed.x2 = fixed.x1 + 1;
    }

    let corrected = fixed != rect;
    if corrected {
        tracing::debug!(
            "Repaired selection x {}..{} to {}..{}",
            rect.x1,
            rect.x2,
            fixed.x1,
            fixed.x2
        );
    }
    SelectionRepair {
        rect: fixed,
        corrected,
    }
}

/// Time range under the pixel interval `[x1, x2]` of a plot showing `window`.
///
/// The start rounds down and the end rounds up to whole bins, so for a
/// bin-aligned `window.from_time` the result starts on a bin boundary and
/// ends one unit before one. The result is never empty: if rounding would
/// put the end before the start (a zero-length window, or an unrepaired
/// rectangle with `x2 <= x1`), it spans exactly one bin.
pub fn pixel_range_to_time_range(
    x1: i64,
    x2: i64,
    window: TimeWindow,
    calibration: &AxisCalibration,
    bin_size: BinSize,
) -> TimeWindow {
    let width = calibration.pixel_width.max(1) as u128;
    let bin = bin_size.get() as u128;
    let range = window.range() as u128;
    let start = normalize_pixel(x1, calibration) as u128;
    let end = normalize_pixel(x2, calibration) as u128;

    let lower = range * start / width;
    let upper = (range * end + width - 1) / width;
    let lower_bins = lower / bin;
    let upper_bins = ((upper + bin - 1) / bin).max(lower_bins + 1);

    let base = window.from_time as u128;
    TimeWindow {
        from_time: saturate(base + lower_bins * bin),
        to_time: saturate(base + upper_bins * bin - 1),
    }
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
