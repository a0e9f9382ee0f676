//! Fixed-size neighbourhood of a map cell, used for the magnified zoom view.

use super::Grid;
use crate::data::Sample;
use crate::error::{Result, SweepmapError};
use ndarray::{s, ArrayView2};

/// A square neighbourhood of grid cells around a center index.
#[derive(Debug, Clone)]
pub struct LocalWindow<'a> {
    origin_x: usize,
    origin_y: usize,
    center: (usize, usize),
    requested: usize,
    cells: ArrayView2<'a, Sample>,
}

impl<'a> LocalWindow<'a> {
    /// Absolute index of the top-left cell.
    pub fn origin(&self) -> (usize, usize) {
        (self.origin_x, self.origin_y)
    }

    /// Number of columns in the window.
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of rows in the window.
    pub fn height(&self) -> usize {
        self.cells.ncols()
    }

    /// Cells indexed `[x - origin_x, y - origin_y]`.
    pub fn cells(&self) -> ArrayView2<'a, Sample> {
        self.cells.clone()
    }

    /// Whether the grid was too small for the requested size in at least
    /// one dimension.
    pub fn is_partial(&self) -> bool {
        self.width() < self.requested || self.height() < self.requested
    }

    /// Whether `sample` is the cell the window was centered on.
    pub fn is_center(&self, sample: &Sample) -> bool {
        (sample.x_index, sample.y_index) == self.center
    }
}

/// Extract a `window_size x window_size` neighbourhood of `(center_x, center_y)`.
///
/// The window is centered where possible and shifted, never shrunk, to stay
/// inside the grid. A grid smaller than `window_size` in a dimension yields
/// that whole dimension instead; check [`LocalWindow::is_partial`].
pub fn extract_window(
    grid: &Grid,
    center_x: usize,
    center_y: usize,
    window_size: usize,
) -> Result<LocalWindow<'_>> {
    if window_size == 0 {
        return Err(SweepmapError::InvalidWindowSize);
    }

    let col = center_x.saturating_sub(grid.min_x());
    let row = center_y.saturating_sub(grid.min_y());
    let (left, right) = span(col, window_size, grid.x_size());
    let (top, bottom) = span(row, window_size, grid.y_size());

    let window = LocalWindow {
        origin_x: left + grid.min_x(),
        origin_y: top + grid.min_y(),
        center: (center_x, center_y),
        requested: window_size,
        cells: grid.cells().slice_move(s![left..right, top..bottom]),
    };
    if window.is_partial() {
        tracing::debug!(
            "Zoom window shrunk to {}x{} (requested {})",
            window.width(),
            window.height(),
            window_size
        );
    }
    Ok(window)
}

/// Clamp-and-shift a centered run of `size` cells into `[0, len)`.
fn span(center: usize, size: usize, len: usize) -> (usize, usize) {
    if size >= len {
        return (0, len);
    }
    let start = center.saturating_sub(size / 2).min(len - size);
    (start, start + size)
}
