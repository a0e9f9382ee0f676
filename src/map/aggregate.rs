//! Aggregation of sampled map points into a dense grid.

use crate::data::Sample;
use crate::error::{Result, SweepmapError};
use ndarray::{Array2, ArrayView2};
use std::collections::HashSet;

/// Color fraction used when every sample has the same value.
pub const NEUTRAL_FRACTION: f64 = 0.5;

/// Which cells receive a color fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationMode {
    /// Every cell in `[min_x, max_x] x [min_y, max_y]`.
    #[default]
    Inclusive,
    /// Only cells with `x_index < max_x` and `y_index < max_y`, as the web
    /// front-end's color pass does.
    Legacy,
}

impl NormalizationMode {
    fn covers(self, sample: &Sample, bounds: &GridBounds) -> bool {
        match self {
            Self::Inclusive => true,
            Self::Legacy => sample.x_index < bounds.max_x && sample.y_index < bounds.max_y,
        }
    }
}

/// Inclusive extents of a map dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    /// Smallest sample value.
    pub min_value: f64,
    /// Largest sample value.
    pub max_value: f64,
    /// Smallest X index.
    pub min_x: usize,
    /// Largest X index.
    pub max_x: usize,
    /// Smallest Y index.
    pub min_y: usize,
    /// Largest Y index.
    pub max_y: usize,
}

impl GridBounds {
    fn of(first: &Sample) -> Self {
        Self {
            min_value: first.value,
            max_value: first.value,
            min_x: first.x_index,
            max_x: first.x_index,
            min_y: first.y_index,
            max_y: first.y_index,
        }
    }

    fn include(&mut self, sample: &Sample) {
        self.min_value = self.min_value.min(sample.value);
        self.max_value = self.max_value.max(sample.value);
        self.min_x = self.min_x.min(sample.x_index);
        self.max_x = self.max_x.max(sample.x_index);
        self.min_y = self.min_y.min(sample.y_index);
        self.max_y = self.max_y.max(sample.y_index);
    }

    /// Number of columns covered, saturating at `usize::MAX`.
    pub fn x_size(&self) -> usize {
        (self.max_x - self.min_x).saturating_add(1)
    }

    /// Number of rows covered, saturating at `usize::MAX`.
    pub fn y_size(&self) -> usize {
        (self.max_y - self.min_y).saturating_add(1)
    }

    /// Cells in the bounding rectangle, or `None` if that overflows.
    fn cell_count(&self) -> Option<usize> {
        let x_size = (self.max_x - self.min_x).checked_add(1)?;
        let y_size = (self.max_y - self.min_y).checked_add(1)?;
        x_size.checked_mul(y_size)
    }

    /// Position of `value` within the value range, in `[0, 1]`.
    ///
    /// Returns [`NEUTRAL_FRACTION`] when the range is degenerate.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max_value - self.min_value;
        if span <= 0.0 {
            return NEUTRAL_FRACTION;
        }
        ((value - self.min_value) / span).clamp(0.0, 1.0)
    }
}

/// Dense grid of samples addressed by absolute grid indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    min_x: usize,
    min_y: usize,
    cells: Array2<Sample>,
}

impl Grid {
    /// Look up the sample at an absolute index pair.
    pub fn get(&self, x_index: usize, y_index: usize) -> Option<&Sample> {
        let col = x_index.checked_sub(self.min_x)?;
        let row = y_index.checked_sub(self.min_y)?;
        self.cells.get((col, row))
    }

    /// Smallest X index stored.
    pub fn min_x(&self) -> usize {
        self.min_x
    }

    /// Smallest Y index stored.
    pub fn min_y(&self) -> usize {
        self.min_y
    }

    /// Number of columns.
    pub fn x_size(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of rows.
    pub fn y_size(&self) -> usize {
        self.cells.ncols()
    }

    /// Cells indexed `[x - min_x, y - min_y]`.
    pub fn cells(&self) -> ArrayView2<'_, Sample> {
        self.cells.view()
    }

    /// Iterate over all samples, column by column.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.cells.iter()
    }
}

/// A fully built map: grid, bounds, and per-cell color fractions.
///
/// Always produced whole by [`aggregate`]; there is no way to update one in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    grid: Grid,
    bounds: GridBounds,
    fractions: Array2<Option<f64>>,
    mode: NormalizationMode,
}

impl MapData {
    /// The dense sample grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Value and index extents.
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Normalization used to build the fractions.
    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    /// Look up a sample by absolute indices.
    pub fn sample(&self, x_index: usize, y_index: usize) -> Option<&Sample> {
        self.grid.get(x_index, y_index)
    }

    /// Color fraction at an absolute index pair.
    ///
    /// `None` outside the grid, and for the last row and column under
    /// [`NormalizationMode::Legacy`].
    pub fn color_fraction(&self, x_index: usize, y_index: usize) -> Option<f64> {
        let col = x_index.checked_sub(self.grid.min_x)?;
        let row = y_index.checked_sub(self.grid.min_y)?;
        self.fractions.get((col, row)).copied().flatten()
    }
}

/// Build a [`MapData`] from a flat list of samples.
///
/// Samples may arrive in any order. A later sample at an index pair already
/// seen replaces the earlier one. Every index pair inside the bounding
/// rectangle must be present.
pub fn aggregate(samples: &[Sample], mode: NormalizationMode) -> Result<MapData> {
    let first = samples.first().ok_or(SweepmapError::EmptyDataset)?;

    let mut bounds = GridBounds::of(first);
    for sample in samples {
        if !sample.value.is_finite() {
            return Err(SweepmapError::NonFiniteValue {
                x_index: sample.x_index,
                y_index: sample.y_index,
            });
        }
        bounds.include(sample);
    }

    // Every cell needs a sample, so fewer samples than cells means a hole.
    // Checked before allocating the rectangle.
    if bounds.cell_count().map_or(true, |cells| cells > samples.len()) {
        return Err(first_gap(samples, &bounds));
    }

    let shape = (bounds.x_size(), bounds.y_size());
    let mut slots: Array2<Option<Sample>> = Array2::from_elem(shape, None);
    for sample in samples {
        let pos = (sample.x_index - bounds.min_x, sample.y_index - bounds.min_y);
        slots[pos] = Some(sample.clone());
    }

    let mut cells = Vec::with_capacity(shape.0 * shape.1);
    for ((col, row), slot) in slots.indexed_iter_mut() {
        match slot.take() {
            Some(sample) => cells.push(sample),
            None => {
                return Err(SweepmapError::MissingCell {
                    x_index: col + bounds.min_x,
                    y_index: row + bounds.min_y,
                })
            },
        }
    }
    let cells = Array2::from_shape_vec(shape, cells)?;

    let fractions = cells.map(|sample| {
        mode.covers(sample, &bounds)
            .then(|| bounds.fraction(sample.value))
    });

    tracing::debug!(
        "Aggregated {} samples into {}x{} grid, values {}..{}",
        samples.len(),
        shape.0,
        shape.1,
        bounds.min_value,
        bounds.max_value
    );

    Ok(MapData {
        grid: Grid {
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            cells,
        },
        bounds,
        fractions,
        mode,
    })
}

/// First index pair inside `bounds` with no sample, in grid order.
///
/// Only called when the rectangle has more cells than there are samples, so
/// the scan stops within `samples.len() + 1` steps.
fn first_gap(samples: &[Sample], bounds: &GridBounds) -> SweepmapError {
    let present: HashSet<(usize, usize)> = samples
        .iter()
        .map(|s| (s.x_index, s.y_index))
        .collect();
    for x_index in bounds.min_x..=bounds.max_x {
        for y_index in bounds.min_y..=bounds.max_y {
            if !present.contains(&(x_index, y_index)) {
                return SweepmapError::MissingCell { x_index, y_index };
            }
        }
    }
    SweepmapError::EmptyDataset
}
