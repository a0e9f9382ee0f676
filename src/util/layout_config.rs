//! Layout configuration for the rendered map and time-series plots.
//!
//! Pixel offsets here describe where the data area of each server-rendered
//! image begins. They depend on the plotting backend and page layout, so two
//! presets are provided for the two existing front-ends, and a layout can
//! also be loaded from JSON.

use crate::coords::{AxisCalibration, PixelCoordinateMapper};
use crate::error::{Result, SweepmapError};
use crate::map::GridBounds;
use crate::selection::BinSize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Where the map axes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisLimits {
    /// Fixed maximum indices, independent of the loaded map.
    Fixed {
        /// Largest horizontal index.
        x_max: usize,
        /// Largest vertical index.
        y_max: usize,
    },
    /// The loaded grid's `max_x` / `max_y`.
    Grid,
}

/// Configuration for the map image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    /// Pixels from the image's left edge to the first column.
    pub x_offset: i64,
    /// Pixels from the image's top edge to the first row.
    pub y_offset: i64,
    /// Pixels per grid cell.
    pub scale: i64,
    /// Count the vertical axis up from the bottom.
    #[serde(default)]
    pub invert_y: bool,
    /// Axis maxima.
    pub limits: AxisLimits,
}

impl MapLayout {
    /// Build the pointer mapper for this layout.
    ///
    /// `bounds` is required when the limits come from the grid.
    pub fn mapper(&self, bounds: Option<&GridBounds>) -> Result<PixelCoordinateMapper> {
        let (x_max, y_max) = match (self.limits, bounds) {
            (AxisLimits::Fixed { x_max, y_max }, _) => (x_max, y_max),
            (AxisLimits::Grid, Some(b)) => (b.max_x, b.max_y),
            (AxisLimits::Grid, None) => {
                return Err(SweepmapError::invalid_calibration(
                    "map layout takes its limits from a grid, but no map is loaded",
                ))
            },
        };
        let x = AxisCalibration::for_index_axis(self.x_offset, self.scale, x_max)?;
        let mut y = AxisCalibration::for_index_axis(self.y_offset, self.scale, y_max)?;
        if self.invert_y {
            y = y.inverted();
        }
        Ok(PixelCoordinateMapper::new(x, y))
    }
}

/// Configuration for the time-series plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesLayout {
    /// Pixels from the image's left edge to the start of the data area.
    pub left_offset: i64,
    /// Width of the data area.
    pub width: i64,
    /// Height of the selection band.
    pub height: i64,
    /// Fixed selection granularity; when absent the dataset's sample
    /// interval is used.
    #[serde(default)]
    pub bin_size: Option<u64>,
}

impl TimeSeriesLayout {
    /// Horizontal calibration of the data area.
    pub fn calibration(&self) -> Result<AxisCalibration> {
        AxisCalibration::pixels(self.left_offset, self.width)
    }

    /// Bin size to use, given the dataset's sample interval.
    pub fn bin_size(&self, sample_interval: u64) -> Result<BinSize> {
        BinSize::new(self.bin_size.unwrap_or(sample_interval))
    }
}

/// Configuration for the magnified zoom view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomLayout {
    /// Cells per side of the zoom window.
    pub size: usize,
    /// Pixels per zoomed cell.
    pub scale: usize,
}

impl Default for ZoomLayout {
    fn default() -> Self {
        Self { size: 15, scale: 10 }
    }
}

impl ZoomLayout {
    /// Pixel size of the zoom image for a window of `width x height` cells.
    pub fn image_size(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width.saturating_mul(self.scale),
            height.saturating_mul(self.scale),
        )
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Map image layout.
    pub map: MapLayout,
    /// Time-series plot layout.
    pub time_series: TimeSeriesLayout,
    /// Zoom view layout.
    #[serde(default)]
    pub zoom: ZoomLayout,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::laser()
    }
}

impl LayoutConfig {
    /// Index-addressed maps drawn one pixel per cell.
    pub fn laser() -> Self {
        Self {
            map: MapLayout {
                x_offset: 104,
                y_offset: 12,
                scale: 1,
                invert_y: false,
                limits: AxisLimits::Grid,
            },
            time_series: TimeSeriesLayout {
                left_offset: 51,
                width: 309,
                height: 300,
                bin_size: None,
            },
            zoom: ZoomLayout::default(),
        }
    }

    /// Injection/feedback maps with fixed axis ranges.
    pub fn physics() -> Self {
        Self {
            map: MapLayout {
                x_offset: 53,
                y_offset: 46,
                scale: 1,
                invert_y: false,
                limits: AxisLimits::Fixed {
                    x_max: 250,
                    y_max: 350,
                },
            },
            time_series: TimeSeriesLayout {
                left_offset: 81,
                width: 495,
                height: 480,
                bin_size: Some(50),
            },
            zoom: ZoomLayout::default(),
        }
    }

    /// Read and validate a layout from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| SweepmapError::file_open(path.to_path_buf(), e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        tracing::debug!("Loaded layout from {}", path.display());
        Ok(config)
    }

    /// Check that every value describes a usable layout.
    pub fn validate(&self) -> Result<()> {
        if self.map.scale <= 0 {
            return Err(SweepmapError::invalid_calibration("map scale must be positive"));
        }
        self.time_series.calibration()?;
        if self.time_series.bin_size == Some(0) {
            return Err(SweepmapError::InvalidBinSize);
        }
        if self.zoom.size == 0 {
            return Err(SweepmapError::InvalidWindowSize);
        }
        if self.zoom.scale == 0 {
            return Err(SweepmapError::invalid_calibration("zoom scale must be positive"));
        }
        Ok(())
    }
}
