//! Sweepmap - interaction logic for 2D parameter-sweep map viewers.
//!
//! A sweep measures a time series at every point of a two-parameter grid.
//! The map shows one scalar per grid point; selecting a point brings up its
//! time series, which can be zoomed by dragging over the rendered plot.
//! This crate holds everything between the server's data and the pixels on
//! screen: aggregation and coloring of the map, pointer-to-domain mapping,
//! pixel-to-time selection, and the URLs for server-rendered artifacts.
//!
//! # Example
//!
//! ```
//! use sweepmap::data::{parse_samples, SeriesInfo};
//! use sweepmap::map::{aggregate, NormalizationMode};
//! use sweepmap::selection::{PixelRect, Selection};
//! use sweepmap::util::LayoutConfig;
//!
//! let samples = parse_samples(
//!     r#"[{"x_index": 0, "y_index": 0, "value": 1.0, "x_variable": 0.0, "y_variable": 0.0},
//!         {"x_index": 1, "y_index": 0, "value": 3.0, "x_variable": 0.5, "y_variable": 0.0}]"#,
//! )?;
//! let map = aggregate(&samples, NormalizationMode::Inclusive)?;
//! assert_eq!(map.color_fraction(1, 0), Some(1.0));
//!
//! let layout = LayoutConfig::physics();
//! let series = SeriesInfo::new(20_000, 50)?;
//! let calibration = layout.time_series.calibration()?;
//! let bin = layout.time_series.bin_size(series.sample_interval())?;
//! let (zoomed, _) = Selection::at(1, 0, &series).zoom(PixelRect::new(81, 0, 576, 480), &calibration, bin);
//! assert_eq!(zoomed.window, series.full_window());
//! # Ok::<(), sweepmap::SweepmapError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod coords;
pub mod data;
pub mod error;
pub mod map;
pub mod request;
pub mod selection;
pub mod session;
pub mod util;

pub use error::{Result, SweepmapError};
