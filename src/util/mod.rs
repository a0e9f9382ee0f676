//! Utility functions.
//!
//! This module provides color palettes for map cells and the pixel layout
//! of the rendered plots.

pub mod colormaps;
pub mod layout_config;

pub use colormaps::{hue_degrees, ColorPalette, Rgb};
pub use layout_config::{AxisLimits, LayoutConfig, MapLayout, TimeSeriesLayout, ZoomLayout};
