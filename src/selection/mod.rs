//! Time-series selections.
//!
//! A drag over the rendered time-series plot arrives as a [`PixelRect`]. It is
//! repaired to fit the plot's data area and mapped to a bin-aligned
//! [`TimeWindow`], which becomes part of the next [`Selection`].

mod range;
mod state;

pub use range::{
    normalize_pixel, pixel_range_to_time_range, repair_selection, BinSize, PixelRect,
    SelectionRepair, TimeWindow,
};
pub use state::Selection;
