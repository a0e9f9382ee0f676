//! Map datasets as dense grids.
//!
//! [`aggregate`] turns the flat sample list served for a map into a
//! [`MapData`]: a dense [`Grid`], its [`GridBounds`], and a color fraction per
//! cell. [`extract_window`] cuts the fixed-size neighbourhood shown by the
//! magnified zoom view.

mod aggregate;
mod window;

pub use aggregate::{aggregate, Grid, GridBounds, MapData, NormalizationMode, NEUTRAL_FRACTION};
pub use window::{extract_window, LocalWindow};
