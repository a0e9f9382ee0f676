//! A single measured point of a parameter sweep.

use serde::{Deserialize, Serialize};

/// One measured point in a 2D parameter sweep.
///
/// Indices locate the point on the sweep grid; the two `*_variable` fields
/// carry the physical parameter values at that grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Grid column.
    pub x_index: usize,
    /// Grid row.
    pub y_index: usize,
    /// Measured scalar.
    pub value: f64,
    /// Physical value of the X sweep parameter.
    pub x_variable: f64,
    /// Physical value of the Y sweep parameter.
    pub y_variable: f64,
}

impl Sample {
    /// Create a sample whose physical variables equal its indices.
    pub fn at(x_index: usize, y_index: usize, value: f64) -> Self {
        Self {
            x_index,
            y_index,
            value,
            x_variable: x_index as f64,
            y_variable: y_index as f64,
        }
    }
}
