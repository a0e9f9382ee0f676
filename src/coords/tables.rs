//! Physical-unit lookup tables for map axes.

use super::DomainPoint;
use std::fmt;

/// Physical values of one sweep parameter, indexed by grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    values: Vec<f64>,
    decimals: u32,
}

impl CalibrationTable {
    /// Decimal places shown for feedback values.
    pub const FEEDBACK_DECIMALS: u32 = 5;
    /// Decimal places shown for injection values.
    pub const INJECTION_DECIMALS: u32 = 1;

    /// Create a table that reports values rounded to `decimals` places.
    pub fn new(values: Vec<f64>, decimals: u32) -> Self {
        Self { values, decimals }
    }

    /// Feedback table with the usual display precision.
    pub fn feedback(values: Vec<f64>) -> Self {
        Self::new(values, Self::FEEDBACK_DECIMALS)
    }

    /// Injection table with the usual display precision.
    pub fn injection(values: Vec<f64>) -> Self {
        Self::new(values, Self::INJECTION_DECIMALS)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rounded value at `index`, if the table is that long.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        let scale = 10f64.powi(self.decimals as i32);
        self.values
            .get(index)
            .map(|v| (v * scale).round() / scale)
    }
}

/// Readout of a map position on the physics map.
///
/// The horizontal axis is injection and the vertical axis is feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalPoint {
    /// Injection index.
    pub injection_index: usize,
    /// Injection value, if the table covers the index.
    pub injection: Option<f64>,
    /// Feedback index.
    pub feedback_index: usize,
    /// Feedback value, if the table covers the index.
    pub feedback: Option<f64>,
}

impl PhysicalPoint {
    /// Look up the physical values of a mapped point.
    pub fn resolve(
        point: DomainPoint,
        injection: &CalibrationTable,
        feedback: &CalibrationTable,
    ) -> Self {
        let (injection_index, feedback_index) = point.indices();
        Self {
            injection_index,
            injection: injection.value_at(injection_index),
            feedback_index,
            feedback: feedback.value_at(feedback_index),
        }
    }
}

impl fmt::Display for PhysicalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "injection ")?;
        write_value(f, self.injection, self.injection_index)?;
        write!(f, ", feedback ")?;
        write_value(f, self.feedback, self.feedback_index)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: Option<f64>, index: usize) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{} ({})", v, index),
        None => write!(f, "? ({})", index),
    }
}
