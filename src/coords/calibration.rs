//! Pixel-to-domain calibration of a single plot axis.

use crate::error::{Result, SweepmapError};
use serde::{Deserialize, Serialize};

/// How one axis of a rendered plot maps its data area to domain units.
///
/// The data area starts `pixel_offset` pixels into the image and is
/// `pixel_width` pixels long; across it the domain runs from `domain_min` to
/// `domain_max`, or the other way round when `invert` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCalibration {
    /// First pixel of the data area.
    pub pixel_offset: i64,
    /// Length of the data area in pixels.
    pub pixel_width: i64,
    /// Domain value at the start of the data area.
    pub domain_min: f64,
    /// Domain value at the end of the data area.
    pub domain_max: f64,
    /// Measure from the far end of the axis instead.
    #[serde(default)]
    pub invert: bool,
}

impl AxisCalibration {
    /// Create a calibration, rejecting empty data areas and reversed or
    /// non-finite domains.
    pub fn new(pixel_offset: i64, pixel_width: i64, domain_min: f64, domain_max: f64) -> Result<Self> {
        let cal = Self {
            pixel_offset,
            pixel_width,
            domain_min,
            domain_max,
            invert: false,
        };
        cal.validate()?;
        Ok(cal)
    }

    /// Axis whose domain is grid indices `0..=max_index`, drawn `scale`
    /// pixels per index.
    pub fn for_index_axis(pixel_offset: i64, scale: i64, max_index: usize) -> Result<Self> {
        if scale <= 0 {
            return Err(SweepmapError::invalid_calibration(format!(
                "pixel scale must be positive, got {}",
                scale
            )));
        }
        let cells = i64::try_from(max_index.max(1))
            .map_err(|_| SweepmapError::invalid_calibration("index axis too long"))?;
        let pixel_width = cells
            .checked_mul(scale)
            .ok_or_else(|| SweepmapError::invalid_calibration("index axis too long"))?;
        Self::new(pixel_offset, pixel_width, 0.0, max_index as f64)
    }

    /// Axis measured in pixels only, as on the time-series plot.
    pub fn pixels(pixel_offset: i64, pixel_width: i64) -> Result<Self> {
        Self::new(pixel_offset, pixel_width, 0.0, pixel_width as f64)
    }

    /// The same axis with the opposite direction convention.
    pub fn inverted(self) -> Self {
        Self {
            invert: !self.invert,
            ..self
        }
    }

    /// Check the invariants `new` enforces, for values built elsewhere
    /// (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        if self.pixel_width <= 0 {
            return Err(SweepmapError::invalid_calibration(format!(
                "pixel width must be positive, got {}",
                self.pixel_width
            )));
        }
        if !self.domain_min.is_finite() || !self.domain_max.is_finite() {
            return Err(SweepmapError::invalid_calibration("domain bounds must be finite"));
        }
        if self.domain_max < self.domain_min {
            return Err(SweepmapError::invalid_calibration(format!(
                "domain {}..{} is reversed",
                self.domain_min, self.domain_max
            )));
        }
        Ok(())
    }

    /// One past the last pixel of the data area.
    pub fn right_edge(&self) -> i64 {
        self.pixel_offset.saturating_add(self.pixel_width)
    }

    /// Length of the domain.
    pub fn span(&self) -> f64 {
        self.domain_max - self.domain_min
    }

    /// Pixel position within the data area, clamped to `[0, pixel_width]`.
    pub fn normalize_pixel(&self, x: i64) -> i64 {
        x.saturating_sub(self.pixel_offset).clamp(0, self.pixel_width.max(0))
    }

    /// Domain value under a pixel.
    ///
    /// Total over every `f64`: positions before the data area (and NaN) give
    /// the start of the axis, positions past it give the end.
    pub fn to_domain(&self, pixel: f64) -> f64 {
        let span = self.span();
        let units = (pixel - self.pixel_offset as f64) * span / self.pixel_width as f64;
        // f64::max maps NaN to the other operand.
        let clamped = units.max(0.0).min(span);
        let along = if self.invert { span - clamped } else { clamped };
        self.domain_min + along
    }
}
