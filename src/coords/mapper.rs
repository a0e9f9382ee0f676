//! Pointer positions over a rendered map to domain coordinates.

use super::AxisCalibration;
use crate::error::Result;
use crate::map::GridBounds;

/// A position on the map in domain units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainPoint {
    /// Position along the horizontal axis.
    pub x: f64,
    /// Position along the vertical axis.
    pub y: f64,
}

impl DomainPoint {
    /// Grid indices of the cell containing this point.
    pub fn indices(&self) -> (usize, usize) {
        (self.x.floor() as usize, self.y.floor() as usize)
    }
}

/// Maps raw pointer pixels over a map image to domain coordinates.
///
/// Each axis carries its own calibration, so offsets, limits and the
/// direction of the vertical axis are configured per map rather than fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCoordinateMapper {
    /// Horizontal axis.
    pub x: AxisCalibration,
    /// Vertical axis.
    pub y: AxisCalibration,
}

impl PixelCoordinateMapper {
    /// Create a mapper from two axis calibrations.
    pub fn new(x: AxisCalibration, y: AxisCalibration) -> Self {
        Self { x, y }
    }

    /// Mapper whose domain is the index range of an aggregated grid.
    pub fn for_grid(
        bounds: &GridBounds,
        x_offset: i64,
        y_offset: i64,
        scale: i64,
    ) -> Result<Self> {
        Ok(Self {
            x: AxisCalibration::for_index_axis(x_offset, scale, bounds.max_x)?,
            y: AxisCalibration::for_index_axis(y_offset, scale, bounds.max_y)?,
        })
    }

    /// Domain coordinates under a pointer position.
    pub fn to_domain(&self, pixel_x: f64, pixel_y: f64) -> DomainPoint {
        DomainPoint {
            x: self.x.to_domain(pixel_x),
            y: self.y.to_domain(pixel_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> PixelCoordinateMapper {
        PixelCoordinateMapper::new(
            AxisCalibration::for_index_axis(53, 1, 250).unwrap(),
            AxisCalibration::for_index_axis(46, 1, 350).unwrap(),
        )
    }

    #[test]
    fn origin_pixel_clamps_to_zero() {
        let point = physics().to_domain(0.0, 0.0);
        assert_eq!(point, DomainPoint { x: 0.0, y: 0.0 });
        assert_eq!(point.indices(), (0, 0));
    }

    #[test]
    fn far_pixels_clamp_to_axis_max() {
        let point = physics().to_domain(5_000.0, 5_000.0);
        assert_eq!(point.indices(), (250, 350));
    }

    #[test]
    fn interior_pixel_subtracts_offsets() {
        let point = physics().to_domain(153.0, 146.5);
        assert_eq!(point.x, 100.0);
        assert_eq!(point.indices(), (100, 100));
    }

    #[test]
    fn vertical_axis_can_be_inverted() {
        let mut mapper = physics();
        mapper.y = mapper.y.inverted();
        let point = mapper.to_domain(53.0, 56.0);
        assert_eq!(point.indices(), (0, 340));
    }

    #[test]
    fn grid_mapper_uses_grid_maxima() {
        let bounds = GridBounds {
            min_value: 0.0,
            max_value: 1.0,
            min_x: 0,
            max_x: 39,
            min_y: 0,
            max_y: 29,
        };
        let mapper = PixelCoordinateMapper::for_grid(&bounds, 104, 12, 1).unwrap();
        assert_eq!(mapper.to_domain(110.0, 20.0).indices(), (6, 8));
        assert_eq!(mapper.to_domain(900.0, 900.0).indices(), (39, 29));
    }
}
