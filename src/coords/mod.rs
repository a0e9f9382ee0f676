//! Screen pixels to domain coordinates.
//!
//! An [`AxisCalibration`] describes one axis of a rendered plot. The
//! [`PixelCoordinateMapper`] pairs two of them to turn pointer positions over
//! a map into grid indices or physical-axis indices, which the host then
//! resolves through a [`CalibrationTable`].

mod calibration;
mod mapper;
mod tables;

pub use calibration::AxisCalibration;
pub use mapper::{DomainPoint, PixelCoordinateMapper};
pub use tables::{CalibrationTable, PhysicalPoint};
