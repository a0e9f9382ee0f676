//! The current map point and time window.

use super::range::{
    pixel_range_to_time_range, repair_selection, BinSize, PixelRect, SelectionRepair, TimeWindow,
};
use crate::coords::AxisCalibration;
use crate::data::SeriesInfo;

/// The chosen map point and the time window shown for its series.
///
/// Every change produces a new value; the UI layer decides which one is
/// current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Selected grid column (or injection index).
    pub x_index: usize,
    /// Selected grid row (or feedback index).
    pub y_index: usize,
    /// Time window shown for the series.
    pub window: TimeWindow,
}

impl Selection {
    /// Select a map point with the whole series in view.
    pub fn at(x_index: usize, y_index: usize, series: &SeriesInfo) -> Self {
        Self {
            x_index,
            y_index,
            window: series.full_window(),
        }
    }

    /// First time in the window.
    pub fn from_time(&self) -> u64 {
        self.window.from_time
    }

    /// Last time in the window.
    pub fn to_time(&self) -> u64 {
        self.window.to_time
    }

    /// Move to another map point, showing its whole series.
    pub fn with_point(self, x_index: usize, y_index: usize, series: &SeriesInfo) -> Self {
        Self::at(x_index, y_index, series)
    }

    /// Show a different time window at the same point.
    pub fn with_window(self, window: TimeWindow) -> Self {
        Self { window, ..self }
    }

    /// Zoom back out to the whole series.
    pub fn reset_window(self, series: &SeriesInfo) -> Self {
        self.with_window(series.full_window())
    }

    /// Zoom into the part of the series under a dragged pixel rectangle.
    ///
    /// The rectangle is repaired first; the repair is returned so the caller
    /// can redraw the widget when it was corrected.
    pub fn zoom(
        self,
        rect: PixelRect,
        calibration: &AxisCalibration,
        bin_size: BinSize,
    ) -> (Self, SelectionRepair) {
        let repair = repair_selection(rect, calibration);
        let window = pixel_range_to_time_range(
            repair.rect.x1,
            repair.rect.x2,
            self.window,
            calibration,
            bin_size,
        );
        (self.with_window(window), repair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> SeriesInfo {
        SeriesInfo::new(20_000, 50).unwrap()
    }

    #[test]
    fn new_point_shows_whole_series() {
        let sel = Selection::at(3, 4, &series());
        assert_eq!((sel.from_time(), sel.to_time()), (0, 999_999));
        assert!(sel.from_time() <= sel.to_time());
    }

    #[test]
    fn zoom_then_reset() {
        let cal = AxisCalibration::pixels(81, 495).unwrap();
        let sel = Selection::at(1, 2, &series());
        let (zoomed, repair) = sel.zoom(PixelRect::new(100, 0, 300, 480), &cal, series().bin_size());
        assert!(!repair.corrected);
        assert_eq!((zoomed.from_time(), zoomed.to_time()), (38_350, 442_449));
        assert_eq!((zoomed.x_index, zoomed.y_index), (1, 2));
        // `sel` itself is untouched.
        assert_eq!(sel.to_time(), 999_999);

        let reset = zoomed.reset_window(&series());
        assert_eq!(reset, sel);
    }

    #[test]
    fn zoom_repairs_degenerate_drag() {
        let cal = AxisCalibration::pixels(81, 495).unwrap();
        let sel = Selection::at(0, 0, &series());
        let (zoomed, repair) = sel.zoom(PixelRect::new(600, 0, 10, 480), &cal, series().bin_size());
        assert!(repair.corrected);
        assert_eq!((repair.rect.x1, repair.rect.x2), (575, 576));
        assert!(zoomed.to_time() >= zoomed.from_time());
        assert_eq!(zoomed.to_time(), 999_999);
    }

    #[test]
    fn moving_point_resets_window() {
        let sel = Selection::at(0, 0, &series()).with_window(TimeWindow::new(100, 199).unwrap());
        let moved = sel.with_point(5, 6, &series());
        assert_eq!(moved, Selection::at(5, 6, &series()));
    }
}
