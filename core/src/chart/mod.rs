//! Plot geometry shared by the desktop view and reports.
//!
//! Nothing here knows about a rendering toolkit: bounds and guides are in
//! data units, the viewport maps them onto an arbitrary pixel rectangle.

pub mod bounds;
pub mod guides;
pub mod ticks;
pub mod viewport;

pub use bounds::PlotBounds;
pub use guides::{guides_for, GuideLine, GuideRole, Orientation};
pub use ticks::ticks;
pub use viewport::Viewport;

/// Data coordinates under the mouse pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readout {
    pub acceleration: f64,
    pub distance: f64,
}

impl Readout {
    pub fn format(&self) -> String {
        format!(
            "Coordinates: Acceleration = {:.2} (m/s^2), Distance = {:.2} (m)",
            self.acceleration, self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_formats_two_decimals() {
        let readout = Readout {
            acceleration: -1.234,
            distance: 42.0,
        };
        assert_eq!(
            readout.format(),
            "Coordinates: Acceleration = -1.23 (m/s^2), Distance = 42.00 (m)"
        );
    }
}
