use crate::math::grid::SampleGrid;
use crate::params::VehicleParams;
use crate::prelude::{Curve, CurveKind, CurvePoint, Sweep};
use crate::telemetry::log::LogManager;

/// Distance covered during the yellow interval under constant acceleration.
///
/// The vehicle accelerates from `v0` until it either reaches `v_max` (and
/// cruises from then on) or the interval ends. A vehicle already above the
/// limit, or not accelerating, holds its speed.
pub fn yellow_window_distance(v0: f64, v_max: f64, acceleration: f64, yellow: f64) -> f64 {
    if acceleration == 0.0 || v0 > v_max {
        return v0 * yellow;
    }
    let time_to_limit = (v_max - v0) / acceleration;
    if time_to_limit < yellow {
        v0 * time_to_limit
            + acceleration * time_to_limit * time_to_limit / 2.0
            + v_max * (yellow - time_to_limit)
    } else {
        v0 * yellow + acceleration * yellow * yellow / 2.0
    }
}

/// Sweeps accelerations from zero up to the vehicle's maximum.
pub struct AccelerationSweep {
    logger: LogManager,
}

impl AccelerationSweep {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }
}

impl Default for AccelerationSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl Sweep for AccelerationSweep {
    fn label(&self) -> &'static str {
        "acceleration"
    }

    fn evaluate(&self, params: &VehicleParams) -> Curve {
        let grid = SampleGrid::up_to(params.max_acceleration);
        let points: Vec<CurvePoint> = grid
            .including_zero()
            .map(|a| {
                CurvePoint::new(
                    a,
                    yellow_window_distance(
                        params.current_speed,
                        params.speed_limit,
                        a,
                        params.yellow_duration,
                    ),
                )
            })
            .collect();

        if let Some(last) = points.last() {
            self.logger.detail(&format!(
                "{} sweep: {} samples, {:.2} m at {:.2} m/s^2",
                self.label(),
                points.len(),
                last.distance,
                last.acceleration
            ));
        }

        Curve::new(CurveKind::Acceleration, points)
    }
}
