use crate::math::grid::SampleGrid;
use crate::params::VehicleParams;
use crate::prelude::{Curve, CurveKind, CurvePoint, Sweep};
use crate::telemetry::log::LogManager;

/// Distance needed to come to a stop from `v0` under constant deceleration.
///
/// `deceleration` must be negative.
pub fn stopping_distance(v0: f64, deceleration: f64) -> f64 {
    -v0 * v0 / (2.0 * deceleration)
}

/// Sweeps decelerations from the weakest step down to the vehicle's minimum.
pub struct DecelerationSweep {
    logger: LogManager,
}

impl DecelerationSweep {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }
}

impl Default for DecelerationSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl Sweep for DecelerationSweep {
    fn label(&self) -> &'static str {
        "deceleration"
    }

    fn evaluate(&self, params: &VehicleParams) -> Curve {
        let grid = SampleGrid::up_to(params.min_acceleration);
        let points: Vec<CurvePoint> = grid
            .excluding_zero()
            .map(|magnitude| {
                let a = -magnitude;
                CurvePoint::new(a, stopping_distance(params.current_speed, a))
            })
            .collect();

        match points.last() {
            Some(last) => self.logger.detail(&format!(
                "{} sweep: {} samples, {:.2} m at {:.2} m/s^2",
                self.label(),
                points.len(),
                last.distance,
                last.acceleration
            )),
            None => self.logger.detail(&format!(
                "{} sweep skipped: no deceleration entered",
                self.label()
            )),
        }

        Curve::new(CurveKind::Deceleration, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamField;

    #[test]
    fn stopping_distance_matches_closed_form() {
        // v = 20 m/s, a = -4: 400 / 8
        assert!((stopping_distance(20.0, -4.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn sweep_runs_from_weakest_to_strongest() {
        let mut params = VehicleParams::default();
        params.set(ParamField::MinAcceleration, -2.5);
        params.set(ParamField::CurrentSpeed, 72.0);

        let curve = DecelerationSweep::new().evaluate(&params);
        assert_eq!(curve.kind, CurveKind::Deceleration);
        assert_eq!(curve.len(), 250);
        assert!((curve.points[0].acceleration + 0.01).abs() < 1e-12);
        assert!((curve.points[0].distance - 20_000.0).abs() < 1e-6);
        let last = curve.last().unwrap();
        assert!((last.acceleration + 2.5).abs() < 1e-12);
        assert!((last.distance - 80.0).abs() < 1e-9);
    }

    #[test]
    fn stopping_distance_shrinks_with_harder_braking() {
        let mut params = VehicleParams::default();
        params.set(ParamField::MinAcceleration, -3.0);
        params.set(ParamField::CurrentSpeed, 50.0);

        let curve = DecelerationSweep::new().evaluate(&params);
        assert!(curve
            .points
            .windows(2)
            .all(|pair| pair[1].distance < pair[0].distance));
    }

    #[test]
    fn no_deceleration_entered_yields_empty_curve() {
        let mut params = VehicleParams::default();
        params.set(ParamField::CurrentSpeed, 50.0);
        assert!(DecelerationSweep::new().evaluate(&params).is_empty());
    }
}
