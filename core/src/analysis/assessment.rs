use serde::{Deserialize, Serialize};

use crate::kinematics::stopping_distance;
use crate::params::VehicleParams;
use crate::prelude::Curve;

/// What the driver can still do when the light turns yellow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Both stopping and clearing are feasible.
    OptionZone,
    MustStop,
    MustGo,
    /// Neither stopping nor clearing is feasible.
    DilemmaZone,
}

impl Decision {
    pub fn from_feasibility(can_stop: bool, can_clear: bool) -> Self {
        match (can_stop, can_clear) {
            (true, true) => Decision::OptionZone,
            (true, false) => Decision::MustStop,
            (false, true) => Decision::MustGo,
            (false, false) => Decision::DilemmaZone,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Decision::OptionZone => "option zone: the car can either stop or clear",
            Decision::MustStop => "must stop: the intersection cannot be cleared in time",
            Decision::MustGo => "must go: the car cannot stop before the line",
            Decision::DilemmaZone => "dilemma zone: the car can neither stop nor clear",
        }
    }
}

/// Where the curves cross the stop line and the far edge of the intersection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    /// Deceleration that stops the car exactly at the line (m/s²).
    pub required_deceleration: Option<f64>,
    /// Stopping distance at the strongest deceleration (m).
    pub stopping_distance: Option<f64>,
    pub can_stop: bool,
    /// Smallest swept acceleration that clears the far edge in time (m/s²).
    pub required_acceleration: Option<f64>,
    /// Distance covered during the yellow interval at full acceleration (m).
    pub yellow_distance: f64,
    pub can_clear: bool,
    pub decision: Decision,
}

impl Assessment {
    pub fn from_curves(params: &VehicleParams, acceleration: &Curve, deceleration: &Curve) -> Self {
        let required_deceleration = (params.distance > 0.0)
            .then(|| -params.current_speed * params.current_speed / (2.0 * params.distance));

        let stopping_distance = (params.min_acceleration < 0.0)
            .then(|| stopping_distance(params.current_speed, params.min_acceleration));
        let can_stop = deceleration
            .last()
            .zip(stopping_distance)
            .map(|(_, needed)| needed <= params.distance)
            .unwrap_or(false);

        let target = params.clearing_distance();
        let required_acceleration = acceleration
            .points
            .iter()
            .find(|point| point.distance >= target)
            .map(|point| point.acceleration);
        let yellow_distance = acceleration.last().map(|p| p.distance).unwrap_or(0.0);
        let can_clear = required_acceleration.is_some();

        Self {
            required_deceleration,
            stopping_distance,
            can_stop,
            required_acceleration,
            yellow_distance,
            can_clear,
            decision: Decision::from_feasibility(can_stop, can_clear),
        }
    }
}
