use serde::{Deserialize, Serialize};

use crate::math::units::{kmh_to_ms, ms_to_kmh};
use crate::params::field::ParamField;
use crate::prelude::ParamResult;

/// Physical inputs of one approach, stored in SI units.
///
/// A zeroed value means the field has not been entered yet; the sweeps
/// treat it as such (no deceleration curve, a single acceleration sample).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleParams {
    /// Distance to the stop line (m).
    pub distance: f64,
    /// Length of the intersection (m).
    pub length: f64,
    /// Upper end of the acceleration sweep (m/s²).
    pub max_acceleration: f64,
    /// Strongest deceleration, zero or negative (m/s²).
    pub min_acceleration: f64,
    /// Yellow interval (s).
    pub yellow_duration: f64,
    /// Current speed (m/s).
    pub current_speed: f64,
    /// Speed limit (m/s).
    pub speed_limit: f64,
}

impl VehicleParams {
    /// Stores a value given in entry units, without range checking.
    pub fn set(&mut self, field: ParamField, value: f64) {
        match field {
            ParamField::Distance => self.distance = value,
            ParamField::Length => self.length = value,
            ParamField::MaxAcceleration => self.max_acceleration = value,
            ParamField::MinAcceleration => self.min_acceleration = -value.abs(),
            ParamField::YellowDuration => self.yellow_duration = value,
            ParamField::CurrentSpeed => self.current_speed = kmh_to_ms(value),
            ParamField::SpeedLimit => self.speed_limit = kmh_to_ms(value),
        }
    }

    /// Checks `value` against the field's range, then stores it.
    pub fn set_checked(&mut self, field: ParamField, value: f64) -> ParamResult<()> {
        let value = field.check(value)?;
        self.set(field, value);
        Ok(())
    }

    /// Reads a value back in entry units.
    pub fn entry_value(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Distance => self.distance,
            ParamField::Length => self.length,
            ParamField::MaxAcceleration => self.max_acceleration,
            ParamField::MinAcceleration => self.min_acceleration,
            ParamField::YellowDuration => self.yellow_duration,
            ParamField::CurrentSpeed => ms_to_kmh(self.current_speed),
            ParamField::SpeedLimit => ms_to_kmh(self.speed_limit),
        }
    }

    /// Fails on the first field outside its accepted range.
    pub fn validate(&self) -> ParamResult<()> {
        for field in ParamField::ALL {
            let value = self.entry_value(field);
            // km/h round trips can land a hair outside the bound
            let value = (value * 1e9).round() / 1e9;
            field.check(value)?;
        }
        Ok(())
    }

    /// Position of the far edge of the intersection (m).
    pub fn clearing_distance(&self) -> f64 {
        self.distance + self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::ParamError;

    fn typical() -> VehicleParams {
        let mut params = VehicleParams::default();
        params.set(ParamField::Distance, 30.0);
        params.set(ParamField::Length, 12.0);
        params.set(ParamField::MaxAcceleration, 2.0);
        params.set(ParamField::MinAcceleration, -3.0);
        params.set(ParamField::YellowDuration, 3.0);
        params.set(ParamField::CurrentSpeed, 54.0);
        params.set(ParamField::SpeedLimit, 72.0);
        params
    }

    #[test]
    fn speeds_are_stored_in_metres_per_second() {
        let params = typical();
        assert!((params.current_speed - 15.0).abs() < 1e-12);
        assert!((params.speed_limit - 20.0).abs() < 1e-12);
        assert!((params.entry_value(ParamField::CurrentSpeed) - 54.0).abs() < 1e-9);
    }

    #[test]
    fn deceleration_is_always_negative() {
        let mut params = VehicleParams::default();
        params.set(ParamField::MinAcceleration, 2.0);
        assert_eq!(params.min_acceleration, -2.0);
    }

    #[test]
    fn validate_accepts_typical_and_rejects_defaults() {
        assert!(typical().validate().is_ok());
        let err = VehicleParams::default().validate().unwrap_err();
        assert!(matches!(
            err,
            ParamError::OutOfRange {
                field: "distance",
                ..
            }
        ));
    }

    #[test]
    fn set_checked_leaves_value_untouched_on_error() {
        let mut params = typical();
        assert!(params.set_checked(ParamField::Distance, 80.0).is_err());
        assert_eq!(params.distance, 30.0);
        params.set_checked(ParamField::Distance, 45.5).unwrap();
        assert_eq!(params.distance, 45.5);
    }

    #[test]
    fn clearing_distance_adds_length() {
        assert_eq!(typical().clearing_distance(), 42.0);
    }
}
