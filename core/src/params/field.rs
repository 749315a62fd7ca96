use serde::{Deserialize, Serialize};

use crate::prelude::{ParamError, ParamResult};

const MAX_DECIMALS: usize = 2;

/// The seven inputs of the form, in the order they are presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    Distance,
    Length,
    MaxAcceleration,
    MinAcceleration,
    YellowDuration,
    CurrentSpeed,
    SpeedLimit,
}

impl ParamField {
    pub const ALL: [ParamField; 7] = [
        ParamField::Distance,
        ParamField::Length,
        ParamField::MaxAcceleration,
        ParamField::MinAcceleration,
        ParamField::YellowDuration,
        ParamField::CurrentSpeed,
        ParamField::SpeedLimit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParamField::Distance => "distance",
            ParamField::Length => "length",
            ParamField::MaxAcceleration => "max acceleration",
            ParamField::MinAcceleration => "min acceleration",
            ParamField::YellowDuration => "yellow duration",
            ParamField::CurrentSpeed => "current speed",
            ParamField::SpeedLimit => "speed limit",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ParamField::Distance => "Distance to the intersection, D (7m – 50m)",
            ParamField::Length => "Length of the intersection, L (7m – 20m)",
            ParamField::MaxAcceleration => "Maximum acceleration of the car (m/s^2)",
            ParamField::MinAcceleration => "Minimum acceleration of the car (m/s^2)",
            ParamField::YellowDuration => "Duration of yellow traffic light, Ty (2s – 4s)",
            ParamField::CurrentSpeed => "Vehicle's current speed, V0 (20 km/h – 80 km/h)",
            ParamField::SpeedLimit => "Speed Limit (km/h)",
        }
    }

    /// Unit the value is entered in.
    pub fn unit(self) -> &'static str {
        match self {
            ParamField::Distance | ParamField::Length => "m",
            ParamField::MaxAcceleration | ParamField::MinAcceleration => "m/s^2",
            ParamField::YellowDuration => "s",
            ParamField::CurrentSpeed | ParamField::SpeedLimit => "km/h",
        }
    }

    /// Inclusive accepted range, in entry units.
    pub fn range(self) -> (f64, f64) {
        match self {
            ParamField::Distance => (7.0, 50.0),
            ParamField::Length => (7.0, 20.0),
            ParamField::MaxAcceleration => (0.0, 3.0),
            ParamField::MinAcceleration => (-3.0, 0.0),
            ParamField::YellowDuration => (2.0, 4.0),
            ParamField::CurrentSpeed => (20.0, 80.0),
            ParamField::SpeedLimit => (40.0, 90.0),
        }
    }

    /// Normalizes and range-checks a value in entry units.
    ///
    /// Deceleration may be typed as a magnitude; it is always stored negative.
    pub fn check(self, value: f64) -> ParamResult<f64> {
        if !value.is_finite() {
            return Err(ParamError::NonFinite { field: self.name() });
        }
        let value = match self {
            ParamField::MinAcceleration if value > 0.0 => -value,
            _ => value,
        };
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(ParamError::OutOfRange {
                field: self.name(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Parses a form entry into a checked value in entry units.
    pub fn parse(self, text: &str) -> ParamResult<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParamError::Empty { field: self.name() });
        }
        let value: f64 = trimmed.parse().map_err(|_| ParamError::Unparsable {
            field: self.name(),
            text: trimmed.to_string(),
        })?;
        if decimals(trimmed) > MAX_DECIMALS || !is_hundredths(value) {
            return Err(ParamError::Precision { field: self.name() });
        }
        self.check(value)
    }
}

// exponent forms such as "5e-3" carry no '.' but still need the check
fn is_hundredths(value: f64) -> bool {
    !value.is_finite() || ((value * 100.0).round() / 100.0 - value).abs() < 1e-9
}

fn decimals(text: &str) -> usize {
    text.split_once('.')
        .map(|(_, fraction)| fraction.chars().take_while(char::is_ascii_digit).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_values_inside_range() {
        assert_eq!(ParamField::Distance.parse("25").unwrap(), 25.0);
        assert_eq!(ParamField::YellowDuration.parse(" 3.25 ").unwrap(), 3.25);
        assert_eq!(ParamField::SpeedLimit.parse("90").unwrap(), 90.0);
    }

    #[test]
    fn parse_negates_positive_deceleration() {
        assert_eq!(ParamField::MinAcceleration.parse("2.5").unwrap(), -2.5);
        assert_eq!(ParamField::MinAcceleration.parse("-1").unwrap(), -1.0);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        let err = ParamField::CurrentSpeed.parse("95").unwrap_err();
        assert!(matches!(err, ParamError::OutOfRange { max, .. } if max == 80.0));
        assert!(ParamField::MaxAcceleration.parse("-0.5").is_err());
        assert!(ParamField::MinAcceleration.parse("3.5").is_err());
    }

    #[test]
    fn parse_rejects_malformed_entries() {
        assert_eq!(
            ParamField::Length.parse(""),
            Err(ParamError::Empty { field: "length" })
        );
        assert!(matches!(
            ParamField::Length.parse("ten"),
            Err(ParamError::Unparsable { .. })
        ));
        assert!(matches!(
            ParamField::Length.parse("10.125"),
            Err(ParamError::Precision { .. })
        ));
        assert!(matches!(
            ParamField::Length.parse("NaN"),
            Err(ParamError::NonFinite { .. })
        ));
    }

    #[test]
    fn parse_rejects_exponent_forms_below_hundredths() {
        assert!(matches!(
            ParamField::MaxAcceleration.parse("5e-3"),
            Err(ParamError::Precision { .. })
        ));
        assert!(matches!(
            ParamField::MaxAcceleration.parse("1e-3"),
            Err(ParamError::Precision { .. })
        ));
        assert_eq!(ParamField::Distance.parse("2.5e1"), Ok(25.0));
    }

    #[test]
    fn accepted_max_acceleration_bounds_the_sweep() {
        use crate::kinematics::AccelerationSweep;
        use crate::params::VehicleParams;
        use crate::prelude::Sweep;

        for text in ["0.01", "1.25", "2.99", "3"] {
            let value = ParamField::MaxAcceleration.parse(text).unwrap();
            let mut params = VehicleParams::default();
            params.set(ParamField::MaxAcceleration, value);
            let curve = AccelerationSweep::new().evaluate(&params);
            let last = curve.last().unwrap();
            assert!(last.acceleration <= value + 1e-9, "{text}");
            assert!((last.acceleration - value).abs() < 1e-9, "{text}");
        }
    }

    #[test]
    fn every_field_has_a_nonempty_range() {
        for field in ParamField::ALL {
            let (min, max) = field.range();
            assert!(min < max, "{}", field.name());
        }
    }
}
