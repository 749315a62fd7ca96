use anyhow::Context;
use dilemmacore::params::{ParamField, VehicleParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One approach, with values in the units they are entered in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// m
    pub distance: f64,
    /// m
    pub length: f64,
    /// m/s^2
    pub max_acceleration: f64,
    /// m/s^2, a positive value is read as a magnitude
    pub min_acceleration: f64,
    /// s
    pub yellow_duration: f64,
    /// km/h
    pub current_speed: f64,
    /// km/h
    pub speed_limit: f64,
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        distance: f64,
        length: f64,
        max_acceleration: f64,
        min_acceleration: f64,
        yellow_duration: f64,
        current_speed: f64,
        speed_limit: f64,
    ) -> Self {
        Self {
            name: None,
            distance,
            length,
            max_acceleration,
            min_acceleration,
            yellow_duration,
            current_speed,
            speed_limit,
        }
    }

    pub fn value(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Distance => self.distance,
            ParamField::Length => self.length,
            ParamField::MaxAcceleration => self.max_acceleration,
            ParamField::MinAcceleration => self.min_acceleration,
            ParamField::YellowDuration => self.yellow_duration,
            ParamField::CurrentSpeed => self.current_speed,
            ParamField::SpeedLimit => self.speed_limit,
        }
    }

    /// Range-checks every field and converts to SI units.
    pub fn to_params(&self) -> anyhow::Result<VehicleParams> {
        let mut params = VehicleParams::default();
        for field in ParamField::ALL {
            params
                .set_checked(field, self.value(field))
                .with_context(|| format!("invalid {}", field.name()))?;
        }
        Ok(params)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("command line")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_params() {
        let cfg = ScenarioConfig::from_args(30.0, 12.0, 2.0, 3.0, 3.0, 54.0, 72.0);
        let params = cfg.to_params().unwrap();
        assert_eq!(params.min_acceleration, -3.0);
        assert!((params.current_speed - 15.0).abs() < 1e-12);
    }

    #[test]
    fn config_rejects_out_of_range_fields() {
        let cfg = ScenarioConfig::from_args(30.0, 12.0, 2.0, -3.0, 6.0, 54.0, 72.0);
        let err = cfg.to_params().unwrap_err();
        assert!(err.to_string().contains("yellow duration"));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"name: school zone\ndistance: 25\nlength: 9.5\nmax_acceleration: 1.5\n\
min_acceleration: -2.5\nyellow_duration: 3\ncurrent_speed: 40\nspeed_limit: 50\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ScenarioConfig::load(&path).unwrap();
        assert_eq!(cfg.label(), "school zone");
        assert_eq!(cfg.length, 9.5);
        assert!(cfg.to_params().is_ok());
    }

    #[test]
    fn config_load_reports_missing_fields() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"distance: 25\n").unwrap();
        let path = temp.into_temp_path();
        let err = ScenarioConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing scenario"));
    }
}
