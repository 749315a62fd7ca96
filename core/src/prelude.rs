use serde::{Deserialize, Serialize};

use crate::params::VehicleParams;

/// Which branch of the decision a curve describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    Acceleration,
    Deceleration,
}

/// One sample of a sweep: constant acceleration and the distance it yields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    pub acceleration: f64,
    pub distance: f64,
}

impl CurvePoint {
    pub fn new(acceleration: f64, distance: f64) -> Self {
        Self {
            acceleration,
            distance,
        }
    }
}

/// Output produced by each sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    pub kind: CurveKind,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    pub fn new(kind: CurveKind, points: Vec<CurvePoint>) -> Self {
        Self { kind, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }
}

/// Common error type for parameter entry and validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{field} is empty")]
    Empty { field: &'static str },
    #[error("{field}: '{text}' is not a number")]
    Unparsable { field: &'static str, text: String },
    #[error("{field}: at most two decimals are accepted")]
    Precision { field: &'static str },
    #[error("{field}: value is not finite")]
    NonFinite { field: &'static str },
    #[error("{field}: {value} is outside {min} – {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type ParamResult<T> = Result<T, ParamError>;

/// A hypothetical constant-acceleration sweep over a parameter set.
pub trait Sweep {
    fn label(&self) -> &'static str;
    fn evaluate(&self, params: &VehicleParams) -> Curve;
}
