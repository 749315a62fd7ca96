use serde::{Deserialize, Serialize};

use crate::analysis::{Assessment, Decision, Evaluation};
use crate::params::{ParamField, VehicleParams};
use crate::prelude::CurvePoint;

/// Inputs echoed back in the units they were entered in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportInputs {
    pub distance_m: f64,
    pub length_m: f64,
    pub max_acceleration: f64,
    pub min_acceleration: f64,
    pub yellow_duration_s: f64,
    pub current_speed_kmh: f64,
    pub speed_limit_kmh: f64,
}

impl From<&VehicleParams> for ReportInputs {
    fn from(params: &VehicleParams) -> Self {
        Self {
            distance_m: params.entry_value(ParamField::Distance),
            length_m: params.entry_value(ParamField::Length),
            max_acceleration: params.entry_value(ParamField::MaxAcceleration),
            min_acceleration: params.entry_value(ParamField::MinAcceleration),
            yellow_duration_s: params.entry_value(ParamField::YellowDuration),
            current_speed_kmh: params.entry_value(ParamField::CurrentSpeed),
            speed_limit_kmh: params.entry_value(ParamField::SpeedLimit),
        }
    }
}

/// Serializable record of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub scenario: Option<String>,
    pub inputs: ReportInputs,
    pub decision: Decision,
    pub summary: String,
    pub assessment: Assessment,
    pub acceleration: Vec<CurvePoint>,
    pub deceleration: Vec<CurvePoint>,
}

impl EvaluationReport {
    pub fn new(evaluation: &Evaluation, scenario: Option<String>) -> Self {
        let decision = evaluation.assessment.decision;
        Self {
            scenario,
            inputs: ReportInputs::from(&evaluation.params),
            decision,
            summary: decision.describe().to_string(),
            assessment: evaluation.assessment,
            acceleration: evaluation.acceleration.points.clone(),
            deceleration: evaluation.deceleration.points.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::evaluate;

    #[test]
    fn report_serializes_inputs_in_entry_units() {
        let mut params = VehicleParams::default();
        params.set(ParamField::CurrentSpeed, 54.0);
        params.set(ParamField::MinAcceleration, -2.0);
        let report = EvaluationReport::new(&evaluate(&params), Some("demo".into()));

        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["scenario"], "demo");
        assert!((value["inputs"]["current_speed_kmh"].as_f64().unwrap() - 54.0).abs() < 1e-9);
        assert_eq!(value["deceleration"].as_array().unwrap().len(), 200);
        assert!(value["decision"].is_string());
        assert!(value["acceleration"][0]["distance"].is_number());
    }
}
