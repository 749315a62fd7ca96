//! Kinematic core for the yellow-light dilemma planner.
//!
//! A vehicle approaching a signalized intersection when the light turns
//! yellow either stops before the line or clears the intersection before
//! the light turns red. The modules here sweep hypothetical constant
//! accelerations over both choices and describe the resulting curves.

pub mod analysis;
pub mod chart;
pub mod kinematics;
pub mod math;
pub mod params;
pub mod prelude;
pub mod report;
pub mod telemetry;

pub use analysis::{evaluate, Assessment, Decision, Evaluation};
pub use params::{ParamField, VehicleParams};
pub use prelude::{Curve, CurveKind, CurvePoint, ParamError, ParamResult, Sweep};
