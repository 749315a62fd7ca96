use serde::{Deserialize, Serialize};

use crate::analysis::assessment::Assessment;
use crate::chart::{guides_for, GuideLine, PlotBounds};
use crate::kinematics::{AccelerationSweep, DecelerationSweep};
use crate::params::VehicleParams;
use crate::prelude::{Curve, Sweep};
use crate::telemetry::log::LogManager;

/// Plotted distances beyond this multiple of `D + L` are cut off.
const Y_CEILING_FACTOR: f64 = 3.0;

/// Everything derived from one parameter set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub params: VehicleParams,
    pub acceleration: Curve,
    pub deceleration: Curve,
    pub guides: Vec<GuideLine>,
    pub assessment: Assessment,
}

impl Evaluation {
    pub fn curves(&self) -> [&Curve; 2] {
        [&self.acceleration, &self.deceleration]
    }

    /// Auto-ranged plot rectangle.
    ///
    /// Stopping distances grow without bound as braking weakens, so once the
    /// intersection is known the top is held at a few times its far edge.
    pub fn bounds(&self) -> PlotBounds {
        let reference = self
            .params
            .clearing_distance()
            .max(self.assessment.yellow_distance);
        let ceiling = (reference > 0.0).then(|| reference * Y_CEILING_FACTOR);
        PlotBounds::fit_with_ceiling(&self.curves(), &self.guides, ceiling)
    }
}

/// Runs both sweeps and the assessment; nothing is cached between calls.
pub fn evaluate(params: &VehicleParams) -> Evaluation {
    let logger = LogManager::new();
    let accelerating = AccelerationSweep::new();
    let braking = DecelerationSweep::new();
    let sweeps: [&dyn Sweep; 2] = [&accelerating, &braking];
    let [acceleration, deceleration] = sweeps.map(|sweep| sweep.evaluate(params));
    let assessment = Assessment::from_curves(params, &acceleration, &deceleration);

    logger.record(&format!(
        "evaluated {} {} + {} {} samples -> {:?}",
        acceleration.len(),
        accelerating.label(),
        deceleration.len(),
        braking.label(),
        assessment.decision
    ));

    Evaluation {
        params: *params,
        acceleration,
        deceleration,
        guides: guides_for(params),
        assessment,
    }
}
