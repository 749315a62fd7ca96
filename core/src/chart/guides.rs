use serde::{Deserialize, Serialize};

use crate::params::VehicleParams;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Constant acceleration.
    Vertical,
    /// Constant distance.
    Horizontal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GuideRole {
    Axis,
    StopLine,
    FarEdge,
    MinAcceleration,
    MaxAcceleration,
}

impl GuideRole {
    pub fn label(self) -> &'static str {
        match self {
            GuideRole::Axis => "",
            GuideRole::StopLine => "D",
            GuideRole::FarEdge => "D + L",
            GuideRole::MinAcceleration => "a min",
            GuideRole::MaxAcceleration => "a max",
        }
    }
}

/// A straight reference line across the plot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GuideLine {
    pub orientation: Orientation,
    pub value: f64,
    pub role: GuideRole,
}

impl GuideLine {
    pub fn vertical(value: f64, role: GuideRole) -> Self {
        Self {
            orientation: Orientation::Vertical,
            value,
            role,
        }
    }

    pub fn horizontal(value: f64, role: GuideRole) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            value,
            role,
        }
    }
}

/// Axes plus one line per entered reference value; unset values draw nothing.
pub fn guides_for(params: &VehicleParams) -> Vec<GuideLine> {
    let mut guides = vec![
        GuideLine::vertical(0.0, GuideRole::Axis),
        GuideLine::horizontal(0.0, GuideRole::Axis),
    ];
    if params.distance != 0.0 {
        guides.push(GuideLine::horizontal(params.distance, GuideRole::StopLine));
    }
    if params.length != 0.0 {
        guides.push(GuideLine::horizontal(
            params.clearing_distance(),
            GuideRole::FarEdge,
        ));
    }
    if params.min_acceleration != 0.0 {
        guides.push(GuideLine::vertical(
            params.min_acceleration,
            GuideRole::MinAcceleration,
        ));
    }
    if params.max_acceleration != 0.0 {
        guides.push(GuideLine::vertical(
            params.max_acceleration,
            GuideRole::MaxAcceleration,
        ));
    }
    guides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamField;

    #[test]
    fn only_axes_before_anything_is_entered() {
        let guides = guides_for(&VehicleParams::default());
        assert_eq!(guides.len(), 2);
        assert!(guides.iter().all(|g| g.role == GuideRole::Axis));
    }

    #[test]
    fn far_edge_sits_at_distance_plus_length() {
        let mut params = VehicleParams::default();
        params.set(ParamField::Distance, 20.0);
        params.set(ParamField::Length, 10.0);
        params.set(ParamField::MinAcceleration, -2.0);

        let guides = guides_for(&params);
        let far_edge = guides
            .iter()
            .find(|g| g.role == GuideRole::FarEdge)
            .unwrap();
        assert_eq!(far_edge.orientation, Orientation::Horizontal);
        assert_eq!(far_edge.value, 30.0);
        assert!(guides
            .iter()
            .any(|g| g.role == GuideRole::MinAcceleration && g.value == -2.0));
        assert!(!guides.iter().any(|g| g.role == GuideRole::MaxAcceleration));
    }
}
