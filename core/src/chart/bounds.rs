use serde::{Deserialize, Serialize};

use crate::chart::guides::{GuideLine, Orientation};
use crate::math::stats::StatsHelper;
use crate::prelude::Curve;

const PADDING: f64 = 0.1;
const MIN_SPAN: f64 = 1.0;

/// Visible data rectangle of the plot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    /// Smallest padded rectangle containing the origin, every curve point
    /// and every guide line.
    pub fn fit(curves: &[&Curve], guides: &[GuideLine]) -> Self {
        Self::fit_with_ceiling(curves, guides, None)
    }

    /// Like [`PlotBounds::fit`], but distances above `ceiling` are left out
    /// of the fit. The weakest braking samples reach kilometres and would
    /// otherwise flatten the rest of the plot.
    pub fn fit_with_ceiling(
        curves: &[&Curve],
        guides: &[GuideLine],
        ceiling: Option<f64>,
    ) -> Self {
        let mut x = (0.0_f64, 0.0_f64);
        let mut y = (0.0_f64, 0.0_f64);

        for curve in curves {
            if let Some((cx, cy)) = StatsHelper::extent(&curve.points) {
                x = (x.0.min(cx.0), x.1.max(cx.1));
                y = (y.0.min(cy.0), y.1.max(cy.1));
            }
        }
        for guide in guides {
            match guide.orientation {
                Orientation::Vertical => x = (x.0.min(guide.value), x.1.max(guide.value)),
                Orientation::Horizontal => y = (y.0.min(guide.value), y.1.max(guide.value)),
            }
        }

        if let Some(ceiling) = ceiling.filter(|c| *c > y.0) {
            y.1 = y.1.min(ceiling);
        }

        let (x_min, x_max) = pad(x);
        let (y_min, y_max) = pad(y);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

fn pad((min, max): (f64, f64)) -> (f64, f64) {
    let span = (max - min).max(MIN_SPAN);
    let center = (min + max) / 2.0;
    let half = span * (0.5 + PADDING);
    (center - half, center + half)
}
