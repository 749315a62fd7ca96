/// Resolution of every acceleration sweep, in m/s².
pub const SWEEP_STEP: f64 = 0.01;

/// Evenly spaced acceleration samples between zero and a limit.
///
/// Samples are derived from their index rather than accumulated, so the
/// k-th sample is exactly `k * step` regardless of how long the sweep is.
#[derive(Debug, Clone, Copy)]
pub struct SampleGrid {
    step: f64,
    steps: usize,
}

impl SampleGrid {
    /// Grid covering `[0, |limit|]` at [`SWEEP_STEP`] resolution.
    pub fn up_to(limit: f64) -> Self {
        Self::with_step(limit, SWEEP_STEP)
    }

    pub fn with_step(limit: f64, step: f64) -> Self {
        let steps = if step > 0.0 && limit.is_finite() {
            (limit.abs() / step).round() as usize
        } else {
            0
        };
        Self { step, steps }
    }

    /// Number of whole steps between zero and the limit.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn value(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    /// Samples `0, step, ..., limit` (always includes zero).
    pub fn including_zero(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(move |k| self.value(k))
    }

    /// Samples `step, ..., limit` (empty when the limit is zero).
    pub fn excluding_zero(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.steps).map(move |k| self.value(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rounds_to_nearest_step() {
        // 2.3 * 100 is 229.999... in binary floating point
        assert_eq!(SampleGrid::up_to(2.3).steps(), 230);
        assert_eq!(SampleGrid::up_to(-1.5).steps(), 150);
    }

    #[test]
    fn zero_limit_yields_single_or_no_sample() {
        let grid = SampleGrid::up_to(0.0);
        assert_eq!(grid.including_zero().count(), 1);
        assert_eq!(grid.excluding_zero().count(), 0);
    }

    #[test]
    fn samples_are_exact_multiples() {
        let grid = SampleGrid::up_to(3.0);
        let last = grid.including_zero().last().unwrap();
        assert!((last - 3.0).abs() < 1e-12);
        assert!((grid.value(7) - 0.07).abs() < 1e-12);
    }
}
