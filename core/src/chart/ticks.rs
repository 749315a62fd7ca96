/// Grid positions between `min` and `max` at a 1/2/5 step giving roughly
/// `target` lines.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let small = ticks(-3.2, 3.2, 6);
        assert_eq!(small.first().copied(), Some(-3.0));
        assert_eq!(small.last().copied(), Some(3.0));
    }

    #[test]
    fn degenerate_ranges_have_no_ticks() {
        assert!(ticks(1.0, 1.0, 5).is_empty());
        assert!(ticks(0.0, f64::INFINITY, 5).is_empty());
        assert!(ticks(0.0, 10.0, 0).is_empty());
    }
}
