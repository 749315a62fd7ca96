use crate::prelude::CurvePoint;

pub struct StatsHelper;

impl StatsHelper {
    /// `(min, max)` of the accelerations and distances across `points`.
    pub fn extent(points: &[CurvePoint]) -> Option<((f64, f64), (f64, f64))> {
        let first = points.first()?;
        let mut x = (first.acceleration, first.acceleration);
        let mut y = (first.distance, first.distance);
        for point in &points[1..] {
            x = (x.0.min(point.acceleration), x.1.max(point.acceleration));
            y = (y.0.min(point.distance), y.1.max(point.distance));
        }
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_of_empty_slice_is_none() {
        assert!(StatsHelper::extent(&[]).is_none());
    }

    #[test]
    fn extent_covers_all_points() {
        let points = [
            CurvePoint::new(-1.0, 40.0),
            CurvePoint::new(0.5, 12.0),
            CurvePoint::new(2.0, 30.0),
        ];
        let (x, y) = StatsHelper::extent(&points).unwrap();
        assert_eq!(x, (-1.0, 2.0));
        assert_eq!(y, (12.0, 40.0));
    }
}
