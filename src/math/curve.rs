use super::{time_grid, Point2d};
use crate::util::Interval;

/// A parametric curve in 2D space.
pub trait ParametricCurve2d {
    /// Samples the parametric curve.
    fn sample(&self, t: f64) -> Point2d;

    /// Returns the minimum and maximum t-values that define the bounds of the curve.
    fn bounds(&self) -> Interval<f64>;
}

impl<T: ParametricCurve2d + ?Sized> ParametricCurve2d for &T {
    fn sample(&self, t: f64) -> Point2d {
        (&**self).sample(t)
    }

    fn bounds(&self) -> Interval<f64> {
        (&**self).bounds()
    }
}

/// Samples a curve at evenly spaced values of `t` across `window`.
///
/// The last point is always sampled at exactly `window.max`,
/// see [time_grid].
pub fn sample_along(curve: &impl ParametricCurve2d, window: Interval<f64>, step: f64) -> Vec<Point2d> {
    time_grid(window, step).map(|t| curve.sample(t)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    struct Circle;

    impl ParametricCurve2d for Circle {
        fn sample(&self, t: f64) -> Point2d {
            Point2d::new(t.cos(), t.sin())
        }

        fn bounds(&self) -> Interval<f64> {
            Interval::new(0.0, std::f64::consts::TAU)
        }
    }

    #[test]
    fn sample_along_closes_the_circle() {
        let points = sample_along(&Circle, Circle.bounds(), 0.3);
        assert_eq!(points.len(), 22);
        let (first, last) = (points[0], points[points.len() - 1]);
        assert_approx_eq!(first.x, last.x, 1e-12);
        assert_approx_eq!(first.y, last.y, 1e-12);
    }
}
