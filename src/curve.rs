use crate::error::{Error, Result};
use crate::graphics::{Graphics, Marks};
use crate::math::{sample_along, ParametricCurve2d, Point2d, SINC_HALF_WIDTH};
use crate::signal::SampledSignal;
use crate::util::Interval;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// A curve in the plane traced by two signals sampled over time,
/// such as the first two formants of a vowel.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "CurveRecord", into = "CurveRecord")]
pub struct ParametricCurve {
    /// The two signals, in the order they were given.
    signals: [SampledSignal; 2],
    /// Which of the stored signals plays the x role.
    x_role: usize,
    /// The time span covered by both signals.
    domain: Interval<f64>,
}

/// The serialised form of a [ParametricCurve]: the x signal, then the y signal.
#[derive(Serialize, Deserialize)]
struct CurveRecord {
    x: SampledSignal,
    y: SampledSignal,
}

/// The attributes of a rendering.
///
/// Any attribute left degenerate, as all of them are by default,
/// is derived from the curve itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderAttributes {
    /// The time window to render. Falls back to the domain of the curve
    /// if `max <= min`.
    pub time_window: Interval<f64>,
    /// The time between rendered points. Falls back to the finer of the two
    /// sampling periods if not positive.
    pub step: f64,
    /// The horizontal world-coordinate range. Falls back to the extrema of
    /// the x signal if `max <= min`.
    pub x_range: Interval<f64>,
    /// The vertical world-coordinate range. Falls back to the extrema of
    /// the y signal if `max <= min`.
    pub y_range: Interval<f64>,
    /// Whether to draw a box and labelled axis marks.
    pub garnish: bool,
    /// The half-width of the interpolation window, in samples.
    /// Wider windows reconstruct the signals more faithfully at a higher cost.
    pub half_width: usize,
}

impl Default for RenderAttributes {
    fn default() -> Self {
        Self {
            time_window: Interval::default(),
            step: 0.0,
            x_range: Interval::default(),
            y_range: Interval::default(),
            garnish: false,
            half_width: SINC_HALF_WIDTH,
        }
    }
}

/// Render attributes with every default filled in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ResolvedRender {
    /// The time window that is sampled.
    pub time_window: Interval<f64>,
    /// The time between sampled points.
    pub step: f64,
    /// The horizontal world-coordinate range.
    pub x_range: Interval<f64>,
    /// The vertical world-coordinate range.
    pub y_range: Interval<f64>,
}

/// Samples a curve with a particular interpolation half-width.
struct Kernel<'a> {
    curve: &'a ParametricCurve,
    half_width: usize,
}

impl ParametricCurve2d for Kernel<'_> {
    fn sample(&self, t: f64) -> Point2d {
        let x = self.curve.x().interpolate(t, self.half_width);
        let y = self.curve.y().interpolate(t, self.half_width);
        Point2d::new(x, y)
    }

    fn bounds(&self) -> Interval<f64> {
        self.curve.domain
    }
}

impl ParametricCurve {
    /// Creates a new curve from copies of the given signals.
    ///
    /// Fails with [Error::NotCreated], caused by [Error::InvalidDomain],
    /// if the spans of the two signals do not overlap. Spans which only
    /// share an end point do not overlap.
    pub fn new(x: &SampledSignal, y: &SampledSignal) -> Result<Self> {
        Self::from_signals(x.clone(), y.clone()).map_err(Error::not_created)
    }

    /// Creates a new curve, taking ownership of the signals.
    fn from_signals(x: SampledSignal, y: SampledSignal) -> Result<Self> {
        let (x_span, y_span) = (x.span(), y.span());
        if !x_span.overlaps(&y_span) {
            return Err(Error::InvalidDomain);
        }
        let domain = x_span.intersection(&y_span);
        debug!("Created parametric curve over {:?}", domain);
        Ok(Self {
            signals: [x, y],
            x_role: 0,
            domain,
        })
    }

    /// The signal currently plotted horizontally.
    pub fn x(&self) -> &SampledSignal {
        &self.signals[self.x_role]
    }

    /// The signal currently plotted vertically.
    pub fn y(&self) -> &SampledSignal {
        &self.signals[1 - self.x_role]
    }

    /// The time span over which both signals are defined.
    pub fn domain(&self) -> Interval<f64> {
        self.domain
    }

    /// Exchanges the roles of the x and y signals.
    pub fn swap_axes(&mut self) {
        self.x_role = 1 - self.x_role;
    }

    /// Fills in the defaults of the given render attributes.
    pub fn resolve(&self, attribs: &RenderAttributes) -> ResolvedRender {
        let (x, y) = (self.x(), self.y());

        let mut time_window = attribs.time_window;
        if !time_window.is_proper() {
            time_window = x.span().intersection(&y.span());
            trace!("Defaulting time window to {:?}", time_window);
        }

        let mut step = attribs.step;
        if !(step > 0.0) {
            step = f64::min(x.step(), y.step());
            trace!("Defaulting time step to {}", step);
        }

        ResolvedRender {
            time_window,
            step,
            x_range: axis_range(attribs.x_range, x),
            y_range: axis_range(attribs.y_range, y),
        }
    }

    /// Samples both signals at evenly spaced times, producing the points
    /// which [ParametricCurve::render] connects.
    ///
    /// The last point is always taken at the right edge of the time window.
    ///
    /// # Panics
    /// Allocating the points aborts if the step is so small relative to the
    /// time window that the point count does not fit in memory.
    pub fn polyline(&self, attribs: &RenderAttributes) -> Vec<Point2d> {
        self.polyline_resolved(&self.resolve(attribs), attribs.half_width)
    }

    fn polyline_resolved(&self, resolved: &ResolvedRender, half_width: usize) -> Vec<Point2d> {
        let kernel = Kernel {
            curve: self,
            half_width,
        };
        sample_along(&kernel, resolved.time_window, resolved.step)
    }

    /// Draws the curve onto a plotting surface.
    ///
    /// # Panics
    /// As for [ParametricCurve::polyline], when the step is vanishingly small.
    pub fn render(&self, attribs: &RenderAttributes, g: &mut impl Graphics) {
        let resolved = self.resolve(attribs);
        let points = self.polyline_resolved(&resolved, attribs.half_width);
        debug!(
            "Rendering {} points over {:?} with step {}",
            points.len(),
            resolved.time_window,
            resolved.step
        );

        if !points.is_empty() {
            g.set_window(resolved.x_range, resolved.y_range);
            g.set_inner();
            g.polyline(&points);
            g.unset_inner();
        }
        if attribs.garnish {
            g.draw_inner_box();
            g.marks_bottom(Marks::GARNISH);
            g.marks_left(Marks::GARNISH);
        }
    }
}

/// Chooses a non-degenerate axis range, falling back to the extrema of the signal.
fn axis_range(range: Interval<f64>, signal: &SampledSignal) -> Interval<f64> {
    let mut range = range;
    if !range.is_proper() {
        range = signal.extrema();
    }
    if range.min == range.max {
        range = Interval::disc(range.min, 1.0);
    }
    range
}

impl ParametricCurve2d for ParametricCurve {
    fn sample(&self, t: f64) -> Point2d {
        let kernel = Kernel {
            curve: self,
            half_width: SINC_HALF_WIDTH,
        };
        kernel.sample(t)
    }

    fn bounds(&self) -> Interval<f64> {
        self.domain
    }
}

impl TryFrom<CurveRecord> for ParametricCurve {
    type Error = Error;

    fn try_from(record: CurveRecord) -> Result<Self> {
        Self::from_signals(record.x, record.y)
    }
}

impl From<ParametricCurve> for CurveRecord {
    fn from(curve: ParametricCurve) -> Self {
        let [first, second] = curve.signals;
        let (x, y) = if curve.x_role == 0 {
            (first, second)
        } else {
            (second, first)
        };
        Self { x, y }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphics::FrameRecorder;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn ramp(start: f64, step: f64, count: usize) -> SampledSignal {
        SampledSignal::from_fn(start, step, count, |t| 2.0 * t + 1.0).unwrap()
    }

    #[test]
    fn overlapping_domain() {
        let a = ramp(0.0, 0.1, 11);
        let b = ramp(0.5, 0.1, 16);
        let curve = ParametricCurve::new(&a, &b).unwrap();
        assert_eq!(curve.domain(), Interval::new(0.5, 1.0));
        assert_eq!(curve.bounds(), curve.domain());
    }

    #[test]
    fn disjoint_domains_are_rejected() {
        let a = ramp(0.0, 0.1, 11);
        let b = ramp(2.0, 0.1, 11);
        let err = ParametricCurve::new(&a, &b).unwrap_err();
        assert!(matches!(err, Error::NotCreated(_)));
        assert!(matches!(err.root_cause(), Error::InvalidDomain));
        assert!(ParametricCurve::new(&b, &a).is_err());
    }

    #[test]
    fn touching_domains_are_rejected() {
        let a = ramp(0.0, 0.25, 5);
        let b = ramp(1.0, 0.25, 5);
        assert!(matches!(
            ParametricCurve::new(&a, &b).unwrap_err().root_cause(),
            Error::InvalidDomain
        ));
        assert!(matches!(
            ParametricCurve::new(&b, &a).unwrap_err().root_cause(),
            Error::InvalidDomain
        ));
    }

    #[test]
    fn random_domains() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _i in 0..100 {
            let a = ramp(rng.gen_range(-10.0..10.0), 0.25, rng.gen_range(2..40));
            let b = ramp(rng.gen_range(-10.0..10.0), 0.5, rng.gen_range(2..20));
            let disjoint = a.end() <= b.start() || a.start() >= b.end();
            match ParametricCurve::new(&a, &b) {
                Ok(curve) => {
                    assert!(!disjoint);
                    assert_eq!(curve.domain().min, f64::max(a.start(), b.start()));
                    assert_eq!(curve.domain().max, f64::min(a.end(), b.end()));
                    assert!(curve.domain().is_proper());
                }
                Err(err) => {
                    assert!(disjoint);
                    assert!(matches!(err.root_cause(), Error::InvalidDomain));
                }
            }
        }
    }

    #[test]
    fn swap_axes_is_an_involution() {
        let a = ramp(0.0, 0.1, 11);
        let b = SampledSignal::from_fn(0.5, 0.05, 31, |t| t.sin()).unwrap();
        let mut curve = ParametricCurve::new(&a, &b).unwrap();
        let domain = curve.domain();

        curve.swap_axes();
        assert_eq!(curve.x(), &b);
        assert_eq!(curve.y(), &a);
        assert_eq!(curve.domain(), domain);

        curve.swap_axes();
        assert_eq!(curve.x(), &a);
        assert_eq!(curve.y(), &b);
        assert_eq!(curve.domain(), domain);
    }

    #[test]
    fn default_polyline() {
        let a = ramp(0.0, 0.1, 11);
        let b = ramp(0.5, 0.1, 16);
        let curve = ParametricCurve::new(&a, &b).unwrap();
        let points = curve.polyline(&RenderAttributes::default());
        assert_eq!(points.len(), 6);
        // Both signals are the same ramp, evaluated at t = 0.5 and t = 1.0.
        assert_approx_eq!(points[0].x, 2.0, 1e-9);
        assert_approx_eq!(points[0].y, 2.0, 1e-9);
        assert_approx_eq!(points[5].x, 3.0, 1e-9);
        assert_approx_eq!(points[5].y, 3.0, 1e-9);
    }

    #[test]
    fn defaults_match_explicit_attributes() {
        let a = SampledSignal::from_fn(0.0, 0.01, 101, |t| 500.0 + 200.0 * t).unwrap();
        let b = SampledSignal::from_fn(0.2, 0.02, 60, |t| 1500.0 - 300.0 * t).unwrap();
        let curve = ParametricCurve::new(&a, &b).unwrap();

        let defaults = RenderAttributes {
            time_window: Interval::new(1.0, -1.0),
            step: -0.5,
            ..Default::default()
        };
        let explicit = RenderAttributes {
            time_window: Interval::new(0.2, 1.0),
            step: 0.01,
            x_range: a.extrema(),
            y_range: b.extrema(),
            ..Default::default()
        };
        assert_eq!(curve.resolve(&defaults), curve.resolve(&explicit));
        assert_eq!(curve.polyline(&defaults), curve.polyline(&explicit));
    }

    #[test]
    fn flat_signal_range_is_padded() {
        let a = SampledSignal::new(0.0, 0.1, vec![4.0; 11]).unwrap();
        let b = ramp(0.0, 0.1, 11);
        let curve = ParametricCurve::new(&a, &b).unwrap();
        let resolved = curve.resolve(&RenderAttributes::default());
        assert_eq!(resolved.x_range, Interval::new(3.0, 5.0));
        assert_approx_eq!(resolved.y_range.min, 1.0);
        assert_approx_eq!(resolved.y_range.max, 3.0);

        let explicit = RenderAttributes {
            x_range: Interval::new(0.0, 10.0),
            ..Default::default()
        };
        assert_eq!(curve.resolve(&explicit).x_range, Interval::new(0.0, 10.0));
    }

    #[test]
    fn last_point_is_window_edge() {
        let a = SampledSignal::from_fn(0.0, 0.01, 201, |t| t.cos()).unwrap();
        let b = SampledSignal::from_fn(0.0, 0.01, 201, |t| t.sin()).unwrap();
        let curve = ParametricCurve::new(&a, &b).unwrap();
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _i in 0..20 {
            let t2 = rng.gen_range(0.5..2.0);
            let attribs = RenderAttributes {
                time_window: Interval::new(0.0, t2),
                step: rng.gen_range(0.003..0.2),
                ..Default::default()
            };
            let points = curve.polyline(&attribs);
            let last = points[points.len() - 1];
            assert_eq!(last, curve.sample(t2));
        }
    }

    #[test]
    fn render_commands() {
        let a = ramp(0.0, 0.1, 11);
        let b = ramp(0.5, 0.1, 16);
        let curve = ParametricCurve::new(&a, &b).unwrap();
        let mut recorder = FrameRecorder::new();

        curve.render(&RenderAttributes::default(), &mut recorder);
        let types: Vec<_> = recorder.commands().iter().map(|c| c["type"].clone()).collect();
        assert_eq!(types, ["window", "set_inner", "polyline", "unset_inner"]);
        assert_eq!(recorder.commands()[2]["points"].as_array().unwrap().len(), 6);

        recorder.take_frame();
        let attribs = RenderAttributes {
            garnish: true,
            ..Default::default()
        };
        curve.render(&attribs, &mut recorder);
        let types: Vec<_> = recorder.commands().iter().map(|c| c["type"].clone()).collect();
        assert_eq!(
            types,
            ["window", "set_inner", "polyline", "unset_inner", "inner_box", "marks_bottom", "marks_left"]
        );
    }
}
