use std::f64::consts::PI;
use std::fs::File;
use std::io::BufReader;

use param_curve::{FrameRecorder, ParametricCurve, Persist, RenderAttributes, SampledSignal};

/// Builds the F1-F2 trajectory of a diphthong gliding from [a] towards [i].
fn demo_curve() -> param_curve::Result<ParametricCurve> {
    let glide = |t: f64| 0.5 - 0.5 * (PI * t / 0.3).cos();
    let f1 = SampledSignal::from_fn(0.0, 0.01, 31, |t| 750.0 - 450.0 * glide(t))?;
    let f2 = SampledSignal::from_fn(0.005, 0.00625, 47, |t| 1200.0 + 1000.0 * glide(t))?;
    ParametricCurve::new(&f1, &f2)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let curve = match std::env::args().nth(1) {
        Some(path) => ParametricCurve::read_text(BufReader::new(File::open(path)?))?,
        None => demo_curve()?,
    };
    println!("{}", curve.describe());

    let mut recorder = FrameRecorder::new();
    let attribs = RenderAttributes {
        garnish: true,
        ..Default::default()
    };
    curve.render(&attribs, &mut recorder);
    println!("{}", serde_json::to_string_pretty(&recorder.take_frame())?);
    Ok(())
}
