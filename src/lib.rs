pub use cgmath;
pub use curve::{ParametricCurve, RenderAttributes, ResolvedRender};
pub use error::{Error, Result};
pub use graphics::{FrameRecorder, Graphics, Marks};
pub use persist::Persist;
pub use signal::SampledSignal;
pub use util::Interval;

mod curve;
mod error;
mod graphics;
pub mod math;
mod persist;
mod signal;
mod util;
