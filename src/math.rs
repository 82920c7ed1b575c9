//! Mathematical structs and functions.

use cgmath::Point2;
pub use curve::{sample_along, ParametricCurve2d};
pub use grid::{grid_len, time_grid};
pub use sinc::{interpolate_sinc, SINC_HALF_WIDTH};

mod curve;
mod grid;
mod sinc;

/// A 2D point
pub type Point2d = Point2<f64>;
