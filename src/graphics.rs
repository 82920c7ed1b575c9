//! The drawing surface that curves are rendered onto.

use crate::math::Point2d;
use crate::util::Interval;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A plotting surface with a world-coordinate window and an inner viewport.
pub trait Graphics {
    /// Maps the given world-coordinate ranges onto the viewport.
    fn set_window(&mut self, x: Interval<f64>, y: Interval<f64>);

    /// Restricts drawing to the inner viewport.
    fn set_inner(&mut self);

    /// Returns to drawing on the full viewport.
    fn unset_inner(&mut self);

    /// Draws straight segments connecting consecutive points.
    fn polyline(&mut self, points: &[Point2d]);

    /// Draws a box around the inner viewport.
    fn draw_inner_box(&mut self);

    /// Draws marks along the bottom edge of the viewport.
    fn marks_bottom(&mut self, marks: Marks);

    /// Draws marks along the left edge of the viewport.
    fn marks_left(&mut self, marks: Marks);
}

/// Evenly spaced axis marks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Marks {
    /// The number of marks, including both ends of the axis.
    pub count: usize,
    /// Whether each mark is labelled with its value.
    pub numbers: bool,
    /// Whether each mark has a tick.
    pub ticks: bool,
    /// Whether a dotted line is drawn across the viewport at each mark.
    pub dotted_lines: bool,
}

impl Marks {
    /// Labelled ticks at both ends of an axis.
    pub const GARNISH: Marks = Marks {
        count: 2,
        numbers: true,
        ticks: true,
        dotted_lines: false,
    };
}

/// A [Graphics] implementation which records each drawing command as JSON.
#[derive(Default)]
pub struct FrameRecorder {
    frame: Vec<serde_json::Value>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[serde_json::Value] {
        &self.frame
    }

    /// Takes the recorded commands as a JSON array, leaving the recorder empty.
    pub fn take_frame(&mut self) -> serde_json::Value {
        json!(std::mem::take(&mut self.frame))
    }
}

impl Graphics for FrameRecorder {
    fn set_window(&mut self, x: Interval<f64>, y: Interval<f64>) {
        self.frame.push(json!({
            "type": "window",
            "x": [x.min, x.max],
            "y": [y.min, y.max],
        }))
    }

    fn set_inner(&mut self) {
        self.frame.push(json!({ "type": "set_inner" }))
    }

    fn unset_inner(&mut self) {
        self.frame.push(json!({ "type": "unset_inner" }))
    }

    fn polyline(&mut self, points: &[Point2d]) {
        let points: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        self.frame.push(json!({
            "type": "polyline",
            "points": points,
        }))
    }

    fn draw_inner_box(&mut self) {
        self.frame.push(json!({ "type": "inner_box" }))
    }

    fn marks_bottom(&mut self, marks: Marks) {
        self.frame.push(json!({ "type": "marks_bottom", "marks": marks }))
    }

    fn marks_left(&mut self, marks: Marks) {
        self.frame.push(json!({ "type": "marks_left", "marks": marks }))
    }
}
