use crate::util::Interval;

/// The number of points in a time grid covering `window` with spacing `step`,
/// i.e. `ceil(length / step) + 1`, or zero if that is not positive.
///
/// The count saturates at `usize::MAX` for a vanishingly small `step`,
/// so collecting such a grid aborts on allocation.
pub fn grid_len(window: Interval<f64>, step: f64) -> usize {
    let count = (window.length() / step).ceil() + 1.0;
    if count >= 1.0 {
        count as usize
    } else {
        0
    }
}

/// Generates evenly spaced times starting at `window.min`.
///
/// Times advance by `step`, except the last, which is snapped to `window.max`
/// so the grid always ends on the right edge of the window regardless of
/// rounding in the step size.
pub fn time_grid(window: Interval<f64>, step: f64) -> impl Iterator<Item = f64> {
    let count = grid_len(window, step);
    let offset = window.min;
    (0..count).map(move |i| {
        if i + 1 == count {
            window.max
        } else {
            offset + (i as f64) * step
        }
    })
}
