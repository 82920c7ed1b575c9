//! Band-limited reconstruction of uniformly sampled signals.

use std::f64::consts::PI;

/// The default number of samples on each side of the interpolation point
/// that contribute to a windowed-sinc interpolation.
pub const SINC_HALF_WIDTH: usize = 50;

/// Interpolates `samples` at the fractional index `idx` using a sinc kernel
/// tapered by a raised-cosine window.
///
/// Indices are zero-based, so `idx == 2.0` lands exactly on `samples[2]`.
/// Samples `k` with `floor(idx) - half_width < k <= floor(idx) + half_width`
/// contribute; samples beyond either end of the signal are taken to be zero.
///
/// # Parameters
/// * `samples` - The uniformly spaced samples
/// * `idx` - The fractional sample index to interpolate at
/// * `half_width` - The half-width of the window, in samples
///
/// # Returns
/// The interpolated value. Indices before the first or after the last sample
/// return that end sample, a zero `half_width` returns the nearest sample,
/// and an empty slice or a NaN index yields NaN.
pub fn interpolate_sinc(samples: &[f64], idx: f64, half_width: usize) -> f64 {
    let (Some(&first), Some(&last)) = (samples.first(), samples.last()) else {
        return f64::NAN;
    };
    let last_idx = samples.len() - 1;
    if idx.is_nan() {
        return f64::NAN;
    }
    if idx <= 0.0 {
        return first;
    }
    if idx >= last_idx as f64 {
        return last;
    }

    let mid = idx.floor();
    let left = mid as usize;
    if idx == mid {
        return samples[left];
    }
    if half_width == 0 {
        return samples[(idx + 0.5).floor() as usize];
    }

    let lo = left.saturating_sub(half_width - 1);
    let hi = usize::min(left.saturating_add(half_width), last_idx);
    let width = half_width as f64;
    samples[lo..=hi]
        .iter()
        .zip(lo..)
        .map(|(&y, k)| {
            let d = idx - k as f64;
            y * sinc(d) * window(d, width)
        })
        .sum()
}

/// The normalised sinc function, `sin(pi x) / (pi x)`.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let a = PI * x;
        a.sin() / a
    }
}

/// A raised-cosine taper which is 1 at the centre and falls to 0 at `width`.
fn window(d: f64, width: f64) -> f64 {
    if d.abs() >= width {
        0.0
    } else {
        0.5 * (1.0 + (PI * d / width).cos())
    }
}
