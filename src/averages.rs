//! Moving-window averages.
//!
//! Every function expects a non-empty window. Callers are responsible for
//! never passing an empty one; the results are meaningless (NaN) otherwise.

use crate::window::Window;

/// Arithmetic mean of the window.
pub fn simple_mean(win: Window) -> f64 {
    win.as_chronological().iter().sum::<f64>() / win.len() as f64
}

/// Linearly weighted mean of the window.
///
/// The newest sample has weight `n`, the next one `n - 1`, down to weight 1
/// for the oldest sample. The weights sum to `n (n + 1) / 2`.
pub fn linear_weighted_mean(win: Window) -> f64 {
    let n_vals = win.len() as f64;
    let weighted_sum: f64 = win
        .newest_first()
        .enumerate()
        .map(|(age, val)| (n_vals - age as f64) * val)
        .sum();
    weighted_sum / (n_vals * (n_vals + 1.0) / 2.0)
}

/// Exponentially decaying weighted sum of the window.
///
/// The newest sample has weight `step` and each older sample's weight is the
/// previous one times `1 - step`. The result is not divided by the realized
/// total weight `1 - (1 - step)^n`, so it approximates the infinite-window
/// average and sits slightly below it for short windows.
pub fn exponential_mean(win: Window, step: f64) -> f64 {
    let mut weight = step;
    let mut sum = 0.0;
    for val in win.newest_first() {
        sum += weight * val;
        weight *= 1.0 - step;
    }
    sum
}
