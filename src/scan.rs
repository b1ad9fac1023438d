use crate::averages::{exponential_mean, linear_weighted_mean, simple_mean};
use crate::series::Series;
use crate::window::Window;

/// Averages computed for one window position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Logical index of the window (0 for the first full window).
    pub idx: usize,
    pub avg: f64,
    pub lin_avg: f64,
    /// One exponential mean per decay step, in sweep order.
    pub exp_avgs: Vec<f64>,
}

/// Lazy, finite sequence of [`ResultRow`]s over a series.
///
/// For every end position `p` in `win_size..series.len()` the window
/// `series[p - win_size..p]` is averaged and tagged with index `p - win_size`.
/// Rows come out in strictly increasing index order.
pub struct Scan<'a> {
    vals: &'a [f64],
    win_size: usize,
    decay_steps: &'a [f64],
    end: usize,
}

/// Start a scan. Calling it again with the same inputs yields the same rows.
///
/// `win_size` must be at least 1; a series shorter than the window yields no
/// rows.
pub fn scan<'a>(series: &'a Series, win_size: usize, decay_steps: &'a [f64]) -> Scan<'a> {
    debug_assert!(win_size >= 1, "window size must be at least 1");
    Scan {
        vals: series.vals(),
        win_size,
        decay_steps,
        end: win_size,
    }
}

impl Iterator for Scan<'_> {
    type Item = ResultRow;

    fn next(&mut self) -> Option<ResultRow> {
        if self.end >= self.vals.len() {
            return None;
        }
        let start = self.end - self.win_size;
        let win = Window::from_chronological(&self.vals[start..self.end]);
        self.end += 1;

        Some(ResultRow {
            idx: start,
            avg: simple_mean(win),
            lin_avg: linear_weighted_mean(win),
            exp_avgs: self
                .decay_steps
                .iter()
                .map(|&step| exponential_mean(win, step))
                .collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vals.len().saturating_sub(self.end);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Scan<'_> {}
