//! Chronological windows over a series.

/// Contiguous run of samples taken from a series.
///
/// The backing slice is stored in chronological order (oldest first), exactly
/// as it appears in the series. Averages walk it by *age* instead: age 0 is
/// the newest sample, age `len() - 1` the oldest. Use [`Window::newest_first`]
/// for that order.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    chrono: &'a [f64],
}

impl<'a> Window<'a> {
    /// Wrap a chronologically ordered slice (oldest sample first).
    pub fn from_chronological(chrono: &'a [f64]) -> Self {
        Self { chrono }
    }

    /// Number of samples in the window.
    pub fn len(&self) -> usize {
        self.chrono.len()
    }

    /// Iterate over samples from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = f64> + 'a {
        self.chrono.iter().rev().copied()
    }

    /// Underlying samples, oldest first.
    pub fn as_chronological(&self) -> &'a [f64] {
        self.chrono
    }
}
