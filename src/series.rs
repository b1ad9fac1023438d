use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use rand::prelude::*;
use rand_distr::Uniform;

/// Shape of a generated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Independent uniform draws in `[min, max)`.
    Random,
    /// Evenly spaced values from `min` upwards, last value below `max`.
    Increasing,
    /// Evenly spaced values from `max` downwards, last value above `min`.
    Decreasing,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Random, Pattern::Increasing, Pattern::Decreasing];
}

/// Immutable, non-empty sequence of samples in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    vals: Vec<f64>,
}

impl Series {
    pub fn vals(&self) -> &[f64] {
        &self.vals
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }
}

/// Generate `count` samples with the given pattern.
///
/// Only [`Pattern::Random`] draws from `rng`; the other patterns are pure.
///
/// # Errors
/// Returns an error if `count` is zero or if `min` is not strictly less than
/// `max`. Both checks happen before anything is allocated.
pub fn generate<R: Rng + ?Sized>(
    pattern: Pattern,
    count: usize,
    min: f64,
    max: f64,
    rng: &mut R,
) -> Result<Series> {
    if count == 0 {
        bail!("series must have at least one element");
    }
    // Written so that NaN bounds are rejected too.
    if !(min < max) {
        bail!("invalid range: min ({min}) must be less than max ({max})");
    }

    let step = (max - min) / count as f64;
    let vals = match pattern {
        Pattern::Random => {
            let dist = Uniform::new(min, max).context("failed to construct uniform distribution")?;
            (0..count).map(|_| dist.sample(rng)).collect()
        }
        Pattern::Increasing => (0..count).map(|i| min + i as f64 * step).collect(),
        Pattern::Decreasing => (0..count).map(|i| max - i as f64 * step).collect(),
    };

    Ok(Series { vals })
}
