use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    fmt::Debug,
    fs,
    ops::{Bound, RangeBounds},
    path::Path,
};

/// Run configuration.
///
/// Loaded from a TOML file and validated before use.
/// Missing fields take the values of [`Config::default`].
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub series: SeriesConfig,
    pub scan: ScanConfig,
}

/// Series generation parameters.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Number of samples.
    pub count: usize,
    /// Lower bound of the samples.
    pub min: f64,
    /// Upper bound of the samples.
    pub max: f64,
    /// Seed of the random source (drawn from the OS if absent).
    pub seed: Option<u64>,
}

/// Window scan parameters.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Number of samples per window.
    pub window_size: usize,
    /// Decay steps of the exponential means, in column order.
    pub decay_steps: Vec<f64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            count: 200,
            min: 1.0,
            max: 3600.0,
            seed: None,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_size: 60,
            decay_steps: (1..10).map(|i| i as f64 / 10.0).collect(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Config`] from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let series = &self.series;
        check_num(series.count, 1..10_000_000).context("invalid number of samples")?;
        if !series.min.is_finite() || !series.max.is_finite() {
            bail!("bounds must be finite, but are {} and {}", series.min, series.max);
        }
        if series.min >= series.max {
            bail!("invalid range: min ({}) must be less than max ({})", series.min, series.max);
        }

        let scan = &self.scan;
        check_num(scan.window_size, 1..=series.count).context("invalid window size")?;
        if scan.decay_steps.is_empty() {
            bail!("at least one decay step is required");
        }
        for (i_step, &step) in scan.decay_steps.iter().enumerate() {
            check_num(step, (Bound::Excluded(0.0), Bound::Excluded(1.0)))
                .with_context(|| format!("invalid decay step {i_step}"))?;
        }

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
