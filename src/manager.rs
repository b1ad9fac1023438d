use crate::config::Config;
use crate::report::{CsvReport, write_report};
use crate::scan::scan;
use crate::series::{Pattern, generate};
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use std::{io::Write, path::Path};

/// Runs reports for a validated configuration.
///
/// Owns the random source so that consecutive reports within one run draw
/// different random series, while a fixed seed makes the whole run
/// reproducible.
pub struct Manager {
    cfg: Config,
    rng: ChaCha12Rng,
}

impl Manager {
    /// Build a manager from a config file, or from the defaults if none is given.
    pub fn new<P: AsRef<Path>>(cfg_file: Option<P>) -> Result<Self> {
        let cfg = match cfg_file {
            Some(file) => {
                let file = file.as_ref();
                Config::from_file(file).with_context(|| format!("failed to load {file:?}"))?
            }
            None => {
                let cfg = Config::default();
                cfg.validate().context("failed to validate default config")?;
                cfg
            }
        };
        Self::with_config(cfg)
    }

    pub fn with_config(cfg: Config) -> Result<Self> {
        log::info!("{cfg:#?}");

        let rng = match cfg.series.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng().context("failed to seed random source")?,
        };

        Ok(Self { cfg, rng })
    }

    /// Generate one series with `pattern` and write its report to `out`.
    pub fn run_report<W: Write>(&mut self, pattern: Pattern, out: &mut W) -> Result<()> {
        let series_cfg = &self.cfg.series;
        let series = generate(
            pattern,
            series_cfg.count,
            series_cfg.min,
            series_cfg.max,
            &mut self.rng,
        )
        .with_context(|| format!("failed to generate {pattern:?} series"))?;
        log::info!("generated {pattern:?} series of {} samples", series.len());

        let scan_cfg = &self.cfg.scan;
        let rows = scan(&series, scan_cfg.window_size, &scan_cfg.decay_steps);
        let n_rows = write_report(CsvReport::new(&mut *out), &scan_cfg.decay_steps, rows)
            .with_context(|| format!("failed to write {pattern:?} report"))?;
        log::info!("wrote {n_rows} rows");

        Ok(())
    }

    /// Write one report per pattern, back to back.
    pub fn run_comparison<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for pattern in Pattern::ALL {
            self.run_report(pattern, out)?;
        }
        Ok(())
    }
}
