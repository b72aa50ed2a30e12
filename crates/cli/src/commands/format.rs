// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hdur format <MS>...` - Humanize millisecond durations

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use hdur_core::{Config, ConfigError, Humanizer, Overrides, Unit};
use serde::Serialize;

use crate::exit_error::{ExitError, EXIT_CONFIG};
use crate::output::{print_list, OutputFormat};

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Durations in milliseconds
    #[arg(required = true, allow_negative_numbers = true, value_name = "MS")]
    pub ms: Vec<f64>,

    /// Language id (e.g., "en", "zh_CN")
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Language to try when the previous one is unknown (repeatable)
    #[arg(long = "fallback", value_name = "LANG")]
    pub fallbacks: Vec<String>,

    /// Units to use, comma separated (y,mo,w,d,h,m,s,ms)
    #[arg(short = 'u', long, value_delimiter = ',', value_name = "UNITS")]
    pub units: Vec<Unit>,

    /// Round the smallest displayed unit
    #[arg(long, overrides_with = "no_round")]
    pub round: bool,

    /// Keep the fraction on the smallest unit, even if the config rounds
    #[arg(long, overrides_with = "round")]
    pub no_round: bool,

    /// Show at most N units
    #[arg(long, value_name = "N")]
    pub largest: Option<usize>,

    /// Keep at most N decimal places
    #[arg(long, value_name = "N")]
    pub max_decimal_points: Option<u32>,

    /// Text between units
    #[arg(long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Text between a number and its unit
    #[arg(long, allow_hyphen_values = true)]
    pub spacer: Option<String>,

    /// Text before the last unit (e.g., " and ")
    #[arg(long, allow_hyphen_values = true)]
    pub conjunction: Option<String>,

    /// Put a comma before the conjunction (the default)
    #[arg(long, overrides_with = "no_serial_comma")]
    pub serial_comma: bool,

    /// Drop the comma before the conjunction
    #[arg(long, overrides_with = "serial_comma")]
    pub no_serial_comma: bool,

    /// Decimal separator
    #[arg(long)]
    pub decimal: Option<String>,

    /// Config file (TOML, or JSON by extension)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl FormatArgs {
    /// Flags given on the command line, as overrides for the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            language: self.language.clone(),
            fallbacks: (!self.fallbacks.is_empty()).then(|| self.fallbacks.clone()),
            units: (!self.units.is_empty()).then(|| self.units.clone()),
            unit_measures: None,
            round: switch(self.round, self.no_round),
            largest: self.largest,
            max_decimal_points: self.max_decimal_points,
            delimiter: self.delimiter.clone(),
            spacer: self.spacer.clone(),
            conjunction: self.conjunction.clone(),
            serial_comma: switch(self.serial_comma, self.no_serial_comma),
            decimal: self.decimal.clone(),
            languages: None,
        }
    }
}

/// A `--flag`/`--no-flag` pair: `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// One formatted input, as printed with `-o json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formatted {
    pub ms: f64,
    pub text: String,
}

/// Where the config file comes from, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config` or HDUR_CONFIG; must exist.
    Explicit(PathBuf),
    /// The per-user default; skipped when absent.
    Default(PathBuf),
    None,
}

impl ConfigSource {
    /// `--config`, else HDUR_CONFIG, else the per-user default.
    pub fn resolve(
        flag: Option<PathBuf>,
        env: Option<PathBuf>,
        default: Option<PathBuf>,
    ) -> ConfigSource {
        match (flag.or(env), default) {
            (Some(path), _) => ConfigSource::Explicit(path),
            (None, Some(path)) => ConfigSource::Default(path),
            (None, None) => ConfigSource::None,
        }
    }
}

pub fn handle(args: FormatArgs, format: OutputFormat) -> Result<()> {
    let source = ConfigSource::resolve(
        args.config.clone(),
        crate::env::config_path(),
        crate::env::default_config_path(),
    );
    let humanizer = load_humanizer(&source)?;
    let results = humanize_all(&humanizer, &args.ms, &args.overrides())?;
    print_list(&results, format, |f| f.text.clone())
}

/// Build the humanizer described by the config file, or the default one.
pub fn load_humanizer(source: &ConfigSource) -> Result<Humanizer> {
    let path: &Path = match source {
        ConfigSource::Explicit(path) => path,
        ConfigSource::Default(path) if path.is_file() => path,
        ConfigSource::Default(_) | ConfigSource::None => return Ok(Humanizer::new()),
    };
    tracing::debug!(path = %path.display(), "reading config");
    let config = Config::load(path).map_err(config_error)?;
    config.into_humanizer().map_err(config_error)
}

/// Format every input, failing on the first error.
pub fn humanize_all(
    humanizer: &Humanizer,
    inputs: &[f64],
    overrides: &Overrides,
) -> Result<Vec<Formatted>, ExitError> {
    inputs
        .iter()
        .map(|&ms| -> Result<Formatted, ExitError> {
            let text = humanizer.humanize_with(ms, overrides)?;
            Ok(Formatted { ms, text })
        })
        .collect()
}

fn config_error(err: ConfigError) -> anyhow::Error {
    match err {
        ConfigError::Invalid(err) => ExitError::from(err).into(),
        other => anyhow::Error::new(other).context(ExitError::new(EXIT_CONFIG, "invalid config")),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
