// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration files.
//!
//! A config file has an optional `[format]` table holding [`Overrides`] and
//! an optional `[languages.<id>]` table per custom language:
//!
//! ```toml
//! [format]
//! language = "pirate"
//! largest = 2
//!
//! [languages.pirate]
//! s = { one = "tick", other = "ticks" }
//! m = "glass"
//! delimiter = " arr "
//! ```

use crate::dictionary::{Dictionary, Languages, UnitRule};
use crate::error::HumanizeError;
use crate::humanizer::Humanizer;
use crate::options::{Options, Overrides};
use crate::unit::Unit;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] HumanizeError),
}

/// Config file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Overrides,
    pub languages: BTreeMap<String, LanguageSpec>,
}

/// A custom language as written in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageSpec {
    pub y: Option<WordSpec>,
    pub mo: Option<WordSpec>,
    pub w: Option<WordSpec>,
    pub d: Option<WordSpec>,
    pub h: Option<WordSpec>,
    pub m: Option<WordSpec>,
    pub s: Option<WordSpec>,
    pub ms: Option<WordSpec>,
    pub decimal: Option<String>,
    pub delimiter: Option<String>,
    pub word_first: bool,
}

/// A unit word: the same for every count, or singular/plural forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WordSpec {
    Constant(String),
    Forms { one: String, other: String },
}

impl From<WordSpec> for UnitRule {
    fn from(spec: WordSpec) -> Self {
        match spec {
            WordSpec::Constant(word) => UnitRule::constant(word),
            WordSpec::Forms { one, other } => UnitRule::forms(one, other),
        }
    }
}

impl LanguageSpec {
    pub fn into_dictionary(self) -> Dictionary {
        let words = [
            (Unit::Year, self.y),
            (Unit::Month, self.mo),
            (Unit::Week, self.w),
            (Unit::Day, self.d),
            (Unit::Hour, self.h),
            (Unit::Minute, self.m),
            (Unit::Second, self.s),
            (Unit::Millisecond, self.ms),
        ];
        let mut dictionary = words
            .into_iter()
            .filter_map(|(unit, word)| word.map(|word| (unit, word)))
            .fold(Dictionary::new(), |dictionary, (unit, word)| {
                dictionary.unit(unit, word)
            });
        if let Some(decimal) = self.decimal {
            dictionary = dictionary.decimal(decimal);
        }
        if let Some(delimiter) = self.delimiter {
            dictionary = dictionary.delimiter(delimiter);
        }
        if self.word_first {
            dictionary = dictionary.word_first();
        }
        dictionary
    }
}

impl Config {
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        Ok(match format {
            Format::Toml => toml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Format::Toml)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Format::Json)
    }

    /// Read and parse `path`, choosing the syntax from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, Format::from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            languages = config.languages.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// The custom languages as dictionaries, keyed by id.
    pub fn languages(&self) -> Languages {
        self.languages
            .iter()
            .map(|(id, spec)| (id.clone(), spec.clone().into_dictionary()))
            .collect()
    }

    /// Build a humanizer from this config, rejecting malformed options.
    pub fn into_humanizer(self) -> Result<Humanizer, ConfigError> {
        let options = Options::default().merged(&self.format);
        options.validate()?;
        let languages = self.languages();
        Ok(Humanizer { options, languages })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
