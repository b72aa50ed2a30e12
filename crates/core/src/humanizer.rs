// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable, configured formatter.

use crate::dictionary::{Dictionary, Languages};
use crate::engine;
use crate::error::HumanizeError;
use crate::options::{Options, Overrides};
use std::time::Duration;

/// A formatter bound to a configuration and its own language table.
///
/// Both fields are public: changing them changes every later call on this
/// instance and nothing else. The language table is consulted before the
/// built-in languages.
#[derive(Debug, Clone, Default)]
pub struct Humanizer {
    pub options: Options,
    pub languages: Languages,
}

impl Humanizer {
    /// An English humanizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            languages: Languages::new(),
        }
    }

    /// Register `dictionary` under `id`, replacing any built-in of that id
    /// for this instance.
    pub fn with_language(mut self, id: impl Into<String>, dictionary: Dictionary) -> Self {
        self.languages.insert(id.into(), dictionary);
        self
    }

    pub fn humanize(&self, ms: f64) -> Result<String, HumanizeError> {
        engine::humanize(ms, &self.options, &self.languages)
    }

    /// Format with `overrides` layered over this instance's options.
    pub fn humanize_with(&self, ms: f64, overrides: &Overrides) -> Result<String, HumanizeError> {
        let options = self.options.merged(overrides);
        let languages = overrides.languages.as_ref().unwrap_or(&self.languages);
        engine::humanize(ms, &options, languages)
    }

    pub fn humanize_duration(&self, duration: Duration) -> Result<String, HumanizeError> {
        self.humanize(duration.as_secs_f64() * 1000.0)
    }
}

/// Format `ms` with the default English configuration.
pub fn humanize(ms: f64) -> Result<String, HumanizeError> {
    Humanizer::new().humanize(ms)
}

/// Format `ms` with `overrides` applied to the default configuration.
pub fn humanize_with(ms: f64, overrides: &Overrides) -> Result<String, HumanizeError> {
    Humanizer::new().humanize_with(ms, overrides)
}

#[cfg(test)]
#[path = "humanizer_tests.rs"]
mod tests;
