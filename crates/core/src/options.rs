// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting options.
//!
//! [`Options`] is the fully-defaulted configuration a [`crate::Humanizer`]
//! carries. [`Overrides`] holds the same fields as explicit `Option`s and is
//! layered on top for a single call, or loaded from a configuration file.

use crate::dictionary::Languages;
use crate::error::HumanizeError;
use crate::unit::{Unit, UnitMeasures};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Upper bound for `max_decimal_points`.
pub const MAX_DECIMAL_POINTS: u32 = 100;

/// The complete configuration for one formatting call.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Language id of the dictionary to use.
    pub language: String,
    /// Ids tried, left to right, when `language` is unknown.
    pub fallbacks: Option<Vec<String>>,
    /// Units to decompose into. Order and duplicates do not matter.
    pub units: Vec<Unit>,
    pub unit_measures: UnitMeasures,
    /// Round the smallest displayed unit, carrying into larger units.
    pub round: bool,
    /// Maximum number of non-zero pieces to display.
    pub largest: Option<usize>,
    /// Maximum fractional digits kept on the smallest unit.
    pub max_decimal_points: Option<u32>,
    /// Between pieces. Falls back to the dictionary's, then `", "`.
    pub delimiter: Option<String>,
    /// Between a number and its word.
    pub spacer: String,
    /// Before the final piece. Empty means no conjunction.
    pub conjunction: Option<String>,
    /// Keep a comma before the conjunction when joining three or more pieces.
    pub serial_comma: bool,
    /// Decimal point. Falls back to the dictionary's, then `"."`.
    pub decimal: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            fallbacks: None,
            units: Unit::DEFAULT_LADDER.to_vec(),
            unit_measures: UnitMeasures::default(),
            round: false,
            largest: None,
            max_decimal_points: None,
            delimiter: None,
            spacer: " ".to_string(),
            conjunction: None,
            serial_comma: true,
            decimal: None,
        }
    }
}

impl Options {
    /// These options with every field set in `overrides` replaced.
    ///
    /// `unit_measures` merge per unit; every other field replaces wholesale.
    pub fn merged(&self, overrides: &Overrides) -> Options {
        let mut options = self.clone();
        if let Some(language) = &overrides.language {
            options.language = language.clone();
        }
        if let Some(fallbacks) = &overrides.fallbacks {
            options.fallbacks = Some(fallbacks.clone());
        }
        if let Some(units) = &overrides.units {
            options.units = units.clone();
        }
        if let Some(measures) = &overrides.unit_measures {
            options.unit_measures.apply(measures);
        }
        if let Some(round) = overrides.round {
            options.round = round;
        }
        if let Some(largest) = overrides.largest {
            options.largest = Some(largest);
        }
        if let Some(points) = overrides.max_decimal_points {
            options.max_decimal_points = Some(points);
        }
        if let Some(delimiter) = &overrides.delimiter {
            options.delimiter = Some(delimiter.clone());
        }
        if let Some(spacer) = &overrides.spacer {
            options.spacer = spacer.clone();
        }
        if let Some(conjunction) = &overrides.conjunction {
            options.conjunction = Some(conjunction.clone());
        }
        if let Some(serial_comma) = overrides.serial_comma {
            options.serial_comma = serial_comma;
        }
        if let Some(decimal) = &overrides.decimal {
            options.decimal = Some(decimal.clone());
        }
        options
    }

    /// Check everything that can be rejected without looking up a language.
    pub fn validate(&self) -> Result<(), HumanizeError> {
        if self.fallbacks.as_ref().is_some_and(Vec::is_empty) {
            return Err(HumanizeError::configuration("fallbacks must be a non-empty list"));
        }
        if self.units.is_empty() {
            return Err(HumanizeError::configuration("units must name at least one unit"));
        }
        if self.largest == Some(0) {
            return Err(HumanizeError::configuration("largest must be at least 1"));
        }
        if let Some(points) = self.max_decimal_points {
            if points > MAX_DECIMAL_POINTS {
                return Err(HumanizeError::configuration(format!(
                    "max_decimal_points must be at most {MAX_DECIMAL_POINTS}, got {points}"
                )));
            }
        }
        for &unit in &self.units {
            let ms = self.unit_measures.get(unit);
            if !(ms.is_finite() && ms > 0.0) {
                return Err(HumanizeError::configuration(format!(
                    "unit measure for '{unit}' must be a positive number of milliseconds, got {ms}"
                )));
            }
        }
        Ok(())
    }
}

/// Per-call configuration. Every field left `None` keeps the humanizer's
/// value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub language: Option<String>,
    pub fallbacks: Option<Vec<String>>,
    pub units: Option<Vec<Unit>>,
    pub unit_measures: Option<BTreeMap<Unit, f64>>,
    pub round: Option<bool>,
    pub largest: Option<usize>,
    pub max_decimal_points: Option<u32>,
    pub delimiter: Option<String>,
    pub spacer: Option<String>,
    pub conjunction: Option<String>,
    pub serial_comma: Option<bool>,
    pub decimal: Option<String>,
    /// Replaces the humanizer's language table for this call.
    #[serde(skip)]
    pub languages: Option<Languages>,
}

impl Overrides {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallbacks = Some(fallbacks.into_iter().map(Into::into).collect());
        self
    }

    pub fn units(mut self, units: impl Into<Vec<Unit>>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn unit_measure(mut self, unit: Unit, ms: f64) -> Self {
        self.unit_measures.get_or_insert_with(BTreeMap::new).insert(unit, ms);
        self
    }

    pub fn round(mut self, round: bool) -> Self {
        self.round = Some(round);
        self
    }

    pub fn largest(mut self, largest: usize) -> Self {
        self.largest = Some(largest);
        self
    }

    pub fn max_decimal_points(mut self, points: u32) -> Self {
        self.max_decimal_points = Some(points);
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn spacer(mut self, spacer: impl Into<String>) -> Self {
        self.spacer = Some(spacer.into());
        self
    }

    pub fn conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = Some(conjunction.into());
        self
    }

    pub fn serial_comma(mut self, serial_comma: bool) -> Self {
        self.serial_comma = Some(serial_comma);
        self
    }

    pub fn decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = Some(decimal.into());
        self
    }

    pub fn languages(mut self, languages: Languages) -> Self {
        self.languages = Some(languages);
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
