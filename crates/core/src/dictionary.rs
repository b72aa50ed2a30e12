// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-language word rules.
//!
//! A [`Dictionary`] maps every [`Unit`] to a [`UnitRule`]: either a fixed
//! word or a function of the count that picks the grammatical form. It also
//! carries the language's own decimal separator, list delimiter, count
//! formatter and word order.

use crate::unit::Unit;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Rendered in place of a unit the dictionary has no rule for.
pub const MISSING_WORD: &str = "undefined";

type RuleFn = dyn Fn(f64) -> String + Send + Sync;
type CountFormatterFn = dyn Fn(f64, &str) -> String + Send + Sync;

/// Per-instance language overrides, keyed by language id.
pub type Languages = HashMap<String, Dictionary>;

/// How the word for one unit is chosen.
#[derive(Clone)]
pub enum UnitRule {
    /// The same word for every count.
    Constant(String),
    /// A pure function of the count.
    Rule(Arc<RuleFn>),
}

impl UnitRule {
    pub fn constant(word: impl Into<String>) -> Self {
        Self::Constant(word.into())
    }

    pub fn rule(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Rule(Arc::new(f))
    }

    /// `one` for a count of exactly 1, `other` for everything else.
    pub fn forms(one: impl Into<String>, other: impl Into<String>) -> Self {
        let (one, other) = (one.into(), other.into());
        Self::rule(move |count| if count == 1.0 { one.clone() } else { other.clone() })
    }

    /// Pick `words[class(count)]`.
    pub fn classed<const N: usize>(words: [&'static str; N], class: fn(f64) -> usize) -> Self {
        Self::rule(move |count| {
            words
                .get(class(count))
                .copied()
                .unwrap_or_default()
                .to_string()
        })
    }

    pub fn word(&self, count: f64) -> String {
        match self {
            UnitRule::Constant(word) => word.clone(),
            UnitRule::Rule(f) => f(count),
        }
    }
}

impl fmt::Debug for UnitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRule::Constant(word) => f.debug_tuple("Constant").field(word).finish(),
            UnitRule::Rule(_) => f.write_str("Rule(..)"),
        }
    }
}

impl From<&str> for UnitRule {
    fn from(word: &str) -> Self {
        Self::constant(word)
    }
}

impl From<String> for UnitRule {
    fn from(word: String) -> Self {
        Self::Constant(word)
    }
}

/// The word rules and formatting overrides for one language.
#[derive(Clone, Default)]
pub struct Dictionary {
    units: [Option<UnitRule>; 8],
    decimal: Option<String>,
    delimiter: Option<String>,
    count_formatter: Option<Arc<CountFormatterFn>>,
    word_first: bool,
}

impl Dictionary {
    /// An empty dictionary; every unit renders as [`MISSING_WORD`] until set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary with one fixed word per unit, in [`Unit::ALL`] order.
    pub fn from_words(words: [&str; 8]) -> Self {
        let mut dictionary = Self::new();
        for (unit, word) in Unit::ALL.into_iter().zip(words) {
            dictionary.units[unit.index()] = Some(UnitRule::constant(word));
        }
        dictionary
    }

    pub fn unit(mut self, unit: Unit, rule: impl Into<UnitRule>) -> Self {
        self.units[unit.index()] = Some(rule.into());
        self
    }

    pub fn decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = Some(decimal.into());
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Replace the default number rendering. The formatter receives the
    /// count and the resolved decimal separator.
    pub fn count_formatter(
        mut self,
        f: impl Fn(f64, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.count_formatter = Some(Arc::new(f));
        self
    }

    /// Render the word before the number.
    pub fn word_first(mut self) -> Self {
        self.word_first = true;
        self
    }

    pub fn rule(&self, unit: Unit) -> Option<&UnitRule> {
        self.units[unit.index()].as_ref()
    }

    pub fn decimal_separator(&self) -> Option<&str> {
        self.decimal.as_deref()
    }

    pub fn list_delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    pub fn is_word_first(&self) -> bool {
        self.word_first
    }

    /// The word for `count` of `unit`, or [`MISSING_WORD`] without a rule.
    pub fn word(&self, unit: Unit, count: f64) -> String {
        match self.rule(unit) {
            Some(rule) => rule.word(count),
            None => {
                tracing::warn!(unit = %unit, "dictionary has no rule for unit");
                MISSING_WORD.to_string()
            }
        }
    }

    /// Render `count` with `decimal` as the decimal point.
    pub fn format_count(&self, count: f64, decimal: &str) -> String {
        match &self.count_formatter {
            Some(f) => f(count, decimal),
            None => number_to_string(count).replacen('.', decimal, 1),
        }
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units: Vec<&str> = Unit::ALL
            .into_iter()
            .filter(|unit| self.units[unit.index()].is_some())
            .map(Unit::code)
            .collect();
        f.debug_struct("Dictionary")
            .field("units", &units)
            .field("decimal", &self.decimal)
            .field("delimiter", &self.delimiter)
            .field("count_formatter", &self.count_formatter.is_some())
            .field("word_first", &self.word_first)
            .finish()
    }
}

/// Shortest round-trip rendering of a count: `8`, `0.25`, `1e+21`.
pub fn number_to_string(count: f64) -> String {
    if count.is_nan() {
        return "NaN".to_string();
    }
    if count == 0.0 {
        return "0".to_string();
    }
    if count.is_infinite() {
        return if count > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format(count).to_string()
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
