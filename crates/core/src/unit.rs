// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration units and their millisecond magnitudes.
//!
//! Units are ordered from largest to smallest; that ordering is the unit
//! ladder the engine decomposes a duration along.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One rung of the unit ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "y")]
    Year,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "m")]
    Minute,
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "ms")]
    Millisecond,
}

/// 365.25 days.
const YEAR_MS: f64 = 31_557_600_000.0;

impl Unit {
    /// Every unit, largest first.
    pub const ALL: [Unit; 8] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// The ladder used when none is configured. Milliseconds are opt-in.
    pub const DEFAULT_LADDER: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Short code used in configuration files and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Unit::Year => "y",
            Unit::Month => "mo",
            Unit::Week => "w",
            Unit::Day => "d",
            Unit::Hour => "h",
            Unit::Minute => "m",
            Unit::Second => "s",
            Unit::Millisecond => "ms",
        }
    }

    /// Default length of this unit in milliseconds.
    pub fn default_ms(self) -> f64 {
        match self {
            Unit::Year => YEAR_MS,
            Unit::Month => YEAR_MS / 12.0,
            Unit::Week => 604_800_000.0,
            Unit::Day => 86_400_000.0,
            Unit::Hour => 3_600_000.0,
            Unit::Minute => 60_000.0,
            Unit::Second => 1_000.0,
            Unit::Millisecond => 1.0,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{0}' (expected one of y, mo, w, d, h, m, s, ms)")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.code() == s)
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// Millisecond magnitude of every unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMeasures([f64; 8]);

impl Default for UnitMeasures {
    fn default() -> Self {
        Self(Unit::ALL.map(Unit::default_ms))
    }
}

impl UnitMeasures {
    pub fn get(&self, unit: Unit) -> f64 {
        self.0[unit.index()]
    }

    pub fn set(&mut self, unit: Unit, ms: f64) {
        self.0[unit.index()] = ms;
    }

    /// Builder-style [`UnitMeasures::set`].
    pub fn with(mut self, unit: Unit, ms: f64) -> Self {
        self.set(unit, ms);
        self
    }

    /// Replace the measures named in `overrides`, keeping the rest.
    pub fn apply(&mut self, overrides: &BTreeMap<Unit, f64>) {
        for (&unit, &ms) in overrides {
            self.set(unit, ms);
        }
    }
}

/// Normalize a configured unit list into ladder order without duplicates.
pub(crate) fn ladder(units: &[Unit]) -> Vec<Unit> {
    let mut ladder = units.to_vec();
    ladder.sort_unstable();
    ladder.dedup();
    ladder
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
