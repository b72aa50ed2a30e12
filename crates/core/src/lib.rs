// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hdur-core: turn millisecond durations into localized phrases
//!
//! ```
//! assert_eq!(hdur_core::humanize(97_320_000.0).unwrap(), "1 day, 3 hours, 2 minutes");
//! ```

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod humanizer;
pub mod languages;
pub mod options;
pub mod unit;

pub use config::{Config, ConfigError, LanguageSpec, WordSpec};
pub use dictionary::{Dictionary, Languages, UnitRule, MISSING_WORD};
pub use error::HumanizeError;
pub use humanizer::{humanize, humanize_with, Humanizer};
pub use languages::supported_languages;
pub use options::{Options, Overrides};
pub use unit::{Unit, UnitMeasures};
