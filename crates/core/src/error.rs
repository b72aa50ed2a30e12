// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while formatting a duration

use thiserror::Error;

/// Errors that can occur during humanization.
///
/// Both variants are raised before any piece is rendered; a call either
/// produces a complete string or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HumanizeError {
    /// The configuration is malformed independently of language lookup.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Neither the language nor any fallback names a known dictionary.
    #[error("no language found (tried {})", tried.join(", "))]
    LanguageNotFound { tried: Vec<String> },
}

impl HumanizeError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
