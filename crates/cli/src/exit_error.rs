// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that carry a process exit code through `anyhow`.

use hdur_core::HumanizeError;
use thiserror::Error;

/// Exit code for malformed configuration or usage.
pub const EXIT_CONFIG: i32 = 1;
/// Exit code when no requested language resolves.
pub const EXIT_LANGUAGE: i32 = 2;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<HumanizeError> for ExitError {
    fn from(err: HumanizeError) -> Self {
        let code = match err {
            HumanizeError::Configuration(_) => EXIT_CONFIG,
            HumanizeError::LanguageNotFound { .. } => EXIT_LANGUAGE,
        };
        Self::new(code, err.to_string())
    }
}
