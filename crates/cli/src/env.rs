// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Config file named by HDUR_CONFIG, if set and non-empty
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("HDUR_CONFIG")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `<config dir>/hdur/config.toml`, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hdur").join("config.toml"))
}
