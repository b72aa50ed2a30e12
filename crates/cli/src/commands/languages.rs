// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hdur languages` - List built-in language ids

use anyhow::Result;

use crate::output::{print_list, OutputFormat};

pub fn handle(format: OutputFormat) -> Result<()> {
    let ids = hdur_core::supported_languages();
    print_list(&ids, format, |id| id.to_string())
}
