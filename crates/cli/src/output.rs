// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `items` one per line as text, or as a pretty JSON array.
pub fn render_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(items.iter().map(|item| format!("{}\n", text(item))).collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(items)?)),
    }
}

/// Print `items` to stdout; see [`render_list`].
pub fn print_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    print!("{}", render_list(items, format, text)?);
    Ok(())
}
