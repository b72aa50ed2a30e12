//! Help and version specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli().passes().stdout_has("Usage").stdout_has("format");
}

#[test]
fn format_help_lists_flags() {
    cli()
        .args(&["format", "--help"])
        .passes()
        .stdout_has("--language")
        .stdout_has("--fallback")
        .stdout_has("--max-decimal-points")
        .stdout_has("--no-serial-comma");
}

#[test]
fn version_flag() {
    cli().args(&["--version"]).passes().stdout_has("hdur");
}
