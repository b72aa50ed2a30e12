//! CLI error handling specs
//!
//! Verify error messages and exit codes for bad input.

use crate::prelude::*;

#[test]
fn unknown_language_exits_2() {
    cli()
        .args(&["format", "-l", "xx", "1000"])
        .fails()
        .exits_with(2)
        .stderr_has("no language found (tried xx)");
}

#[test]
fn every_fallback_unknown_exits_2() {
    cli()
        .args(&["format", "-l", "xx", "--fallback", "yy", "--fallback", "EN", "1000"])
        .fails()
        .exits_with(2)
        .stderr_has("no language found (tried xx, yy, EN)");
}

#[test]
fn zero_largest_exits_1() {
    cli()
        .args(&["format", "--largest", "0", "1000"])
        .fails()
        .exits_with(1)
        .stderr_has("invalid configuration: largest must be at least 1");
}

#[test]
fn too_many_decimal_points_exits_1() {
    cli()
        .args(&["format", "--max-decimal-points", "101", "1000"])
        .fails()
        .exits_with(1)
        .stderr_has("max_decimal_points");
}

#[test]
fn missing_input_is_a_usage_error() {
    cli().args(&["format"]).fails().exits_with(1);
}

#[test]
fn non_numeric_input_is_a_usage_error() {
    cli()
        .args(&["format", "soon"])
        .fails()
        .exits_with(1)
        .stderr_has("soon");
}

#[test]
fn unknown_unit_is_a_usage_error() {
    cli()
        .args(&["format", "-u", "h,fortnight", "1000"])
        .fails()
        .exits_with(1)
        .stderr_has("unknown unit 'fortnight'");
}

#[test]
fn errors_leave_stdout_empty() {
    cli()
        .args(&["format", "-l", "xx", "1000", "2000"])
        .fails()
        .stdout_eq("");
}
