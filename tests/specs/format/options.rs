//! `hdur format` flag specs

use crate::prelude::*;

#[test]
fn language() {
    cli()
        .args(&["format", "-l", "es", "363000"])
        .passes()
        .stdout_eq("6 minutos, 3 segundos\n");
}

#[test]
fn fallback_languages() {
    cli()
        .args(&["format", "--language", "xx", "--fallback", "yy", "--fallback", "es", "1000"])
        .passes()
        .stdout_eq("1 segundo\n");
}

#[test]
fn units() {
    cli()
        .args(&["format", "-u", "m", "363000"])
        .passes()
        .stdout_eq("6.05 minutes\n");
}

#[test]
fn units_in_any_order() {
    cli()
        .args(&["format", "--units", "m,h", "5400000"])
        .passes()
        .stdout_eq("1 hour, 30 minutes\n");
}

#[test]
fn round() {
    cli()
        .args(&["format", "-u", "h", "--round", "5400000"])
        .passes()
        .stdout_eq("2 hours\n");
}

#[test]
fn largest() {
    cli()
        .args(&["format", "--largest", "2", "97320000"])
        .passes()
        .stdout_eq("1 day, 3 hours\n");
}

#[test]
fn max_decimal_points() {
    cli()
        .args(&["format", "--max-decimal-points", "1", "8123.45"])
        .passes()
        .stdout_eq("8.1 seconds\n");
}

#[test]
fn delimiter_and_spacer() {
    cli()
        .args(&["format", "--delimiter", " + ", "--spacer", "_", "61000"])
        .passes()
        .stdout_eq("1_minute + 1_second\n");
}

#[test]
fn conjunction_with_serial_comma() {
    cli()
        .args(&["format", "--conjunction", " and ", "10874000"])
        .passes()
        .stdout_eq("3 hours, 1 minute, and 14 seconds\n");
}

#[test]
fn conjunction_without_serial_comma() {
    cli()
        .args(&["format", "--conjunction", " and ", "--no-serial-comma", "10874000"])
        .passes()
        .stdout_eq("3 hours, 1 minute and 14 seconds\n");
}

#[test]
fn conjunction_between_two_pieces() {
    cli()
        .args(&["format", "--conjunction", " and ", "260040000"])
        .passes()
        .stdout_eq("3 days and 14 minutes\n");
}

#[test]
fn decimal() {
    cli()
        .args(&["format", "-u", "s", "--decimal", ",", "1234"])
        .passes()
        .stdout_eq("1,234 seconds\n");
}

#[test]
fn round_with_unbounded_largest() {
    cli()
        .args(&["format", "--round", "--largest", "18446744073709551615", "1500"])
        .passes()
        .stdout_eq("2 seconds\n");
}
