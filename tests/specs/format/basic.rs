//! `hdur format` output specs

use crate::prelude::*;

#[test]
fn formats_one_duration() {
    cli().args(&["format", "1000"]).passes().stdout_eq("1 second\n");
}

#[test]
fn formats_each_input_on_its_own_line() {
    cli()
        .args(&["format", "1000", "97320000", "0"])
        .passes()
        .stdout_eq("1 second\n1 day, 3 hours, 2 minutes\n0 seconds\n");
}

#[test]
fn negative_durations_read_like_positive_ones() {
    cli()
        .args(&["format", "-97320000"])
        .passes()
        .stdout_eq("1 day, 3 hours, 2 minutes\n");
}

#[test]
fn fractional_seconds() {
    cli().args(&["format", "2250"]).passes().stdout_eq("2.25 seconds\n");
}

#[test]
fn json_output() {
    let run = cli()
        .args(&["-o", "json", "format", "1000", "61000"])
        .passes();
    let value = run.json();
    assert_eq!(
        value,
        serde_json::json!([
            { "ms": 1000.0, "text": "1 second" },
            { "ms": 61000.0, "text": "1 minute, 1 second" },
        ])
    );
}

#[test]
fn json_flag_after_subcommand() {
    let run = cli().args(&["format", "1000", "--output", "json"]).passes();
    assert_eq!(run.json()[0]["text"], "1 second");
}
