//! Logging specs
//!
//! Logs go to stderr and never mix with results on stdout.

use crate::prelude::*;

#[test]
fn quiet_by_default() {
    cli()
        .args(&["format", "-l", "xx", "--fallback", "es", "1000"])
        .passes()
        .stdout_eq("1 segundo\n")
        .stderr_eq("");
}

#[test]
fn rust_log_enables_debug_events_on_stderr() {
    cli()
        .args(&["format", "-l", "xx", "--fallback", "es", "1000"])
        .env("RUST_LOG", "debug")
        .passes()
        .stdout_eq("1 segundo\n")
        .stderr_has("language resolved through fallback");
}

#[test]
fn missing_words_warn() {
    let config = ConfigDir::new();
    let path = config.file("config.toml", "[languages.partial]\ns = \"s\"\n");
    cli()
        .args(&["format", "-l", "partial", "61000"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("1 undefined, 1 s\n")
        .stderr_has("dictionary has no rule for unit");
}
