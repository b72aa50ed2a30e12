//! Config file specs
//!
//! Config comes from `--config`, else HDUR_CONFIG, else the per-user
//! config dir. Flags override file values.

use crate::prelude::*;

#[test]
fn config_flag_adds_languages() {
    let config = ConfigDir::new();
    let path = config.file("hdur.toml", LETTERS_TOML);
    cli()
        .args(&["format", "--config", path.to_str().unwrap(), "-l", "letters", "61000"])
        .passes()
        .stdout_eq("1 m--1 s\n");
}

#[test]
fn env_var_names_the_config() {
    let config = ConfigDir::new();
    let path = config.file("hdur.toml", "[format]\nlanguage = \"de\"\n");
    cli()
        .args(&["format", "1000"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("1 Sekunde\n");
}

#[test]
fn flag_beats_env_var() {
    let config = ConfigDir::new();
    let german = config.file("de.toml", "[format]\nlanguage = \"de\"\n");
    let spanish = config.file("es.toml", "[format]\nlanguage = \"es\"\n");
    cli()
        .args(&["format", "--config", spanish.to_str().unwrap(), "1000"])
        .env("HDUR_CONFIG", &german)
        .passes()
        .stdout_eq("1 segundo\n");
}

#[test]
fn per_user_config_dir() {
    let config = ConfigDir::new();
    config.file("hdur/config.toml", "[format]\nlanguage = \"fr\"\n");
    cli()
        .args(&["format", "1000"])
        .env("XDG_CONFIG_HOME", config.path())
        .passes()
        .stdout_eq("1 seconde\n");
}

#[test]
fn flags_override_file_values() {
    let config = ConfigDir::new();
    let path = config.file(
        "hdur.toml",
        "[format]\nlanguage = \"de\"\nlargest = 1\ndelimiter = \" | \"\n",
    );
    cli()
        .args(&["format", "-l", "en", "--largest", "2", "3661000"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("1 hour | 1 minute\n");
}

#[test]
fn json_config() {
    let config = ConfigDir::new();
    let path = config.file(
        "hdur.json",
        r#"{ "format": { "units": ["m"], "decimal": "," } }"#,
    );
    cli()
        .args(&["format", "--config", path.to_str().unwrap(), "90000"])
        .passes()
        .stdout_eq("1,5 minutes\n");
}

#[test]
fn custom_language_forms() {
    let config = ConfigDir::new();
    let path = config.file(
        "hdur.toml",
        r#"
[format]
language = "pirate"

[languages.pirate]
s = { one = "tick", other = "ticks" }
m = { one = "glass", other = "glasses" }
"#,
    );
    cli()
        .args(&["format", "121000"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("2 glasses, 1 tick\n");
}

#[test]
fn missing_config_file_exits_1() {
    let config = ConfigDir::new();
    let path = config.path().join("absent.toml");
    cli()
        .args(&["format", "--config", path.to_str().unwrap(), "1000"])
        .fails()
        .exits_with(1)
        .stderr_has("failed to read")
        .stderr_has("absent.toml");
}

#[test]
fn malformed_config_exits_1() {
    let config = ConfigDir::new();
    let path = config.file("hdur.toml", "[format]\nlargets = 2\n");
    cli()
        .args(&["format", "1000"])
        .env("HDUR_CONFIG", &path)
        .fails()
        .exits_with(1)
        .stderr_has("TOML parse error");
}

#[test]
fn invalid_config_options_exit_1() {
    let config = ConfigDir::new();
    let path = config.file("hdur.toml", "[format]\nunits = []\n");
    cli()
        .args(&["format", "1000"])
        .env("HDUR_CONFIG", &path)
        .fails()
        .exits_with(1)
        .stderr_has("units must name at least one unit");
}

#[test]
fn no_round_undoes_config_rounding() {
    let config = ConfigDir::new();
    let path = config.file("hdur.toml", "[format]\nround = true\nunits = [\"s\"]\n");
    cli()
        .args(&["format", "1500"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("2 seconds\n");
    cli()
        .args(&["format", "--no-round", "1500"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("1.5 seconds\n");
}

#[test]
fn serial_comma_undoes_config_setting() {
    let config = ConfigDir::new();
    let path = config.file(
        "hdur.toml",
        "[format]\nconjunction = \" and \"\nserial_comma = false\n",
    );
    cli()
        .args(&["format", "--serial-comma", "10874000"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_eq("3 hours, 1 minute, and 14 seconds\n");
}
