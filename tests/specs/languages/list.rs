//! `hdur languages` specs

use crate::prelude::*;

#[test]
fn lists_builtin_ids_one_per_line() {
    let run = cli().args(&["languages"]).passes();
    let stdout = run.stdout();
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 58);
    assert!(ids.contains(&"en"));
    assert!(ids.contains(&"zh_TW"));
    assert!(!ids.contains(&"gr"));
}

#[test]
fn ids_are_sorted() {
    let run = cli().args(&["languages"]).passes();
    let stdout = run.stdout();
    let ids: Vec<&str> = stdout.lines().collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn json_matches_library() {
    let run = cli().args(&["languages", "-o", "json"]).passes();
    assert_eq!(
        run.json(),
        serde_json::json!(hdur_core::supported_languages())
    );
}

#[test]
fn custom_languages_are_not_listed() {
    let config = ConfigDir::new();
    let path = config.file("hdur.toml", LETTERS_TOML);
    cli()
        .args(&["languages"])
        .env("HDUR_CONFIG", &path)
        .passes()
        .stdout_lacks("letters");
}
