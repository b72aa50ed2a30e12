// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults() {
    let options = Options::default();
    assert_eq!(options.language, "en");
    assert_eq!(options.units, Unit::DEFAULT_LADDER.to_vec());
    assert_eq!(options.spacer, " ");
    assert!(options.serial_comma);
    assert!(!options.round);
    assert!(options.validate().is_ok());
}

#[test]
fn merge_replaces_only_set_fields() {
    let base = Options {
        delimiter: Some("+".to_string()),
        ..Options::default()
    };
    let merged = base.merged(&Overrides::default().language("es").largest(2));
    assert_eq!(merged.language, "es");
    assert_eq!(merged.largest, Some(2));
    assert_eq!(merged.delimiter.as_deref(), Some("+"));
    assert_eq!(merged.spacer, " ");
}

#[test]
fn merge_combines_unit_measures_per_unit() {
    let base = Options::default();
    let merged = base.merged(&Overrides::default().unit_measure(Unit::Day, 28_800_000.0));
    assert_eq!(merged.unit_measures.get(Unit::Day), 28_800_000.0);
    assert_eq!(merged.unit_measures.get(Unit::Week), 604_800_000.0);
}

#[yare::parameterized(
    empty_fallbacks = { Overrides::default().fallbacks(Vec::<String>::new()), "fallbacks must be a non-empty list" },
    no_units        = { Overrides::default().units(Vec::new()), "units must name at least one unit" },
    zero_largest    = { Overrides::default().largest(0), "largest must be at least 1" },
    huge_precision  = { Overrides::default().max_decimal_points(101), "max_decimal_points must be at most 100" },
    zero_measure    = { Overrides::default().unit_measure(Unit::Second, 0.0), "unit measure for 's'" },
    negative_measure = { Overrides::default().unit_measure(Unit::Hour, -5.0), "unit measure for 'h'" },
    nan_measure     = { Overrides::default().unit_measure(Unit::Year, f64::NAN), "unit measure for 'y'" },
)]
fn rejects_malformed(overrides: Overrides, message: &str) {
    let err = Options::default().merged(&overrides).validate().unwrap_err();
    match err {
        HumanizeError::Configuration(text) => assert!(text.contains(message), "{text}"),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn unused_unit_measures_are_not_checked() {
    let options = Options::default().merged(
        &Overrides::default()
            .units([Unit::Second])
            .unit_measure(Unit::Year, 0.0),
    );
    assert!(options.validate().is_ok());
}

#[test]
fn overrides_deserialize_from_toml() {
    let overrides: Overrides = toml::from_str(
        r#"
        language = "es"
        fallbacks = ["en"]
        units = ["h", "m"]
        round = true
        largest = 2
        conjunction = " y "
        serial_comma = false

        [unit_measures]
        h = 1800000
        "#,
    )
    .unwrap();
    assert_eq!(overrides.language.as_deref(), Some("es"));
    assert_eq!(overrides.fallbacks, Some(vec!["en".to_string()]));
    assert_eq!(overrides.units, Some(vec![Unit::Hour, Unit::Minute]));
    assert_eq!(overrides.round, Some(true));
    assert_eq!(overrides.largest, Some(2));
    assert_eq!(overrides.serial_comma, Some(false));
    assert_eq!(
        overrides.unit_measures,
        Some(BTreeMap::from([(Unit::Hour, 1_800_000.0)]))
    );
}

#[test]
fn fallbacks_of_the_wrong_type_fail_to_deserialize() {
    assert!(toml::from_str::<Overrides>(r#"fallbacks = "en""#).is_err());
    assert!(serde_json::from_str::<Overrides>(r#"{"fallbacks": null, "language": 3}"#).is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = toml::from_str::<Overrides>(r#"fallback = ["en"]"#).unwrap_err();
    assert!(err.to_string().contains("fallback"), "{err}");
}
