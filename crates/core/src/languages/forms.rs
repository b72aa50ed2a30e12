// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammatical-number classes shared by several languages.
//!
//! Each function maps a count to an index into that language's word list.
//! Counts may be fractional: the smallest displayed unit can carry a decimal
//! remainder.

pub(super) fn is_fractional(c: f64) -> bool {
    c.floor() != c
}

/// Arabic: `[singular, dual, plural]`. Eleven and up take the singular.
pub(crate) fn arabic(c: f64) -> usize {
    if c == 1.0 {
        0
    } else if c == 2.0 {
        1
    } else if c > 2.0 && c < 11.0 {
        2
    } else {
        0
    }
}

/// Polish: `[one, fractional, few, many]`.
pub(crate) fn polish(c: f64) -> usize {
    if c == 1.0 {
        0
    } else if is_fractional(c) {
        1
    } else if c % 10.0 >= 2.0 && c % 10.0 <= 4.0 && !(c % 100.0 > 10.0 && c % 100.0 < 20.0) {
        2
    } else {
        3
    }
}

/// East and South Slavic: `[many, one, few]`. Fractions take `few`.
pub(crate) fn slavic(c: f64) -> usize {
    if is_fractional(c) {
        2
    } else if (c % 100.0 >= 5.0 && c % 100.0 <= 20.0)
        || (c % 10.0 >= 5.0 && c % 10.0 <= 9.0)
        || c % 10.0 == 0.0
    {
        0
    } else if c % 10.0 == 1.0 {
        1
    } else if c > 1.0 {
        2
    } else {
        0
    }
}

/// Czech and Slovak: `[one, fractional, few, many]`.
pub(crate) fn czech_or_slovak(c: f64) -> usize {
    if c == 1.0 {
        0
    } else if is_fractional(c) {
        1
    } else if c % 10.0 >= 2.0 && c % 10.0 <= 4.0 && c % 100.0 < 10.0 {
        2
    } else {
        3
    }
}

/// Lithuanian: `[one, few, many]`.
pub(crate) fn lithuanian(c: f64) -> usize {
    if c == 1.0 || (c % 10.0 == 1.0 && c % 100.0 > 20.0) {
        0
    } else if is_fractional(c)
        || (c % 10.0 >= 2.0 && c % 100.0 > 20.0)
        || (c % 10.0 >= 2.0 && c % 100.0 < 10.0)
    {
        1
    } else {
        2
    }
}

/// Latvian: `[singular, plural]`; singular for counts ending in 1 but not 11.
pub(crate) fn latvian(c: f64) -> usize {
    if c % 10.0 == 1.0 && c % 100.0 != 11.0 {
        0
    } else {
        1
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
