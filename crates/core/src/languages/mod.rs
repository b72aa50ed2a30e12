// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in language registry and dictionary resolution.
//!
//! The built-in table is immutable and built once on first use. Callers add
//! or replace languages through a per-instance [`Languages`] table that is
//! consulted before it.

mod asian;
mod baltic;
mod european;
mod forms;
mod germanic;
mod romance;
mod slavic;
mod west_asia_africa;

use crate::dictionary::{Dictionary, Languages};
use crate::error::HumanizeError;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Every built-in language, sorted by id.
const BUILTIN: &[(&str, fn() -> Dictionary)] = &[
    ("af", germanic::af),
    ("ar", west_asia_africa::ar),
    ("bg", slavic::bg),
    ("bn", asian::bn),
    ("ca", romance::ca),
    ("cs", slavic::cs),
    ("cy", european::cy),
    ("da", germanic::da),
    ("de", germanic::de),
    ("el", european::el),
    ("en", germanic::en),
    ("eo", european::eo),
    ("es", romance::es),
    ("et", european::et),
    ("eu", european::eu),
    ("fa", west_asia_africa::fa),
    ("fi", european::fi),
    ("fo", germanic::fo),
    ("fr", romance::fr),
    ("he", west_asia_africa::he),
    ("hi", asian::hi),
    ("hr", slavic::hr),
    ("hu", european::hu),
    ("id", asian::id),
    ("is", germanic::is),
    ("it", romance::it),
    ("ja", asian::ja),
    ("km", asian::km),
    ("kn", asian::kn),
    ("ko", asian::ko),
    ("ku", west_asia_africa::ku),
    ("lo", asian::lo),
    ("lt", baltic::lt),
    ("lv", baltic::lv),
    ("mk", slavic::mk),
    ("mr", asian::mr),
    ("ms", asian::ms),
    ("nl", germanic::nl),
    ("no", germanic::no),
    ("pl", slavic::pl),
    ("pt", romance::pt),
    ("ro", romance::ro),
    ("ru", slavic::ru),
    ("sk", slavic::sk),
    ("sl", slavic::sl),
    ("sq", european::sq),
    ("sr", slavic::sr),
    ("sv", germanic::sv),
    ("sw", west_asia_africa::sw),
    ("ta", asian::ta),
    ("te", asian::te),
    ("th", asian::th),
    ("tr", european::tr),
    ("uk", slavic::uk),
    ("ur", west_asia_africa::ur),
    ("vi", asian::vi),
    ("zh_CN", asian::zh_cn),
    ("zh_TW", asian::zh_tw),
];

/// Legacy ids that resolve to a built-in but are not listed.
const ALIASES: &[(&str, &str)] = &[("gr", "el")];

static DICTIONARIES: LazyLock<HashMap<&'static str, Dictionary>> =
    LazyLock::new(|| BUILTIN.iter().map(|&(id, build)| (id, build())).collect());

/// Ids of the built-in languages, sorted. Run-time languages are never
/// included; every call returns a fresh vector.
pub fn supported_languages() -> Vec<&'static str> {
    BUILTIN.iter().map(|&(id, _)| id).collect()
}

/// Look up a built-in dictionary by exact id (aliases included).
pub fn builtin(id: &str) -> Option<&'static Dictionary> {
    let id = ALIASES
        .iter()
        .find(|&&(alias, _)| alias == id)
        .map_or(id, |&(_, target)| target);
    DICTIONARIES.get(id)
}

/// Resolve the dictionary for `language`, trying each fallback in order.
///
/// For every candidate the `overrides` table wins over the built-ins.
/// `fallbacks`, when given, must be non-empty.
pub fn resolve<'a>(
    language: &str,
    fallbacks: Option<&[String]>,
    overrides: &'a Languages,
) -> Result<&'a Dictionary, HumanizeError> {
    let fallbacks = match fallbacks {
        Some([]) => {
            return Err(HumanizeError::configuration("fallbacks must be a non-empty list"));
        }
        Some(fallbacks) => fallbacks,
        None => &[],
    };

    let candidates = std::iter::once(language).chain(fallbacks.iter().map(String::as_str));
    for (position, candidate) in candidates.enumerate() {
        let found = match overrides.get(candidate) {
            Some(dictionary) => {
                if builtin(candidate).is_some() {
                    tracing::debug!(language = candidate, "custom dictionary shadows built-in");
                }
                Some(dictionary)
            }
            None => builtin(candidate),
        };
        if let Some(dictionary) = found {
            if position > 0 {
                tracing::debug!(
                    requested = language,
                    resolved = candidate,
                    "language resolved through fallback"
                );
            }
            return Ok(dictionary);
        }
    }

    let mut tried = vec![language.to_string()];
    tried.extend(fallbacks.iter().cloned());
    Err(HumanizeError::LanguageNotFound { tried })
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
