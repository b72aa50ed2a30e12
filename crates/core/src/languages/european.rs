// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Albanian, Basque, Esperanto, Estonian, Finnish, Greek, Hungarian,
//! Turkish, Welsh.

use crate::dictionary::{Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

pub(super) fn cy() -> Dictionary {
    Dictionary::from_words([
        "flwyddyn",
        "mis",
        "wythnos",
        "diwrnod",
        "awr",
        "munud",
        "eiliad",
        "milieiliad",
    ])
}

pub(super) fn el() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("χρόνος", "χρόνια"))
        .unit(Month, UnitRule::forms("μήνας", "μήνες"))
        .unit(Week, UnitRule::forms("εβδομάδα", "εβδομάδες"))
        .unit(Day, UnitRule::forms("μέρα", "μέρες"))
        .unit(Hour, UnitRule::forms("ώρα", "ώρες"))
        .unit(Minute, UnitRule::forms("λεπτό", "λεπτά"))
        .unit(Second, UnitRule::forms("δευτερόλεπτο", "δευτερόλεπτα"))
        .unit(
            Millisecond,
            UnitRule::forms("χιλιοστό του δευτερολέπτου", "χιλιοστά του δευτερολέπτου"),
        )
        .decimal(",")
}

pub(super) fn eo() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("jaro", "jaroj"))
        .unit(Month, UnitRule::forms("monato", "monatoj"))
        .unit(Week, UnitRule::forms("semajno", "semajnoj"))
        .unit(Day, UnitRule::forms("tago", "tagoj"))
        .unit(Hour, UnitRule::forms("horo", "horoj"))
        .unit(Minute, UnitRule::forms("minuto", "minutoj"))
        .unit(Second, UnitRule::forms("sekundo", "sekundoj"))
        .unit(Millisecond, UnitRule::forms("milisekundo", "milisekundoj"))
        .decimal(",")
}

pub(super) fn et() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("aasta", "aastat"))
        .unit(Month, UnitRule::forms("kuu", "kuud"))
        .unit(Week, UnitRule::forms("nädal", "nädalat"))
        .unit(Day, UnitRule::forms("päev", "päeva"))
        .unit(Hour, UnitRule::forms("tund", "tundi"))
        .unit(Minute, UnitRule::forms("minut", "minutit"))
        .unit(Second, UnitRule::forms("sekund", "sekundit"))
        .unit(Millisecond, UnitRule::forms("millisekund", "millisekundit"))
        .decimal(",")
}

pub(super) fn eu() -> Dictionary {
    Dictionary::from_words([
        "urte",
        "hilabete",
        "aste",
        "egun",
        "ordu",
        "minutu",
        "segundo",
        "milisegundo",
    ])
    .decimal(",")
}

pub(super) fn fi() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("vuosi", "vuotta"))
        .unit(Month, UnitRule::forms("kuukausi", "kuukautta"))
        .unit(Week, UnitRule::forms("viikko", "viikkoa"))
        .unit(Day, UnitRule::forms("päivä", "päivää"))
        .unit(Hour, UnitRule::forms("tunti", "tuntia"))
        .unit(Minute, UnitRule::forms("minuutti", "minuuttia"))
        .unit(Second, UnitRule::forms("sekunti", "sekuntia"))
        .unit(Millisecond, UnitRule::forms("millisekunti", "millisekuntia"))
        .decimal(",")
}

pub(super) fn hu() -> Dictionary {
    Dictionary::from_words([
        "év",
        "hónap",
        "hét",
        "nap",
        "óra",
        "perc",
        "másodperc",
        "ezredmásodperc",
    ])
    .decimal(",")
}

pub(super) fn sq() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("vit", "vjet"))
        .unit(Month, "muaj")
        .unit(Week, "javë")
        .unit(Day, "ditë")
        .unit(Hour, "orë")
        .unit(Minute, UnitRule::forms("minutë", "minuta"))
        .unit(Second, UnitRule::forms("sekondë", "sekonda"))
        .unit(Millisecond, UnitRule::forms("milisekondë", "milisekonda"))
        .decimal(",")
}

pub(super) fn tr() -> Dictionary {
    Dictionary::from_words([
        "yıl",
        "ay",
        "hafta",
        "gün",
        "saat",
        "dakika",
        "saniye",
        "milisaniye",
    ])
    .decimal(",")
}
