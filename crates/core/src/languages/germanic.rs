// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Afrikaans, Danish, Dutch, English, Faroese, German, Icelandic, Norwegian,
//! Swedish.

use crate::dictionary::{Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

pub(super) fn af() -> Dictionary {
    Dictionary::new()
        .unit(Year, "jaar")
        .unit(Month, UnitRule::forms("maand", "maande"))
        .unit(Week, UnitRule::forms("week", "weke"))
        .unit(Day, UnitRule::forms("dag", "dae"))
        .unit(Hour, UnitRule::forms("uur", "ure"))
        .unit(Minute, UnitRule::forms("minuut", "minute"))
        .unit(Second, UnitRule::forms("sekonde", "sekondes"))
        .unit(Millisecond, UnitRule::forms("millisekonde", "millisekondes"))
        .decimal(",")
}

pub(super) fn da() -> Dictionary {
    Dictionary::new()
        .unit(Year, "år")
        .unit(Month, UnitRule::forms("måned", "måneder"))
        .unit(Week, UnitRule::forms("uge", "uger"))
        .unit(Day, UnitRule::forms("dag", "dage"))
        .unit(Hour, UnitRule::forms("time", "timer"))
        .unit(Minute, UnitRule::forms("minut", "minutter"))
        .unit(Second, UnitRule::forms("sekund", "sekunder"))
        .unit(Millisecond, UnitRule::forms("millisekund", "millisekunder"))
        .decimal(",")
}

pub(super) fn de() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("Jahr", "Jahre"))
        .unit(Month, UnitRule::forms("Monat", "Monate"))
        .unit(Week, UnitRule::forms("Woche", "Wochen"))
        .unit(Day, UnitRule::forms("Tag", "Tage"))
        .unit(Hour, UnitRule::forms("Stunde", "Stunden"))
        .unit(Minute, UnitRule::forms("Minute", "Minuten"))
        .unit(Second, UnitRule::forms("Sekunde", "Sekunden"))
        .unit(Millisecond, UnitRule::forms("Millisekunde", "Millisekunden"))
        .decimal(",")
}

pub(super) fn en() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("year", "years"))
        .unit(Month, UnitRule::forms("month", "months"))
        .unit(Week, UnitRule::forms("week", "weeks"))
        .unit(Day, UnitRule::forms("day", "days"))
        .unit(Hour, UnitRule::forms("hour", "hours"))
        .unit(Minute, UnitRule::forms("minute", "minutes"))
        .unit(Second, UnitRule::forms("second", "seconds"))
        .unit(Millisecond, UnitRule::forms("millisecond", "milliseconds"))
        .decimal(".")
}

pub(super) fn fo() -> Dictionary {
    Dictionary::new()
        .unit(Year, "ár")
        .unit(Month, UnitRule::forms("mánaður", "mánaðir"))
        .unit(Week, UnitRule::forms("vika", "vikur"))
        .unit(Day, UnitRule::forms("dagur", "dagar"))
        .unit(Hour, UnitRule::forms("tími", "tímar"))
        .unit(Minute, UnitRule::forms("minuttur", "minuttir"))
        .unit(Second, "sekund")
        .unit(Millisecond, "millisekund")
        .decimal(",")
}

pub(super) fn is() -> Dictionary {
    Dictionary::new()
        .unit(Year, "ár")
        .unit(Month, UnitRule::forms("mánuður", "mánuðir"))
        .unit(Week, UnitRule::forms("vika", "vikur"))
        .unit(Day, UnitRule::forms("dagur", "dagar"))
        .unit(Hour, UnitRule::forms("klukkutími", "klukkutímar"))
        .unit(Minute, UnitRule::forms("mínúta", "mínútur"))
        .unit(Second, UnitRule::forms("sekúnda", "sekúndur"))
        .unit(Millisecond, UnitRule::forms("millisekúnda", "millisekúndur"))
        .decimal(".")
}

pub(super) fn nl() -> Dictionary {
    Dictionary::new()
        .unit(Year, "jaar")
        .unit(Month, UnitRule::forms("maand", "maanden"))
        .unit(Week, UnitRule::forms("week", "weken"))
        .unit(Day, UnitRule::forms("dag", "dagen"))
        .unit(Hour, "uur")
        .unit(Minute, UnitRule::forms("minuut", "minuten"))
        .unit(Second, UnitRule::forms("seconde", "seconden"))
        .unit(Millisecond, UnitRule::forms("milliseconde", "milliseconden"))
        .decimal(",")
}

pub(super) fn no() -> Dictionary {
    Dictionary::new()
        .unit(Year, "år")
        .unit(Month, UnitRule::forms("måned", "måneder"))
        .unit(Week, UnitRule::forms("uke", "uker"))
        .unit(Day, UnitRule::forms("dag", "dager"))
        .unit(Hour, UnitRule::forms("time", "timer"))
        .unit(Minute, UnitRule::forms("minutt", "minutter"))
        .unit(Second, UnitRule::forms("sekund", "sekunder"))
        .unit(Millisecond, UnitRule::forms("millisekund", "millisekunder"))
        .decimal(",")
}

pub(super) fn sv() -> Dictionary {
    Dictionary::new()
        .unit(Year, "år")
        .unit(Month, UnitRule::forms("månad", "månader"))
        .unit(Week, UnitRule::forms("vecka", "veckor"))
        .unit(Day, UnitRule::forms("dag", "dagar"))
        .unit(Hour, UnitRule::forms("timme", "timmar"))
        .unit(Minute, UnitRule::forms("minut", "minuter"))
        .unit(Second, UnitRule::forms("sekund", "sekunder"))
        .unit(Millisecond, UnitRule::forms("millisekund", "millisekunder"))
        .decimal(",")
}
