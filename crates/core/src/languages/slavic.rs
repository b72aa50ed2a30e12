// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bulgarian, Croatian, Czech, Macedonian, Polish, Russian, Serbian, Slovak,
//! Slovenian, Ukrainian.

use super::forms::{self, is_fractional};
use crate::dictionary::{Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

fn ends_in_two_to_four(c: f64) -> bool {
    let last = c % 10.0;
    last == 2.0 || last == 3.0 || last == 4.0
}

pub(super) fn bg() -> Dictionary {
    let slavic = forms::slavic;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["години", "година", "години"], slavic))
        .unit(Month, UnitRule::classed(["месеца", "месец", "месеца"], slavic))
        .unit(Week, UnitRule::classed(["седмици", "седмица", "седмици"], slavic))
        .unit(Day, UnitRule::classed(["дни", "ден", "дни"], slavic))
        .unit(Hour, UnitRule::classed(["часа", "час", "часа"], slavic))
        .unit(Minute, UnitRule::classed(["минути", "минута", "минути"], slavic))
        .unit(Second, UnitRule::classed(["секунди", "секунда", "секунди"], slavic))
        .unit(
            Millisecond,
            UnitRule::classed(["милисекунди", "милисекунда", "милисекунди"], slavic),
        )
        .decimal(",")
}

pub(super) fn cs() -> Dictionary {
    let class = forms::czech_or_slovak;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["rok", "roku", "roky", "let"], class))
        .unit(Month, UnitRule::classed(["měsíc", "měsíce", "měsíce", "měsíců"], class))
        .unit(Week, UnitRule::classed(["týden", "týdne", "týdny", "týdnů"], class))
        .unit(Day, UnitRule::classed(["den", "dne", "dny", "dní"], class))
        .unit(Hour, UnitRule::classed(["hodina", "hodiny", "hodiny", "hodin"], class))
        .unit(Minute, UnitRule::classed(["minuta", "minuty", "minuty", "minut"], class))
        .unit(Second, UnitRule::classed(["sekunda", "sekundy", "sekundy", "sekund"], class))
        .unit(
            Millisecond,
            UnitRule::classed(["milisekunda", "milisekundy", "milisekundy", "milisekund"], class),
        )
        .decimal(",")
}

pub(super) fn hr() -> Dictionary {
    Dictionary::new()
        .unit(
            Year,
            UnitRule::rule(|c| if ends_in_two_to_four(c) { "godine" } else { "godina" }.to_string()),
        )
        .unit(
            Month,
            UnitRule::rule(|c| {
                if c == 1.0 {
                    "mjesec"
                } else if c == 2.0 || c == 3.0 || c == 4.0 {
                    "mjeseca"
                } else {
                    "mjeseci"
                }
                .to_string()
            }),
        )
        .unit(
            Week,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 && c != 11.0 { "tjedan" } else { "tjedna" }.to_string()
            }),
        )
        .unit(Day, UnitRule::forms("dan", "dana"))
        .unit(
            Hour,
            UnitRule::rule(|c| {
                if c == 1.0 {
                    "sat"
                } else if c == 2.0 || c == 3.0 || c == 4.0 {
                    "sata"
                } else {
                    "sati"
                }
                .to_string()
            }),
        )
        .unit(
            Minute,
            UnitRule::rule(|c| {
                if ends_in_two_to_four(c) && (c < 10.0 || c > 14.0) { "minute" } else { "minuta" }
                    .to_string()
            }),
        )
        .unit(
            Second,
            UnitRule::rule(|c| {
                let mod10 = c % 10.0;
                if mod10 == 5.0 || (!is_fractional(c) && (10.0..=19.0).contains(&c)) {
                    "sekundi"
                } else if mod10 == 1.0 {
                    "sekunda"
                } else if ends_in_two_to_four(c) {
                    "sekunde"
                } else {
                    "sekundi"
                }
                .to_string()
            }),
        )
        .unit(
            Millisecond,
            UnitRule::rule(|c| {
                if c == 1.0 {
                    "milisekunda"
                } else if ends_in_two_to_four(c) {
                    "milisekunde"
                } else {
                    "milisekundi"
                }
                .to_string()
            }),
        )
        .decimal(",")
}

pub(super) fn mk() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("година", "години"))
        .unit(Month, UnitRule::forms("месец", "месеци"))
        .unit(Week, UnitRule::forms("недела", "недели"))
        .unit(Day, UnitRule::forms("ден", "дена"))
        .unit(Hour, UnitRule::forms("час", "часа"))
        .unit(Minute, UnitRule::forms("минута", "минути"))
        .unit(Second, UnitRule::forms("секунда", "секунди"))
        .unit(Millisecond, UnitRule::forms("милисекунда", "милисекунди"))
        .decimal(",")
}

pub(super) fn pl() -> Dictionary {
    let polish = forms::polish;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["rok", "roku", "lata", "lat"], polish))
        .unit(
            Month,
            UnitRule::classed(["miesiąc", "miesiąca", "miesiące", "miesięcy"], polish),
        )
        .unit(
            Week,
            UnitRule::classed(["tydzień", "tygodnia", "tygodnie", "tygodni"], polish),
        )
        .unit(Day, UnitRule::classed(["dzień", "dnia", "dni", "dni"], polish))
        .unit(Hour, UnitRule::classed(["godzina", "godziny", "godziny", "godzin"], polish))
        .unit(Minute, UnitRule::classed(["minuta", "minuty", "minuty", "minut"], polish))
        .unit(Second, UnitRule::classed(["sekunda", "sekundy", "sekundy", "sekund"], polish))
        .unit(
            Millisecond,
            UnitRule::classed(["milisekunda", "milisekundy", "milisekundy", "milisekund"], polish),
        )
        .decimal(",")
}

pub(super) fn ru() -> Dictionary {
    let slavic = forms::slavic;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["лет", "год", "года"], slavic))
        .unit(Month, UnitRule::classed(["месяцев", "месяц", "месяца"], slavic))
        .unit(Week, UnitRule::classed(["недель", "неделя", "недели"], slavic))
        .unit(Day, UnitRule::classed(["дней", "день", "дня"], slavic))
        .unit(Hour, UnitRule::classed(["часов", "час", "часа"], slavic))
        .unit(Minute, UnitRule::classed(["минут", "минута", "минуты"], slavic))
        .unit(Second, UnitRule::classed(["секунд", "секунда", "секунды"], slavic))
        .unit(
            Millisecond,
            UnitRule::classed(["миллисекунд", "миллисекунда", "миллисекунды"], slavic),
        )
        .decimal(",")
}

pub(super) fn sk() -> Dictionary {
    let class = forms::czech_or_slovak;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["rok", "roky", "roky", "rokov"], class))
        .unit(Month, UnitRule::classed(["mesiac", "mesiace", "mesiace", "mesiacov"], class))
        .unit(Week, UnitRule::classed(["týždeň", "týždne", "týždne", "týždňov"], class))
        .unit(Day, UnitRule::classed(["deň", "dni", "dni", "dní"], class))
        .unit(Hour, UnitRule::classed(["hodina", "hodiny", "hodiny", "hodín"], class))
        .unit(Minute, UnitRule::classed(["minúta", "minúty", "minúty", "minút"], class))
        .unit(Second, UnitRule::classed(["sekunda", "sekundy", "sekundy", "sekúnd"], class))
        .unit(
            Millisecond,
            UnitRule::classed(["milisekunda", "milisekundy", "milisekundy", "milisekúnd"], class),
        )
        .decimal(",")
}

pub(super) fn sl() -> Dictionary {
    Dictionary::new()
        .unit(
            Year,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "leto"
                } else if c % 100.0 == 2.0 {
                    "leti"
                } else if c % 100.0 == 3.0
                    || c % 100.0 == 4.0
                    || (is_fractional(c) && c % 100.0 <= 5.0)
                {
                    "leta"
                } else {
                    "let"
                }
                .to_string()
            }),
        )
        .unit(
            Month,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "mesec"
                } else if c % 100.0 == 2.0 || (is_fractional(c) && c % 100.0 <= 5.0) {
                    "meseca"
                } else if c % 10.0 == 3.0 || c % 10.0 == 4.0 {
                    "mesece"
                } else {
                    "mesecev"
                }
                .to_string()
            }),
        )
        .unit(
            Week,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "teden"
                } else if c % 10.0 == 2.0 || (is_fractional(c) && c % 100.0 <= 4.0) {
                    "tedna"
                } else if c % 10.0 == 3.0 || c % 10.0 == 4.0 {
                    "tedne"
                } else {
                    "tednov"
                }
                .to_string()
            }),
        )
        .unit(
            Day,
            UnitRule::rule(|c| if c % 100.0 == 1.0 { "dan" } else { "dni" }.to_string()),
        )
        .unit(
            Hour,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "ura"
                } else if c % 100.0 == 2.0 {
                    "uri"
                } else if c % 10.0 == 3.0 || c % 10.0 == 4.0 || is_fractional(c) {
                    "ure"
                } else {
                    "ur"
                }
                .to_string()
            }),
        )
        .unit(
            Minute,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "minuta"
                } else if c % 10.0 == 2.0 {
                    "minuti"
                } else if c % 10.0 == 3.0
                    || c % 10.0 == 4.0
                    || (is_fractional(c) && c % 100.0 <= 4.0)
                {
                    "minute"
                } else {
                    "minut"
                }
                .to_string()
            }),
        )
        .unit(
            Second,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "sekunda"
                } else if c % 100.0 == 2.0 {
                    "sekundi"
                } else if c % 100.0 == 3.0 || c % 100.0 == 4.0 || is_fractional(c) {
                    "sekunde"
                } else {
                    "sekund"
                }
                .to_string()
            }),
        )
        .unit(
            Millisecond,
            UnitRule::rule(|c| {
                if c % 10.0 == 1.0 {
                    "milisekunda"
                } else if c % 100.0 == 2.0 {
                    "milisekundi"
                } else if c % 100.0 == 3.0 || c % 100.0 == 4.0 || is_fractional(c) {
                    "milisekunde"
                } else {
                    "milisekund"
                }
                .to_string()
            }),
        )
        .decimal(",")
}

pub(super) fn sr() -> Dictionary {
    let slavic = forms::slavic;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["години", "година", "године"], slavic))
        .unit(Month, UnitRule::classed(["месеци", "месец", "месеца"], slavic))
        .unit(Week, UnitRule::classed(["недељи", "недеља", "недеље"], slavic))
        .unit(Day, UnitRule::classed(["дани", "дан", "дана"], slavic))
        .unit(Hour, UnitRule::classed(["сати", "сат", "сата"], slavic))
        .unit(Minute, UnitRule::classed(["минута", "минут", "минута"], slavic))
        .unit(Second, UnitRule::classed(["секунди", "секунда", "секунде"], slavic))
        .unit(
            Millisecond,
            UnitRule::classed(["милисекунди", "милисекунда", "милисекунде"], slavic),
        )
        .decimal(",")
}

pub(super) fn uk() -> Dictionary {
    let slavic = forms::slavic;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["років", "рік", "роки"], slavic))
        .unit(Month, UnitRule::classed(["місяців", "місяць", "місяці"], slavic))
        .unit(Week, UnitRule::classed(["тижнів", "тиждень", "тижні"], slavic))
        .unit(Day, UnitRule::classed(["днів", "день", "дні"], slavic))
        .unit(Hour, UnitRule::classed(["годин", "година", "години"], slavic))
        .unit(Minute, UnitRule::classed(["хвилин", "хвилина", "хвилини"], slavic))
        .unit(Second, UnitRule::classed(["секунд", "секунда", "секунди"], slavic))
        .unit(
            Millisecond,
            UnitRule::classed(["мілісекунд", "мілісекунда", "мілісекунди"], slavic),
        )
        .decimal(",")
}
