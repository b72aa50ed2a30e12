// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Latvian, Lithuanian.

use super::forms;
use crate::dictionary::{Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

pub(super) fn lt() -> Dictionary {
    let lithuanian = forms::lithuanian;
    Dictionary::new()
        .unit(
            Year,
            UnitRule::rule(|c| {
                if c % 10.0 == 0.0 || (c % 100.0 >= 10.0 && c % 100.0 <= 20.0) {
                    "metų"
                } else {
                    "metai"
                }
                .to_string()
            }),
        )
        .unit(Month, UnitRule::classed(["mėnuo", "mėnesiai", "mėnesių"], lithuanian))
        .unit(Week, UnitRule::classed(["savaitė", "savaitės", "savaičių"], lithuanian))
        .unit(Day, UnitRule::classed(["diena", "dienos", "dienų"], lithuanian))
        .unit(Hour, UnitRule::classed(["valanda", "valandos", "valandų"], lithuanian))
        .unit(Minute, UnitRule::classed(["minutė", "minutės", "minučių"], lithuanian))
        .unit(Second, UnitRule::classed(["sekundė", "sekundės", "sekundžių"], lithuanian))
        .unit(
            Millisecond,
            UnitRule::classed(["milisekundė", "milisekundės", "milisekundžių"], lithuanian),
        )
        .decimal(",")
}

pub(super) fn lv() -> Dictionary {
    let latvian = forms::latvian;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["gads", "gadi"], latvian))
        .unit(Month, UnitRule::classed(["mēnesis", "mēneši"], latvian))
        .unit(Week, UnitRule::classed(["nedēļa", "nedēļas"], latvian))
        .unit(Day, UnitRule::classed(["diena", "dienas"], latvian))
        .unit(Hour, UnitRule::classed(["stunda", "stundas"], latvian))
        .unit(Minute, UnitRule::classed(["minūte", "minūtes"], latvian))
        .unit(Second, UnitRule::classed(["sekunde", "sekundes"], latvian))
        .unit(Millisecond, UnitRule::classed(["milisekunde", "milisekundes"], latvian))
        .decimal(",")
}
