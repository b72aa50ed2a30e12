// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalan, French, Italian, Portuguese, Romanian, Spanish.

use crate::dictionary::{Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

/// French takes the plural from two upwards; fractions below two are singular.
fn french(one: &'static str, other: &'static str) -> UnitRule {
    UnitRule::rule(move |count| if count >= 2.0 { other } else { one }.to_string())
}

pub(super) fn ca() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("any", "anys"))
        .unit(Month, UnitRule::forms("mes", "mesos"))
        .unit(Week, UnitRule::forms("setmana", "setmanes"))
        .unit(Day, UnitRule::forms("dia", "dies"))
        .unit(Hour, UnitRule::forms("hora", "hores"))
        .unit(Minute, UnitRule::forms("minut", "minuts"))
        .unit(Second, UnitRule::forms("segon", "segons"))
        .unit(Millisecond, UnitRule::forms("milisegon", "milisegons"))
        .decimal(",")
}

pub(super) fn es() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("año", "años"))
        .unit(Month, UnitRule::forms("mes", "meses"))
        .unit(Week, UnitRule::forms("semana", "semanas"))
        .unit(Day, UnitRule::forms("día", "días"))
        .unit(Hour, UnitRule::forms("hora", "horas"))
        .unit(Minute, UnitRule::forms("minuto", "minutos"))
        .unit(Second, UnitRule::forms("segundo", "segundos"))
        .unit(Millisecond, UnitRule::forms("milisegundo", "milisegundos"))
        .decimal(",")
}

pub(super) fn fr() -> Dictionary {
    Dictionary::new()
        .unit(Year, french("an", "ans"))
        .unit(Month, "mois")
        .unit(Week, french("semaine", "semaines"))
        .unit(Day, french("jour", "jours"))
        .unit(Hour, french("heure", "heures"))
        .unit(Minute, french("minute", "minutes"))
        .unit(Second, french("seconde", "secondes"))
        .unit(Millisecond, french("milliseconde", "millisecondes"))
        .decimal(",")
}

pub(super) fn it() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("anno", "anni"))
        .unit(Month, UnitRule::forms("mese", "mesi"))
        .unit(Week, UnitRule::forms("settimana", "settimane"))
        .unit(Day, UnitRule::forms("giorno", "giorni"))
        .unit(Hour, UnitRule::forms("ora", "ore"))
        .unit(Minute, UnitRule::forms("minuto", "minuti"))
        .unit(Second, UnitRule::forms("secondo", "secondi"))
        .unit(Millisecond, UnitRule::forms("millisecondo", "millisecondi"))
        .decimal(",")
}

pub(super) fn pt() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("ano", "anos"))
        .unit(Month, UnitRule::forms("mês", "meses"))
        .unit(Week, UnitRule::forms("semana", "semanas"))
        .unit(Day, UnitRule::forms("dia", "dias"))
        .unit(Hour, UnitRule::forms("hora", "horas"))
        .unit(Minute, UnitRule::forms("minuto", "minutos"))
        .unit(Second, UnitRule::forms("segundo", "segundos"))
        .unit(Millisecond, UnitRule::forms("milissegundo", "milissegundos"))
        .decimal(",")
}

pub(super) fn ro() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("an", "ani"))
        .unit(Month, UnitRule::forms("lună", "luni"))
        .unit(Week, UnitRule::forms("săptămână", "săptămâni"))
        .unit(Day, UnitRule::forms("zi", "zile"))
        .unit(Hour, UnitRule::forms("oră", "ore"))
        .unit(Minute, UnitRule::forms("minut", "minute"))
        .unit(Second, UnitRule::forms("secundă", "secunde"))
        .unit(Millisecond, UnitRule::forms("milisecundă", "milisecunde"))
        .decimal(",")
}
