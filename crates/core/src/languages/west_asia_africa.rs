// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arabic, Hebrew, Kurdish, Persian, Swahili, Urdu.

use super::forms;
use crate::dictionary::{number_to_string, Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

const ARABIC_DIGITS: [char; 10] = ['۰', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Transliterate Western digits into Arabic-Indic ones.
fn arabic_count(count: f64, decimal: &str) -> String {
    let mut out = String::new();
    for ch in number_to_string(count).chars() {
        match ch {
            '.' => out.push_str(decimal),
            _ => match ch.to_digit(10).and_then(|d| ARABIC_DIGITS.get(d as usize)) {
                Some(&digit) => out.push(digit),
                None => out.push(ch),
            },
        }
    }
    out
}

pub(super) fn ar() -> Dictionary {
    let arabic = forms::arabic;
    Dictionary::new()
        .unit(Year, UnitRule::classed(["سنة", "سنتان", "سنوات"], arabic))
        .unit(Month, UnitRule::classed(["شهر", "شهران", "أشهر"], arabic))
        .unit(Week, UnitRule::classed(["أسبوع", "أسبوعين", "أسابيع"], arabic))
        .unit(Day, UnitRule::classed(["يوم", "يومين", "أيام"], arabic))
        .unit(Hour, UnitRule::classed(["ساعة", "ساعتين", "ساعات"], arabic))
        .unit(Minute, UnitRule::classed(["دقيقة", "دقيقتان", "دقائق"], arabic))
        .unit(Second, UnitRule::classed(["ثانية", "ثانيتان", "ثواني"], arabic))
        .unit(
            Millisecond,
            UnitRule::classed(
                ["جزء من الثانية", "جزآن من الثانية", "أجزاء من الثانية"],
                arabic,
            ),
        )
        .decimal(",")
        .delimiter(" و ")
        .count_formatter(arabic_count)
}

pub(super) fn fa() -> Dictionary {
    Dictionary::from_words(["سال", "ماه", "هفته", "روز", "ساعت", "دقیقه", "ثانیه", "میلی ثانیه"])
        .decimal(".")
}

pub(super) fn he() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("שנה", "שנים"))
        .unit(Month, UnitRule::forms("חודש", "חודשים"))
        .unit(Week, UnitRule::forms("שבוע", "שבועות"))
        .unit(Day, UnitRule::forms("יום", "ימים"))
        .unit(Hour, UnitRule::forms("שעה", "שעות"))
        .unit(Minute, UnitRule::forms("דקה", "דקות"))
        .unit(Second, UnitRule::forms("שניה", "שניות"))
        .unit(Millisecond, UnitRule::forms("מילישנייה", "מילישניות"))
        .decimal(".")
}

pub(super) fn ku() -> Dictionary {
    Dictionary::from_words(["sal", "meh", "hefte", "roj", "seet", "deqe", "saniye", "mîlîçirk"])
        .decimal(",")
}

pub(super) fn sw() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("mwaka", "miaka"))
        .unit(Month, UnitRule::forms("mwezi", "miezi"))
        .unit(Week, "wiki")
        .unit(Day, UnitRule::forms("siku", "masiku"))
        .unit(Hour, UnitRule::forms("saa", "masaa"))
        .unit(Minute, "dakika")
        .unit(Second, "sekunde")
        .unit(Millisecond, "milisekunde")
        .decimal(".")
        .word_first()
}

pub(super) fn ur() -> Dictionary {
    Dictionary::new()
        .unit(Year, "سال")
        .unit(Month, UnitRule::forms("مہینہ", "مہینے"))
        .unit(Week, UnitRule::forms("ہفتہ", "ہفتے"))
        .unit(Day, "دن")
        .unit(Hour, UnitRule::forms("گھنٹہ", "گھنٹے"))
        .unit(Minute, "منٹ")
        .unit(Second, "سیکنڈ")
        .unit(Millisecond, "ملی سیکنڈ")
        .decimal(".")
}
