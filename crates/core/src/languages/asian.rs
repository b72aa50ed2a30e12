// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! South, Southeast and East Asian languages.

use crate::dictionary::{Dictionary, UnitRule};
use crate::unit::Unit::{Day, Hour, Millisecond, Minute, Month, Second, Week, Year};

pub(super) fn bn() -> Dictionary {
    Dictionary::from_words([
        "বছর",
        "মাস",
        "সপ্তাহ",
        "দিন",
        "ঘন্টা",
        "মিনিট",
        "সেকেন্ড",
        "মিলিসেকেন্ড",
    ])
}

pub(super) fn hi() -> Dictionary {
    Dictionary::new()
        .unit(Year, "साल")
        .unit(Month, UnitRule::forms("महीना", "महीने"))
        .unit(Week, UnitRule::forms("हफ़्ता", "हफ्ते"))
        .unit(Day, "दिन")
        .unit(Hour, UnitRule::forms("घंटा", "घंटे"))
        .unit(Minute, "मिनट")
        .unit(Second, "सेकंड")
        .unit(Millisecond, "मिलीसेकंड")
        .decimal(".")
}

pub(super) fn id() -> Dictionary {
    Dictionary::from_words([
        "tahun",
        "bulan",
        "minggu",
        "hari",
        "jam",
        "menit",
        "detik",
        "milidetik",
    ])
    .decimal(".")
}

pub(super) fn ja() -> Dictionary {
    Dictionary::from_words(["年", "ヶ月", "週", "日", "時間", "分", "秒", "ミリ秒"]).decimal(".")
}

pub(super) fn km() -> Dictionary {
    Dictionary::from_words([
        "ឆ្នាំ",
        "ខែ",
        "សប្តាហ៍",
        "ថ្ងៃ",
        "ម៉ោង",
        "នាទី",
        "វិនាទី",
        "មិល្លីវិនាទី",
    ])
}

pub(super) fn kn() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("ವರ್ಷ", "ವರ್ಷಗಳು"))
        .unit(Month, UnitRule::forms("ತಿಂಗಳು", "ತಿಂಗಳುಗಳು"))
        .unit(Week, UnitRule::forms("ವಾರ", "ವಾರಗಳು"))
        .unit(Day, UnitRule::forms("ದಿನ", "ದಿನಗಳು"))
        .unit(Hour, UnitRule::forms("ಗಂಟೆ", "ಗಂಟೆಗಳು"))
        .unit(Minute, UnitRule::forms("ನಿಮಿಷ", "ನಿಮಿಷಗಳು"))
        .unit(Second, UnitRule::forms("ಸೆಕೆಂಡ್", "ಸೆಕೆಂಡುಗಳು"))
        .unit(Millisecond, UnitRule::forms("ಮಿಲಿಸೆಕೆಂಡ್", "ಮಿಲಿಸೆಕೆಂಡುಗಳು"))
}

pub(super) fn ko() -> Dictionary {
    Dictionary::from_words(["년", "개월", "주일", "일", "시간", "분", "초", "밀리 초"]).decimal(".")
}

pub(super) fn lo() -> Dictionary {
    Dictionary::from_words([
        "ປີ",
        "ເດືອນ",
        "ອາທິດ",
        "ມື້",
        "ຊົ່ວໂມງ",
        "ນາທີ",
        "ວິນາທີ",
        "ມິນລິວິນາທີ",
    ])
    .decimal(",")
}

pub(super) fn mr() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("वर्ष", "वर्षे"))
        .unit(Month, UnitRule::forms("महिना", "महिने"))
        .unit(Week, UnitRule::forms("आठवडा", "आठवडे"))
        .unit(Day, "दिवस")
        .unit(Hour, "तास")
        .unit(Minute, UnitRule::forms("मिनिट", "मिनिटे"))
        .unit(Second, "सेकंद")
        .unit(Millisecond, "मिलिसेकंद")
}

pub(super) fn ms() -> Dictionary {
    Dictionary::from_words([
        "tahun",
        "bulan",
        "minggu",
        "hari",
        "jam",
        "minit",
        "saat",
        "milisaat",
    ])
    .decimal(".")
}

pub(super) fn ta() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("வருடம்", "ஆண்டுகள்"))
        .unit(Month, UnitRule::forms("மாதம்", "மாதங்கள்"))
        .unit(Week, UnitRule::forms("வாரம்", "வாரங்கள்"))
        .unit(Day, UnitRule::forms("நாள்", "நாட்கள்"))
        .unit(Hour, UnitRule::forms("மணி", "மணிநேரம்"))
        .unit(Minute, UnitRule::forms("நிமிடம்", "நிமிடங்கள்"))
        .unit(Second, UnitRule::forms("வினாடி", "வினாடிகள்"))
        .unit(Millisecond, UnitRule::forms("மில்லி விநாடி", "மில்லி விநாடிகள்"))
}

pub(super) fn te() -> Dictionary {
    Dictionary::new()
        .unit(Year, UnitRule::forms("సంవత్సరం", "సంవత్సరాల"))
        .unit(Month, UnitRule::forms("నెల", "నెలల"))
        .unit(Week, UnitRule::forms("వారం", "వారాలు"))
        .unit(Day, UnitRule::forms("రోజు", "రోజులు"))
        .unit(Hour, UnitRule::forms("గంట", "గంటలు"))
        .unit(Minute, UnitRule::forms("నిమిషం", "నిమిషాలు"))
        .unit(Second, UnitRule::forms("సెకను", "సెకన్లు"))
        .unit(Millisecond, UnitRule::forms("మిల్లీసెకన్", "మిల్లీసెకన్లు"))
}

pub(super) fn th() -> Dictionary {
    Dictionary::from_words([
        "ปี",
        "เดือน",
        "สัปดาห์",
        "วัน",
        "ชั่วโมง",
        "นาที",
        "วินาที",
        "มิลลิวินาที",
    ])
    .decimal(".")
}

pub(super) fn vi() -> Dictionary {
    Dictionary::from_words(["năm", "tháng", "tuần", "ngày", "giờ", "phút", "giây", "mili giây"])
        .decimal(",")
}

pub(super) fn zh_cn() -> Dictionary {
    Dictionary::from_words(["年", "个月", "周", "天", "小时", "分钟", "秒", "毫秒"]).decimal(".")
}

pub(super) fn zh_tw() -> Dictionary {
    Dictionary::from_words(["年", "個月", "周", "天", "小時", "分鐘", "秒", "毫秒"]).decimal(".")
}
