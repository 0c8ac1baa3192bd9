//! Russian long-form date rendering.

use chrono::{Datelike, NaiveDate};

/// Month names in the genitive case, as used inside a full date.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format a date the way the UI shows it: "15 октября 2024".
pub fn format_long_ru(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 8).expect("valid date");
        assert_eq!(format_long_ru(date), "8 октября 2024");
    }

    #[test]
    fn formats_every_month() {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2024, month, 1).expect("valid date");
            let text = format_long_ru(date);
            assert!(text.starts_with("1 "));
            assert!(text.ends_with(" 2024"));
        }
    }
}
