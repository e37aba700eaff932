//! pt-BR display formatting for numbers and dates.

use chrono::{DateTime, Datelike, Locale, Utc};

/// Groups digits in threes with a dot, e.g. `1234567` -> `1.234.567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Short date shown on launch cards: `dd/mm/yyyy`.
pub fn card_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Full date with short time, e.g. `domingo, 1 de janeiro de 2023 às 12:00`.
///
/// Rendered in UTC.
pub fn full_date(date: DateTime<Utc>) -> String {
    date.format_localized("%A, %-d de %B de %Y às %H:%M", Locale::pt_BR)
        .to_string()
}

/// Machine-readable timestamp for `<time datetime>` attributes.
pub fn iso_datetime(date: DateTime<Utc>) -> String {
    date.to_rfc3339()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
