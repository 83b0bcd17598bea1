use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{0}'")]
pub struct DateParseError(String);

const DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[rustfmt::skip]
const DATETIMES: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

/// Parses a date or timestamp and truncates it to the calendar date. Offset
/// timestamps keep the date as written, not the UTC date.
pub fn parse_date(s: &str) -> Result<time::Date, DateParseError> {
    let s = s.trim();
    if let Ok(d) = time::Date::parse(s, DATE) {
        return Ok(d);
    }
    for fmt in DATETIMES {
        if let Ok(dt) = time::PrimitiveDateTime::parse(s, *fmt) {
            return Ok(dt.date());
        }
    }
    time::OffsetDateTime::parse(s, &time::format_description::well_known::Rfc3339)
        .map(|dt| dt.date())
        .map_err(|_| DateParseError(s.to_string()))
}
