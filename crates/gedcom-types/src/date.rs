//! GEDCOM date values.

use std::fmt;

use chrono::NaiveDate;

/// A date as written on a `DATE` line.
///
/// The original text is always kept. When the text has one of the shapes
/// `D MON YYYY`, `MON YYYY` or `YYYY` it is also read as a calendar date;
/// partial dates resolve to the first day of the month or year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gedcom_types::GedcomDate;
///
/// let date = GedcomDate::parse("1 JAN 1990");
/// assert_eq!(date.value(), NaiveDate::from_ymd_opt(1990, 1, 1));
/// assert_eq!(date.as_str(), "1 JAN 1990");
///
/// let vague = GedcomDate::parse("ABT 1850");
/// assert_eq!(vague.value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GedcomDate {
    text: String,
    value: Option<NaiveDate>,
}

impl GedcomDate {
    /// Reads a date from its text.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        Self {
            text: text.to_string(),
            value: read_calendar_date(text),
        }
    }

    /// Returns the date text as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the calendar date, if the text could be read.
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }
}

impl fmt::Display for GedcomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn read_calendar_date(text: &str) -> Option<NaiveDate> {
    match text.split_whitespace().count() {
        3 => NaiveDate::parse_from_str(text, "%d %b %Y").ok(),
        2 => NaiveDate::parse_from_str(&format!("1 {text}"), "%d %b %Y").ok(),
        1 if text.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_full_date() {
        assert_eq!(GedcomDate::parse("15 MAR 1961").value(), ymd(1961, 3, 15));
        assert_eq!(GedcomDate::parse("9 Dec 2001").value(), ymd(2001, 12, 9));
    }

    #[test]
    fn test_partial_dates() {
        assert_eq!(GedcomDate::parse("JUN 1944").value(), ymd(1944, 6, 1));
        assert_eq!(GedcomDate::parse("1802").value(), ymd(1802, 1, 1));
    }

    #[test]
    fn test_unreadable_keeps_text() {
        let date = GedcomDate::parse("BET 1900 AND 1910");
        assert_eq!(date.value(), None);
        assert_eq!(date.to_string(), "BET 1900 AND 1910");

        assert_eq!(GedcomDate::parse("31 FEB 2000").value(), None);
        assert_eq!(GedcomDate::parse("").value(), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(GedcomDate::parse("  2 JAN 2020 ").as_str(), "2 JAN 2020");
    }
}
