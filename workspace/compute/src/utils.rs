use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses the date formats commonly found in exported demand sheets.
///
/// Day-first is tried before month-first, so `03/04/2024` is 3 April.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Calendar month as `(year, month)`.
pub type YearMonth = (i32, u32);

pub fn year_month(date: NaiveDate) -> YearMonth {
    (date.year(), date.month())
}

/// Adds `months` to a calendar month.
pub fn add_months((year, month): YearMonth, months: u32) -> YearMonth {
    let zero_based = year as i64 * 12 + (month as i64 - 1) + months as i64;
    ((zero_based / 12) as i32, (zero_based % 12) as u32 + 1)
}

/// Number of months from `from` to `to`, inclusive of both ends.
pub fn months_spanned(from: YearMonth, to: YearMonth) -> u32 {
    let start = from.0 as i64 * 12 + from.1 as i64;
    let end = to.0 as i64 * 12 + to.1 as i64;
    (end - start + 1).max(0) as u32
}

pub fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS[((month + 11) % 12) as usize]
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Case-insensitive lookup of the first column whose name contains a keyword.
pub fn find_column<'a>(columns: &'a [String], keywords: &[&str]) -> Option<&'a str> {
    columns
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            keywords.iter().any(|kw| lower.contains(kw))
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
        assert_eq!(parse_date("2024-04-03"), Some(expected));
        assert_eq!(parse_date("03-04-2024"), Some(expected));
        assert_eq!(parse_date("03/04/2024"), Some(expected));
        assert_eq!(parse_date("2024/04/03"), Some(expected));
        assert_eq!(parse_date("2024-04-03 17:45:00"), Some(expected));
        assert_eq!(parse_date("12/31/2024"), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn month_arithmetic_wraps_years() {
        assert_eq!(add_months((2024, 11), 3), (2025, 2));
        assert_eq!(add_months((2024, 12), 0), (2024, 12));
        assert_eq!(months_spanned((2023, 11), (2024, 2)), 4);
        assert_eq!(months_spanned((2024, 2), (2024, 2)), 1);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_abbreviation(1), "Jan");
        assert_eq!(month_abbreviation(12), "Dec");
    }

    #[test]
    fn finds_columns_by_keyword() {
        let columns = vec!["DATE".to_string(), "CENTER NAME".to_string(), "PAY WEIGHT".to_string()];
        assert_eq!(find_column(&columns, &["weight", "qty"]), Some("PAY WEIGHT"));
        assert_eq!(find_column(&columns, &["sku"]), None);
    }
}
