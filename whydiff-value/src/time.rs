//! Attribute views and compact forms of time-like and date-like values.
//!
//! Both the inspection of a single time and the diff of two times read the
//! same attribute list, so it lives next to the value model.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};

use crate::Value;

/// Attributes a time is compared by, in display order.
pub fn time_attributes(time: &DateTime<FixedOffset>) -> Vec<(String, Value)> {
    vec![
        ("year".into(), time.year().into()),
        ("month".into(), time.month().into()),
        ("day".into(), time.day().into()),
        ("hour".into(), time.hour().into()),
        ("min".into(), time.minute().into()),
        ("sec".into(), time.second().into()),
        ("nsec".into(), time.nanosecond().into()),
        ("offset".into(), time.offset().to_string().into()),
    ]
}

/// Attributes a date is compared by, in display order.
pub fn date_attributes(date: &NaiveDate) -> Vec<(String, Value)> {
    vec![
        ("year".into(), date.year().into()),
        ("month".into(), date.month().into()),
        ("day".into(), date.day().into()),
    ]
}

/// Compact form, e.g. `2011-12-13 14:15:16.000 +00:00`.
pub fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y-%m-%d %H:%M:%S%.3f %:z").to_string()
}

/// Compact form, e.g. `2023-10-14`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(3600).unwrap();
        NaiveDate::from_ymd_opt(2011, 12, 13)
            .unwrap()
            .and_hms_milli_opt(14, 15, 16, 250)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap()
    }

    #[test]
    fn compact_forms() {
        assert_eq!(format_time(&sample()), "2011-12-13 14:15:16.250 +01:00");
        let date = NaiveDate::from_ymd_opt(2023, 10, 14).unwrap();
        assert_eq!(format_date(&date), "2023-10-14");
    }

    #[test]
    fn time_attribute_order() {
        let names: Vec<_> = time_attributes(&sample())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            ["year", "month", "day", "hour", "min", "sec", "nsec", "offset"]
        );
        let attrs = time_attributes(&sample());
        assert_eq!(attrs[6].1, Value::from(250_000_000));
        assert_eq!(attrs[7].1, Value::from("+01:00"));
    }
}
