use chrono::{Datelike, Months, NaiveDate};

pub fn round_to_2_places(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Steps `months` calendar months back from `date`, staying on the first of the month.
pub fn months_before(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    month_start(date).checked_sub_months(Months::new(months))
}

/// 0-indexed calendar month (January = 0).
pub fn month_index(date: NaiveDate) -> u32 {
    date.month0()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_2_places() {
        assert_eq!(round_to_2_places(986.2649), 986.26);
        assert_eq!(round_to_2_places(12.3456), 12.35);
    }

    #[test]
    fn test_month_start() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_months_before_crosses_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(
            months_before(date, 5),
            NaiveDate::from_ymd_opt(2023, 10, 1)
        );
        assert_eq!(months_before(date, 0), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_month_index() {
        assert_eq!(month_index(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()), 0);
        assert_eq!(month_index(NaiveDate::from_ymd_opt(2024, 12, 9).unwrap()), 11);
    }
}
