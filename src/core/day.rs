use crate::utils::error::MenuError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::str::FromStr;

/// The optional positional day argument.
///
/// Only the first three letters are significant, so `mon`, `Monday` and
/// `montag` are the same selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    Weekday(Weekday),
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
}

impl FromStr for DaySelector {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let prefix: String = lower.chars().take(3).collect();
        let selector = match prefix.as_str() {
            "mon" => DaySelector::Weekday(Weekday::Mon),
            "tue" => DaySelector::Weekday(Weekday::Tue),
            "wed" => DaySelector::Weekday(Weekday::Wed),
            "thu" => DaySelector::Weekday(Weekday::Thu),
            "fri" => DaySelector::Weekday(Weekday::Fri),
            "sat" => DaySelector::Weekday(Weekday::Sat),
            "sun" => DaySelector::Weekday(Weekday::Sun),
            "tod" => DaySelector::Today,
            "tom" => DaySelector::Tomorrow,
            "cur" | "thi" => DaySelector::ThisWeek,
            "nex" => DaySelector::NextWeek,
            _ => {
                return Err(MenuError::InvalidDayError {
                    value: s.to_string(),
                })
            }
        };
        Ok(selector)
    }
}

fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

impl DaySelector {
    /// Returns the single day to show (if any) and the ISO week to fetch.
    pub fn resolve(self, today: NaiveDate) -> (Option<NaiveDate>, u32) {
        match self {
            DaySelector::Today => (Some(today), iso_week(today)),
            DaySelector::Tomorrow => {
                let tomorrow = today + Duration::days(1);
                (Some(tomorrow), iso_week(tomorrow))
            }
            DaySelector::ThisWeek => (None, iso_week(today)),
            DaySelector::NextWeek => (None, iso_week(today + Duration::days(7))),
            DaySelector::Weekday(weekday) => {
                let ahead = (7 + weekday.num_days_from_monday() as i64
                    - today.weekday().num_days_from_monday() as i64)
                    % 7;
                let target = today + Duration::days(ahead);
                (Some(target), iso_week(target))
            }
        }
    }
}

/// Resolves an optional selector; no selector means the whole current week.
pub fn resolve_day(selector: Option<DaySelector>, today: NaiveDate) -> (Option<NaiveDate>, u32) {
    selector
        .unwrap_or(DaySelector::ThisWeek)
        .resolve(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Thursday, ISO week 48.
    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 12, 1).unwrap()
    }

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!("Monday".parse::<DaySelector>().unwrap(), DaySelector::Weekday(Weekday::Mon));
        assert_eq!("FRI".parse::<DaySelector>().unwrap(), DaySelector::Weekday(Weekday::Fri));
        assert_eq!("today".parse::<DaySelector>().unwrap(), DaySelector::Today);
        assert_eq!("tomorrow".parse::<DaySelector>().unwrap(), DaySelector::Tomorrow);
        assert_eq!("curweek".parse::<DaySelector>().unwrap(), DaySelector::ThisWeek);
        assert_eq!("this-week".parse::<DaySelector>().unwrap(), DaySelector::ThisWeek);
        assert_eq!("next-week".parse::<DaySelector>().unwrap(), DaySelector::NextWeek);
        assert!("yesterday".parse::<DaySelector>().is_err());
        assert!("".parse::<DaySelector>().is_err());
    }

    #[test]
    fn test_default_is_whole_current_week() {
        assert_eq!(resolve_day(None, thursday()), (None, 48));
    }

    #[test]
    fn test_today_and_tomorrow() {
        assert_eq!(DaySelector::Today.resolve(thursday()), (Some(thursday()), 48));
        assert_eq!(
            DaySelector::Tomorrow.resolve(thursday()),
            (Some(date(2, 12, 2016)), 48)
        );
        // Sunday -> Monday crosses into the next ISO week.
        assert_eq!(
            DaySelector::Tomorrow.resolve(date(4, 12, 2016)),
            (Some(date(5, 12, 2016)), 49)
        );
    }

    #[test]
    fn test_weekday_is_next_occurrence() {
        assert_eq!(
            DaySelector::Weekday(Weekday::Thu).resolve(thursday()),
            (Some(thursday()), 48)
        );
        assert_eq!(
            DaySelector::Weekday(Weekday::Fri).resolve(thursday()),
            (Some(date(2, 12, 2016)), 48)
        );
        assert_eq!(
            DaySelector::Weekday(Weekday::Mon).resolve(thursday()),
            (Some(date(5, 12, 2016)), 49)
        );
    }

    #[test]
    fn test_next_week_wraps_year() {
        let last_week = date(28, 12, 2016);
        assert_eq!(DaySelector::NextWeek.resolve(last_week), (None, 1));
        assert_eq!(DaySelector::NextWeek.resolve(thursday()), (None, 49));
    }
}
