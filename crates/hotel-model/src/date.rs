//! Calendar dates validated at construction.
//!
//! A [`Date`] is accurate to the day of a month of a year. The only way to
//! obtain one is through [`Date::new`], which validates the day against the
//! month length (leap-year aware), so every `Date` in the system is valid.
//! Deserialization routes through the same validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Sentinel returned by [`month_name`] for values outside 1-12.
pub const INVALID_MONTH: &str = "INVALID_MONTH";

/// A calendar date, accurate to the day of a month of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Date {
    day: u32,
    month: u32,
    year: u32,
}

impl Date {
    /// Composes a new `Date`, validating it in the same step.
    ///
    /// This is the only construction path; a `Date` that exists is valid.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self, DateError> {
        let date = Self { day, month, year };
        date.validate()?;
        Ok(date)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Checks the day and month ranges, then the day against the month
    /// length (leap-year aware for February).
    fn validate(&self) -> Result<(), DateError> {
        if self.day == 0 || self.day > 31 {
            return Err(DateError::DayOutOfRange { day: self.day });
        }
        if self.month == 0 || self.month > 12 {
            return Err(DateError::MonthOutOfRange { month: self.month });
        }
        let upper = match self.month {
            2 => {
                if is_leap_year(self.year) {
                    if self.day > 29 {
                        return Err(DateError::LeapFebruaryDay {
                            day: self.day,
                            year: self.year,
                        });
                    }
                } else if self.day > 28 {
                    return Err(DateError::FebruaryDay {
                        day: self.day,
                        year: self.year,
                    });
                }
                return Ok(());
            }
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            _ => 30,
        };
        if self.day > upper {
            return Err(DateError::DayExceedsMonth {
                day: self.day,
                max: upper,
                month: month_name(self.month),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Date {
    /// Renders as `"28th December, 1999"`.
    ///
    /// The ordinal suffix is keyed on `day % 10` alone, so 11, 12 and 13
    /// render as "11st", "12nd" and "13rd". Kept for output compatibility.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        write!(
            f,
            "{}{} {}, {}",
            self.day,
            suffix,
            month_name(self.month),
            self.year
        )
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            day: u32,
            month: u32,
            year: u32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Date::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

/// Returns whether `year` is a leap year, by the divisibility cascade:
/// divisible by 400 leap, else by 100 not, else by 4 leap, else not.
pub fn is_leap_year(year: u32) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Converts a month number into its full English name.
///
/// Values outside 1-12 yield the [`INVALID_MONTH`] sentinel rather than an
/// error; callers that need to detect bad input on this path must check for
/// it. The short form of a name is its first 3 characters.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => INVALID_MONTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_oracle() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn valid_days_construct_for_every_month() {
        // (month, length in a non-leap year)
        let lengths = [
            (1, 31),
            (2, 28),
            (3, 31),
            (4, 30),
            (5, 31),
            (6, 30),
            (7, 31),
            (8, 31),
            (9, 30),
            (10, 31),
            (11, 30),
            (12, 31),
        ];
        for (month, length) in lengths {
            for day in 1..=length {
                assert!(
                    Date::new(2023, month, day).is_ok(),
                    "2023-{month}-{day} should be valid"
                );
            }
        }
    }

    #[test]
    fn day_past_month_end_is_rejected() {
        assert_eq!(
            Date::new(2023, 4, 31).unwrap_err(),
            DateError::DayExceedsMonth {
                day: 31,
                max: 30,
                month: "April"
            }
        );
        assert_eq!(
            Date::new(2023, 11, 31).unwrap_err(),
            DateError::DayExceedsMonth {
                day: 31,
                max: 30,
                month: "November"
            }
        );
    }

    #[test]
    fn absolute_bounds_are_checked_first() {
        assert_eq!(
            Date::new(2023, 2, 32).unwrap_err(),
            DateError::DayOutOfRange { day: 32 }
        );
        assert_eq!(
            Date::new(2023, 2, 0).unwrap_err(),
            DateError::DayOutOfRange { day: 0 }
        );
        assert_eq!(
            Date::new(2023, 13, 15).unwrap_err(),
            DateError::MonthOutOfRange { month: 13 }
        );
        assert_eq!(
            Date::new(2023, 0, 15).unwrap_err(),
            DateError::MonthOutOfRange { month: 0 }
        );
    }

    #[test]
    fn february_respects_leap_years() {
        assert!(Date::new(2024, 2, 29).is_ok());
        assert!(Date::new(2000, 2, 29).is_ok());
        assert_eq!(
            Date::new(2023, 2, 29).unwrap_err(),
            DateError::FebruaryDay { day: 29, year: 2023 }
        );
        assert_eq!(
            Date::new(1900, 2, 29).unwrap_err(),
            DateError::FebruaryDay { day: 29, year: 1900 }
        );
        assert_eq!(
            Date::new(2024, 2, 30).unwrap_err(),
            DateError::LeapFebruaryDay { day: 30, year: 2024 }
        );
    }

    #[test]
    fn display_renders_ordinal_and_month_name() {
        let date = Date::new(1999, 12, 28).unwrap();
        assert_eq!(date.to_string(), "28th December, 1999");

        let date = Date::new(1999, 1, 1).unwrap();
        assert_eq!(date.to_string(), "1st January, 1999");

        let date = Date::new(2001, 3, 22).unwrap();
        assert_eq!(date.to_string(), "22nd March, 2001");

        let date = Date::new(2001, 3, 23).unwrap();
        assert_eq!(date.to_string(), "23rd March, 2001");
    }

    #[test]
    fn display_keeps_the_simplified_ordinal_rule() {
        // 11/12/13 intentionally follow day % 10, not English usage.
        let date = Date::new(2020, 6, 11).unwrap();
        assert_eq!(date.to_string(), "11st June, 2020");

        let date = Date::new(2020, 6, 12).unwrap();
        assert_eq!(date.to_string(), "12nd June, 2020");

        let date = Date::new(2020, 6, 13).unwrap();
        assert_eq!(date.to_string(), "13rd June, 2020");
    }

    #[test]
    fn month_name_maps_all_twelve_and_the_sentinel() {
        assert_eq!(month_name(2), "February");
        assert_eq!(month_name(5), "May");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), INVALID_MONTH);
        assert_eq!(month_name(13), INVALID_MONTH);
    }
}
