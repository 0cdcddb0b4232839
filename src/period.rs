//! Lengths of time in calendar units.

use std::ops::{Add, Sub, Mul};


/// A **period** is a length of time in calendar units: years, months,
/// and days. Unlike a `Duration`, how long a period really is depends on
/// the date it gets applied to — a month from the 31st of January is
/// shorter than a month from the 1st.
///
/// The three units are held separately and never normalised, so a
/// period of fourteen months stays fourteen months rather than becoming
/// a year and two.
#[derive(Clone, PartialEq, Eq, Debug, Copy)]
pub struct Period {
    years: i64,
    months: i64,
    days: i64,
}

impl Period {

    /// Create a new zero-length period.
    pub fn zero() -> Self {
        Self { years: 0, months: 0, days: 0 }
    }

    /// Create a new period of the given number of years.
    pub fn of_years(years: i64) -> Self {
        Self { years, months: 0, days: 0 }
    }

    /// Create a new period of the given number of months.
    pub fn of_months(months: i64) -> Self {
        Self { years: 0, months, days: 0 }
    }

    /// Create a new period of the given number of days.
    pub fn of_days(days: i64) -> Self {
        Self { years: 0, months: 0, days }
    }

    /// Create a new period out of all three calendar units at once.
    pub fn of_ymd(years: i64, months: i64, days: i64) -> Self {
        Self { years, months, days }
    }

    /// Return the years, months, and days portions of the period as a
    /// 3-element tuple.
    pub fn lengths(&self) -> (i64, i64, i64) {
        (self.years, self.months, self.days)
    }
}

impl Add<Period> for Period {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            years: self.years + rhs.years,
            months: self.months + rhs.months,
            days: self.days + rhs.days,
        }
    }
}

impl Sub<Period> for Period {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            years: self.years - rhs.years,
            months: self.months - rhs.months,
            days: self.days - rhs.days,
        }
    }
}

impl Mul<i64> for Period {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self {
            years: self.years * amount,
            months: self.months * amount,
            days: self.days * amount,
        }
    }
}
