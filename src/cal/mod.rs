//! ISO-8601 date and time calculations, which use years, months, days,
//! hours, minutes, and seconds.

pub(crate) mod datetime;
pub mod fmt;
pub(crate) mod offset;
pub(crate) mod zoned;

pub use self::datetime::{Era, LocalDate, LocalDateTime, LocalTime, Month, Weekday, Year};
pub use self::offset::Offset;
pub use self::zoned::ZonedDateTime;


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year() % 100 }

    /// The quarter of the year, from 1 to 4.
    fn quarter(&self) -> i8 {
        (self.month().months_from_january() / 3) as i8 + 1
    }

    /// The era this year falls in: everything from year 1 onwards is
    /// AD, and everything before it is BC. There is no year zero.
    fn era(&self) -> Era {
        if self.year() >= 1 { Era::AnnoDomini }
                       else { Era::BeforeChrist }
    }

    /// The ISO week-based year: the year that owns the Thursday of this
    /// date’s week. Dates at the very start or end of a year can belong
    /// to the week-based year either side of their calendar year.
    fn week_based_year(&self) -> i64 {
        let weekday = self.weekday().days_from_monday_as_one() as i64;
        let thursday = self.yearday() as i64 + (4 - weekday);
        let days_this_year = if Year(self.year()).is_leap_year() { 366 } else { 365 };

        if thursday < 1 {
            self.year() - 1
        }
        else if thursday > days_this_year {
            self.year() + 1
        }
        else {
            self.year()
        }
    }

    // I’d ideally like to include “century” here, but there’s some
    // discrepancy over what the result should be: the Gregorian
    // calendar calls the span from 2000 to 2099 the “21st Century”, but
    // the ISO-8601 calendar calls it Century 20. I think the only way
    // for people to safely know which one they’re going to get is to
    // just get the year value and do the calculation themselves, which
    // is simple enough because it’s just a division.
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;

    /// The hour on the 12-hour clock, where midnight and noon both
    /// show as 12.
    fn hour_12(&self) -> i8 {
        let hour = self.hour() % 12;
        if hour == 0 { 12 } else { hour }
    }

    /// Whether this time falls before noon, which is all a meridiem
    /// indicator needs to know.
    fn is_before_midday(&self) -> bool {
        self.hour() < 12
    }
}
