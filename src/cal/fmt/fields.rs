//! The field compilers behind each recognised pattern letter.

use std::fmt::Display;

use locale;
use num_traits::Signed;
use pad::{PadStr, Alignment};

use cal::{DatePiece, TimePiece};
use cal::datetime::{Era, LocalDate, LocalTime};
use cal::fmt::compiler::Compiler;
use cal::offset::Offset;
use cal::zoned::ZonedDateTime;


/// Zero-pads a field value to the given width. A negative value keeps
/// its sign, which takes up one column of the width. Padding only ever
/// grows the output: a value wider than the run is rendered in full.
pub(crate) fn pad_number<N>(number: N, width: usize, buf: &mut String)
where N: Signed + Display {
    let mut width = width;

    if number.is_negative() {
        buf.push('-');
        width = width.saturating_sub(1);
    }

    let digits = number.abs().to_string();
    buf.push_str(&digits.pad(width, '0', Alignment::Right, false));
}


/// A plain zero-padded numeric field, which is most of them. The run
/// length is the padding width and nothing more.
pub(crate) struct Numeric<T> {
    pub(crate) letter: char,
    pub(crate) max_run: usize,
    pub(crate) field: fn(&T) -> i64,
}

impl<T> Compiler<T> for Numeric<T> {
    fn letter(&self) -> char { self.letter }
    fn max_run(&self) -> usize { self.max_run }

    fn render(&self, value: &T, length: usize, buf: &mut String) {
        pad_number((self.field)(value), length, buf);
    }
}


/// A year-like field: `y` for the calendar year and `Y` for the ISO
/// week-based year, which share their numeric behaviour.
pub(crate) struct YearNumber {
    pub(crate) letter: char,
    pub(crate) field: fn(&LocalDate) -> i64,
}

impl Compiler<LocalDate> for YearNumber {
    fn letter(&self) -> char { self.letter }
    fn max_run(&self) -> usize { 9 }

    fn render(&self, value: &LocalDate, length: usize, buf: &mut String) {
        let year = (self.field)(value);

        match length {
            1 => buf.push_str(&year.to_string()),

            // The two-digit style keeps the sign and the low two digits
            // of the magnitude, so 2011 becomes “11” and -305 “-05”.
            2 => {
                if year < 0 {
                    buf.push('-');
                }
                pad_number(year.abs() % 100, 2, buf);
            },

            _ => pad_number(year, length, buf),
        }
    }
}


/// The month-of-year field, which counts in numbers for short runs and
/// in names for longer ones.
pub(crate) struct MonthName {
    short: Vec<String>,
    long: Vec<String>,
}

impl MonthName {
    pub(crate) fn new(names: &locale::Time) -> Self {
        Self {
            short: (0..12).map(|month| names.short_month_name(month)).collect(),
            long:  (0..12).map(|month| names.long_month_name(month)).collect(),
        }
    }
}

impl Compiler<LocalDate> for MonthName {
    fn letter(&self) -> char { 'M' }
    fn max_run(&self) -> usize { 4 }

    fn render(&self, value: &LocalDate, length: usize, buf: &mut String) {
        let month = value.month();

        match length {
            3 => buf.push_str(&self.short[month.months_from_january()]),
            4 => buf.push_str(&self.long[month.months_from_january()]),
            _ => pad_number(month as i64, length, buf),
        }
    }
}


/// The day-of-week field, which only ever speaks in names: three runs of
/// abbreviation, then the full name, then a single letter.
pub(crate) struct WeekdayName {
    short: Vec<String>,
    long: Vec<String>,
}

impl WeekdayName {
    pub(crate) fn new(names: &locale::Time) -> Self {
        Self {
            short: (0..7).map(|day| names.short_day_name(day)).collect(),
            long:  (0..7).map(|day| names.long_day_name(day)).collect(),
        }
    }
}

impl Compiler<LocalDate> for WeekdayName {
    fn letter(&self) -> char { 'E' }
    fn max_run(&self) -> usize { 5 }

    fn render(&self, value: &LocalDate, length: usize, buf: &mut String) {
        let day = value.weekday() as usize;

        match length {
            4 => buf.push_str(&self.long[day]),
            5 => {
                if let Some(initial) = self.long[day].chars().next() {
                    buf.push(initial);
                }
            },
            _ => buf.push_str(&self.short[day]),
        }
    }
}


/// The era field. The words are fixed rather than drawn from a locale
/// table, as the locale data has nothing to say about eras.
pub(crate) struct EraName;

impl Compiler<LocalDate> for EraName {
    fn letter(&self) -> char { 'G' }
    fn max_run(&self) -> usize { 5 }

    fn render(&self, value: &LocalDate, length: usize, buf: &mut String) {
        buf.push_str(match (value.era(), length) {
            (Era::AnnoDomini,   4) => "Anno Domini",
            (Era::BeforeChrist, 4) => "Before Christ",
            (Era::AnnoDomini,   5) => "A",
            (Era::BeforeChrist, 5) => "B",
            (Era::AnnoDomini,   _) => "AD",
            (Era::BeforeChrist, _) => "BC",
        });
    }
}


static QUARTER_NAMES: &[&str; 4] = &["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"];

/// The quarter-of-year field: numeric, padded, `Q3`, or an ordinal word.
pub(crate) struct Quarter;

impl Compiler<LocalDate> for Quarter {
    fn letter(&self) -> char { 'Q' }
    fn max_run(&self) -> usize { 4 }

    fn render(&self, value: &LocalDate, length: usize, buf: &mut String) {
        let quarter = value.quarter();

        match length {
            3 => {
                buf.push('Q');
                buf.push_str(&quarter.to_string());
            },
            4 => buf.push_str(QUARTER_NAMES[quarter as usize - 1]),
            _ => pad_number(quarter, length, buf),
        }
    }
}


/// The fraction-of-second field. The run selects the *leading* digits of
/// the three-digit millisecond value, so `S` on 987 milliseconds gives
/// “9”, not “7”.
pub(crate) struct Fraction;

impl Compiler<LocalTime> for Fraction {
    fn letter(&self) -> char { 'S' }
    fn max_run(&self) -> usize { 3 }

    fn render(&self, value: &LocalTime, length: usize, buf: &mut String) {
        let millis = format!("{:03}", value.millisecond());
        buf.push_str(&millis[..length]);
    }
}


/// The AM/PM field, which needs to know nothing beyond whether the hour
/// of the day has reached twelve.
pub(crate) struct Meridiem;

impl Compiler<LocalTime> for Meridiem {
    fn letter(&self) -> char { 'a' }
    fn max_run(&self) -> usize { 1 }

    fn render(&self, value: &LocalTime, _length: usize, buf: &mut String) {
        buf.push_str(if value.is_before_midday() { "AM" } else { "PM" });
    }
}


/// The UTC offset field, in the five tiers the run length can pick:
///
/// 1. hour, with minutes appended only when they are non-zero;
/// 2. hour and minutes;
/// 3. hour and minutes, colon-separated;
/// 4. hour and minutes, with seconds appended only when non-zero;
/// 5. hour and minutes colon-separated, with `:seconds` when non-zero.
///
/// The `zulu` flag selects whether a zero offset renders as `Z` (the `X`
/// letter) or spelled out as `+00...` (the `x` letter).
pub(crate) struct UtcOffset {
    pub(crate) letter: char,
    pub(crate) zulu: bool,
}

impl Compiler<Offset> for UtcOffset {
    fn letter(&self) -> char { self.letter }
    fn max_run(&self) -> usize { 5 }

    fn render(&self, value: &Offset, length: usize, buf: &mut String) {
        let hours   = value.hours().abs();
        let minutes = value.minutes().abs();
        let seconds = value.seconds().abs();

        if self.zulu && hours == 0 && minutes == 0 && seconds == 0 {
            buf.push('Z');
            return;
        }

        buf.push(if value.is_negative() { '-' } else { '+' });
        pad_number(hours, 2, buf);

        match length {
            1 => {
                if minutes != 0 {
                    pad_number(minutes, 2, buf);
                }
            },
            2 => pad_number(minutes, 2, buf),
            3 => {
                buf.push(':');
                pad_number(minutes, 2, buf);
            },
            4 => {
                pad_number(minutes, 2, buf);
                if seconds != 0 {
                    pad_number(seconds, 2, buf);
                }
            },
            _ => {
                buf.push(':');
                pad_number(minutes, 2, buf);
                if seconds != 0 {
                    buf.push(':');
                    pad_number(seconds, 2, buf);
                }
            },
        }
    }
}


/// The zone identifier field. Unlike every other field of a zoned value,
/// this one is not delegated downwards: the identifier lives on the
/// zoned value itself, and has no tiers to select between.
pub(crate) struct ZoneName;

impl Compiler<ZonedDateTime> for ZoneName {
    fn letter(&self) -> char { 'V' }
    fn max_run(&self) -> usize { 2 }

    fn render(&self, value: &ZonedDateTime, _length: usize, buf: &mut String) {
        buf.push_str(value.zone());
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::pad_number;

    mod padding {
        use super::*;

        fn padded<N>(number: N, width: usize) -> String
        where N: ::num_traits::Signed + ::std::fmt::Display {
            let mut buf = String::new();
            pad_number(number, width, &mut buf);
            buf
        }

        #[test]
        fn pads_to_width() {
            assert_eq!(padded(3, 2), "03");
        }

        #[test]
        fn never_truncates() {
            assert_eq!(padded(2011, 2), "2011");
        }

        #[test]
        fn sign_shares_the_width() {
            assert_eq!(padded(-305, 4), "-305");
        }

        #[test]
        fn negative_overflow() {
            assert_eq!(padded(-2011, 2), "-2011");
        }
    }
}
