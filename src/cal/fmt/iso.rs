//! `Debug` renderings in fixed ISO-8601 shapes.

use std::fmt;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalDateTime, LocalTime};
use cal::offset::Offset;
use cal::zoned::ZonedDateTime;
use util::RangeExt;


fn fmt_date(date: &LocalDate, f: &mut fmt::Formatter) -> fmt::Result {
    let year = date.year();

    // Years wider than four digits, and years before year 0, get an
    // explicit sign, as ISO-8601 expanded representations do.
    if year.is_within(0 .. 9999) {
        write!(f, "{:04}-{:02}-{:02}", year, date.month() as usize, date.day())
    }
    else {
        write!(f, "{:+05}-{:02}-{:02}", year, date.month() as usize, date.day())
    }
}

fn fmt_time(time: &LocalTime, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:02}:{:02}:{:02}.{:03}", time.hour(), time.minute(), time.second(), time.millisecond())
}

fn fmt_offset(offset: &Offset, f: &mut fmt::Formatter) -> fmt::Result {
    if offset.is_utc() {
        return write!(f, "Z");
    }

    let sign = if offset.is_negative() { '-' } else { '+' };
    write!(f, "{}{:02}:{:02}", sign, offset.hours().abs(), offset.minutes().abs())?;

    if offset.seconds() != 0 {
        write!(f, ":{:02}", offset.seconds().abs())?;
    }

    Ok(())
}


impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate(")?;
        fmt_date(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime(")?;
        fmt_time(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime(")?;
        fmt_date(&self.date(), f)?;
        write!(f, "T")?;
        fmt_time(&self.time(), f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset(")?;
        fmt_offset(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZonedDateTime(")?;
        fmt_date(&self.local().date(), f)?;
        write!(f, "T")?;
        fmt_time(&self.local().time(), f)?;
        fmt_offset(&self.offset(), f)?;
        write!(f, "[{}])", self.zone())
    }
}
