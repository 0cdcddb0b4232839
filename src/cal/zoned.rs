//! Date-times paired with an already-resolved time zone.

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDateTime, Month, Weekday};
use cal::offset::Offset;


/// A **zoned date-time** is a wall-clock date and time, along with the
/// offset from UTC in force there and the identifier of the zone the
/// offset came from.
///
/// This library performs no zone-rule lookups of its own: by the time
/// one of these exists, somebody else has already decided what the
/// offset at that wall-clock moment is.
#[derive(PartialEq, Clone)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: Offset,
    zone: String,
}

impl ZonedDateTime {

    /// Creates a new zoned date-time from a wall-clock date-time, the
    /// offset in force, and the zoneinfo identifier of the zone, such as
    /// `"Europe/Berlin"`.
    pub fn new<Z>(local: LocalDateTime, offset: Offset, zone: Z) -> Self
    where Z: Into<String> {
        Self { local, offset, zone: zone.into() }
    }

    /// The wall-clock date and time.
    pub fn local(&self) -> LocalDateTime {
        self.local
    }

    /// The offset from UTC in force at this date-time.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The zoneinfo identifier this date-time’s offset came from.
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i64 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> i8 { self.local.day() }
    fn yearday(&self) -> i16 { self.local.yearday() }
    fn weekday(&self) -> Weekday { self.local.weekday() }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
    fn millisecond(&self) -> i16 { self.local.millisecond() }
}


#[cfg(test)]
mod test {
    use super::ZonedDateTime;
    use cal::{DatePiece, TimePiece};
    use cal::datetime::{LocalDate, LocalDateTime, LocalTime, Month};
    use cal::offset::Offset;

    #[test]
    fn keeps_the_wall_clock() {
        let local = LocalDateTime::new(
                    LocalDate::ymd(2015, Month::June, 26).unwrap(),
                    LocalTime::hms(16, 30, 0).unwrap());
        let offset = Offset::of_hours_and_minutes(2, 0).unwrap();
        let zoned = ZonedDateTime::new(local, offset, "Europe/Berlin");

        assert_eq!(zoned.day(), 26);
        assert_eq!(zoned.hour(), 16);
        assert_eq!(zoned.zone(), "Europe/Berlin");
    }
}
