extern crate datefmt;

use datefmt::{Formatter, LocalDate, LocalDateTime, LocalTime, Month, Offset, ZonedDateTime};


fn december_3rd_morning() -> LocalDateTime {
    LocalDateTime::new(
        LocalDate::ymd(2011, Month::December, 3).unwrap(),
        LocalTime::hms(10, 15, 30).unwrap())
}

fn in_berlin(local: LocalDateTime) -> ZonedDateTime {
    let offset = Offset::of_hours_and_minutes(1, 0).unwrap();
    ZonedDateTime::new(local, offset, "Europe/Berlin")
}


#[test]
fn iso_datetime() {
    let format: Formatter<LocalDateTime> = Formatter::of_pattern("yyyy-MM-dd'T'HH:mm:ss").unwrap();

    assert_eq!(format.format(&december_3rd_morning()), "2011-12-03T10:15:30");
}

#[test]
fn a_wordier_datetime() {
    let format: Formatter<LocalDateTime> = Formatter::of_pattern("EEEE d MMMM, h:mm a").unwrap();

    assert_eq!(format.format(&december_3rd_morning()), "Saturday 3 December, 10:15 AM");
}

#[test]
fn delegation_agrees_with_the_narrower_formatters() {
    let when = december_3rd_morning();

    let date_format: Formatter<LocalDate> = Formatter::of_pattern("yyyy-MM-dd").unwrap();
    let time_format: Formatter<LocalTime> = Formatter::of_pattern("HH:mm").unwrap();
    let both_format: Formatter<LocalDateTime> = Formatter::of_pattern("yyyy-MM-ddHH:mm").unwrap();

    let concatenated = date_format.format(&when.date()) + &time_format.format(&when.time());
    assert_eq!(both_format.format(&when), concatenated);
}


mod zoned {
    use super::*;

    #[test]
    fn zone_identifier() {
        let zoned = in_berlin(december_3rd_morning());

        let format: Formatter<ZonedDateTime> = Formatter::of_pattern("VV").unwrap();
        assert_eq!(format.format(&zoned), "Europe/Berlin");

        let format: Formatter<ZonedDateTime> = Formatter::of_pattern("V").unwrap();
        assert_eq!(format.format(&zoned), "Europe/Berlin");
    }

    #[test]
    fn offset_letters_are_delegated() {
        let zoned = in_berlin(december_3rd_morning());

        let format: Formatter<ZonedDateTime> = Formatter::of_pattern("XXX").unwrap();
        assert_eq!(format.format(&zoned), "+01:00");
    }

    #[test]
    fn everything_at_once() {
        let zoned = in_berlin(december_3rd_morning());

        let format: Formatter<ZonedDateTime> =
            Formatter::of_pattern("yyyy-MM-dd HH:mm xxx[VV]").unwrap();
        assert_eq!(format.format(&zoned), "2011-12-03 10:15 +01:00[Europe/Berlin]");
    }

    #[test]
    fn the_wall_clock_is_not_readjusted() {
        // The offset was resolved when the value was built; formatting
        // reads the wall clock as it stands.
        let zoned = in_berlin(december_3rd_morning());

        let format: Formatter<ZonedDateTime> = Formatter::of_pattern("HH:mm").unwrap();
        assert_eq!(format.format(&zoned), "10:15");
    }
}
