extern crate datefmt;

use datefmt::{Formatter, LocalDate, LocalDateTime, LocalTime, Month, Offset, ZonedDateTime};

fn main() {
    let date = LocalDate::ymd(2011, Month::December, 3).unwrap();
    let long: Formatter<LocalDate> = Formatter::of_pattern("EEEE d MMMM yyyy").unwrap();
    println!("{}", long.format(&date));

    let when = LocalDateTime::new(date, LocalTime::hms(10, 15, 30).unwrap());
    let iso: Formatter<LocalDateTime> = Formatter::of_pattern("yyyy-MM-dd'T'HH:mm:ss").unwrap();
    println!("{}", iso.format(&when));

    let offset = Offset::of_hours_and_minutes(1, 0).unwrap();
    let zoned = ZonedDateTime::new(when, offset, "Europe/Berlin");
    let full: Formatter<ZonedDateTime> = Formatter::of_pattern("yyyy-MM-dd HH:mm xxx[VV]").unwrap();
    println!("{}", full.format(&zoned));
}
