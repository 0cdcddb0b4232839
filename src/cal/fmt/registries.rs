//! The built-in registries, one per temporal type.
//!
//! Each base registry enumerates the letters its type answers to; the
//! composite registries are assembled out of the base ones by adopting
//! their compilers through a projection (a date-time is taken apart into
//! its date for date letters, and its time for time letters). The letter
//! sets are disjoint by construction, so the merges can’t collide.

use locale;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalDateTime, LocalTime};
use cal::fmt::Formattable;
use cal::fmt::compiler::Registry;
use cal::fmt::fields::{EraName, Fraction, Meridiem, MonthName, Numeric, Quarter, UtcOffset, WeekdayName, YearNumber, ZoneName};
use cal::offset::Offset;
use cal::zoned::ZonedDateTime;


/// Builds the registry of time-of-day compilers.
pub fn time_registry() -> Registry<LocalTime> {
    let mut registry = Registry::new();
    registry.insert(Numeric { letter: 'H', max_run: 2, field: |time: &LocalTime| time.hour() as i64 });
    registry.insert(Numeric { letter: 'h', max_run: 2, field: |time: &LocalTime| time.hour_12() as i64 });
    registry.insert(Numeric { letter: 'm', max_run: 2, field: |time: &LocalTime| time.minute() as i64 });
    registry.insert(Numeric { letter: 's', max_run: 2, field: |time: &LocalTime| time.second() as i64 });
    registry.insert(Fraction);
    registry.insert(Meridiem);
    registry
}

/// Builds the registry of date compilers, with the month and weekday
/// name tables drawn from the given locale.
pub fn date_registry(names: &locale::Time) -> Registry<LocalDate> {
    let mut registry = Registry::new();
    registry.insert(EraName);
    registry.insert(YearNumber { letter: 'y', field: |date: &LocalDate| date.year() });
    registry.insert(YearNumber { letter: 'Y', field: |date: &LocalDate| date.week_based_year() });
    registry.insert(Quarter);
    registry.insert(MonthName::new(names));
    registry.insert(Numeric { letter: 'd', max_run: 2, field: |date: &LocalDate| date.day() as i64 });
    registry.insert(Numeric { letter: 'D', max_run: 3, field: |date: &LocalDate| date.yearday() as i64 });
    registry.insert(WeekdayName::new(names));
    registry.insert(Numeric { letter: 'e', max_run: 2, field: |date: &LocalDate| date.weekday().days_from_monday_as_one() as i64 });
    registry
}

/// Builds the registry of UTC offset compilers.
pub fn offset_registry() -> Registry<Offset> {
    let mut registry = Registry::new();
    registry.insert(UtcOffset { letter: 'X', zulu: true });
    registry.insert(UtcOffset { letter: 'x', zulu: false });
    registry
}

/// Builds the date-time registry by merging the date and time ones over
/// their projections out of a combined value.
pub fn date_time_registry(names: &locale::Time) -> Registry<LocalDateTime> {
    let mut registry = Registry::new();
    registry.adopt(&date_registry(names), LocalDateTime::date);
    registry.adopt(&time_registry(), LocalDateTime::time);
    registry
}

/// Builds the zoned date-time registry: everything a date-time can do,
/// plus the offset letters and the zone identifier.
pub fn zoned_registry(names: &locale::Time) -> Registry<ZonedDateTime> {
    let mut registry = Registry::new();
    registry.adopt(&date_time_registry(names), ZonedDateTime::local);
    registry.adopt(&offset_registry(), ZonedDateTime::offset);
    registry.insert(ZoneName);
    registry
}


// The shared registries behind `Formatter::of_pattern`, built on first
// use with the English name tables and kept for the process lifetime.
lazy_static! {
    static ref TIME: Registry<LocalTime> = time_registry();
    static ref DATE: Registry<LocalDate> = date_registry(&locale::Time::english());
    static ref DATE_TIME: Registry<LocalDateTime> = date_time_registry(&locale::Time::english());
    static ref OFFSET: Registry<Offset> = offset_registry();
    static ref ZONED: Registry<ZonedDateTime> = zoned_registry(&locale::Time::english());
}

impl Formattable for LocalTime {
    fn registry() -> &'static Registry<Self> { &TIME }
}

impl Formattable for LocalDate {
    fn registry() -> &'static Registry<Self> { &DATE }
}

impl Formattable for LocalDateTime {
    fn registry() -> &'static Registry<Self> { &DATE_TIME }
}

impl Formattable for Offset {
    fn registry() -> &'static Registry<Self> { &OFFSET }
}

impl Formattable for ZonedDateTime {
    fn registry() -> &'static Registry<Self> { &ZONED }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn the_letter_sets_are_disjoint() {
        // The merges panic on a collision, so building the widest
        // registry is the whole test.
        let _ = zoned_registry(&locale::Time::english());
    }
}
