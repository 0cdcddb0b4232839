extern crate datefmt;

use datefmt::{FormatError, Formatter, LocalDate, LocalTime, Month};


fn date() -> LocalDate {
    LocalDate::ymd(2011, Month::December, 3).unwrap()
}


#[test]
fn literal_only_patterns_ignore_the_value() {
    let format: Formatter<LocalDate> = Formatter::of_pattern("'date:' ->").unwrap();

    assert_eq!(format.format(&date()), "date: ->");
    assert_eq!(format.format(&LocalDate::ymd(1, Month::January, 1).unwrap()), "date: ->");
}

#[test]
fn formatting_is_deterministic() {
    let format: Formatter<LocalDate> = Formatter::of_pattern("EEEE d MMMM yyyy").unwrap();

    assert_eq!(format.format(&date()), format.format(&date()));
}

#[test]
fn quotes_and_doubled_quotes() {
    let format: Formatter<LocalDate> = Formatter::of_pattern("'Mud'dr''").unwrap();

    assert_eq!(format.format(&date()), "Mud3r'");
}

#[test]
fn quoted_apostrophe_inside_words() {
    let format: Formatter<LocalTime> = Formatter::of_pattern("HH 'o''clock'").unwrap();
    let time = LocalTime::hms(9, 0, 0).unwrap();

    assert_eq!(format.format(&time), "09 o'clock");
}

#[test]
fn punctuation_passes_through_unquoted() {
    let format: Formatter<LocalDate> = Formatter::of_pattern("d.M.yyyy!").unwrap();

    assert_eq!(format.format(&date()), "3.12.2011!");
}

#[test]
fn unclaimed_letters_pass_through() {
    let format: Formatter<LocalDate> = Formatter::of_pattern("yyyy z").unwrap();

    assert_eq!(format.format(&date()), "2011 z");
}


mod failures {
    use super::*;

    #[test]
    fn day_run_too_long() {
        assert_eq!(Formatter::<LocalDate>::of_pattern("ddd").unwrap_err(),
                   FormatError::RunTooLong { letter: 'd', length: 3, maximum: 2, position: 0 });
    }

    #[test]
    fn month_run_too_long() {
        assert_eq!(Formatter::<LocalDate>::of_pattern("MMMMM").unwrap_err(),
                   FormatError::RunTooLong { letter: 'M', length: 5, maximum: 4, position: 0 });
    }

    #[test]
    fn meridiem_run_too_long() {
        assert_eq!(Formatter::<LocalTime>::of_pattern("aa").unwrap_err(),
                   FormatError::RunTooLong { letter: 'a', length: 2, maximum: 1, position: 0 });
    }

    #[test]
    fn fraction_run_too_long() {
        assert_eq!(Formatter::<LocalTime>::of_pattern("HH:mm:ss.SSSS").unwrap_err(),
                   FormatError::RunTooLong { letter: 'S', length: 4, maximum: 3, position: 9 });
    }

    #[test]
    fn unterminated_quote() {
        assert_eq!(Formatter::<LocalDate>::of_pattern("yyyy 'then").unwrap_err(),
                   FormatError::UnterminatedQuote { position: 5 });
    }
}
