extern crate datefmt;

use datefmt::{Formatter, Offset};


fn format(pattern: &str, offset: &Offset) -> String {
    Formatter::of_pattern(pattern).unwrap().format(offset)
}


mod zone_neutral {
    use super::*;

    #[test]
    fn utc_renders_as_zulu_at_every_width() {
        for pattern in &["X", "XX", "XXX", "XXXX", "XXXXX"] {
            assert_eq!(format(pattern, &Offset::utc()), "Z");
        }
    }

    #[test]
    fn a_zero_second_offset_is_also_zulu() {
        assert_eq!(format("XXX", &Offset::of_seconds(0).unwrap()), "Z");
    }

    #[test]
    fn the_lowercase_letter_spells_zero_out() {
        let zero = Offset::utc();
        assert_eq!(format("x",     &zero), "+00");
        assert_eq!(format("xx",    &zero), "+0000");
        assert_eq!(format("xxx",   &zero), "+00:00");
        assert_eq!(format("xxxx",  &zero), "+0000");
        assert_eq!(format("xxxxx", &zero), "+00:00");
    }
}


mod eastward {
    use super::*;

    #[test]
    fn half_hour_offset() {
        let offset = Offset::of_hours_and_minutes(5, 30).unwrap();
        assert_eq!(format("X",     &offset), "+0530");
        assert_eq!(format("XX",    &offset), "+0530");
        assert_eq!(format("XXX",   &offset), "+05:30");
        assert_eq!(format("XXXX",  &offset), "+0530");
        assert_eq!(format("XXXXX", &offset), "+05:30");
    }

    #[test]
    fn whole_hour_offset_can_drop_its_minutes() {
        let offset = Offset::of_hours_and_minutes(5, 0).unwrap();
        assert_eq!(format("X",  &offset), "+05");
        assert_eq!(format("XX", &offset), "+0500");
    }
}


mod westward {
    use super::*;

    #[test]
    fn negative_offset() {
        let offset = Offset::of_hours_and_minutes(-3, -45).unwrap();
        assert_eq!(format("x",   &offset), "-0345");
        assert_eq!(format("xxx", &offset), "-03:45");
    }

    #[test]
    fn second_precision_appears_only_when_present() {
        let offset = Offset::of_seconds(-25 * 60 - 21).unwrap();
        assert_eq!(format("XXX",   &offset), "-00:25");
        assert_eq!(format("XXXX",  &offset), "-002521");
        assert_eq!(format("XXXXX", &offset), "-00:25:21");
    }

    #[test]
    fn fixed_width_tiers_hide_zero_seconds() {
        let offset = Offset::of_hours_and_minutes(-3, -45).unwrap();
        assert_eq!(format("XXXX",  &offset), "-0345");
        assert_eq!(format("XXXXX", &offset), "-03:45");
    }
}
