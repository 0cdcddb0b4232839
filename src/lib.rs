#![crate_name = "datefmt"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for pattern-driven [ date and time ](https://crates.io/crates/datefmt)
//! formatting and arithmetic.
//!
//! A formatter is compiled once from a pattern string, then applied to as
//! many values as needed:
//!
//! # Examples
//!
//! ```
//! use datefmt::{Formatter, LocalDate, Month};
//!
//! let format: Formatter<LocalDate> = Formatter::of_pattern("d MMMM yyyy").unwrap();
//! let date = LocalDate::ymd(2011, Month::December, 3).unwrap();
//!
//! assert_eq!(format.format(&date), "3 December 2011");
//! ```

extern crate locale;
extern crate num_traits;
extern crate pad;

#[macro_use]
extern crate lazy_static;

mod cal;
pub use cal::{DatePiece, TimePiece};
pub use cal::datetime::{Era, LocalDate, LocalDateTime, LocalTime, Month, Weekday, Year};
pub use cal::datetime::Error as DateTimeError;
pub use cal::offset::Offset;
pub use cal::offset::Error as OffsetError;
pub use cal::zoned::ZonedDateTime;
pub use cal::fmt;
pub use cal::fmt::{Compiler, Component, Formattable, Formatter, Registry};
pub use cal::fmt::Error as FormatError;

mod duration;
pub use duration::Duration;

mod period;
pub use period::Period;

mod util;
