//! Fixed offsets from UTC.

use std::error::Error as ErrorTrait;
use std::fmt;

use util::RangeExt;


/// A fixed offset from UTC, stored to second precision.
///
/// An offset is *already resolved*: whatever zone rules produced it have
/// already been consulted by the time a value of this type exists.
#[derive(PartialEq, Copy, Clone)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    /// The UTC offset itself, with no adjustment at all.
    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    /// Creates an offset of the given number of seconds, positive or
    /// negative, up to a full day either side of UTC.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400..86401) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates an offset of the given numbers of hours and minutes.
    ///
    /// The two fields must agree on their sign: an offset can’t be an
    /// hour ahead and thirty minutes behind at the same time.
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::SignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OutOfRange)
        }
        else {
            let hours = hours as i32;
            let minutes = minutes as i32;
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.hours().is_negative() || self.minutes().is_negative() || self.seconds().is_negative()
    }

    /// The hours portion of the offset, negative for westward offsets.
    pub fn hours(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 / 60) as i8,
            None => 0,
        }
    }

    /// The minutes portion of the offset, negative for westward offsets.
    pub fn minutes(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 % 60) as i8,
            None => 0,
        }
    }

    /// The seconds portion of the offset, negative for westward offsets.
    pub fn seconds(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s % 60) as i8,
            None => 0,
        }
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
    SignMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange    => write!(f, "offset field out of range"),
            Error::SignMismatch  => write!(f, "sign mismatch"),
        }
    }
}

impl ErrorTrait for Error {
}
