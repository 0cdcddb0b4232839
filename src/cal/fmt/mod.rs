//! Pattern-driven conversion of dates and times to strings.
//!
//! A **pattern** is a little program: letters such as `y` or `m` stand
//! for fields of the value being formatted, anything in single quotes is
//! literal text, and everything else passes through as-is. Repeating a
//! letter selects how the field comes out, so `M` is the month number
//! while `MMMM` is its full name. Patterns are checked and compiled
//! *once*, into a [`Formatter`], which can then be applied to any number
//! of values without any possibility of failure.
//!
//! ### Examples
//!
//! ```
//! use datefmt::{Formatter, LocalDate, Month};
//!
//! let format: Formatter<LocalDate> = Formatter::of_pattern("EEEE d MMMM yyyy").unwrap();
//! let date = LocalDate::ymd(2011, Month::December, 3).unwrap();
//!
//! assert_eq!(format.format(&date), "Saturday 3 December 2011");
//! ```

pub mod compiler;
mod fields;
mod iso;
mod pattern;
mod registries;

pub use self::compiler::{Compiler, Registry};
pub use self::pattern::Error;
pub use self::registries::{date_registry, date_time_registry, offset_registry, time_registry, zoned_registry};

use std::fmt;
use std::sync::Arc;


/// One compiled unit of output: either a stretch of literal text, or a
/// field compiler bound to the run length that was written in the
/// pattern.
pub enum Component<T: 'static> {
    Literal(String),
    Field(Arc<dyn Compiler<T>>, usize),
}

impl<T: 'static> Clone for Component<T> {
    fn clone(&self) -> Self {
        match *self {
            Component::Literal(ref text) => Component::Literal(text.clone()),
            Component::Field(ref compiler, length) => Component::Field(Arc::clone(compiler), length),
        }
    }
}

impl<T: 'static> fmt::Debug for Component<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Component::Literal(ref text) => write!(f, "Literal({:?})", text),
            Component::Field(ref compiler, length) => write!(f, "Field({:?}, {})", compiler.letter(), length),
        }
    }
}

/// Two field components are considered equal when they agree on their
/// letter and run length; the compilers themselves are interchangeable
/// within one registry.
impl<T: 'static> PartialEq for Component<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (&Component::Literal(ref a), &Component::Literal(ref b)) => {
                a == b
            },
            (&Component::Field(ref a, a_length), &Component::Field(ref b, b_length)) => {
                a.letter() == b.letter() && a_length == b_length
            },
            _ => false,
        }
    }
}


/// A **formatter** holds a compiled component sequence for one temporal
/// type, and applies it to values of that type.
///
/// A formatter is immutable once compiled. Formatting walks the
/// components in order, each one a pure function of the value and its
/// own run length, so the output depends on nothing but the pattern and
/// the value, and one formatter can be shared between threads freely.
pub struct Formatter<T: 'static> {
    components: Vec<Component<T>>,
}

impl<T: 'static> Formatter<T> {

    /// Creates a formatter directly from a component sequence, for the
    /// rare occasion when compiling a pattern string is the wrong tool.
    pub fn of_components(components: Vec<Component<T>>) -> Self {
        Self { components }
    }

    /// Compiles a pattern against the given registry.
    ///
    /// All the checking happens here: an overlong run or an unterminated
    /// quote is reported as an error now, and the formatter that comes
    /// back can never fail to format.
    pub fn of_pattern_with(pattern: &str, registry: &Registry<T>) -> Result<Self, Error> {
        pattern::compile(pattern, registry).map(Self::of_components)
    }

    /// Applies the compiled sequence to a value.
    pub fn format(&self, value: &T) -> String {
        let mut buf = String::new();

        for component in &self.components {
            match *component {
                Component::Literal(ref text) => buf.push_str(text),
                Component::Field(ref compiler, length) => compiler.render(value, length, &mut buf),
            }
        }

        buf
    }
}

impl<T: Formattable> Formatter<T> {

    /// Compiles a pattern against the value type’s own registry.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datefmt::{Formatter, LocalTime};
    ///
    /// let format: Formatter<LocalTime> = Formatter::of_pattern("HH:mm").unwrap();
    /// let time = LocalTime::hms(22, 5, 10).unwrap();
    ///
    /// assert_eq!(format.format(&time), "22:05");
    /// ```
    pub fn of_pattern(pattern: &str) -> Result<Self, Error> {
        Self::of_pattern_with(pattern, T::registry())
    }
}

impl<T: 'static> Clone for Formatter<T> {
    fn clone(&self) -> Self {
        Self { components: self.components.clone() }
    }
}

impl<T: 'static> fmt::Debug for Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Formatter({:?})", self.components)
    }
}

impl<T: 'static> PartialEq for Formatter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}


/// A temporal type with a default registry, which is what lets
/// `Formatter::of_pattern` be called without naming one.
pub trait Formattable: Sized + 'static {

    /// The shared registry for this type.
    fn registry() -> &'static Registry<Self>;
}
