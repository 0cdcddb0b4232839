//! The pattern scanner, which turns a pattern string into components.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::mem;
use std::sync::Arc;

use cal::fmt::Component;
use cal::fmt::compiler::Registry;


/// Compiles a pattern string into the ordered component sequence a
/// formatter runs over.
///
/// The scanning rules are small but exact:
///
/// - A single quote starts a stretch of literal text, ended by the next
///   single quote. Two adjacent quotes stand for one literal quote
///   character, whether inside a quoted stretch or not.
/// - Outside quotes, a letter the registry claims starts a run. The run
///   length is the number of consecutive occurrences of that same
///   letter, and selects the rendering; a run longer than the compiler’s
///   maximum is an error here, not something to be clamped.
/// - Every other character is literal text, passed through verbatim.
///   Adjacent literal characters collapse into a single component.
pub(crate) fn compile<T>(pattern: &str, registry: &Registry<T>) -> Result<Vec<Component<T>>, Error>
where T: 'static {
    let mut components = Vec::new();
    let mut literal = String::new();
    let mut iter = pattern.char_indices().peekable();

    while let Some((position, c)) = iter.next() {
        if c == '\'' {
            if let Some(&(_, '\'')) = iter.peek() {
                let _ = iter.next();
                literal.push('\'');
                continue;
            }

            let mut terminated = false;
            while let Some((_, quoted)) = iter.next() {
                if quoted == '\'' {
                    if let Some(&(_, '\'')) = iter.peek() {
                        let _ = iter.next();
                        literal.push('\'');
                    }
                    else {
                        terminated = true;
                        break;
                    }
                }
                else {
                    literal.push(quoted);
                }
            }

            if !terminated {
                return Err(Error::UnterminatedQuote { position });
            }
        }
        else if let Some(compiler) = registry.lookup(c) {
            let mut length = 1;
            while let Some(&(_, next)) = iter.peek() {
                if next != c { break }
                let _ = iter.next();
                length += 1;
            }

            if length > compiler.max_run() {
                return Err(Error::RunTooLong { letter: c, length, maximum: compiler.max_run(), position });
            }

            if !literal.is_empty() {
                components.push(Component::Literal(mem::replace(&mut literal, String::new())));
            }

            components.push(Component::Field(Arc::clone(compiler), length));
        }
        else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        components.push(Component::Literal(literal));
    }

    Ok(components)
}


/// Something that can go wrong while compiling a pattern. Every variant
/// carries the byte position of the offending character, counting from
/// the start of the pattern.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// A recognised letter was repeated more often than its compiler
    /// supports.
    RunTooLong { letter: char, length: usize, maximum: usize, position: usize },

    /// A quoted stretch of literal text was still open at the end of the
    /// pattern.
    UnterminatedQuote { position: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::RunTooLong { letter, length, maximum, position } => {
                write!(f, "run of {} {:?} characters at position {} (this field supports at most {})",
                       length, letter, position, maximum)
            },
            Error::UnterminatedQuote { position } => {
                write!(f, "unterminated quote at position {}", position)
            },
        }
    }
}

impl ErrorTrait for Error {
}


#[cfg(test)]
mod test {
    pub(crate) use super::{compile, Error};
    pub(crate) use cal::fmt::{Component, date_registry};
    pub(crate) use cal::fmt::compiler::Registry;
    pub(crate) use cal::datetime::LocalDate;
    pub(crate) use std::sync::Arc;
    pub(crate) use locale;

    fn registry() -> Registry<LocalDate> {
        date_registry(&locale::Time::english())
    }

    // Field components compare by letter and run length, so the expected
    // values can come from a freshly built registry.
    fn field(letter: char, length: usize) -> Component<LocalDate> {
        Component::Field(Arc::clone(registry().lookup(letter).unwrap()), length)
    }

    fn literal(text: &str) -> Component<LocalDate> {
        Component::Literal(text.into())
    }

    macro_rules! test {
        ($name:ident: $input:expr => $result:expr) => {
            #[test]
            fn $name() {
                assert_eq!(compile($input, &registry()), $result)
            }
        };
    }

    mod scanning {
        use super::*;

        test!(empty_pattern: ""          => Ok(vec![]));
        test!(entirely_literal: "@ 10:30" => Ok(vec![ literal("@ 10:30") ]));
        test!(single_field: "d"          => Ok(vec![ field('d', 1) ]));
        test!(a_run_of_one_letter: "yyyy" => Ok(vec![ field('y', 4) ]));

        test!(a_bunch_of_fields: "yyyy-MM-dd" => Ok(vec![ field('y', 4), literal("-"),
                                                          field('M', 2), literal("-"),
                                                          field('d', 2) ]));

        test!(unclaimed_letters_are_literal: "dz" => Ok(vec![ field('d', 1), literal("z") ]));
        test!(adjacent_runs_stay_separate: "yyQQ" => Ok(vec![ field('y', 2), field('Q', 2) ]));
    }

    mod quoting {
        use super::*;

        test!(quoted_letters_are_literal: "'yyyy'" => Ok(vec![ literal("yyyy") ]));
        test!(doubled_quote_outside: "''"          => Ok(vec![ literal("'") ]));
        test!(doubled_quote_inside: "'o''clock'"   => Ok(vec![ literal("o'clock") ]));

        test!(quotes_between_fields: "d' of 'MMMM" => Ok(vec![ field('d', 1), literal(" of "),
                                                               field('M', 4) ]));

        test!(lone_trailing_quote: "d'" => Err(Error::UnterminatedQuote { position: 1 }));
    }

    mod failures {
        use super::*;

        test!(run_too_long: "ddd"              => Err(Error::RunTooLong { letter: 'd', length: 3, maximum: 2, position: 0 }));
        test!(run_too_long_later: "yyyy-MMMMM" => Err(Error::RunTooLong { letter: 'M', length: 5, maximum: 4, position: 5 }));
        test!(unterminated_quote: "yyyy 'o"    => Err(Error::UnterminatedQuote { position: 5 }));
    }
}
