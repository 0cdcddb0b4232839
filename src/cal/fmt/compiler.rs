//! The compiler registry: one field renderer per pattern letter.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;


/// A **compiler** is a stateless renderer bound to a single pattern
/// letter. It declares the longest run of that letter it understands,
/// and turns a value and a run length into text.
///
/// Compilers are built once, shared behind `Arc`s, and never mutated, so
/// any number of formatters can hold the same compiler at the same time.
pub trait Compiler<T>: Send + Sync {

    /// The pattern letter this compiler answers to.
    fn letter(&self) -> char;

    /// The longest run of the letter that still selects a rendering.
    /// Runs past this length are rejected when the pattern is compiled,
    /// never at formatting time.
    fn max_run(&self) -> usize;

    /// Renders the field onto the end of the buffer. The run length has
    /// already been checked against `max_run`, so this cannot fail.
    fn render(&self, value: &T, length: usize, buf: &mut String);
}


/// A **registry** maps each claimed pattern letter to its compiler, for
/// one temporal type. Composite types build their registries out of
/// narrower ones by adopting their compilers through a projection.
pub struct Registry<T: 'static> {
    compilers: HashMap<char, Arc<dyn Compiler<T>>>,
}

impl<T: 'static> Registry<T> {

    /// Creates a new, empty registry that claims no letters at all.
    pub fn new() -> Self {
        Self { compilers: HashMap::new() }
    }

    /// Adds a compiler to the registry under the letter it claims.
    ///
    /// Two compilers claiming the same letter is a mistake in whatever
    /// assembled the registry, not bad user input, so this panics rather
    /// than returning an error.
    pub fn insert<C>(&mut self, compiler: C)
    where C: Compiler<T> + 'static {
        self.insert_shared(Arc::new(compiler));
    }

    fn insert_shared(&mut self, compiler: Arc<dyn Compiler<T>>) {
        let letter = compiler.letter();
        let previous = self.compilers.insert(letter, compiler);
        assert!(previous.is_none(), "two compilers claim the pattern letter {:?}", letter);
    }

    /// Looks up the compiler for a letter, or `None` if no compiler
    /// claims it.
    pub fn lookup(&self, letter: char) -> Option<&Arc<dyn Compiler<T>>> {
        self.compilers.get(&letter)
    }

    /// Adopts every compiler of a narrower registry, wrapping each one in
    /// a delegate that projects a value of this registry’s type down to
    /// the narrower type before rendering.
    ///
    /// This is how a date-time registry gets to reuse the date and time
    /// compilers unchanged, and panics just like `insert` if an adopted
    /// letter is already claimed.
    pub fn adopt<S>(&mut self, base: &Registry<S>, project: fn(&T) -> S)
    where S: 'static {
        for compiler in base.compilers.values() {
            self.insert_shared(Arc::new(Delegate { inner: Arc::clone(compiler), project }));
        }
    }
}

impl<T: 'static> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut letters: Vec<char> = self.compilers.keys().cloned().collect();
        letters.sort();
        write!(f, "Registry({:?})", letters.into_iter().collect::<String>())
    }
}


/// The adapter behind `Registry::adopt`: a compiler over the wider type
/// that narrows the value with a pure projection, then hands over to the
/// compiler it wraps.
struct Delegate<T, S: 'static> {
    inner: Arc<dyn Compiler<S>>,
    project: fn(&T) -> S,
}

impl<T, S: 'static> Compiler<T> for Delegate<T, S> {
    fn letter(&self) -> char {
        self.inner.letter()
    }

    fn max_run(&self) -> usize {
        self.inner.max_run()
    }

    fn render(&self, value: &T, length: usize, buf: &mut String) {
        self.inner.render(&(self.project)(value), length, buf);
    }
}


#[cfg(test)]
mod test {
    use super::{Compiler, Registry};

    struct Doubler;

    impl Compiler<i64> for Doubler {
        fn letter(&self) -> char { 'n' }
        fn max_run(&self) -> usize { 2 }
        fn render(&self, value: &i64, _length: usize, buf: &mut String) {
            buf.push_str(&(value * 2).to_string());
        }
    }

    #[test]
    fn lookup_hit_and_miss() {
        let mut registry = Registry::new();
        registry.insert(Doubler);

        assert!(registry.lookup('n').is_some());
        assert!(registry.lookup('m').is_none());
    }

    #[test]
    #[should_panic]
    fn duplicate_letter() {
        let mut registry = Registry::new();
        registry.insert(Doubler);
        registry.insert(Doubler);
    }

    #[test]
    fn adoption_projects_the_value() {
        let mut base = Registry::new();
        base.insert(Doubler);

        let mut merged: Registry<(i64, i64)> = Registry::new();
        merged.adopt(&base, |pair: &(i64, i64)| pair.1);

        let mut buf = String::new();
        merged.lookup('n').unwrap().render(&(1, 21), 1, &mut buf);
        assert_eq!(buf, "42");
    }
}
