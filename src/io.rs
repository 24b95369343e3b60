//! Deferred, re-computable effects.
//!
//! An [`IO`] wraps a zero-argument producer. Building a pipeline with `map`
//! and `flat_map` runs nothing; the work happens in [`IO::extract`], and it
//! happens again on every call. Nothing is memoized.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use unnulable::IO;
//!
//! let runs = Cell::new(0);
//! let io = IO::new(|| {
//!     runs.set(runs.get() + 1);
//!     20
//! })
//! .map(|n| n + 1)
//! .flat_map(|n| IO::of(n * 2));
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(io.extract(), 42);
//! assert_eq!(io.extract(), 42);
//! assert_eq!(runs.get(), 2);
//! ```
//!
//! # Sharing
//!
//! Producers live behind an `Rc`, so cloning an `IO` or deriving a new one
//! with `map` reuses the same producer instead of copying it. `IO` is
//! single-threaded and not `Send`.

use std::fmt;
use std::rc::Rc;

use crate::maybe::{Maybe, Nullable};

/// A deferred computation producing a `T` each time it is extracted.
///
/// The lifetime `'a` bounds whatever the producer borrows.
pub struct IO<'a, T> {
    effect: Rc<dyn Fn() -> T + 'a>,
}

impl<'a, T: 'a> IO<'a, T> {
    /// Wrap a producer.
    #[inline]
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        IO {
            effect: Rc::new(effect),
        }
    }

    /// A producer that returns (a clone of) `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::IO;
    ///
    /// let io = IO::of(vec![1, 2, 3]);
    /// assert_eq!(io.extract(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        IO::new(move || value.clone())
    }

    /// Compose `f` after the producer. Nothing runs until extraction.
    #[inline]
    pub fn map<R, F>(self, f: F) -> IO<'a, R>
    where
        F: Fn(T) -> R + 'a,
        R: 'a,
    {
        let effect = self.effect;
        IO::new(move || f(effect()))
    }

    /// Compose a producer-returning `f` after the producer.
    ///
    /// The resulting producer runs the original, hands its result to `f`,
    /// then extracts the `IO` that `f` returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::IO;
    ///
    /// let io = IO::of("hello").flat_map(|s| IO::of(s.to_uppercase()));
    /// assert_eq!(io.extract(), "HELLO");
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> IO<'a, R>
    where
        F: Fn(T) -> IO<'a, R> + 'a,
        R: 'a,
    {
        let effect = self.effect;
        IO::new(move || f(effect()).extract())
    }

    /// Run the producer chain and return its result.
    #[inline]
    pub fn extract(&self) -> T {
        (self.effect)()
    }

    /// Alias for [`IO::extract`].
    #[inline]
    pub fn unwrap(&self) -> T {
        self.extract()
    }

    /// Extract, then map an absent result to [`Maybe::Absent`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::{Maybe, IO};
    ///
    /// assert_eq!(IO::of(Some(1)).to_maybe(), Maybe::Present(1));
    /// assert_eq!(IO::of(None::<i32>).to_maybe(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn to_maybe(&self) -> Maybe<T::Value>
    where
        T: Nullable,
    {
        Maybe::from_nullable(self.extract())
    }
}

impl<T> Clone for IO<'_, T> {
    fn clone(&self) -> Self {
        IO {
            effect: Rc::clone(&self.effect),
        }
    }
}

impl<T> fmt::Debug for IO<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IO")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
