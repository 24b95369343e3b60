//! An optional value that is either present or absent.
//!
//! `Maybe<T>` is the crate's replacement for null checks: a value is either
//! `Present(T)` or `Absent`, and every transformation skips the absent case
//! without calling the supplied function.
//!
//! # Maybe vs Option
//!
//! `Maybe` carries the same information as `Option` and converts to and from
//! it for free. It exists for the operations `Option` spells differently
//! (`get_with_default`, `to_either`, `match_with` with constant arms) and so
//! that `Maybe`, [`Either`](crate::Either) and [`IO`](crate::IO) share one
//! vocabulary.
//!
//! # Examples
//!
//! ```rust
//! use unnulable::Maybe;
//!
//! fn find_user(id: u32) -> Option<&'static str> {
//!     if id == 1 { Some("alice") } else { None }
//! }
//!
//! let name = Maybe::from_nullable(find_user(1))
//!     .map(|n| n.to_uppercase())
//!     .get_with_default("anonymous".to_string());
//! assert_eq!(name, "ALICE");
//!
//! let missing = Maybe::from_nullable(find_user(2))
//!     .map(|n| n.to_uppercase())
//!     .get_with_default("anonymous".to_string());
//! assert_eq!(missing, "anonymous");
//! ```

use crate::{Arm, Either};

/// A value that is either `Present(T)` or `Absent`.
///
/// `Present` never wraps an absence sentinel: build values from possibly-absent
/// sources with [`Maybe::from_nullable`], which maps `None` to `Absent`.
///
/// # Example
///
/// ```rust
/// use unnulable::Maybe;
///
/// let present = Maybe::some(21).map(|x| x * 2);
/// assert_eq!(present, Maybe::Present(42));
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert!(absent.map(|x| x * 2).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present
    Present(T),
    /// No value
    Absent,
}

/// A type that has an absence sentinel.
///
/// `from_nullable` style constructors accept any `Nullable` and map the
/// sentinel to [`Maybe::Absent`]. Rust's only such sentinel is `Option::None`.
pub trait Nullable {
    /// The type held when the value is not absent.
    type Value;

    /// Convert into a `Maybe`, mapping the sentinel to `Absent`.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> Nullable for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Wrap a value that is known to be there.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Present(value)
    }

    /// The absent value.
    #[inline]
    pub fn none() -> Self {
        Maybe::Absent
    }

    /// Build a `Maybe` from a possibly-absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::Present(3));
    /// assert_eq!(Maybe::from_nullable(None::<i32>), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        value.into_maybe()
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    // ========== Transformations ==========

    /// Transform the present value. `f` is never called on `Absent`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that may itself be absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    ///
    /// assert_eq!(Maybe::some(8).flat_map(half).flat_map(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).flat_map(half).flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) => {
                if predicate(&value) {
                    Maybe::Present(value)
                } else {
                    Maybe::Absent
                }
            }
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Run `f` on the present value for its side effect, returning `self`.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Alias for [`Maybe::tap`].
    #[inline]
    pub fn if_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.tap(f)
    }

    // ========== Matching ==========

    /// Collapse into a single value, with one [`Arm`] per variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::{Arm, Maybe};
    ///
    /// let describe = |m: Maybe<i32>| m.match_with(
    ///     Arm::handler(|n: i32| format!("got {}", n)),
    ///     Arm::value("nothing".to_string()),
    /// );
    ///
    /// assert_eq!(describe(Maybe::some(1)), "got 1");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<'a, R>(self, present: Arm<'a, T, R>, absent: Arm<'a, (), R>) -> R {
        match self {
            Maybe::Present(value) => present.resolve(value),
            Maybe::Absent => absent.resolve(()),
        }
    }

    /// Collapse into a single value with two functions.
    #[inline]
    pub fn fold<R, F, G>(self, present_fn: F, absent_fn: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Maybe::Present(value) => present_fn(value),
            Maybe::Absent => absent_fn(),
        }
    }

    // ========== Extractors ==========

    /// The present value, or `default`.
    #[inline]
    pub fn get_with_default(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// The present value, or the result of `f`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// The present value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Absent`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    // ========== Conversions ==========

    /// `Present(v)` becomes `Ok(v)`, `Absent` becomes `Error(error)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::some(1).to_either("missing"), Either::Ok(1));
    /// assert_eq!(Maybe::<i32>::none().to_either("missing"), Either::Error("missing"));
    /// ```
    #[inline]
    pub fn to_either<E>(self, error: E) -> Either<T, E> {
        match self {
            Maybe::Present(value) => Either::Ok(value),
            Maybe::Absent => Either::Error(error),
        }
    }

    /// Convert into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// Iterate over the present value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_from_nullable() {
        assert_eq!(Maybe::from_nullable(Some(1)), Maybe::Present(1));
        assert_eq!(Maybe::from_nullable(None::<i32>), Maybe::Absent);
        assert_eq!(Maybe::from_nullable(Maybe::some("x")), Maybe::Present("x"));
    }

    #[test]
    fn test_nested_option_is_present() {
        // Only the outer sentinel counts; an inner `None` is a real payload.
        let nested: Maybe<Option<i32>> = Maybe::from_nullable(Some(None));
        assert_eq!(nested, Maybe::Present(None));
    }

    #[test]
    fn test_predicates() {
        assert!(Maybe::some(1).is_present());
        assert!(!Maybe::some(1).is_empty());
        assert!(Maybe::<i32>::none().is_empty());
        assert!(!Maybe::<i32>::none().is_present());
    }

    #[test]
    fn test_map() {
        assert_eq!(Maybe::some("hello").map(str::len), Maybe::some(5));
    }

    #[test]
    fn test_map_skips_absent() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::none().map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(result, Maybe::none());
        assert!(!called.get());
    }

    #[test]
    fn test_flat_map() {
        let parse = |s: &str| Maybe::from_nullable(s.parse::<i32>().ok());
        assert_eq!(Maybe::some("42").flat_map(parse), Maybe::some(42));
        assert_eq!(Maybe::some("x").flat_map(parse), Maybe::none());
        assert_eq!(Maybe::<&str>::none().flat_map(parse), Maybe::none());
    }

    #[test]
    fn test_filter() {
        assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
        assert_eq!(Maybe::some(3).filter(|n| n % 2 == 0), Maybe::none());
    }

    #[test]
    fn test_filter_skips_absent() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::none().filter(|_| {
            called.set(true);
            true
        });
        assert!(result.is_empty());
        assert!(!called.get());
    }

    #[test]
    fn test_tap() {
        let seen = RefCell::new(Vec::new());
        let present = Maybe::some(1).tap(|n| seen.borrow_mut().push(*n));
        let absent = Maybe::<i32>::none().if_present(|n| seen.borrow_mut().push(*n));

        assert_eq!(present, Maybe::some(1));
        assert_eq!(absent, Maybe::none());
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_match_with_handler_and_value() {
        let present = Maybe::some(2).match_with(Arm::handler(|n: i32| n * 10), Arm::value(-1));
        let absent = Maybe::<i32>::none().match_with(Arm::handler(|n: i32| n * 10), Arm::value(-1));
        assert_eq!(present, 20);
        assert_eq!(absent, -1);
    }

    #[test]
    fn test_match_with_constant_present() {
        let result = Maybe::some(2).match_with(Arm::value("yes"), Arm::handler(|()| "no"));
        assert_eq!(result, "yes");
    }

    #[test]
    fn test_match_with_runs_one_branch() {
        let calls = Cell::new(0);
        let _ = Maybe::some(1).match_with(
            Arm::handler(|_| calls.set(calls.get() + 1)),
            Arm::handler(|()| calls.set(calls.get() + 10)),
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_fold() {
        assert_eq!(Maybe::some(3).fold(|n| n + 1, || 0), 4);
        assert_eq!(Maybe::<i32>::none().fold(|n| n + 1, || 0), 0);
    }

    #[test]
    fn test_get_with_default() {
        assert_eq!(Maybe::some(1).get_with_default(0), 1);
        assert_eq!(Maybe::none().get_with_default(0), 0);
        assert_eq!(Maybe::<i32>::none().unwrap_or_else(|| 7), 7);
    }

    #[test]
    fn test_to_either() {
        assert_eq!(Maybe::some(1).to_either("e"), Either::Ok(1));
        assert_eq!(Maybe::<i32>::none().to_either("e"), Either::Error("e"));
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Maybe::some("v").unwrap(), "v");
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
    fn test_unwrap_absent_panics() {
        Maybe::<i32>::none().unwrap();
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
        assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
        assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
    }

    #[test]
    fn test_option_round_trip() {
        let maybe: Maybe<i32> = Some(5).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(5));
    }

    #[test]
    fn test_iteration() {
        let values: Vec<i32> = Maybe::some(1).into_iter().chain(Maybe::none()).collect();
        assert_eq!(values, vec![1]);
        assert_eq!(Maybe::some(2).iter().count(), 1);
        assert_eq!((&Maybe::<i32>::none()).into_iter().count(), 0);
    }

    #[test]
    fn test_default_is_absent() {
        assert_eq!(Maybe::<String>::default(), Maybe::Absent);
    }
}
