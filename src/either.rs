//! A success-or-failure sum type.
//!
//! `Either<O, E>` holds exactly one of an `Ok(O)` success value or an
//! `Error(E)` failure value. It lets domain code carry failure as data: every
//! operation is total, and only the designated boundary
//! [`Either::from_throwable`] turns an abrupt failure (a panic) into a value.
//!
//! # Either vs Result
//!
//! `Either` converts losslessly to and from `Result`, so `?` is always one
//! `into_result()` away. It adds the operations `Result` lacks or names
//! differently: `swap`, `recover` with a plain value, `tap`/`tap_error`, and
//! `match_with` with constant or handler arms.
//!
//! # Ok-Biased Convention
//!
//! `map` and `flat_map` operate on the `Ok` side; `map_error` and `tap_error`
//! are the `Error`-side counterparts.
//!
//! # Examples
//!
//! ```rust
//! use unnulable::Either;
//!
//! fn parse_port(raw: &str) -> Either<u16, String> {
//!     Either::from(raw.parse::<u16>()).map_error(|e| e.to_string())
//! }
//!
//! let port = parse_port("8080").recover(80);
//! assert_eq!(port, Either::Ok(8080));
//!
//! let fallback = parse_port("http").recover(80);
//! assert_eq!(fallback, Either::Ok(80));
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::error::Fault;
use crate::maybe::{Maybe, Nullable};
use crate::Arm;

/// A value that is either `Ok(O)` or `Error(E)`.
///
/// # Example
///
/// ```rust
/// use unnulable::Either;
///
/// let ok: Either<i32, &str> = Either::ok(21);
/// let err: Either<i32, &str> = Either::error("boom");
///
/// assert_eq!(ok.map(|x| x * 2), Either::Ok(42));
/// assert_eq!(err.map(|x| x * 2), Either::Error("boom"));
///
/// let length = err.map_error(str::len);
/// assert_eq!(length, Either::Error(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<O, E> {
    /// The success variant
    Ok(O),
    /// The failure variant
    Error(E),
}

impl<O, E> Either<O, E> {
    // ========== Constructors ==========

    /// Create an `Ok` value.
    #[inline]
    pub fn ok(value: O) -> Self {
        Either::Ok(value)
    }

    /// Create an `Error` value.
    #[inline]
    pub fn error(error: E) -> Self {
        Either::Error(error)
    }

    /// `Ok` with the value, or `Error(default_error)` if it is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::Either;
    ///
    /// assert_eq!(Either::from_nullable(Some(1), "E"), Either::Ok(1));
    /// assert_eq!(Either::from_nullable(None::<i32>, "E"), Either::Error("E"));
    /// ```
    #[inline]
    pub fn from_nullable<N>(value: N, default_error: E) -> Self
    where
        N: Nullable<Value = O>,
    {
        match value.into_maybe() {
            Maybe::Present(value) => Either::Ok(value),
            Maybe::Absent => Either::Error(default_error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Either::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Either::Error(_))
    }

    // ========== Transformations ==========

    /// Transform the `Ok` value, passing errors through unchanged.
    #[inline]
    pub fn map<O2, F>(self, f: F) -> Either<O2, E>
    where
        F: FnOnce(O) -> O2,
    {
        match self {
            Either::Ok(value) => Either::Ok(f(value)),
            Either::Error(error) => Either::Error(error),
        }
    }

    /// Transform the `Error` value, passing successes through unchanged.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Either<O, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Either::Ok(value) => Either::Ok(value),
            Either::Error(error) => Either::Error(f(error)),
        }
    }

    /// Chain a computation that may fail. `f` is never called on `Error`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::Either;
    ///
    /// let checked_half = |n: i32| {
    ///     if n % 2 == 0 { Either::ok(n / 2) } else { Either::error(format!("{} is odd", n)) }
    /// };
    ///
    /// assert_eq!(Either::ok(8).flat_map(checked_half), Either::Ok(4));
    /// assert_eq!(Either::ok(3).flat_map(checked_half), Either::Error("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<O2, F>(self, f: F) -> Either<O2, E>
    where
        F: FnOnce(O) -> Either<O2, E>,
    {
        match self {
            Either::Ok(value) => f(value),
            Either::Error(error) => Either::Error(error),
        }
    }

    /// Swap the roles of the two sides.
    #[inline]
    pub fn swap(self) -> Either<E, O> {
        match self {
            Either::Ok(value) => Either::Error(value),
            Either::Error(error) => Either::Ok(error),
        }
    }

    /// Replace an `Error` with `Ok(default)`, discarding the error.
    #[inline]
    pub fn recover(self, default: O) -> Self {
        match self {
            Either::Ok(value) => Either::Ok(value),
            Either::Error(_) => Either::Ok(default),
        }
    }

    /// Run `f` on the `Ok` value for its side effect, returning `self`.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&O),
    {
        if let Either::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the `Error` value for its side effect, returning `self`.
    #[inline]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Either::Error(error) = &self {
            f(error);
        }
        self
    }

    /// Alias for [`Either::tap`].
    #[inline]
    pub fn if_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&O),
    {
        self.tap(f)
    }

    /// Alias for [`Either::tap_error`].
    #[inline]
    pub fn if_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        self.tap_error(f)
    }

    // ========== Matching ==========

    /// Collapse into a single value, with one [`Arm`] per side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::{Arm, Either};
    ///
    /// let status = |e: Either<u16, String>| e.match_with(
    ///     Arm::value("up"),
    ///     Arm::handler(|_| "down"),
    /// );
    ///
    /// assert_eq!(status(Either::ok(200)), "up");
    /// assert_eq!(status(Either::error("timeout".to_string())), "down");
    /// ```
    #[inline]
    pub fn match_with<'a, R>(self, ok: Arm<'a, O, R>, error: Arm<'a, E, R>) -> R {
        match self {
            Either::Ok(value) => ok.resolve(value),
            Either::Error(err) => error.resolve(err),
        }
    }

    /// Collapse into a single value with two functions.
    #[inline]
    pub fn fold<R, F, G>(self, ok_fn: F, error_fn: G) -> R
    where
        F: FnOnce(O) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Either::Ok(value) => ok_fn(value),
            Either::Error(error) => error_fn(error),
        }
    }

    // ========== Extractors ==========

    /// Extract the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Error`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> O {
        match self {
            Either::Ok(value) => value,
            Either::Error(_) => panic!("called `Either::unwrap()` on an `Error` value"),
        }
    }

    /// Extract the `Error` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Either::Ok(_) => panic!("called `Either::unwrap_error()` on an `Ok` value"),
            Either::Error(error) => error,
        }
    }

    /// Convert to `Either<&O, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&O, &E> {
        match self {
            Either::Ok(value) => Either::Ok(value),
            Either::Error(error) => Either::Error(error),
        }
    }

    // ========== Conversions ==========

    /// `Ok(v)` becomes `Present(v)`; the error is discarded.
    #[inline]
    pub fn to_maybe(self) -> Maybe<O> {
        match self {
            Either::Ok(value) => Maybe::Present(value),
            Either::Error(_) => Maybe::Absent,
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<O, E> {
        match self {
            Either::Ok(value) => Ok(value),
            Either::Error(error) => Err(error),
        }
    }

    /// Convert from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<O, E>) -> Self {
        match result {
            Ok(value) => Either::Ok(value),
            Err(error) => Either::Error(error),
        }
    }
}

impl<O> Either<O, Fault> {
    /// Run `f`, turning a panic into `Error(Fault)`.
    ///
    /// This is the one place where an abrupt failure becomes a value. The
    /// panic hook still runs, so the usual panic message is printed.
    ///
    /// `f` is treated as unwind safe, so closures capturing `&mut` state or a
    /// `RefCell` are accepted. Anything `f` mutated before panicking is left
    /// as it was at the panic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::Either;
    ///
    /// let fine = Either::from_throwable(|| 2 + 2);
    /// assert_eq!(fine, Either::Ok(4));
    ///
    /// let broken = Either::<i32, _>::from_throwable(|| panic!("division by zero"));
    /// assert_eq!(broken.unwrap_error().message(), "division by zero");
    /// ```
    pub fn from_throwable<F>(f: F) -> Self
    where
        F: FnOnce() -> O,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Either::Ok(value),
            Err(payload) => Either::Error(Fault::from_panic(payload)),
        }
    }
}

impl<O, E> Either<Either<O, E>, E> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Either<O, E> {
        self.flat_map(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<O, E> From<Result<O, E>> for Either<O, E> {
    fn from(result: Result<O, E>) -> Self {
        Either::from_result(result)
    }
}

impl<O, E> From<Either<O, E>> for Result<O, E> {
    fn from(either: Either<O, E>) -> Self {
        either.into_result()
    }
}

impl<O, E> IntoIterator for Either<O, E> {
    type Item = O;
    type IntoIter = std::option::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_maybe().into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_constructors() {
        assert!(Either::<i32, &str>::ok(42).is_ok());
        assert!(Either::<i32, &str>::error("e").is_error());
    }

    #[test]
    fn test_predicates() {
        let ok: Either<i32, &str> = Either::ok(1);
        let err: Either<i32, &str> = Either::error("e");

        assert!(ok.is_ok());
        assert!(!ok.is_error());
        assert!(!err.is_ok());
        assert!(err.is_error());
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(Either::from_nullable(Some("v"), 0), Either::Ok("v"));
        assert_eq!(Either::from_nullable(None::<&str>, 0), Either::Error(0));
    }

    #[test]
    fn test_from_nullable_then_map_error() {
        let result = Either::from_nullable(None::<i32>, "E");
        assert!(result.is_error());

        let mapped = result.map_error(str::len);
        assert!(mapped.is_error());
        assert_eq!(mapped.unwrap_error(), 1);
    }

    #[test]
    fn test_map_skips_error() {
        let called = Cell::new(false);
        let result = Either::<i32, &str>::error("e").map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(result, Either::Error("e"));
        assert!(!called.get());
    }

    #[test]
    fn test_map_error_skips_ok() {
        let result = Either::<i32, &str>::ok(1).map_error(|e| e.len());
        assert_eq!(result, Either::Ok(1));
    }

    #[test]
    fn test_flat_map_short_circuits() {
        let called = Cell::new(false);
        let result = Either::<i32, &str>::error("first").flat_map(|x| {
            called.set(true);
            Either::ok(x)
        });
        assert_eq!(result, Either::Error("first"));
        assert!(!called.get());
    }

    #[test]
    fn test_flat_map_can_fail() {
        let result = Either::<i32, &str>::ok(1).flat_map(|_| Either::<i32, &str>::error("later"));
        assert_eq!(result, Either::Error("later"));
    }

    #[test]
    fn test_swap() {
        assert_eq!(Either::<i32, &str>::ok(1).swap(), Either::Error(1));
        assert_eq!(Either::<i32, &str>::error("e").swap(), Either::Ok("e"));
    }

    #[test]
    fn test_recover() {
        assert_eq!(Either::<i32, &str>::ok(1).recover(0), Either::Ok(1));
        assert_eq!(Either::<i32, &str>::error("e").recover(0), Either::Ok(0));
    }

    #[test]
    fn test_taps_fire_on_matching_side() {
        let log = RefCell::new(Vec::new());

        let ok = Either::<i32, i32>::ok(1)
            .tap(|v| log.borrow_mut().push(format!("ok {}", v)))
            .tap_error(|e| log.borrow_mut().push(format!("error {}", e)));
        let err = Either::<i32, i32>::error(2)
            .if_ok(|v| log.borrow_mut().push(format!("ok {}", v)))
            .if_error(|e| log.borrow_mut().push(format!("error {}", e)));

        assert_eq!(ok, Either::Ok(1));
        assert_eq!(err, Either::Error(2));
        assert_eq!(*log.borrow(), vec!["ok 1".to_string(), "error 2".to_string()]);
    }

    #[test]
    fn test_match_with_all_shapes() {
        let ok: Either<i32, &str> = Either::ok(2);
        let err: Either<i32, &str> = Either::error("bad");

        assert_eq!(ok.match_with(Arm::handler(|v: i32| v * 2), Arm::handler(|e: &str| e.len() as i32)), 4);
        assert_eq!(err.match_with(Arm::handler(|v: i32| v * 2), Arm::handler(|e: &str| e.len() as i32)), 3);
        assert_eq!(ok.match_with(Arm::value(0), Arm::handler(|_| 1)), 0);
        assert_eq!(err.match_with(Arm::handler(|_| 0), Arm::value(1)), 1);
        assert_eq!(err.match_with(Arm::value("ok"), Arm::value("error")), "error");
    }

    #[test]
    fn test_to_maybe() {
        assert_eq!(Either::<i32, &str>::ok(1).to_maybe(), Maybe::Present(1));
        assert_eq!(Either::<i32, &str>::error("e").to_maybe(), Maybe::Absent);
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Either::<i32, &str>::ok(1).unwrap(), 1);
        assert_eq!(Either::<i32, &str>::error("e").unwrap_error(), "e");
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap()` on an `Error` value")]
    fn test_unwrap_on_error_panics() {
        Either::<i32, &str>::error("e").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_error()` on an `Ok` value")]
    fn test_unwrap_error_on_ok_panics() {
        Either::<i32, &str>::ok(1).unwrap_error();
    }

    #[test]
    fn test_from_throwable() {
        assert_eq!(Either::from_throwable(|| "fine"), Either::Ok("fine"));

        let caught = Either::<i32, Fault>::from_throwable(|| panic!("boom"));
        assert_eq!(caught, Either::Error(Fault::new("boom")));
    }

    #[test]
    fn test_from_throwable_formatted_panic() {
        let code = 7;
        let caught = Either::<i32, Fault>::from_throwable(move || panic!("code {}", code));
        assert_eq!(caught.unwrap_error().message(), "code 7");
    }

    #[test]
    fn test_from_throwable_with_mutable_captures() {
        let mut attempts = 0;
        let caught = Either::<i32, Fault>::from_throwable(|| {
            attempts += 1;
            panic!("attempt {}", attempts)
        });
        assert_eq!(caught.unwrap_error().message(), "attempt 1");
        assert_eq!(attempts, 1);

        let log = std::cell::RefCell::new(Vec::new());
        let fine = Either::<usize, Fault>::from_throwable(|| {
            log.borrow_mut().push("ran");
            log.borrow().len()
        });
        assert_eq!(fine, Either::Ok(1));
    }

    #[test]
    fn test_result_round_trip() {
        let result: Result<i32, String> = Err("e".to_string());
        let either: Either<i32, String> = result.clone().into();
        assert_eq!(either, Either::Error("e".to_string()));
        assert_eq!(Result::from(either), result);
    }

    #[test]
    fn test_flatten() {
        let nested: Either<Either<i32, &str>, &str> = Either::ok(Either::ok(1));
        assert_eq!(nested.flatten(), Either::Ok(1));

        let inner_error: Either<Either<i32, &str>, &str> = Either::ok(Either::error("inner"));
        assert_eq!(inner_error.flatten(), Either::Error("inner"));
    }

    #[test]
    fn test_into_iter() {
        let values: Vec<i32> = Either::<i32, &str>::ok(1).into_iter().collect();
        assert_eq!(values, vec![1]);
        assert_eq!(Either::<i32, &str>::error("e").into_iter().count(), 0);
    }
}
