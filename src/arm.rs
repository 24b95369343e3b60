//! Value-or-handler branches for `match_with`.
//!
//! Every container in this crate can be matched with one [`Arm`] per variant.
//! An arm is either a constant that is returned as is, or a handler that
//! receives the variant's payload.
//!
//! ```rust
//! use unnulable::{Arm, Maybe};
//!
//! let greeting = Maybe::some("Ada").match_with(
//!     Arm::handler(|name: &str| format!("Hello, {}", name)),
//!     Arm::value("Hello, stranger".to_string()),
//! );
//! assert_eq!(greeting, "Hello, Ada");
//! ```

use std::fmt;

/// One branch of a `match_with` call.
///
/// `A` is the payload handed to a handler, `R` the result of the branch.
/// Branches for payload-less variants use `A = ()`.
pub enum Arm<'a, A, R> {
    /// Return this value, ignoring the payload.
    Value(R),
    /// Call this function with the payload.
    Handler(Box<dyn FnOnce(A) -> R + 'a>),
}

impl<'a, A, R> Arm<'a, A, R> {
    /// A branch that always yields `value`.
    #[inline]
    pub fn value(value: R) -> Self {
        Arm::Value(value)
    }

    /// A branch that computes its result from the payload.
    #[inline]
    pub fn handler<F>(f: F) -> Self
    where
        F: FnOnce(A) -> R + 'a,
    {
        Arm::Handler(Box::new(f))
    }

    /// Run the branch against `input`.
    ///
    /// A `Value` arm drops the input without looking at it.
    #[inline]
    pub fn resolve(self, input: A) -> R {
        match self {
            Arm::Value(value) => value,
            Arm::Handler(f) => f(input),
        }
    }

    /// Returns `true` if this arm is a constant.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Arm::Value(_))
    }
}

impl<A, R: fmt::Debug> fmt::Debug for Arm<'_, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arm::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Arm::Handler(_) => f.write_str("Handler(<fn>)"),
        }
    }
}
