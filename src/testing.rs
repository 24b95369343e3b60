//! Testing utilities for code built on this crate.
//!
//! Assertion macros that check a container's variant and hand back its
//! payload, plus `proptest` strategies for [`Maybe`](crate::Maybe) and
//! [`Either`](crate::Either) behind the `proptest` feature.
//!
//! # Assertion Macros
//!
//! ```rust
//! use unnulable::{assert_absent, assert_error, assert_ok, assert_present, Either, Maybe};
//!
//! let n = assert_present!(Maybe::some(42));
//! assert_eq!(n, 42);
//! assert_absent!(Maybe::<i32>::none());
//!
//! let v = assert_ok!(Either::<_, String>::ok("v"));
//! assert_eq!(v, "v");
//! let e = assert_error!(Either::<i32, _>::error("boom"));
//! assert_eq!(e, "boom");
//! ```

/// Assert that a `Maybe` is `Present`, evaluating to its value.
///
/// # Example
///
/// ```rust
/// use unnulable::{assert_present, Maybe};
///
/// let name = assert_present!(Maybe::from_nullable(Some("Ada")));
/// assert_eq!(name, "Ada");
/// ```
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(value) => value,
            $crate::Maybe::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that a `Maybe` is `Absent`.
#[macro_export]
macro_rules! assert_absent {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Absent => {}
            $crate::Maybe::Present(value) => {
                panic!("Expected Absent, got Present: {:?}", value);
            }
        }
    };
}

/// Assert that an `Either` is `Ok`, evaluating to its value.
///
/// # Example
///
/// ```rust
/// use unnulable::{assert_ok, Either};
///
/// let n = assert_ok!(Either::<_, String>::ok(1).map(|n| n + 1));
/// assert_eq!(n, 2);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($either:expr) => {
        match $either {
            $crate::Either::Ok(value) => value,
            $crate::Either::Error(e) => {
                panic!("Expected Ok, got Error: {:?}", e);
            }
        }
    };
}

/// Assert that an `Either` is `Error`, evaluating to the error.
///
/// # Example
///
/// ```rust
/// use unnulable::{assert_error, Either};
///
/// let e = assert_error!(Either::from_nullable(None::<i32>, "E").map_error(str::len));
/// assert_eq!(e, 1);
/// ```
#[macro_export]
macro_rules! assert_error {
    ($either:expr) => {
        match $either {
            $crate::Either::Error(e) => e,
            $crate::Either::Ok(value) => {
                panic!("Expected Error, got Ok: {:?}", value);
            }
        }
    };
}

/// Assert that a branded constructor rejects a value with the given message.
///
/// # Example
///
/// ```rust
/// use unnulable::assert_rejected;
/// use unnulable::brand::number;
///
/// assert_rejected!(
///     number::integer().construct(2.5),
///     "Expected an integer. Instead got 2.5"
/// );
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr, $message:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!($crate::error::ValidationError::message(&e), $message);
            }
            ::core::result::Result::Ok(value) => {
                panic!(
                    "Expected rejection with {:?}, got accepted value: {:?}",
                    $message, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Either, Maybe};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(()).prop_map(|()| Maybe::Absent),
            3 => any_with::<T>(args).prop_map(Maybe::Present),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<O, E> Arbitrary for Either<O, E>
where
    O: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (O::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (ok_params, error_params) = args;
        prop_oneof![
            any_with::<O>(ok_params).prop_map(Either::Ok),
            any_with::<E>(error_params).prop_map(Either::Error),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::brand::string;
    use crate::{Either, Maybe};

    #[test]
    fn assert_present_macro() {
        let value = assert_present!(Maybe::some(vec![1, 2]));
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn assert_absent_macro() {
        assert_absent!(Maybe::<String>::none());
    }

    #[test]
    fn assert_ok_macro() {
        assert_eq!(assert_ok!(Either::<_, ()>::ok(3)), 3);
    }

    #[test]
    fn assert_error_macro() {
        assert_eq!(assert_error!(Either::<(), _>::error("nope")), "nope");
    }

    #[test]
    fn assert_rejected_macro() {
        assert_rejected!(
            string::not_empty::<&str>().construct(""),
            "Expected a non-empty string."
        );
    }

    #[test]
    #[should_panic(expected = "Expected Present, got Absent")]
    fn assert_present_panics_on_absent() {
        let _ = assert_present!(Maybe::<i32>::none());
    }

    #[test]
    #[should_panic(expected = "Expected Absent, got Present")]
    fn assert_absent_panics_on_present() {
        assert_absent!(Maybe::some(1));
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Error")]
    fn assert_ok_panics_on_error() {
        let _ = assert_ok!(Either::<i32, _>::error("boom"));
    }

    #[test]
    #[should_panic(expected = "Expected Error, got Ok")]
    fn assert_error_panics_on_ok() {
        let _ = assert_error!(Either::<_, String>::ok(1));
    }

    #[test]
    #[should_panic(expected = "Expected rejection")]
    fn assert_rejected_panics_on_accept() {
        assert_rejected!(string::not_empty::<&str>().construct("x"), "anything");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn maybe_arbitrary_generates_valid_instances(m in any::<Maybe<i32>>()) {
                match m {
                    Maybe::Present(_) => prop_assert!(m.is_present()),
                    Maybe::Absent => prop_assert!(m.is_empty()),
                }
            }

            #[test]
            fn either_arbitrary_generates_valid_instances(e in any::<Either<i32, String>>()) {
                match e {
                    Either::Ok(_) => prop_assert!(e.is_ok()),
                    Either::Error(_) => prop_assert!(e.is_error()),
                }
            }

            #[test]
            fn arbitrary_composes_with_owned_payloads(
                m in any::<Maybe<String>>(),
                e in any::<Either<Vec<u8>, Maybe<bool>>>(),
            ) {
                prop_assert_eq!(m.clone().into_option().is_some(), m.is_present());
                prop_assert_eq!(e.clone().into_result().is_ok(), e.is_ok());
            }
        }
    }
}
