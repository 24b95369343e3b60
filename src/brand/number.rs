//! Ready-made brands for `f64`.
//!
//! Every constructor here rejects NaN. Infinities pass only the sign checks
//! ([`positive`], [`negative`], [`non_negative`]).

use super::{combine, define, define_with, Brand, Constructor};

/// Brand for finite numbers without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer;

/// Brand for finite numbers with a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Float;

/// Brand for numbers greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Positive;

/// Brand for numbers less than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Negative;

/// Brand for numbers greater than or equal to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonNegative;

/// Brand for the integers `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit;

/// Brand for numbers inside an inclusive range chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Between;

fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Accepts finite integral values.
///
/// ```rust
/// use unnulable::brand::number;
///
/// assert!(number::integer().accepts(&-4.0));
/// assert_eq!(
///     number::integer().construct(0.5).unwrap_err().message(),
///     "Expected an integer. Instead got 0.5"
/// );
/// ```
pub fn integer() -> Constructor<f64, Integer> {
    define_with(
        |n: &f64| is_integer(*n),
        |n: &f64| format!("Expected an integer. Instead got {}", n),
    )
}

/// Accepts finite values with a non-zero fractional part.
pub fn float() -> Constructor<f64, Float> {
    define_with(
        |n: &f64| n.is_finite() && !is_integer(*n),
        |n: &f64| format!("Expected a float. Instead got: {}", n),
    )
}

/// Accepts values strictly greater than zero.
pub fn positive() -> Constructor<f64, Positive> {
    define_with(
        |n: &f64| *n > 0.0,
        |n: &f64| format!("Expected a positive number. Instead got: {}", n),
    )
}

/// Accepts values strictly less than zero.
pub fn negative() -> Constructor<f64, Negative> {
    define_with(
        |n: &f64| *n < 0.0,
        |n: &f64| format!("Expected a negative number. Instead got: {}", n),
    )
}

/// Accepts zero and everything above it.
pub fn non_negative() -> Constructor<f64, NonNegative> {
    define_with(
        |n: &f64| *n >= 0.0,
        |n: &f64| format!("Expected a non-negative number. Instead got: {}", n),
    )
}

/// Accepts the integers `0..=9`.
///
/// Built from [`integer`] and [`between`], so a rejection reports whichever
/// of the two failed first.
pub fn digit() -> Constructor<f64, Digit> {
    combine(&[&integer(), &between(0.0, 9.0)])
}

/// Accepts values in `min..=max`.
///
/// The bounds must be finite with `min <= max`. Otherwise the constructor
/// rejects every input and says why.
///
/// ```rust
/// use unnulable::brand::number;
///
/// let percent = number::between(0.0, 100.0);
/// assert!(percent.accepts(&0.0));
/// assert!(percent.accepts(&100.0));
/// assert!(!percent.accepts(&100.5));
///
/// assert!(!number::between(5.0, 1.0).accepts(&3.0));
/// ```
pub fn between(min: f64, max: f64) -> Constructor<f64, Between> {
    if !(min.is_finite() && max.is_finite() && min <= max) {
        return define(
            |_: &f64| false,
            format!(
                "Expected finite bounds with min <= max. Instead got min: {}, max: {}",
                min, max
            ),
        );
    }

    define_with(
        move |n: &f64| min <= *n && *n <= max,
        move |n: &f64| {
            format!(
                "Expected a number between {} and {}. Instead got: {}",
                min, max, n
            )
        },
    )
}

impl Brand<f64> for Integer {
    fn constructor() -> Constructor<f64, Self> {
        integer()
    }
}

impl Brand<f64> for Float {
    fn constructor() -> Constructor<f64, Self> {
        float()
    }
}

impl Brand<f64> for Positive {
    fn constructor() -> Constructor<f64, Self> {
        positive()
    }
}

impl Brand<f64> for Negative {
    fn constructor() -> Constructor<f64, Self> {
        negative()
    }
}

impl Brand<f64> for NonNegative {
    fn constructor() -> Constructor<f64, Self> {
        non_negative()
    }
}

impl Brand<f64> for Digit {
    fn constructor() -> Constructor<f64, Self> {
        digit()
    }
}
