//! Ready-made brands for strings.
//!
//! The constructors are generic over `S: AsRef<str>`, so they brand `String`,
//! `&'static str`, `Box<str>` and friends alike. Lengths are counted in
//! Unicode scalar values, not bytes.

use super::{define, define_with, Brand, Constructor};

/// Brand for strings with at least one non-whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmpty;

/// Brand for strings whose length lies in an inclusive range chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Between;

/// Accepts strings that are not blank after trimming whitespace.
///
/// ```rust
/// use unnulable::brand::string;
///
/// let not_empty = string::not_empty::<&str>();
/// assert!(not_empty.accepts(&"a"));
/// assert!(!not_empty.accepts(&"   "));
/// ```
pub fn not_empty<S>() -> Constructor<S, NotEmpty>
where
    S: AsRef<str> + 'static,
{
    define(
        |s: &S| !s.as_ref().trim().is_empty(),
        "Expected a non-empty string.",
    )
}

/// Accepts strings of `min..=max` characters.
///
/// Both bounds must be non-negative integers. Otherwise the constructor
/// rejects every input and says why.
///
/// ```rust
/// use unnulable::brand::string;
///
/// let short = string::between::<String>(1.0, 3.0);
/// assert!(short.accepts(&"héé".to_string()));
/// assert!(!short.accepts(&"four".to_string()));
/// assert!(!string::between::<String>(1.5, 3.0).accepts(&"ab".to_string()));
/// ```
pub fn between<S>(min: f64, max: f64) -> Constructor<S, Between>
where
    S: AsRef<str> + 'static,
{
    let is_length = |bound: f64| bound.is_finite() && bound >= 0.0 && bound.fract() == 0.0;
    if !(is_length(min) && is_length(max)) {
        return define(
            |_: &S| false,
            format!(
                "Expected non-negative integer bounds. Instead got min: {}, max: {}",
                min, max
            ),
        );
    }

    define_with(
        move |s: &S| {
            let len = s.as_ref().chars().count() as f64;
            min <= len && len <= max
        },
        move |s: &S| {
            format!(
                "Expected a string with length between {} and {}. Instead got: {}",
                min,
                max,
                s.as_ref().chars().count()
            )
        },
    )
}

impl<S: AsRef<str> + 'static> Brand<S> for NotEmpty {
    fn constructor() -> Constructor<S, Self> {
        not_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        let c = not_empty::<String>();
        assert!(c.accepts(&"hello".to_string()));
        assert!(c.accepts(&"  x  ".to_string()));
        assert!(!c.accepts(&String::new()));
        assert!(!c.accepts(&" \t\n".to_string()));
    }

    #[test]
    fn test_not_empty_message() {
        let err = not_empty::<&str>().construct("").unwrap_err();
        assert_eq!(err.brand(), "NotEmpty");
        assert_eq!(err.message(), "Expected a non-empty string.");
    }

    #[test]
    fn test_not_empty_keeps_original_value() {
        let s = not_empty::<&str>().construct("  padded ").unwrap();
        assert_eq!(*s, "  padded ");
    }

    #[test]
    fn test_between_counts_chars() {
        let c = between::<&str>(2.0, 4.0);
        assert!(!c.accepts(&"a"));
        assert!(c.accepts(&"ab"));
        assert!(c.accepts(&"日本語"));
        assert!(c.accepts(&"abcd"));
        assert!(!c.accepts(&"abcde"));
    }

    #[test]
    fn test_between_message() {
        let err = between::<&str>(0.0, 2.0).construct("abc").unwrap_err();
        assert_eq!(err.brand(), "Between");
        assert_eq!(
            err.message(),
            "Expected a string with length between 0 and 2. Instead got: 3"
        );
    }

    #[test]
    fn test_between_invalid_bounds_reject_everything() {
        for c in [
            between::<&str>(-1.0, 3.0),
            between::<&str>(0.5, 3.0),
            between::<&str>(0.0, f64::INFINITY),
            between::<&str>(f64::NAN, 3.0),
        ] {
            assert!(!c.accepts(&""));
            assert!(!c.accepts(&"ab"));
        }
    }

    #[test]
    fn test_brand_trait() {
        use crate::brand::Branded;

        let name = Branded::<String, NotEmpty>::new("Ada".to_string()).unwrap();
        assert_eq!(name.len(), 3);
        assert!(Branded::<String, NotEmpty>::new(" ".to_string()).is_err());
    }
}
