//! Error types
//!
//! The containers themselves never fail. Errors only come from the edges:
//! - [`ValidationError`]: a branded constructor rejected its input
//! - [`DataError`]: a tagged-union lookup, construction or match went wrong
//! - [`Fault`]: a panic caught by [`Either::from_throwable`](crate::Either::from_throwable)

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// A branded constructor rejected its input.
///
/// `brand` names the marker type whose rule failed, `message` is the rule's
/// fixed message or the one it computed from the rejected value.
///
/// # Example
///
/// ```rust
/// use unnulable::brand::number;
///
/// let err = number::positive().construct(-1.0).unwrap_err();
/// assert_eq!(err.message(), "Expected a positive number. Instead got: -1");
/// assert_eq!(err.brand(), "Positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    brand: &'static str,
    message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(brand: &'static str, message: impl Into<String>) -> Self {
        Self {
            brand,
            message: message.into(),
        }
    }

    /// Short name of the brand whose rule rejected the value.
    pub fn brand(&self) -> &'static str {
        self.brand
    }

    /// The rejection message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ValidationError {}

/// Errors raised by the tagged-union helpers in [`data`](crate::data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// `match_with` found no case for the variant and no default case.
    UnmatchedVariant {
        /// The variant that went unhandled
        variant: &'static str,
    },
    /// The family declares no variant with this name.
    UnknownVariant {
        /// The requested name
        variant: String,
    },
    /// `construct` was called on a variant declared with `EMPTY`.
    NotAConstructor {
        /// The payload-less variant
        variant: &'static str,
    },
    /// `value` was called on a variant that needs arguments.
    NotAValue {
        /// The builder variant
        variant: &'static str,
    },
    /// The arguments passed to `construct` are not what the builder takes.
    ArgumentMismatch {
        /// The variant being built
        variant: &'static str,
        /// Type name of the builder's argument
        expected: &'static str,
    },
    /// A case expected a payload of a different type, or the variant has none.
    PayloadMismatch {
        /// The variant being matched
        variant: &'static str,
        /// Type name the case asked for
        expected: &'static str,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::UnmatchedVariant { variant } => {
                write!(f, "Could not handle case with variant: {}", variant)
            }
            DataError::UnknownVariant { variant } => write!(f, "unknown variant: {}", variant),
            DataError::NotAConstructor { variant } => {
                write!(f, "variant {} carries no payload and is already a value", variant)
            }
            DataError::NotAValue { variant } => {
                write!(f, "variant {} must be constructed with arguments", variant)
            }
            DataError::ArgumentMismatch { variant, expected } => {
                write!(f, "variant {} expects arguments of type {}", variant, expected)
            }
            DataError::PayloadMismatch { variant, expected } => {
                write!(f, "variant {} does not hold a payload of type {}", variant, expected)
            }
        }
    }
}

impl StdError for DataError {}

/// A panic caught by [`Either::from_throwable`](crate::Either::from_throwable).
///
/// A string payload, which covers `panic!` with a literal or a format string,
/// becomes the message. Any other payload is kept and can be recovered with
/// [`Fault::payload`] or [`Fault::into_payload`]. Two faults are equal when
/// their messages are.
pub struct Fault {
    message: String,
    payload: Option<Box<dyn Any + Send>>,
}

impl Fault {
    /// Create a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            payload: None,
        }
    }

    /// Build a fault from a payload returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(message) => Self::new(*message),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => Self::new(*message),
                Err(payload) => Self {
                    message: "non-string panic payload".to_string(),
                    payload: Some(payload),
                },
            },
        }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original panic payload, when it was not a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::Either;
    ///
    /// let fault = Either::<(), _>::from_throwable(|| std::panic::panic_any(404_u16)).unwrap_error();
    /// assert_eq!(fault.payload().and_then(|p| p.downcast_ref::<u16>()), Some(&404));
    /// ```
    pub fn payload(&self) -> Option<&(dyn Any + Send)> {
        self.payload.as_deref()
    }

    /// Take the original panic payload, when it was not a string.
    pub fn into_payload(self) -> Option<Box<dyn Any + Send>> {
        self.payload
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Fault {}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for Fault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_accessors() {
        let err = ValidationError::new("Email", "Expected an email");
        assert_eq!(err.brand(), "Email");
        assert_eq!(err.message(), "Expected an email");
        assert_eq!(err.to_string(), "Expected an email");
    }

    #[test]
    fn test_unmatched_variant_display() {
        let err = DataError::UnmatchedVariant { variant: "Failure" };
        assert_eq!(err.to_string(), "Could not handle case with variant: Failure");
    }

    #[test]
    fn test_data_error_display() {
        let err = DataError::ArgumentMismatch {
            variant: "Success",
            expected: "(u32, &str)",
        };
        assert_eq!(
            err.to_string(),
            "variant Success expects arguments of type (u32, &str)"
        );
        assert_eq!(
            DataError::UnknownVariant {
                variant: "Nope".to_string()
            }
            .to_string(),
            "unknown variant: Nope"
        );
    }

    #[test]
    fn test_fault_from_str_payload() {
        let fault = Fault::from_panic(Box::new("boom"));
        assert_eq!(fault.message(), "boom");
        assert_eq!(fault.to_string(), "panicked: boom");
    }

    #[test]
    fn test_fault_from_string_payload() {
        let fault = Fault::from_panic(Box::new(format!("code {}", 7)));
        assert_eq!(fault.message(), "code 7");
    }

    #[test]
    fn test_fault_from_other_payload() {
        let fault = Fault::from_panic(Box::new(42_u8));
        assert_eq!(fault.message(), "non-string panic payload");
        assert_eq!(fault.payload().and_then(|p| p.downcast_ref::<u8>()), Some(&42));

        let payload = fault.into_payload().map(|p| p.downcast::<u8>());
        assert!(matches!(payload, Some(Ok(n)) if *n == 42));
    }

    #[test]
    fn test_fault_string_payload_is_consumed() {
        let fault = Fault::from_panic(Box::new("boom"));
        assert!(fault.payload().is_none());
        assert_eq!(fault, Fault::new("boom"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: StdError>(_: &E) {}
        assert_error(&ValidationError::new("X", "m"));
        assert_error(&DataError::UnmatchedVariant { variant: "X" });
        assert_error(&Fault::new("m"));
    }
}
