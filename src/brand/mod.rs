//! Branded types: validated values tagged with a nominal brand.
//!
//! A brand is a zero-sized marker type. A [`Constructor<T, B>`] checks a `T`
//! against an ordered list of rules and, if every rule accepts it, returns a
//! [`Branded<T, B>`]: the same `T`, now carrying the marker `B` in its type.
//! Nothing is attached at runtime; the marker only lets the compiler tell a
//! checked `f64` apart from any other `f64`.
//!
//! # Building constructors
//!
//! - [`create`]: no rules at all, for brands that only need a distinct type
//! - [`define`] / [`define_with`]: one predicate with a fixed or computed message
//! - [`combine`] / [`combine!`](crate::combine): the rules of several
//!   constructors, run left to right, stopping at the first rejection
//!
//! ```rust
//! use unnulable::brand::{self, Constructor};
//!
//! #[derive(Debug)]
//! struct Email;
//! #[derive(Debug)]
//! struct InternalEmail;
//! #[derive(Debug)]
//! struct StaffEmail;
//!
//! let email: Constructor<String, Email> = brand::define_with(
//!     |s: &String| s.contains('@') && s.contains(".com"),
//!     |s: &String| format!("Expected an email. Instead got: {}", s),
//! );
//! let internal: Constructor<String, InternalEmail> = brand::define(
//!     |s: &String| s.ends_with("@my-company.com"),
//!     "Expected an internal email.",
//! );
//! let staff: Constructor<String, StaffEmail> = unnulable::combine!(email, internal);
//!
//! let address = staff.construct("ada@my-company.com".to_string()).unwrap();
//! assert_eq!(address.as_str(), "ada@my-company.com");
//!
//! let err = staff.construct("ada.example".to_string()).unwrap_err();
//! assert_eq!(err.message(), "Expected an email. Instead got: ada.example");
//! ```
//!
//! # Out of the box
//!
//! [`number`], [`string`] and [`nullable`] hold ready-made constructors built
//! from the same three functions.

pub mod nullable;
pub mod number;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod string;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::ValidationError;

/// A brand marker that knows how to build its own constructor.
///
/// Every fixed-parameter brand in the catalog implements this, which enables
/// [`Branded::new`], [`Branded::try_map`] and, with the `serde` feature,
/// validating deserialization.
///
/// # Example
///
/// ```rust
/// use unnulable::brand::{number::Digit, Branded};
///
/// let seven = Branded::<f64, Digit>::new(7.0).unwrap();
/// assert_eq!(*seven, 7.0);
/// assert!(Branded::<f64, Digit>::new(10.0).is_err());
/// ```
pub trait Brand<T>: Sized {
    /// The constructor that validates values for this brand.
    fn constructor() -> Constructor<T, Self>;
}

/// A `T` that passed the rules of a `Constructor<T, B>`.
///
/// `Branded<T, B>` has the same memory layout as `T`; the marker is
/// `PhantomData`. It can only be obtained from a constructor, so holding one
/// means the value was accepted at construction time.
pub struct Branded<T, B> {
    value: T,
    _brand: PhantomData<B>,
}

impl<T, B> Branded<T, B> {
    #[inline]
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _brand: PhantomData,
        }
    }

    /// Validate `value` with the brand's own constructor.
    pub fn new(value: T) -> Result<Self, ValidationError>
    where
        B: Brand<T>,
    {
        B::constructor().construct(value)
    }

    /// Get a reference to the inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the branded value, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Map the inner value, re-validating the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::brand::{number::Positive, Branded};
    ///
    /// let n = Branded::<f64, Positive>::new(2.0).unwrap();
    /// assert_eq!(*n.clone().try_map(|x| x * 2.0).unwrap(), 4.0);
    /// assert!(n.try_map(|x| -x).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, ValidationError>
    where
        F: FnOnce(T) -> T,
        B: Brand<T>,
    {
        Self::new(f(self.value))
    }
}

impl<T: fmt::Debug, B> fmt::Debug for Branded<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branded")
            .field("value", &self.value)
            .field("brand", &short_name::<B>())
            .finish()
    }
}

impl<T: Clone, B> Clone for Branded<T, B> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<T: PartialEq, B> PartialEq for Branded<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, B> Eq for Branded<T, B> {}

impl<T: PartialOrd, B> PartialOrd for Branded<T, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, B> Ord for Branded<T, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, B> Hash for Branded<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, B> AsRef<T> for Branded<T, B> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, B> std::ops::Deref for Branded<T, B> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, B> fmt::Display for Branded<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

enum Message<T> {
    Fixed(Rc<str>),
    Computed(Rc<dyn Fn(&T) -> String>),
}

impl<T> Clone for Message<T> {
    fn clone(&self) -> Self {
        match self {
            Message::Fixed(text) => Message::Fixed(Rc::clone(text)),
            Message::Computed(f) => Message::Computed(Rc::clone(f)),
        }
    }
}

/// One predicate of a constructor, with the message reported on rejection.
pub struct Rule<T> {
    brand: &'static str,
    predicate: Rc<dyn Fn(&T) -> bool>,
    message: Message<T>,
}

impl<T> Rule<T> {
    /// Short name of the brand this rule was defined for.
    pub fn brand(&self) -> &'static str {
        self.brand
    }

    /// Check `value`, building the rejection message if it fails.
    pub fn check(&self, value: &T) -> Result<(), ValidationError> {
        if (self.predicate)(value) {
            return Ok(());
        }

        let message = match &self.message {
            Message::Fixed(text) => text.to_string(),
            Message::Computed(f) => f(value),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(brand = self.brand, %message, "branded value rejected");

        Err(ValidationError::new(self.brand, message))
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            brand: self.brand,
            predicate: Rc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("brand", &self.brand)
            .finish_non_exhaustive()
    }
}

/// Anything that contributes rules to [`combine`].
///
/// Implemented by every [`Constructor`], whatever its brand, so that
/// constructors of different brands can sit in one slice.
pub trait Validate<T> {
    /// The rules, in the order they run.
    fn rules(&self) -> &[Rule<T>];
}

/// Validates a `T` and brands it as `B`.
///
/// Cloning is cheap: the rules are shared.
pub struct Constructor<T, B> {
    rules: Rc<[Rule<T>]>,
    _brand: PhantomData<B>,
}

impl<T, B> Constructor<T, B> {
    fn from_rules(rules: Vec<Rule<T>>) -> Self {
        Self {
            rules: Rc::from(rules),
            _brand: PhantomData,
        }
    }

    /// Run every rule against `value`, stopping at the first rejection.
    pub fn check(&self, value: &T) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }

    /// Returns `true` if every rule accepts `value`.
    pub fn accepts(&self, value: &T) -> bool {
        self.rules.iter().all(|rule| (rule.predicate)(value))
    }

    /// Validate `value` and brand it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unnulable::brand::number;
    ///
    /// let digit = number::digit();
    /// assert_eq!(*digit.construct(4.0).unwrap(), 4.0);
    /// assert!(digit.construct(4.5).is_err());
    /// ```
    pub fn construct(&self, value: T) -> Result<Branded<T, B>, ValidationError> {
        self.check(&value)?;
        Ok(Branded::new_unchecked(value))
    }
}

impl<T, B> Validate<T> for Constructor<T, B> {
    fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

impl<T, B> Clone for Constructor<T, B> {
    fn clone(&self) -> Self {
        Self {
            rules: Rc::clone(&self.rules),
            _brand: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for Constructor<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("brand", &short_name::<B>())
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// A constructor with no rules: every value is accepted.
///
/// ```rust
/// use unnulable::brand::{self, Constructor};
///
/// struct UserId;
///
/// let user_id: Constructor<u64, UserId> = brand::create();
/// assert_eq!(*user_id.construct(7).unwrap(), 7);
/// ```
pub fn create<T, B>() -> Constructor<T, B> {
    Constructor::from_rules(Vec::new())
}

/// A constructor with one rule and a fixed rejection message.
pub fn define<T, B, P, M>(predicate: P, message: M) -> Constructor<T, B>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
    M: Into<String>,
{
    let text: String = message.into();
    Constructor::from_rules(vec![Rule {
        brand: short_name::<B>(),
        predicate: Rc::new(predicate),
        message: Message::Fixed(Rc::from(text)),
    }])
}

/// A constructor with one rule whose message is computed from the rejected value.
pub fn define_with<T, B, P, M>(predicate: P, message: M) -> Constructor<T, B>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
    M: Fn(&T) -> String + 'static,
{
    Constructor::from_rules(vec![Rule {
        brand: short_name::<B>(),
        predicate: Rc::new(predicate),
        message: Message::Computed(Rc::new(message)),
    }])
}

/// Concatenate the rules of `constructors`, in order, under a new brand.
///
/// The combined constructor accepts a value only if every constituent does,
/// and reports the first rejection in left-to-right order; later rules do not
/// run. [`combine!`](crate::combine) builds the slice for you.
pub fn combine<T, B>(constructors: &[&dyn Validate<T>]) -> Constructor<T, B> {
    let rules = constructors
        .iter()
        .flat_map(|constructor| constructor.rules().iter().cloned())
        .collect();
    Constructor::from_rules(rules)
}

/// Combine constructors of any brands into one constructor.
///
/// Expands to [`brand::combine`](crate::brand::combine) over the given
/// constructors. The result's brand comes from type inference.
///
/// ```rust
/// use unnulable::brand::{number, Constructor};
///
/// struct PositiveInteger;
///
/// let positive_integer: Constructor<f64, PositiveInteger> =
///     unnulable::combine!(number::positive(), number::integer());
///
/// assert!(positive_integer.accepts(&3.0));
/// assert!(!positive_integer.accepts(&-3.0));
/// assert!(!positive_integer.accepts(&3.5));
/// ```
#[macro_export]
macro_rules! combine {
    ($($constructor:expr),+ $(,)?) => {
        $crate::brand::combine(&[$(&$constructor as &dyn $crate::brand::Validate<_>),+])
    };
}

pub(crate) fn short_name<B: ?Sized>() -> &'static str {
    let full = std::any::type_name::<B>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
