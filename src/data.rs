//! Runtime tagged unions.
//!
//! A [`Data`] family is declared from a list of variant names. Each variant
//! either builds a payload from arguments ([`Variant::builder`]) or carries
//! no payload at all ([`EMPTY`]). Values of the family are [`Tagged`]: a
//! variant name plus its payload, immutable once built.
//!
//! Matching goes through [`Cases`], a set of handlers keyed by variant name
//! with an optional default. Exactly one handler runs per match.
//!
//! # Example
//!
//! ```rust
//! use unnulable::data::{Cases, Data, Variant, EMPTY};
//!
//! #[derive(Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let outcome = Data::new([
//!     (
//!         "Success",
//!         Variant::builder(|(id, name): (u32, String)| User { id, name }),
//!     ),
//!     ("Failure", Variant::from(EMPTY)),
//! ]);
//!
//! let success = outcome.construct("Success", (1_u32, "Ada".to_string())).unwrap();
//! let id = success
//!     .match_with(Cases::new().case("Success", |user: &User| user.id as i64).otherwise(|| -1))
//!     .unwrap();
//! assert_eq!(id, 1);
//!
//! let failure = outcome.value("Failure").unwrap();
//! let label = failure
//!     .match_with(Cases::new().case("Success", |user: &User| user.name.clone()).otherwise(|| "default".to_string()))
//!     .unwrap();
//! assert_eq!(label, "default");
//! ```
//!
//! Builder arguments are checked at runtime against the builder's argument
//! type, so integer literals need the exact type (`1_u32`, not `1`).

use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::DataError;
use crate::Arm;

// ========== No-payload token ==========

/// The "no payload" marker. Its only value is [`EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Empty {
    _private: (),
}

/// Declares a variant that carries no payload.
pub const EMPTY: Empty = Empty { _private: () };

// ========== Variants ==========

type Build = Rc<dyn Fn(Box<dyn Any>) -> Option<Rc<dyn Any>>>;

/// How one variant of a [`Data`] family is built.
pub struct Variant {
    kind: Kind,
}

enum Kind {
    Builder { build: Build, args: &'static str },
    Empty,
}

impl Variant {
    /// A variant whose payload is built from arguments of type `A`.
    ///
    /// Multi-argument builders take a tuple.
    pub fn builder<A, P, F>(f: F) -> Self
    where
        A: 'static,
        P: 'static,
        F: Fn(A) -> P + 'static,
    {
        let build: Build = Rc::new(move |args: Box<dyn Any>| {
            let args = args.downcast::<A>().ok()?;
            let payload: Rc<dyn Any> = Rc::new(f(*args));
            Some(payload)
        });
        Variant {
            kind: Kind::Builder {
                build,
                args: type_name::<A>(),
            },
        }
    }

    /// Returns `true` if this variant was declared with [`EMPTY`].
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, Kind::Empty)
    }
}

impl From<Empty> for Variant {
    fn from(_: Empty) -> Self {
        Variant { kind: Kind::Empty }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Builder { args, .. } => write!(f, "Builder({})", args),
            Kind::Empty => f.write_str("Empty"),
        }
    }
}

// ========== Family ==========

enum Slot {
    Builder { build: Build, args: &'static str },
    Value(Tagged),
}

/// A declared family of variants.
///
/// Payload-less variants are built once, when the family is declared, and
/// handed out as clones of that single value.
pub struct Data {
    slots: BTreeMap<&'static str, Slot>,
}

impl Data {
    /// Declare a family. A name given twice keeps its last declaration.
    pub fn new<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Variant)>,
    {
        let slots = variants
            .into_iter()
            .map(|(name, variant)| {
                let slot = match variant.kind {
                    Kind::Builder { build, args } => Slot::Builder { build, args },
                    Kind::Empty => Slot::Value(Tagged::unit(name)),
                };
                (name, slot)
            })
            .collect();
        Data { slots }
    }

    /// Look up a variant by name.
    pub fn entry(&self, name: &str) -> Result<Entry<'_>, DataError> {
        let (&variant, slot) = self
            .slots
            .get_key_value(name)
            .ok_or_else(|| DataError::UnknownVariant {
                variant: name.to_string(),
            })?;

        Ok(match slot {
            Slot::Builder { build, args } => Entry::Constructor(VariantBuilder {
                variant,
                build,
                args: *args,
            }),
            Slot::Value(tagged) => Entry::Value(tagged.clone()),
        })
    }

    /// Build a value of the builder variant `name` from `args`.
    pub fn construct<A: 'static>(&self, name: &str, args: A) -> Result<Tagged, DataError> {
        match self.entry(name)? {
            Entry::Constructor(builder) => builder.construct(args),
            Entry::Value(tagged) => Err(DataError::NotAConstructor {
                variant: tagged.variant(),
            }),
        }
    }

    /// The prebuilt value of the payload-less variant `name`.
    pub fn value(&self, name: &str) -> Result<Tagged, DataError> {
        match self.entry(name)? {
            Entry::Value(tagged) => Ok(tagged),
            Entry::Constructor(builder) => Err(DataError::NotAValue {
                variant: builder.variant(),
            }),
        }
    }

    /// Variant names, in sorted order.
    pub fn variants(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.keys().copied()
    }

    /// Returns `true` if the family declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("variants", &self.slots.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// What a variant name resolves to in a [`Data`] family.
#[derive(Debug)]
pub enum Entry<'a> {
    /// A builder variant: call it with arguments to get a value.
    Constructor(VariantBuilder<'a>),
    /// A payload-less variant: already a value.
    Value(Tagged),
}

/// Builds values of one builder variant.
pub struct VariantBuilder<'a> {
    variant: &'static str,
    build: &'a Build,
    args: &'static str,
}

impl VariantBuilder<'_> {
    /// The variant this builder tags its values with.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// Build the payload from `args` and tag it.
    pub fn construct<A: 'static>(&self, args: A) -> Result<Tagged, DataError> {
        let args: Box<dyn Any> = Box::new(args);
        let payload = (self.build)(args).ok_or(DataError::ArgumentMismatch {
            variant: self.variant,
            expected: self.args,
        })?;
        Ok(Tagged {
            variant: self.variant,
            payload: Payload::Value(payload),
        })
    }
}

impl fmt::Debug for VariantBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantBuilder")
            .field("variant", &self.variant)
            .field("args", &self.args)
            .finish()
    }
}

// ========== Values ==========

#[derive(Clone)]
enum Payload {
    Value(Rc<dyn Any>),
    Empty,
}

/// A value of a [`Data`] family: a variant name and its payload.
///
/// Cloning shares the payload.
#[derive(Clone)]
pub struct Tagged {
    variant: &'static str,
    payload: Payload,
}

impl Tagged {
    /// Tag `payload` with `variant` directly, without a family.
    pub fn new<P: 'static>(variant: &'static str, payload: P) -> Self {
        Tagged {
            variant,
            payload: Payload::Value(Rc::new(payload)),
        }
    }

    /// A payload-less value of `variant`.
    pub fn unit(variant: &'static str) -> Self {
        Tagged {
            variant,
            payload: Payload::Empty,
        }
    }

    /// The variant name.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// Returns `true` if this value is of variant `name`.
    pub fn is(&self, name: &str) -> bool {
        self.variant == name
    }

    /// Returns `true` unless the variant was declared with [`EMPTY`].
    pub fn has_payload(&self) -> bool {
        matches!(self.payload, Payload::Value(_))
    }

    /// Borrow the payload as a `P`, if that is what it holds.
    pub fn payload<P: 'static>(&self) -> Option<&P> {
        match &self.payload {
            Payload::Value(value) => value.downcast_ref::<P>(),
            Payload::Empty => None,
        }
    }

    /// Run the case for this value's variant.
    ///
    /// Falls back to the default case when no case names the variant, and
    /// fails with [`DataError::UnmatchedVariant`] when there is no default
    /// either. A payload case whose type does not match the payload fails
    /// with [`DataError::PayloadMismatch`] without falling back.
    ///
    /// ```rust
    /// use unnulable::data::{Cases, Tagged};
    /// use unnulable::error::DataError;
    ///
    /// let circle = Tagged::new("Circle", 2.0_f64);
    /// let area = circle
    ///     .match_with(Cases::new().case("Circle", |r: &f64| 3.0 * r * r))
    ///     .unwrap();
    /// assert_eq!(area, 12.0);
    ///
    /// let err = Tagged::unit("Point")
    ///     .match_with(Cases::new().case("Circle", |r: &f64| *r))
    ///     .unwrap_err();
    /// assert_eq!(err, DataError::UnmatchedVariant { variant: "Point" });
    /// ```
    pub fn match_with<R>(&self, mut cases: Cases<'_, R>) -> Result<R, DataError> {
        if let Some(case) = cases.handlers.remove(self.variant) {
            return match case {
                Case::Ignoring(arm) => Ok(arm.resolve(())),
                Case::Payload { expected, run } => {
                    let payload = match &self.payload {
                        Payload::Value(value) => run(&**value),
                        Payload::Empty => None,
                    };
                    payload.ok_or(DataError::PayloadMismatch {
                        variant: self.variant,
                        expected,
                    })
                }
            };
        }

        if let Some(default) = cases.otherwise {
            return Ok(default.resolve(()));
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(variant = self.variant, "no case matched tagged value");

        Err(DataError::UnmatchedVariant {
            variant: self.variant,
        })
    }
}

impl fmt::Debug for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Tagged");
        debug.field("variant", &self.variant);
        match self.payload {
            Payload::Value(_) => debug.finish_non_exhaustive(),
            Payload::Empty => debug.finish(),
        }
    }
}

// ========== Matching ==========

type Run<'a, R> = Box<dyn FnOnce(&(dyn Any + 'static)) -> Option<R> + 'a>;

enum Case<'a, R> {
    Payload { expected: &'static str, run: Run<'a, R> },
    Ignoring(Arm<'a, (), R>),
}

/// Handlers for [`Tagged::match_with`], keyed by variant name.
///
/// Adding a second case for the same variant replaces the first.
pub struct Cases<'a, R> {
    handlers: BTreeMap<&'static str, Case<'a, R>>,
    otherwise: Option<Arm<'a, (), R>>,
}

impl<'a, R> Cases<'a, R> {
    /// No cases and no default.
    pub fn new() -> Self {
        Cases {
            handlers: BTreeMap::new(),
            otherwise: None,
        }
    }

    /// Handle `variant` with a function of its payload.
    pub fn case<P, F>(mut self, variant: &'static str, f: F) -> Self
    where
        P: 'static,
        F: FnOnce(&P) -> R + 'a,
    {
        let run: Run<'a, R> =
            Box::new(move |payload: &(dyn Any + 'static)| payload.downcast_ref::<P>().map(f));
        self.handlers.insert(
            variant,
            Case::Payload {
                expected: type_name::<P>(),
                run,
            },
        );
        self
    }

    /// Handle `variant` without looking at its payload.
    pub fn unit<F>(mut self, variant: &'static str, f: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.handlers
            .insert(variant, Case::Ignoring(Arm::handler(move |()| f())));
        self
    }

    /// Answer `variant` with a constant.
    pub fn value(mut self, variant: &'static str, value: R) -> Self {
        self.handlers
            .insert(variant, Case::Ignoring(Arm::value(value)));
        self
    }

    /// The default case, run when no case names the variant.
    pub fn otherwise<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.otherwise = Some(Arm::handler(move |()| f()));
        self
    }

    /// A constant default.
    pub fn otherwise_value(mut self, value: R) -> Self {
        self.otherwise = Some(Arm::value(value));
        self
    }
}

impl<R> Default for Cases<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Cases<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases")
            .field("variants", &self.handlers.keys().collect::<Vec<_>>())
            .field("otherwise", &self.otherwise.is_some())
            .finish()
    }
}
