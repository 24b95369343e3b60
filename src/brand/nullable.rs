//! Ready-made brands for optional values.
//!
//! Rust has a single absence sentinel, `None`, so [`not_null`] and
//! [`not_undefined`] check the same thing and differ only in brand and
//! message. [`not_nullable`] combines both.

use super::{combine, define, Brand, Constructor};

/// Brand for `Some` values, reported as "null" when rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotNull;

/// Brand for `Some` values, reported as "undefined" when rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotUndefined;

/// Brand for `Some` values, combining [`NotNull`] and [`NotUndefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotNullable;

/// Rejects `None`.
pub fn not_null<T: 'static>() -> Constructor<Option<T>, NotNull> {
    define(|v: &Option<T>| v.is_some(), "Expected a not null element")
}

/// Rejects `None`.
pub fn not_undefined<T: 'static>() -> Constructor<Option<T>, NotUndefined> {
    define(|v: &Option<T>| v.is_some(), "Expected a defined element")
}

/// Rejects `None`, reporting it through [`not_null`] first.
///
/// ```rust
/// use unnulable::brand::nullable;
///
/// let present = nullable::not_nullable().construct(Some(3)).unwrap();
/// assert_eq!(*present, Some(3));
///
/// let err = nullable::not_nullable::<i32>().construct(None).unwrap_err();
/// assert_eq!(err.message(), "Expected a not null element");
/// ```
pub fn not_nullable<T: 'static>() -> Constructor<Option<T>, NotNullable> {
    combine(&[&not_null::<T>(), &not_undefined::<T>()])
}

impl<T: 'static> Brand<Option<T>> for NotNull {
    fn constructor() -> Constructor<Option<T>, Self> {
        not_null()
    }
}

impl<T: 'static> Brand<Option<T>> for NotUndefined {
    fn constructor() -> Constructor<Option<T>, Self> {
        not_undefined()
    }
}

impl<T: 'static> Brand<Option<T>> for NotNullable {
    fn constructor() -> Constructor<Option<T>, Self> {
        not_nullable()
    }
}
