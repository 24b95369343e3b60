//! # Unnulable
//!
//! Small functional containers for absence, failure, deferred effects and
//! validated values.
//!
//! - [`Maybe`]: a value that may be absent, built from any [`Nullable`] source
//! - [`Either`]: a success or an error, with `from_throwable` at panic boundaries
//! - [`IO`]: a deferred, re-runnable computation
//! - [`brand`]: validated newtypes with composable constructors
//! - [`data`]: runtime tagged unions matched by variant name
//!
//! Every container can be matched with an [`Arm`] per variant: either a
//! constant or a handler of the payload.
//!
//! ## Quick Example
//!
//! ```rust
//! use unnulable::brand::number;
//! use unnulable::{Arm, Either, Maybe};
//!
//! fn parse_quantity(raw: Option<&str>) -> Either<f64, String> {
//!     Maybe::from_nullable(raw)
//!         .to_either("missing quantity".to_string())
//!         .flat_map(|s| Either::from_result(s.trim().parse::<f64>().map_err(|e| e.to_string())))
//!         .flat_map(|n: f64| {
//!             Either::from_result(number::positive().construct(n).map_err(|e| e.to_string()))
//!         })
//!         .map(|quantity| quantity.into_inner())
//! }
//!
//! assert_eq!(parse_quantity(Some(" 2.5 ")), Either::Ok(2.5));
//! assert!(parse_quantity(None).is_error());
//!
//! let message = parse_quantity(Some("-1")).match_with(
//!     Arm::value("ok".to_string()),
//!     Arm::handler(|e: String| e),
//! );
//! assert_eq!(message, "Expected a positive number. Instead got: -1");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events on brand rejections and unmatched variants
//! - `serde`: `Serialize`/`Deserialize` for the containers, and validating
//!   `Deserialize` for branded values
//! - `proptest`: `Arbitrary` impls for [`Maybe`] and [`Either`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod arm;
pub mod brand;
pub mod data;
pub mod either;
pub mod error;
pub mod io;
pub mod maybe;
pub mod testing;

// Re-exports
pub use arm::Arm;
pub use brand::{Brand, Branded, Constructor};
pub use data::{Cases, Data, Tagged, Variant, EMPTY};
pub use either::Either;
pub use error::{DataError, Fault, ValidationError};
pub use io::IO;
pub use maybe::{Maybe, Nullable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arm::Arm;
    pub use crate::brand::{Brand, Branded, Constructor};
    pub use crate::data::{Cases, Data, Tagged, Variant, EMPTY};
    pub use crate::either::Either;
    pub use crate::error::{DataError, Fault, ValidationError};
    pub use crate::io::IO;
    pub use crate::maybe::{Maybe, Nullable};
}
