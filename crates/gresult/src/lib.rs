//! # gresult: Generic Result
//!
//! A value-or-error container, `GResult<T, E = ErrorCode>`, holding exactly
//! one of a success value or an error. Failures travel as values; a caller
//! that insists on a value that is not there escalates the error into a
//! panic carrying a typed payload.
//!
//! ## Design
//!
//! - **Storage**: a private two-variant enum. The discriminant and the live
//!   payload cannot disagree, and there is no empty state.
//! - **Construction**: `from_arg` picks the alternative at compile time from
//!   which payload type converts from the argument. Ambiguous arguments do
//!   not compile; `in_place` with `IN_PLACE_VALUE` / `IN_PLACE_ERROR` forces
//!   the choice. `new()` holds the `ResultErrc::NotInitialized` sentinel.
//! - **Assignment**: `assign` never leaves the destination without a live
//!   payload, even when the payload's clone panics.
//! - **Escalation**: `value()` on an error holder panics with
//!   `E::escalate()`; implement [`Escalate`] for your own error types.
//!
//! ## Quick Start
//!
//! ```rust
//! use gresult::{Errc, ErrorCode, GResult, ResultErrc, SystemError};
//!
//! fn parse_port(s: &str) -> GResult<u16> {
//!     match s.parse::<u16>() {
//!         Ok(port) => GResult::from_value(port),
//!         Err(_) => GResult::from_arg(Errc::InvalidArgument),
//!     }
//! }
//!
//! let ok = parse_port("8080");
//! assert_eq!(*ok.value(), 8080);
//!
//! let bad = parse_port("http");
//! assert!(bad.has_error());
//! assert_eq!(bad.error(), Errc::InvalidArgument);
//! assert!(bad.try_value().is_err());
//!
//! let unset: GResult<u16> = GResult::new();
//! assert_eq!(unset.error(), ErrorCode::from(ResultErrc::NotInitialized));
//! assert_eq!(unset.to_string(), "error:boost::result:1");
//!
//! let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *unset.value()))
//!     .unwrap_err();
//! assert!(caught.downcast_ref::<SystemError>().is_some());
//! ```
//!
//! ## Feature Flags
//!
//! | Flag         | Effect |
//! |--------------|--------|
//! | `production` | Strips names from category `GlobalId`s |
//!
//! ## Environment
//!
//! | Variable              | Effect |
//! |-----------------------|--------|
//! | `GRESULT_LOG_LEVEL`   | stderr log level (default `warn`) |
//! | `GRESULT_FLUSH_EPRINT`| flush stderr after each log line |

mod id;
mod errc;
mod category;
mod code;
mod escalate;
mod construct;
mod result;
mod convert;

pub mod env;
#[macro_use]
pub mod kprint;

// ── Public API ────────────────────────────────────────────────────

pub use id::GlobalId;
pub use errc::{Errc, ResultErrc};
pub use category::{
    generic_category, registry, result_category, same_category, system_category,
    CategoryRegistry, ErrorCategory, GenericCategory, ResultCategory, SystemCategory,
    CAT_GENERIC, CAT_RESULT, CAT_SYSTEM,
};
pub use code::{make_error_code, ErrorCode, ErrorCodeEnum};
pub use escalate::{raise, Escalate, SystemError};
pub use construct::{
    Emplace, InPlaceError, InPlaceValue, Resolve, ViaError, ViaValue, IN_PLACE_ERROR,
    IN_PLACE_VALUE,
};
pub use result::GResult;
