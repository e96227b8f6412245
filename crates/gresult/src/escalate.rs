//! Escalation: turning a held error into a panic.
//!
//! Checked value access on an error-holding `GResult` calls
//! [`Escalate::escalate`] on the error and panics with the returned value as
//! the panic payload (`std::panic::panic_any`). Callers that catch the
//! unwind can `downcast` the payload back to `E::Exception`.
//!
//! Implement `Escalate` for your own error type to choose what it becomes:
//!
//! ```
//! use gresult::{Escalate, GResult};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct ParseFailure(usize);
//!
//! #[derive(Debug)]
//! struct ParsePanic { offset: usize }
//!
//! impl Escalate for ParseFailure {
//!     type Exception = ParsePanic;
//!     fn escalate(&self) -> ParsePanic {
//!         ParsePanic { offset: self.0 }
//!     }
//! }
//!
//! let r: GResult<u32, ParseFailure> = GResult::from_error(ParseFailure(7));
//! let caught = std::panic::catch_unwind(|| *r.value()).unwrap_err();
//! assert_eq!(caught.downcast_ref::<ParsePanic>().unwrap().offset, 7);
//! ```

use std::error::Error;
use std::fmt;
use std::io;

use crate::category::same_category;
use crate::code::{make_error_code, ErrorCode};
use crate::errc::{Errc, ResultErrc};

/// Conversion from an error value into a panic payload.
pub trait Escalate {
    type Exception: Send + 'static;

    fn escalate(&self) -> Self::Exception;
}

/// Panic with the escalated form of `error`.
///
/// Never returns. Used by the checked accessors of `GResult`.
#[cold]
#[track_caller]
pub fn raise<E: Escalate + ?Sized>(error: &E) -> ! {
    crate::kdebug!(
        "gresult: escalating error to {}",
        std::any::type_name::<E::Exception>()
    );
    std::panic::panic_any(error.escalate())
}

/// The default exception: an `ErrorCode` plus optional context.
///
/// `Display` reads `"<context>: <message>"`, or just the message when no
/// context was given.
#[derive(Clone)]
pub struct SystemError {
    code: ErrorCode,
    context: Option<String>,
}

impl SystemError {
    pub fn new(code: ErrorCode) -> Self {
        Self { code, context: None }
    }

    pub fn with_context(code: ErrorCode, context: impl Into<String>) -> Self {
        Self {
            code,
            context: Some(context.into()),
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl PartialEq for SystemError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.context == other.context
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ctx) = &self.context {
            write!(f, "{}: ", ctx)?;
        }
        f.write_str(&self.code.message())
    }
}

impl fmt::Debug for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemError")
            .field("code", &self.code)
            .field("context", &self.context)
            .finish()
    }
}

impl Error for SystemError {}

impl From<ErrorCode> for SystemError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl From<SystemError> for io::Error {
    /// System-category codes come back as raw OS errors; everything else is
    /// wrapped as a custom `io::Error`.
    fn from(err: SystemError) -> Self {
        if same_category(err.code.category(), crate::system_category()) && err.context.is_none() {
            return io::Error::from_raw_os_error(err.code.value());
        }
        io::Error::new(io::ErrorKind::Other, err)
    }
}

// ── Built-in escalations ──────────────────────────────────────────

impl Escalate for ErrorCode {
    type Exception = SystemError;

    fn escalate(&self) -> SystemError {
        SystemError::new(*self)
    }
}

impl Escalate for ResultErrc {
    type Exception = SystemError;

    fn escalate(&self) -> SystemError {
        SystemError::new(make_error_code(*self))
    }
}

impl Escalate for Errc {
    type Exception = SystemError;

    fn escalate(&self) -> SystemError {
        SystemError::new(make_error_code(*self))
    }
}

impl Escalate for io::ErrorKind {
    type Exception = io::Error;

    fn escalate(&self) -> io::Error {
        io::Error::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn system_error_display() {
        let e = SystemError::new(make_error_code(ResultErrc::NotInitialized));
        assert_eq!(e.to_string(), "result<> not initialized");

        let e = SystemError::with_context(make_error_code(Errc::InvalidArgument), "parsing");
        assert_eq!(e.to_string(), "parsing: Invalid argument");
        assert_eq!(e.context(), Some("parsing"));
    }

    #[test]
    fn error_code_escalates_to_system_error() {
        let ec = make_error_code(Errc::BrokenPipe);
        assert_eq!(ec.escalate().code(), ec);
        assert_eq!(Errc::BrokenPipe.escalate(), SystemError::new(ec));
    }

    #[test]
    fn raise_carries_payload() {
        let ec = make_error_code(ResultErrc::NotInitialized);
        let caught = catch_unwind(AssertUnwindSafe(|| raise(&ec))).unwrap_err();
        let payload = caught.downcast::<SystemError>().unwrap();
        assert_eq!(payload.code(), ec);
    }

    #[test]
    fn io_kind_escalates_to_io_error() {
        let e = io::ErrorKind::TimedOut.escalate();
        assert_eq!(e.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn into_io_error() {
        let os = SystemError::new(ErrorCode::from_raw_os_error(Errc::BrokenPipe as i32));
        let io_err: io::Error = os.into();
        assert_eq!(io_err.raw_os_error(), Some(Errc::BrokenPipe as i32));

        let custom = SystemError::new(make_error_code(ResultErrc::NotInitialized));
        let io_err: io::Error = custom.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        assert!(io_err.get_ref().is_some());
    }
}
