use std::io;

use crate::category::{generic_category, same_category, system_category};
use crate::code::{make_error_code, ErrorCode};
use crate::errc::Errc;
use crate::result::GResult;

/// Maps `io::ErrorKind` to a portable condition, where one exists.
fn io_errc(kind: io::ErrorKind) -> Option<Errc> {
    let errc = match kind {
        io::ErrorKind::NotFound          => Errc::NoSuchFileOrDirectory,
        io::ErrorKind::PermissionDenied  => Errc::PermissionDenied,
        io::ErrorKind::ConnectionRefused => Errc::ConnectionRefused,
        io::ErrorKind::ConnectionReset   => Errc::ConnectionReset,
        io::ErrorKind::ConnectionAborted => Errc::ConnectionAborted,
        io::ErrorKind::NotConnected      => Errc::NotConnected,
        io::ErrorKind::AddrInUse         => Errc::AddressInUse,
        io::ErrorKind::BrokenPipe        => Errc::BrokenPipe,
        io::ErrorKind::AlreadyExists     => Errc::FileExists,
        io::ErrorKind::WouldBlock        => Errc::ResourceUnavailableTryAgain,
        io::ErrorKind::InvalidInput      => Errc::InvalidArgument,
        io::ErrorKind::InvalidData       => Errc::InvalidArgument,
        io::ErrorKind::TimedOut          => Errc::TimedOut,
        io::ErrorKind::Interrupted       => Errc::Interrupted,
        io::ErrorKind::OutOfMemory       => Errc::NotEnoughMemory,
        _ => return None,
    };
    Some(errc)
}

// ── std::result::Result ───────────────────────────────────────────

impl<T, E> From<Result<T, E>> for GResult<T, E> {
    fn from(r: Result<T, E>) -> Self {
        match r {
            Ok(v) => GResult::from_value(v),
            Err(e) => GResult::from_error(e),
        }
    }
}

// ── io::Error ─────────────────────────────────────────────────────

impl From<io::Error> for ErrorCode {
    /// Raw OS errors keep their value in the system category. Other errors
    /// map their kind to a generic condition, falling back to `EIO`.
    fn from(err: io::Error) -> Self {
        ErrorCode::from(&err)
    }
}

impl From<&io::Error> for ErrorCode {
    fn from(err: &io::Error) -> Self {
        if let Some(errno) = err.raw_os_error() {
            return ErrorCode::new(errno, system_category());
        }
        make_error_code(io_errc(err.kind()).unwrap_or(Errc::IoError))
    }
}

impl From<ErrorCode> for io::Error {
    /// System codes round-trip as raw OS errors, and so do generic codes on
    /// unix, where errno is the OS error space. Everything else becomes a
    /// custom error carrying the message.
    fn from(code: ErrorCode) -> Self {
        let category = code.category();
        let os_space = same_category(category, system_category())
            || (cfg!(unix) && same_category(category, generic_category()));
        if os_space {
            return io::Error::from_raw_os_error(code.value());
        }
        io::Error::new(io::ErrorKind::Other, crate::SystemError::new(code))
    }
}
