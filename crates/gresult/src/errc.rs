//! Error condition enums.
//!
//! - [`ResultErrc`]: the single condition owned by the `boost::result`
//!   category: a container that was never given a value or an error.
//! - [`Errc`]: portable POSIX conditions in the `generic` category.
//!   Discriminants are the platform errno values, taken from `libc` on
//!   unix and from the Linux numbering elsewhere.

use core::fmt;

use crate::category::{generic_category, result_category, ErrorCategory};
use crate::code::ErrorCodeEnum;

/// Conditions of the `boost::result` category.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultErrc {
    /// Default-constructed container; no value or error was supplied.
    NotInitialized = 1,
}

impl ResultErrc {
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            1 => Some(ResultErrc::NotInitialized),
            _ => None,
        }
    }
}

impl ErrorCodeEnum for ResultErrc {
    #[inline]
    fn value(self) -> i32 {
        self as i32
    }

    #[inline]
    fn category() -> &'static dyn ErrorCategory {
        result_category()
    }
}

impl fmt::Display for ResultErrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&result_category().message(*self as i32))
    }
}

impl std::error::Error for ResultErrc {}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod sys {
            pub use libc::{
                EACCES, EADDRINUSE, EAGAIN, EBADF, ECONNABORTED, ECONNREFUSED,
                ECONNRESET, EEXIST, EINTR, EINVAL, EIO, EMFILE, ENOENT, ENOMEM,
                ENOSPC, ENOTCONN, EPERM, EPIPE, ETIMEDOUT,
            };
        }
    } else {
        mod sys {
            pub const EPERM: i32 = 1;
            pub const ENOENT: i32 = 2;
            pub const EINTR: i32 = 4;
            pub const EIO: i32 = 5;
            pub const EBADF: i32 = 9;
            pub const EAGAIN: i32 = 11;
            pub const ENOMEM: i32 = 12;
            pub const EACCES: i32 = 13;
            pub const EEXIST: i32 = 17;
            pub const EINVAL: i32 = 22;
            pub const EMFILE: i32 = 24;
            pub const ENOSPC: i32 = 28;
            pub const EPIPE: i32 = 32;
            pub const EADDRINUSE: i32 = 98;
            pub const ECONNABORTED: i32 = 103;
            pub const ECONNRESET: i32 = 104;
            pub const ENOTCONN: i32 = 107;
            pub const ETIMEDOUT: i32 = 110;
            pub const ECONNREFUSED: i32 = 111;
        }
    }
}

/// Portable error conditions, valued by errno.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Errc {
    OperationNotPermitted = sys::EPERM,
    NoSuchFileOrDirectory = sys::ENOENT,
    Interrupted = sys::EINTR,
    IoError = sys::EIO,
    BadFileDescriptor = sys::EBADF,
    ResourceUnavailableTryAgain = sys::EAGAIN,
    NotEnoughMemory = sys::ENOMEM,
    PermissionDenied = sys::EACCES,
    FileExists = sys::EEXIST,
    InvalidArgument = sys::EINVAL,
    TooManyFilesOpen = sys::EMFILE,
    NoSpaceOnDevice = sys::ENOSPC,
    BrokenPipe = sys::EPIPE,
    AddressInUse = sys::EADDRINUSE,
    ConnectionAborted = sys::ECONNABORTED,
    ConnectionReset = sys::ECONNRESET,
    NotConnected = sys::ENOTCONN,
    TimedOut = sys::ETIMEDOUT,
    ConnectionRefused = sys::ECONNREFUSED,
}

const ALL_ERRC: [Errc; 19] = [
    Errc::OperationNotPermitted,
    Errc::NoSuchFileOrDirectory,
    Errc::Interrupted,
    Errc::IoError,
    Errc::BadFileDescriptor,
    Errc::ResourceUnavailableTryAgain,
    Errc::NotEnoughMemory,
    Errc::PermissionDenied,
    Errc::FileExists,
    Errc::InvalidArgument,
    Errc::TooManyFilesOpen,
    Errc::NoSpaceOnDevice,
    Errc::BrokenPipe,
    Errc::AddressInUse,
    Errc::ConnectionAborted,
    Errc::ConnectionReset,
    Errc::NotConnected,
    Errc::TimedOut,
    Errc::ConnectionRefused,
];

impl Errc {
    /// Look up the condition for a raw errno. Unknown values yield `None`.
    pub fn from_raw(errno: i32) -> Option<Self> {
        ALL_ERRC.iter().copied().find(|e| *e as i32 == errno)
    }

    /// The strerror-style description.
    pub fn description(self) -> &'static str {
        match self {
            Errc::OperationNotPermitted => "Operation not permitted",
            Errc::NoSuchFileOrDirectory => "No such file or directory",
            Errc::Interrupted => "Interrupted system call",
            Errc::IoError => "Input/output error",
            Errc::BadFileDescriptor => "Bad file descriptor",
            Errc::ResourceUnavailableTryAgain => "Resource temporarily unavailable",
            Errc::NotEnoughMemory => "Cannot allocate memory",
            Errc::PermissionDenied => "Permission denied",
            Errc::FileExists => "File exists",
            Errc::InvalidArgument => "Invalid argument",
            Errc::TooManyFilesOpen => "Too many open files",
            Errc::NoSpaceOnDevice => "No space left on device",
            Errc::BrokenPipe => "Broken pipe",
            Errc::AddressInUse => "Address already in use",
            Errc::ConnectionAborted => "Software caused connection abort",
            Errc::ConnectionReset => "Connection reset by peer",
            Errc::NotConnected => "Transport endpoint is not connected",
            Errc::TimedOut => "Connection timed out",
            Errc::ConnectionRefused => "Connection refused",
        }
    }
}

impl ErrorCodeEnum for Errc {
    #[inline]
    fn value(self) -> i32 {
        self as i32
    }

    #[inline]
    fn category() -> &'static dyn ErrorCategory {
        generic_category()
    }
}

impl fmt::Display for Errc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for Errc {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_initialized_is_one() {
        assert_eq!(ResultErrc::NotInitialized as i32, 1);
        assert_eq!(ResultErrc::from_raw(1), Some(ResultErrc::NotInitialized));
        assert_eq!(ResultErrc::from_raw(2), None);
    }

    #[test]
    fn result_errc_display_uses_category() {
        assert_eq!(ResultErrc::NotInitialized.to_string(), "result<> not initialized");
    }

    #[test]
    fn errc_round_trips_raw_values() {
        for e in ALL_ERRC {
            assert_eq!(Errc::from_raw(e as i32), Some(e));
        }
        assert_eq!(Errc::from_raw(-1), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_errno_values() {
        assert_eq!(Errc::InvalidArgument as i32, 22);
        assert_eq!(Errc::ResourceUnavailableTryAgain as i32, 11);
        assert_eq!(Errc::ConnectionReset as i32, 104);
    }

    #[test]
    fn errc_display() {
        assert_eq!(Errc::InvalidArgument.to_string(), "Invalid argument");
    }
}
