use core::fmt;
use core::hash::{Hash, Hasher};

use crate::category::{same_category, system_category, ErrorCategory};
use crate::errc::{Errc, ResultErrc};

/// An enum whose variants are values of one fixed category.
///
/// Implemented for [`ResultErrc`] and [`Errc`]; user enums implement it to
/// get [`make_error_code`] for free.
pub trait ErrorCodeEnum: Copy {
    fn value(self) -> i32;
    fn category() -> &'static dyn ErrorCategory;
}

/// Build an `ErrorCode` from a category enum.
///
/// ```
/// use gresult::{make_error_code, result_category, ResultErrc};
///
/// let ec = make_error_code(ResultErrc::NotInitialized);
/// assert_eq!(ec.value(), 1);
/// assert_eq!(ec.category().name(), result_category().name());
/// ```
#[inline]
pub fn make_error_code<C: ErrorCodeEnum>(c: C) -> ErrorCode {
    ErrorCode::new(c.value(), C::category())
}

/// A platform error code: a raw value interpreted by a category.
///
/// This is the default error type of [`GResult`](crate::GResult). It is
/// `Copy`, compares by `(category, value)`, and displays as
/// `<category>:<value>`.
///
/// The default code is `0` in the system category, meaning "no error".
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value: i32,
    category: &'static dyn ErrorCategory,
}

impl ErrorCode {
    #[inline]
    pub fn new(value: i32, category: &'static dyn ErrorCategory) -> Self {
        Self { value, category }
    }

    /// Wrap a raw OS error.
    #[inline]
    pub fn from_raw_os_error(errno: i32) -> Self {
        Self::new(errno, system_category())
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn category(&self) -> &'static dyn ErrorCategory {
        self.category
    }

    pub fn message(&self) -> String {
        self.category.message(self.value)
    }

    /// True if this code carries an error (non-zero value).
    #[inline]
    pub fn is_err(&self) -> bool {
        self.value != 0
    }

    /// Reset to the default "no error" code.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if this code is `ResultErrc::NotInitialized`.
    pub fn is_not_initialized(&self) -> bool {
        *self == make_error_code(ResultErrc::NotInitialized)
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::new(0, system_category())
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && same_category(self.category, other.category)
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.id().hash(state);
        self.value.hash(state);
    }
}

impl PartialEq<ResultErrc> for ErrorCode {
    fn eq(&self, other: &ResultErrc) -> bool {
        *self == make_error_code(*other)
    }
}

impl PartialEq<Errc> for ErrorCode {
    fn eq(&self, other: &Errc) -> bool {
        *self == make_error_code(*other)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.value)
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("value", &self.value)
            .field("category", &self.category.name())
            .field("message", &self.message())
            .finish()
    }
}

// ── Conversions ───────────────────────────────────────────────────

impl From<ResultErrc> for ErrorCode {
    #[inline]
    fn from(e: ResultErrc) -> Self {
        make_error_code(e)
    }
}

impl From<Errc> for ErrorCode {
    #[inline]
    fn from(e: Errc) -> Self {
        make_error_code(e)
    }
}

/// `(value, category)`, the two-argument form.
impl From<(i32, &'static dyn ErrorCategory)> for ErrorCode {
    #[inline]
    fn from((value, category): (i32, &'static dyn ErrorCategory)) -> Self {
        Self::new(value, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{generic_category, result_category};
    use std::collections::HashSet;

    #[test]
    fn default_is_system_zero() {
        let ec = ErrorCode::default();
        assert_eq!(ec.value(), 0);
        assert_eq!(ec.category().name(), "system");
        assert!(!ec.is_err());
    }

    #[test]
    fn make_from_enum() {
        let ec = make_error_code(ResultErrc::NotInitialized);
        assert_eq!(ec.value(), 1);
        assert_eq!(ec.category().name(), "boost::result");
        assert_eq!(ec.message(), "result<> not initialized");
        assert!(ec.is_not_initialized());
        assert_eq!(ec, ResultErrc::NotInitialized);
    }

    #[test]
    fn equality_needs_same_category() {
        let a = ErrorCode::new(1, result_category());
        let b = ErrorCode::new(1, generic_category());
        assert_ne!(a, b);
        assert_eq!(a, ErrorCode::new(1, result_category()));
    }

    #[test]
    fn two_argument_form() {
        let ec = ErrorCode::from((Errc::InvalidArgument as i32, generic_category()));
        assert_eq!(ec, Errc::InvalidArgument);
        assert_eq!(ec.message(), "Invalid argument");
    }

    #[test]
    fn display_is_category_colon_value() {
        let ec = make_error_code(ResultErrc::NotInitialized);
        assert_eq!(ec.to_string(), "boost::result:1");
    }

    #[test]
    fn clear_resets_to_default() {
        let mut ec = make_error_code(Errc::BrokenPipe);
        assert!(ec.is_err());
        ec.clear();
        assert_eq!(ec, ErrorCode::default());
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(make_error_code(Errc::TimedOut));
        set.insert(ErrorCode::new(Errc::TimedOut as i32, generic_category()));
        set.insert(make_error_code(ResultErrc::NotInitialized));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorCode>();
    }
}
