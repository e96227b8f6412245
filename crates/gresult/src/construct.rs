//! Construction resolution.
//!
//! `GResult::from_arg(a)` decides at compile time whether `a` builds the
//! value or the error:
//!
//! | `T: From<A>` | `E: From<A>` | Result                          |
//! |--------------|--------------|---------------------------------|
//! | yes          | no           | value alternative               |
//! | no           | yes          | error alternative               |
//! | yes          | yes          | compile error: ambiguous        |
//! | no           | no           | compile error: not constructible|
//!
//! Multiple arguments are passed as a tuple and resolve through
//! `From<(A, B, ..)>` the same way.
//!
//! The decision is carried by a marker type parameter ([`ViaValue`] or
//! [`ViaError`]) that the compiler infers from the single impl whose bounds
//! hold. When both hold, inference fails and the caller has to pick with a
//! tag:
//!
//! ```
//! use gresult::{ErrorCode, Errc, GResult, make_error_code, IN_PLACE_ERROR};
//!
//! let ec = make_error_code(Errc::InvalidArgument);
//! let r: GResult<ErrorCode> = GResult::in_place(IN_PLACE_ERROR, ec);
//! assert!(r.has_error());
//! ```
//!
//! ```compile_fail
//! use gresult::{ErrorCode, Errc, GResult, make_error_code};
//!
//! // ErrorCode converts into both alternatives.
//! let r: GResult<ErrorCode> = GResult::from_arg(make_error_code(Errc::InvalidArgument));
//! ```
//!
//! ```compile_fail
//! use gresult::GResult;
//!
//! struct X(i32);
//! impl From<i32> for X {
//!     fn from(v: i32) -> Self { X(v) }
//! }
//!
//! // i32 converts into both i32 and X.
//! let r: GResult<i32, X> = GResult::from_arg(1i32);
//! ```
//!
//! ```compile_fail
//! use gresult::GResult;
//!
//! // Neither u8 nor ErrorCode converts from a Vec.
//! let r: GResult<u8> = GResult::from_arg(vec![1u8, 2]);
//! ```

use crate::result::GResult;

/// Tag forcing the value alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InPlaceValue;

/// Tag forcing the error alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InPlaceError;

pub const IN_PLACE_VALUE: InPlaceValue = InPlaceValue;
pub const IN_PLACE_ERROR: InPlaceError = InPlaceError;

/// Resolution marker: the argument builds the value.
pub enum ViaValue {}

/// Resolution marker: the argument builds the error.
pub enum ViaError {}

/// Build a `GResult` from an argument, choosing the alternative by marker.
///
/// Callers normally never name `M`; see [`GResult::from_arg`].
pub trait Resolve<A, M>: Sized {
    fn resolve(arg: A) -> Self;
}

impl<T, E, A> Resolve<A, ViaValue> for GResult<T, E>
where
    T: From<A>,
{
    #[inline]
    fn resolve(arg: A) -> Self {
        GResult::from_value(T::from(arg))
    }
}

impl<T, E, A> Resolve<A, ViaError> for GResult<T, E>
where
    E: From<A>,
{
    #[inline]
    fn resolve(arg: A) -> Self {
        GResult::from_error(E::from(arg))
    }
}

/// Build a `GResult` with the alternative named by a tag.
pub trait Emplace<Tag, A>: Sized {
    fn emplace(tag: Tag, args: A) -> Self;
}

impl<T, E, A> Emplace<InPlaceValue, A> for GResult<T, E>
where
    T: From<A>,
{
    #[inline]
    fn emplace(_: InPlaceValue, args: A) -> Self {
        GResult::from_value(T::from(args))
    }
}

impl<T, E, A> Emplace<InPlaceError, A> for GResult<T, E>
where
    E: From<A>,
{
    #[inline]
    fn emplace(_: InPlaceError, args: A) -> Self {
        GResult::from_error(E::from(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generic_category, make_error_code, ErrorCategory, ErrorCode, Errc};
    use std::cell::Cell;

    thread_local! {
        static X_INSTANCES: Cell<i64> = const { Cell::new(0) };
    }

    fn x_instances() -> i64 {
        X_INSTANCES.with(|c| c.get())
    }

    #[derive(Debug)]
    struct X {
        v: i32,
    }

    impl X {
        fn make(v: i32) -> Self {
            X_INSTANCES.with(|c| c.set(c.get() + 1));
            X { v }
        }
    }

    impl Clone for X {
        fn clone(&self) -> Self {
            X::make(self.v)
        }
    }

    impl Drop for X {
        fn drop(&mut self) {
            X_INSTANCES.with(|c| c.set(c.get() - 1));
        }
    }

    impl From<i32> for X {
        fn from(v: i32) -> Self {
            X::make(v)
        }
    }

    impl From<(i32, i32)> for X {
        fn from((a, b): (i32, i32)) -> Self {
            X::make(a + b)
        }
    }

    impl From<(i32, i32, i32)> for X {
        fn from((a, b, c): (i32, i32, i32)) -> Self {
            X::make(a + b + c)
        }
    }

    #[test]
    fn value_only_argument_builds_value() {
        let r: GResult<i32> = GResult::from_arg(5i32);
        assert!(r.has_value());
        assert_eq!(*r.value(), 5);

        let r: GResult<String> = GResult::from_arg("hello");
        assert_eq!(r.get().map(String::as_str), Some("hello"));
    }

    #[test]
    fn error_only_argument_builds_error() {
        let ec = make_error_code(Errc::InvalidArgument);
        let r: GResult<i32> = GResult::from_arg(ec);
        assert!(r.has_error());
        assert_eq!(r.error(), ec);

        let r: GResult<i32> = GResult::from_arg(Errc::InvalidArgument);
        assert_eq!(r.error(), ec);
    }

    #[test]
    fn two_arguments_build_error_code() {
        let cat: &'static dyn ErrorCategory = generic_category();
        let r: GResult<i32> = GResult::from_arg((Errc::InvalidArgument as i32, cat));
        assert!(r.has_error());
        assert_eq!(r.error(), ErrorCode::new(Errc::InvalidArgument as i32, generic_category()));
    }

    #[test]
    fn error_type_with_many_constructors() {
        assert_eq!(x_instances(), 0);
        {
            let r: GResult<String, X> = GResult::from_arg(1i32);
            assert!(r.has_error());
            assert_eq!(r.error_ref().map(|x| x.v), Some(1));
            assert_eq!(x_instances(), 1);
        }
        assert_eq!(x_instances(), 0);
        {
            let r: GResult<String, X> = GResult::from_arg((1i32, 2i32));
            assert_eq!(r.error_ref().map(|x| x.v), Some(3));
            assert_eq!(x_instances(), 1);
        }
        assert_eq!(x_instances(), 0);
        {
            let r: GResult<i32, X> = GResult::from_arg((1i32, 2i32, 3i32));
            assert_eq!(r.error_ref().map(|x| x.v), Some(6));
            assert_eq!(x_instances(), 1);
        }
        assert_eq!(x_instances(), 0);
    }

    #[test]
    fn value_type_with_many_constructors() {
        {
            let r: GResult<X> = GResult::from_arg((1i32, 2i32));
            assert!(r.has_value());
            assert_eq!(r.get().map(|x| x.v), Some(3));
            assert_eq!(x_instances(), 1);
        }
        assert_eq!(x_instances(), 0);
    }

    #[test]
    fn tags_force_the_alternative() {
        {
            let r: GResult<X, X> = GResult::in_place(IN_PLACE_ERROR, 1i32);
            assert!(r.has_error());
            assert_eq!(r.error_ref().map(|x| x.v), Some(1));

            let r: GResult<X, X> = GResult::in_place(IN_PLACE_VALUE, (2i32, 2i32));
            assert!(r.has_value());
            assert_eq!(r.get().map(|x| x.v), Some(4));
            assert_eq!(x_instances(), 2);
        }
        assert_eq!(x_instances(), 0);

        let ec = make_error_code(Errc::InvalidArgument);
        let r: GResult<ErrorCode> = GResult::in_place(IN_PLACE_VALUE, ec);
        assert_eq!(r.get(), Some(&ec));
        let r: GResult<ErrorCode> = GResult::in_place(IN_PLACE_ERROR, ec);
        assert_eq!(r.error_ref(), Some(&ec));
    }

    #[test]
    fn explicit_marker_disambiguates() {
        let r = <GResult<i32, X> as Resolve<i32, ViaValue>>::resolve(7);
        assert_eq!(r.get(), Some(&7));
        let r = <GResult<i32, X> as Resolve<i32, ViaError>>::resolve(7);
        assert_eq!(r.error_ref().map(|x| x.v), Some(7));
        drop(r);
        assert_eq!(x_instances(), 0);
    }
}
