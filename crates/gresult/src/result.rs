use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;

use crate::code::ErrorCode;
use crate::construct::{Emplace, Resolve};
use crate::errc::ResultErrc;
use crate::escalate::{raise, Escalate};

/// A value of type `T` or an error of type `E`.
///
/// Exactly one alternative is live at any time; there is no empty state.
/// A container built without arguments holds the
/// `ResultErrc::NotInitialized` sentinel error.
///
/// ```
/// use gresult::{GResult, ResultErrc};
///
/// let r: GResult<i32> = GResult::new();
/// assert!(r.has_error());
/// assert_eq!(r.error(), ResultErrc::NotInitialized);
///
/// let r: GResult<i32> = GResult::from_arg(5i32);
/// assert_eq!(*r.value(), 5);
/// assert_eq!(r.to_string(), "value:5");
/// ```
///
/// There is no `Deref` to `T`: copying needs both payloads to be `Clone`,
/// and value access goes through `value()` or `value_unchecked()`.
///
/// ```compile_fail
/// use gresult::GResult;
///
/// struct NoClone;
///
/// let r: GResult<String, NoClone> = GResult::from_value("x".to_string());
/// let _copy = r.clone();
/// ```
#[must_use]
pub struct GResult<T, E = ErrorCode> {
    repr: Repr<T, E>,
}

#[derive(Clone)]
enum Repr<T, E> {
    Value(T),
    Error(E),
}

// ── Constructors ──────────────────────────────────────────────────

impl<T, E> GResult<T, E> {
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self { repr: Repr::Value(value) }
    }

    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self { repr: Repr::Error(error) }
    }

    /// Build from one argument (or a tuple of arguments), choosing the
    /// alternative whose type converts from it.
    ///
    /// Fails to compile when both or neither alternative accept `A`.
    #[inline]
    pub fn from_arg<A, M>(arg: A) -> Self
    where
        Self: Resolve<A, M>,
    {
        <Self as Resolve<A, M>>::resolve(arg)
    }

    /// Build the alternative named by `tag` (`IN_PLACE_VALUE` or
    /// `IN_PLACE_ERROR`) from `args`.
    #[inline]
    pub fn in_place<Tag, A>(tag: Tag, args: A) -> Self
    where
        Self: Emplace<Tag, A>,
    {
        <Self as Emplace<Tag, A>>::emplace(tag, args)
    }
}

impl<T, E: From<ResultErrc>> GResult<T, E> {
    /// A container holding the `NotInitialized` sentinel error.
    #[inline]
    pub fn new() -> Self {
        Self::from_error(E::from(ResultErrc::NotInitialized))
    }

    /// Move the contents out, leaving `NotInitialized` behind.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T, E: From<ResultErrc>> Default for GResult<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E: From<ResultErrc>> From<ResultErrc> for GResult<T, E> {
    fn from(e: ResultErrc) -> Self {
        Self::from_error(E::from(e))
    }
}

// ── Queries ───────────────────────────────────────────────────────

impl<T, E> GResult<T, E> {
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        matches!(self.repr, Repr::Error(_))
    }

    /// The value, or `None` if an error is held.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match &self.repr {
            Repr::Value(v) => Some(v),
            Repr::Error(_) => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.repr {
            Repr::Value(v) => Some(v),
            Repr::Error(_) => None,
        }
    }

    /// The error, or `None` if a value is held.
    #[inline]
    pub fn error_ref(&self) -> Option<&E> {
        match &self.repr {
            Repr::Value(_) => None,
            Repr::Error(e) => Some(e),
        }
    }

    #[inline]
    pub fn error_mut(&mut self) -> Option<&mut E> {
        match &mut self.repr {
            Repr::Value(_) => None,
            Repr::Error(e) => Some(e),
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self.repr {
            Repr::Value(_) => None,
            Repr::Error(e) => Some(e),
        }
    }

    /// Borrowing view as a std `Result`.
    pub fn as_result(&self) -> Result<&T, &E> {
        match &self.repr {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(e),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self.repr {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(e),
        }
    }

    /// Exchange contents with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        match (&mut self.repr, &mut other.repr) {
            (Repr::Value(a), Repr::Value(b)) => mem::swap(a, b),
            (Repr::Error(a), Repr::Error(b)) => mem::swap(a, b),
            _ => mem::swap(self, other),
        }
    }
}

impl<T, E: PartialEq + From<ResultErrc>> GResult<T, E> {
    /// False only while the `NotInitialized` sentinel is held.
    pub fn is_initialized(&self) -> bool {
        match &self.repr {
            Repr::Value(_) => true,
            Repr::Error(e) => *e != E::from(ResultErrc::NotInitialized),
        }
    }
}

impl<T, E: Clone + Default> GResult<T, E> {
    /// A copy of the held error, or `E::default()` when a value is held.
    ///
    /// Never escalates.
    pub fn error(&self) -> E {
        match &self.repr {
            Repr::Value(_) => E::default(),
            Repr::Error(e) => e.clone(),
        }
    }
}

// ── Checked access ────────────────────────────────────────────────

impl<T, E: Escalate> GResult<T, E> {
    /// The held value.
    ///
    /// # Panics
    ///
    /// On an error-holding container, panics with `E::escalate()` as the
    /// panic payload.
    ///
    /// Error types without an [`Escalate`] impl have no checked access:
    ///
    /// ```compile_fail
    /// use gresult::{ErrorCode, GResult};
    ///
    /// struct Quiet;
    ///
    /// let r: GResult<ErrorCode, Quiet> = GResult::from_value(ErrorCode::default());
    /// let _ = r.value();
    /// ```
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.repr {
            Repr::Value(v) => v,
            Repr::Error(e) => raise(e),
        }
    }

    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.repr {
            Repr::Value(v) => v,
            Repr::Error(e) => raise(e),
        }
    }

    #[track_caller]
    pub fn into_value(self) -> T {
        match self.repr {
            Repr::Value(v) => v,
            Repr::Error(e) => raise(&e),
        }
    }

    /// The held value, or the escalated error without panicking.
    pub fn try_value(&self) -> Result<&T, E::Exception> {
        match &self.repr {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(e.escalate()),
        }
    }
}

// ── Unchecked access ──────────────────────────────────────────────

impl<T, E> GResult<T, E> {
    /// The held value, without escalation.
    ///
    /// # Panics
    ///
    /// If an error is held. Check `has_value()` first or use `get()`.
    #[inline]
    #[track_caller]
    pub fn value_unchecked(&self) -> &T {
        match &self.repr {
            Repr::Value(v) => v,
            Repr::Error(_) => panic!("unchecked access to a GResult that holds an error"),
        }
    }

    #[inline]
    #[track_caller]
    pub fn value_unchecked_mut(&mut self) -> &mut T {
        match &mut self.repr {
            Repr::Value(v) => v,
            Repr::Error(_) => panic!("unchecked access to a GResult that holds an error"),
        }
    }
}

// ── Copy / assignment ─────────────────────────────────────────────

impl<T: Clone, E: Clone> Clone for GResult<T, E> {
    fn clone(&self) -> Self {
        Self { repr: self.repr.clone() }
    }

    /// Same alternative: payload `clone_from`, reusing its storage.
    /// Otherwise the source is cloned before the old payload is dropped,
    /// so a panicking clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        match (&mut self.repr, &source.repr) {
            (Repr::Value(dst), Repr::Value(src)) => dst.clone_from(src),
            (Repr::Error(dst), Repr::Error(src)) => dst.clone_from(src),
            _ => *self = source.clone(),
        }
    }
}

/// Logs when an alternative switch unwinds out of `assign`.
struct ParkedOnSentinel;

impl Drop for ParkedOnSentinel {
    fn drop(&mut self) {
        crate::kwarn!("gresult: clone panicked during assignment; destination left not initialized");
    }
}

impl<T: Clone, E: Clone + From<ResultErrc>> GResult<T, E> {
    /// Copy-assign from `source`.
    ///
    /// Same alternative: payload `clone_from`. Different alternative: the
    /// current payload is dropped, `self` is parked on `NotInitialized`, and
    /// the source payload is cloned in. If that clone panics, `self` keeps
    /// holding `NotInitialized` and the panic propagates.
    pub fn assign(&mut self, source: &Self) {
        match (&mut self.repr, &source.repr) {
            (Repr::Value(dst), Repr::Value(src)) => dst.clone_from(src),
            (Repr::Error(dst), Repr::Error(src)) => dst.clone_from(src),
            _ => {
                self.repr = Repr::Error(E::from(ResultErrc::NotInitialized));
                let guard = ParkedOnSentinel;
                let repr = source.repr.clone();
                mem::forget(guard);
                self.repr = repr;
            }
        }
    }
}

impl<T, E> GResult<T, E> {
    /// Move-assign from `source`.
    ///
    /// Same alternative: payload-to-payload move. Different alternative:
    /// the current payload is dropped and replaced. Moves cannot panic.
    pub fn assign_move(&mut self, source: Self) {
        match (&mut self.repr, source.repr) {
            (Repr::Value(dst), Repr::Value(src)) => *dst = src,
            (Repr::Error(dst), Repr::Error(src)) => *dst = src,
            (_, repr) => self.repr = repr,
        }
    }
}

// ── Comparison ────────────────────────────────────────────────────

impl<T, E, T2, E2> PartialEq<GResult<T2, E2>> for GResult<T, E>
where
    T: PartialEq<T2>,
    E: PartialEq<E2>,
{
    fn eq(&self, other: &GResult<T2, E2>) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Value(a), Repr::Value(b)) => a == b,
            (Repr::Error(a), Repr::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for GResult<T, E> {}

impl<T: Hash, E: Hash> Hash for GResult<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            Repr::Value(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            Repr::Error(e) => {
                1u8.hash(state);
                e.hash(state);
            }
        }
    }
}

// ── Display / Debug ───────────────────────────────────────────────

impl<T: fmt::Display, E: fmt::Display> fmt::Display for GResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(v) => write!(f, "value:{}", v),
            Repr::Error(e) => write!(f, "error:{}", e),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for GResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(v) => f.debug_tuple("GResult::Value").field(v).finish(),
            Repr::Error(e) => f.debug_tuple("GResult::Error").field(e).finish(),
        }
    }
}
