//! Error categories and the process-wide category registry.
//!
//! A category names an error domain and turns raw values into messages.
//! The built-in categories live in a registry that is built on first use
//! and never changes afterwards.
//!
//! | Category   | Id | Values                                   |
//! |------------|----|------------------------------------------|
//! | `system`   | 1  | raw OS error codes                       |
//! | `generic`  | 2  | POSIX errno values (see [`Errc`])        |
//! | `boost::result` | 3 | [`ResultErrc`]                      |
//!
//! [`Errc`]: crate::Errc
//! [`ResultErrc`]: crate::ResultErrc

use core::fmt;

use once_cell::sync::Lazy;

use crate::errc::{Errc, ResultErrc};
use crate::GlobalId;

pub const CAT_SYSTEM: GlobalId = GlobalId::new("system", 1);
pub const CAT_GENERIC: GlobalId = GlobalId::new("generic", 2);
pub const CAT_RESULT: GlobalId = GlobalId::new("boost::result", 3);

/// An error domain.
///
/// Implementors are expected to be `'static` singletons; `ErrorCode` holds
/// a `&'static dyn ErrorCategory`.
pub trait ErrorCategory: Send + Sync + 'static {
    /// Stable identifier used for equality between categories.
    ///
    /// Categories returning `GlobalId::UNSET` are compared by address.
    fn id(&self) -> GlobalId {
        GlobalId::UNSET
    }

    /// Human-readable category name.
    fn name(&self) -> &'static str;

    /// Message for a raw value in this category.
    fn message(&self, value: i32) -> String;
}

impl fmt::Debug for dyn ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCategory({})", self.name())
    }
}

/// True if `a` and `b` are the same category.
pub fn same_category(a: &dyn ErrorCategory, b: &dyn ErrorCategory) -> bool {
    let (ia, ib) = (a.id(), b.id());
    if ia.is_unset() || ib.is_unset() {
        core::ptr::addr_eq(a, b)
    } else {
        ia == ib
    }
}

// ── Built-in categories ───────────────────────────────────────────

/// Raw operating-system error codes.
pub struct SystemCategory;

impl ErrorCategory for SystemCategory {
    fn id(&self) -> GlobalId {
        CAT_SYSTEM
    }

    fn name(&self) -> &'static str {
        "system"
    }

    fn message(&self, value: i32) -> String {
        if value == 0 {
            return "Success".to_string();
        }
        let msg = std::io::Error::from_raw_os_error(value).to_string();
        // std appends " (os error N)"; the code itself is shown elsewhere.
        match msg.rfind(" (os error ") {
            Some(idx) => msg[..idx].to_string(),
            None => msg,
        }
    }
}

/// Portable errno conditions.
pub struct GenericCategory;

impl ErrorCategory for GenericCategory {
    fn id(&self) -> GlobalId {
        CAT_GENERIC
    }

    fn name(&self) -> &'static str {
        "generic"
    }

    fn message(&self, value: i32) -> String {
        match Errc::from_raw(value) {
            Some(errc) => errc.description().to_string(),
            None if value == 0 => "Success".to_string(),
            None => format!("Unknown error {}", value),
        }
    }
}

/// The `boost::result` domain. Owns exactly one condition.
pub struct ResultCategory;

impl ErrorCategory for ResultCategory {
    fn id(&self) -> GlobalId {
        CAT_RESULT
    }

    fn name(&self) -> &'static str {
        "boost::result"
    }

    fn message(&self, value: i32) -> String {
        match ResultErrc::from_raw(value) {
            Some(ResultErrc::NotInitialized) => "result<> not initialized".to_string(),
            None => "unknown result<> error".to_string(),
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────

/// The built-in categories, initialized once.
pub struct CategoryRegistry {
    system: SystemCategory,
    generic: GenericCategory,
    result: ResultCategory,
}

static REGISTRY: Lazy<CategoryRegistry> = Lazy::new(|| {
    crate::kdebug!("gresult: category registry initialized");
    CategoryRegistry {
        system: SystemCategory,
        generic: GenericCategory,
        result: ResultCategory,
    }
});

/// The process-wide registry.
#[inline]
pub fn registry() -> &'static CategoryRegistry {
    &REGISTRY
}

impl CategoryRegistry {
    pub fn system(&'static self) -> &'static dyn ErrorCategory {
        &self.system
    }

    pub fn generic(&'static self) -> &'static dyn ErrorCategory {
        &self.generic
    }

    pub fn result(&'static self) -> &'static dyn ErrorCategory {
        &self.result
    }

    /// All registered categories, in id order.
    pub fn iter(&'static self) -> impl Iterator<Item = &'static dyn ErrorCategory> {
        [self.system(), self.generic(), self.result()].into_iter()
    }

    /// Find a category by name.
    pub fn lookup(&'static self, name: &str) -> Option<&'static dyn ErrorCategory> {
        self.iter().find(|c| c.name() == name)
    }

    /// Find a category by id.
    pub fn by_id(&'static self, id: GlobalId) -> Option<&'static dyn ErrorCategory> {
        if id.is_unset() {
            return None;
        }
        self.iter().find(|c| c.id() == id)
    }
}

#[inline]
pub fn system_category() -> &'static dyn ErrorCategory {
    registry().system()
}

#[inline]
pub fn generic_category() -> &'static dyn ErrorCategory {
    registry().generic()
}

/// The category of [`ResultErrc`](crate::ResultErrc), named `"boost::result"`.
#[inline]
pub fn result_category() -> &'static dyn ErrorCategory {
    registry().result()
}
