/// A named numeric identifier for an error category.
///
/// Every `ErrorCategory` exposes one. Two `ErrorCode`s belong to the same
/// category iff their category ids compare equal, so equality is by `code`
/// only and the name is purely diagnostic.
///
/// In production builds (`--features production`), the `name` field is
/// stripped. `ErrorCategory::name()` still returns the full category name;
/// only the id loses it.
///
/// # Code ranges
///
/// | Range        | Owner                         |
/// |--------------|-------------------------------|
/// | `0`          | `UNSET`                       |
/// | `1..=99`     | built-in gresult categories   |
/// | `100+`       | user categories               |
#[derive(Clone, Copy)]
pub struct GlobalId {
    #[cfg(not(feature = "production"))]
    pub name: &'static str,
    pub code: u64,
}

impl GlobalId {
    /// Construct a new GlobalId.
    ///
    /// ```
    /// use gresult::GlobalId;
    /// const CAT_PARSER: GlobalId = GlobalId::new("parser", 100);
    /// assert_eq!(CAT_PARSER.code, 100);
    /// ```
    #[cfg(not(feature = "production"))]
    pub const fn new(name: &'static str, code: u64) -> Self {
        Self { name, code }
    }

    #[cfg(feature = "production")]
    pub const fn new(_name: &'static str, code: u64) -> Self {
        Self { code }
    }

    /// Sentinel for categories that never registered an id.
    pub const UNSET: GlobalId = GlobalId::new("unset", 0);

    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.code == 0
    }
}

impl PartialEq for GlobalId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for GlobalId {}

impl core::hash::Hash for GlobalId {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl core::fmt::Debug for GlobalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        #[cfg(not(feature = "production"))]
        {
            write!(f, "{}({})", self.name, self.code)
        }
        #[cfg(feature = "production")]
        {
            write!(f, "{}", self.code)
        }
    }
}

impl core::fmt::Display for GlobalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        #[cfg(not(feature = "production"))]
        {
            write!(f, "{}", self.name)
        }
        #[cfg(feature = "production")]
        {
            write!(f, "{}", self.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_name() {
        let a = GlobalId::new("alpha", 10);
        let b = GlobalId::new("beta", 10);
        assert_eq!(a, b);
        assert_ne!(a, GlobalId::new("alpha", 11));
    }

    #[test]
    fn unset_sentinel() {
        assert!(GlobalId::UNSET.is_unset());
        assert!(!GlobalId::new("x", 1).is_unset());
    }

    #[test]
    fn display_and_debug() {
        let id = GlobalId::new("generic", 2);
        #[cfg(not(feature = "production"))]
        {
            assert_eq!(format!("{}", id), "generic");
            assert_eq!(format!("{:?}", id), "generic(2)");
        }
        #[cfg(feature = "production")]
        {
            assert_eq!(format!("{}", id), "2");
            assert_eq!(format!("{:?}", id), "2");
        }
    }
}
