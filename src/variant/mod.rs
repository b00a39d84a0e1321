//! # Layer 1: Closed-Alternative Container
//!
//! A `Variant` is an enum whose every variant carries exactly one value, and
//! whose payload types are pairwise distinct. The payload type then works as
//! the tag: `holds::<String>()`, `get::<String>()`, `String` visitors.
//!
//! ```text
//! #[derive(Variant)]            Variant          (index, names)
//! enum Value {           ==>    Alternative<i64> (INDEX = 0, wrap, peek)
//!     Int(i64),                 Alternative<String> (INDEX = 1, ...)
//!     Text(String),             From<i64>, From<String>, Default
//! }                             Visit<V>, VisitMut<V>, visit_with(..)
//! ```
//!
//! ## Usage
//!
//! ```
//! use tola_variant::prelude::*;
//!
//! #[derive(Debug, Variant)]
//! enum Value {
//!     Int(i64),
//!     Text(String),
//! }
//!
//! let mut v = Value::from(42_i64);
//! assert!(v.holds::<i64>());
//! assert_eq!(v.get::<i64>(), Ok(&42));
//! assert!(v.get::<String>().is_err());
//!
//! v.set(String::from("abc"));
//! assert_eq!(v.get_if::<String>().map(String::as_str), Some("abc"));
//! ```

pub mod visit;

use core::fmt;

use tracing::{debug, trace};

use crate::error::{BadVariantAccess, Result};

pub use visit::{Visit, VisitMut, Visitor, VisitorMut, visit, visit_mut};

// =============================================================================
// Variant - the container itself
// =============================================================================

/// A closed set of alternatives, exactly one of which is active.
///
/// Usually implemented through `#[derive(Variant)]`. Hand-written impls must
/// keep `index()` in sync with the `Alternative::INDEX` of the held payload.
pub trait Variant: Sized {
    /// Name of the container type.
    const NAME: &'static str;

    /// Alternative names, in declaration order.
    const ALTERNATIVES: &'static [&'static str];

    /// Position of the active alternative in `ALTERNATIVES`.
    fn index(&self) -> usize;

    /// `core::any::type_name` of the active payload.
    fn type_name(&self) -> &'static str;

    fn alternative_name(&self) -> &'static str {
        Self::ALTERNATIVES[self.index()]
    }

    /// Does the container currently hold a `T`?
    #[inline]
    fn holds<T>(&self) -> bool
    where
        Self: Alternative<T>,
    {
        self.index() == <Self as Alternative<T>>::INDEX
    }

    /// Borrow the payload, asserting that `T` is active.
    fn get<T>(&self) -> Result<&T>
    where
        Self: Alternative<T>,
    {
        match <Self as Alternative<T>>::peek(self) {
            Some(value) => Ok(value),
            None => Err(report(mismatch::<Self, T>(self))),
        }
    }

    /// Mutably borrow the payload, asserting that `T` is active.
    fn get_mut<T>(&mut self) -> Result<&mut T>
    where
        Self: Alternative<T>,
    {
        let err = mismatch::<Self, T>(self);
        match <Self as Alternative<T>>::peek_mut(self) {
            Some(value) => Ok(value),
            None => Err(report(err)),
        }
    }

    /// Borrow the payload if `T` is active. Never fails.
    #[inline]
    fn get_if<T>(&self) -> Option<&T>
    where
        Self: Alternative<T>,
    {
        <Self as Alternative<T>>::peek(self)
    }

    #[inline]
    fn get_if_mut<T>(&mut self) -> Option<&mut T>
    where
        Self: Alternative<T>,
    {
        <Self as Alternative<T>>::peek_mut(self)
    }

    /// Move the payload out, asserting that `T` is active.
    fn into_alternative<T>(self) -> Result<T>
    where
        Self: Alternative<T>,
    {
        <Self as Alternative<T>>::unwrap_alternative(self)
            .map_err(|this| report(mismatch::<Self, T>(&this)))
    }

    /// Reassign to hold `value`. The previous payload is dropped.
    fn set<T>(&mut self, value: T)
    where
        Self: Alternative<T>,
    {
        drop(self.replace(value));
    }

    /// Reassign to hold `value`, returning the previous container.
    fn replace<T>(&mut self, value: T) -> Self
    where
        Self: Alternative<T>,
    {
        trace!(
            variant = Self::NAME,
            from = self.alternative_name(),
            to = Self::ALTERNATIVES[<Self as Alternative<T>>::INDEX],
            "reassign"
        );
        core::mem::replace(self, <Self as Alternative<T>>::wrap(value))
    }
}

/// One member `T` of a variant's closed alternative set.
pub trait Alternative<T>: Variant {
    /// Declaration position of `T`.
    const INDEX: usize;

    fn wrap(value: T) -> Self;

    fn peek(&self) -> Option<&T>;

    fn peek_mut(&mut self) -> Option<&mut T>;

    /// Take the payload, or give the container back untouched.
    fn unwrap_alternative(self) -> core::result::Result<T, Self>;
}

fn mismatch<V: Alternative<T>, T>(variant: &V) -> BadVariantAccess {
    BadVariantAccess {
        variant: V::NAME,
        expected: V::ALTERNATIVES[<V as Alternative<T>>::INDEX],
        active: variant.alternative_name(),
    }
}

fn report(err: BadVariantAccess) -> BadVariantAccess {
    debug!(
        variant = err.variant,
        expected = err.expected,
        active = err.active,
        "bad variant access"
    );
    err
}

// =============================================================================
// Monostate
// =============================================================================

/// Explicit "empty" alternative.
///
/// Put it first when no other alternative has a sensible default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monostate;

impl fmt::Display for Monostate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("monostate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-written impl, the shape #[derive(Variant)] produces.
    #[derive(Debug, PartialEq)]
    enum Slot {
        Empty(Monostate),
        Count(u32),
    }

    impl Variant for Slot {
        const NAME: &'static str = "Slot";
        const ALTERNATIVES: &'static [&'static str] = &["Empty", "Count"];

        fn index(&self) -> usize {
            match self {
                Slot::Empty(_) => 0,
                Slot::Count(_) => 1,
            }
        }

        fn type_name(&self) -> &'static str {
            match self {
                Slot::Empty(_) => core::any::type_name::<Monostate>(),
                Slot::Count(_) => core::any::type_name::<u32>(),
            }
        }
    }

    impl Alternative<Monostate> for Slot {
        const INDEX: usize = 0;
        fn wrap(value: Monostate) -> Self { Slot::Empty(value) }
        fn peek(&self) -> Option<&Monostate> {
            match self { Slot::Empty(v) => Some(v), _ => None }
        }
        fn peek_mut(&mut self) -> Option<&mut Monostate> {
            match self { Slot::Empty(v) => Some(v), _ => None }
        }
        fn unwrap_alternative(self) -> core::result::Result<Monostate, Self> {
            match self { Slot::Empty(v) => Ok(v), other => Err(other) }
        }
    }

    impl Alternative<u32> for Slot {
        const INDEX: usize = 1;
        fn wrap(value: u32) -> Self { Slot::Count(value) }
        fn peek(&self) -> Option<&u32> {
            match self { Slot::Count(v) => Some(v), _ => None }
        }
        fn peek_mut(&mut self) -> Option<&mut u32> {
            match self { Slot::Count(v) => Some(v), _ => None }
        }
        fn unwrap_alternative(self) -> core::result::Result<u32, Self> {
            match self { Slot::Count(v) => Ok(v), other => Err(other) }
        }
    }

    #[test]
    fn test_queries_follow_active_alternative() {
        let mut slot = Slot::Empty(Monostate);
        assert!(slot.holds::<Monostate>());
        assert!(!slot.holds::<u32>());
        assert_eq!(slot.alternative_name(), "Empty");

        slot.set(7_u32);
        assert!(slot.holds::<u32>());
        assert_eq!(slot.index(), 1);
        assert_eq!(slot.type_name(), "u32");
        assert_eq!(slot.get_if::<Monostate>(), None);
    }

    #[test]
    fn test_get_mut_and_replace() {
        let mut slot = Slot::Count(1);
        *slot.get_mut::<u32>().unwrap() += 1;
        assert_eq!(slot.get::<u32>(), Ok(&2));

        let previous = slot.replace(Monostate);
        assert_eq!(previous, Slot::Count(2));
        assert_eq!(
            slot.get_mut::<u32>().unwrap_err(),
            BadVariantAccess { variant: "Slot", expected: "Count", active: "Empty" }
        );
    }

    #[test]
    fn test_into_alternative() {
        assert_eq!(Slot::Count(9).into_alternative::<u32>(), Ok(9));
        let err = Slot::Count(9).into_alternative::<Monostate>().unwrap_err();
        assert_eq!(err.expected, "Empty");
        assert_eq!(err.active, "Count");
    }

    #[test]
    fn test_monostate_display() {
        assert_eq!(Monostate.to_string(), "monostate");
        assert_eq!(Monostate::default(), Monostate);
    }
}
