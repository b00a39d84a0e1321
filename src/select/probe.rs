//! # Compile-Time Trait Probe
//!
//! `implements!(Type, Trait)` evaluates to a `const bool`.
//!
//! Uses the "Inherent Const Fallback" pattern: an inherent const shadows a
//! trait const when the bound is satisfied.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. In generic
//! code the fallback always wins; use an associated `Bool` there instead
//! (see `Position::RandomAccess`).

/// Check if a concrete type implements a trait at compile time.
///
/// # Usage
///
/// ```
/// use tola_variant::implements;
///
/// assert!(implements!(String, Clone));
/// assert!(!implements!(String, Copy));
///
/// trait MyTrait {}
/// impl MyTrait for i32 {}
/// assert!(implements!(i32, MyTrait));
/// ```
#[macro_export]
macro_rules! implements {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

#[cfg(test)]
mod tests {
    use crate::select::cursor::{CharCursor, JumpPosition, SliceCursor};

    #[test]
    fn test_probe_std_traits() {
        assert!(implements!(String, Clone));
        assert!(implements!(i32, Copy));
        assert!(!implements!(String, Copy));
        assert!(implements!(str, core::fmt::Display));
    }

    #[test]
    fn test_probe_cursor_capability() {
        assert!(implements!(SliceCursor<'static, u8>, JumpPosition));
        assert!(!implements!(CharCursor<'static>, JumpPosition));
    }

    #[test]
    fn test_probe_is_const() {
        const JUMPS: bool = implements!(SliceCursor<'static, u8>, JumpPosition);
        assert!(JUMPS);
    }
}
