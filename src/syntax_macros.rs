//! Construction macros
//!
//! `#[derive(Variant)]` lives in the `macros` crate; the declarative sugar is here.

// =============================================================================
// hlist! - Build a heterogeneous list
// =============================================================================

/// Build an `HCons` chain ending in `HNil`.
///
/// # Example
///
/// ```
/// use tola_variant::hlist;
/// use tola_variant::select::list::Render;
///
/// let list = hlist![1, 3.14, "abc"];
/// assert_eq!(list.render(), "1 3.14 abc");
/// ```
#[macro_export]
macro_rules! hlist {
    () => {
        $crate::select::list::HNil
    };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::select::list::HCons {
            head: $head,
            tail: $crate::hlist!($($rest),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::select::list::{HCons, HNil};

    #[test]
    fn test_hlist_macro() {
        assert_eq!(hlist![], HNil);
        assert_eq!(hlist![1, 'x',], HCons { head: 1, tail: HCons { head: 'x', tail: HNil } });
    }
}
