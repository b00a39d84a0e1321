//! Heterogeneous lists.
//!
//! `render` joins the elements with single spaces. Whether a separator and a
//! recursive call follow the head is decided by `Tail::IsEmpty`, so `HNil`
//! never has to render anything.

use core::fmt::{self, Display, Write};

use crate::primitives::{Absent, Bool, Present};
use crate::variant::Visitor;
use super::{Branch, Choose, select};

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HNil;

/// A head element followed by the rest of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

pub trait HList {
    const LEN: usize;
    type IsEmpty: Bool;
}

impl HList for HNil {
    const LEN: usize = 0;
    type IsEmpty = Present;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
    type IsEmpty = Absent;
}

// =============================================================================
// Render
// =============================================================================

/// Space-separated rendering of a non-empty list.
pub trait Render {
    fn render_into(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Body: nothing follows the head.
pub struct Last;

/// Body: a separator, then the rest.
pub struct More;

impl<'a, 'b, T> Branch<(&'a T, &'b mut String)> for Last {
    type Output = ();

    #[inline]
    fn run(_: (&'a T, &'b mut String)) {}
}

impl<'a, 'b, T: Render> Branch<(&'a T, &'b mut String)> for More {
    type Output = ();

    #[inline]
    fn run((tail, out): (&'a T, &'b mut String)) {
        out.push(' ');
        tail.render_into(out);
    }
}

impl<H: Display, T: HList> Render for HCons<H, T>
where
    T::IsEmpty: for<'a, 'b> Choose<Last, More, (&'a T, &'b mut String), Output = ()>,
{
    fn render_into(&self, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", self.head);
        select::<T::IsEmpty, Last, More, _>((&self.tail, out));
    }
}

impl<H: Display, T: HList> Display for HCons<H, T>
where
    Self: Render,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// =============================================================================
// ForEach
// =============================================================================

/// Apply one visitor to every element, front to back.
///
/// The visitor needs a `Visitor<H>` case for each element type `H`.
pub trait ForEach<V: ?Sized> {
    fn for_each(&self, visitor: &mut V);
}

impl<V: ?Sized> ForEach<V> for HNil {
    #[inline]
    fn for_each(&self, _visitor: &mut V) {}
}

impl<V, H, T> ForEach<V> for HCons<H, T>
where
    V: Visitor<H> + ?Sized,
    T: ForEach<V>,
{
    fn for_each(&self, visitor: &mut V) {
        visitor.visit(&self.head);
        self.tail.for_each(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(<HNil as HList>::LEN, 0);
        let list = crate::hlist![1, "two", 3.0];
        fn len_of<L: HList>(_: &L) -> usize { L::LEN }
        assert_eq!(len_of(&list), 3);
    }

    #[test]
    fn test_render_joins_with_spaces() {
        assert_eq!(crate::hlist![1, 3.14, "abc"].render(), "1 3.14 abc");
        assert_eq!(crate::hlist!["single"].render(), "single");
        assert_eq!(crate::hlist![1, 2].to_string(), "1 2");
    }

    struct Collect(Vec<String>);

    impl<T: Display> Visitor<T> for Collect {
        type Output = ();
        fn visit(&mut self, value: &T) {
            self.0.push(format!("foo({})", value));
        }
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut collect = Collect(Vec::new());
        crate::hlist![1, 3.14, "test"].for_each(&mut collect);
        assert_eq!(collect.0, ["foo(1)", "foo(3.14)", "foo(test)"]);
    }
}
