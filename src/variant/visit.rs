//! Visitation over the active alternative.
//!
//! A visitor is any type with one `Visitor<T>` impl per alternative, all
//! agreeing on `Output`. `#[derive(Variant)]` implements `Visit<V>` only for
//! visitors that cover every alternative, so a missing case is a trait-bound
//! error at the call site:
//!
//! ```text
//! error[E0277]: the trait bound `Printer: Visitor<String>` is not satisfied
//! ```
//!
//! A single blanket impl (`impl<T: Display> Visitor<T> for Show`) acts as the
//! generic fallback for every alternative satisfying its bound.

use tracing::trace;

use super::Variant;

/// One case of a visitor: the operation run when `T` is active.
pub trait Visitor<T: ?Sized> {
    type Output;

    fn visit(&mut self, value: &T) -> Self::Output;
}

/// Like `Visitor`, but receives the payload mutably.
pub trait VisitorMut<T: ?Sized> {
    type Output;

    fn visit_mut(&mut self, value: &mut T) -> Self::Output;
}

/// Dispatch to the visitor case matching the active alternative.
///
/// Implemented by `#[derive(Variant)]` for every `V` that covers all
/// alternatives with the same `Output`.
pub trait Visit<V: ?Sized>: Variant {
    type Output;

    fn accept(&self, visitor: &mut V) -> Self::Output;
}

pub trait VisitMut<V: ?Sized>: Variant {
    type Output;

    fn accept_mut(&mut self, visitor: &mut V) -> Self::Output;
}

/// Invoke exactly the case of `visitor` matching the active alternative.
pub fn visit<U, V>(variant: &U, visitor: &mut V) -> <U as Visit<V>>::Output
where
    U: Visit<V>,
    V: ?Sized,
{
    trace!(variant = U::NAME, alternative = variant.alternative_name(), "visit");
    variant.accept(visitor)
}

pub fn visit_mut<U, V>(variant: &mut U, visitor: &mut V) -> <U as VisitMut<V>>::Output
where
    U: VisitMut<V>,
    V: ?Sized,
{
    trace!(variant = U::NAME, alternative = variant.alternative_name(), "visit_mut");
    variant.accept_mut(visitor)
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, crate::Variant)]
    enum Token {
        Number(u64),
        Word(String),
    }

    struct Width;

    impl Visitor<u64> for Width {
        type Output = usize;
        fn visit(&mut self, value: &u64) -> usize {
            value.to_string().len()
        }
    }

    impl Visitor<String> for Width {
        type Output = usize;
        fn visit(&mut self, value: &String) -> usize {
            value.chars().count()
        }
    }

    struct Clear;

    impl<T: Default> VisitorMut<T> for Clear {
        type Output = ();
        fn visit_mut(&mut self, value: &mut T) {
            *value = T::default();
        }
    }

    #[test]
    fn test_visit_active_case() {
        assert_eq!(visit(&Token::from(12345_u64), &mut Width), 5);
        assert_eq!(visit(&Token::from("héllo".to_string()), &mut Width), 5);
    }

    #[test]
    fn test_visit_mut_keeps_alternative() {
        let mut token = Token::from("x".to_string());
        visit_mut(&mut token, &mut Clear);
        assert_eq!(token, Token::Word(String::new()));
        assert!(token.holds::<String>());
    }
}
