//! Cursor advancing: one jump for random-access cursors, single steps otherwise.
//!
//! ```
//! use std::collections::LinkedList;
//! use tola_variant::select::cursor::{advance, Jumped, ListCursor, Position, SliceCursor, Stepped};
//!
//! let data = [1, 2, 3, 4, 5];
//! let mut fast = SliceCursor::new(&data);
//! let _: Jumped = advance(&mut fast, 3);
//!
//! let list: LinkedList<i32> = data.iter().copied().collect();
//! let mut slow = ListCursor::new(&list);
//! let stepped: Stepped = advance(&mut slow, 3);
//!
//! assert_eq!(fast.current(), Some(&4));
//! assert_eq!(slow.current(), Some(&4));
//! assert_eq!(stepped.steps, 3);
//! ```

use std::collections::linked_list::{self, LinkedList};
use std::str::Chars;

use crate::primitives::{Absent, Bool, Present};
use super::{Branch, Choose, select};

// =============================================================================
// Cursor capabilities
// =============================================================================

/// A position inside a sequence.
///
/// Moving past the end parks the cursor there; `current()` then yields `None`.
pub trait Position {
    type Item: ?Sized;

    /// `Present` if the cursor also implements `JumpPosition`.
    type RandomAccess: Bool;

    fn current(&self) -> Option<&Self::Item>;

    /// Move to the next element.
    fn step(&mut self);

    /// Number of elements before the current one.
    fn offset(&self) -> usize;
}

/// A position that can move `n` elements at once.
pub trait JumpPosition: Position {
    fn jump(&mut self, n: usize);
}

// =============================================================================
// Cursors
// =============================================================================

/// Random-access cursor over a slice.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, pos: 0 }
    }
}

impl<T> Position for SliceCursor<'_, T> {
    type Item = T;
    type RandomAccess = Present;

    fn current(&self) -> Option<&T> {
        self.items.get(self.pos)
    }

    fn step(&mut self) {
        self.jump(1);
    }

    fn offset(&self) -> usize {
        self.pos
    }
}

impl<T> JumpPosition for SliceCursor<'_, T> {
    fn jump(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.items.len());
    }
}

/// Single-step cursor over a linked list.
#[derive(Debug, Clone)]
pub struct ListCursor<'a, T> {
    rest: linked_list::Iter<'a, T>,
    current: Option<&'a T>,
    offset: usize,
}

impl<'a, T> ListCursor<'a, T> {
    pub fn new(list: &'a LinkedList<T>) -> Self {
        let mut rest = list.iter();
        let current = rest.next();
        Self { rest, current, offset: 0 }
    }
}

impl<T> Position for ListCursor<'_, T> {
    type Item = T;
    type RandomAccess = Absent;

    fn current(&self) -> Option<&T> {
        self.current
    }

    fn step(&mut self) {
        if self.current.is_some() {
            self.current = self.rest.next();
            self.offset += 1;
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

/// Single-step cursor over the chars of a string.
///
/// UTF-8 has no fixed-width elements, so there is no jump.
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    rest: Chars<'a>,
    current: Option<char>,
    offset: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut rest = text.chars();
        let current = rest.next();
        Self { rest, current, offset: 0 }
    }
}

impl Position for CharCursor<'_> {
    type Item = char;
    type RandomAccess = Absent;

    fn current(&self) -> Option<&char> {
        self.current.as_ref()
    }

    fn step(&mut self) {
        if self.current.is_some() {
            self.current = self.rest.next();
            self.offset += 1;
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

// =============================================================================
// advance
// =============================================================================

/// Result of advancing a random-access cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jumped;

/// Result of advancing a single-step cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepped {
    pub steps: usize,
}

/// Body: one `jump(n)`.
pub struct JumpAhead;

/// Body: `n` calls to `step()`.
pub struct StepAhead;

impl<'c, P: JumpPosition> Branch<(&'c mut P, usize)> for JumpAhead {
    type Output = Jumped;

    #[inline]
    fn run((pos, n): (&'c mut P, usize)) -> Jumped {
        pos.jump(n);
        Jumped
    }
}

impl<'c, P: Position> Branch<(&'c mut P, usize)> for StepAhead {
    type Output = Stepped;

    #[inline]
    fn run((pos, n): (&'c mut P, usize)) -> Stepped {
        for _ in 0..n {
            pos.step();
        }
        Stepped { steps: n }
    }
}

/// Output of `advance` for cursor `P`.
pub type Advanced<'c, P> =
    <<P as Position>::RandomAccess as Choose<JumpAhead, StepAhead, (&'c mut P, usize)>>::Output;

/// Move `pos` forward by `n` elements.
///
/// Random-access cursors jump once and return `Jumped`; the rest step `n`
/// times and return `Stepped`. Both land on the same element.
pub fn advance<'c, P>(pos: &'c mut P, n: usize) -> Advanced<'c, P>
where
    P: Position,
    P::RandomAccess: Choose<JumpAhead, StepAhead, (&'c mut P, usize)>,
{
    select::<P::RandomAccess, JumpAhead, StepAhead, _>((pos, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_cursor_jumps() {
        let data = [10, 20, 30, 40];
        let mut cursor = SliceCursor::new(&data);
        let result = advance(&mut cursor, 2);
        assert_eq!(result, Jumped);
        assert_eq!(cursor.current(), Some(&30));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_list_cursor_steps() {
        let list: LinkedList<i32> = (1..=10).collect();
        let mut cursor = ListCursor::new(&list);
        let result = advance(&mut cursor, 3);
        assert_eq!(result, Stepped { steps: 3 });
        assert_eq!(cursor.current(), Some(&4));
    }

    #[test]
    fn test_char_cursor_steps_over_multibyte() {
        let mut cursor = CharCursor::new("zażółć");
        advance(&mut cursor, 3);
        assert_eq!(cursor.current(), Some(&'ó'));
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_past_the_end_parks() {
        let data = [1, 2];
        let mut fast = SliceCursor::new(&data);
        advance(&mut fast, 5);
        assert_eq!(fast.current(), None);
        assert_eq!(fast.offset(), 2);

        let list: LinkedList<i32> = data.iter().copied().collect();
        let mut slow = ListCursor::new(&list);
        advance(&mut slow, 5);
        assert_eq!(slow.current(), None);
        assert_eq!(slow.offset(), 2);
    }
}
