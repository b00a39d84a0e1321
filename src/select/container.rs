//! Adding an element: `push_back` for sequences, `insert` for sets.
//!
//! The result type follows the container: sequences return `()`, sets
//! return whether the element was newly inserted.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::primitives::{Absent, Bool, Present};
use super::{Branch, Choose, select};

pub trait Container {
    type Item;

    /// `Present` for sequences (`PushBack`), `Absent` for sets (`InsertItem`).
    type Sequential: Bool;
}

pub trait PushBack: Container {
    fn push_back(&mut self, item: Self::Item);
}

pub trait InsertItem: Container {
    /// Returns `false` if an equal item was already present.
    fn insert_item(&mut self, item: Self::Item) -> bool;
}

impl<T> Container for Vec<T> {
    type Item = T;
    type Sequential = Present;
}

impl<T> PushBack for Vec<T> {
    fn push_back(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;
    type Sequential = Present;
}

impl<T> PushBack for VecDeque<T> {
    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }
}

impl<T> Container for LinkedList<T> {
    type Item = T;
    type Sequential = Present;
}

impl<T> PushBack for LinkedList<T> {
    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item);
    }
}

impl<T> Container for BTreeSet<T> {
    type Item = T;
    type Sequential = Absent;
}

impl<T: Ord> InsertItem for BTreeSet<T> {
    fn insert_item(&mut self, item: T) -> bool {
        self.insert(item)
    }
}

impl<T, S> Container for HashSet<T, S> {
    type Item = T;
    type Sequential = Absent;
}

impl<T: Eq + Hash, S: BuildHasher> InsertItem for HashSet<T, S> {
    fn insert_item(&mut self, item: T) -> bool {
        self.insert(item)
    }
}

/// Body: append at the back.
pub struct Append;

/// Body: insert into a set.
pub struct Insert;

impl<'c, C: PushBack> Branch<(&'c mut C, C::Item)> for Append {
    type Output = ();

    #[inline]
    fn run((container, item): (&'c mut C, C::Item)) {
        container.push_back(item);
    }
}

impl<'c, C: InsertItem> Branch<(&'c mut C, C::Item)> for Insert {
    type Output = bool;

    #[inline]
    fn run((container, item): (&'c mut C, C::Item)) -> bool {
        container.insert_item(item)
    }
}

/// Output of `add_to_container` for container `C`.
pub type Added<'c, C> =
    <<C as Container>::Sequential as Choose<Append, Insert, (&'c mut C, <C as Container>::Item)>>::Output;

/// Add `item` the way `container` supports.
pub fn add_to_container<'c, C>(container: &'c mut C, item: C::Item) -> Added<'c, C>
where
    C: Container,
    C::Sequential: Choose<Append, Insert, (&'c mut C, C::Item)>,
{
    select::<C::Sequential, Append, Insert, _>((container, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_append() {
        let mut vec = vec![1, 2];
        add_to_container(&mut vec, 3);
        assert_eq!(vec, [1, 2, 3]);

        let mut deque = VecDeque::from([1]);
        let () = add_to_container(&mut deque, 2);
        assert_eq!(deque, [1, 2]);
    }

    #[test]
    fn test_sets_insert() {
        let mut set = BTreeSet::from([1, 2]);
        assert!(add_to_container(&mut set, 3));
        assert!(!add_to_container(&mut set, 1));
        assert_eq!(set.len(), 3);

        let mut names: HashSet<String> = HashSet::new();
        assert!(add_to_container(&mut names, "ada".to_string()));
        assert!(!add_to_container(&mut names, "ada".to_string()));
    }
}
