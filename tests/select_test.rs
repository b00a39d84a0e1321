//! Compile-time branch selection: only the selected body is observable.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use tola_variant::implements;
use tola_variant::prelude::*;
use tola_variant::select::container::add_to_container;
use tola_variant::select::cursor::{
    advance, CharCursor, JumpPosition, Jumped, ListCursor, Position, SliceCursor, Stepped,
};
use tola_variant::select::numeric::is_power_of_two;

// =============================================================================
// advance: jump vs. steps
// =============================================================================

#[test]
fn test_random_access_jumps() {
    let data: Vec<i32> = (1..=10).collect();
    let mut it = SliceCursor::new(&data);

    let result: Jumped = advance(&mut it, 3);

    assert_eq!(result, Jumped);
    assert_eq!(it.current(), Some(&4));
}

#[test]
fn test_single_step_steps() {
    let data: LinkedList<i32> = (1..=10).collect();
    let mut it = ListCursor::new(&data);

    let result: Stepped = advance(&mut it, 3);

    assert_eq!(result.steps, 3);
    assert_eq!(it.current(), Some(&4));
}

#[test]
fn test_both_strategies_land_on_same_element() {
    let vec: Vec<i32> = (0..20).map(|x| x * x).collect();
    let list: LinkedList<i32> = vec.iter().copied().collect();

    for start in 0..5 {
        for n in [0, 1, 3, 7, 40] {
            let mut fast = SliceCursor::new(&vec);
            let mut slow = ListCursor::new(&list);
            advance(&mut fast, start);
            advance(&mut slow, start);

            advance(&mut fast, n);
            advance(&mut slow, n);

            assert_eq!(fast.current(), slow.current(), "start {} n {}", start, n);
            assert_eq!(fast.offset(), slow.offset());
        }
    }
}

#[test]
fn test_string_cursor_has_no_jump() {
    assert!(implements!(SliceCursor<'static, char>, JumpPosition));
    assert!(!implements!(CharCursor<'static>, JumpPosition));
    assert!(!implements!(ListCursor<'static, char>, JumpPosition));

    let mut it = CharCursor::new("héllo");
    let stepped = advance(&mut it, 4);
    assert_eq!(stepped, Stepped { steps: 4 });
    assert_eq!(it.current(), Some(&'o'));
}

// =============================================================================
// Selection by a const condition
// =============================================================================

struct Wide;
impl Branch<u64> for Wide {
    type Output = u128;
    fn run(x: u64) -> u128 {
        u128::from(x) << 64
    }
}

struct Narrow;
impl Branch<u64> for Narrow {
    type Output = u64;
    fn run(x: u64) -> u64 {
        x
    }
}

#[test]
fn test_const_condition_picks_result_type() {
    let wide: u128 = select::<Cond<true>, Wide, Narrow, _>(1);
    let narrow: u64 = select::<Cond<false>, Wide, Narrow, _>(1);
    assert_eq!(wide, 1_u128 << 64);
    assert_eq!(narrow, 1);
}

// =============================================================================
// is_power_of_two
// =============================================================================

#[test]
fn test_power_of_two_integer_and_float() {
    assert!(is_power_of_two(8));
    assert!(is_power_of_two(64));
    assert!(!is_power_of_two(10));

    assert!(is_power_of_two(8.0));
    assert!(is_power_of_two(0.5_f32));
    assert!(!is_power_of_two(10.0));
}

#[test]
fn test_power_of_two_matches_std_for_unsigned() {
    for n in 0_u32..1025 {
        assert_eq!(is_power_of_two(n), n.is_power_of_two(), "n = {}", n);
        assert_eq!(is_power_of_two(n as f64), n.is_power_of_two(), "n = {}.0", n);
    }
}

// =============================================================================
// add_to_container
// =============================================================================

#[test]
fn test_add_to_container_uses_available_operation() {
    let mut vec = vec![1, 2, 3];
    add_to_container(&mut vec, 4);
    assert_eq!(vec, [1, 2, 3, 4]);

    let mut list = LinkedList::new();
    add_to_container(&mut list, 'a');
    assert_eq!(list.front(), Some(&'a'));

    let mut deque: VecDeque<&str> = VecDeque::new();
    add_to_container(&mut deque, "x");
    assert_eq!(deque.len(), 1);

    let mut set = BTreeSet::from([3, 1]);
    let inserted: bool = add_to_container(&mut set, 2);
    assert!(inserted);
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}
