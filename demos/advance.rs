//! Compile-Time Branch Selection
//!
//! The same generic call takes a different body, with a different result
//! type, depending on what the argument type supports.

use std::collections::{BTreeSet, LinkedList};

use tola_variant::hlist;
use tola_variant::select::container::add_to_container;
use tola_variant::select::cursor::{advance, CharCursor, Jumped, ListCursor, Position, SliceCursor, Stepped};
use tola_variant::select::list::Render;
use tola_variant::select::numeric::is_power_of_two;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Cursor Advance ===\n");

    let data: Vec<i32> = (1..=10).collect();
    let list: LinkedList<i32> = data.iter().copied().collect();

    let mut fast = SliceCursor::new(&data);
    let jumped: Jumped = advance(&mut fast, 3);
    println!("  slice cursor: {:?} -> {:?}", jumped, fast.current());

    let mut slow = ListCursor::new(&list);
    let stepped: Stepped = advance(&mut slow, 3);
    println!("  list cursor:  {:?} -> {:?}", stepped, slow.current());
    assert_eq!(fast.current(), slow.current());

    let mut chars = CharCursor::new("naïve");
    advance(&mut chars, 3);
    println!("  char cursor:  {:?}", chars.current());
    assert_eq!(chars.current(), Some(&'v'));

    println!("\n=== Power of Two ===\n");
    for (label, result) in [
        ("8", is_power_of_two(8)),
        ("10", is_power_of_two(10)),
        ("8.0", is_power_of_two(8.0)),
        ("0.75", is_power_of_two(0.75)),
    ] {
        println!("  {:>5}: {}", label, result);
    }
    assert!(is_power_of_two(64) && !is_power_of_two(0.75));

    println!("\n=== Add to Container ===\n");
    let mut vec = vec![1, 2];
    add_to_container(&mut vec, 3);
    let mut set = BTreeSet::from([1, 2]);
    let inserted = add_to_container(&mut set, 2);
    println!("  vec: {:?}, set: {:?} (inserted: {})", vec, set, inserted);
    assert!(!inserted);

    println!("\n=== Variadic Print ===\n");
    let line = hlist![1, 3.14, "abc", String::from("def")].render();
    println!("  {}", line);
    assert_eq!(line, "1 3.14 abc def");

    println!("\n=== SUCCESS ===");
}
