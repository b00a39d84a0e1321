//! # Layer 1: Compile-Time Branch Selection
//!
//! Stable-Rust counterpart of "pick one of two bodies by a static condition,
//! and never type-check the other one against the caller's types".
//!
//! ## Core Concepts
//!
//! 1. A *body* is a type implementing `Branch<Args>`; its impl carries the
//!    bounds the body needs (`P: JumpPosition`, `N: Float`, ...).
//! 2. The *condition* is a type-level `Bool`, usually an associated type
//!    (`P::RandomAccess`) or `Cond<{ CONST }>`.
//! 3. `Choose` is implemented for `Present` requiring only `Then: Branch`, and
//!    for `Absent` requiring only `Else: Branch`. The untaken body's bounds are
//!    never demanded, so it may be ill-typed for `Args`.
//!
//! ```text
//! P::RandomAccess = Present ──> JumpAhead: Branch<(&mut P, usize)>  (needs P: JumpPosition)
//! P::RandomAccess = Absent  ──> StepAhead: Branch<(&mut P, usize)>  (needs P: Position)
//! ```
//!
//! The selected body also decides the result type: `advance` returns `Jumped`
//! for one cursor and `Stepped` for another.
//!
//! ## Module Structure
//!
//! ```text
//! select/
//! ├── probe.rs     - implements! const trait probe (concrete types)
//! ├── cursor.rs    - advance(): jump vs. single steps
//! ├── numeric.rs   - is_power_of_two(): integer vs. float test
//! ├── container.rs - add_to_container(): push_back vs. insert
//! └── list.rs      - heterogeneous lists: render, for_each
//! ```

pub mod probe;
pub mod cursor;
pub mod numeric;
pub mod container;
pub mod list;

use crate::primitives::{Absent, Bool, Present};

/// A code body selectable at compile time.
pub trait Branch<Args> {
    type Output;

    fn run(args: Args) -> Self::Output;
}

/// Run `Then` or `Else` depending on `Self`.
///
/// Only the selected body has to implement `Branch<Args>`.
pub trait Choose<Then, Else, Args>: Bool {
    type Output;

    fn choose(args: Args) -> Self::Output;
}

impl<Then, Else, Args> Choose<Then, Else, Args> for Present
where
    Then: Branch<Args>,
{
    type Output = Then::Output;

    #[inline(always)]
    fn choose(args: Args) -> Self::Output {
        Then::run(args)
    }
}

impl<Then, Else, Args> Choose<Then, Else, Args> for Absent
where
    Else: Branch<Args>,
{
    type Output = Else::Output;

    #[inline(always)]
    fn choose(args: Args) -> Self::Output {
        Else::run(args)
    }
}

/// Run the body selected by `C`.
#[inline(always)]
pub fn select<C, Then, Else, Args>(args: Args) -> <C as Choose<Then, Else, Args>>::Output
where
    C: Choose<Then, Else, Args>,
{
    C::choose(args)
}
