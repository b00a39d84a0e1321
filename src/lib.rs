//! # tola-variant
//!
//! Closed tagged unions with exhaustive visitation, and compile-time branch
//! selection, on stable Rust.
//!
//! ## Architecture
//!
//! ### 1. Closed alternatives
//! An enum whose variants each carry one value of a distinct type is a closed
//! alternative set. `#[derive(Variant)]` turns the payload types into tags:
//!
//! ```text
//! enum Value { Int(i64), Text(String) }
//!   holds::<i64>()  get::<String>() -> Result  get_if::<i64>() -> Option
//! ```
//!
//! ### 2. Visitation
//! A visitor implements `Visitor<T>` once per alternative (or once, generically).
//! `Visit<V>` is only implemented for visitors covering every alternative, so
//! a missing case fails the build.
//!
//! ### 3. Static selection
//! `Choose<Then, Else, Args>` is implemented for the type-level booleans
//! `Present` / `Absent`, each requiring only its own body to type-check.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Present, Absent, Cond<const B>                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Variant + Select                                        |
//! |  - Variant, Alternative, Visitor, Visit, BadVariantAccess         |
//! |  - Branch, Choose, advance, is_power_of_two, add_to_container     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - #[derive(Variant)], hlist!, implements!, prelude               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
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
//! struct Describe;
//!
//! impl Visitor<i64> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &i64) -> String { format!("int: {}", value) }
//! }
//!
//! impl Visitor<String> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &String) -> String { format!("text: {}", value) }
//! }
//!
//! let v = Value::from(42_i64);
//! assert!(v.holds::<i64>());
//! assert_eq!(visit(&v, &mut Describe), "int: 42");
//! assert!(v.get::<String>().is_err());
//! ```

// Allow `::tola_variant` to work inside the crate itself
extern crate self as tola_variant;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Variant + Select
// =============================================================================
pub mod error;
pub mod variant;
pub mod select;

// =============================================================================
// Layer 2: Syntax macros (hlist!)
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::{BadVariantAccess, Result};
pub use primitives::bool::{Bool, Present, Absent, SelectBool, Cond, If};
pub use variant::{
    Variant, Alternative, Monostate,
    Visitor, VisitorMut, Visit, VisitMut, visit, visit_mut,
};
pub use select::{Branch, Choose, select};

#[cfg(feature = "derive")]
pub use macros::Variant;

/// Common items for closed alternatives and static selection.
pub mod prelude {
    pub use crate::variant::{
        // Core Traits
        Variant, Alternative, Monostate,
        // Visitation
        Visitor, VisitorMut, Visit, VisitMut, visit, visit_mut,
    };
    pub use crate::error::BadVariantAccess;
    pub use crate::primitives::{Bool, Present, Absent, Cond};
    pub use crate::select::{Branch, Choose, select};
    #[cfg(feature = "derive")]
    pub use macros::Variant;
    // Note: hlist!, implements! are #[macro_export] so they're at crate root
}
