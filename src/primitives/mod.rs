//! # Layer 0: Primitives
//!
//! Basic building blocks shared by the container and the selector:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).

pub mod bool;

pub use bool::{Bool, Present, Absent, SelectBool, Cond, If};
