// Common utilities shared by the user-facing macros
//
// This module contains:
// - model: enum -> alternative-set model, with validation
// - case: identifier case conversion

mod case;
pub mod model;

pub use case::*;
pub use model::*;
