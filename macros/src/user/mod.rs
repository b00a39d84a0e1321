//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Variant)]` | on enum | Closed alternative set |

pub mod variant;

pub use variant::expand_derive_variant;
