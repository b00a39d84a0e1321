//! Procedural macros for tola-variant
//!
//! ## Macros
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Variant)]` | enum | Closed alternative set over the payload types |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Variant)]
//! enum Value {
//!     Int(i64),
//!     Float(f64),
//!     Text(String),
//! }
//!
//! let v = Value::from(42_i64);
//! assert!(v.holds::<i64>());
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Derive a closed-alternative container from an enum.
///
/// Every variant must carry exactly one unnamed field, and no payload type
/// may appear twice. Generates:
///
/// - `Variant` (names, active index, type name)
/// - `Alternative<T>` and `From<T>` for every payload type
/// - `Default`, holding the first alternative default-valued
/// - `Visit<V>` / `VisitMut<V>` for visitors covering every alternative
/// - an inherent `visit_with(on_a, on_b, ..)`, one closure per alternative
///
/// # Attributes
///
/// - `#[variant(no_default)]` skips the `Default` impl, for sets whose first
///   alternative has no default. Prefer a leading `Monostate` alternative.
///
/// # Usage
/// ```ignore
/// #[derive(Variant)]
/// enum Shape {
///     Circle(Circle),
///     Square(Square),
/// }
/// ```
#[proc_macro_derive(Variant, attributes(variant))]
pub fn derive_variant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_variant(input).into()
}
