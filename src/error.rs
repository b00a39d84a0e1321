//! Run-time failure of a checked extraction.

use thiserror::Error;

/// An extraction asked for an alternative that is not the active one.
///
/// This is the only run-time error the crate produces. Every other contract
/// violation (a visitor missing a case, an unsatisfiable branch) is rejected
/// at build time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("bad variant access on `{variant}`: expected `{expected}`, but `{active}` is active")]
pub struct BadVariantAccess {
    /// Name of the container type.
    pub variant: &'static str,
    /// Alternative the caller asked for.
    pub expected: &'static str,
    /// Alternative that was actually held.
    pub active: &'static str,
}

pub type Result<T> = core::result::Result<T, BadVariantAccess>;
