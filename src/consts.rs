// -----------------------------------------------------------------------------
// Tracing
// -----------------------------------------------------------------------------

/// Target used by every tracing event emitted from this crate.
pub const TRACING_TARGET: &str = "tackle";

// -----------------------------------------------------------------------------
// Memory Allocation
// -----------------------------------------------------------------------------

/// Number of pre-allocated attachment slots in a [`Scope`].
///
/// [`Scope`]: crate::Scope
pub const CAP_SCOPE_ATTACHMENTS: usize = 4;
