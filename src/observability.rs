//! Diagnostics emitted by the adapter about itself.
//!
//! Forwarded host entries go through the facade handles; these events go
//! through `tracing` with target "sessionlog" and an `event` field, so they
//! never re-enter the adapter when the host's own backend is bridged into
//! `tracing`.
//!
//! The crate never initializes a global subscriber.

/// Target for all adapter diagnostics.
pub(crate) const SESSIONLOG_TARGET: &str = "sessionlog";

/// Macro for debug-level diagnostics.
///
/// # Example
/// ```ignore
/// log_debug!(
///     event = "session_attached",
///     namespace = %namespace,
///     categories = CATEGORIES.len(),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::SESSIONLOG_TARGET, $($field)*)
    };
}

/// Macro for warn-level diagnostics.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::SESSIONLOG_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
