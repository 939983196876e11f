//! Outbound contract towards the structured-logging facade.
//!
//! The adapter only asks a [`LoggerFactory`] for named handles, checks
//! whether a level is enabled on a handle, and hands it finished messages.
//! Everything else (filters, appenders, output) belongs to the backend.

mod log_backend;

pub use log_backend::{LogCrateFactory, LogCrateLogger};

use crate::{host::ErrorRef, level::FacadeLevel};

/// Source location attached to a facade call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// Module path of the caller.
    pub module_path: &'a str,
    /// Source file of the caller.
    pub file: &'a str,
    /// Line of the caller.
    pub line: u32,
}

/// Hands out facade loggers by namespace.
pub trait LoggerFactory {
    /// Handle type the facade returns.
    type Logger: FacadeLogger;

    /// Logger for a dot-separated `namespace`.
    fn logger(&self, namespace: &str) -> Self::Logger;
}

/// A named facade logger.
pub trait FacadeLogger {
    /// Namespace the logger was created for.
    fn name(&self) -> &str;

    /// Whether `level` currently passes the backend's filters.
    ///
    /// Must return `false` for [`FacadeLevel::Off`].
    fn is_enabled(&self, level: FacadeLevel) -> bool;

    /// Log `message` with an optional `error` at `level`.
    fn log(&self, level: FacadeLevel, message: Option<&str>, error: Option<&ErrorRef>);

    /// The location-aware view of this logger, if the backend has one.
    fn as_location_aware(&self) -> Option<&dyn LocationAwareLogger> {
        None
    }
}

/// Facade loggers that record where a message was logged from.
///
/// When `location` and `caller` are `None` the backend must not infer a
/// location from the call stack.
pub trait LocationAwareLogger {
    /// Log at the level with [`FacadeLevel::code`] `level_code`.
    ///
    /// `args` fill `{}` anchors in `message` in order.
    fn log_located(
        &self,
        location: Option<&Location<'_>>,
        caller: Option<&str>,
        level_code: i32,
        message: Option<&str>,
        args: Option<&[String]>,
        error: Option<&ErrorRef>,
    );
}
