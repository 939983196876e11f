use std::{fmt, io};

use crate::{
    error::LogError,
    host::{ErrorRef, LogEntry, SessionRef},
    level::HostLevel,
};

/// What the host framework calls on its session log.
///
/// The level and writer mutators are part of the host's older contract.
/// Levels and destinations belong to the facade's own configuration, so the
/// default bodies accept the call and do nothing.
pub trait SessionLog {
    /// Attach `session`, or detach with `None`.
    fn attach_session(&mut self, session: Option<SessionRef>);

    /// Host level matching the most verbose level enabled for `category`.
    fn effective_level(&self, category: Option<&str>) -> HostLevel;

    /// Forward one entry.
    fn log(&self, entry: &LogEntry) -> Result<(), LogError>;

    /// Report an error nobody handled.
    fn report_uncaught(&self, error: ErrorRef);

    /// Whether an entry at `level` for `category` would be forwarded.
    fn should_log(&self, level: HostLevel, category: Option<&str>) -> bool {
        level != HostLevel::Off && level >= self.effective_level(category)
    }

    /// Ignored.
    #[deprecated(note = "levels are configured in the logging backend")]
    fn set_level(&mut self, _level: HostLevel) {}

    /// Ignored.
    #[deprecated(note = "levels are configured in the logging backend")]
    fn set_category_level(&mut self, _level: HostLevel, _category: &str) {}

    /// Ignored.
    #[deprecated(note = "destinations are configured in the logging backend")]
    fn set_writer(&mut self, _writer: Box<dyn fmt::Write + Send>) {}

    /// Ignored.
    #[deprecated(note = "destinations are configured in the logging backend")]
    fn set_output_stream(&mut self, _stream: Box<dyn io::Write + Send>) {}
}
