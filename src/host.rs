//! Types the host persistence framework hands to the adapter.

use std::{fmt, sync::Arc, thread};

use chrono::{DateTime, Utc};

/// Categories the host framework logs under.
///
/// Every category gets its own logger once a session is attached.
pub const CATEGORIES: &[&str] = &[
    "cache",
    "connection",
    "ddl",
    "dms",
    "ejb",
    "event",
    "jpa",
    "jpars",
    "metadata",
    "metamodel",
    "misc",
    "monitoring",
    "moxy",
    "propagation",
    "properties",
    "query",
    "sequencing",
    "server",
    "sql",
    "transaction",
    "weaver",
];

/// Error attached to an entry. Passed to the facade untouched.
pub type ErrorRef = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Shared handle to a host session.
pub type SessionRef = Arc<dyn HostSession>;

/// Shared handle to a host connection; rendered through `Display`.
pub type ConnectionRef = Arc<dyn fmt::Display + Send + Sync>;

/// A host session as seen by the adapter.
///
/// `Display` renders the descriptor printed in front of forwarded messages.
pub trait HostSession: fmt::Display + Send + Sync {
    /// Session name; empty for an unnamed session.
    fn name(&self) -> &str;
}

/// One structured entry produced by the host framework.
#[derive(Clone)]
pub struct LogEntry {
    level: u8,
    category: Option<String>,
    message: String,
    parameters: Vec<String>,
    session: Option<SessionRef>,
    connection: Option<ConnectionRef>,
    error: Option<ErrorRef>,
    date: DateTime<Utc>,
    thread: String,
}

impl LogEntry {
    /// Entry at `level` (a [`HostLevel`](crate::HostLevel) or raw ordinal),
    /// stamped with the current time and thread.
    pub fn new(level: impl Into<u8>, message: impl Into<String>) -> Self {
        let current = thread::current();
        let thread = match current.name() {
            Some(name) => name.to_owned(),
            None => format!("{:?}", current.id()),
        };
        Self {
            level: level.into(),
            category: None,
            message: message.into(),
            parameters: Vec::new(),
            session: None,
            connection: None,
            error: None,
            date: Utc::now(),
            thread,
        }
    }

    /// Route the entry to `category`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Values substituted for `{0}`, `{1}`, ... in the message.
    pub fn parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Session the entry was logged from.
    pub fn session(mut self, session: SessionRef) -> Self {
        self.session = Some(session);
        self
    }

    /// Connection the entry was logged against.
    pub fn connection(mut self, connection: ConnectionRef) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Error to forward with the message.
    pub fn error(mut self, error: ErrorRef) -> Self {
        self.error = Some(error);
        self
    }

    /// Override the timestamp.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Override the thread name.
    pub fn thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    /// Raw severity ordinal.
    pub fn ordinal(&self) -> u8 {
        self.level
    }

    /// Category, if any.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Unformatted message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Positional message parameters.
    pub fn parameter_values(&self) -> &[String] {
        &self.parameters
    }

    /// Originating session, if any.
    pub fn session_ref(&self) -> Option<&SessionRef> {
        self.session.as_ref()
    }

    /// Connection, if any.
    pub fn connection_ref(&self) -> Option<&ConnectionRef> {
        self.connection.as_ref()
    }

    /// Attached error, if any.
    pub fn error_ref(&self) -> Option<&ErrorRef> {
        self.error.as_ref()
    }

    /// When the entry was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }

    /// Name of the thread that created the entry.
    pub fn thread_name(&self) -> &str {
        &self.thread
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("level", &self.level)
            .field("category", &self.category)
            .field("message", &self.message)
            .field("parameters", &self.parameters)
            .field("session", &self.session.as_ref().map(ToString::to_string))
            .field(
                "connection",
                &self.connection.as_ref().map(ToString::to_string),
            )
            .field("error", &self.error.as_ref().map(ToString::to_string))
            .field("date", &self.date)
            .field("thread", &self.thread)
            .finish()
    }
}
