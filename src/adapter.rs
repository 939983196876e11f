use std::{fmt::Write, sync::Arc};

use crate::{
    error::LogError,
    facade::{FacadeLogger, LogCrateFactory, LoggerFactory},
    format::{DefaultFormatter, MessageFormatter},
    host::{ErrorRef, LogEntry, SessionRef, CATEGORIES},
    level::{map_ordinal, most_verbose_enabled, reverse_map, FacadeLevel, HostLevel},
    option::LogOptions,
    registry::NamespaceRegistry,
    session_log::SessionLog,
};

/// Forwards host session logging to a facade.
///
/// Without a session every entry goes to the `persistence.default` logger.
/// Attaching a session named `orders` creates `persistence.session.orders`
/// and one `persistence.session.orders.<category>` logger per host category;
/// entries are routed by their category from then on.
///
/// # Cloning
///
/// A clone shares the facade handles and the session of the original. An
/// owner that hands the clone to a different session must call
/// [`attach_session`](SessionLog::attach_session) on it before logging.
pub struct LogAdapter<F: LoggerFactory> {
    factory: F,
    registry: NamespaceRegistry<F::Logger>,
    session: Option<SessionRef>,
    options: LogOptions,
    formatter: Arc<dyn MessageFormatter>,
}

impl Default for LogAdapter<LogCrateFactory> {
    fn default() -> Self {
        LogAdapter::new(LogCrateFactory)
    }
}

impl<F: LoggerFactory> LogAdapter<F> {
    /// Adapter with default options and the [`DefaultFormatter`].
    pub fn new(factory: F) -> Self {
        let registry = NamespaceRegistry::new(&factory);
        Self {
            factory,
            registry,
            session: None,
            options: LogOptions::default(),
            formatter: Arc::new(DefaultFormatter),
        }
    }

    /// Replace the options.
    pub fn with_options(self, options: LogOptions) -> Self {
        Self { options, ..self }
    }

    /// Replace the body formatter.
    pub fn with_formatter(self, formatter: impl MessageFormatter + 'static) -> Self {
        Self {
            formatter: Arc::new(formatter),
            ..self
        }
    }

    /// Current options.
    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    /// Attached session, if any.
    pub fn session(&self) -> Option<&SessionRef> {
        self.session.as_ref()
    }

    /// Logger entries for `category` are sent to.
    pub fn resolve_logger(&self, category: Option<&str>) -> &F::Logger {
        self.registry.resolve(category)
    }

    /// Namespace of the logger entries for `category` are sent to.
    pub fn namespace_for(&self, category: Option<&str>) -> &str {
        self.registry.namespace_for(category)
    }

    fn compose(&self, entry: &LogEntry) -> String {
        let body = self.formatter.format(entry, &self.options);
        let mut message = String::with_capacity(body.len() + 64);
        if self.options.prints_session() {
            if let Some(session) = entry.session_ref() {
                let _ = write!(message, "{session}--");
            }
        }
        if self.options.prints_connection() {
            if let Some(connection) = entry.connection_ref() {
                let _ = write!(message, "{connection}--");
            }
        }
        message.push_str(&body);
        message
    }
}

/// Send one message, hiding the adapter's own location from
/// location-aware handles.
fn dispatch<L: FacadeLogger>(
    logger: &L,
    level: FacadeLevel,
    message: Option<&str>,
    error: Option<&ErrorRef>,
) {
    match logger.as_location_aware() {
        Some(located) => located.log_located(None, None, level.code(), message, None, error),
        None => logger.log(level, message, error),
    }
}

impl<F: LoggerFactory> SessionLog for LogAdapter<F> {
    fn attach_session(&mut self, session: Option<SessionRef>) {
        match session {
            Some(session) => {
                self.registry
                    .bind(&self.factory, session.name(), CATEGORIES);
                self.session = Some(session);
            }
            None => {
                self.registry.unbind();
                self.session = None;
            }
        }
    }

    fn effective_level(&self, category: Option<&str>) -> HostLevel {
        let logger = self.resolve_logger(category);
        reverse_map(most_verbose_enabled(|level| logger.is_enabled(level)))
    }

    fn log(&self, entry: &LogEntry) -> Result<(), LogError> {
        let logger = self.resolve_logger(entry.category_name());
        let level = map_ordinal(entry.ordinal())?;
        if level == FacadeLevel::Off || !logger.is_enabled(level) {
            return Ok(());
        }

        let message = self.compose(entry);
        let error = entry
            .error_ref()
            .filter(|_| self.options.prints_exceptions());
        dispatch(logger, level, Some(&message), error);
        Ok(())
    }

    fn report_uncaught(&self, error: ErrorRef) {
        dispatch(
            self.resolve_logger(None),
            FacadeLevel::Error,
            None,
            Some(&error),
        );
    }
}

impl<F> Clone for LogAdapter<F>
where
    F: LoggerFactory + Clone,
    F::Logger: Clone,
{
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            registry: self.registry.clone(),
            session: self.session.clone(),
            options: self.options.clone(),
            formatter: Arc::clone(&self.formatter),
        }
    }
}
