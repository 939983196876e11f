//! Category to namespace to logger resolution.

use std::collections::HashMap;

use crate::{
    facade::LoggerFactory,
    observability::{log_debug, log_warn},
};

/// Root of every namespace the adapter creates.
pub const ROOT_NAMESPACE: &str = "persistence";

/// Namespace used while no session is attached.
pub const DEFAULT_NAMESPACE: &str = "persistence.default";

/// Parent namespace of named sessions.
pub const SESSION_NAMESPACE: &str = "persistence.session";

/// Namespace for a session called `session_name`.
///
/// Unnamed sessions share [`DEFAULT_NAMESPACE`].
pub fn session_namespace(session_name: &str) -> String {
    if session_name.is_empty() {
        DEFAULT_NAMESPACE.to_owned()
    } else {
        format!("{SESSION_NAMESPACE}.{session_name}")
    }
}

/// Loggers known to one adapter.
///
/// `namespaces` maps category names to namespaces, `loggers` maps namespaces
/// to handles. Both are rebuilt on every [`bind`](Self::bind); the default
/// logger lives outside them and is never replaced.
#[derive(Debug, Clone)]
pub(crate) struct NamespaceRegistry<L> {
    default_logger: L,
    session_namespace: Option<String>,
    namespaces: HashMap<String, String>,
    loggers: HashMap<String, L>,
}

impl<L> NamespaceRegistry<L> {
    pub(crate) fn new<F>(factory: &F) -> Self
    where
        F: LoggerFactory<Logger = L>,
    {
        Self {
            default_logger: factory.logger(DEFAULT_NAMESPACE),
            session_namespace: None,
            namespaces: HashMap::new(),
            loggers: HashMap::new(),
        }
    }

    /// Register the session namespace and one logger per category,
    /// replacing whatever an earlier bind registered.
    pub(crate) fn bind<F>(&mut self, factory: &F, session_name: &str, categories: &[&str])
    where
        F: LoggerFactory<Logger = L>,
    {
        let namespace = session_namespace(session_name);
        self.namespaces.clear();
        self.loggers.clear();
        self.loggers
            .insert(namespace.clone(), factory.logger(&namespace));
        for category in categories {
            let category_namespace = format!("{namespace}.{category}");
            self.loggers
                .insert(category_namespace.clone(), factory.logger(&category_namespace));
            self.namespaces
                .insert((*category).to_owned(), category_namespace);
        }
        log_debug!(
            event = "session_attached",
            namespace = %namespace,
            categories = categories.len(),
        );
        self.session_namespace = Some(namespace);
    }

    /// Forget the session; registered loggers stay until the next bind.
    pub(crate) fn unbind(&mut self) {
        if self.session_namespace.take().is_some() {
            log_debug!(event = "session_detached");
        }
    }

    pub(crate) fn namespace_for(&self, category: Option<&str>) -> &str {
        let Some(session_namespace) = self.session_namespace.as_deref() else {
            return DEFAULT_NAMESPACE;
        };
        category
            .filter(|category| !category.is_empty())
            .and_then(|category| self.namespaces.get(category))
            .map_or(session_namespace, String::as_str)
    }

    pub(crate) fn resolve(&self, category: Option<&str>) -> &L {
        let Some(session_namespace) = self.session_namespace.as_deref() else {
            return &self.default_logger;
        };
        let namespace = self.namespace_for(category);
        let logger = self.loggers.get(namespace);
        debug_assert!(
            logger.is_some(),
            "no logger registered for namespace {namespace}"
        );
        match logger {
            Some(logger) => logger,
            None => self.unregistered(namespace, session_namespace),
        }
    }

    #[cold]
    fn unregistered(&self, namespace: &str, session_namespace: &str) -> &L {
        log_warn!(event = "unregistered_category", namespace = %namespace);
        self.loggers
            .get(session_namespace)
            .unwrap_or(&self.default_logger)
    }

    #[cfg(test)]
    pub(crate) fn forget_logger(&mut self, namespace: &str) {
        self.loggers.remove(namespace);
    }
}
