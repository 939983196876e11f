#![allow(dead_code)]

use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use sessionlog::{
    facade::{Location, LocationAwareLogger},
    ErrorRef, FacadeLevel, FacadeLogger, HostSession, LogEntry, LogOptions, LoggerFactory,
    MessageFormatter,
};

/// One call that reached a recording logger.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub namespace: String,
    pub level: FacadeLevel,
    pub message: Option<String>,
    pub error: Option<String>,
    pub located: bool,
}

struct Shared {
    default_threshold: Mutex<FacadeLevel>,
    thresholds: Mutex<HashMap<String, FacadeLevel>>,
    calls: Mutex<Vec<Call>>,
    created: Mutex<Vec<String>>,
}

/// Facade whose loggers record every call instead of printing.
#[derive(Clone)]
pub struct RecordingFactory {
    shared: Arc<Shared>,
    location_aware: bool,
}

impl RecordingFactory {
    /// Every logger enables `threshold` and everything less verbose.
    pub fn new(threshold: FacadeLevel) -> Self {
        Self {
            shared: Arc::new(Shared {
                default_threshold: Mutex::new(threshold),
                thresholds: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
                created: Mutex::new(Vec::new()),
            }),
            location_aware: false,
        }
    }

    pub fn location_aware(self) -> Self {
        Self {
            location_aware: true,
            ..self
        }
    }

    pub fn set_threshold(&self, namespace: &str, threshold: FacadeLevel) {
        self.shared
            .thresholds
            .lock()
            .unwrap()
            .insert(namespace.to_owned(), threshold);
    }

    pub fn set_default_threshold(&self, threshold: FacadeLevel) {
        *self.shared.default_threshold.lock().unwrap() = threshold;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.shared.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<String> {
        self.shared.created.lock().unwrap().clone()
    }
}

impl LoggerFactory for RecordingFactory {
    type Logger = RecordingLogger;

    fn logger(&self, namespace: &str) -> RecordingLogger {
        self.shared
            .created
            .lock()
            .unwrap()
            .push(namespace.to_owned());
        RecordingLogger {
            namespace: namespace.to_owned(),
            shared: Arc::clone(&self.shared),
            location_aware: self.location_aware,
        }
    }
}

#[derive(Clone)]
pub struct RecordingLogger {
    namespace: String,
    shared: Arc<Shared>,
    location_aware: bool,
}

impl RecordingLogger {
    fn record(&self, level: FacadeLevel, message: Option<&str>, error: Option<&ErrorRef>, located: bool) {
        self.shared.calls.lock().unwrap().push(Call {
            namespace: self.namespace.clone(),
            level,
            message: message.map(str::to_owned),
            error: error.map(ToString::to_string),
            located,
        });
    }
}

impl FacadeLogger for RecordingLogger {
    fn name(&self) -> &str {
        &self.namespace
    }

    fn is_enabled(&self, level: FacadeLevel) -> bool {
        let threshold = self
            .shared
            .thresholds
            .lock()
            .unwrap()
            .get(&self.namespace)
            .copied()
            .unwrap_or_else(|| *self.shared.default_threshold.lock().unwrap());
        level != FacadeLevel::Off && level >= threshold
    }

    fn log(&self, level: FacadeLevel, message: Option<&str>, error: Option<&ErrorRef>) {
        self.record(level, message, error, false);
    }

    fn as_location_aware(&self) -> Option<&dyn LocationAwareLogger> {
        if self.location_aware {
            Some(self)
        } else {
            None
        }
    }
}

impl LocationAwareLogger for RecordingLogger {
    fn log_located(
        &self,
        location: Option<&Location<'_>>,
        caller: Option<&str>,
        level_code: i32,
        message: Option<&str>,
        args: Option<&[String]>,
        error: Option<&ErrorRef>,
    ) {
        assert!(location.is_none(), "adapter leaked a location");
        assert!(caller.is_none(), "adapter leaked a caller");
        assert!(args.is_none());
        let level = FacadeLevel::from_code(level_code).expect("known level code");
        self.record(level, message, error, true);
    }
}

/// Formatter that returns the raw message and counts invocations.
#[derive(Clone, Default)]
pub struct CountingFormatter {
    calls: Arc<AtomicUsize>,
}

impl CountingFormatter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MessageFormatter for CountingFormatter {
    fn format(&self, entry: &LogEntry, _options: &LogOptions) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        entry.message().to_owned()
    }
}

pub struct TestSession {
    name: String,
}

impl TestSession {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for TestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServerSession({})", self.name)
    }
}

impl HostSession for TestSession {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub struct TestError(pub &'static str);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for TestError {}
