mod common;

use std::sync::{Arc, Mutex, Once};

use common::{TestError, TestSession};
use log::{kv::Key, Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use sessionlog::{HostLevel, LogAdapter, LogEntry, LogOptions, SessionLog};

#[derive(Debug, Clone)]
struct Captured {
    target: String,
    level: Level,
    message: String,
    error: Option<String>,
    has_location: bool,
}

struct Capture {
    records: Mutex<Vec<Captured>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let has_location =
            record.file().is_some() || record.line().is_some() || record.module_path().is_some();
        let error = record
            .key_values()
            .get(Key::from_str("error"))
            .map(|value| value.to_string());
        self.records.lock().unwrap().push(Captured {
            target: record.target().to_owned(),
            level: record.level(),
            message: record.args().to_string(),
            error,
            has_location,
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Lazy<Capture> = Lazy::new(|| Capture {
    records: Mutex::new(Vec::new()),
});

fn install() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&*CAPTURE).expect("no other logger in this binary");
        log::set_max_level(LevelFilter::Debug);
    });
}

fn captured_for(prefix: &str) -> Vec<Captured> {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|record| record.target.starts_with(prefix))
        .cloned()
        .collect()
}

fn quiet_options() -> LogOptions {
    LogOptions::default().print_date(false).print_thread(false)
}

#[test]
fn entries_reach_the_log_crate_without_location() {
    install();
    let mut log = LogAdapter::default().with_options(quiet_options());
    log.attach_session(Some(TestSession::new("backend_orders")));

    log.log(
        &LogEntry::new(HostLevel::Fine, "select {0}")
            .category("sql")
            .parameters(["42"])
            .error(Arc::new(TestError("syntax error"))),
    )
    .unwrap();
    log.log(&LogEntry::new(HostLevel::Finest, "too chatty").category("sql"))
        .unwrap();

    let records = captured_for("persistence.session.backend_orders");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.target, "persistence.session.backend_orders.sql");
    assert_eq!(record.level, Level::Debug);
    assert_eq!(record.message, "[FINE] sql: select 42");
    assert_eq!(record.error.as_deref(), Some("syntax error"));
    assert!(!record.has_location);
}

#[test]
fn effective_level_reads_the_max_level() {
    install();
    let mut log = LogAdapter::default();
    log.attach_session(Some(TestSession::new("backend_levels")));

    assert_eq!(log.effective_level(Some("sql")), HostLevel::Finer);
    assert!(log.should_log(HostLevel::Fine, Some("cache")));
    assert!(!log.should_log(HostLevel::Finest, Some("cache")));
}

#[test]
fn uncaught_errors_reach_the_log_crate() {
    install();
    let mut log = LogAdapter::default();
    log.attach_session(Some(TestSession::new("backend_uncaught")));
    log.report_uncaught(Arc::new(TestError("pool exhausted")));

    let records = captured_for("persistence.session.backend_uncaught");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].target, "persistence.session.backend_uncaught");
    assert_eq!(records[0].level, Level::Error);
    assert_eq!(records[0].message, "");
    assert_eq!(records[0].error.as_deref(), Some("pool exhausted"));
}
