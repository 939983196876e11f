use std::sync::Arc;

use log::{kv::Value, Metadata, Record};

use super::{FacadeLogger, Location, LocationAwareLogger, LoggerFactory};
use crate::{host::ErrorRef, level::FacadeLevel};

/// [`LoggerFactory`] backed by the process-wide `log` logger.
///
/// The namespace becomes the record target, so backend filters written
/// against targets (`persistence.session.orders.sql=debug`) apply per
/// category.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateFactory;

impl LoggerFactory for LogCrateFactory {
    type Logger = LogCrateLogger;

    fn logger(&self, namespace: &str) -> LogCrateLogger {
        LogCrateLogger {
            name: Arc::from(namespace),
        }
    }
}

/// A `log` target. Cloning shares the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCrateLogger {
    name: Arc<str>,
}

impl LogCrateLogger {
    fn enabled(&self, level: log::Level) -> bool {
        level <= log::max_level()
            && log::logger().enabled(&Metadata::builder().level(level).target(&self.name).build())
    }

    fn emit(
        &self,
        level: log::Level,
        location: Option<&Location<'_>>,
        message: &str,
        error: Option<&ErrorRef>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let logger = log::logger();
        let mut builder = Record::builder();
        builder
            .level(level)
            .target(&self.name)
            .module_path(location.map(|l| l.module_path))
            .file(location.map(|l| l.file))
            .line(location.map(|l| l.line));
        match error {
            Some(error) => {
                let error: &(dyn std::error::Error + 'static) = &**error;
                let key_values = [("error", Value::from_dyn_error(error))];
                logger.log(
                    &builder
                        .key_values(&key_values)
                        .args(format_args!("{message}"))
                        .build(),
                );
            }
            None => logger.log(&builder.args(format_args!("{message}")).build()),
        }
    }
}

impl FacadeLogger for LogCrateLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: FacadeLevel) -> bool {
        level.as_log_level().is_some_and(|level| self.enabled(level))
    }

    fn log(&self, level: FacadeLevel, message: Option<&str>, error: Option<&ErrorRef>) {
        if let Some(level) = level.as_log_level() {
            self.emit(level, None, message.unwrap_or_default(), error);
        }
    }

    fn as_location_aware(&self) -> Option<&dyn LocationAwareLogger> {
        Some(self)
    }
}

impl LocationAwareLogger for LogCrateLogger {
    fn log_located(
        &self,
        location: Option<&Location<'_>>,
        _caller: Option<&str>,
        level_code: i32,
        message: Option<&str>,
        args: Option<&[String]>,
        error: Option<&ErrorRef>,
    ) {
        let Some(level) = FacadeLevel::from_code(level_code).and_then(FacadeLevel::as_log_level)
        else {
            return;
        };
        let message = message.unwrap_or_default();
        match args {
            Some(args) if !args.is_empty() => {
                self.emit(level, location, &fill_anchors(message, args), error)
            }
            _ => self.emit(level, location, message, error),
        }
    }
}

/// Replace successive `{}` anchors with `args`; extra anchors stay.
fn fill_anchors(message: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(message.len());
    let mut args = args.iter();
    let mut rest = message;
    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push_str(arg);
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
