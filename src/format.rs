//! Message bodies built from host entries.

use std::fmt::Write;

use crate::{host::LogEntry, level::HostLevel, option::LogOptions};

/// Renders the body of a forwarded message.
///
/// The adapter puts the session and connection prefixes in front of the
/// body; a formatter only renders the entry itself.
pub trait MessageFormatter: Send + Sync {
    /// Render `entry` according to `options`.
    fn format(&self, entry: &LogEntry, options: &LogOptions) -> String;
}

/// Renders `[<LEVEL>] <category>: <date>--<thread>--<text>`.
///
/// The date and thread segments follow [`LogOptions`]; the category segment
/// is dropped for entries without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl MessageFormatter for DefaultFormatter {
    fn format(&self, entry: &LogEntry, options: &LogOptions) -> String {
        let mut body = String::with_capacity(entry.message().len() + 64);
        let level = HostLevel::try_from(entry.ordinal())
            .map(HostLevel::name)
            .unwrap_or("UNKNOWN");
        let _ = write!(body, "[{level}] ");
        if let Some(category) = entry.category_name().filter(|c| !c.is_empty()) {
            let _ = write!(body, "{category}: ");
        }
        if options.prints_date() {
            let _ = write!(
                body,
                "{}--",
                entry.timestamp().format("%Y-%m-%d %H:%M:%S%.3f")
            );
        }
        if options.prints_thread() {
            let _ = write!(body, "Thread({})--", entry.thread_name());
        }
        substitute(entry.message(), entry.parameter_values(), &mut body);
        body
    }
}

/// Replace `{N}` with `params[N]`. Unknown or malformed placeholders stay.
fn substitute(template: &str, params: &[String], out: &mut String) {
    if params.is_empty() {
        out.push_str(template);
        return;
    }
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return;
        };
        let placeholder = &after[..close];
        match placeholder
            .parse::<usize>()
            .ok()
            .and_then(|index| params.get(index))
        {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(placeholder);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
}
