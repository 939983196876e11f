use crate::{error::ConfigError, level::HostLevel};

/// Prefix of the properties read by [`LogOptions::from_properties`].
pub const PROPERTY_PREFIX: &str = "persistence.logging.";

/// Switches controlling what the adapter prints around each message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub(crate) print_session: bool,
    pub(crate) print_connection: bool,
    pub(crate) print_date: bool,
    pub(crate) print_thread: bool,
    pub(crate) print_exceptions: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        LogOptions {
            print_session: true,
            print_connection: true,
            print_date: true,
            print_thread: true,
            print_exceptions: true,
        }
    }
}

impl LogOptions {
    /// Prefix messages with the session descriptor.
    pub fn print_session(self, print_session: bool) -> Self {
        LogOptions {
            print_session,
            ..self
        }
    }

    /// Prefix messages with the connection descriptor.
    pub fn print_connection(self, print_connection: bool) -> Self {
        LogOptions {
            print_connection,
            ..self
        }
    }

    /// Include the entry timestamp in the message body.
    pub fn print_date(self, print_date: bool) -> Self {
        LogOptions { print_date, ..self }
    }

    /// Include the thread name in the message body.
    pub fn print_thread(self, print_thread: bool) -> Self {
        LogOptions {
            print_thread,
            ..self
        }
    }

    /// Forward attached errors to the facade.
    pub fn print_exceptions(self, print_exceptions: bool) -> Self {
        LogOptions {
            print_exceptions,
            ..self
        }
    }

    /// Whether the session descriptor is printed.
    pub fn prints_session(&self) -> bool {
        self.print_session
    }

    /// Whether the connection descriptor is printed.
    pub fn prints_connection(&self) -> bool {
        self.print_connection
    }

    /// Whether the timestamp is printed.
    pub fn prints_date(&self) -> bool {
        self.print_date
    }

    /// Whether the thread name is printed.
    pub fn prints_thread(&self) -> bool {
        self.print_thread
    }

    /// Whether attached errors are forwarded.
    pub fn prints_exceptions(&self) -> bool {
        self.print_exceptions
    }

    /// Build options from `persistence.logging.*` properties.
    ///
    /// Recognised switches are `session`, `connection`, `timestamp`,
    /// `thread` and `exceptions`. `level` and `level.<category>` must name a
    /// host level but are otherwise ignored: levels belong to the facade's
    /// own configuration. Keys outside the prefix are skipped.
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = LogOptions::default();
        for (key, value) in properties {
            let (key, value) = (key.as_ref(), value.as_ref());
            let Some(name) = key.strip_prefix(PROPERTY_PREFIX) else {
                continue;
            };
            match name {
                "session" => options.print_session = parse_bool(key, value)?,
                "connection" => options.print_connection = parse_bool(key, value)?,
                "timestamp" => options.print_date = parse_bool(key, value)?,
                "thread" => options.print_thread = parse_bool(key, value)?,
                "exceptions" => options.print_exceptions = parse_bool(key, value)?,
                "level" => {
                    value.parse::<HostLevel>()?;
                }
                _ if name.starts_with("level.") => {
                    value.parse::<HostLevel>()?;
                }
                _ => {}
            }
        }
        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBool {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}
