//! Host and facade severity models and the fixed table between them.
//!
//! The host grades entries on nine ordinals, from `ALL` (0) to `OFF` (8).
//! The facade knows five enableable levels plus `OFF`. Mapping host to
//! facade is a plain table lookup; the reverse direction is used only to
//! report the effective host level of a facade logger.

use std::{fmt, str::FromStr};

use crate::error::{ConfigError, LogError};

/// Severity level of the host framework, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HostLevel {
    /// Log everything.
    All = 0,
    /// Most detailed tracing.
    Finest = 1,
    /// Detailed tracing.
    Finer = 2,
    /// Tracing.
    Fine = 3,
    /// Configuration details.
    Config = 4,
    /// Informational messages.
    Info = 5,
    /// Potential problems.
    Warning = 6,
    /// Failures.
    Severe = 7,
    /// Log nothing.
    Off = 8,
}

impl HostLevel {
    /// Every host level in ordinal order.
    pub const LEVELS: [HostLevel; 9] = [
        HostLevel::All,
        HostLevel::Finest,
        HostLevel::Finer,
        HostLevel::Fine,
        HostLevel::Config,
        HostLevel::Info,
        HostLevel::Warning,
        HostLevel::Severe,
        HostLevel::Off,
    ];

    /// Integer code the host uses for this level.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Upper-case name the host prints for this level.
    pub const fn name(self) -> &'static str {
        match self {
            HostLevel::All => "ALL",
            HostLevel::Finest => "FINEST",
            HostLevel::Finer => "FINER",
            HostLevel::Fine => "FINE",
            HostLevel::Config => "CONFIG",
            HostLevel::Info => "INFO",
            HostLevel::Warning => "WARNING",
            HostLevel::Severe => "SEVERE",
            HostLevel::Off => "OFF",
        }
    }

    /// Facade level this host level is forwarded at.
    pub const fn facade_level(self) -> FacadeLevel {
        LEVEL_TABLE[self as usize]
    }
}

impl From<HostLevel> for u8 {
    fn from(level: HostLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for HostLevel {
    type Error = LogError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        HostLevel::LEVELS
            .get(usize::from(ordinal))
            .copied()
            .ok_or(LogError::UnsupportedSeverity(ordinal))
    }
}

impl fmt::Display for HostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        HostLevel::LEVELS
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownLevel(s.to_owned()))
    }
}

/// Severity level of the logging facade, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacadeLevel {
    /// Trace.
    Trace,
    /// Debug.
    Debug,
    /// Info.
    Info,
    /// Warn.
    Warn,
    /// Error.
    Error,
    /// Disabled; never enabled on any logger.
    Off,
}

impl FacadeLevel {
    /// The levels a facade logger can report as enabled, most verbose first.
    pub const ENABLEABLE: [FacadeLevel; 5] = [
        FacadeLevel::Trace,
        FacadeLevel::Debug,
        FacadeLevel::Info,
        FacadeLevel::Warn,
        FacadeLevel::Error,
    ];

    /// Integer code used by location-aware facade calls.
    pub const fn code(self) -> i32 {
        match self {
            FacadeLevel::Trace => 0,
            FacadeLevel::Debug => 10,
            FacadeLevel::Info => 20,
            FacadeLevel::Warn => 30,
            FacadeLevel::Error => 40,
            FacadeLevel::Off => -1,
        }
    }

    /// Inverse of [`FacadeLevel::code`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FacadeLevel::Trace),
            10 => Some(FacadeLevel::Debug),
            20 => Some(FacadeLevel::Info),
            30 => Some(FacadeLevel::Warn),
            40 => Some(FacadeLevel::Error),
            -1 => Some(FacadeLevel::Off),
            _ => None,
        }
    }

    /// The `log` crate level, or `None` for [`FacadeLevel::Off`].
    pub const fn as_log_level(self) -> Option<log::Level> {
        match self {
            FacadeLevel::Trace => Some(log::Level::Trace),
            FacadeLevel::Debug => Some(log::Level::Debug),
            FacadeLevel::Info => Some(log::Level::Info),
            FacadeLevel::Warn => Some(log::Level::Warn),
            FacadeLevel::Error => Some(log::Level::Error),
            FacadeLevel::Off => None,
        }
    }
}

/// Facade level for each host ordinal.
const LEVEL_TABLE: [FacadeLevel; 9] = [
    FacadeLevel::Trace, // ALL
    FacadeLevel::Trace, // FINEST
    FacadeLevel::Debug, // FINER
    FacadeLevel::Debug, // FINE
    FacadeLevel::Info,  // CONFIG
    FacadeLevel::Info,  // INFO
    FacadeLevel::Warn,  // WARNING
    FacadeLevel::Error, // SEVERE
    FacadeLevel::Off,   // OFF
];

/// Map a raw host ordinal to the facade level it is forwarded at.
pub fn map_ordinal(ordinal: u8) -> Result<FacadeLevel, LogError> {
    HostLevel::try_from(ordinal).map(HostLevel::facade_level)
}

/// Most verbose facade level `is_enabled` accepts, or `Off` when none.
pub fn most_verbose_enabled(is_enabled: impl Fn(FacadeLevel) -> bool) -> FacadeLevel {
    FacadeLevel::ENABLEABLE
        .into_iter()
        .find(|level| is_enabled(*level))
        .unwrap_or(FacadeLevel::Off)
}

/// Lowest host level, starting from `FINEST`, forwarded at `level`.
///
/// `ALL` is skipped so a trace-enabled logger reports `FINEST`.
pub fn reverse_map(level: FacadeLevel) -> HostLevel {
    HostLevel::LEVELS[1..]
        .iter()
        .copied()
        .find(|host| host.facade_level() == level)
        .unwrap_or(HostLevel::Off)
}
