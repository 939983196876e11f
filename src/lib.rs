#![deny(missing_docs)]
//! Session logging for a persistence framework, forwarded to a
//! structured-logging facade.
//!
//! The host framework grades entries on nine levels and groups them by
//! category (`sql`, `cache`, `connection`, ...). [`LogAdapter`] maps those
//! levels onto the facade's five, gives every category of the attached
//! session its own named logger, and hands finished messages to the facade
//! only when the target level is enabled.
//!
//! ```no_run
//! use std::{fmt, sync::Arc};
//!
//! use sessionlog::{HostLevel, HostSession, LogAdapter, LogEntry, SessionLog};
//!
//! struct Orders;
//!
//! impl fmt::Display for Orders {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("ServerSession(orders)")
//!     }
//! }
//!
//! impl HostSession for Orders {
//!     fn name(&self) -> &str {
//!         "orders"
//!     }
//! }
//!
//! let mut log = LogAdapter::default();
//! log.attach_session(Some(Arc::new(Orders)));
//! // Sent to the `log` target `persistence.session.orders.sql` at debug.
//! log.log(&LogEntry::new(HostLevel::Fine, "select 1").category("sql"))
//!     .unwrap();
//! ```

mod adapter;
mod error;
mod observability;
mod session_log;

/// Outbound facade contract and the `log` crate backend.
pub mod facade;

/// Message body rendering.
pub mod format;

/// Host framework types.
pub mod host;

/// Host and facade levels.
pub mod level;

/// Adapter options.
pub mod option;

/// Namespace layout.
pub mod registry;

pub use crate::{
    adapter::LogAdapter,
    error::{ConfigError, LogError},
    facade::{FacadeLogger, LogCrateFactory, LoggerFactory},
    format::{DefaultFormatter, MessageFormatter},
    host::{ErrorRef, HostSession, LogEntry, SessionRef},
    level::{FacadeLevel, HostLevel},
    option::LogOptions,
    session_log::SessionLog,
};
