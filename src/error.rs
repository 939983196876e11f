/// Error returned when a host entry cannot be forwarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The entry carries a severity ordinal outside the host's level table.
    #[error("unsupported severity ordinal {0}")]
    UnsupportedSeverity(u8),
}

/// Error returned while reading logging options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A switch property was not `true` or `false`.
    #[error("invalid boolean `{value}` for property `{key}`")]
    InvalidBool {
        /// Full property key.
        key: String,
        /// Rejected value.
        value: String,
    },
    /// A level property named no known host level.
    #[error("unknown logging level `{0}`")]
    UnknownLevel(String),
}
