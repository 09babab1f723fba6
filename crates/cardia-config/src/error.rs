use thiserror::Error;

/// Why a Cardia configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `CARDIA_*` variable did not parse into the expected shape.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A field parsed but its value would break training or listing.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// A listing default is larger than `general.max_limit`.
    #[error("'{field}' is {value}, above general.max_limit ({max})")]
    LimitAboveMax {
        field: &'static str,
        value: u32,
        max: u32,
    },
}
