//! Error types. `Display` text is what the forms show to the user.

/// A required form field was empty or zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a UserID")]
    MissingUserId,

    #[error("Please enter an Industry")]
    MissingIndustry,

    #[error("Please enter skills")]
    MissingSkills,

    #[error("Please enter a Year")]
    MissingYear,
}

/// Failure talking to the user API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

/// Strict config parsing failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("`{key}` must be a string")]
    WrongType { key: String },
}
