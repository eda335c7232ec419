/// Convenience result type used across muv.
pub type MuvResult<T> = Result<T, MuvError>;

/// Error taxonomy for the parsing edges of the crate.
///
/// The animation session itself never returns these: bad input is logged and clamped so a page
/// keeps working. They surface only from explicit parsing entry points such as
/// [`crate::MuvConfig::from_json`].
#[derive(thiserror::Error, Debug)]
pub enum MuvError {
    /// Invalid configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed per-element markup (override attributes, marker data).
    #[error("markup error: {0}")]
    Markup(String),

    /// The host environment is missing a capability or refused an operation.
    #[error("host error: {0}")]
    Host(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MuvError {
    /// Build a [`MuvError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MuvError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }

    /// Build a [`MuvError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`MuvError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MuvError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
