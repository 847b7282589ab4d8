use thiserror::Error;

/// Failures raised inside the envelope crate.
///
/// The responder never hands these back to request handlers; encoding
/// failures are routed to a [`crate::FailureLog`] instead.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The encoder could not turn a payload into JSON.
    #[error("Encode Error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A string did not name any known response code.
    #[error("Unknown response code: {0}")]
    UnknownCode(String),

    /// The config file exists but could not be read.
    #[error("Config IO Error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The config file is not valid TOML for the expected shape.
    #[error("Config Parse Error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
