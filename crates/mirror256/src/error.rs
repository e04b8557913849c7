//! Error types for the hasher.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Mirror256Error>;

/// Errors raised while configuring a hasher or parsing a digest.
#[derive(Debug, Error)]
pub enum Mirror256Error {
    /// Construction parameters cannot produce a usable layer network.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// A hex string could not be unpacked into a digest.
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl Mirror256Error {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Mirror256Error::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
