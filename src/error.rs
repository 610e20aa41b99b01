//! Error types for resource URL parsing and object copying.

use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not match any resource URL form.
    #[error("{0:?} is not a valid resource URL")]
    InvalidResourceUrl(String),

    /// Encoding the source or decoding into the destination failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this error came from [`crate::parse_resource_url`].
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Error::InvalidResourceUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_quotes_input() {
        let err = Error::InvalidResourceUrl("zones/z1/disks".to_string());
        assert_eq!(err.to_string(), r#""zones/z1/disks" is not a valid resource URL"#);
        assert!(err.is_invalid_url());
    }
}
