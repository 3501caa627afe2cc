//! Error types for the image cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Loader Error Enum ==
/// Failures produced at the image-loading collaborator boundary.
///
/// The cache itself never returns these to its callers: preload and disk
/// purge consume them and discard the outcome. They exist so loader
/// implementations report failure explicitly instead of panicking or
/// swallowing it themselves.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Fetching the image over the network failed
    #[error("Fetch failed for '{0}'")]
    Fetch(String),

    /// The payload arrived but could not be decoded into a bitmap
    #[error("Decode failed for '{0}'")]
    Decode(String),

    /// The collaborator is not ready to serve requests
    #[error("Image loader unavailable")]
    Unavailable,
}

// == Result Type Alias ==
/// Convenience Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LoaderError::Fetch("http://img/1.png".to_string());
        assert!(err.to_string().contains("http://img/1.png"));

        let err = LoaderError::Decode("http://img/2.png".to_string());
        assert!(err.to_string().contains("Decode"));

        let err = LoaderError::Unavailable;
        assert_eq!(err.to_string(), "Image loader unavailable");
    }
}
