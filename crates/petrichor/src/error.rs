//! Error types for petrichor.
//!
//! A single error enum covers the windowing backend and the
//! configuration layer, so every fallible public API returns the same
//! [`Result`] alias.

use thiserror::Error;

/// The main error type for petrichor operations.
#[derive(Debug, Error)]
pub enum Error {
    // === Window Errors ===
    /// The native window could not be created.
    #[error("failed to create window '{title}': {source}")]
    WindowCreate {
        /// Title the window was to be created with.
        title: String,
        /// The underlying backend error.
        #[source]
        source: minifb::Error,
    },

    /// Presenting the framebuffer to the window failed.
    #[error("failed to present frame: {0}")]
    Present(#[source] minifb::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for petrichor operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a window creation error.
    #[must_use]
    pub fn window_create(title: impl Into<String>, source: minifb::Error) -> Self {
        Self::WindowCreate {
            title: title.into(),
            source,
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from the configuration layer.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }

    /// Check if this error came from the windowing backend.
    #[must_use]
    pub fn is_window_error(&self) -> bool {
        matches!(self, Self::WindowCreate { .. } | Self::Present(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_create_display() {
        let err = Error::window_create(
            "demo",
            minifb::Error::WindowCreate("no display".to_string()),
        );
        let msg = err.to_string();
        assert!(msg.contains("demo"));
        assert!(msg.contains("create window"));
    }

    #[test]
    fn test_present_display() {
        let err = Error::Present(minifb::Error::UpdateFailed("lost surface".to_string()));
        assert!(err.to_string().contains("present"));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("width must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: width must be greater than 0"
        );
    }

    #[test]
    fn test_is_config_error() {
        assert!(Error::config_validation("bad").is_config_error());
        assert!(!Error::Present(minifb::Error::UpdateFailed(String::new())).is_config_error());
    }

    #[test]
    fn test_is_window_error() {
        let err = Error::window_create(
            "demo",
            minifb::Error::WindowCreate(String::new()),
        );
        assert!(err.is_window_error());
        assert!(!err.is_config_error());
        assert!(!Error::config_validation("bad").is_window_error());
    }

    #[test]
    fn test_from_figment_error() {
        let figment_err = figment::Error::from("missing field".to_string());
        let err: Error = figment_err.into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.is_config_error());
    }
}
