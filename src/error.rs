//! Error types for the face_scan library

use thiserror::Error;

/// Result type alias for face_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for image validation, loading and configuration.
///
/// An `Inconclusive` classification is not an error: it is a regular
/// [`crate::Diagnosis`] returned when no rule matches.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image is empty, has zero spatial extent, or its buffer does not
    /// match its declared dimensions
    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    /// Pixel layout is not 3-channel (grayscale, or alpha not stripped)
    #[error("Unsupported pixel format: expected 3 channels, got {channels}")]
    UnsupportedFormat { channels: usize },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create an invalid image error
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if the caller can fix the input and retry.
    ///
    /// Only a wrong channel count qualifies: the image itself is fine, it
    /// just needs converting to 3-channel RGB first.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::UnsupportedFormat { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidImage { .. } => {
                "The image is empty or damaged. Please upload a different photo.".to_string()
            }
            AnalysisError::UnsupportedFormat { channels } => format!(
                "The image has {} color channel(s). Please convert it to a standard RGB photo and try again.",
                channels
            ),
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::ConfigError { .. } | AnalysisError::InvalidParameter { .. } => {
                "The analysis settings are invalid. Please check the configuration file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_format_errors_are_recoverable() {
        assert!(AnalysisError::UnsupportedFormat { channels: 4 }.is_recoverable());
        assert!(!AnalysisError::invalid_image("empty").is_recoverable());
        assert!(!AnalysisError::invalid_parameter("epsilon", 0.0).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = AnalysisError::UnsupportedFormat { channels: 1 };
        assert_eq!(
            err.to_string(),
            "Unsupported pixel format: expected 3 channels, got 1"
        );

        let err = AnalysisError::invalid_parameter("thresholds.anemia.max_saturation", 1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: thresholds.anemia.max_saturation = 1.5"
        );
    }

    #[test]
    fn test_user_message_mentions_channels() {
        let msg = AnalysisError::UnsupportedFormat { channels: 4 }.user_message();
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AnalysisError::image_load("Failed to open face.jpg", io);
        assert!(err.source().is_some());
    }
}
