use crate::domain::model::ReadinessState;
use thiserror::Error;

/// The composer's only failure: the request cannot be built yet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerError {
    #[error("{}", .0.message())]
    NotReady(ReadinessState),
}

impl ComposerError {
    pub fn readiness(&self) -> ReadinessState {
        match self {
            ComposerError::NotReady(state) => *state,
        }
    }
}

#[derive(Error, Debug)]
pub enum TryOnError {
    #[error("Request not ready: {0}")]
    Composer(#[from] ComposerError),

    #[error("Invalid photo handle: {reason}")]
    InvalidHandle { reason: String },

    #[error("Unsupported aspect ratio: {value}")]
    InvalidAspectRatio { value: String },

    #[error("Photo library permission denied")]
    PermissionDenied,

    #[error("Photo rejected: {reason}")]
    PickRejected { reason: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Submission failed: {message}")]
    SubmissionError { message: String },
}

pub type Result<T> = std::result::Result<T, TryOnError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TryOnError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TryOnError::Composer(_)
            | TryOnError::InvalidHandle { .. }
            | TryOnError::InvalidAspectRatio { .. }
            | TryOnError::PermissionDenied
            | TryOnError::PickRejected { .. } => ErrorCategory::Input,
            TryOnError::InvalidConfigValueError { .. } | TryOnError::ConfigParseError { .. } => {
                ErrorCategory::Configuration
            }
            TryOnError::IoError(_) | TryOnError::SerializationError(_) => ErrorCategory::System,
            TryOnError::SubmissionError { .. } => ErrorCategory::Backend,
        }
    }

    /// User-correctable input problems are never worse than `Medium`.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TryOnError::PermissionDenied => ErrorSeverity::Low,
            TryOnError::Composer(_)
            | TryOnError::InvalidHandle { .. }
            | TryOnError::InvalidAspectRatio { .. }
            | TryOnError::PickRejected { .. }
            | TryOnError::SubmissionError { .. } => ErrorSeverity::Medium,
            TryOnError::InvalidConfigValueError { .. } | TryOnError::ConfigParseError { .. } => {
                ErrorSeverity::High
            }
            TryOnError::IoError(_) | TryOnError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TryOnError::Composer(e) => e.to_string(),
            TryOnError::PermissionDenied => {
                "Photo library access is required to choose a photo.".to_string()
            }
            TryOnError::PickRejected { reason } => format!("This photo can't be used: {}", reason),
            TryOnError::InvalidConfigValueError { field, .. } => {
                format!("The setting '{}' has an invalid value.", field)
            }
            TryOnError::ConfigParseError { .. } => {
                "The configuration file could not be read.".to_string()
            }
            TryOnError::SubmissionError { .. } => "The try-on could not be started.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TryOnError::Composer(ComposerError::NotReady(state)) => match state {
                ReadinessState::MissingPersonPhoto => "Select a full-body person photo.",
                ReadinessState::MissingGarmentPhoto => "Select a photo of the garment to try on.",
                ReadinessState::MissingBoth => "Select both a person photo and a garment photo.",
                ReadinessState::Ready => "Submit the request again.",
            }
            .to_string(),
            TryOnError::InvalidHandle { .. } => "Pick the photo again.".to_string(),
            TryOnError::InvalidAspectRatio { .. } => {
                "Use one of the supported ratios: 3:4, 1:1, 16:9.".to_string()
            }
            TryOnError::PermissionDenied => {
                "Grant photo library access in the system settings.".to_string()
            }
            TryOnError::PickRejected { .. } => {
                "Choose a JPG, PNG or WEBP image no larger than 10MB.".to_string()
            }
            TryOnError::InvalidConfigValueError { .. } | TryOnError::ConfigParseError { .. } => {
                "Check the configuration file and command line flags.".to_string()
            }
            TryOnError::IoError(_) => "Check that the file exists and is readable.".to_string(),
            TryOnError::SerializationError(_) => "Report this as a bug.".to_string(),
            TryOnError::SubmissionError { .. } => "Try again in a moment.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_reasons_have_distinct_messages() {
        let messages: Vec<String> = [
            ReadinessState::MissingPersonPhoto,
            ReadinessState::MissingGarmentPhoto,
            ReadinessState::MissingBoth,
        ]
        .into_iter()
        .map(|s| ComposerError::NotReady(s).to_string())
        .collect();

        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn composer_error_converts_and_keeps_reason() {
        let err: TryOnError = ComposerError::NotReady(ReadinessState::MissingBoth).into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("both"));
        assert!(matches!(
            err,
            TryOnError::Composer(ComposerError::NotReady(ReadinessState::MissingBoth))
        ));
    }

    #[test]
    fn config_errors_are_high_severity() {
        let err = TryOnError::ConfigParseError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
