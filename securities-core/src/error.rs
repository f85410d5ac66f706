//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use securities_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A hash that matches no registered rule, or a rule that cannot be rendered
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Type taxonomy could not be resolved within the retry policy
    #[error("Security types unavailable after {attempts} attempts: {reason}")]
    TaxonomyUnavailable { attempts: u32, reason: String },

    /// Action has no handler (save / saveas)
    #[error("Action not available: {0}")]
    ActionUnavailable(String),

    /// No security selected for an action that needs one
    #[error("No security selected")]
    NoSelection,

    /// Validation error (dialog input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Template could not be rendered
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Local storage error (history file, etc.)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidRoute(_)
            | Self::ActionUnavailable(_)
            | Self::NoSelection
            | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::TaxonomyUnavailable { .. }
            | Self::TemplateError(_)
            | Self::StorageError(_)
            | Self::SerializationError(_) => false,
        }
    }

    /// Message shown to the user, without backend tags.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider(e) => e.user_message(),
            other => other.to_string(),
        }
    }

    /// Logs at `warn` for expected errors and `error` otherwise.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
