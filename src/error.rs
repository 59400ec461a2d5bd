//! Error types for the scaffolding pipeline

use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No feature name was supplied on the command line
    #[error("Please provide a feature name (e.g., product or UserLog)")]
    MissingName,

    /// A module with the derived feature name already exists
    #[error("Module \"{name}\" already exists. Please choose a different name or remove the existing directory.")]
    ModuleExists {
        /// Kebab-case feature name of the colliding module
        name: String,
    },

    /// Template registration failed
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Directory creation or file write failed
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Whether this error is reported to the user as a single message.
    ///
    /// Reported errors are expected failure modes with their own wording;
    /// everything else propagates with its full error chain.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::MissingName | Self::ModuleExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_message() {
        let err = ScaffoldError::MissingName;
        assert_eq!(
            err.to_string(),
            "Please provide a feature name (e.g., product or UserLog)"
        );
        assert!(err.is_reported());
    }

    #[test]
    fn test_module_exists_message() {
        let err = ScaffoldError::ModuleExists {
            name: "user-log".to_string(),
        };
        assert!(err.to_string().contains("\"user-log\" already exists"));
        assert!(err.is_reported());
    }

    #[test]
    fn test_io_errors_are_propagated() {
        let err = ScaffoldError::from(std::io::Error::other("disk full"));
        assert!(!err.is_reported());
        assert!(err.to_string().contains("disk full"));
    }
}
