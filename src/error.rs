//! Error handling for passforge

use thiserror::Error;

/// Main error type for passforge
#[derive(Error, Debug, Clone)]
pub enum PassForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsatisfiable constraint: {message}")]
    Unsatisfiable { message: String },

    #[error("Output error: {message}")]
    Sink { message: String },
}

impl PassForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsatisfiable constraint error
    pub fn unsatisfiable(message: impl Into<String>) -> Self {
        Self::Unsatisfiable {
            message: message.into(),
        }
    }

    /// Create an output sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Process exit code for this error category
    ///
    /// Exit code 1 is left to failures outside this taxonomy.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Unsatisfiable { .. } => 3,
            Self::Sink { .. } => 4,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Use --help for the accepted options and value formats", message)
            }
            Self::Unsatisfiable { message } => {
                format!("❌ Unsatisfiable constraint: {}\n💡 Grow the alphabet or relax the constraint", message)
            }
            Self::Sink { message } => {
                format!("❌ Output error: {}\n💡 Check where standard output is going", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for PassForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::sink(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassForgeError>;

/// Helper macro for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PassForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassForgeError::config(format!($fmt, $($arg)*))
    };
}
