//! Error types for inspection.

use std::io;

/// Errors that can occur while building a configuration or rendering a value.
///
/// Inspection is best-effort: the only rendering-time failure is a classified
/// type name with no handler behind it, which is a configuration mistake and
/// is reported rather than papered over.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// A value classified to a type name with no registered handler.
    #[error("no handler registered for type \"{0}\"")]
    MissingHandler(String),

    /// An override file or document could not be parsed.
    #[error("invalid override document: {0}")]
    InvalidOverride(String),

    /// A skip pattern failed to compile.
    #[error("invalid skip pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Failed to read an override file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
