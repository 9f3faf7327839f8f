use std::path::Path;
use thiserror::Error;

/// Result type alias using the structured error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// A snapshot root is missing or not a directory
    InvalidInput,

    // Classification / listing structure
    /// A declaration line matched none of the classification patterns
    Parse,
    /// The first declaration of a listing is not a type declaration
    MissingTypeDeclaration,
    /// The same symbol identity appeared twice under the fail-fast policy
    DuplicateSymbol,

    // Configuration
    Config,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::MissingTypeDeclaration => "ERR_MISSING_TYPE_DECLARATION",
            ExErrorKind::DuplicateSymbol => "ERR_DUPLICATE_SYMBOL",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the listing
/// context (file, line, offending text) needed to diagnose a failed run.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    line: Option<usize>,
    text: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            line: None,
            text: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the listing or snapshot path the error occurred in
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.display().to_string());
        self
    }

    /// Add the 1-based line number within a listing
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add the offending raw text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the line context, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the offending text, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            match self.line {
                Some(line) => write!(f, " ({}:{})", path, line)?,
                None => write!(f, " ({})", path)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised while reading, diffing and rendering snapshots
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiDiffError {
    /// A declaration line matched none of the four patterns
    #[error("Could not parse {text}")]
    Unparseable { text: String },

    /// First declaration of a listing is not a type declaration
    #[error("First declaration must declare a type, found {kind_label}: {text}")]
    MissingTypeDeclaration { kind_label: String, text: String },

    /// Identity seen twice while duplicates are rejected
    #[error("Duplicate symbol {signature} in {class}")]
    DuplicateSymbol { class: String, signature: String },

    /// Snapshot root missing or not a directory
    #[error("Invalid snapshot root {path}: {reason}")]
    SnapshotRootInvalid { path: String, reason: String },

    /// Filesystem failure
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Configuration could not be read or decoded
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ApiDiffError> for ExError {
    fn from(err: ApiDiffError) -> Self {
        let message = err.to_string();
        match err {
            ApiDiffError::Unparseable { text } => ExError::new(ExErrorKind::Parse)
                .with_op("classify_line")
                .with_text(text)
                .with_message(message),

            ApiDiffError::MissingTypeDeclaration { text, .. } => {
                ExError::new(ExErrorKind::MissingTypeDeclaration)
                    .with_op("parse_listing")
                    .with_text(text)
                    .with_message(message)
            }

            ApiDiffError::DuplicateSymbol { signature, .. } => {
                ExError::new(ExErrorKind::DuplicateSymbol)
                    .with_op("insert_symbol")
                    .with_text(signature)
                    .with_message(message)
            }

            ApiDiffError::SnapshotRootInvalid { path, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("parse_snapshot")
                    .with_path(Path::new(&path))
                    .with_message(message)
            }

            ApiDiffError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_path(Path::new(&path))
                .with_message(message),

            ApiDiffError::Config { .. } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),

            ApiDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ApiDiffError
impl From<serde_json::Error> for ApiDiffError {
    fn from(err: serde_json::Error) -> Self {
        ApiDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Create an IO error for the given path
pub fn io_error(operation: &str, path: &Path, err: &std::io::Error) -> ExError {
    ExError::from(ApiDiffError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
    .with_op(operation.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::Parse, "ERR_PARSE"),
            (
                ExErrorKind::MissingTypeDeclaration,
                "ERR_MISSING_TYPE_DECLARATION",
            ),
            (ExErrorKind::DuplicateSymbol, "ERR_DUPLICATE_SYMBOL"),
            (ExErrorKind::Config, "ERR_CONFIG"),
            (ExErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_path_and_line() {
        let err = ExError::new(ExErrorKind::Parse)
            .with_op("parse_listing")
            .with_path(Path::new("snap/Widget"))
            .with_line(3)
            .with_message("Could not parse ???");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PARSE] in operation 'parse_listing'"));
        assert!(rendered.contains("(snap/Widget:3)"));
    }
}
