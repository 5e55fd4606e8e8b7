//! Error types for flatjson-config.

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while flattening a single JSON document.
///
/// Both kinds are terminal: the whole parse is abandoned and no partial map is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The document is not valid JSON, or its shape is not accepted.
    #[error("{message}{}", position(.path, .line, .column))]
    Format {
        /// What went wrong
        message: String,
        /// Canonical path reached when the error occurred (empty when unknown or at the root)
        path: String,
        /// One-based line reported by the reader, if known
        line: Option<usize>,
        /// One-based column reported by the reader, if known
        column: Option<usize>,
    },

    /// Two leaves resolve to the same canonical path (case-insensitive).
    #[error("A duplicate key '{path}' was found.")]
    DuplicateKey {
        /// The path already present in the map
        path: String,
    },
}

impl ParseError {
    /// Create a format error without position information.
    pub fn format(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            path: path.into(),
            line: None,
            column: None,
        }
    }

    /// Create a duplicate key error.
    pub fn duplicate_key(path: impl Into<String>) -> Self {
        Self::DuplicateKey { path: path.into() }
    }

    /// The canonical path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::Format { path, .. } | Self::DuplicateKey { path } => path,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors that are not tied to the input
        let (line, column) = match err.line() {
            0 => (None, None),
            line => (Some(line), Some(err.column())),
        };

        // Strip the " at line X column Y" suffix, the position is kept separately
        let message = err.to_string();
        let message = match message.rfind(" at line ") {
            Some(idx) if line.is_some() => message[..idx].to_string(),
            _ => message,
        };

        Self::Format {
            message: format!("Invalid JSON: {}", message),
            path: String::new(),
            line,
            column,
        }
    }
}

fn position(path: &str, line: &Option<usize>, column: &Option<usize>) -> String {
    match (path, line, column) {
        ("", Some(line), Some(column)) => format!(". Line {} position {}.", line, column),
        ("", _, _) => ".".to_string(),
        (path, Some(line), Some(column)) => {
            format!(". Path '{}', line {} position {}.", path, line, column)
        }
        (path, _, _) => format!(". Path '{}'.", path),
    }
}

/// Errors that can occur when loading configuration from a source.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The source content could not be flattened.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] ParseError),

    /// Failed to load configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
