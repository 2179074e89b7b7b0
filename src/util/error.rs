// QuoteDeck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal
// chain for diagnostic logging.
//
// Note the deliberately small surface: ingestion, filtering, and date
// normalisation are total functions and have no error types at all.
// Only the transport step (loading the dataset file) and export can fail.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all QuoteDeck operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum QuoteDeckError {
    /// Dataset loading failed (the only fallible step of ingestion).
    Load(LoadError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for QuoteDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for QuoteDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors (transport)
// ---------------------------------------------------------------------------

/// Errors reading the dataset file. A load failure is terminal for that
/// attempt; there is no retry. Malformed content never appears here —
/// wrong field counts are repaired during ingestion, not raised.
#[derive(Debug)]
pub enum LoadError {
    /// The dataset path does not exist.
    NotFound { path: PathBuf },

    /// The dataset path is a directory, not a file.
    NotAFile { path: PathBuf },

    /// The dataset file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File content is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// I/O error while reading the file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Dataset '{}' does not exist", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "Dataset path '{}' is not a file", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Dataset '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "'{}': I/O error: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for QuoteDeckError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for QuoteDeckError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for QuoteDeck results.
pub type Result<T> = std::result::Result<T, QuoteDeckError>;
