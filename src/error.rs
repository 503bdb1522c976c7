use thiserror::Error;

/// Error type for gxfgrep operations.
#[derive(Debug, Error)]
pub enum GxfGrepError {
    /// Input extension is missing or not supported.
    #[error("unsupported input extension: {0}")]
    UnsupportedExtension(String),
    /// A data line that could not be parsed into a record.
    #[error("malformed record at line {line}: {kind} in {text:?}")]
    MalformedRecord {
        /// 1-based line number of the offending line.
        line: usize,
        /// What exactly failed to parse.
        kind: MalformedKind,
        /// Raw line text, without the trailing newline.
        text: String,
    },
    /// A filter was requested on a field the dispatcher does not know.
    #[error("unsupported filter field: {0:?}")]
    UnsupportedFilterField(String),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason a data line failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedKind {
    #[error("expected 9 tab-separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid start coordinate {0:?}")]
    Start(String),
    #[error("invalid end coordinate {0:?}")]
    End(String),
    #[error("invalid score {0:?}")]
    Score(String),
    #[error("invalid strand {0:?}, expected one of + - . ?")]
    Strand(String),
    #[error("invalid phase {0:?}")]
    Phase(String),
    #[error("attribute segment {0:?} has no key/value separator")]
    Attribute(String),
}

/// Result alias for gxfgrep operations.
pub type Result<T> = std::result::Result<T, GxfGrepError>;
