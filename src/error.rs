use std::num::ParseIntError;

/// Result type for fetching and assembling standings
pub type Result<T> = std::result::Result<T, StandingsError>;

/// A `"W-L-OT"` string that could not be read as a record
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordFormatError {
    #[error("expected 3 '-'-separated values in '{input}', found {found}")]
    FieldCount { input: String, found: usize },

    #[error("'{part}' in '{input}' is not an integer: {source}")]
    InvalidNumber {
        input: String,
        part: String,
        #[source]
        source: ParseIntError,
    },
}

/// A single column of a standings row that failed to parse
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("{field}: {source}")]
    Record {
        field: &'static str,
        #[source]
        source: RecordFormatError,
    },

    #[error("{field}: '{value}' is not an integer: {source}")]
    Integer {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FieldError {
    /// Name of the column that failed, if a single column is to blame
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::ColumnCount { .. } => None,
            Self::Record { field, .. } | Self::Integer { field, .. } => Some(*field),
        }
    }
}

/// An 11-token chunk that did not convert into a team.
///
/// Carries the raw tokens so a page-format change can be diagnosed from the log.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse team row {chunk:?}: {source}")]
pub struct ChunkParseError {
    pub chunk: Vec<String>,
    #[source]
    pub source: FieldError,
}

/// Errors that abort a standings run
#[derive(thiserror::Error, Debug)]
pub enum StandingsError {
    #[error("invalid standings URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("standings table not found (selector `{selector}`)")]
    TableNotFound { selector: String },

    #[error("invalid table selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

impl StandingsError {
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }
}
