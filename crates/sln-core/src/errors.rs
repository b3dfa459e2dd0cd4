//! Error types for solution file parsing.

use thiserror::Error;

/// Errors during parsing.
///
/// Parsing is fail-fast: the first failure anywhere in the document is the
/// one reported, and no partial document is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected input at line {line}, column {column}: expected {expected}, found {found:?}")]
    Syntax {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    #[error("Unrecognized load sequence for section {section:?} at line {line}")]
    InvalidLoadSequence { section: String, line: u32 },

    #[error("{construct} not found before end of input (line {line})")]
    Unterminated { construct: &'static str, line: u32 },

    #[error("Malformed GUID {value:?} at line {line}, column {column}")]
    MalformedGuid {
        value: String,
        line: u32,
        column: u32,
    },
}
