//! Parser-internal error representation and its mapping onto the public
//! [`ParseError`] taxonomy.

use nom::error::{ContextError, ErrorKind, FromExternalError};
use nom::Offset;
use sln_core::ParseError;
use thiserror::Error;

/// What went wrong, without position information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarErrorKind {
    /// A literal token, delimiter, or primitive shape was not found.
    #[error("expected {0}")]
    Expected(&'static str),

    /// A section's load-sequence keyword did not resolve to a recognized
    /// value.
    #[error("unrecognized load sequence for section {section:?}")]
    InvalidLoadSequence { section: String },

    /// A closing keyword was never found before input ended.
    #[error("{construct} not found before end of input")]
    Unterminated { construct: &'static str },

    /// A GUID-shaped token with wrong hex-group lengths.
    #[error("malformed GUID {value:?}")]
    MalformedGuid { value: String },

    /// A bare nom error with no richer diagnosis attached.
    #[error("{0:?}")]
    Nom(ErrorKind),
}

/// Error produced by the grammar rules, pointing at the unconsumed input.
///
/// Rule-level callers see this type directly; [`crate::parse_solution`]
/// converts it into [`sln_core::ParseError`] with line/column positions
/// resolved against the full source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct GrammarError<'a> {
    /// Remaining input at the point of failure
    pub input: &'a str,
    pub kind: GrammarErrorKind,
}

impl<'a> GrammarError<'a> {
    pub(crate) fn expected(input: &'a str, what: &'static str) -> nom::Err<Self> {
        nom::Err::Error(GrammarError {
            input,
            kind: GrammarErrorKind::Expected(what),
        })
    }

    pub(crate) fn expected_failure(input: &'a str, what: &'static str) -> nom::Err<Self> {
        nom::Err::Failure(GrammarError {
            input,
            kind: GrammarErrorKind::Expected(what),
        })
    }

    pub(crate) fn unterminated(input: &'a str, construct: &'static str) -> nom::Err<Self> {
        nom::Err::Failure(GrammarError {
            input,
            kind: GrammarErrorKind::Unterminated { construct },
        })
    }

    pub(crate) fn malformed_guid(input: &'a str, value: String) -> nom::Err<Self> {
        nom::Err::Failure(GrammarError {
            input,
            kind: GrammarErrorKind::MalformedGuid { value },
        })
    }

    pub(crate) fn invalid_load_sequence(input: &'a str, section: &str) -> nom::Err<Self> {
        nom::Err::Failure(GrammarError {
            input,
            kind: GrammarErrorKind::InvalidLoadSequence {
                section: section.to_string(),
            },
        })
    }
}

impl<'a> nom::error::ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        GrammarError {
            input,
            kind: GrammarErrorKind::Nom(kind),
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<&'a str> for GrammarError<'a> {
    fn add_context(input: &'a str, ctx: &'static str, other: Self) -> Self {
        // Context names a grammar rule; it replaces bare nom errors only,
        // the richer diagnoses already carry their own story.
        match other.kind {
            GrammarErrorKind::Nom(_) => GrammarError {
                input,
                kind: GrammarErrorKind::Expected(ctx),
            },
            _ => other,
        }
    }
}

impl<'a, E> FromExternalError<&'a str, E> for GrammarError<'a> {
    fn from_external_error(input: &'a str, kind: ErrorKind, _err: E) -> Self {
        GrammarError {
            input,
            kind: GrammarErrorKind::Nom(kind),
        }
    }
}

/// Convert a grammar error into the public error type, locating the point
/// of failure inside the original source text.
pub(crate) fn into_parse_error(source: &str, err: GrammarError<'_>) -> ParseError {
    let (line, column) = position(source, err.input);
    match err.kind {
        GrammarErrorKind::Expected(expected) => ParseError::Syntax {
            expected: expected.to_string(),
            found: found_snippet(err.input),
            line,
            column,
        },
        GrammarErrorKind::Nom(kind) => ParseError::Syntax {
            expected: kind.description().to_string(),
            found: found_snippet(err.input),
            line,
            column,
        },
        GrammarErrorKind::InvalidLoadSequence { section } => {
            ParseError::InvalidLoadSequence { section, line }
        }
        GrammarErrorKind::Unterminated { construct } => {
            ParseError::Unterminated { construct, line }
        }
        GrammarErrorKind::MalformedGuid { value } => ParseError::MalformedGuid {
            value,
            line,
            column,
        },
    }
}

/// 1-based line and column of `remaining` within `source`.
fn position(source: &str, remaining: &str) -> (u32, u32) {
    let offset = source.offset(remaining);
    let consumed = &source[..offset];
    let line = consumed.matches('\n').count() as u32 + 1;
    let column = match consumed.rfind('\n') {
        Some(newline) => offset - newline - 1,
        None => offset,
    } as u32
        + 1;
    (line, column)
}

fn found_snippet(remaining: &str) -> String {
    if remaining.is_empty() {
        return "end of input".to_string();
    }
    let line = remaining.lines().next().unwrap_or("");
    if line.chars().count() > 24 {
        let truncated: String = line.chars().take(24).collect();
        format!("{truncated}...")
    } else {
        line.to_string()
    }
}
