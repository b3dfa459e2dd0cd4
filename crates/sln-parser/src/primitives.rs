//! Tokenized primitive recognizers the structural rules are built from.
//!
//! Every primitive consumes a prefix of the remaining input and returns the
//! unconsumed remainder with its result; surrounding whitespace is
//! insignificant unless a rule says otherwise.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while_m_n};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{cut, map, map_res, recognize};
use nom::error::context;
use nom::sequence::{delimited, terminated, tuple};
use nom::IResult;
use nom::Parser;

use sln_core::Guid;

use crate::error::GrammarError;

pub type Input<'a> = &'a str;

/// Result type of every grammar rule in this crate.
pub type PResult<'a, O> = IResult<Input<'a>, O, GrammarError<'a>>;

/// Run `inner` with insignificant surrounding whitespace consumed.
pub(crate) fn lexeme<'a, O, F>(inner: F) -> impl FnMut(Input<'a>) -> PResult<'a, O>
where
    F: Parser<Input<'a>, O, GrammarError<'a>>,
{
    delimited(multispace0, inner, multispace0)
}

/// A literal keyword, tokenized.
pub(crate) fn keyword<'a>(word: &'static str) -> impl FnMut(Input<'a>) -> PResult<'a, &'a str> {
    lexeme(tag(word))
}

/// One or more decimal digits, no sign, tokenized.
pub fn integer(input: Input<'_>) -> PResult<'_, u32> {
    context("integer", lexeme(map_res(digit1, str::parse::<u32>)))(input)
}

/// `(` then any characters except `)` then `)`, trimmed. Used for section
/// names.
pub fn round_bracketed(input: Input<'_>) -> PResult<'_, &str> {
    context(
        "round-bracketed string",
        lexeme(delimited(
            char('('),
            map(take_while(|c| c != ')'), str::trim),
            cut(char(')')),
        )),
    )(input)
}

/// `"` then any characters except `"` then `"`, trimmed. Used for project
/// names and paths.
pub fn quoted_string(input: Input<'_>) -> PResult<'_, &str> {
    context(
        "quoted string",
        lexeme(delimited(
            char('"'),
            map(take_while(|c| c != '"'), str::trim),
            cut(char('"')),
        )),
    )(input)
}

/// A GUID in any accepted spelling: plain `8-4-4-4-12` hex groups,
/// brace-wrapped, or quote-and-brace-wrapped. All spellings normalize to
/// the same [`Guid`] value.
pub fn guid(input: Input<'_>) -> PResult<'_, Guid> {
    context(
        "GUID",
        lexeme(alt((
            delimited(char('"'), braced_guid, cut(char('"'))),
            braced_guid,
            guid_body,
        ))),
    )(input)
}

fn hex_group<'a>(len: usize) -> impl FnMut(Input<'a>) -> PResult<'a, &'a str> {
    take_while_m_n(len, len, |c: char| c.is_ascii_hexdigit())
}

/// The canonical hyphenated form without any wrapping.
fn guid_body(input: Input<'_>) -> PResult<'_, Guid> {
    let (rest, text) = recognize(tuple((
        hex_group(8),
        char('-'),
        hex_group(4),
        char('-'),
        hex_group(4),
        char('-'),
        hex_group(4),
        char('-'),
        hex_group(12),
    )))(input)?;
    match text.parse::<Guid>() {
        Ok(guid) => Ok((rest, guid)),
        Err(_) => Err(GrammarError::malformed_guid(input, text.to_string())),
    }
}

/// `{` ... `}` wrapper. The opening brace commits: a wrong-shaped body is a
/// malformed-GUID failure, not a backtrack.
fn braced_guid(input: Input<'_>) -> PResult<'_, Guid> {
    let (body, _) = char('{')(input)?;
    match terminated(guid_body, char('}'))(body) {
        Ok(ok) => Ok(ok),
        Err(nom::Err::Incomplete(needed)) => Err(nom::Err::Incomplete(needed)),
        Err(_) => Err(GrammarError::malformed_guid(input, guid_token_snippet(input))),
    }
}

/// The offending token for a malformed-GUID report: up to the closing brace
/// when it sits on the same line, otherwise the rest of the line.
fn guid_token_snippet(input: &str) -> String {
    let line = input.lines().next().unwrap_or("");
    match line.find('}') {
        Some(close) => line[..=close].to_string(),
        None => line.to_string(),
    }
}
