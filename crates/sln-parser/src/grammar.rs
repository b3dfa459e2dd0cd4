//! Grammar rules for Visual Studio solution files.
//!
//! Rules compose bottom-up: primitives into structural fragments into the
//! document. Each rule consumes a prefix of the remaining input and returns
//! the unconsumed remainder with its result; no fragment is mutated after
//! construction, and the first failure anywhere aborts the whole parse.

use nom::bytes::complete::{tag, take_till, take_until, take_while};
use nom::character::complete::{char, multispace0, not_line_ending, space0};
use nom::combinator::{all_consuming, cut, map, verify};
use nom::error::context;
use nom::multi::{many0, many1};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::Finish;
use tracing::{debug, trace};

use sln_core::{
    FormatVersion, GlobalSection, LoadSequence, ParseError, ProjectDeclaration, Property,
    PropertyMap, SectionPayload, SolutionFile, SolutionHeader,
};

use crate::error::{into_parse_error, GrammarError};
use crate::primitives::{
    guid, integer, keyword, lexeme, quoted_string, round_bracketed, Input, PResult,
};

/// Parse a complete solution file.
///
/// The whole input must be consumed (trailing whitespace aside); a failure
/// in any sub-rule propagates unchanged and no partial document is
/// produced.
pub fn parse_solution(input: &str) -> Result<SolutionFile, ParseError> {
    // Files written by Visual Studio open with a UTF-8 byte-order mark.
    let source = input.strip_prefix('\u{feff}').unwrap_or(input);
    match all_consuming(solution)(source).finish() {
        Ok((_, document)) => {
            debug!(
                projects = document.projects.len(),
                sections = document.global_sections.len(),
                "parsed solution file"
            );
            Ok(document)
        }
        Err(err) => Err(into_parse_error(source, err)),
    }
}

/// `Solution := Header Project* Global`
fn solution(input: Input<'_>) -> PResult<'_, SolutionFile> {
    let (input, header) = header(input)?;
    let (input, projects) = many0(project)(input)?;
    let (input, sections) = global(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, SolutionFile::new(header, projects, sections)))
}

/// `Header := "Microsoft Visual Studio Solution File, Format Version"
/// Version "#" ProductName`
pub fn header(input: Input<'_>) -> PResult<'_, SolutionHeader> {
    let (input, _) = context(
        "solution file header",
        keyword("Microsoft Visual Studio Solution File, Format Version"),
    )(input)?;
    let (input, format_version) = cut(format_version)(input)?;
    let (input, product_name) = cut(product_name)(input)?;
    Ok((
        input,
        SolutionHeader {
            format_version,
            product_name,
        },
    ))
}

/// `Version := Integer "." Integer`
pub fn format_version(input: Input<'_>) -> PResult<'_, FormatVersion> {
    let (input, (major, minor)) = context(
        "format version",
        separated_pair(integer, char('.'), integer),
    )(input)?;
    Ok((input, FormatVersion { major, minor }))
}

/// `#` followed by free text up to end of line; the text, trimmed, is the
/// product name and must be non-empty.
pub fn product_name(input: Input<'_>) -> PResult<'_, String> {
    let (input, _) = context("product name", preceded(multispace0, char('#')))(input)?;
    let (rest, name) = map(not_line_ending, str::trim)(input)?;
    if name.is_empty() {
        return Err(GrammarError::expected(input, "product name"));
    }
    Ok((rest, name.to_string()))
}

/// `Project "(" GUID ")" "=" QuotedString "," QuotedString "," QuotedGUID
/// "EndProject"`
///
/// Both GUID positions accept any of the three spellings.
pub fn project(input: Input<'_>) -> PResult<'_, ProjectDeclaration> {
    let (input, _) = keyword("Project")(input)?;
    let (input, type_id) = cut(delimited(lexeme(char('(')), guid, lexeme(char(')'))))(input)?;
    let (input, _) = cut(lexeme(char('=')))(input)?;
    let (input, name) = cut(quoted_string)(input)?;
    let (input, _) = cut(lexeme(char(',')))(input)?;
    let (input, path) = cut(quoted_string)(input)?;
    let (input, _) = cut(lexeme(char(',')))(input)?;
    let (input, project_id) = cut(guid)(input)?;
    let (input, _) = terminator(input, "EndProject")?;
    Ok((
        input,
        ProjectDeclaration {
            type_id,
            name: name.to_string(),
            path: path.to_string(),
            project_id,
        },
    ))
}

/// `Property := Name "=" Value`: name up to the `=`, value up to end of
/// line, both trimmed. The name must sit on one line, so a section
/// terminator can never be swallowed as a property.
pub fn property(input: Input<'_>) -> PResult<'_, Property> {
    let (input, _) = multispace0(input)?;
    let (input, name) = verify(
        map(
            take_till(|c| c == '=' || c == '\r' || c == '\n'),
            str::trim,
        ),
        |name: &str| !name.is_empty(),
    )(input)?;
    let (input, _) = char('=')(input)?;
    let (input, value) = map(not_line_ending, str::trim)(input)?;
    Ok((
        input,
        Property {
            name: name.to_string(),
            value: value.to_string(),
        },
    ))
}

/// Outcome of the load-sequence keyword recognizer.
///
/// `Unrecognized` is an internal signal only: section validation turns it
/// into a hard failure before any section value is constructed, so it never
/// appears in a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSequenceKeyword {
    Recognized(LoadSequence),
    Unrecognized,
}

/// The keyword after a section's `=`: `preSolution`, `postSolution`, or
/// anything else (including nothing) as the unrecognized signal.
pub fn load_sequence_keyword(input: Input<'_>) -> PResult<'_, LoadSequenceKeyword> {
    let (rest, word) = preceded(space0, take_while(|c: char| c.is_ascii_alphanumeric()))(input)?;
    let resolved = match word {
        "preSolution" => LoadSequenceKeyword::Recognized(LoadSequence::PreSolution),
        "postSolution" => LoadSequenceKeyword::Recognized(LoadSequence::PostSolution),
        _ => LoadSequenceKeyword::Unrecognized,
    };
    Ok((rest, resolved))
}

/// Payload parser selection by exact, case-sensitive section name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Properties,
    ConfigurationPlatforms,
    Unknown,
}

impl SectionKind {
    fn of(name: &str) -> Self {
        match name {
            "SolutionProperties" => SectionKind::Properties,
            "SolutionConfigurationPlatforms" | "ProjectConfigurationPlatforms" => {
                SectionKind::ConfigurationPlatforms
            }
            _ => SectionKind::Unknown,
        }
    }
}

/// `Section := "GlobalSection" "(" Name ")" "=" LoadSeq Payload
/// "EndGlobalSection"`
///
/// The bracketed name selects the payload parser; unknown names fall back
/// to verbatim capture. An unrecognized load-sequence keyword rejects the
/// whole section after its terminator has been consumed.
pub fn global_section(input: Input<'_>) -> PResult<'_, GlobalSection> {
    let (input, _) = keyword("GlobalSection")(input)?;
    let (input, name) = cut(round_bracketed)(input)?;
    let (input, _) = cut(preceded(multispace0, char('=')))(input)?;
    let keyword_at = input;
    let (input, sequence_keyword) = load_sequence_keyword(input)?;
    let (input, payload) = section_payload(input, name)?;
    let (input, _) = terminator(input, "EndGlobalSection")?;

    let load_sequence = match sequence_keyword {
        LoadSequenceKeyword::Recognized(sequence) => sequence,
        LoadSequenceKeyword::Unrecognized => {
            return Err(GrammarError::invalid_load_sequence(keyword_at, name));
        }
    };
    trace!(section = name, ?load_sequence, "parsed global section");
    Ok((
        input,
        GlobalSection {
            name: name.to_string(),
            load_sequence,
            payload,
        },
    ))
}

fn section_payload<'a>(input: Input<'a>, name: &str) -> PResult<'a, SectionPayload> {
    match SectionKind::of(name) {
        SectionKind::Properties => map(properties_payload, SectionPayload::Properties)(input),
        SectionKind::ConfigurationPlatforms => map(raw_payload, |text| {
            SectionPayload::ConfigurationPlatforms(text.to_string())
        })(input),
        SectionKind::Unknown => map(raw_payload, |text| SectionPayload::Raw(text.to_string()))(input),
    }
}

/// `Property+` collected in source order.
fn properties_payload(input: Input<'_>) -> PResult<'_, PropertyMap> {
    map(
        cut(many1(context("property", property))),
        PropertyMap::from_properties,
    )(input)
}

/// Verbatim capture up to (not including) the section terminator.
fn raw_payload(input: Input<'_>) -> PResult<'_, &str> {
    let captured: PResult<'_, &str> = take_until("EndGlobalSection")(input);
    match captured {
        Ok(ok) => Ok(ok),
        Err(_) => Err(GrammarError::unterminated(input, "EndGlobalSection")),
    }
}

/// `Global := "Global" Section* "EndGlobal"`
pub fn global(input: Input<'_>) -> PResult<'_, Vec<GlobalSection>> {
    let (input, _) = context("Global block", keyword("Global"))(input)?;
    let (input, sections) = many0(global_section)(input)?;
    let (input, _) = terminator(input, "EndGlobal")?;
    Ok((input, sections))
}

/// A required closing keyword. Exhausted input reports the construct as
/// unterminated; anything else at the position is a syntax error.
fn terminator<'a>(input: Input<'a>, construct: &'static str) -> PResult<'a, ()> {
    let (rest, _) = multispace0(input)?;
    if rest.is_empty() {
        return Err(GrammarError::unterminated(rest, construct));
    }
    let matched: PResult<'a, Input<'a>> = tag(construct)(rest);
    match matched {
        Ok((rest, _)) => Ok((rest, ())),
        Err(_) => Err(GrammarError::expected_failure(rest, construct)),
    }
}
