//! Parser for Visual Studio solution files.
//!
//! The grammar is a set of composable nom recognizers: primitives
//! (integers, bracketed and quoted strings, GUIDs) assembled into
//! structural rules (header, project declaration, property, load-sequence
//! keyword) and a per-section-name dispatch over payload parsers with a
//! raw-capture fallback for unknown names.
//!
//! [`parse_solution`] is the entry point. The individual rules are also
//! exported so a single rule can be run against a snippet, which is how the
//! focused tests exercise them.

mod error;
mod grammar;
mod primitives;

pub use error::{GrammarError, GrammarErrorKind};
pub use grammar::{
    format_version, global, global_section, header, load_sequence_keyword, parse_solution,
    product_name, project, property, LoadSequenceKeyword,
};
pub use primitives::{guid, integer, quoted_string, round_bracketed, Input, PResult};
