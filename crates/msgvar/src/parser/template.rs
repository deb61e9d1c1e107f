//! Template string parser using winnow.
//!
//! Parses message templates into literal and `{identifier}` placeholder
//! segments. Identifiers are word characters only; a `{` that does not
//! open a well-formed placeholder stays literal text, so the parse is
//! total.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template segments in order.
    pub segments: Vec<Segment>,
}

/// A single template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to output verbatim.
    Literal(String),
    /// A `{identifier}` placeholder, substituted from parameters.
    Placeholder(String),
}

/// Parse a template string. Total: never fails.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let segments: Vec<Segment> =
        repeat(0.., segment).parse_next(&mut remaining).unwrap_or_default();
    Template {
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a `{identifier}` placeholder.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', identifier, '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Parse any single character as literal text.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder identifier (word characters).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
