//! Declaration string parser using winnow.
//!
//! Recognizes the two declaration grammars:
//! - `input <name>`
//! - `local <name> = <source>: <transform> [<key>=<value> ...]`
//!
//! Anything else becomes `Declaration::Unknown` carrying the original
//! text. This is a deliberately lossy-but-total parse: the engine keeps
//! functioning on malformed input by falling back to a raw parameter
//! lookup, so parse failure is a diagnostic, never an error.

use std::collections::BTreeMap;

use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::Diagnostic;
use crate::types::Declaration;

/// Parse a single declaration string. Total: never fails.
pub fn parse_declaration(raw: &str) -> Declaration {
    let mut input = raw.trim();
    match declaration(&mut input) {
        Ok(decl) if input.trim().is_empty() => decl,
        _ => Declaration::Unknown {
            raw: raw.to_string(),
        },
    }
}

/// Parse a sequence of raw declaration strings.
///
/// Order is preserved. Malformed strings yield `Declaration::Unknown`.
pub fn parse_declarations<S: AsRef<str>>(raw: &[S]) -> Vec<Declaration> {
    raw.iter()
        .map(|s| parse_declaration(s.as_ref()))
        .collect()
}

/// Parse raw declaration strings, collecting a diagnostic for each one
/// that matched neither grammar.
pub fn parse_declarations_with_diagnostics<S: AsRef<str>>(
    raw: &[S],
) -> (Vec<Declaration>, Vec<Diagnostic>) {
    let declarations = parse_declarations(raw);
    let diagnostics = declarations
        .iter()
        .filter_map(|decl| match decl {
            Declaration::Unknown { raw } => Some(Diagnostic::MalformedDeclaration {
                raw: raw.clone(),
            }),
            Declaration::Input { .. } | Declaration::Local { .. } => None,
        })
        .collect();
    (declarations, diagnostics)
}

/// Parse either declaration form.
fn declaration(input: &mut &str) -> ModalResult<Declaration> {
    alt((input_declaration, local_declaration)).parse_next(input)
}

/// Parse `input <name>`.
fn input_declaration(input: &mut &str) -> ModalResult<Declaration> {
    preceded(("input", ws1), identifier)
        .map(|name| Declaration::Input {
            name: name.to_string(),
        })
        .parse_next(input)
}

/// Parse `local <name> = <source>: <transform> [<key>=<value> ...]`.
fn local_declaration(input: &mut &str) -> ModalResult<Declaration> {
    let (name, source, transform, tokens): (_, _, _, Vec<&str>) = (
        preceded(("local", ws1), identifier),
        preceded((ws, '=', ws), identifier),
        preceded((ws, ':', ws), identifier),
        repeat(0.., preceded(ws1, option_token)),
    )
        .parse_next(input)?;

    // Tokens without `=` are ignored.
    let mut options = BTreeMap::new();
    for token in tokens {
        if let Some((key, value)) = token.split_once('=') {
            options.insert(key.to_string(), value.to_string());
        }
    }

    Ok(Declaration::Local {
        name: name.to_string(),
        source: source.to_string(),
        transform: transform.to_string(),
        options,
    })
}

/// Parse a single whitespace-separated option token.
fn option_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

/// Parse required whitespace.
fn ws1(input: &mut &str) -> ModalResult<()> {
    take_while(1.., char::is_whitespace).void().parse_next(input)
}

/// Parse an identifier (alphanumeric with underscores).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
