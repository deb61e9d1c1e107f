use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::parser::parse_declaration;

/// A named value source for variant selection.
///
/// Declarations describe where a selector's value comes from. They are
/// stored as raw strings (`"input count"`, `"local countPlural = count:
/// plural"`) and parsed into this sum type, forcing every consumer to
/// handle the malformed case explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Value taken verbatim from the caller-supplied parameters.
    Input {
        /// Parameter name to read.
        name: String,
    },

    /// Value derived from parameter `source` by applying `transform`.
    ///
    /// The only transform with defined semantics is `"plural"`, whose
    /// `options` may carry `type=ordinal` to request ordinal rather than
    /// cardinal categorization.
    Local {
        /// Selector name this declaration defines.
        name: String,
        /// Parameter the value is derived from.
        source: String,
        /// Transform applied to the source parameter.
        transform: String,
        /// Whitespace-separated `key=value` options after the transform.
        options: BTreeMap<String, String>,
    },

    /// Declaration text that matched neither known grammar.
    ///
    /// Evaluation falls back to a raw parameter lookup by the selector's
    /// own name. Constructing this variant never fails; malformed input
    /// is always representable.
    Unknown {
        /// The original declaration text, preserved verbatim.
        raw: String,
    },
}

impl Declaration {
    /// The selector name this declaration defines, if it parsed.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Input { name } | Declaration::Local { name, .. } => Some(name),
            Declaration::Unknown { .. } => None,
        }
    }
}

impl Display for Declaration {
    /// Renders the canonical declaration text, so declarations round-trip
    /// through the stored string form.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Declaration::Input { name } => write!(f, "input {name}"),
            Declaration::Local {
                name,
                source,
                transform,
                options,
            } => {
                write!(f, "local {name} = {source}: {transform}")?;
                for (key, value) in options {
                    write!(f, " {key}={value}")?;
                }
                Ok(())
            }
            Declaration::Unknown { raw } => write!(f, "{raw}"),
        }
    }
}

impl From<&str> for Declaration {
    fn from(s: &str) -> Self {
        parse_declaration(s)
    }
}

impl Serialize for Declaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Declaration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_declaration(&raw))
    }
}
