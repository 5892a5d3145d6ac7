use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::catalogs::KIND_MARKERS;
use crate::error::ArgError;

// ---------------------------------------------------------------------------
// Argument kinds and values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Boolean,
    String,
    Integer,
}

impl ArgKind {
    /// Match a schema type suffix exactly (`""`, `"*"`, `"#"`).
    pub fn from_marker(marker: &str) -> Option<ArgKind> {
        KIND_MARKERS
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, kind)| *kind)
    }

    pub fn marker(self) -> &'static str {
        match self {
            ArgKind::Boolean => "",
            ArgKind::String => "*",
            ArgKind::Integer => "#",
        }
    }

    /// Value a declared flag holds before it is seen.
    pub fn zero_value(self) -> ArgValue {
        match self {
            ArgKind::Boolean => ArgValue::Boolean(false),
            ArgKind::String => ArgValue::String(String::new()),
            ArgKind::Integer => ArgValue::Integer(0),
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::Boolean => "boolean",
            ArgKind::String => "string",
            ArgKind::Integer => "integer",
        };
        f.write_str(name)
    }
}

/// Union type for scanned values (bool | string | integer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Boolean(bool),
    String(String),
    Integer(i64),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Boolean(b) => write!(f, "{b}"),
            ArgValue::String(s) => f.write_str(s),
            ArgValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Compiled schema
// ---------------------------------------------------------------------------

/// Compiled schema: one [`ArgKind`] per declared identifier, in declaration
/// order. Built by [`compile`](crate::compile) and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    source: String,
    declarations: IndexMap<char, ArgKind>,
}

impl Schema {
    pub(crate) fn new(source: &str, declarations: IndexMap<char, ArgKind>) -> Self {
        Self {
            source: source.to_string(),
            declarations,
        }
    }

    /// The schema text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind_of(&self, id: char) -> Option<ArgKind> {
        self.declarations.get(&id).copied()
    }

    pub fn declares(&self, id: char) -> bool {
        self.declarations.contains_key(&id)
    }

    pub fn declarations(&self) -> impl Iterator<Item = (char, ArgKind)> + '_ {
        self.declarations.iter().map(|(id, kind)| (*id, *kind))
    }

    /// Identifiers declared with the given kind, in declaration order.
    pub fn identifiers(&self, kind: ArgKind) -> impl Iterator<Item = char> + '_ {
        self.declarations()
            .filter(move |(_, k)| *k == kind)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// `-[<schema text>]`, or an empty string for empty schema text.
    pub fn usage(&self) -> String {
        if self.source.is_empty() {
            String::new()
        } else {
            format!("-[{}]", self.source)
        }
    }
}

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum ErrorCode {
    Ok,
    MissingString,
    MissingInteger,
    InvalidInteger,
    UnexpectedArgument,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",
            ErrorCode::MissingString => "MISSING_STRING",
            ErrorCode::MissingInteger => "MISSING_INTEGER",
            ErrorCode::InvalidInteger => "INVALID_INTEGER",
            ErrorCode::UnexpectedArgument => "UNEXPECTED_ARGUMENT",
        }
    }
}

impl From<ErrorCode> for &'static str {
    fn from(code: ErrorCode) -> Self {
        code.as_str()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scan result
// ---------------------------------------------------------------------------

/// Outcome of scanning one token sequence against a [`Schema`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    pub(crate) values: IndexMap<char, ArgValue>,
    pub(crate) found: IndexSet<char>,
    pub(crate) unexpected: IndexSet<char>,
    /// Indices of tokens skipped because they do not start with `-`.
    pub(crate) ignored: Vec<usize>,
    pub(crate) errors: Vec<ArgError>,
    pub(crate) valid: bool,
}

impl ParseResult {
    /// Empty result with every declared identifier set to its zero value.
    pub(crate) fn seeded(schema: &Schema) -> Self {
        Self {
            values: schema
                .declarations()
                .map(|(id, kind)| (id, kind.zero_value()))
                .collect(),
            valid: true,
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn value(&self, id: char) -> Option<&ArgValue> {
        self.values.get(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = (char, &ArgValue)> + '_ {
        self.values.iter().map(|(id, value)| (*id, value))
    }

    pub fn has(&self, id: char) -> bool {
        self.found.contains(&id)
    }

    /// Flags seen in the token stream, in first-seen order.
    pub fn found(&self) -> impl Iterator<Item = char> + '_ {
        self.found.iter().copied()
    }

    pub fn cardinality(&self) -> usize {
        self.found.len()
    }

    /// Distinct undeclared flag characters, in first-seen order.
    pub fn unexpected(&self) -> impl Iterator<Item = char> + '_ {
        self.unexpected.iter().copied()
    }

    pub fn ignored(&self) -> &[usize] {
        &self.ignored
    }

    pub fn errors(&self) -> &[ArgError] {
        &self.errors
    }

    /// Code of the most recent error, or [`ErrorCode::Ok`].
    pub fn error_code(&self) -> ErrorCode {
        self.errors.last().map_or(ErrorCode::Ok, ArgError::code)
    }

    /// Message for the most recent error. An unexpected-argument message
    /// lists every unexpected character of the scan.
    pub fn error_message(&self) -> Option<String> {
        let last = self.errors.last()?;
        Some(match last {
            ArgError::UnexpectedArgument(_) => {
                let chars: String = self.unexpected.iter().collect();
                format!("Argument(s) -{chars} unexpected.")
            }
            other => other.to_string(),
        })
    }
}
