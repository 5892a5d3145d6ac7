use crate::types::ArgKind;

/// Type markers recognized after an identifier in a schema element,
/// in the order they are tried.
pub const KIND_MARKERS: [(&str, ArgKind); 3] = [
    ("", ArgKind::Boolean),
    ("*", ArgKind::String),
    ("#", ArgKind::Integer),
];

/// Separator between schema elements (`"l,p#,d*"`).
pub const SCHEMA_SEPARATOR: char = ',';

/// Only tokens starting with this character are scanned for flags.
pub const FLAG_PREFIX: char = '-';

/// Reported in every JSON parse report.
pub const PARSER_VERSION: &str = env!("CARGO_PKG_VERSION");
