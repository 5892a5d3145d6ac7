use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, trace, warn};
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::catalogs::SCHEMA_SEPARATOR;
use crate::error::SchemaError;
use crate::types::{ArgKind, Schema};

/// Compile schema text such as `"l,p#,d*"` into a [`Schema`].
///
/// Elements are separated by commas and trimmed; empty elements are
/// skipped, so trailing commas are fine. When an identifier is declared
/// more than once the last declaration wins.
pub fn compile(text: &str) -> Result<Schema, SchemaError> {
    let mut declarations: IndexMap<char, ArgKind> = IndexMap::new();

    for element in text.split(SCHEMA_SEPARATOR) {
        let element = element.trim();
        let mut chars = element.chars();
        let Some(id) = chars.next() else {
            continue;
        };

        if !is_letter(id) {
            return Err(SchemaError::BadIdentifier {
                id,
                schema: text.to_string(),
            });
        }

        let marker = chars.as_str();
        let kind = ArgKind::from_marker(marker).ok_or_else(|| SchemaError::InvalidFormat {
            id,
            marker: marker.to_string(),
        })?;
        trace!(id:?, kind:?; "Schema element");

        if let Some(previous) = declarations.insert(id, kind) {
            warn!(id:?, previous:?, kind:?; "Identifier declared twice, keeping last declaration");
        }
    }

    debug!(schema = text, declarations = declarations.len(); "Compiled schema");
    Ok(Schema::new(text, declarations))
}

/// Identifiers must be in one of the Unicode `L*` general categories.
fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}
