//! Error types for schema compilation and argument scanning.
//!
//! The two channels are kept apart: a [`SchemaError`] means the schema text
//! itself is malformed (a programming mistake in the caller), while an
//! [`ArgError`] describes bad runtime input and is recorded inside a
//! [`ParseResult`](crate::ParseResult) instead of being returned.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::types::ErrorCode;

/// Malformed schema text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Bad character {id} in Args format: {schema}")]
    BadIdentifier { id: char, schema: String },

    #[error("Argument {id} has invalid format: {marker}")]
    InvalidFormat { id: char, marker: String },
}

/// A problem found while scanning tokens against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("Argument(s) -{0} unexpected.")]
    UnexpectedArgument(char),

    #[error("Could not find string parameter for -{0}.")]
    MissingString(char),

    #[error("Could not find integer parameter for -{0}.")]
    MissingInteger(char),

    #[error("Argument -{argument} expects an integer but was '{parameter}'.")]
    InvalidInteger { argument: char, parameter: String },
}

impl ArgError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ArgError::UnexpectedArgument(_) => ErrorCode::UnexpectedArgument,
            ArgError::MissingString(_) => ErrorCode::MissingString,
            ArgError::MissingInteger(_) => ErrorCode::MissingInteger,
            ArgError::InvalidInteger { .. } => ErrorCode::InvalidInteger,
        }
    }

    /// The flag character the error is about.
    pub fn argument(&self) -> char {
        match self {
            ArgError::UnexpectedArgument(id)
            | ArgError::MissingString(id)
            | ArgError::MissingInteger(id) => *id,
            ArgError::InvalidInteger { argument, .. } => *argument,
        }
    }

    /// The offending companion value, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ArgError::InvalidInteger { parameter, .. } => Some(parameter.as_str()),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ArgErrorRecord<'a> {
    code: ErrorCode,
    argument: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<&'a str>,
    message: String,
}

impl Serialize for ArgError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ArgErrorRecord {
            code: self.code(),
            argument: self.argument(),
            parameter: self.parameter(),
            message: self.to_string(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_messages() {
        let bad = SchemaError::BadIdentifier {
            id: '1',
            schema: "1,p#".into(),
        };
        assert_eq!(bad.to_string(), "Bad character 1 in Args format: 1,p#");

        let format = SchemaError::InvalidFormat {
            id: 'p',
            marker: "##".into(),
        };
        assert_eq!(format.to_string(), "Argument p has invalid format: ##");
    }

    #[test]
    fn arg_error_messages() {
        assert_eq!(
            ArgError::UnexpectedArgument('x').to_string(),
            "Argument(s) -x unexpected."
        );
        assert_eq!(
            ArgError::MissingString('d').to_string(),
            "Could not find string parameter for -d."
        );
        assert_eq!(
            ArgError::MissingInteger('p').to_string(),
            "Could not find integer parameter for -p."
        );
        assert_eq!(
            ArgError::InvalidInteger {
                argument: 'p',
                parameter: "abc".into()
            }
            .to_string(),
            "Argument -p expects an integer but was 'abc'."
        );
    }

    #[test]
    fn arg_error_accessors() {
        let err = ArgError::InvalidInteger {
            argument: 'n',
            parameter: "4x".into(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidInteger);
        assert_eq!(err.argument(), 'n');
        assert_eq!(err.parameter(), Some("4x"));
        assert_eq!(ArgError::MissingString('d').parameter(), None);
    }
}
