//! Query handle over a compiled schema and one scan of its tokens.

use crate::error::{ArgError, SchemaError};
use crate::scanner::scan;
use crate::schema::compile;
use crate::types::{ArgValue, ErrorCode, ParseResult, Schema};

/// Parsed command-line arguments.
///
/// ```
/// use argschema_core::Args;
///
/// let args = Args::new("l,p#,d*", &["-l", "-p", "42", "-d", "test"]).unwrap();
/// assert!(args.is_valid());
/// assert!(args.get_boolean('l'));
/// assert_eq!(args.get_int('p'), 42);
/// assert_eq!(args.get_string('d'), "test");
/// ```
#[derive(Debug, Clone)]
pub struct Args {
    schema: Schema,
    result: ParseResult,
}

impl Args {
    /// Compile `schema_text` and scan `tokens` against it.
    ///
    /// Only a malformed schema is an error here; bad tokens are reported
    /// through [`is_valid`](Self::is_valid) and
    /// [`error_message`](Self::error_message).
    pub fn new<S: AsRef<str>>(schema_text: &str, tokens: &[S]) -> Result<Self, SchemaError> {
        let schema = compile(schema_text)?;
        let result = scan(&schema, tokens);
        Ok(Self { schema, result })
    }

    /// Scan `tokens` against an already compiled schema.
    pub fn with_schema<S: AsRef<str>>(schema: &Schema, tokens: &[S]) -> Self {
        Self {
            schema: schema.clone(),
            result: scan(schema, tokens),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// `false` when `id` is unknown, not a boolean flag, or not present.
    pub fn get_boolean(&self, id: char) -> bool {
        matches!(self.result.value(id), Some(ArgValue::Boolean(true)))
    }

    /// `""` when `id` is unknown, not a string flag, or not present.
    pub fn get_string(&self, id: char) -> &str {
        match self.result.value(id) {
            Some(ArgValue::String(s)) => s.as_str(),
            _ => "",
        }
    }

    /// `0` when `id` is unknown, not an integer flag, or not present.
    pub fn get_int(&self, id: char) -> i64 {
        match self.result.value(id) {
            Some(ArgValue::Integer(n)) => *n,
            _ => 0,
        }
    }

    pub fn has(&self, id: char) -> bool {
        self.result.has(id)
    }

    /// Number of distinct flags found.
    pub fn cardinality(&self) -> usize {
        self.result.cardinality()
    }

    pub fn usage(&self) -> String {
        self.schema.usage()
    }

    pub fn error_code(&self) -> ErrorCode {
        self.result.error_code()
    }

    pub fn errors(&self) -> &[ArgError] {
        self.result.errors()
    }

    pub fn try_error_message(&self) -> Option<String> {
        self.result.error_message()
    }

    /// Message describing the most recent error.
    ///
    /// # Panics
    ///
    /// Panics if the arguments are valid; check [`is_valid`](Self::is_valid)
    /// first or use [`try_error_message`](Self::try_error_message).
    pub fn error_message(&self) -> String {
        match self.result.error_message() {
            Some(message) => message,
            None => panic!("error_message called on valid arguments"),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn result(&self) -> &ParseResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_getters() {
        let args = Args::new("l,p#,d*", &["-l", "-p", "42", "-d", "test"]).unwrap();
        assert!(args.is_valid());
        assert!(args.get_boolean('l'));
        assert_eq!(args.get_int('p'), 42);
        assert_eq!(args.get_string('d'), "test");
        assert_eq!(args.cardinality(), 3);
        assert_eq!(args.usage(), "-[l,p#,d*]");
    }

    #[test]
    fn args_zero_values_for_unknown() {
        let args = Args::new("l,p#,d*", &["-l"]).unwrap();
        assert!(!args.get_boolean('q'));
        assert_eq!(args.get_string('q'), "");
        assert_eq!(args.get_int('q'), 0);
        assert!(!args.has('q'));
    }

    #[test]
    fn args_getters_check_kind() {
        let args = Args::new("l,p#", &["-l", "-p", "3"]).unwrap();
        assert_eq!(args.get_int('l'), 0);
        assert!(!args.get_boolean('p'));
        assert_eq!(args.get_string('p'), "");
    }

    #[test]
    fn args_schema_error() {
        let err = Args::new("3", &["-x"]).unwrap_err();
        assert!(matches!(err, SchemaError::BadIdentifier { id: '3', .. }));
    }

    #[test]
    fn args_with_compiled_schema() {
        let schema = compile("v,n#").unwrap();
        let first = Args::with_schema(&schema, &["-v"]);
        let second = Args::with_schema(&schema, &["-n", "8"]);
        assert!(first.has('v'));
        assert!(!first.has('n'));
        assert_eq!(second.get_int('n'), 8);
        assert!(!second.get_boolean('v'));
    }

    #[test]
    fn args_error_message() {
        let args = Args::new("l", &["-l", "-x"]).unwrap();
        assert!(!args.is_valid());
        assert_eq!(args.error_code(), ErrorCode::UnexpectedArgument);
        assert_eq!(args.error_message(), "Argument(s) -x unexpected.");
    }

    #[test]
    fn args_try_error_message_when_valid() {
        let args = Args::new("l", &["-l"]).unwrap();
        assert_eq!(args.try_error_message(), None);
        assert_eq!(args.error_code(), ErrorCode::Ok);
    }

    #[test]
    #[should_panic(expected = "error_message called on valid arguments")]
    fn args_error_message_when_valid_panics() {
        let args = Args::new("l", &["-l"]).unwrap();
        let _ = args.error_message();
    }
}
