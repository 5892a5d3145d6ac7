use log::{debug, trace};

use crate::catalogs::FLAG_PREFIX;
use crate::error::ArgError;
use crate::types::{ArgKind, ArgValue, ParseResult, Schema};

// --- Scanner state ---

struct ScanState<'a, S> {
    schema: &'a Schema,
    tokens: &'a [S],
    cursor: usize,
    result: ParseResult,
}

impl<'a, S: AsRef<str>> ScanState<'a, S> {
    /// Consume the token after the cursor as a companion value.
    fn next_companion(&mut self) -> Option<&'a str> {
        let tokens = self.tokens;
        let next = tokens.get(self.cursor + 1)?;
        self.cursor += 1;
        Some(next.as_ref())
    }

    fn set(&mut self, id: char, value: ArgValue) {
        self.result.values.insert(id, value);
    }

    fn fail(&mut self, error: ArgError) {
        trace!(error:?; "Scan error");
        self.result.errors.push(error);
    }
}

/// Scan a token sequence against a compiled schema.
///
/// Only tokens starting with `-` are inspected; every character after the
/// dash is a separate flag. String and integer flags take the following
/// token as their value.
pub fn scan<S: AsRef<str>>(schema: &Schema, tokens: &[S]) -> ParseResult {
    let mut state = ScanState {
        schema,
        tokens,
        cursor: 0,
        result: ParseResult::seeded(schema),
    };

    while state.cursor < tokens.len() {
        process_token(&mut state);
        state.cursor += 1;
    }

    let mut result = state.result;
    result.valid = result.errors.is_empty();

    debug!(
        tokens = tokens.len(),
        found = result.found.len(),
        errors = result.errors.len(),
        valid = result.valid;
        "Scanned tokens"
    );
    result
}

fn process_token<S: AsRef<str>>(state: &mut ScanState<'_, S>) {
    let tokens = state.tokens;
    let token = tokens[state.cursor].as_ref();

    match token.strip_prefix(FLAG_PREFIX) {
        Some(flags) => {
            for flag in flags.chars() {
                process_flag(flag, state);
            }
        }
        None => state.result.ignored.push(state.cursor),
    }
}

fn process_flag<S: AsRef<str>>(flag: char, state: &mut ScanState<'_, S>) {
    let Some(kind) = state.schema.kind_of(flag) else {
        state.result.unexpected.insert(flag);
        state.fail(ArgError::UnexpectedArgument(flag));
        return;
    };

    state.result.found.insert(flag);

    match kind {
        ArgKind::Boolean => state.set(flag, ArgValue::Boolean(true)),
        ArgKind::String => match state.next_companion() {
            Some(value) => state.set(flag, ArgValue::String(value.to_string())),
            None => state.fail(ArgError::MissingString(flag)),
        },
        ArgKind::Integer => match state.next_companion() {
            Some(text) => match text.parse::<i64>() {
                Ok(n) => state.set(flag, ArgValue::Integer(n)),
                Err(_) => state.fail(ArgError::InvalidInteger {
                    argument: flag,
                    parameter: text.to_string(),
                }),
            },
            None => state.fail(ArgError::MissingInteger(flag)),
        },
    }
}
