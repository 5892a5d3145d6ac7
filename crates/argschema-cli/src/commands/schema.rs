use argschema_core::compile;

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Compile a schema and list its declarations.
pub fn run_check(schema: &str, format: OutputFormat) -> Result<String, CliError> {
    let compiled = compile(schema)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&compiled)?),
        OutputFormat::Human => {
            let mut lines: Vec<String> = compiled
                .declarations()
                .map(|(id, kind)| format!("-{id} {kind}"))
                .collect();

            let count = compiled.len();
            let word = if count == 1 {
                "declaration"
            } else {
                "declarations"
            };
            lines.push(format!("{count} {word}."));
            Ok(lines.join("\n"))
        }
    }
}

pub fn run_usage(schema: &str) -> Result<String, CliError> {
    Ok(compile(schema)?.usage())
}
