use argschema_core::ffi::ParseReport;
use argschema_core::{ArgValue, Args};

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Scan `tokens` against `schema`. Returns the rendered output and whether
/// the arguments were valid.
pub fn run_parse(
    schema: &str,
    tokens: &[String],
    format: OutputFormat,
) -> Result<(String, bool), CliError> {
    let args = Args::new(schema, tokens)?;
    let valid = args.is_valid();

    match format {
        OutputFormat::Json => {
            let report = ParseReport::new(args.schema(), args.result().clone());
            let json = serde_json::to_string_pretty(&report)?;
            Ok((json, valid))
        }
        OutputFormat::Human => Ok((render_human(&args), valid)),
    }
}

fn render_human(args: &Args) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(message) = args.try_error_message() {
        lines.push(format!("error[{}]: {message}", args.error_code()));
        let usage = args.usage();
        if !usage.is_empty() {
            lines.push(format!("usage: {usage}"));
        }
        let count = args.errors().len();
        let error_word = if count == 1 { "error" } else { "errors" };
        lines.push(format!("{count} {error_word}."));
        return lines.join("\n");
    }

    for (id, value) in args.result().values() {
        let kind = args
            .schema()
            .kind_of(id)
            .map(|k| k.to_string())
            .unwrap_or_default();
        let shown = match value {
            ArgValue::String(s) => format!("{s:?}"),
            other => other.to_string(),
        };
        let marker = if args.has(id) { "" } else { " (default)" };
        lines.push(format!("-{id} {kind}: {shown}{marker}"));
    }

    let count = args.cardinality();
    let flag_word = if count == 1 { "flag" } else { "flags" };
    lines.push(format!("{count} {flag_word} found."));

    lines.join("\n")
}
