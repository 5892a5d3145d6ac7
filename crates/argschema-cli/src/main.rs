mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use config::load_config;
use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "argschema",
    version,
    about = "argschema — parse command-line tokens against a compact flag schema"
)]
struct Cli {
    /// Path to configuration file (YAML, defaults to ./argschema.config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse tokens against a schema and print the typed values
    Parse {
        /// Schema text, e.g. "l,p#,d*"
        #[arg(short, long)]
        schema: Option<String>,

        /// Output format: human (default) or json
        #[arg(long)]
        format: Option<String>,

        /// Tokens to parse, given after `--`
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Print the usage line for a schema
    Usage {
        /// Schema text, e.g. "l,p#,d*"
        #[arg(short, long)]
        schema: Option<String>,
    },

    /// Compile a schema and list its declarations
    Check {
        /// Schema text, e.g. "l,p#,d*"
        #[arg(short, long)]
        schema: Option<String>,

        /// Output format: human (default) or json
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            cli.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(cli:?; "Parsed arguments");

    match run(cli) {
        Ok((output, success)) => {
            println!("{output}");
            if !success {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}

/// Run the selected command. Returns the text to print and whether the
/// command succeeded.
fn run(cli: Cli) -> Result<(String, bool), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse {
            schema,
            format,
            tokens,
        } => {
            let schema = config.resolve_schema(schema)?;
            let format = config.resolve_format(format)?;
            commands::parse::run_parse(&schema, &tokens, format)
        }
        Commands::Usage { schema } => {
            let schema = config.resolve_schema(schema)?;
            Ok((commands::schema::run_usage(&schema)?, true))
        }
        Commands::Check { schema, format } => {
            let schema = config.resolve_schema(schema)?;
            let format = config.resolve_format(format)?;
            Ok((commands::schema::run_check(&schema, format)?, true))
        }
    }
}
