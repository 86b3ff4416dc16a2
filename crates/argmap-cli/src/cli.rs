//! argmap CLI - Inspect how an argument vector parses
//!
//! Usage:
//!   argmap dump -- -port=8333 -nolisten --debug
//!   argmap get -port --as int -- -port=8333
//!   argmap get -listen --as bool --default true -- -nolisten

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use argmap_core::ArgTable;

/// argmap - Argument-vector parsing with negation rules and typed lookup
#[derive(Parser)]
#[command(name = "argmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an argument vector and print the resulting option table
    Dump {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Tokens to parse, given after `--`
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Parse an argument vector and look up a single option
    Get {
        /// Option name including its leading dash, e.g. -port
        #[arg(allow_hyphen_values = true)]
        name: String,

        /// Lookup type: string, int, bool
        #[arg(long = "as", default_value = "string")]
        as_type: String,

        /// Default value if the option is absent
        #[arg(short, long)]
        default: Option<String>,

        /// Fail instead of falling back to a default
        #[arg(short, long)]
        required: bool,

        /// Tokens to parse, given after `--`
        #[arg(last = true)]
        tokens: Vec<String>,
    },
}

/// Run the CLI with the given arguments
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { format, tokens } => cmd_dump(&format, tokens),

        Commands::Get {
            name,
            as_type,
            default,
            required,
            tokens,
        } => cmd_get(&name, &as_type, default, required, tokens),
    }
}

fn cmd_dump(format: &str, tokens: Vec<String>) -> ExitCode {
    let args = ArgTable::parse(&tokens);

    match format {
        "json" => {
            let json =
                serde_json::to_string_pretty(&args).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
            ExitCode::SUCCESS
        }
        "text" => {
            for (name, value) in args.iter() {
                println!("{}={}", name, value);
            }
            ExitCode::SUCCESS
        }
        other => {
            eprintln!(
                "{}: unknown format '{}' (expected text or json)",
                "Error".red(),
                other
            );
            ExitCode::from(2)
        }
    }
}

fn cmd_get(
    name: &str,
    as_type: &str,
    default: Option<String>,
    required: bool,
    tokens: Vec<String>,
) -> ExitCode {
    let args = ArgTable::parse(&tokens);

    match as_type {
        "string" => {
            if required {
                match args.require_str(name) {
                    Ok(value) => {
                        println!("{}", value);
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("{}: {}", "Error".red(), e);
                        ExitCode::from(1)
                    }
                }
            } else {
                println!("{}", args.get_str(name, default.as_deref().unwrap_or("")));
                ExitCode::SUCCESS
            }
        }

        "int" => {
            if required {
                match args.require_i64(name) {
                    Ok(value) => {
                        println!("{}", value);
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("{}: {}", "Error".red(), e);
                        ExitCode::from(1)
                    }
                }
            } else {
                let default = match default.as_deref().map(str::parse::<i64>) {
                    Some(Ok(d)) => d,
                    Some(Err(_)) => {
                        eprintln!(
                            "{}: --default must be an integer for --as int",
                            "Error".red()
                        );
                        return ExitCode::from(2);
                    }
                    None => 0,
                };
                println!("{}", args.get_i64(name, default));
                ExitCode::SUCCESS
            }
        }

        "bool" => {
            let default = match default.as_deref() {
                None => false,
                Some("true") | Some("1") => true,
                Some("false") | Some("0") => false,
                Some(other) => {
                    eprintln!(
                        "{}: --default must be true or false for --as bool, got '{}'",
                        "Error".red(),
                        other
                    );
                    return ExitCode::from(2);
                }
            };
            if required && !args.contains(name) {
                eprintln!("{}: option '{}' was not given", "Error".red(), name);
                return ExitCode::from(1);
            }
            println!("{}", args.get_bool(name, default));
            ExitCode::SUCCESS
        }

        other => {
            eprintln!(
                "{}: unknown type '{}' (expected string, int, or bool)",
                "Error".red(),
                other
            );
            ExitCode::from(2)
        }
    }
}
