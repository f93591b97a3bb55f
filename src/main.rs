//! jsontree CLI.
//!
//! Reads JSON from a file or stdin, parses it, and re-emits it compact or
//! indented. Malformed input is reported with its structural location and a
//! nonzero exit code.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jsontree::{indented, parse_with_limits, serialize, Format, Limits};

#[derive(Parser)]
#[command(name = "jsontree")]
#[command(about = "Parse JSON and re-emit it compact or indented", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Emit compact output instead of indented
    #[arg(long)]
    compact: bool,

    /// Indentation width for indented output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Maximum nesting depth (1..=1200)
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("jsontree: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let text = read_input(cli.file.as_deref())?;

    let limits = match cli.max_depth {
        Some(depth) => Limits::with_max_depth(depth).map_err(|e| e.to_string())?,
        None => Limits::default(),
    };

    let value = parse_with_limits(&text, limits).map_err(|e| e.to_string())?;

    if cli.compact {
        Ok(serialize(&value))
    } else {
        let options = Format {
            indent: cli.indent,
            ..Format::default()
        };
        Ok(indented(&value, &options))
    }
}

fn read_input(file: Option<&std::path::Path>) -> Result<String, String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| e.to_string())?;
            Ok(text)
        }
    }
}
