//! Pretty-print a JSON document.
//!
//! ```text
//! cargo run --features json --example format_json -- data.json
//! echo '{"b": 1, "a": [true]}' | cargo run --features json --example format_json
//! ```

use clap::Parser;
use pretty_format::{format_with, FormatOptions, Value};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(about = "Pretty-print a JSON document with sorted keys and type annotations")]
struct Args {
    /// JSON file to read. Reads stdin if omitted.
    path: Option<PathBuf>,

    /// Spaces of indentation per nesting level.
    #[arg(short, long, default_value_t = 2)]
    indent: usize,
}

fn read_input(path: &Option<PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() {
    let args = Args::parse();

    let input = match read_input(&args.path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("failed to read input: {}", err);
            process::exit(1);
        }
    };
    let json: serde_json::Value = match serde_json::from_str(&input) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("invalid JSON: {}", err);
            process::exit(1);
        }
    };

    let options = FormatOptions {
        indent_width: args.indent,
        ..FormatOptions::default()
    };
    match format_with(&Value::from(json), &options) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("cannot format: {}", err);
            process::exit(1);
        }
    }
}
