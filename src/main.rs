use std::fs;

use binops::get_result;
use clap::Parser;

/// binops evaluates bitwise assignment statements, one per line, and prints
/// the value assigned by the last one.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells binops to read the statements from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Only print the final value, without echoing the statements.
    #[arg(short, long)]
    quiet: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match get_result(&script) {
        Ok(result) => {
            if !args.quiet {
                println!("The read expressions are:");
                for line in script.lines() {
                    println!("{line}");
                }
            }
            if let Some(value) = result {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
