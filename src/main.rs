use std::{
    fs,
    io::{self, Write},
    process,
};

use calcr::{evaluate, tokenize};
use clap::Parser;
use log::{debug, info};

/// calcr evaluates integer arithmetic expressions such as `(2 + 3) * 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcr to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Do not print a prompt when reading from standard input.
    #[arg(short, long)]
    quiet: bool,

    /// The expression, or the path when `--file` is given. Read from standard
    /// input when omitted.
    contents: Option<String>,
}

/// Evaluates one expression and prints the result or the error.
///
/// Returns whether evaluation succeeded.
fn run(expression: &str) -> bool {
    debug!("evaluating {expression:?}");

    let outcome = tokenize(expression).map_err(|e| e.to_string())
                                      .and_then(|tokens| {
                                          debug!("lexed {} tokens", tokens.len());
                                          evaluate(tokens).map_err(|e| e.to_string())
                                      });

    match outcome {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(message) => {
            info!("evaluation of {expression:?} failed");
            eprintln!("{message}");
            false
        },
    }
}

fn read_line(quiet: bool) -> io::Result<String> {
    if !quiet {
        println!("Enter an expression:");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let ok = match (args.contents, args.file) {
        (Some(path), true) => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                process::exit(1);
            });
            // Evaluate every line so that one bad expression does not hide the rest.
            script.lines()
                  .filter(|line| !line.trim().is_empty())
                  .map(run)
                  .fold(true, |all, ok| all && ok)
        },
        (Some(expression), false) => run(&expression),
        (None, _) => {
            let line = read_line(args.quiet).unwrap_or_else(|e| {
                eprintln!("Failed to read from standard input: {e}");
                process::exit(1);
            });
            run(&line)
        },
    };

    if !ok {
        process::exit(1);
    }
}
