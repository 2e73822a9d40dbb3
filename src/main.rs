use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use mixcalc::{error::Diagnostic, evaluate, evaluate_lines, is_blank};
use tracing_subscriber::EnvFilter;

/// mixcalc evaluates arithmetic written in infix notation, reverse Polish
/// notation, or a mix of both on the same line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mixcalc to read CONTENTS as a file and evaluate it line by line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Disables colored error reports.
    #[arg(long)]
    no_color: bool,

    /// An expression to evaluate, or a path when --file is given. Starts an
    /// interactive prompt when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match args.contents {
        Some(path) if args.file => run_file(&path),
        Some(expression) => run_line(&expression),
        None => run_repl(),
    }
}

fn run_line(line: &str) -> ExitCode {
    match evaluate(line) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            report(&Diagnostic::new(line, &e), None);
            ExitCode::FAILURE
        },
    }
}

fn run_file(path: &str) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut status = ExitCode::SUCCESS;
    for evaluation in evaluate_lines(&source) {
        match &evaluation.result {
            Ok(value) => println!("{value}"),
            Err(e) => {
                report(&Diagnostic::new(evaluation.line, e), Some(evaluation.line_number));
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}

fn run_repl() -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut buffer = String::new();

    loop {
        if interactive {
            print!("> ");
            if io::stdout().flush().is_err() {
                return ExitCode::FAILURE;
            }
        }

        buffer.clear();
        match input.read_line(&mut buffer) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if is_blank(line) {
            continue;
        }
        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => report(&Diagnostic::new(line, &e), None),
        }
    }
}

/// Prints a colored caret report to standard error.
fn report(diagnostic: &Diagnostic<'_>, line_number: Option<usize>) {
    let error = diagnostic.error();
    let location = line_number.map_or_else(String::new, |n| format!(" (line {n})"));
    let gutter = "|".blue().bold();

    eprintln!("{}: {}{location}", "error".red().bold(), error.message().bold());
    eprintln!("  {gutter} {}", diagnostic.source_line());
    eprintln!("  {gutter} {:width$}{} {}",
              "",
              "^".red().bold(),
              error.hint().yellow(),
              width = diagnostic.caret_column());
}
