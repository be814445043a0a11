use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{info, LevelFilter};
use shunting_calculator::interpreter::{evaluate, format_expression};
use shunting_calculator::keypad::{Calculator, Key};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions made of numbers and + - * /
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Without one, keys are read from standard input
    /// (digits, '.', + - * /, 'c' to clear, '=' to evaluate, 'q' to quit).
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let level = args
        .verbose
        .log_level()
        .map_or(LevelFilter::Off, |level| level.to_level_filter());
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.expression {
        Some(expression) => evaluate_once(&expression, io::stdout().lock()),
        None => run_keypad(io::stdin().lock(), io::stdout().lock()),
    }
}

fn evaluate_once(expression: &str, mut output: impl Write) -> Result<()> {
    let value = evaluate(expression)
        .with_context(|| format!("could not evaluate '{}'", expression))?;
    writeln!(output, "{} = {}", format_expression(expression)?, value)?;
    Ok(())
}

fn run_keypad(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut calculator = Calculator::new();
    writeln!(output, "{}", calculator.display())?;

    for line in input.lines() {
        let line = line.context("could not read from standard input")?;
        if matches!(line.trim(), "q" | "quit") {
            break;
        }

        for key in line.chars().filter_map(Key::from_char) {
            if !calculator.press(key) {
                info!("ignored {:?}", key);
            }
        }
        writeln!(output, "{}", calculator.display())?;
    }
    Ok(())
}
