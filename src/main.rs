//! Calcpad - terminal front end for the calculator state machine.
//!
//! Keys are given as arguments or typed on stdin. A token is either a named
//! key (`Enter`, `Backspace`, `Delete`, `Escape`, `Negate`) or a run of
//! one-character keys, so `12~+7=` works as a single token.

use anyhow::{Context, Result};
use calcpad::builder::{CalculatorBuilder, CalculatorConfig};
use calcpad::core::Tape;
use calcpad::engine::{Action, Calculator, Readout};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const NAMED_KEYS: [&str; 5] = ["Enter", "Backspace", "Delete", "Escape", "Negate"];

#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about = "Keystroke-driven calculator")]
struct Args {
    /// TOML file with calculator settings
    #[arg(long, env = "CALCPAD_CONFIG")]
    config: Option<PathBuf>,

    /// Ignore digits beyond this many in a typed number
    #[arg(long)]
    max_digits: Option<usize>,

    /// Thousands separator on the display
    #[arg(long)]
    separator: Option<char>,

    /// Print each readout as JSON
    #[arg(long)]
    json: bool,

    /// Keys to apply; reads stdin interactively when omitted
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut calc = build_calculator(&args)?;

    if !args.keys.is_empty() {
        for token in &args.keys {
            apply_token(&mut calc, token)?;
        }
        return print_readout(&calc.readout(), args.json);
    }

    run_interactive(&mut calc, args.json)
}

fn build_calculator(args: &Args) -> Result<Calculator> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let mut builder = CalculatorBuilder::new().config(config);
    if let Some(max) = args.max_digits {
        builder = builder.max_digits(max);
    }
    if let Some(separator) = args.separator {
        builder = builder.grouping_separator(separator);
    }
    Ok(builder.build()?)
}

/// Split a token into key names.
fn keys_in(token: &str) -> Vec<String> {
    if NAMED_KEYS.contains(&token) {
        vec![token.to_string()]
    } else {
        token.chars().map(String::from).collect()
    }
}

fn apply_token(calc: &mut Calculator, token: &str) -> Result<()> {
    for key in keys_in(token) {
        let action = Action::from_key(&key)?;
        calc.dispatch(action);
    }
    Ok(())
}

fn run_interactive(calc: &mut Calculator, json: bool) -> Result<()> {
    print_readout(&calc.readout(), json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":tape" => {
                print_tape(calc)?;
                continue;
            }
            _ => {}
        }

        for token in line.split_whitespace() {
            if let Err(err) = apply_token(calc, token) {
                warn!(token, "Skipping rest of token");
                eprintln!("{err}");
            }
        }
        print_readout(&calc.readout(), json)?;
    }

    debug!(calculations = calc.tape().len(), "Session finished");
    Ok(())
}

fn print_readout(readout: &Readout, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(readout)?)?;
    } else {
        if !readout.history.is_empty() {
            writeln!(out, "  {}", readout.history)?;
        }
        writeln!(out, "{}", readout.value)?;
    }
    Ok(())
}

fn print_tape(calc: &Calculator) -> Result<()> {
    let mut out = io::stdout().lock();
    for calculation in calc.tape().entries() {
        writeln!(
            out,
            "{}  {}",
            calculation.timestamp.format("%H:%M:%S"),
            calculation.equation()
        )?;
    }
    writeln!(out, "{}", tape_summary(calc.tape()))?;
    Ok(())
}

fn tape_summary(tape: &Tape) -> String {
    match tape.duration() {
        None => "(tape is empty)".to_string(),
        Some(span) => format!("{} calculation(s) over {}s", tape.len(), span.as_secs()),
    }
}
