#[cfg(any(feature = "tui", feature = "line"))]
mod input_line;
mod input_limit;
#[cfg(feature = "line")]
mod line_mode;
mod prompt_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(any(feature = "tui", feature = "line"))]
mod session;
#[cfg(feature = "tui")]
mod tui_mode;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Integer calculator: + - * / and parentheses.
#[derive(Debug, Parser)]
#[command(name = "rdcalc", version, about)]
struct Args {
    /// Evaluate this expression once and exit.
    expression: Option<String>,

    /// Front end to run when no expression is given.
    #[arg(short, long, value_enum, default_value_t = Mode::default())]
    mode: Mode,

    /// Print the step-by-step evaluation after each result.
    #[arg(short, long)]
    details: bool,

    /// Prompt mode: ask again after an error instead of exiting.
    #[arg(long)]
    keep_going: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Read one line from stdin, print the result.
    Prompt,
    /// Raw terminal line editor with history.
    Line,
    /// Full-screen terminal interface.
    Tui,
}

impl Default for Mode {
    fn default() -> Self {
        if cfg!(feature = "tui") {
            Mode::Tui
        } else {
            Mode::Prompt
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.expression.is_some() || args.mode != Mode::Tui {
        init_logging();
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    if let Some(expression) = args.expression {
        return run_once(&mut io::stdout().lock(), &expression, args.details);
    }

    match args.mode {
        Mode::Prompt => prompt_mode::run_prompt(args.details, args.keep_going),
        Mode::Line => run_line(),
        Mode::Tui => run_tui(),
    }
}

fn run_once<W: Write>(out: &mut W, expression: &str, details: bool) -> Result<ExitCode> {
    let failed = prompt_mode::evaluate_line(out, expression, details)?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(feature = "line")]
fn run_line() -> Result<ExitCode> {
    line_mode::run_line()?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(not(feature = "line"))]
fn run_line() -> Result<ExitCode> {
    anyhow::bail!("line mode is not available: rebuild with `--features line`")
}

#[cfg(feature = "tui")]
fn run_tui() -> Result<ExitCode> {
    tui_mode::run_tui()?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(not(feature = "tui"))]
fn run_tui() -> Result<ExitCode> {
    anyhow::bail!("tui mode is not available: rebuild with `--features tui`")
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
