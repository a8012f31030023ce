use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use rdcalc::calc_engine::{evaluate_traced, EvaluationTrace};
use tracing::debug;

use crate::input_limit::check_input_len;

pub fn run_prompt(details: bool, keep_going: bool) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let failed = prompt_loop(stdin.lock(), stdout.lock(), details, keep_going)?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Evaluates one line and writes `Result: n` (plus steps when `details` is
/// set) or `Error: message`. Returns whether the line failed.
pub fn evaluate_line<W: Write>(out: &mut W, line: &str, details: bool) -> io::Result<bool> {
    let line = match check_input_len(line) {
        Ok(line) => line,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(true);
        }
    };

    let mut trace = EvaluationTrace::new(details);
    match evaluate_traced(line, &mut trace) {
        Ok(value) => {
            writeln!(out, "Result: {}", value)?;
            write_steps(out, &trace)?;
            Ok(false)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(true)
        }
    }
}

/// Prompts for and evaluates lines until the first one is handled, or until
/// end of input when `keep_going` is set. Returns whether any line failed.
fn prompt_loop<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    details: bool,
    keep_going: bool,
) -> Result<bool> {
    let mut failed = false;

    loop {
        write!(out, "Enter an expression: ")?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input.")?;
        if read == 0 {
            if keep_going {
                writeln!(out)?;
                return Ok(failed);
            }
            bail!("Failed to read input.");
        }

        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        debug!(len = line.len(), "read line");

        if evaluate_line(&mut out, line, details)? {
            failed = true;
        }

        if !keep_going {
            return Ok(failed);
        }
    }
}

fn write_steps<W: Write>(out: &mut W, trace: &EvaluationTrace) -> io::Result<()> {
    if !trace.detailed_mode || trace.steps.is_empty() {
        return Ok(());
    }
    writeln!(out, "Step-by-step evaluation:")?;
    for (i, step) in trace.steps.iter().enumerate() {
        writeln!(
            out,
            "  Step {}: {} = {}",
            i + 1,
            step.operation,
            step.result
        )?;
    }
    Ok(())
}
