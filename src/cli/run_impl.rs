use std::fs;
use std::io::{self, Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use cliutil::progress::{finish_progress, report_progress};
use cliutil::usage::{format_usage, strip_leading_whitespace};
use cliutil::{FatalError, current_program_name, program_name};

use super::{ErrorArgs, NameArgs, ProgressArgs, UsageArgs};

pub fn run_name(args: &NameArgs, verbose: u8) -> Result<()> {
    let name = match args.script.as_deref() {
        Some(script) => {
            if verbose > 0 {
                eprintln!("Resolving name of: {}", script.display());
            }
            program_name(script)
        }
        None => current_program_name().to_string(),
    };
    println!("{name}");
    Ok(())
}

pub fn run_usage(args: &UsageArgs, verbose: u8) -> Result<()> {
    let description = if let Some(ref text) = args.description {
        if verbose > 0 {
            eprintln!("Description source: --description");
        }
        text.clone()
    } else if let Some(ref path) = args.description_file {
        if verbose > 0 {
            eprintln!("Description source: {}", path.display());
        }
        fs::read_to_string(path)
            .with_context(|| format!("read description file: {}", path.display()))?
    } else {
        if verbose > 0 {
            eprintln!("Description source: stdin");
        }
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read description from stdin")?;
        buf
    };

    if verbose > 0 {
        eprintln!("Program name: {}", program_name(&args.script));
    }
    if verbose > 1 {
        eprintln!(
            "Description lines: {} in, {} after stripping",
            description.lines().count(),
            strip_leading_whitespace(&description).lines().count()
        );
    }

    let text = format_usage(&args.script, &description);
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("write usage")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

pub fn run_progress(args: &ProgressArgs, verbose: u8) -> Result<()> {
    if verbose > 0 {
        eprintln!("Reporting {} steps as {:?}", args.total, args.label);
    }
    let delay = Duration::from_millis(args.delay_ms);
    let started = Instant::now();

    for i in 0..args.total {
        report_progress(&args.label, i, args.total);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    finish_progress();

    if verbose > 1 {
        eprintln!("Progress finished in {:.2?}", started.elapsed());
    }
    Ok(())
}

pub fn run_error(args: &ErrorArgs, verbose: u8) -> Result<()> {
    if verbose > 0 {
        eprintln!("Reporting fatal error for: {}", args.script.display());
    }
    Err(FatalError::new(&args.script, args.message.clone()).into())
}
