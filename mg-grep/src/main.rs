use std::{
    io::{self, Read},
    process,
};

use anyhow::Context;
use clap::Parser;
use log::debug;
use mg_matcher::matcher::LineMatcher;

/// Match a single line of standard input against an extended-regex subset
/// pattern.
///
/// The input is read in full and matched as one line, exactly as received
/// (a trailing newline is part of the line; use `printf`/`echo -n` with
/// `$`-anchored patterns). Exits 0 on a match, 1 on no match, 2 on a usage
/// or read error.
#[derive(clap::Parser, Debug)]
#[command(name = "mg-grep", version)]
struct Args {
    /// Interpret PATTERN as an extended-regex subset expression.
    #[arg(short = 'E', value_name = "PATTERN")]
    pattern: String,

    /// Match ASCII letters case-insensitively.
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Increase stderr log verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    let outcome = run(&args);
    if let Err(e) = &outcome {
        eprintln!("error: {e:#}");
    }
    process::exit(exit_code(&outcome));
}

fn run(args: &Args) -> anyhow::Result<bool> {
    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose as usize)
        .init()?;

    let mut line = Vec::new();
    io::stdin()
        .read_to_end(&mut line)
        .context("read input text")?;

    let matcher = LineMatcher::builder(&args.pattern)
        .case_insensitive(args.ignore_case)
        .build();
    let matched = matcher.is_match(&line);
    debug!(
        "pattern {:?} against {} input byte(s): {}",
        args.pattern,
        line.len(),
        if matched { "match" } else { "no match" },
    );
    Ok(matched)
}

// 0 selected, 1 not selected, 2 error; clap's own usage errors also exit 2.
fn exit_code(outcome: &anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}
