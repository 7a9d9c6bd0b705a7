//! Command implementations for the misprint CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::corrector::{Corrector, CorrectorConfig};
use crate::spelling::index::MisprintIndex;
use crate::spelling::loader::{add_line, load_from_file, load_words, TERMINATOR};
use crate::spelling::text::correct_line;

type DynCorrector = Corrector<Box<dyn MisprintIndex>>;

/// Execute a CLI command.
pub fn execute_command(args: MisprintArgs) -> Result<()> {
    let config = args.corrector_config()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    match &args.command {
        Command::Correct(correct_args) => run_correct(
            correct_args,
            &config,
            &args,
            &mut stdin.lock(),
            &mut stdout.lock(),
        ),
        Command::Lookup(lookup_args) => {
            run_lookup(lookup_args, &config, &args, &mut stdout.lock())
        }
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Build the dictionary, then correct the `--text` lines or, without any,
/// lines from `input` until the terminator or end of input.
pub fn run_correct<R: BufRead, W: Write>(
    correct_args: &CorrectArgs,
    config: &CorrectorConfig,
    cli_args: &MisprintArgs,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let corrector = match File::open(&correct_args.dictionary) {
        Ok(file) => {
            let mut corrector = Corrector::with_config(config)?;
            let added = load_words(&mut corrector, BufReader::new(file), None)?;
            info!(
                "loaded {} words from {}",
                added,
                correct_args.dictionary.display()
            );
            finish_loading(corrector, config)
        }
        Err(e) => {
            warn!(
                "cannot open {}: {}; reading words from stdin",
                correct_args.dictionary.display(),
                e
            );
            let corrector = read_dictionary_interactive(config, cli_args, input)?;
            finish_loading(corrector, config)
        }
    };

    if !correct_args.text.is_empty() {
        for line in &correct_args.text {
            correct_and_write(&corrector, line, cli_args, out)?;
        }
        return Ok(());
    }

    if cli_args.verbosity() > 0 {
        eprintln!("Enter text to correct, '{TERMINATOR}' to finish:");
    }
    for line in input.lines() {
        let line = line?;
        if line == TERMINATOR {
            break;
        }
        correct_and_write(&corrector, &line, cli_args, out)?;
    }
    out.flush()?;
    Ok(())
}

/// Correct each word given on the command line.
pub fn run_lookup<W: Write>(
    lookup_args: &LookupArgs,
    config: &CorrectorConfig,
    cli_args: &MisprintArgs,
    out: &mut W,
) -> Result<()> {
    let corrector = load_dictionary(&lookup_args.dictionary, config)?;

    let start = Instant::now();
    let corrections = lookup_args
        .words
        .iter()
        .map(|word| corrector.correct(word))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "corrected {} words in {:?}",
        corrections.len(),
        start.elapsed()
    );

    write_lookup(out, &LookupResults { corrections }, cli_args)
}

/// Show dictionary statistics.
fn show_stats(stats_args: &StatsArgs, config: &CorrectorConfig, cli_args: &MisprintArgs) -> Result<()> {
    let corrector = load_dictionary(&stats_args.dictionary, config)?;
    output_result("Dictionary statistics", &corrector.stats(), cli_args)
}

/// Build a corrector from a word list file that must exist.
pub fn load_dictionary(path: &Path, config: &CorrectorConfig) -> Result<DynCorrector> {
    let mut corrector = Corrector::with_config(config)?;
    let start = Instant::now();
    load_from_file(&mut corrector, path)?;
    info!("dictionary built in {:?}", start.elapsed());
    Ok(finish_loading(corrector, config))
}

fn finish_loading(mut corrector: DynCorrector, config: &CorrectorConfig) -> DynCorrector {
    if config.compact {
        corrector.compact();
    }
    corrector
}

/// Read dictionary lines from `input` until the terminator, reporting how
/// many words each line added.
fn read_dictionary_interactive<R: BufRead>(
    config: &CorrectorConfig,
    cli_args: &MisprintArgs,
    input: &mut R,
) -> Result<DynCorrector> {
    let mut corrector = Corrector::with_config(config)?;
    if cli_args.verbosity() > 0 {
        eprintln!("Enter dictionary words, '{TERMINATOR}' to finish:");
    }

    for line in input.lines() {
        let line = line?;
        if line == TERMINATOR {
            break;
        }
        let added = add_line(&mut corrector, &line)?;
        if cli_args.verbosity() > 0 {
            eprintln!("Added {added} words");
        }
    }

    info!("dictionary holds {} words", corrector.words_count());
    Ok(corrector)
}

fn correct_and_write<W: Write>(
    corrector: &DynCorrector,
    line: &str,
    cli_args: &MisprintArgs,
    out: &mut W,
) -> Result<()> {
    let corrected = CorrectedLine {
        input: line.to_string(),
        output: correct_line(corrector, line)?,
    };
    write_line(out, &corrected, cli_args)
}
