//! Command implementations for the Sieva CLI.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;

use crate::analysis::LexicalAnalyzer;
use crate::cli::args::{Command, OutputFormat, ScanArgs, SievaArgs, TopArgs};
use crate::cli::output::{CountReport, TermCount, TopReport, print_json};
use crate::error::{Result, SievaError};
use crate::util::Stopwatch;

/// Execute a CLI command.
pub fn execute_command(args: SievaArgs) -> Result<()> {
    match &args.command {
        Command::Count(scan_args) => count_terms(scan_args.clone(), &args),
        Command::Terms(scan_args) => print_terms(scan_args.clone(), &args),
        Command::Top(top_args) => top_terms(top_args.clone(), &args),
    }
}

/// Build an analyzer from the optional stop-word file.
fn build_analyzer(scan: &ScanArgs, cli_args: &SievaArgs) -> Result<LexicalAnalyzer> {
    let mut analyzer = LexicalAnalyzer::new();

    if let Some(stop_words) = &scan.stop_words {
        if cli_args.verbosity() > 1 {
            println!("Loading stop words from: {}", stop_words.display());
        }

        let mut sw = Stopwatch::start("dfa build");
        analyzer.set_stop_words(stop_words)?;
        sw.stop();

        if cli_args.verbosity() > 1 {
            println!(
                "Automaton: {} states, {} arcs",
                analyzer.dfa().state_count(),
                analyzer.dfa().arc_count()
            );
        }
    }

    Ok(analyzer)
}

fn open_text(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| SievaError::file_unreadable(path, e))
}

/// Count the accepted terms in a text file.
fn count_terms(args: ScanArgs, cli_args: &SievaArgs) -> Result<()> {
    let analyzer = build_analyzer(&args, cli_args)?;
    let file = open_text(&args.text)?;

    let mut sw = Stopwatch::start("text scanning");
    let start = Instant::now();
    let mut terms: u64 = 0;
    for term in analyzer.terms(file) {
        term?;
        terms += 1;
    }
    let duration_ms = start.elapsed().as_millis() as u64;
    sw.stop();

    let report = CountReport {
        path: args.text.display().to_string(),
        terms,
        duration_ms,
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&report, cli_args)?,
        OutputFormat::Human => println!("{} terms found.", report.terms),
    }

    Ok(())
}

/// Print every accepted term, one per line.
fn print_terms(args: ScanArgs, cli_args: &SievaArgs) -> Result<()> {
    let analyzer = build_analyzer(&args, cli_args)?;
    let file = open_text(&args.text)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            for term in analyzer.terms(file) {
                println!("{}", term?);
            }
        }
        OutputFormat::Json => {
            let terms: Result<Vec<String>> = analyzer.terms(file).collect();
            print_json(&terms?, cli_args)?;
        }
    }

    Ok(())
}

/// Show the most frequent accepted terms.
fn top_terms(args: TopArgs, cli_args: &SievaArgs) -> Result<()> {
    let analyzer = build_analyzer(&args.scan, cli_args)?;
    let file = open_text(&args.scan.text)?;

    let mut sw = Stopwatch::start("text scanning");
    let mut counts: AHashMap<String, u64> = AHashMap::new();
    for term in analyzer.terms(file) {
        *counts.entry(term?).or_insert(0) += 1;
    }
    sw.stop();

    let mut entries: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    // Order by descending count, ties alphabetically.
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    entries.truncate(args.limit);

    let report = TopReport {
        path: args.scan.text.display().to_string(),
        entries,
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&report, cli_args)?,
        OutputFormat::Human => {
            for entry in &report.entries {
                println!("{:>10}  {}", entry.count, entry.term);
            }
        }
    }

    Ok(())
}
