//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::SievaArgs;
use crate::error::Result;

/// Result structure for the `count` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountReport {
    pub path: String,
    pub terms: u64,
    pub duration_ms: u64,
}

/// One entry of a `top` report.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

/// Result structure for the `top` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopReport {
    pub path: String,
    pub entries: Vec<TermCount>,
}

/// Serialize a report to stdout as JSON, honoring `--pretty`.
pub fn print_json<T: Serialize>(value: &T, args: &SievaArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", rendered.map_err(anyhow::Error::from)?);
    Ok(())
}
