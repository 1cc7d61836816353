//! Demonstration/debugging harness over the embeddable `repraxis-db` crate.
//!
//! Loads a file of newline-separated sentences into a fresh [`Database`],
//! runs one or more `--where` clauses against it, and prints the resulting
//! bindings as JSON. Not part of the embeddable core — an embedding host is
//! expected to drive `repraxis-db` directly instead.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use repraxis_db::{DBQuery, Database};

/// Run exclusion-logic queries against a file of Repraxis sentences.
#[derive(Parser, Debug)]
#[command(name = "repraxis", version, about)]
struct Cli {
    /// Path to a file of newline-separated facts to insert before querying.
    facts_file: PathBuf,

    /// A query clause; may be repeated to build a multi-clause query.
    #[arg(long = "where")]
    where_clauses: Vec<String>,

    /// Restrict the printed bindings to these variable names; may be repeated.
    #[arg(long = "var")]
    vars: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let contents = fs::read_to_string(&cli.facts_file)
        .map_err(|e| format!("reading {:?}: {e}", cli.facts_file))?;

    let mut db = Database::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        db.insert(line).map_err(|e| format!("inserting {line:?}: {e}"))?;
    }

    let query = DBQuery::from_clauses(cli.where_clauses.clone());
    let result = query.run(&db, HashMap::new()).map_err(|e| e.to_string())?;

    let result = if cli.vars.is_empty() {
        result
    } else {
        let names: Vec<&str> = cli.vars.iter().map(String::as_str).collect();
        result.limit_to_vars(&names)
    };

    serde_json::to_string(&result).map_err(|e| format!("serializing result: {e}"))
}
