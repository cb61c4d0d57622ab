//! Pluck CLI - resolve a path against a JSON document

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pluck::{resolve, resolve_or, Value};

#[derive(Parser)]
#[command(name = "pluck")]
#[command(about = "Pluck - resolve a nested path against a JSON document")]
#[command(version)]
struct Cli {
    /// Path to resolve, e.g. "a.b.c", "items[0].name" or "users.0.email"
    path: String,

    /// JSON file to read (stdin when omitted)
    file: Option<PathBuf>,

    /// Fallback value (JSON) substituted when the path misses
    #[arg(short, long)]
    default: Option<String>,

    /// Suppress the miss diagnostic on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let raw = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let doc: serde_json::Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
    let root = Value::from(doc);

    let default = cli
        .default
        .as_deref()
        .map(|text| {
            serde_json::from_str::<serde_json::Value>(text)
                .map(Value::from)
                .context("--default is not valid JSON")
        })
        .transpose()?;

    let result = match default {
        Some(fallback) => resolve_or(&root, cli.path.as_str(), fallback),
        None => resolve(&root, cli.path.as_str()),
    };

    if result.is_undefined() {
        if !cli.quiet {
            eprintln!("{} no value at '{}'", "Miss:".yellow().bold(), cli.path);
        }
        return Ok(ExitCode::from(1));
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(ExitCode::SUCCESS)
}
