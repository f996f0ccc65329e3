//! Command-line interface for Observable Markdown tooling.
//! This binary classifies Markdown files and emits the authoring catalog and starter page
//! for scripted use outside an editor.
//!
//! Usage:
//!   obsmark detect `<path>`    - Classify a file (exit code 1 when plain Markdown)
//!   obsmark suggest `<path>`   - Print the completion catalog as JSON when the file classifies
//!   obsmark new [path]         - Write the starter document (`-` for stdout)

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = Command::new("obsmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for working with Observable Markdown documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("detect")
                .about("Classify a Markdown file as Observable Markdown or plain Markdown")
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("suggest")
                .about("Print the completion catalog as JSON when the file classifies")
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("new")
                .about("Write the starter document")
                .arg(
                    Arg::new("path")
                        .help("Target path; `-` writes to stdout, defaults to the configured filename")
                        .index(1),
                ),
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("detect", sub)) => {
            handle_detect(sub.get_one::<String>("path").expect("path is required"))
        }
        Some(("suggest", sub)) => {
            handle_suggest(sub.get_one::<String>("path").expect("path is required"))
        }
        Some(("new", sub)) => handle_new(sub.get_one::<String>("path").map(String::as_str)),
        _ => unreachable!("subcommand is required"),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Classify the file; the exit code mirrors the result so shell pipelines
/// can branch on it.
fn handle_detect(path: &str) -> Result<ExitCode> {
    let text = read_document(path)?;
    if obsmark_analysis::detect(&text) {
        println!("observable markdown");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("plain markdown");
        Ok(ExitCode::FAILURE)
    }
}

fn handle_suggest(path: &str) -> Result<ExitCode> {
    let text = read_document(path)?;
    if obsmark_analysis::detect(&text) {
        let json = serde_json::to_string_pretty(obsmark_analysis::SUGGESTIONS)
            .context("failed to serialize the suggestion catalog")?;
        println!("{json}");
    } else {
        println!("[]");
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_new(path: Option<&str>) -> Result<ExitCode> {
    let template = obsmark_analysis::new_document_template();
    if path == Some("-") {
        print!("{template}");
        return Ok(ExitCode::SUCCESS);
    }

    let configured;
    let target = match path {
        Some(path) => path,
        None => {
            let config =
                obsmark_config::load_defaults().context("failed to load configuration")?;
            configured = config.template.default_filename;
            configured.as_str()
        }
    };

    if Path::new(target).exists() {
        bail!("refusing to overwrite existing file {target}");
    }
    fs::write(target, template).with_context(|| format!("failed to write {target}"))?;
    eprintln!("Created {target}");
    Ok(ExitCode::SUCCESS)
}

fn read_document(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}
