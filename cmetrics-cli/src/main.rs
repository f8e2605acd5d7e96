//! Command-line interface for cmetrics
//! This binary analyzes C/C++-like sources: it reports what each construct
//! is, dumps the scope tree, and tabulates per-function size and complexity.
//!
//! Usage:
//!   cmetrics `<path>` [--pattern `<glob>`]... [--format `<format>`]
//!
//! `<path>` may be a single file or a directory; directories are walked
//! recursively and filtered by the name patterns.

use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};

use cmetrics_analysis::{FileOutcome, FileResult, FileScanner, FileStore, MetricsExecutive};
use cmetrics_parser::FileAnalysis;

const DEFAULT_PATTERNS: &[&str] = &["*.h", "*.cpp"];

fn main() -> ExitCode {
    let matches = Command::new("cmetrics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Structural and size metrics for C/C++-like sources")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Source file or directory to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .short('p')
                .help("File name glob for directory scans (repeatable; default: *.h *.cpp)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("comments")
                .long("comments")
                .help("Let comment tokens through the lexer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Skip per-construct classification lines")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches.get_one::<String>("format").expect("has a default");
    if format != "text" && format != "json" {
        eprintln!("Unknown format '{}'; expected 'text' or 'json'", format);
        return ExitCode::FAILURE;
    }
    let patterns: Vec<&str> = match matches.get_many::<String>("pattern") {
        Some(values) => values.map(String::as_str).collect(),
        None => DEFAULT_PATTERNS.to_vec(),
    };

    let executive = MetricsExecutive::new()
        .return_comments(matches.get_flag("comments"))
        .quiet(matches.get_flag("quiet"));

    let target = Path::new(path);
    let outcomes = if target.is_dir() {
        let store = match build_store(target, &patterns) {
            Ok(store) => store,
            Err(message) => {
                eprintln!("{}", message);
                return ExitCode::FAILURE;
            }
        };
        if store.is_empty() {
            eprintln!("No files under {} match the patterns", target.display());
            return ExitCode::FAILURE;
        }
        executive.analyze_store(&store)
    } else {
        vec![executive.analyze_file(target)]
    };

    match format.as_str() {
        "json" => print_json(&outcomes),
        _ => print_text(&outcomes),
    }
}

fn build_store(root: &Path, patterns: &[&str]) -> Result<FileStore, String> {
    let mut scanner = FileScanner::new(root);
    for pattern in patterns {
        scanner
            .add_pattern(pattern)
            .map_err(|err| err.to_string())?;
    }
    Ok(scanner.scan())
}

fn print_json(outcomes: &[FileOutcome]) -> ExitCode {
    match serde_json::to_string_pretty(outcomes) {
        Ok(json) => {
            println!("{}", json);
            exit_status(outcomes)
        }
        Err(err) => {
            eprintln!("Error formatting output: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_text(outcomes: &[FileOutcome]) -> ExitCode {
    for outcome in outcomes {
        println!("==== {} ====", outcome.path.display());
        match &outcome.result {
            FileResult::Analyzed(analysis) => print_analysis(analysis),
            FileResult::OpenFailed => println!("  could not open file"),
            FileResult::Failed(message) => println!("  analysis failed: {}", message),
        }
        println!();
    }
    exit_status(outcomes)
}

fn print_analysis(analysis: &FileAnalysis) {
    for line in &analysis.reports {
        println!("{}", line);
    }
    if !analysis.reports.is_empty() {
        println!();
    }

    println!("scope tree:");
    for line in analysis.render_tree().lines() {
        println!("  {}", line);
    }

    let rows = analysis.function_table();
    if rows.is_empty() {
        println!("no functions found");
    } else {
        println!();
        println!("{:<30} {:>6} {:>6} {:>11}", "function", "start", "lines", "complexity");
        for row in rows {
            println!(
                "{:<30} {:>6} {:>6} {:>11}",
                row.name, row.start_line, row.line_count, row.complexity
            );
        }
    }

    println!();
    println!("file complexity: {}", analysis.root_complexity());

    let open = analysis.open_scopes();
    if open > 0 {
        println!();
        println!("warning: {} scope(s) left open at end of file", open);
    }
}

fn exit_status(outcomes: &[FileOutcome]) -> ExitCode {
    let all_analyzed = outcomes
        .iter()
        .all(|o| matches!(o.result, FileResult::Analyzed(_)));
    if all_analyzed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
