//! Precis: print an extractive summary of a text document.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use precis_core::SummarizerConfig;
use precis_summary::{SummaryEngine, ALL};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Sentences,
    Paragraphs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Records,
    Text,
    Json,
}

#[derive(Debug)]
struct Options {
    unit: Unit,
    limit: i64,
    output: Output,
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

fn print_usage() {
    println!("precis: extractive text summarizer");
    println!();
    println!("Usage: precis [options] [FILE]");
    println!();
    println!("Reads FILE (or stdin when FILE is omitted or '-').");
    println!();
    println!("Options:");
    println!("  --sentences N     Top N sentences by rank (N <= 0: all, in reading order)");
    println!("  --paragraphs N    Top N paragraphs by rank (N <= 0: all, in reading order)");
    println!("  --text            Print the summary as plain text in reading order");
    println!("  --json            Print records as JSON");
    println!("  --config FILE     Load summarizer settings from a JSON file");
    println!("  help              Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}. Use 'precis help' for usage.", message);
    std::process::exit(2);
}

fn parse_limit(value: Option<&String>, flag: &str) -> i64 {
    match value.map(|v| v.parse::<i64>()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => usage_error(&format!("{} expects an integer", flag)),
        None => usage_error(&format!("{} expects a value", flag)),
    }
}

/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Option<Options> {
    let mut options = Options {
        unit: Unit::Sentences,
        limit: ALL,
        output: Output::Records,
        config: None,
        input: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => return None,
            "--sentences" => {
                options.unit = Unit::Sentences;
                options.limit = parse_limit(iter.next(), "--sentences");
            }
            "--paragraphs" => {
                options.unit = Unit::Paragraphs;
                options.limit = parse_limit(iter.next(), "--paragraphs");
            }
            "--text" => options.output = Output::Text,
            "--json" => options.output = Output::Json,
            "--config" => match iter.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => usage_error("--config expects a path"),
            },
            "-" => options.input = None,
            other if other.starts_with("--") => usage_error(&format!("Unknown option: {}", other)),
            path => {
                if options.input.is_some() {
                    usage_error("Only one input file may be given");
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }

    Some(options)
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(options) = parse_args(&args) else {
        print_usage();
        return Ok(());
    };

    let config = match &options.config {
        Some(path) => SummarizerConfig::from_json_file(path)
            .with_context(|| format!("Invalid config {}", path.display()))?,
        None => SummarizerConfig::from_env(),
    };

    let text = read_input(options.input.as_ref())?;
    let engine = SummaryEngine::with_config(&text, &config)?;
    info!(
        "Summarized {} paragraphs, {} sentences",
        engine.paragraph_count(),
        engine.sentence_count()
    );

    match (options.unit, options.output) {
        (Unit::Sentences, Output::Text) => println!("{}", engine.sentence_summary_text(options.limit)),
        (Unit::Paragraphs, Output::Text) => {
            println!("{}", engine.paragraph_summary_text(options.limit))
        }
        (Unit::Sentences, Output::Json) => println!(
            "{}",
            serde_json::to_string_pretty(&engine.sentence_summary(options.limit))?
        ),
        (Unit::Paragraphs, Output::Json) => println!(
            "{}",
            serde_json::to_string_pretty(&engine.paragraph_summary(options.limit))?
        ),
        (Unit::Sentences, Output::Records) => {
            for sentence in engine.sentence_summary(options.limit) {
                println!("{}", sentence);
            }
        }
        (Unit::Paragraphs, Output::Records) => {
            for paragraph in engine.paragraph_summary(options.limit) {
                println!("{}", paragraph);
            }
        }
    }

    Ok(())
}
