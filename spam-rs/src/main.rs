//! spam-rs command line front-end

use anyhow::Context;
use clap::{Parser, Subcommand};
use spam_rs::spam::{classify_all_concurrent, BatchResult};
use spam_rs::{report, Config, SpamClassifier};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spam-rs", version, about = "Classify email text as spam or not spam")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "SPAM_RS_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single email text ("-" reads stdin)
    Analyze { text: String },
    /// Analyze many emails, one per line
    Batch {
        /// Input file (stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Number of concurrent workers (overrides config)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Show the trigger vocabulary and common spam patterns
    Patterns,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spam_rs={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

fn print_batch(result: &BatchResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        for entry in &result.entries {
            println!("{}", report::render_entry(entry));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => Config::default(),
    };
    config.validate()?;

    init_logging(&config);
    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));

    let classifier = SpamClassifier::new(config.pattern_set()?)?;
    info!("Loaded {} trigger patterns", classifier.patterns().len());

    match cli.command {
        Command::Analyze { text } => {
            let text = if text == "-" { read_stdin()? } else { text };
            let verdict = classifier.classify(&text)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                print!("{}", report::render_verdict(text.trim(), &verdict));
            }
        }
        Command::Batch { file, workers } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Reading {}", path.display()))?,
                None => read_stdin()?,
            };
            let workers = workers.unwrap_or(config.batch.workers);

            let result = if workers > 1 {
                classify_all_concurrent([input], classifier.shared_patterns(), workers).await
            } else {
                classifier.classify_all(&input)
            };
            print_batch(&result, cli.json)?;
        }
        Command::Patterns => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(classifier.patterns())?);
            } else {
                print!("{}", report::render_patterns(classifier.patterns()));
            }
        }
    }

    Ok(())
}
