use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use rxscout_core::{Config, EvidenceGatherer, Pipeline};

#[derive(Parser)]
#[command(name = "rxscout")]
#[command(about = "Drug repurposing research pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a drug's repurposing potential and print the report
    Run {
        /// Drug name (e.g. "metformin")
        #[arg(required = true)]
        drug: Vec<String>,
        /// Print the raw JSON report instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Gather and print the raw evidence for a drug (debugging aid)
    Evidence {
        /// Drug name
        #[arg(required = true)]
        drug: Vec<String>,
    },
    /// Print the default configuration
    Config,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rxscout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { drug, json } => {
            let drug_name = drug.join(" ");
            let config = load_config();

            let pipeline = match Pipeline::from_config(&config) {
                Ok(pipeline) => pipeline,
                Err(e) => {
                    eprintln!("Failed to set up LLM provider: {e}");
                    std::process::exit(1);
                }
            };

            let spinner = spinner(&format!("Researching {drug_name}..."));

            match pipeline.run(&drug_name).await {
                Ok(report) => {
                    spinner.finish_and_clear();
                    if json {
                        match serde_json::to_string_pretty(&report) {
                            Ok(rendered) => println!("{rendered}"),
                            Err(e) => {
                                eprintln!("Failed to serialize report: {e}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        println!("{}", report.to_markdown());
                    }
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    if e.is_rate_limited() {
                        print_rate_limit_help();
                    }
                    eprintln!("Research failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Evidence { drug } => {
            let drug_name = drug.join(" ");
            let config = load_config();

            let gatherer = EvidenceGatherer::new(&config.evidence);
            let evidence = gatherer.gather(&drug_name).await;

            println!("Publications: {}", evidence.publications.len());
            for publication in &evidence.publications {
                println!("  - {} ({})", publication.title, publication.year);
            }
            println!("Trials: {}", evidence.trials.len());
            for trial in &evidence.trials {
                println!("  - {} ({}, {})", trial.title, trial.phase, trial.status);
            }
            println!("Patents: {}", evidence.patents.len());
            for patent in &evidence.patents {
                println!("  - {} ({})", patent.title, patent.applicant);
            }
        }

        Commands::Config => {
            println!("{}", Config::default_config_string());
        }
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Printed when the one-shot research synthesis dies on a provider rate
/// limit; per-indication rate limits degrade to fallback records instead.
fn print_rate_limit_help() {
    eprintln!("============================================================");
    eprintln!("RATE LIMIT EXCEEDED");
    eprintln!("============================================================");
    eprintln!("The model provider rejected the request with HTTP 429.");
    eprintln!("Options:");
    eprintln!("  1. Add credits to your provider account");
    eprintln!("  2. Wait for the rate limit to reset");
    eprintln!("  3. Switch to a different model (see `rxscout config`)");
    eprintln!("============================================================");
}
