use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use gengo_client::api::{JobStatus, JobsQuery, LanguagePairsQuery};
use gengo_client::config::load_config;
use gengo_client::observability::logging::init_logging;
use gengo_client::{ClientConfig, GengoClient, LanguageCode};

#[derive(Parser)]
#[command(name = "gengo-cli")]
#[command(about = "Command-line client for the Gengo translation API", long_about = None)]
struct Cli {
    /// TOML config file; credentials come from GENGO_PUBLIC_KEY and
    /// GENGO_PRIVATE_KEY when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account spending stats
    Stats,
    /// Show the authenticated user
    Me,
    /// Show remaining credits
    Balance,
    /// List supported languages
    Languages,
    /// List language pairs and unit prices
    Pairs {
        /// Only pairs from this source language
        #[arg(long)]
        source: Option<String>,
    },
    /// List glossaries
    Glossaries,
    /// Show one glossary
    Glossary { id: i64 },
    /// Show one order
    Order { id: i64 },
    /// Show one job
    Job { id: i64 },
    /// List recent jobs
    Jobs {
        /// Filter by status (available, pending, reviewable, ...)
        #[arg(long)]
        status: Option<String>,
        /// Maximum number of jobs
        #[arg(long)]
        count: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::from_env()?,
    };
    init_logging(&config.observability.log_level);
    let client = GengoClient::new(config)?;

    match cli.command {
        Commands::Stats => print_json(&client.account_stats().await?)?,
        Commands::Me => print_json(&client.me().await?)?,
        Commands::Balance => print_json(&client.balance().await?)?,
        Commands::Languages => print_json(&client.languages().await?)?,
        Commands::Pairs { source } => {
            let mut query = LanguagePairsQuery::new();
            if let Some(source) = source {
                query = query.with_source(LanguageCode::new(source));
            }
            print_json(&client.language_pairs(&query).await?)?;
        }
        Commands::Glossaries => print_json(&client.list_glossaries().await?)?,
        Commands::Glossary { id } => print_json(&client.get_glossary(id).await?)?,
        Commands::Order { id } => print_json(&client.get_order(id).await?)?,
        Commands::Job { id } => print_json(&client.get_job(id).await?)?,
        Commands::Jobs { status, count } => {
            let mut query = JobsQuery::new();
            if let Some(status) = status {
                query = query.with_status(parse_status(&status)?);
            }
            if let Some(count) = count {
                query = query.with_count(count);
            }
            print_json(&client.get_jobs(&query).await?)?;
        }
    }

    Ok(())
}

fn parse_status(status: &str) -> Result<JobStatus, Box<dyn std::error::Error>> {
    match serde_json::from_value::<JobStatus>(serde_json::Value::String(status.to_lowercase()))? {
        JobStatus::Unknown => Err(format!("unknown job status '{}'", status).into()),
        known => Ok(known),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
