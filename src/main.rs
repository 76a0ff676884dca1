use anyhow::{Context, Result};
use clap::Parser;
use config::{Command, Config};
use history::memory::InMemoryHistory;
use history::synthetic::SyntheticHistory;
use history::HistoryProvider;
use logs::init_logs;
use presentation::{render_district_overview, render_prediction, render_trend_report};
use service::PredictionService;
use tracing::info;

mod config;
mod districts;
mod history;
mod logs;
mod models;
mod presentation;
mod service;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Parse the configuration.
    let config = Config::parse();

    // Initialize tracing logger.
    init_logs(config.log_format);

    let output = match &config.history_file {
        Some(path) => {
            let history = InMemoryHistory::from_json_file(path)?;
            run(PredictionService::new(history, config.history_months), &config.command).await?
        }
        None => {
            info!("No history file configured, synthesizing price history");
            let history = SyntheticHistory::new(config.seed);
            run(PredictionService::new(history, config.history_months), &config.command).await?
        }
    };

    println!("{}", output);

    Ok(())
}

async fn run<H: HistoryProvider>(service: PredictionService<H>, command: &Command) -> Result<String> {
    let output = match command {
        Command::Trends {
            district,
            rooms,
            months,
        } => {
            let points = service
                .get_trend_report(*district, *rooms, *months)
                .await
                .context("Building trend report")?;
            render_trend_report(&points)?
        }
        Command::Predict { district, rooms } => {
            let prediction = service
                .get_prediction(*district, *rooms)
                .await
                .context("Building prediction")?;
            render_prediction(&prediction)?
        }
        Command::Districts => {
            let overview = service
                .get_district_overview()
                .await
                .context("Building district overview")?;
            render_district_overview(&overview)?
        }
    };

    Ok(output)
}
